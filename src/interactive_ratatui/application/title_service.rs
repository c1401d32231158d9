use crate::config::DEFAULT_TITLE;
use crossterm::{execute, terminal::SetTitle};
use std::io;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Host surface that displays a window title
pub trait TitleSurface {
    fn set_title(&mut self, title: &str);
}

/// Sets the title of the hosting terminal emulator.
#[derive(Default)]
pub struct TerminalTitle;

impl TitleSurface for TerminalTitle {
    fn set_title(&mut self, title: &str) {
        if let Err(e) = execute!(io::stdout(), SetTitle(title)) {
            warn!("Failed to set terminal title: {e}");
        }
    }
}

/// Records every title written, for inspection in tests.
#[derive(Clone, Default)]
pub struct RecordingTitle {
    history: Arc<Mutex<Vec<String>>>,
}

impl RecordingTitle {
    pub fn history(&self) -> Vec<String> {
        self.history.lock().map(|h| h.clone()).unwrap_or_default()
    }

    pub fn current(&self) -> Option<String> {
        self.history().last().cloned()
    }
}

impl TitleSurface for RecordingTitle {
    fn set_title(&mut self, title: &str) {
        if let Ok(mut history) = self.history.lock() {
            history.push(title.to_string());
        }
    }
}

/// Scoped ownership of the window title.
///
/// `sync` claims the title for one movie; leaving (explicitly, by syncing
/// a different movie, or by dropping the scope) always restores
/// [`DEFAULT_TITLE`].
pub struct TitleScope<S: TitleSurface> {
    surface: S,
    active: Option<String>,
}

impl<S: TitleSurface> TitleScope<S> {
    pub fn new(mut surface: S) -> Self {
        surface.set_title(DEFAULT_TITLE);
        Self {
            surface,
            active: None,
        }
    }

    /// Makes the title reflect `desired`, a `(movie id, movie title)` pair,
    /// or the default title when `None`.
    pub fn sync(&mut self, desired: Option<(&str, &str)>) {
        match desired {
            Some((id, title)) => {
                if self.active.as_deref() == Some(id) {
                    return;
                }
                self.leave();
                self.surface.set_title(&format!("Movie | {title}"));
                self.active = Some(id.to_string());
            }
            None => self.leave(),
        }
    }

    pub fn leave(&mut self) {
        if self.active.take().is_some() {
            self.surface.set_title(DEFAULT_TITLE);
        }
    }
}

impl<S: TitleSurface> Drop for TitleScope<S> {
    fn drop(&mut self) {
        self.leave();
    }
}
