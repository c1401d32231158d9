//! Constants for the interactive TUI module
//!
//! This module centralizes magic numbers and configuration values
//! to improve maintainability and make the codebase more self-documenting.

// Timing constants
/// Message auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

// UI Layout constants
/// Height of the navigation bar (logo, search input, result count)
pub const NAV_BAR_HEIGHT: u16 = 3;

/// Width of the logo column in the navigation bar
pub const LOGO_WIDTH: u16 = 14;

/// Width of the result count column in the navigation bar
pub const RESULT_COUNT_WIDTH: u16 = 22;

/// Height of the watched summary block
pub const SUMMARY_HEIGHT: u16 = 4;

/// Height of the status line
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Page size for PageUp/PageDown navigation
pub const PAGE_SIZE: usize = 10;

// Help dialog dimensions
/// Maximum width for help dialog
pub const HELP_DIALOG_MAX_WIDTH: u16 = 70;

/// Minimum margin around help dialog
pub const HELP_DIALOG_MARGIN: u16 = 4;

// Messages
pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";

pub const RATING_REQUIRED_MESSAGE: &str = "Choose a rating (1-10) before adding";

pub const DETAIL_LOAD_FAILED_MESSAGE: &str = "Could not load movie details!";
