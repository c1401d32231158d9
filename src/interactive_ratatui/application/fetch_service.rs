use crate::interactive_ratatui::domain::models::{FetchOutcome, FetchResponse};
use crate::provider::MovieProvider;
use std::future::Future;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Runs provider requests on the tokio runtime and reports completions
/// back to the UI thread over a channel.
///
/// Every request is spawned under its own [`CancellationToken`]. Cancelling
/// the token aborts the request if it is still running, and marks any
/// response already queued as stale.
pub struct FetchService {
    provider: Arc<dyn MovieProvider>,
    runtime: Handle,
    sender: Sender<FetchResponse>,
}

impl FetchService {
    pub fn new(provider: Arc<dyn MovieProvider>, runtime: Handle) -> (Self, Receiver<FetchResponse>) {
        let (sender, receiver) = mpsc::channel();
        (
            Self {
                provider,
                runtime,
                sender,
            },
            receiver,
        )
    }

    pub fn search(&self, query: String) -> CancellationToken {
        let provider = self.provider.clone();
        self.spawn(async move {
            let result = provider.search(&query).await;
            FetchOutcome::Search { query, result }
        })
    }

    pub fn load_details(&self, id: String) -> CancellationToken {
        let provider = self.provider.clone();
        self.spawn(async move {
            let result = provider.details(&id).await;
            FetchOutcome::Details { id, result }
        })
    }

    fn spawn<F>(&self, request: F) -> CancellationToken
    where
        F: Future<Output = FetchOutcome> + Send + 'static,
    {
        let token = CancellationToken::new();
        let task_token = token.clone();
        let sender = self.sender.clone();

        self.runtime.spawn(async move {
            tokio::select! {
                _ = task_token.cancelled() => {
                    debug!("request cancelled before completion");
                }
                outcome = request => {
                    // The receiver is gone once the UI has shut down
                    let _ = sender.send(FetchResponse { token: task_token, outcome });
                }
            }
        });

        token
    }
}
