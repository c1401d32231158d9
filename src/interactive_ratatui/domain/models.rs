use crate::provider::ProviderResult;
use crate::schemas::{MovieDetail, MovieSummary};
use tokio_util::sync::CancellationToken;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Mode {
    Search,
    Watched,
    Help,
}

/// The two collapsible boxes of the main area
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Panel {
    Results,
    Watched,
}

// Completion of a provider request, tagged with the token it was spawned under
#[derive(Debug)]
pub enum FetchOutcome {
    Search {
        query: String,
        result: ProviderResult<Vec<MovieSummary>>,
    },
    Details {
        id: String,
        result: ProviderResult<MovieDetail>,
    },
}

#[derive(Debug)]
pub struct FetchResponse {
    pub token: CancellationToken,
    pub outcome: FetchOutcome,
}

impl FetchResponse {
    /// A response whose request was superseded must not touch state.
    pub fn is_stale(&self) -> bool {
        self.token.is_cancelled()
    }
}
