pub mod error;
pub mod omdb;


use crate::schemas::{MovieDetail, MovieSummary};
use async_trait::async_trait;

pub use error::{ProviderError, ProviderResult};
pub use omdb::OmdbClient;

/// Source of movie metadata.
///
/// Implementations must be shareable across the runtime's worker threads;
/// the UI hands one instance to every request task.
#[async_trait]
pub trait MovieProvider: Send + Sync {
    /// Title search. An empty hit list is reported as [`ProviderError::NotFound`].
    async fn search(&self, query: &str) -> ProviderResult<Vec<MovieSummary>>;

    async fn details(&self, id: &str) -> ProviderResult<MovieDetail>;
}
