pub mod config;
pub mod interactive_ratatui;
pub mod logging;
pub mod provider;
pub mod schemas;

pub use config::{AverageMode, ProviderConfig};
pub use provider::{MovieProvider, OmdbClient, ProviderError, ProviderResult};
pub use schemas::{MovieDetail, MovieSummary, UserRating, WatchedEntry};
