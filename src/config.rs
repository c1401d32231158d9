use clap::ValueEnum;
use std::time::Duration;

/// Key shipped with the application for the public OMDb endpoint
pub const DEFAULT_API_KEY: &str = "8b77671d";

pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";

/// Window title shown whenever no movie detail is open
pub const DEFAULT_TITLE: &str = "Popcorn";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// How unparseable IMDb ratings and runtimes enter the watched-list averages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum AverageMode {
    /// Count the value as 0
    #[default]
    TreatAsZero,
    /// Leave the value out of that average
    ExcludeInvalid,
}
