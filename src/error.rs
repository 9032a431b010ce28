use thiserror::Error;

/// Configuration-related errors with structured variants.
///
/// These are fatal: they are raised before the first cycle starts and
/// terminate the process.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Upstream market-data errors.
///
/// Recovered at the cycle boundary: logged as an `error` record, the cycle
/// ends, and the next scheduled tick is a fresh attempt.
#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("market API returned status {code}")]
    Status { code: u16 },

    #[error("no market found for condition id '{condition_id}'")]
    NotFound { condition_id: String },

    #[error("invalid probability value: {value}")]
    InvalidProbability { value: f64 },

    #[error("malformed market response: {0}")]
    Malformed(String),

    #[error("quorum not reached: {ok} of {need} sources answered")]
    Quorum { ok: usize, need: usize },
}

/// On-chain publish errors.
///
/// Recovered at the cycle boundary like [`DataSourceError`]; a failed publish
/// is never retried within the same cycle.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("invalid updater key: {0}")]
    InvalidKey(String),

    #[error("failed to submit setTier transaction: {0}")]
    Submission(String),

    #[error("setTier transaction reverted: {tx_hash}")]
    Reverted { tx_hash: String },

    #[error("missing or malformed transaction confirmation: {0}")]
    Confirmation(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    DataSource(#[from] DataSourceError),

    #[error(transparent)]
    Publish(#[from] PublishError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
