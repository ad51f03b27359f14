use std::path::PathBuf;

/// Failures raised while replicating IEX Cloud data.
///
/// Every variant is logged where it occurs; the caller only decides whether
/// it is fatal (configuration, symbol index) or skippable (a single symbol).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("symbol {0:?} cannot be used as a file name")]
    Symbol(String),

    #[error("invalid endpoint url: {0}")]
    Url(String),

    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
