use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum SentinelError {
    #[error("config error: {0}")]
    Config(String),

    #[error("analyst error: {0}")]
    Analyst(String),

    #[error("terminal error: {0}")]
    Terminal(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = SentinelError> = std::result::Result<T, E>;
