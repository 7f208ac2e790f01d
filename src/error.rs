use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    // Fatal at startup, everything else is recoverable at the loop boundary.
    #[error("{0} must be set")]
    ConfigMissing(&'static str),

    #[error("endpoint request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("endpoint returned status {0}")]
    EndpointStatus(reqwest::StatusCode),

    #[error("unexpected response shape: {0}")]
    Shape(String),

    #[error("unknown homework status {0:?}")]
    UnknownStatus(String),

    #[error("message delivery failed: {0}")]
    Delivery(String),
}
