//! Unified error type.

use thiserror::Error;

/// The error type returned by the service's fallible startup operations.
///
/// Request-level failures (404, 422, upstream errors) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s. This type surfaces
/// infrastructure failures: loading configuration, building the outbound
/// client, binding to a port.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config: {0}")]
    Config(String),

    #[error("http client: {0}")]
    Client(#[from] reqwest::Error),
}
