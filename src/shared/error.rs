use std::time::Duration;

use thiserror::Error;

pub type Result<T, E = ClientError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid endpoint `{endpoint}`: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("failed to connect to {endpoint}")]
    Connect {
        endpoint: String,
        #[source]
        source: tonic::transport::Error,
    },

    #[error("timed out after {timeout:?} connecting to {endpoint}")]
    ConnectTimeout { endpoint: String, timeout: Duration },

    #[error("{method} failed")]
    Call {
        method: &'static str,
        #[source]
        source: tonic::Status,
    },

    #[error("console i/o failed")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Status code of a failed remote call, if this is one.
    pub fn code(&self) -> Option<tonic::Code> {
        match self {
            ClientError::Call { source, .. } => Some(source.code()),
            _ => None,
        }
    }
}
