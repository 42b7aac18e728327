// -- std imports
use std::time::Duration;

// -- crate imports
use thiserror::Error;

/// Message carried by [`Error::Protocol`] when a Notify reply cannot be decoded.
pub const UNRECOGNIZED_RESPONSE: &str = "unrecognized response from notify daemon";

/// Errors returned by the notification client.
///
/// None of these are retried or swallowed by the client; they are handed back to the immediate
/// caller. Only [`crate::service_available`] folds them into a `bool`.
#[derive(Debug, Error)]
pub enum Error {
    /// The session bus could not be reached, or the connection was lost.
    #[error("could not connect to the session bus: {0}")]
    Connection(#[source] zbus::Error),

    /// The daemon rejected the call, or the transport call itself failed.
    #[error("notify call failed: {0}")]
    Notify(#[source] zbus::Error),

    /// A reply arrived but did not have the expected shape.
    #[error("{message}")]
    Protocol {
        message: String,
        #[source]
        source: zbus::Error,
    },

    /// The requested display duration does not fit in a signed 32-bit millisecond count.
    #[error("timeout of {0:?} does not fit in a signed 32-bit millisecond value")]
    TimeoutOutOfRange(Duration),
}

impl Error {
    pub(crate) fn protocol(message: impl Into<String>, source: zbus::Error) -> Self {
        Self::Protocol {
            message: message.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
