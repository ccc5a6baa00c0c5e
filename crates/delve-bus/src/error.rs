//! Dispatch wiring errors.

use std::error::Error;
use std::fmt;

/// Errors raised by the [`Hub`](crate::Hub).
///
/// The first three are wiring mistakes and should abort initialization.
/// `HandlerFailed` is how a subscriber or handler reports its own
/// failure; the hub never swallows it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchError {
    /// A handler is already bound for this request kind.
    DuplicateHandler {
        /// The contested request kind.
        request: String,
        /// Name of the handler already bound.
        existing: String,
    },
    /// No handler is bound for this request kind.
    NoHandler {
        /// The unserved request kind.
        request: String,
    },
    /// A handler answered with the wrong response kind.
    InvalidResponseType {
        /// The request kind that was called.
        request: String,
        /// The response kind the request declares.
        expected: String,
        /// The response kind the handler produced.
        actual: String,
    },
    /// A subscriber or handler failed while processing a message.
    HandlerFailed {
        /// Name of the failing subscriber or handler.
        name: String,
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateHandler { request, existing } => {
                write!(f, "request {request} already has handler '{existing}'")
            }
            Self::NoHandler { request } => write!(f, "no handler bound for request {request}"),
            Self::InvalidResponseType {
                request,
                expected,
                actual,
            } => write!(
                f,
                "handler for {request} answered {actual}, expected {expected}"
            ),
            Self::HandlerFailed { name, reason } => write!(f, "'{name}' failed: {reason}"),
        }
    }
}

impl Error for DispatchError {}
