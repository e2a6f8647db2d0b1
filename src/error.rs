//! Error types for pmsbridge
//!
//! Provides a unified error type for all operations.

use std::fmt;

use thiserror::Error;

/// Result type alias using BridgeError
pub type Result<T> = std::result::Result<T, BridgeError>;

/// Unified error type for pmsbridge operations
#[derive(Debug, Error)]
pub enum BridgeError {
    // -------------------------------------------------------------------------
    // Validation Errors (raised before any network activity)
    // -------------------------------------------------------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    // -------------------------------------------------------------------------
    // Transport Errors (raised after the connection is closed)
    // -------------------------------------------------------------------------
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl BridgeError {
    /// Shorthand for building a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        BridgeError::Validation(message.into())
    }

    /// True if the command was rejected before being sent
    pub fn is_validation(&self) -> bool {
        matches!(self, BridgeError::Validation(_))
    }

    /// The transport failure kind, if this is a transport error
    pub fn transport_kind(&self) -> Option<TransportErrorKind> {
        match self {
            BridgeError::Transport(e) => Some(e.kind()),
            BridgeError::Validation(_) => None,
        }
    }
}

/// Classification of a failed TCP exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// No connection or no data before the exchange timeout
    Timeout,

    /// Resolution failure, refusal, reset or any other socket-level error
    SocketError,

    /// Anything else (invalid target, unexpected I/O condition)
    UnknownError,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransportErrorKind::Timeout => "Timeout",
            TransportErrorKind::SocketError => "Socket error",
            TransportErrorKind::UnknownError => "Unknown error",
        };
        f.write_str(label)
    }
}

/// A failed exchange with the PMS server
#[derive(Debug, Clone, Error)]
#[error("{kind}: {message}")]
pub struct TransportError {
    kind: TransportErrorKind,
    message: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Timeout, message)
    }

    pub fn socket(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::SocketError, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::UnknownError, message)
    }

    pub fn kind(&self) -> TransportErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
