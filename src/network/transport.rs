//! Transport
//!
//! One command, one response, one connection.

use bytes::Bytes;

use crate::error::TransportError;
use crate::protocol::constants::EXCHANGE_TIMEOUT;
use super::connection::Connection;

/// Result of a single exchange with the PMS server
pub type TransportOutcome = std::result::Result<Bytes, TransportError>;

/// Carries an encoded command to the PMS server and returns its reply
pub trait Transport {
    /// Send `command` to `host:port` and return the raw response
    fn exchange(&self, host: &str, port: u16, command: &[u8]) -> TransportOutcome;
}

/// Blocking TCP transport
///
/// Opens a fresh connection per exchange; nothing is shared between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpTransport;

impl TcpTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Transport for TcpTransport {
    fn exchange(&self, host: &str, port: u16, command: &[u8]) -> TransportOutcome {
        let mut conn = Connection::open(host, port, EXCHANGE_TIMEOUT)?;
        conn.send(command)?;
        let response = conn.receive()?;

        tracing::debug!(
            "Exchange with {} complete: sent {} bytes, received {} bytes",
            conn.peer_addr(),
            command.len(),
            response.len()
        );
        Ok(response)
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn exchange(&self, host: &str, port: u16, command: &[u8]) -> TransportOutcome {
        (**self).exchange(host, port, command)
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn exchange(&self, host: &str, port: u16, command: &[u8]) -> TransportOutcome {
        (**self).exchange(host, port, command)
    }
}
