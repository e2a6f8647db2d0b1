//! Connection Guard
//!
//! Owns the TCP stream for one exchange and closes it when dropped.

use std::io::{ErrorKind, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};
use std::time::{Duration, Instant};

use bytes::Bytes;

use crate::error::{TransportError, TransportErrorKind};
use crate::protocol::constants::READ_BUFFER_SIZE;

/// A single short-lived connection to the PMS server
///
/// The stream is shut down and closed on drop, so every exit path of an
/// exchange (success, timeout, error, panic) releases the socket.
pub struct Connection {
    /// The underlying TCP stream
    stream: TcpStream,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Open a connection to `host:port`, bounded by `timeout`
    ///
    /// Every resolved address is tried in turn until the deadline passes.
    pub fn open(host: &str, port: u16, timeout: Duration) -> Result<Self, TransportError> {
        let target = format!("{}:{}", host, port);

        if host.trim().is_empty() {
            return Err(TransportError::unknown(format!(
                "invalid target {}: empty host",
                target
            )));
        }
        if port == 0 {
            return Err(TransportError::unknown(format!(
                "invalid target {}: port 0",
                target
            )));
        }

        let addrs: Vec<SocketAddr> = (host, port)
            .to_socket_addrs()
            .map_err(|e| TransportError::socket(format!("could not resolve {}: {}", target, e)))?
            .collect();
        if addrs.is_empty() {
            return Err(TransportError::socket(format!(
                "could not resolve {}",
                target
            )));
        }

        let deadline = Instant::now() + timeout;
        let mut last_err = None;

        for addr in addrs {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                break;
            }

            tracing::debug!("Connecting to {} ({})", target, addr);
            match TcpStream::connect_timeout(&addr, remaining) {
                Ok(stream) => return Self::from_stream(stream, target, timeout),
                Err(e) => {
                    tracing::debug!("Connect to {} failed: {}", addr, e);
                    last_err = Some(e);
                }
            }
        }

        Err(match last_err {
            Some(e) => classify(&target, e),
            None => TransportError::timeout(format!("no connection to {} within {:?}", target, timeout)),
        })
    }

    /// Configure a freshly connected stream
    fn from_stream(stream: TcpStream, peer_addr: String, timeout: Duration) -> Result<Self, TransportError> {
        // Wrap first so the stream is closed even if configuration fails
        let conn = Self { stream, peer_addr };

        conn.stream
            .set_nodelay(true)
            .and_then(|_| conn.stream.set_read_timeout(Some(timeout)))
            .and_then(|_| conn.stream.set_write_timeout(Some(timeout)))
            .map_err(|e| classify(&conn.peer_addr, e))?;

        tracing::debug!("Connection established to {}", conn.peer_addr);
        Ok(conn)
    }

    /// Write the whole command in one logical write
    pub fn send(&mut self, command: &[u8]) -> Result<(), TransportError> {
        tracing::trace!("Sending {} bytes to {}: {:02x?}", command.len(), self.peer_addr, command);
        self.stream
            .write_all(command)
            .and_then(|_| self.stream.flush())
            .map_err(|e| classify(&self.peer_addr, e))
    }

    /// Perform exactly one read of up to `READ_BUFFER_SIZE` bytes
    ///
    /// Whatever arrives is the response; an orderly close yields empty bytes.
    pub fn receive(&mut self) -> Result<Bytes, TransportError> {
        let mut buf = [0u8; READ_BUFFER_SIZE];
        loop {
            match self.stream.read(&mut buf) {
                Ok(n) => {
                    tracing::trace!("Received {} bytes from {}: {:02x?}", n, self.peer_addr, &buf[..n]);
                    return Ok(Bytes::copy_from_slice(&buf[..n]));
                }
                // A signal is not a read; retry the same read
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(classify(&self.peer_addr, e)),
            }
        }
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        // NotConnected here just means the peer closed first
        if let Err(e) = self.stream.shutdown(Shutdown::Both) {
            if e.kind() != ErrorKind::NotConnected {
                tracing::debug!("Shutdown of {} failed: {}", self.peer_addr, e);
            }
        }
        tracing::debug!("Connection to {} closed", self.peer_addr);
    }
}

/// Map an I/O error to a transport failure
pub(crate) fn classify(target: &str, err: std::io::Error) -> TransportError {
    match error_kind(&err) {
        TransportErrorKind::Timeout => {
            TransportError::timeout(format!("no response from {} ({})", target, err))
        }
        TransportErrorKind::SocketError => {
            TransportError::socket(format!("{}: {}", target, err))
        }
        TransportErrorKind::UnknownError => {
            TransportError::unknown(format!("{}: {}", target, err))
        }
    }
}

/// Classification of an I/O error kind
pub(crate) fn error_kind(err: &std::io::Error) -> TransportErrorKind {
    match err.kind() {
        // Unix reports read timeouts as WouldBlock, Windows as TimedOut
        ErrorKind::TimedOut | ErrorKind::WouldBlock => TransportErrorKind::Timeout,
        ErrorKind::InvalidInput
        | ErrorKind::InvalidData
        | ErrorKind::Unsupported
        | ErrorKind::OutOfMemory => TransportErrorKind::UnknownError,
        _ => TransportErrorKind::SocketError,
    }
}
