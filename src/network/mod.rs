//! Network Module
//!
//! TCP exchange with the PMS server.
//!
//! ## Architecture
//! - One new connection per command, never pooled
//! - Connect, write and the single read are each bounded by the exchange timeout
//! - The connection is closed by a drop guard on every exit path

mod connection;
mod transport;

pub use connection::Connection;
pub use transport::{TcpTransport, Transport, TransportOutcome};
