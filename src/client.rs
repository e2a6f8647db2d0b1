//! Client Module
//!
//! Runs one command end to end: build, send, interpret.
//!
//! ## Flow
//! 1. Build the command from the typed request (validation happens here)
//! 2. Frame it and hand it to the transport
//! 3. Interpret the raw reply as hex and ASCII
//!
//! Validation failures return before the transport is touched.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::Result;
use crate::network::{TcpTransport, Transport};
use crate::protocol::{
    build_check_in, build_check_out, build_read_card, command_text, encode_command,
    CheckInRequest, CheckOutRequest, Command, ReadCardRequest, Response,
};

/// Address of a PMS server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Target {
    #[serde(alias = "server_ip", alias = "server_host")]
    pub host: String,

    #[serde(alias = "server_port")]
    pub port: u16,
}

impl Target {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Outcome of a successful exchange, shaped for JSON front ends
#[derive(Debug, Clone, Serialize)]
pub struct Exchange {
    /// Human-readable summary
    pub message: String,

    /// The command as sent, rendered as text
    pub sent: String,

    /// The reply as lowercase hex
    pub received_hex: String,

    /// The reply as ASCII, or the undecodable sentinel
    pub received_text: String,
}

/// PMS client
///
/// Holds no connection state; every call opens and closes its own socket,
/// so one client can serve concurrent callers.
pub struct PmsClient<T = TcpTransport> {
    config: Config,
    transport: T,
}

impl PmsClient<TcpTransport> {
    /// Create a client that talks TCP
    pub fn new(config: Config) -> Self {
        Self::with_transport(config, TcpTransport::new())
    }
}

impl<T: Transport> PmsClient<T> {
    /// Create a client over a custom transport
    pub fn with_transport(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Guest check-in (`G`): issues a card for the room
    pub fn check_in(&self, target: &Target, request: &CheckInRequest) -> Result<Exchange> {
        let command = build_check_in(request, &self.config)?;
        self.execute(target, &command)
    }

    /// Guest check-out (`B`): database only, or with card cancellation
    pub fn check_out(&self, target: &Target, request: &CheckOutRequest) -> Result<Exchange> {
        let command = build_check_out(request, &self.config)?;
        self.execute(target, &command)
    }

    /// Read the card on the encoder (`E`)
    pub fn read_card(&self, target: &Target, request: &ReadCardRequest) -> Result<Exchange> {
        let command = build_read_card(request, &self.config)?;
        self.execute(target, &command)
    }

    /// Send a built command and interpret the reply
    pub fn execute(&self, target: &Target, command: &Command) -> Result<Exchange> {
        let encoded = encode_command(command);
        let function = command.function();

        tracing::debug!(
            "Sending command '{}' to {} ({} bytes)",
            function,
            target,
            encoded.len()
        );

        let raw = self
            .transport
            .exchange(&target.host, target.port, &encoded)
            .map_err(|e| {
                tracing::warn!("Command '{}' to {} failed: {}", function, target, e);
                e
            })?;

        let response = Response::interpret(raw);
        if !response.is_decodable() {
            tracing::debug!("Reply from {} is not ASCII: {}", target, response.hex);
        }

        tracing::info!(
            "Command '{}' to {} answered with {} bytes",
            function,
            target,
            response.raw.len()
        );

        Ok(Exchange {
            message: format!("Command '{}' sent successfully", function),
            sent: command_text(&encoded),
            received_hex: response.hex,
            received_text: response.text,
        })
    }
}
