//! # pmsbridge
//!
//! Client for the hotel PMS door-lock protocol:
//! - Framed ASCII commands (`STX dd ss f |Tvalue... ETX`)
//! - Guest check-in, check-out and card read
//! - One short-lived TCP connection per command, 5 second timeout
//! - Hex and ASCII rendering of the raw reply
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Caller (CLI / gateway)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ typed request
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        PmsClient                             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┼─────────────────────┐
//!          │            │                     │
//!          ▼            ▼                     ▼
//!   ┌─────────────┐ ┌─────────────┐   ┌─────────────┐
//!   │    Codec    │ │  Transport  │   │  Response   │
//!   │ (validate,  │ │ (connect,   │   │ (hex/ASCII) │
//!   │   frame)    │ │ send, read) │   │             │
//!   └─────────────┘ └─────────────┘   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{BridgeError, Result, TransportError, TransportErrorKind};
pub use config::Config;
pub use client::{Exchange, PmsClient, Target};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of pmsbridge
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
