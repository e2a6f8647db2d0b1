//! Protocol constants
//!
//! Frame markers, field tags and fixed exchange limits for the PMS wire protocol.

use std::time::Duration;

// =============================================================================
// Frame Markers
// =============================================================================

/// Start-of-record marker
pub const STX: u8 = 0x02;

/// End-of-record marker
pub const ETX: u8 = 0x03;

/// Field separator (`|`)
pub const SEPARATOR: u8 = 0x7C;

// =============================================================================
// Addressing
// =============================================================================

/// Length of the destination and source address slots
pub const ADDR_LEN: usize = 2;

/// Default destination address (the encoder)
pub const DEFAULT_DEST_ADDR: &str = "01";

/// Default source address (this client)
pub const DEFAULT_SRC_ADDR: &str = "03";

/// Destination used by a check-out that only updates the PMS database
pub const DATABASE_ONLY_DEST_ADDR: &str = "00";

// =============================================================================
// Field Tags
// =============================================================================

pub const TAG_ROOM: u8 = b'R';
pub const TAG_NAME: u8 = b'N';
pub const TAG_CHECK_IN: u8 = b'D';
pub const TAG_CHECK_OUT: u8 = b'O';

// =============================================================================
// Exchange Limits
// =============================================================================

/// Timeout applied to connect, write and the single read
pub const EXCHANGE_TIMEOUT: Duration = Duration::from_secs(5);

/// Size of the single read performed per exchange
pub const READ_BUFFER_SIZE: usize = 1024;

/// Text reported for responses that are not plain ASCII
pub const UNDECODABLE_TEXT: &str = "not decodable as ASCII";
