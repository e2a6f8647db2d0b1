//! Protocol codec
//!
//! Builds commands from typed requests and frames them for the wire.
//!
//! ## Wire Format
//!
//! ```text
//! ┌─────┬──────────┬──────────┬────────┬──────────────────────────┬─────┐
//! │ STX │ Dest (2) │ Src (2)  │ Fn (1) │ ( '|' Tag(1) Value )*    │ ETX │
//! └─────┴──────────┴──────────┴────────┴──────────────────────────┴─────┘
//! ```
//!
//! ### Fields by Function Code
//! - G (check-in):  R, N, D, O (all required, in that order)
//! - B (check-out): R, then optional N
//! - E (card read): none

use bytes::{BufMut, BytesMut};

use crate::config::Config;
use crate::error::{BridgeError, Result};
use super::command::{Address, Command, Field, FunctionCode};
use super::constants::{
    ADDR_LEN, DATABASE_ONLY_DEST_ADDR, ETX, SEPARATOR, STX, TAG_CHECK_IN, TAG_CHECK_OUT,
    TAG_NAME, TAG_ROOM,
};
use super::request::{present, CheckInRequest, CheckOutRequest, ReadCardRequest};
use super::timestamp::format_pms_timestamp;

/// Frame overhead: STX + dest + src + function code + ETX
pub const FRAME_OVERHEAD: usize = 1 + ADDR_LEN + ADDR_LEN + 1 + 1;

// =============================================================================
// Command Builders
// =============================================================================

/// Resolve the source address, falling back to the configured default
fn src_addr(requested: &Option<String>, config: &Config) -> Result<Address> {
    let value = present(requested).unwrap_or(config.default_src_addr.as_str());
    Address::parse(value, "source")
}

/// Resolve a caller-chosen destination address
fn dest_addr(requested: &Option<String>, config: &Config) -> Result<Address> {
    let value = present(requested).unwrap_or(config.default_dest_addr.as_str());
    Address::parse(value, "destination")
}

/// Build a check-in (`G`) command
///
/// Every missing or invalid input, addresses included, is reported in a
/// single error.
pub fn build_check_in(request: &CheckInRequest, config: &Config) -> Result<Command> {
    let dest = dest_addr(&request.dest_addr, config);
    let src = src_addr(&request.src_addr, config);

    let room = present(&request.room_number);
    let name = present(&request.guest_name);
    let check_in = present(&request.check_in).and_then(format_pms_timestamp);
    let check_out = present(&request.check_out).and_then(format_pms_timestamp);

    let mut problems = Vec::new();
    for addr in [&dest, &src] {
        if let Err(e) = addr {
            problems.push(validation_detail(e));
        }
    }
    if room.is_none() {
        problems.push("missing room number (R)".to_string());
    }
    if name.is_none() {
        problems.push("missing guest name (N)".to_string());
    }
    if check_in.is_none() {
        problems.push("missing or invalid check-in date (D), expected YYYY-MM-DDTHH:MM".to_string());
    }
    if check_out.is_none() {
        problems.push("missing or invalid check-out date (O), expected YYYY-MM-DDTHH:MM".to_string());
    }

    match (dest, src, room, name, check_in, check_out) {
        (Ok(dest), Ok(src), Some(room), Some(name), Some(check_in), Some(check_out)) => {
            let fields = vec![
                Field::new(TAG_ROOM, room)?,
                Field::new(TAG_NAME, name)?,
                Field::new(TAG_CHECK_IN, check_in)?,
                Field::new(TAG_CHECK_OUT, check_out)?,
            ];
            Ok(Command::new(dest, src, FunctionCode::CheckIn, fields))
        }
        _ => Err(BridgeError::validation(format!(
            "invalid check-in request: {}",
            problems.join("; ")
        ))),
    }
}

/// The bare message of a validation error
fn validation_detail(err: &BridgeError) -> String {
    match err {
        BridgeError::Validation(msg) => msg.clone(),
        other => other.to_string(),
    }
}

/// Build a check-out (`B`) command
///
/// Without `cancel_card` the destination is always `00`, which asks the PMS
/// to check the guest out of its database only. With `cancel_card` the
/// caller's destination (the encoder) is used and the card is cancelled too.
pub fn build_check_out(request: &CheckOutRequest, config: &Config) -> Result<Command> {
    let dest = if request.cancel_card {
        dest_addr(&request.dest_addr, config)?
    } else {
        Address::parse(DATABASE_ONLY_DEST_ADDR, "destination")?
    };
    let src = src_addr(&request.src_addr, config)?;

    let room = present(&request.room_number).ok_or_else(|| {
        BridgeError::validation("missing required field: room number (R)")
    })?;

    let mut fields = vec![Field::new(TAG_ROOM, room)?];
    if let Some(name) = present(&request.guest_name) {
        fields.push(Field::new(TAG_NAME, name)?);
    }

    Ok(Command::new(dest, src, FunctionCode::CheckOut, fields))
}

/// Build a card read (`E`) command, which carries no fields
pub fn build_read_card(request: &ReadCardRequest, config: &Config) -> Result<Command> {
    let dest = dest_addr(&request.dest_addr, config)?;
    let src = src_addr(&request.src_addr, config)?;
    Ok(Command::new(dest, src, FunctionCode::ReadCard, Vec::new()))
}

// =============================================================================
// Framing
// =============================================================================

/// Encode a command to bytes
///
/// Format: STX + dest (2) + src (2) + function (1) + fields + ETX
pub fn encode_command(command: &Command) -> Vec<u8> {
    let fields_len: usize = command.fields().iter().map(Field::encoded_len).sum();

    let mut buf = BytesMut::with_capacity(FRAME_OVERHEAD + fields_len);
    buf.put_u8(STX);
    buf.put_slice(command.dest().as_bytes());
    buf.put_slice(command.src().as_bytes());
    buf.put_u8(command.function() as u8);

    for field in command.fields() {
        buf.put_u8(SEPARATOR);
        buf.put_u8(field.tag());
        buf.put_slice(field.value().as_bytes());
    }

    buf.put_u8(ETX);
    buf.to_vec()
}

/// Render encoded command bytes as text for display
pub fn command_text(encoded: &[u8]) -> String {
    String::from_utf8_lossy(encoded).into_owned()
}
