//! Protocol Module
//!
//! Defines the PMS door-lock wire protocol.
//!
//! ## Frame Format
//! ```text
//! ┌─────┬──────────┬──────────┬────────┬──────────────────────────┬─────┐
//! │ STX │ Dest (2) │ Src (2)  │ Fn (1) │ ( '|' Tag(1) Value )*    │ ETX │
//! └─────┴──────────┴──────────┴────────┴──────────────────────────┴─────┘
//! ```
//!
//! ### Function Codes
//! - G: guest check-in  - Fields: R (room), N (name), D (check-in), O (check-out)
//! - B: guest check-out - Fields: R (room), optional N (name)
//! - E: read card       - No fields
//!
//! ### Timestamps
//! `D` and `O` carry 12 digits: `YYYYMMDDHHMM`.
//!
//! ### Responses
//! Responses are read once and kept as raw bytes; they are rendered as hex
//! and best-effort ASCII, not parsed.

pub mod constants;
mod command;
mod request;
mod response;
mod codec;
mod timestamp;

pub use command::{Address, Command, Field, FunctionCode};
pub use request::{CheckInRequest, CheckOutRequest, ReadCardRequest};
pub use response::Response;
pub use codec::{
    build_check_in, build_check_out, build_read_card, command_text, encode_command,
    FRAME_OVERHEAD,
};
pub use timestamp::{format_pms_timestamp, parse_local_datetime, PMS_TIMESTAMP_LEN};
