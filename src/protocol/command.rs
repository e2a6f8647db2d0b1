//! Command definitions
//!
//! Represents framed commands sent to the PMS server.

use std::fmt;

use crate::error::{BridgeError, Result};
use super::constants::ADDR_LEN;

/// Function codes understood by the PMS server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FunctionCode {
    /// Guest check-in, issues a card
    CheckIn = b'G',

    /// Guest check-out, optionally cancelling the card
    CheckOut = b'B',

    /// Read the card currently on the encoder
    ReadCard = b'E',
}

impl FunctionCode {
    pub fn as_char(self) -> char {
        self as u8 as char
    }
}

impl fmt::Display for FunctionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A two-digit station address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Address([u8; ADDR_LEN]);

impl Address {
    /// Parse an address, `role` names it in the error message
    pub fn parse(value: &str, role: &str) -> Result<Self> {
        let bytes = value.as_bytes();
        if bytes.len() != ADDR_LEN || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(BridgeError::validation(format!(
                "{} address must be exactly {} ASCII digits, got {:?}",
                role, ADDR_LEN, value
            )));
        }
        Ok(Self([bytes[0], bytes[1]]))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0] as char, self.0[1] as char)
    }
}

/// A tagged data item inside a command's data region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    tag: u8,
    value: String,
}

impl Field {
    /// Create a field, rejecting values that are not 7-bit ASCII
    ///
    /// Separator and frame-marker bytes inside `value` are not rejected.
    pub fn new(tag: u8, value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if !value.is_ascii() {
            return Err(BridgeError::validation(format!(
                "field {} contains non-ASCII characters: {:?}",
                tag as char, value
            )));
        }
        Ok(Self { tag, value })
    }

    pub fn tag(&self) -> u8 {
        self.tag
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Encoded length: separator + tag + value
    pub fn encoded_len(&self) -> usize {
        2 + self.value.len()
    }
}

/// A complete command ready to be framed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    dest: Address,
    src: Address,
    function: FunctionCode,
    fields: Vec<Field>,
}

impl Command {
    pub fn new(dest: Address, src: Address, function: FunctionCode, fields: Vec<Field>) -> Self {
        Self {
            dest,
            src,
            function,
            fields,
        }
    }

    pub fn dest(&self) -> Address {
        self.dest
    }

    pub fn src(&self) -> Address {
        self.src
    }

    pub fn function(&self) -> FunctionCode {
        self.function
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}
