//! Typed request structures
//!
//! One input shape per command kind. Field names match the JSON keys used by
//! front ends, so a gateway can deserialize straight into these.

use serde::{Deserialize, Deserializer};

/// Inputs for a guest check-in (`G`)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CheckInRequest {
    pub dest_addr: Option<String>,
    pub src_addr: Option<String>,

    #[serde(deserialize_with = "string_or_integer")]
    pub room_number: Option<String>,
    pub guest_name: Option<String>,

    /// Local date-time, `YYYY-MM-DDTHH:MM`
    pub check_in: Option<String>,

    /// Local date-time, `YYYY-MM-DDTHH:MM`
    pub check_out: Option<String>,
}

impl CheckInRequest {
    pub fn new(
        room_number: impl Into<String>,
        guest_name: impl Into<String>,
        check_in: impl Into<String>,
        check_out: impl Into<String>,
    ) -> Self {
        Self {
            room_number: Some(room_number.into()),
            guest_name: Some(guest_name.into()),
            check_in: Some(check_in.into()),
            check_out: Some(check_out.into()),
            ..Self::default()
        }
    }

    pub fn with_dest_addr(mut self, addr: impl Into<String>) -> Self {
        self.dest_addr = Some(addr.into());
        self
    }

    pub fn with_src_addr(mut self, addr: impl Into<String>) -> Self {
        self.src_addr = Some(addr.into());
        self
    }
}

/// Inputs for a guest check-out (`B`)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CheckOutRequest {
    /// Only honoured when `cancel_card` is set
    pub dest_addr: Option<String>,
    pub src_addr: Option<String>,

    /// Also cancel the guest's card, not just the PMS record
    pub cancel_card: bool,

    #[serde(deserialize_with = "string_or_integer")]
    pub room_number: Option<String>,

    /// Restricts the check-out to this guest
    pub guest_name: Option<String>,
}

impl CheckOutRequest {
    pub fn new(room_number: impl Into<String>) -> Self {
        Self {
            room_number: Some(room_number.into()),
            ..Self::default()
        }
    }

    pub fn with_cancel_card(mut self, cancel: bool) -> Self {
        self.cancel_card = cancel;
        self
    }

    pub fn with_guest_name(mut self, name: impl Into<String>) -> Self {
        self.guest_name = Some(name.into());
        self
    }

    pub fn with_dest_addr(mut self, addr: impl Into<String>) -> Self {
        self.dest_addr = Some(addr.into());
        self
    }

    pub fn with_src_addr(mut self, addr: impl Into<String>) -> Self {
        self.src_addr = Some(addr.into());
        self
    }
}

/// Inputs for a card read (`E`)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReadCardRequest {
    pub dest_addr: Option<String>,
    pub src_addr: Option<String>,
}

impl ReadCardRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dest_addr(mut self, addr: impl Into<String>) -> Self {
        self.dest_addr = Some(addr.into());
        self
    }

    pub fn with_src_addr(mut self, addr: impl Into<String>) -> Self {
        self.src_addr = Some(addr.into());
        self
    }
}

/// A JSON value that is either text or a whole number
#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrInteger {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

/// Accept `"101"` and `101` alike, storing the decimal text
fn string_or_integer<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<TextOrInteger>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        TextOrInteger::Text(s) => s,
        TextOrInteger::Unsigned(n) => n.to_string(),
        TextOrInteger::Signed(n) => n.to_string(),
    }))
}

/// Treat empty strings the same as absent values
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
