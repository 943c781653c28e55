use crate::{Error, ErrorType};
use uuid::Uuid;

/// A single named value exposed under a [`super::Service`]. Immutable once
/// constructed; the uuid is only meaningful within its owning service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Characteristic {
    pub uuid: Uuid,
    pub value: Vec<u8>,
    pub writable: bool,
}

impl Characteristic {
    /// Identifier used by the convenience constructors when the caller does
    /// not bring their own.
    pub const DEFAULT_UUID: Uuid = Uuid::from_u128(0x7D1D48B0_E2D3_4A45_B703_A80F811D1124);

    pub fn new(uuid: Uuid, value: Vec<u8>, writable: bool) -> Self {
        Characteristic {
            uuid,
            value,
            writable,
        }
    }

    /// Builds a read-only characteristic from a printable-ASCII string.
    /// Rejection is a caller-input error, never a radio error.
    pub fn for_string(text: &str, uuid: Uuid) -> Result<Self, Error> {
        if !text.chars().all(|c| c.is_ascii() && !c.is_ascii_control()) {
            return Err(Error::from_type(ErrorType::UnencodableString));
        }
        Ok(Characteristic::new(uuid, text.as_bytes().to_vec(), false))
    }
}
