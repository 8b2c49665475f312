//! Validated postal-code identifier.
//!
//! A `ZipCode` is exactly five ASCII digits.  It is stored as the numeric
//! value with leading zeros restored on display, so the type is `Copy` and
//! works as a map key without allocating, in the same spirit as the typed
//! index wrappers in [`crate::ids`].

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

/// A five-digit postal code, e.g. `"10001"`.
///
/// Construction always validates; a held `ZipCode` is well-formed by
/// definition.  Leading zeros round-trip (`"00501"` parses and displays as
/// `"00501"`).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct ZipCode(u32);

impl ZipCode {
    /// Number of digits in a code.
    pub const LEN: usize = 5;

    /// Parse from a string slice; accepts exactly five ASCII digits.
    pub fn parse(s: &str) -> CoreResult<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != Self::LEN || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(CoreError::InvalidCode(s.to_string()));
        }
        // All-digit five-byte strings always fit in u32.
        let n = s
            .parse::<u32>()
            .map_err(|_| CoreError::InvalidCode(s.to_string()))?;
        Ok(Self(n))
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:05}", self.0)
    }
}

impl FromStr for ZipCode {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ZipCode {
    type Error = CoreError;

    fn try_from(s: String) -> CoreResult<Self> {
        Self::parse(&s)
    }
}

impl From<ZipCode> for String {
    fn from(code: ZipCode) -> String {
        code.to_string()
    }
}
