//! PostalCode value object - Japanese postal code, canonical form `NNN-NNNN`

use std::fmt;

use crate::error::{ShipctlError, ShipctlResult};

/// A validated Japanese postal code.
///
/// Accepts hyphenated (`135-0061`) or bare (`1350061`) input and stores the
/// canonical hyphenated form. Equality is over the canonical form, so two
/// codes with the same digits always compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode {
    value: String,
}

impl PostalCode {
    /// Parse a postal code from hyphenated or bare input.
    pub fn from(input: &str) -> ShipctlResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ShipctlError::validation("postal code", "empty string"));
        }

        let digits: String = if trimmed.contains('-') {
            // A hyphen is only valid at position 3 (format: 123-4567)
            let ok = trimmed.len() == 8
                && trimmed.as_bytes()[3] == b'-'
                && trimmed[..3].bytes().all(|b| b.is_ascii_digit())
                && trimmed[4..].bytes().all(|b| b.is_ascii_digit());
            if !ok {
                return Err(ShipctlError::validation(
                    "postal code",
                    "hyphen must be at position 3 (format: 123-4567)",
                ));
            }
            trimmed.replace('-', "")
        } else {
            if trimmed.len() != 7 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ShipctlError::validation(
                    "postal code",
                    "must be 7 digits without hyphen",
                ));
            }
            trimmed.to_string()
        };

        Ok(Self {
            value: format!("{}-{}", &digits[..3], &digits[3..]),
        })
    }

    /// Region code: the first three digits.
    pub fn region(&self) -> &str {
        &self.value[..3]
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
