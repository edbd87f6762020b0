//! PhoneNumber value object - Japanese landline (10 digit) or mobile (11 digit)

use std::fmt;

use crate::error::{ShipctlError, ShipctlResult};

/// Two-digit area codes; every other landline area code is three digits.
const TWO_DIGIT_AREA_CODES: [&str; 3] = ["03", "04", "06"];

/// A validated Japanese phone number in canonical hyphenated form.
///
/// Landlines are 10 digits (`03-1234-5678`, `011-123-4567`), mobiles are
/// 11 digits (`090-1234-5678`). Input may carry hyphens anywhere; only the
/// digits matter, and the canonical hyphenation is derived from the digit
/// count and area code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    value: String,
}

impl PhoneNumber {
    /// Parse a phone number from hyphenated or bare input.
    pub fn from(input: &str) -> ShipctlResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ShipctlError::validation("phone number", "empty string"));
        }

        let digits: String = trimmed.chars().filter(|c| *c != '-').collect();

        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ShipctlError::validation(
                "phone number",
                "must contain only digits",
            ));
        }

        if digits.len() != 10 && digits.len() != 11 {
            return Err(ShipctlError::validation(
                "phone number",
                "must be 10 or 11 digits",
            ));
        }

        if !digits.starts_with('0') {
            return Err(ShipctlError::validation("phone number", "must start with 0"));
        }

        Ok(Self {
            value: Self::hyphenate(&digits),
        })
    }

    /// Canonical hyphenation from bare digits.
    fn hyphenate(digits: &str) -> String {
        if digits.len() == 11 {
            // Mobile: 090-1234-5678
            return format!("{}-{}-{}", &digits[..3], &digits[3..7], &digits[7..]);
        }

        if TWO_DIGIT_AREA_CODES.contains(&&digits[..2]) {
            // Two-digit area code: 03-1234-5678
            format!("{}-{}-{}", &digits[..2], &digits[2..6], &digits[6..])
        } else {
            // Three-digit area code: 011-123-4567
            format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..])
        }
    }

    /// Mobile numbers start with 070/080/090.
    pub fn is_mobile(&self) -> bool {
        self.value.starts_with("070") || self.value.starts_with("080") || self.value.starts_with("090")
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
