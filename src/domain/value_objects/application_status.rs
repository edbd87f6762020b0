//! ApplicationStatus value object - carrier-onboarding state of a consignor record

use std::fmt;

use crate::error::{ShipctlError, ShipctlResult};

/// Carrier application status for a consignor record.
///
/// `Accepted` marks a carrier-approved record (test data); `NotApplied`
/// marks a production record still pending manual carrier onboarding. Only
/// accepted records may be deployed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplicationStatus {
    Accepted,
    NotApplied,
}

impl ApplicationStatus {
    /// Parse from the wire form: `accepted` or `not_applied`.
    pub fn from(input: &str) -> ShipctlResult<Self> {
        match input {
            "accepted" => Ok(Self::Accepted),
            "not_applied" => Ok(Self::NotApplied),
            other => Err(ShipctlError::validation(
                "application status",
                format!("{other}: must be \"accepted\" or \"not_applied\""),
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::NotApplied => "not_applied",
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    pub fn is_not_applied(&self) -> bool {
        matches!(self, Self::NotApplied)
    }

    /// Only accepted records may be deployed.
    pub fn can_deploy(&self) -> bool {
        self.is_accepted()
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
