use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// RequestStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a staffing request. Every audit action records the
/// status it moved the request into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Declined,
    Withdrawn,
}

impl RequestStatus {
    pub fn all() -> &'static [RequestStatus] {
        &[
            RequestStatus::Pending,
            RequestStatus::Accepted,
            RequestStatus::Declined,
            RequestStatus::Withdrawn,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Accepted => "accepted",
            RequestStatus::Declined => "declined",
            RequestStatus::Withdrawn => "withdrawn",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RequestStatus {
    type Err = crate::error::StaffingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(RequestStatus::Pending),
            "accepted" => Ok(RequestStatus::Accepted),
            "declined" => Ok(RequestStatus::Declined),
            "withdrawn" => Ok(RequestStatus::Withdrawn),
            _ => Err(crate::error::StaffingError::InvalidStatus(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Role of an authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Employer,
    Agency,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Employer => "employer",
            Role::Agency => "agency",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = crate::error::StaffingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employer" => Ok(Role::Employer),
            "agency" => Ok(Role::Agency),
            _ => Err(crate::error::StaffingError::InvalidRole(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

/// Wall-clock time as fractional seconds since the Unix epoch. Action
/// timestamps and `Search::updated_at` use this representation.
pub fn now_epoch() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
