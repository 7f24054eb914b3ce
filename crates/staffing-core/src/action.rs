use crate::types::RequestStatus;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// One immutable audit-log entry recording a status change.
///
/// Optional fields are omitted entirely when absent, both in the store and in
/// HTTP responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// The status the request moved into.
    pub action: RequestStatus,
    /// Wall-clock seconds since the Unix epoch.
    pub timestamp: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_id: Option<String>,
}

impl Action {
    pub fn new(status: RequestStatus, timestamp: f64) -> Self {
        Self {
            action: status,
            timestamp,
            message: None,
            reason_id: None,
        }
    }

    /// Builder: attach a free-form message. Empty strings are treated as absent.
    pub fn with_message(mut self, message: Option<String>) -> Self {
        self.message = message.filter(|m| !m.is_empty());
        self
    }

    /// Builder: attach a reason id. Empty strings are treated as absent.
    pub fn with_reason(mut self, reason_id: Option<String>) -> Self {
        self.reason_id = reason_id.filter(|r| !r.is_empty());
        self
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
