use crate::action::Action;
use crate::error::{Result, StaffingError};
use crate::io;
use crate::paths;
use crate::types::RequestStatus;
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// A staffing proposal tracked between an employer and a candidate within a
/// search.
///
/// The action log is append-only: insertion order is chronological order, and
/// `status` always mirrors the last appended action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub id: String,
    pub search_id: String,
    pub employer_id: String,
    pub candidate_id: String,
    pub status: RequestStatus,
    pub actions: Vec<Action>,
    /// Optimistic-concurrency counter, bumped on every checked store.
    #[serde(default)]
    pub revision: u64,
    pub created_at: f64,
}

impl Request {
    pub fn new(
        search_id: impl Into<String>,
        employer_id: impl Into<String>,
        candidate_id: impl Into<String>,
        initial: Action,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            search_id: search_id.into(),
            employer_id: employer_id.into(),
            candidate_id: candidate_id.into(),
            status: initial.action,
            created_at: initial.timestamp,
            actions: vec![initial],
            revision: 0,
        }
    }

    // ---------------------------------------------------------------------------
    // Persistence
    // ---------------------------------------------------------------------------

    pub fn create(
        root: &Path,
        search_id: impl Into<String>,
        employer_id: impl Into<String>,
        candidate_id: impl Into<String>,
        initial: Action,
    ) -> Result<Self> {
        let request = Self::new(search_id, employer_id, candidate_id, initial);
        if paths::request_file(root, &request.id).exists() {
            return Err(StaffingError::RequestExists(request.id));
        }
        request.save(root)?;
        Ok(request)
    }

    pub fn load(root: &Path, id: &str) -> Result<Self> {
        let file = paths::request_file(root, id);
        if !file.exists() {
            return Err(StaffingError::RequestNotFound(id.to_string()));
        }
        let data = std::fs::read_to_string(&file)?;
        let request: Request = serde_yaml::from_str(&data)?;
        Ok(request)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let file = paths::request_file(root, &self.id);
        let data = serde_yaml::to_string(self)?;
        io::atomic_write(&file, data.as_bytes())
    }

    /// Persist a mutation that was derived from revision `expected`.
    ///
    /// Re-reads the stored record first: if another writer landed in between,
    /// the revisions no longer match and the mutation is rejected with
    /// `RevisionConflict` instead of silently dropping the other writer's
    /// actions.
    pub fn store_checked(&mut self, root: &Path, expected: u64) -> Result<()> {
        if paths::request_file(root, &self.id).exists() {
            let on_disk = Self::load(root, &self.id)?;
            if on_disk.revision != expected {
                return Err(StaffingError::RevisionConflict {
                    id: self.id.clone(),
                    expected,
                    found: on_disk.revision,
                });
            }
        }
        self.revision = expected + 1;
        self.save(root)
    }

    pub fn list(root: &Path) -> Result<Vec<Self>> {
        let dir = root.join(paths::REQUESTS_DIR);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut requests = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().is_some_and(|e| e == "yaml") {
                let data = std::fs::read_to_string(&path)?;
                let request: Request = serde_yaml::from_str(&data)?;
                requests.push(request);
            }
        }
        requests.sort_by(|a, b| {
            a.created_at
                .partial_cmp(&b.created_at)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(requests)
    }

    // ---------------------------------------------------------------------------
    // Action log
    // ---------------------------------------------------------------------------

    /// Append `action` and move `status` to match it.
    pub fn record_action(&mut self, action: Action) {
        self.status = action.action;
        self.actions.push(action);
    }

    pub fn last_action(&self) -> Option<&Action> {
        self.actions.last()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
