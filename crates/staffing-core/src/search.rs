use crate::error::{Result, StaffingError};
use crate::io;
use crate::paths;
use crate::types::now_epoch;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// A job search owned by an employer. Requests reference a search, and every
/// request mutation touches the search's `updated_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Search {
    pub id: String,
    pub title: String,
    pub employer_id: String,
    pub created_at: f64,
    pub updated_at: f64,
}

impl Search {
    pub fn create(
        root: &Path,
        id: impl Into<String>,
        title: impl Into<String>,
        employer_id: impl Into<String>,
    ) -> Result<Self> {
        let id = id.into();
        paths::validate_id(&id)?;

        let now = now_epoch();
        let search = Self {
            id,
            title: title.into(),
            employer_id: employer_id.into(),
            created_at: now,
            updated_at: now,
        };
        search.save(root)?;
        Ok(search)
    }

    pub fn load(root: &Path, id: &str) -> Result<Self> {
        let file = paths::search_file(root, id);
        if !file.exists() {
            return Err(StaffingError::SearchNotFound(id.to_string()));
        }
        let data = std::fs::read_to_string(&file)?;
        let search: Search = serde_yaml::from_str(&data)?;
        Ok(search)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let file = paths::search_file(root, &self.id);
        let data = serde_yaml::to_string(self)?;
        io::atomic_write(&file, data.as_bytes())
    }

    /// Record that a request tied to this search changed at `timestamp`.
    pub fn touch(&mut self, timestamp: f64) {
        self.updated_at = timestamp;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
