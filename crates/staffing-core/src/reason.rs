use crate::error::{Result, StaffingError};
use crate::io;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A canned explanation for a status change. Looked up when an update carries
/// a `reason_id`, never mutated by the request lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reason {
    pub id: String,
    pub label: String,
}

impl Reason {
    pub fn create(root: &Path, id: impl Into<String>, label: impl Into<String>) -> Result<Self> {
        let id = id.into();
        paths::validate_id(&id)?;

        let reason = Self {
            id,
            label: label.into(),
        };
        reason.save(root)?;
        Ok(reason)
    }

    pub fn load(root: &Path, id: &str) -> Result<Self> {
        let file = paths::reason_file(root, id);
        if !file.exists() {
            return Err(StaffingError::ReasonNotFound(id.to_string()));
        }
        let data = std::fs::read_to_string(&file)?;
        let reason: Reason = serde_yaml::from_str(&data)?;
        Ok(reason)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let file = paths::reason_file(root, &self.id);
        let data = serde_yaml::to_string(self)?;
        io::atomic_write(&file, data.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        Reason::create(dir.path(), "position-filled", "Position was filled").unwrap();
        let loaded = Reason::load(dir.path(), "position-filled").unwrap();
        assert_eq!(loaded.label, "Position was filled");
    }

    #[test]
    fn load_missing_returns_not_found() {
        let dir = TempDir::new().unwrap();
        match Reason::load(dir.path(), "nope") {
            Err(StaffingError::ReasonNotFound(id)) => assert_eq!(id, "nope"),
            other => panic!("expected ReasonNotFound, got {other:?}"),
        }
    }
}
