use crate::error::{Result, StaffingError};
use crate::io;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An organization acting on behalf of a set of candidates. Used only for the
/// update-authorization membership check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agency {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub candidate_ids: Vec<String>,
}

impl Agency {
    pub fn create(
        root: &Path,
        id: impl Into<String>,
        name: impl Into<String>,
        candidate_ids: Vec<String>,
    ) -> Result<Self> {
        let id = id.into();
        paths::validate_id(&id)?;

        let agency = Self {
            id,
            name: name.into(),
            candidate_ids,
        };
        agency.save(root)?;
        Ok(agency)
    }

    pub fn load(root: &Path, id: &str) -> Result<Self> {
        let file = paths::agency_file(root, id);
        if !file.exists() {
            return Err(StaffingError::AgencyNotFound(id.to_string()));
        }
        let data = std::fs::read_to_string(&file)?;
        let agency: Agency = serde_yaml::from_str(&data)?;
        Ok(agency)
    }

    /// Resolve a caller id as an agency. `None` means the caller is not an
    /// agency at all, which is an expected outcome, not an error.
    pub fn load_opt(root: &Path, id: &str) -> Result<Option<Self>> {
        match Self::load(root, id) {
            Ok(agency) => Ok(Some(agency)),
            Err(StaffingError::AgencyNotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let file = paths::agency_file(root, &self.id);
        let data = serde_yaml::to_string(self)?;
        io::atomic_write(&file, data.as_bytes())
    }

    pub fn represents(&self, candidate_id: &str) -> bool {
        self.candidate_ids.iter().any(|c| c == candidate_id)
    }
}
