use crate::error::{Result, StaffingError};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const STAFFING_DIR: &str = ".staffing";
pub const REQUESTS_DIR: &str = ".staffing/requests";
pub const SEARCHES_DIR: &str = ".staffing/searches";
pub const AGENCIES_DIR: &str = ".staffing/agencies";
pub const REASONS_DIR: &str = ".staffing/reasons";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn request_file(root: &Path, id: &str) -> PathBuf {
    root.join(REQUESTS_DIR).join(format!("{id}.yaml"))
}

pub fn search_file(root: &Path, id: &str) -> PathBuf {
    root.join(SEARCHES_DIR).join(format!("{id}.yaml"))
}

pub fn agency_file(root: &Path, id: &str) -> PathBuf {
    root.join(AGENCIES_DIR).join(format!("{id}.yaml"))
}

pub fn reason_file(root: &Path, id: &str) -> PathBuf {
    root.join(REASONS_DIR).join(format!("{id}.yaml"))
}

// ---------------------------------------------------------------------------
// Id validation
// ---------------------------------------------------------------------------

static ID_RE: OnceLock<Regex> = OnceLock::new();

fn id_re() -> &'static Regex {
    ID_RE.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9\-]*[a-z0-9]$|^[a-z0-9]$").unwrap())
}

/// Entity ids double as file names, so they are restricted to the same shape
/// a uuid-v4 string satisfies: lowercase alphanumerics and inner hyphens.
pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() || id.len() > 64 || !id_re().is_match(id) {
        return Err(StaffingError::InvalidId(id.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
