use thiserror::Error;

#[derive(Debug, Error)]
pub enum StaffingError {
    #[error("request with id {0} does not exist")]
    RequestNotFound(String),

    #[error("request already exists: {0}")]
    RequestExists(String),

    #[error("search with id {0} does not exist")]
    SearchNotFound(String),

    #[error("reason with id {0} does not exist")]
    ReasonNotFound(String),

    #[error("agency with id {0} does not exist")]
    AgencyNotFound(String),

    #[error("invalid id '{0}': must be lowercase alphanumeric with hyphens")]
    InvalidId(String),

    #[error("invalid status: {0}")]
    InvalidStatus(String),

    #[error("invalid role: {0}")]
    InvalidRole(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("permission denied: caller '{0}' lacks access to this resource")]
    PermissionDenied(String),

    #[error("revision conflict on request {id}: expected {expected}, found {found}")]
    RevisionConflict {
        id: String,
        expected: u64,
        found: u64,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, StaffingError>;
