use crate::agency::Agency;
use crate::error::{Result, StaffingError};
use crate::request::Request;

/// Ownership check for reading or mutating an existing request.
///
/// Access is granted only when the caller is a known agency representing the
/// request's candidate, or when the caller is not an agency and owns the
/// request as its employer. Every other combination is denied, including an
/// agency whose id happens to equal the employer id.
pub fn authorize_request_access(
    caller_id: &str,
    agency: Option<&Agency>,
    request: &Request,
) -> Result<()> {
    let allowed = match agency {
        Some(agency) => agency.represents(&request.candidate_id),
        None => caller_id == request.employer_id,
    };
    if allowed {
        Ok(())
    } else {
        Err(StaffingError::PermissionDenied(caller_id.to_string()))
    }
}
