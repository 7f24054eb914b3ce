use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use staffing_core::StaffingError;

// ---------------------------------------------------------------------------
// Internal sentinels for statuses with no StaffingError counterpart
// ---------------------------------------------------------------------------

/// Private sentinel error type used to carry an explicit HTTP 403 through
/// the `anyhow::Error` chain without touching the `StaffingError` enum.
#[derive(Debug)]
struct ForbiddenError(String);

impl std::fmt::Display for ForbiddenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ForbiddenError {}

/// Private sentinel error type used to carry an explicit HTTP 401 through
/// the `anyhow::Error` chain without touching the `StaffingError` enum.
#[derive(Debug)]
struct UnauthorizedError(String);

impl std::fmt::Display for UnauthorizedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for UnauthorizedError {}

// ---------------------------------------------------------------------------
// AppError — unified error type for HTTP responses
// ---------------------------------------------------------------------------

/// Unified error type for HTTP responses.
///
/// The body is always `{"message": …}`; the status comes from the underlying
/// error. Not-found on a search, request, or reason maps to 400 rather than
/// 404 — on these endpoints a dangling id is a bad payload, not a missing
/// resource.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    /// Construct a 400 Bad Request error with the given message.
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self(StaffingError::Validation(msg.into()).into())
    }

    /// Construct a 403 Forbidden error.
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self(ForbiddenError(msg.into()).into())
    }

    /// Construct a 401 Unauthorized error.
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self(UnauthorizedError(msg.into()).into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Check for explicit sentinel types before falling through to StaffingError.
        if let Some(f) = self.0.downcast_ref::<ForbiddenError>() {
            let body = serde_json::json!({ "message": f.0.clone() });
            return (StatusCode::FORBIDDEN, axum::Json(body)).into_response();
        }
        if let Some(u) = self.0.downcast_ref::<UnauthorizedError>() {
            let body = serde_json::json!({ "message": u.0.clone() });
            return (StatusCode::UNAUTHORIZED, axum::Json(body)).into_response();
        }

        let status = if let Some(e) = self.0.downcast_ref::<StaffingError>() {
            match e {
                StaffingError::RequestNotFound(_)
                | StaffingError::SearchNotFound(_)
                | StaffingError::ReasonNotFound(_)
                | StaffingError::AgencyNotFound(_)
                | StaffingError::InvalidId(_)
                | StaffingError::InvalidStatus(_)
                | StaffingError::InvalidRole(_)
                | StaffingError::Validation(_) => StatusCode::BAD_REQUEST,
                StaffingError::PermissionDenied(_) => StatusCode::FORBIDDEN,
                StaffingError::RequestExists(_) | StaffingError::RevisionConflict { .. } => {
                    StatusCode::CONFLICT
                }
                StaffingError::Io(_) | StaffingError::Yaml(_) => StatusCode::INTERNAL_SERVER_ERROR,
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = serde_json::json!({ "message": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn request_not_found_maps_to_400() {
        let err = AppError(StaffingError::RequestNotFound("r1".into()).into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn search_not_found_maps_to_400() {
        let err = AppError(StaffingError::SearchNotFound("s1".into()).into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn reason_not_found_maps_to_400() {
        let err = AppError(StaffingError::ReasonNotFound("nope".into()).into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_status_maps_to_400() {
        let err = AppError(StaffingError::InvalidStatus("approved".into()).into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn permission_denied_maps_to_403() {
        let err = AppError(StaffingError::PermissionDenied("a1".into()).into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn revision_conflict_maps_to_409() {
        let err = AppError(
            StaffingError::RevisionConflict {
                id: "r1".into(),
                expected: 0,
                found: 1,
            }
            .into(),
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn io_error_maps_to_500() {
        let io_err = std::io::Error::other("disk full");
        let err = AppError(StaffingError::Io(io_err).into());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn non_staffing_error_maps_to_500() {
        let err = AppError(anyhow::anyhow!("something unexpected"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn forbidden_constructor_maps_to_403() {
        let err = AppError::forbidden("role 'agency' may not create requests");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn unauthorized_constructor_maps_to_401() {
        let err = AppError::unauthorized("missing x-caller-id header");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn bad_request_constructor_maps_to_400() {
        let err = AppError::bad_request("candidate_id is required");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn response_body_is_json_message() {
        let err = AppError(StaffingError::RequestNotFound("r1".into()).into());
        let response = err.into_response();
        let ct = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .expect("should have content-type");
        assert!(
            ct.to_str().unwrap().contains("application/json"),
            "expected JSON content type, got {:?}",
            ct
        );
    }
}
