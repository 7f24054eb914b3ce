use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use staffing_core::types::Role;

/// Header carrying the authenticated caller's id, set by the upstream
/// authenticator.
pub const CALLER_ID_HEADER: &str = "x-caller-id";
/// Header carrying the authenticated caller's role (`employer` or `agency`).
pub const CALLER_ROLE_HEADER: &str = "x-caller-role";

/// Authenticated caller identity.
///
/// Session and token validation happen upstream; this service trusts the
/// identity headers the authenticator forwards. Missing or malformed headers
/// reject the request with 401 before the handler runs.
#[derive(Debug, Clone)]
pub struct Caller {
    pub id: String,
    pub role: Role,
}

impl Caller {
    /// Route-level role gate. 403 when the caller's role is not in `allowed`.
    pub fn require_role(&self, allowed: &[Role]) -> Result<(), AppError> {
        if allowed.contains(&self.role) {
            Ok(())
        } else {
            Err(AppError::forbidden(format!(
                "role '{}' may not access this resource",
                self.role
            )))
        }
    }
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(CALLER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::unauthorized(format!("missing {CALLER_ID_HEADER} header")))?
            .to_string();

        let role = parts
            .headers
            .get(CALLER_ROLE_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized(format!("missing {CALLER_ROLE_HEADER} header")))?
            .parse::<Role>()
            .map_err(|e| AppError::unauthorized(e.to_string()))?;

        Ok(Caller { id, role })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(req: Request<()>) -> Result<Caller, AppError> {
        let (mut parts, _) = req.into_parts();
        Caller::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn extracts_id_and_role() {
        let req = Request::builder()
            .header(CALLER_ID_HEADER, "e1")
            .header(CALLER_ROLE_HEADER, "employer")
            .body(())
            .unwrap();
        let caller = extract(req).await.unwrap();
        assert_eq!(caller.id, "e1");
        assert_eq!(caller.role, Role::Employer);
    }

    #[tokio::test]
    async fn missing_id_rejected() {
        let req = Request::builder()
            .header(CALLER_ROLE_HEADER, "employer")
            .body(())
            .unwrap();
        assert!(extract(req).await.is_err());
    }

    #[tokio::test]
    async fn unknown_role_rejected() {
        let req = Request::builder()
            .header(CALLER_ID_HEADER, "e1")
            .header(CALLER_ROLE_HEADER, "admin")
            .body(())
            .unwrap();
        assert!(extract(req).await.is_err());
    }

    #[tokio::test]
    async fn blank_id_rejected() {
        let req = Request::builder()
            .header(CALLER_ID_HEADER, "   ")
            .header(CALLER_ROLE_HEADER, "agency")
            .body(())
            .unwrap();
        assert!(extract(req).await.is_err());
    }

    #[test]
    fn require_role_gates() {
        let caller = Caller {
            id: "a1".to_string(),
            role: Role::Agency,
        };
        assert!(caller.require_role(&[Role::Agency, Role::Employer]).is_ok());
        assert!(caller.require_role(&[Role::Employer]).is_err());
    }
}
