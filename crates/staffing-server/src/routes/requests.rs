use axum::extract::{Path, State};
use axum::Json;

use crate::auth::Caller;
use crate::error::AppError;
use crate::state::AppState;
use staffing_core::action::Action;
use staffing_core::agency::Agency;
use staffing_core::authz;
use staffing_core::paths;
use staffing_core::reason::Reason;
use staffing_core::request::Request;
use staffing_core::search::Search;
use staffing_core::types::{now_epoch, RequestStatus, Role};
use staffing_core::StaffingError;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[derive(serde::Deserialize)]
pub struct CreateRequestBody {
    pub search_id: String,
    pub candidate_id: String,
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl CreateRequestBody {
    /// Explicit payload validation: well-formed ids and a known status.
    fn validate(&self) -> Result<RequestStatus, StaffingError> {
        paths::validate_id(&self.search_id)?;
        paths::validate_id(&self.candidate_id)?;
        self.status.parse()
    }
}

#[derive(serde::Serialize)]
pub struct CreateRequestResponse {
    pub id: String,
    pub employer_id: String,
    pub candidate_id: String,
    pub search_id: String,
    pub status: RequestStatus,
    pub timestamp: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// POST /api/requests — create a request against a search. Employers only.
pub async fn create_request(
    State(app): State<AppState>,
    caller: Caller,
    Json(body): Json<CreateRequestBody>,
) -> Result<Json<CreateRequestResponse>, AppError> {
    caller.require_role(&[Role::Employer])?;

    let root = app.root.clone();
    let response = tokio::task::spawn_blocking(move || {
        let status = body.validate()?;

        let mut search = Search::load(&root, &body.search_id)?;

        let timestamp = now_epoch();
        let action = Action::new(status, timestamp).with_message(body.message);

        let request = Request::create(
            &root,
            body.search_id,
            caller.id,
            body.candidate_id,
            action,
        )?;

        search.touch(timestamp);
        search.save(&root)?;

        tracing::info!(
            request_id = %request.id,
            search_id = %request.search_id,
            status = %request.status,
            "request created"
        );

        let message = request.last_action().and_then(|a| a.message.clone());
        Ok::<_, StaffingError>(CreateRequestResponse {
            id: request.id,
            employer_id: request.employer_id,
            candidate_id: request.candidate_id,
            search_id: request.search_id,
            status: request.status,
            timestamp,
            message,
        })
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(response))
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[derive(serde::Deserialize)]
pub struct UpdateRequestBody {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub reason_id: Option<String>,
}

impl UpdateRequestBody {
    /// Explicit payload validation: a known status and, when a reason is
    /// given, a well-formed reason id.
    fn validate(&self) -> Result<RequestStatus, StaffingError> {
        if let Some(reason_id) = self.reason_id() {
            paths::validate_id(reason_id)?;
        }
        self.status.parse()
    }

    /// An empty or whitespace-only `reason_id` is treated as absent.
    fn reason_id(&self) -> Option<&str> {
        self.reason_id
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }
}

#[derive(serde::Serialize)]
pub struct UpdateRequestResponse {
    pub timestamp: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason>,
}

/// PUT /api/requests/:id — append a status-change action. Allowed for the
/// owning employer or an agency representing the request's candidate.
pub async fn update_request(
    State(app): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
    Json(body): Json<UpdateRequestBody>,
) -> Result<Json<UpdateRequestResponse>, AppError> {
    caller.require_role(&[Role::Agency, Role::Employer])?;

    let root = app.root.clone();
    let response = tokio::task::spawn_blocking(move || {
        let status = body.validate()?;

        let mut request = Request::load(&root, &id)?;

        // Resolve the reason before any mutation so a dangling reason_id
        // leaves both the request and the search untouched.
        let reason = match body.reason_id() {
            Some(reason_id) => Some(Reason::load(&root, reason_id)?),
            None => None,
        };

        let agency = Agency::load_opt(&root, &caller.id)?;
        authz::authorize_request_access(&caller.id, agency.as_ref(), &request)?;

        let timestamp = now_epoch();
        let action = Action::new(status, timestamp)
            .with_message(body.message.clone())
            .with_reason(body.reason_id().map(str::to_string));

        let mut search = Search::load(&root, &request.search_id)?;
        search.touch(timestamp);

        let base_revision = request.revision;
        request.record_action(action);
        request.store_checked(&root, base_revision)?;
        search.save(&root)?;

        tracing::info!(
            request_id = %request.id,
            status = %request.status,
            actions = request.actions.len(),
            "request updated"
        );

        Ok::<_, StaffingError>(UpdateRequestResponse {
            timestamp,
            message: body.message.filter(|m| !m.is_empty()),
            reason,
        })
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(response))
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

/// GET /api/requests/:id — full request detail with the action log. Same
/// ownership rule as update.
pub async fn get_request(
    State(app): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let request = Request::load(&root, &id)?;

        let agency = Agency::load_opt(&root, &caller.id)?;
        authz::authorize_request_access(&caller.id, agency.as_ref(), &request)?;

        Ok::<_, StaffingError>(serde_json::json!({
            "id": request.id,
            "search_id": request.search_id,
            "employer_id": request.employer_id,
            "candidate_id": request.candidate_id,
            "status": request.status,
            "actions": request.actions,
            "revision": request.revision,
            "created_at": request.created_at,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// GET /api/requests — requests visible to the caller: an employer sees its
/// own requests, an agency sees requests for candidates it represents.
pub async fn list_requests(
    State(app): State<AppState>,
    caller: Caller,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let agency = Agency::load_opt(&root, &caller.id)?;

        let requests = Request::list(&root)?;
        let list: Vec<serde_json::Value> = requests
            .iter()
            .filter(|r| match &agency {
                Some(agency) => agency.represents(&r.candidate_id),
                None => r.employer_id == caller.id,
            })
            .map(|r| {
                serde_json::json!({
                    "id": r.id,
                    "search_id": r.search_id,
                    "employer_id": r.employer_id,
                    "candidate_id": r.candidate_id,
                    "status": r.status,
                    "action_count": r.actions.len(),
                    "updated_at": r.last_action().map(|a| a.timestamp),
                })
            })
            .collect();
        Ok::<_, StaffingError>(serde_json::json!(list))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}
