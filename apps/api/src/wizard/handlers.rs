//! Axum route handlers for the Wizard API.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;
use crate::wizard::controller::FieldWrite;
use crate::wizard::view::CurrentView;
use crate::wizard::WizardController;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ValueRequest {
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct SetFieldResponse {
    pub write: FieldWrite,
    pub view: CurrentView,
}

#[derive(Debug, Serialize)]
pub struct CreateWizardResponse {
    pub id: Uuid,
    pub view: CurrentView,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/wizards
pub async fn handle_create(
    State(state): State<AppState>,
) -> (StatusCode, Json<CreateWizardResponse>) {
    let (id, view) = state.sessions.create().await;
    (StatusCode::CREATED, Json(CreateWizardResponse { id, view }))
}

/// GET /api/v1/wizards/:id
pub async fn handle_get_view(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CurrentView>, AppError> {
    let view = state.sessions.with_session(id, |w| w.current_view()).await?;
    Ok(Json(view))
}

/// DELETE /api/v1/wizards/:id
///
/// Called once the summary has been acknowledged.
pub async fn handle_discard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/wizards/:id/fields/:field
///
/// A rejected phone number is not an error. `write` comes back as
/// `rejected` and the previous value stays. The view only carries
/// `phone_error` while the session is on the phone step.
pub async fn handle_set_field(
    State(state): State<AppState>,
    Path((id, field)): Path<(Uuid, String)>,
    Json(req): Json<ValueRequest>,
) -> Result<Json<SetFieldResponse>, AppError> {
    let response = state
        .sessions
        .with_session(id, |w| {
            let write = w.set_field_by_name(&field, req.value)?;
            Ok::<_, AppError>(SetFieldResponse {
                write,
                view: w.current_view(),
            })
        })
        .await??;
    Ok(Json(response))
}

/// PUT /api/v1/wizards/:id/lists/:field/:index
pub async fn handle_set_list_entry(
    State(state): State<AppState>,
    Path((id, field, index)): Path<(Uuid, String, usize)>,
    Json(req): Json<ValueRequest>,
) -> Result<Json<CurrentView>, AppError> {
    let view = state
        .sessions
        .with_session(id, |w| {
            w.set_list_entry_by_name(&field, index, req.value)?;
            Ok::<_, AppError>(w.current_view())
        })
        .await??;
    Ok(Json(view))
}

/// POST /api/v1/wizards/:id/lists/:field
pub async fn handle_append_list_entry(
    State(state): State<AppState>,
    Path((id, field)): Path<(Uuid, String)>,
) -> Result<Json<CurrentView>, AppError> {
    let view = state
        .sessions
        .with_session(id, |w| {
            w.append_list_entry_by_name(&field)?;
            Ok::<_, AppError>(w.current_view())
        })
        .await??;
    Ok(Json(view))
}

/// POST /api/v1/wizards/:id/advance
pub async fn handle_advance(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CurrentView>, AppError> {
    transition(&state, id, |w| {
        w.advance();
    })
    .await
}

/// POST /api/v1/wizards/:id/retreat
pub async fn handle_retreat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CurrentView>, AppError> {
    transition(&state, id, |w| {
        w.retreat();
    })
    .await
}

/// POST /api/v1/wizards/:id/finalize
pub async fn handle_finalize(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CurrentView>, AppError> {
    transition(&state, id, WizardController::finalize).await
}

/// POST /api/v1/wizards/:id/reset
pub async fn handle_reset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CurrentView>, AppError> {
    transition(&state, id, WizardController::reset).await
}

/// GET /api/v1/wizards/:id/resume
///
/// Plain-text resume. Only available once the wizard reached its summary.
pub async fn handle_resume_text(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let view = state.sessions.with_session(id, |w| w.current_view()).await?;
    let CurrentView::Summary(summary) = view else {
        return Err(AppError::Conflict(
            "Resume is available once every step is complete".to_string(),
        ));
    };
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        summary.to_plain_text(),
    ))
}

async fn transition(
    state: &AppState,
    id: Uuid,
    op: impl FnOnce(&mut WizardController),
) -> Result<Json<CurrentView>, AppError> {
    let view = state
        .sessions
        .with_session(id, |w| {
            op(w);
            w.current_view()
        })
        .await?;
    Ok(Json(view))
}
