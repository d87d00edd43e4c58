//! HTTP projection of the editor operations.
//!
//! Every mutation response carries the freshly rendered preview, mirroring
//! the render-on-every-change model of the editor page.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::editor::{render_preview, Editor, EditorError, NodeId, NodeKind, ParseNodeIdError};
use crate::errors::AppError;
use crate::models::resume::ParsedResume;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub html: String,
}

#[derive(Serialize)]
pub struct PreviewResponse {
    pub html: String,
}

#[derive(Serialize)]
pub struct NodeResponse {
    pub id: NodeId,
    pub html: String,
}

#[derive(Deserialize)]
pub struct PersonalUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

#[derive(Deserialize)]
pub struct SectionUpdate {
    pub title: String,
}

#[derive(Deserialize)]
pub struct EntryUpdate {
    pub company: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
}

#[derive(Deserialize)]
pub struct PointUpdate {
    pub text: String,
}

async fn with_session<T>(
    state: &AppState,
    sid: Uuid,
    f: impl FnOnce(&mut Editor) -> T,
) -> Result<T, AppError> {
    state
        .sessions
        .with_editor(sid, f)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Unknown session: {sid}")))
}

fn parse_id(raw: &str, expected: NodeKind) -> Result<NodeId, AppError> {
    let id: NodeId = raw
        .parse()
        .map_err(|e: ParseNodeIdError| AppError::Validation(e.to_string()))?;
    if id.kind() != expected {
        return Err(AppError::Validation(format!(
            "expected a {} id, got {raw}",
            expected.name()
        )));
    }
    Ok(id)
}

/// POST /api/v1/editor
pub async fn handle_create_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let (session_id, html) = state.sessions.create(|editor| render_preview(editor)).await;
    Json(SessionResponse { session_id, html })
}

/// GET /api/v1/editor/:sid/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(sid): Path<Uuid>,
) -> Result<Json<PreviewResponse>, AppError> {
    let html = with_session(&state, sid, |editor| render_preview(editor)).await?;
    Ok(Json(PreviewResponse { html }))
}

/// POST /api/v1/editor/:sid/sections
pub async fn handle_add_section(
    State(state): State<AppState>,
    Path(sid): Path<Uuid>,
) -> Result<Json<NodeResponse>, AppError> {
    let (id, html) = with_session(&state, sid, |editor| {
        let id = editor.add_section();
        (id, render_preview(editor))
    })
    .await?;
    Ok(Json(NodeResponse { id, html }))
}

/// POST /api/v1/editor/:sid/sections/:id/entries
pub async fn handle_add_entry(
    State(state): State<AppState>,
    Path((sid, section_id)): Path<(Uuid, String)>,
) -> Result<Json<NodeResponse>, AppError> {
    let section_id = parse_id(&section_id, NodeKind::Section)?;
    let (id, html) = with_session(&state, sid, move |editor| -> Result<(NodeId, String), EditorError> {
        let id = editor.add_entry(section_id)?;
        Ok((id, render_preview(editor)))
    })
    .await??;
    Ok(Json(NodeResponse { id, html }))
}

/// POST /api/v1/editor/:sid/entries/:id/points
pub async fn handle_add_point(
    State(state): State<AppState>,
    Path((sid, entry_id)): Path<(Uuid, String)>,
) -> Result<Json<NodeResponse>, AppError> {
    let entry_id = parse_id(&entry_id, NodeKind::Entry)?;
    let (id, html) = with_session(&state, sid, move |editor| -> Result<(NodeId, String), EditorError> {
        let id = editor.add_point(entry_id)?;
        Ok((id, render_preview(editor)))
    })
    .await??;
    Ok(Json(NodeResponse { id, html }))
}

/// DELETE /api/v1/editor/:sid/nodes/:id
///
/// Accepts any node kind; the id prefix dispatches the deletion.
pub async fn handle_delete_node(
    State(state): State<AppState>,
    Path((sid, id)): Path<(Uuid, String)>,
) -> Result<Json<PreviewResponse>, AppError> {
    let id: NodeId = id
        .parse()
        .map_err(|e: ParseNodeIdError| AppError::Validation(e.to_string()))?;
    let html = with_session(&state, sid, move |editor| -> Result<String, EditorError> {
        editor.delete(id)?;
        Ok(render_preview(editor))
    })
    .await??;
    Ok(Json(PreviewResponse { html }))
}

/// PATCH /api/v1/editor/:sid/personal
pub async fn handle_update_personal(
    State(state): State<AppState>,
    Path(sid): Path<Uuid>,
    Json(update): Json<PersonalUpdate>,
) -> Result<Json<PreviewResponse>, AppError> {
    let html = with_session(&state, sid, move |editor| {
        let personal = &mut editor.personal;
        if let Some(name) = update.name {
            personal.name = name;
        }
        if let Some(email) = update.email {
            personal.email = email;
        }
        if let Some(phone) = update.phone {
            personal.phone = phone;
        }
        if let Some(location) = update.location {
            personal.location = location;
        }
        if let Some(linkedin) = update.linkedin {
            personal.linkedin = linkedin;
        }
        if let Some(github) = update.github {
            personal.github = github;
        }
        render_preview(editor)
    })
    .await?;
    Ok(Json(PreviewResponse { html }))
}

/// PATCH /api/v1/editor/:sid/sections/:id
pub async fn handle_update_section(
    State(state): State<AppState>,
    Path((sid, section_id)): Path<(Uuid, String)>,
    Json(update): Json<SectionUpdate>,
) -> Result<Json<PreviewResponse>, AppError> {
    let section_id = parse_id(&section_id, NodeKind::Section)?;
    let html = with_session(&state, sid, move |editor| -> Result<String, EditorError> {
        let section = editor.section_mut(section_id)?;
        section.title = update.title;
        Ok(render_preview(editor))
    })
    .await??;
    Ok(Json(PreviewResponse { html }))
}

/// PATCH /api/v1/editor/:sid/entries/:id
pub async fn handle_update_entry(
    State(state): State<AppState>,
    Path((sid, entry_id)): Path<(Uuid, String)>,
    Json(update): Json<EntryUpdate>,
) -> Result<Json<PreviewResponse>, AppError> {
    let entry_id = parse_id(&entry_id, NodeKind::Entry)?;
    let html = with_session(&state, sid, move |editor| -> Result<String, EditorError> {
        let entry = editor.entry_mut(entry_id)?;
        if let Some(company) = update.company {
            entry.company = company;
        }
        if let Some(position) = update.position {
            entry.position = position;
        }
        if let Some(location) = update.location {
            entry.location = location;
        }
        if let Some(duration) = update.duration {
            entry.duration = duration;
        }
        Ok(render_preview(editor))
    })
    .await??;
    Ok(Json(PreviewResponse { html }))
}

/// PATCH /api/v1/editor/:sid/points/:id
pub async fn handle_update_point(
    State(state): State<AppState>,
    Path((sid, point_id)): Path<(Uuid, String)>,
    Json(update): Json<PointUpdate>,
) -> Result<Json<PreviewResponse>, AppError> {
    let point_id = parse_id(&point_id, NodeKind::Point)?;
    let html = with_session(&state, sid, move |editor| -> Result<String, EditorError> {
        let point = editor.point_mut(point_id)?;
        point.text = update.text;
        Ok(render_preview(editor))
    })
    .await??;
    Ok(Json(PreviewResponse { html }))
}

/// POST /api/v1/editor/:sid/populate
pub async fn handle_populate(
    State(state): State<AppState>,
    Path(sid): Path<Uuid>,
    Json(resume): Json<ParsedResume>,
) -> Result<Json<PreviewResponse>, AppError> {
    let html = with_session(&state, sid, move |editor| {
        editor.populate(&resume);
        render_preview(editor)
    })
    .await?;
    Ok(Json(PreviewResponse { html }))
}
