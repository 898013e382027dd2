use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use uuid::Uuid;

use coursedeck_builder::session::{ElementCapabilities, ElementPatch, SelectedElement};

use crate::auth::AdminSession;
use crate::AppState;

fn parse_site_id(id: &str) -> Result<Uuid, Response> {
    Uuid::parse_str(id)
        .map_err(|_| (StatusCode::BAD_REQUEST, "Invalid site ID").into_response())
}

fn no_session() -> Response {
    (StatusCode::NOT_FOUND, "No builder session for site").into_response()
}

// --- Sites ---

pub async fn api_sites(
    _session: AdminSession,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    Json(state.store.list().await)
}

// --- Builder session: selection ---

#[derive(Deserialize)]
pub struct SelectBody {
    pub id: String,
    pub element_type: String,
    #[serde(default)]
    pub overlay: bool,
    #[serde(default = "default_opacity")]
    pub opacity: u8,
    #[serde(default)]
    pub caption: bool,
    #[serde(default)]
    pub popup: bool,
}

fn default_opacity() -> u8 {
    50
}

pub async fn select_element(
    _session: AdminSession,
    State(state): State<Arc<AppState>>,
    Path(site_id): Path<String>,
    Json(body): Json<SelectBody>,
) -> Response {
    let uuid = match parse_site_id(&site_id) {
        Ok(u) => u,
        Err(resp) => return resp,
    };

    let selection = SelectedElement {
        id: body.id,
        element_type: body.element_type,
        capabilities: ElementCapabilities {
            overlay: body.overlay,
            opacity: body.opacity,
            caption: body.caption,
            popup: body.popup,
        },
    };

    match state.sessions.with(uuid, |session| {
        session.select(selection);
        session.selected().cloned()
    }) {
        Some(Some(selected)) => Json(selected).into_response(),
        _ => no_session(),
    }
}

pub async fn deselect_element(
    _session: AdminSession,
    State(state): State<Arc<AppState>>,
    Path(site_id): Path<String>,
) -> Response {
    let uuid = match parse_site_id(&site_id) {
        Ok(u) => u,
        Err(resp) => return resp,
    };

    match state.sessions.with(uuid, |session| session.deselect()) {
        Some(()) => StatusCode::NO_CONTENT.into_response(),
        None => no_session(),
    }
}

// --- Builder session: page elements ---

#[derive(Deserialize)]
pub struct AddElementBody {
    pub element_type: String,
}

pub async fn add_element(
    _session: AdminSession,
    State(state): State<Arc<AppState>>,
    Path(site_id): Path<String>,
    Json(body): Json<AddElementBody>,
) -> Response {
    let uuid = match parse_site_id(&site_id) {
        Ok(u) => u,
        Err(resp) => return resp,
    };

    match state
        .sessions
        .with(uuid, |session| session.add_element(&body.element_type))
    {
        Some(element) => Json(element).into_response(),
        None => no_session(),
    }
}

pub async fn update_element(
    _session: AdminSession,
    State(state): State<Arc<AppState>>,
    Path((site_id, element_id)): Path<(String, String)>,
    Json(patch): Json<ElementPatch>,
) -> Response {
    let uuid = match parse_site_id(&site_id) {
        Ok(u) => u,
        Err(resp) => return resp,
    };

    match state
        .sessions
        .with(uuid, |session| session.update_element(&element_id, patch))
    {
        Some(Some(element)) => Json(element).into_response(),
        Some(None) => (StatusCode::NOT_FOUND, "No such element").into_response(),
        None => no_session(),
    }
}

pub async fn delete_element(
    _session: AdminSession,
    State(state): State<Arc<AppState>>,
    Path((site_id, element_id)): Path<(String, String)>,
) -> Response {
    let uuid = match parse_site_id(&site_id) {
        Ok(u) => u,
        Err(resp) => return resp,
    };

    match state
        .sessions
        .with(uuid, |session| session.delete_element(&element_id))
    {
        Some(()) => StatusCode::NO_CONTENT.into_response(),
        None => no_session(),
    }
}
