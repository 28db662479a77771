//! Axum route handlers for the notes REST API.

use crate::error::NoteError;
use crate::service::NoteService;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::response::Json;
use axum::routing::get;
use notes_types::*;
use std::sync::Arc;
use std::time::Instant;

pub struct AppState {
    pub service: NoteService,
    pub start_time: Instant,
}

type ApiResult<T> = Result<Json<T>, NoteError>;

pub fn router(state: Arc<AppState>) -> Router {
    let cors = tower_http::cors::CorsLayer::permissive();

    Router::new()
        .route("/note", axum::routing::post(create_note))
        .route(
            "/note/:id",
            get(get_note_text).patch(update_note_text).delete(delete_note),
        )
        .route("/note/:id/info", get(get_note_info))
        .route("/note/:id/letters", get(count_note_letters))
        .route("/notes", get(list_notes))
        .route("/health", get(health))
        .with_state(state)
        .layer(cors)
}

// POST /note?text=..&token=..
pub async fn create_note(
    State(state): State<Arc<AppState>>,
    Query(q): Query<CreateNoteQuery>,
) -> ApiResult<CreateNoteResponse> {
    let id = state.service.create(q.token.as_deref(), &q.text)?;
    Ok(Json(CreateNoteResponse { id }))
}

// GET /note/{id}
pub async fn get_note_text(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Query(q): Query<TokenQuery>,
) -> ApiResult<NoteTextResponse> {
    let text = state.service.read_text(q.token.as_deref(), id)?;
    Ok(Json(NoteTextResponse { id, text }))
}

// GET /note/{id}/info
pub async fn get_note_info(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Query(q): Query<TokenQuery>,
) -> ApiResult<NoteInfoResponse> {
    let (created_at, updated_at) = state.service.read_info(q.token.as_deref(), id)?;
    Ok(Json(NoteInfoResponse {
        created_at,
        updated_at,
    }))
}

// GET /note/{id}/letters
pub async fn count_note_letters(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Query(q): Query<TokenQuery>,
) -> ApiResult<CountLettersResponse> {
    let (counted_at, counters) = state.service.count_letters(q.token.as_deref(), id)?;
    Ok(Json(CountLettersResponse {
        counted_at,
        counters,
    }))
}

// PATCH /note/{id}?new_text=..
pub async fn update_note_text(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Query(q): Query<UpdateNoteQuery>,
) -> ApiResult<NoteTextResponse> {
    let text = state
        .service
        .update_text(q.token.as_deref(), id, &q.new_text)?;
    Ok(Json(NoteTextResponse { id, text }))
}

// DELETE /note/{id}
pub async fn delete_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Query(q): Query<TokenQuery>,
) -> ApiResult<DetailResponse> {
    state.service.delete(q.token.as_deref(), id)?;
    Ok(Json(DetailResponse::new("Note deleted")))
}

// GET /notes
pub async fn list_notes(
    State(state): State<Arc<AppState>>,
    Query(q): Query<TokenQuery>,
) -> ApiResult<NoteListResponse> {
    let ids = state.service.list(q.token.as_deref())?;
    Ok(Json(NoteListResponse {
        notes: ids.into_iter().enumerate().collect(),
    }))
}

// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<ServiceStatus> {
    Json(ServiceStatus {
        running: true,
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}
