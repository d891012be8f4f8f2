//! REST API endpoint handlers.
//!
//! Every mutation goes through [`StudioState`]'s own methods (so tokens get
//! the same trim/dedup treatment as in the CLI) and answers with a fresh
//! [`StudioSnapshot`].

use std::sync::{Arc, Mutex, MutexGuard};

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use tracing::debug;
use volcano_engine::{Engine, LearningMode, ModelId, StudioReport, StudioState, StylePack};

use crate::snapshot::StudioSnapshot;

/// Shared application state passed to all handlers via axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub studio: Arc<Mutex<StudioState>>,
    pub engine: Arc<Engine>,
    /// State restored by `POST /api/reset`.
    pub initial: StudioState,
}

impl AppState {
    fn lock(&self) -> MutexGuard<'_, StudioState> {
        self.studio.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Apply `f` under the lock and return the resulting snapshot.
    fn update<R>(&self, f: impl FnOnce(&mut StudioState) -> R) -> (R, StudioSnapshot) {
        let mut studio = self.lock();
        let out = f(&mut studio);
        let snapshot = StudioSnapshot::from_state(&studio, &self.engine);
        (out, snapshot)
    }
}

/// GET /api/state — Current state plus derived report.
pub async fn get_state(State(app): State<AppState>) -> Json<StudioSnapshot> {
    let studio = app.lock();
    Json(StudioSnapshot::from_state(&studio, &app.engine))
}

#[derive(Deserialize)]
pub struct SubjectRequest {
    pub subject: String,
}

/// POST /api/subject
pub async fn post_subject(
    State(app): State<AppState>,
    Json(body): Json<SubjectRequest>,
) -> Json<StudioSnapshot> {
    let ((), snapshot) = app.update(|s| s.set_subject(body.subject));
    Json(snapshot)
}

#[derive(Deserialize)]
pub struct ModelRequest {
    pub model: ModelId,
}

/// POST /api/model — Unknown model names are rejected during extraction.
pub async fn post_model(
    State(app): State<AppState>,
    Json(body): Json<ModelRequest>,
) -> Json<StudioSnapshot> {
    debug!("Switching model to {}", body.model);
    let ((), snapshot) = app.update(|s| s.set_model(body.model));
    Json(snapshot)
}

#[derive(Deserialize)]
pub struct ModeRequest {
    pub mode: LearningMode,
}

/// POST /api/mode
pub async fn post_mode(
    State(app): State<AppState>,
    Json(body): Json<ModeRequest>,
) -> Json<StudioSnapshot> {
    let ((), snapshot) = app.update(|s| s.set_learning_mode(body.mode));
    Json(snapshot)
}

/// Request body for adding a descriptor or negative token.
#[derive(Deserialize)]
pub struct TokenRequest {
    pub token: String,
}

/// POST /api/descriptors — Blank and duplicate tokens are silently ignored.
pub async fn post_descriptor(
    State(app): State<AppState>,
    Json(body): Json<TokenRequest>,
) -> Json<StudioSnapshot> {
    let (added, snapshot) = app.update(|s| s.add_descriptor(&body.token));
    debug!("Add descriptor {:?}: added={added}", body.token);
    Json(snapshot)
}

/// DELETE /api/descriptors/{idx} — 404 if the index is out of range.
pub async fn delete_descriptor(
    State(app): State<AppState>,
    Path(idx): Path<usize>,
) -> Result<Json<StudioSnapshot>, StatusCode> {
    match app.update(|s| s.remove_descriptor(idx)) {
        (Some(_), snapshot) => Ok(Json(snapshot)),
        (None, _) => Err(StatusCode::NOT_FOUND),
    }
}

/// POST /api/negatives
pub async fn post_negative(
    State(app): State<AppState>,
    Json(body): Json<TokenRequest>,
) -> Json<StudioSnapshot> {
    let (added, snapshot) = app.update(|s| s.add_negative(&body.token));
    debug!("Add negative {:?}: added={added}", body.token);
    Json(snapshot)
}

/// DELETE /api/negatives/{idx} — 404 if the index is out of range.
pub async fn delete_negative(
    State(app): State<AppState>,
    Path(idx): Path<usize>,
) -> Result<Json<StudioSnapshot>, StatusCode> {
    match app.update(|s| s.remove_negative(idx)) {
        (Some(_), snapshot) => Ok(Json(snapshot)),
        (None, _) => Err(StatusCode::NOT_FOUND),
    }
}

/// POST /api/style-pack — Adds every pack token as a descriptor.
pub async fn post_style_pack(
    State(app): State<AppState>,
    Json(pack): Json<StylePack>,
) -> Json<StudioSnapshot> {
    let (added, snapshot) = app.update(|s| s.apply_style_pack(&pack));
    debug!("Style pack added {added} descriptor(s)");
    Json(snapshot)
}

/// POST /api/reset — Restore the initial state.
pub async fn post_reset(State(app): State<AppState>) -> Json<StudioSnapshot> {
    let initial = app.initial.clone();
    let ((), snapshot) = app.update(|s| *s = initial);
    Json(snapshot)
}

/// POST /api/compile — Stateless: report for the posted state, which is
/// not stored.
pub async fn post_compile(
    State(app): State<AppState>,
    Json(state): Json<StudioState>,
) -> Json<StudioReport> {
    Json(state.report(&app.engine))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_request_rejects_unknown_model() {
        assert!(serde_json::from_str::<ModelRequest>(r#"{"model":"midjourney"}"#).is_err());
        let req: ModelRequest = serde_json::from_str(r#"{"model":"nano_banana_pro"}"#).unwrap();
        assert_eq!(req.model, ModelId::NanoBananaPro);
    }

    #[test]
    fn mode_request_deserializes() {
        let req: ModeRequest = serde_json::from_str(r#"{"mode":"pro"}"#).unwrap();
        assert_eq!(req.mode, LearningMode::Pro);
    }

    #[test]
    fn update_returns_result_and_snapshot() {
        let app = AppState {
            studio: Arc::new(Mutex::new(StudioState::default())),
            engine: Arc::new(Engine::default()),
            initial: StudioState::default(),
        };
        let (added, snapshot) = app.update(|s| s.add_descriptor(" neon "));
        assert!(added);
        assert_eq!(snapshot.state.descriptors, vec!["neon"]);
        assert_eq!(snapshot.report.compiled, "neon.");
    }
}
