//! HTTP host for the Volcano prompt studio.
//!
//! `volcano-web` keeps one [`StudioState`] behind a mutex and exposes it
//! through a small REST API. Every response carries the recomputed engine
//! outputs (compiled prompt, warnings, tips, suggestions), so a browser
//! frontend only collects input and renders what it gets back.
//!
//! # Quick start
//!
//! ```ignore
//! use volcano_engine::{Engine, EngineConfig, StudioState};
//! use volcano_web::{WebConfig, spawn_web};
//! use std::sync::{Arc, Mutex};
//!
//! let config = EngineConfig::default();
//! let studio = Arc::new(Mutex::new(StudioState::from_config(&config)));
//!
//! let addr = spawn_web(studio, Engine::new(&config), WebConfig::default()).await?;
//! println!("Studio API: http://{addr}");
//! ```
//!
//! # Endpoints
//!
//! | Method | Path | Body | Effect |
//! |--------|------|------|--------|
//! | GET | `/api/state` | | Snapshot |
//! | POST | `/api/subject` | `{"subject"}` | Set subject |
//! | POST | `/api/model` | `{"model"}` | Switch model |
//! | POST | `/api/mode` | `{"mode"}` | Switch learning mode |
//! | POST | `/api/descriptors` | `{"token"}` | Add descriptor |
//! | DELETE | `/api/descriptors/{idx}` | | Remove descriptor (404 if out of range) |
//! | POST | `/api/negatives` | `{"token"}` | Add negative |
//! | DELETE | `/api/negatives/{idx}` | | Remove negative (404 if out of range) |
//! | POST | `/api/style-pack` | style pack | Add all pack tokens |
//! | POST | `/api/reset` | | Restore the initial state |
//! | POST | `/api/compile` | studio state | Stateless report |

mod api;
mod server;
pub mod snapshot;

pub use snapshot::StudioSnapshot;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use volcano_engine::{Engine, StudioState};

/// Configuration for the web server.
pub struct WebConfig {
    /// Address to bind to. Default: `127.0.0.1:3001`.
    pub bind_addr: SocketAddr,
    /// Directory with the frontend's static build.
    ///
    /// If `None`, only API endpoints are served and the frontend runs
    /// separately.
    pub static_dir: Option<PathBuf>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3001)),
            static_dir: None,
        }
    }
}

/// Spawn the web server on a Tokio task and return the bound address.
///
/// The state held in `studio` when this is called is what `POST /api/reset`
/// restores. The server runs until the Tokio runtime shuts down.
pub async fn spawn_web(
    studio: Arc<Mutex<StudioState>>,
    engine: Engine,
    config: WebConfig,
) -> Result<SocketAddr, String> {
    let initial = studio.lock().unwrap_or_else(|e| e.into_inner()).clone();
    let app_state = api::AppState {
        studio,
        engine: Arc::new(engine),
        initial,
    };
    let router = server::build_router(app_state, config.static_dir);
    server::start_server(router, config.bind_addr).await
}
