//! Serializable view of the studio sent to the frontend.
//!
//! A snapshot pairs the editable [`StudioState`] with the [`StudioReport`]
//! recomputed from it, so the frontend never has to call the engine itself.

use serde::{Deserialize, Serialize};
use volcano_engine::{Engine, StudioReport, StudioState};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudioSnapshot {
    pub state: StudioState,
    pub report: StudioReport,
}

impl StudioSnapshot {
    /// Should be called while holding the studio lock.
    pub fn from_state(state: &StudioState, engine: &Engine) -> Self {
        Self {
            state: state.clone(),
            report: state.report(engine),
        }
    }
}
