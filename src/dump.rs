//! Headless scene output: the viewport and the laid-out cards as JSON.

#[cfg(test)]
#[path = "dump_test.rs"]
mod dump_test;

use serde::Serialize;
use serde_json::Value;
use stage::engine::EngineCore;
use stage::layout::LayoutError;
use stage::scene::Card;
use stage::viewport::ViewportState;

use crate::config::Config;

#[derive(Debug, Serialize)]
pub struct SceneDump {
    pub width: f64,
    pub height: f64,
    pub viewport: ViewportState,
    pub cards: Vec<Card>,
}

/// Lay out `entries` for the configured viewport and scale.
///
/// # Errors
///
/// Propagates [`LayoutError`] from the card layout.
pub fn build(config: &Config, entries: &[Value]) -> Result<SceneDump, LayoutError> {
    let mut core = EngineCore::new();
    core.set_viewport(config.width, config.height, 1.0);
    core.viewport = ViewportState { scale: config.scale, ..ViewportState::default() };
    core.load_structure(entries.to_vec());

    Ok(SceneDump { width: config.width, height: config.height, viewport: core.viewport(), cards: core.cards()? })
}
