//! Input model: mouse buttons, wheel deltas, and the interaction mode.
//!
//! `InteractionMode` is the explicit replacement for a document-wide
//! "grabbing" class: it lives in [`UiState`], and the cursor the host should
//! show is derived from it instead of being toggled as a side effect.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::viewport::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Whether pressing this button starts a pan.
    #[must_use]
    pub fn pans(self) -> bool {
        matches!(self, Self::Primary | Self::Middle)
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels. Carried so hosts can forward the
    /// raw event, but zoom reads only `dy`: a sideways trackpad swipe must not
    /// zoom, and panning is pointer-driven.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down = zoom out).
    pub dy: f64,
}

/// What the user is currently doing with the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionMode {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Dragging the scene.
    Panning {
        /// Screen-space position of the previous pointer event, used to compute the pan delta.
        ///
        /// `None` while the rendering surface tracks the drag itself and reports
        /// the accumulated offset when it ends.
        last_screen: Option<Point>,
    },
    /// Wheel zoom in progress. Ends on the next pointer move or press.
    Zooming {
        /// Direction of the last wheel tick.
        zoom_in: bool,
    },
}

/// Persistent UI state visible to the renderer and the host.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub mode: InteractionMode,
}

impl UiState {
    /// CSS cursor matching the current mode.
    #[must_use]
    pub fn cursor(&self) -> &'static str {
        match self.mode {
            InteractionMode::Idle => "grab",
            InteractionMode::Panning { .. } => "grabbing",
            InteractionMode::Zooming { zoom_in: true } => "zoom-in",
            InteractionMode::Zooming { zoom_in: false } => "zoom-out",
        }
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self.mode, InteractionMode::Panning { .. })
    }
}
