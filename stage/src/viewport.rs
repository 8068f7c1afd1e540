//! Viewport transform: the affine mapping `screen = scale * scene + translate`.
//!
//! Every operation here is pure. The session ([`crate::engine::EngineCore`])
//! holds the single live [`ViewportState`] and replaces it with the value
//! returned from [`ViewportState::zoom`] or [`ViewportState::pan_update`].

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde::Serialize;

use crate::consts::{MIN_SCALE, SCALE_BY};

/// A point in either screen or scene space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rejected zoom configuration.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ZoomLimitsError {
    #[error("minimum scale must be positive and finite, got {0}")]
    InvalidFloor(f64),
    #[error("zoom step must be finite and greater than 1, got {0}")]
    InvalidStep(f64),
}

/// Zoom step and scale floor. There is no upper bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    scale_by: f64,
    min_scale: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self { scale_by: SCALE_BY, min_scale: MIN_SCALE }
    }
}

impl ZoomLimits {
    /// Build limits, rejecting a floor that could let the scale reach zero.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomLimitsError`] if `min_scale` is not a positive finite
    /// number or `scale_by` is not a finite number above 1.
    pub fn new(scale_by: f64, min_scale: f64) -> Result<Self, ZoomLimitsError> {
        if !(min_scale.is_finite() && min_scale > 0.0) {
            return Err(ZoomLimitsError::InvalidFloor(min_scale));
        }
        if !(scale_by.is_finite() && scale_by > 1.0) {
            return Err(ZoomLimitsError::InvalidStep(scale_by));
        }
        Ok(Self { scale_by, min_scale })
    }

    #[must_use]
    pub fn scale_by(&self) -> f64 {
        self.scale_by
    }

    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }
}

/// Scale and translation of the scene.
///
/// `translate_x` / `translate_y` are in CSS pixels.
/// `scale` is a factor (1.0 = no zoom) and never drops below the floor of
/// the [`ZoomLimits`] it was zoomed with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewportState {
    pub scale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self { scale: 1.0, translate_x: 0.0, translate_y: 0.0 }
    }
}

impl ViewportState {
    /// Current translation as a point.
    #[must_use]
    pub fn translate(&self) -> Point {
        Point::new(self.translate_x, self.translate_y)
    }

    /// Convert a screen-space point (CSS pixels) to scene coordinates.
    #[must_use]
    pub fn screen_to_scene(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.translate_x) / self.scale,
            y: (screen.y - self.translate_y) / self.scale,
        }
    }

    /// Convert a scene-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn scene_to_screen(&self, scene: Point) -> Point {
        Point {
            x: scene.x * self.scale + self.translate_x,
            y: scene.y * self.scale + self.translate_y,
        }
    }

    /// Apply one wheel tick, keeping the scene point under `pointer` fixed.
    ///
    /// Negative `delta_y` zooms in by `scale_by`, positive zooms out. A zero
    /// delta (horizontal-only scroll) leaves the state untouched.
    #[must_use]
    pub fn zoom(&self, pointer: Point, delta_y: f64, limits: ZoomLimits) -> Self {
        if delta_y == 0.0 {
            return *self;
        }

        let anchor = self.screen_to_scene(pointer);
        let raw = if delta_y < 0.0 { self.scale * limits.scale_by } else { self.scale / limits.scale_by };
        let scale = raw.max(limits.min_scale);

        Self {
            scale,
            translate_x: (pointer.x / scale - anchor.x) * scale,
            translate_y: (pointer.y / scale - anchor.y) * scale,
        }
    }

    /// Shift the translation by a live drag delta in screen pixels.
    #[must_use]
    pub fn pan_update(&self, delta: Point) -> Self {
        Self {
            scale: self.scale,
            translate_x: self.translate_x + delta.x,
            translate_y: self.translate_y + delta.y,
        }
    }

    /// Pointer scene position at the end of a drag whose offset was tracked
    /// by the rendering surface rather than fed through [`Self::pan_update`].
    ///
    /// `self` is the state from before the drag started.
    #[must_use]
    pub fn pan_end(&self, drag_offset: Point, pointer: Point) -> Point {
        self.pan_update(drag_offset).screen_to_scene(pointer)
    }
}
