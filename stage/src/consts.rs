//! Shared numeric constants for the stage crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Multiplicative zoom step applied per wheel tick.
pub const SCALE_BY: f64 = 1.04;

/// Lowest scale the viewport may reach. Must stay positive.
pub const MIN_SCALE: f64 = 0.5;

// ── Viewport ────────────────────────────────────────────────────

/// Default viewport width in CSS pixels.
pub const VIEWPORT_WIDTH: f64 = 1280.0;

/// Default viewport height in CSS pixels.
pub const VIEWPORT_HEIGHT: f64 = 720.0;

// ── Cards ───────────────────────────────────────────────────────

/// Card size as a fraction of the viewport, applied to both axes.
pub const CARD_FRACTION: f64 = 0.12;

/// Gap between neighbouring cards in scene units.
pub const CARD_GAP: f64 = 16.0;

/// On-screen stroke width of a card outline; divided by the current scale.
pub const CARD_STROKE_PX: f64 = 1.0;

/// Label font size in scene units.
pub const CARD_FONT_PX: f64 = 14.0;
