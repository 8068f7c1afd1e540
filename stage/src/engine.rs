use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::input::{Button, InteractionMode, UiState, WheelDelta};
use crate::layout::{LayoutError, RectSize};
use crate::render;
use crate::scene::{self, Card};
use crate::viewport::{Point, ViewportState, ZoomLimits};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Show this CSS cursor on the canvas element.
    SetCursor(&'static str),
    /// The pointer's scene position changed.
    PointerMoved(Point),
    /// The viewport transform changed; repaint.
    RenderNeeded,
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
/// `viewport` is the only source of truth for scale and translation: live drag
/// deltas are folded into it on every pointer move.
pub struct EngineCore {
    pub viewport: ViewportState,
    pub limits: ZoomLimits,
    pub pointer_scene: Point,
    pub ui: UiState,
    pub entries: Vec<Value>,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            viewport: ViewportState::default(),
            limits: ZoomLimits::default(),
            pointer_scene: Point::new(0.0, 0.0),
            ui: UiState::default(),
            entries: Vec::new(),
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            dpr: 1.0,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_limits(limits: ZoomLimits) -> Self {
        Self { limits, ..Self::default() }
    }

    // --- Data inputs ---

    /// Replace the displayed structure with freshly fetched entries.
    pub fn load_structure(&mut self, entries: Vec<Value>) {
        self.entries = entries;
    }

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    pub fn set_viewport(&mut self, width: f64, height: f64, dpr: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.dpr = dpr;
    }

    // --- Input events ---

    /// Zoom one wheel tick around `screen_pt`.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        // Horizontal scroll never zooms; see `WheelDelta::dx`.
        if delta.dy == 0.0 {
            return Vec::new();
        }

        self.viewport = self.viewport.zoom(screen_pt, delta.dy, self.limits);

        let mut actions = Vec::new();
        if !self.ui.is_panning() {
            let mode = InteractionMode::Zooming { zoom_in: delta.dy < 0.0 };
            if self.ui.mode != mode {
                self.ui.mode = mode;
                actions.push(Action::SetCursor(self.ui.cursor()));
            }
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Start a pan when a panning button goes down.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if !button.pans() {
            return Vec::new();
        }
        self.ui.mode = InteractionMode::Panning { last_screen: Some(screen_pt) };
        vec![Action::SetCursor(self.ui.cursor())]
    }

    /// Track the pointer, applying the drag delta while panning.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let mut actions = Vec::new();
        match self.ui.mode {
            InteractionMode::Panning { last_screen: Some(last) } => {
                let delta = Point::new(screen_pt.x - last.x, screen_pt.y - last.y);
                self.viewport = self.viewport.pan_update(delta);
                self.ui.mode = InteractionMode::Panning { last_screen: Some(screen_pt) };
                actions.push(Action::RenderNeeded);
            }
            InteractionMode::Zooming { .. } => {
                self.ui.mode = InteractionMode::Idle;
                actions.push(Action::SetCursor(self.ui.cursor()));
            }
            InteractionMode::Idle | InteractionMode::Panning { last_screen: None } => {}
        }
        self.pointer_scene = self.viewport.screen_to_scene(screen_pt);
        actions.push(Action::PointerMoved(self.pointer_scene));
        actions
    }

    /// Finish a pointer-driven pan.
    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if !button.pans() || !matches!(self.ui.mode, InteractionMode::Panning { last_screen: Some(_) }) {
            return Vec::new();
        }
        self.ui.mode = InteractionMode::Idle;
        self.pointer_scene = self.viewport.screen_to_scene(screen_pt);
        vec![Action::SetCursor(self.ui.cursor()), Action::PointerMoved(self.pointer_scene)]
    }

    /// The rendering surface started its own drag.
    pub fn on_drag_start(&mut self) -> Vec<Action> {
        self.ui.mode = InteractionMode::Panning { last_screen: None };
        vec![Action::SetCursor(self.ui.cursor())]
    }

    /// The rendering surface finished its own drag, moved by `drag_offset`.
    ///
    /// The offset is folded into the viewport only when the surface owns the
    /// drag (`on_drag_start` was seen). A pointer-driven pan has already been
    /// applied move by move, so it just ends. With no pan in progress this is
    /// a no-op.
    pub fn on_drag_end(&mut self, drag_offset: Point, screen_pt: Point) -> Vec<Action> {
        match self.ui.mode {
            InteractionMode::Panning { last_screen: None } => {
                self.pointer_scene = self.viewport.pan_end(drag_offset, screen_pt);
                self.viewport = self.viewport.pan_update(drag_offset);
                self.ui.mode = InteractionMode::Idle;
                vec![Action::SetCursor(self.ui.cursor()), Action::PointerMoved(self.pointer_scene), Action::RenderNeeded]
            }
            InteractionMode::Panning { last_screen: Some(_) } => {
                self.pointer_scene = self.viewport.screen_to_scene(screen_pt);
                self.ui.mode = InteractionMode::Idle;
                vec![Action::SetCursor(self.ui.cursor()), Action::PointerMoved(self.pointer_scene)]
            }
            InteractionMode::Idle | InteractionMode::Zooming { .. } => Vec::new(),
        }
    }

    // --- Queries ---

    /// The current viewport transform.
    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    /// Last known pointer position in scene coordinates.
    #[must_use]
    pub fn pointer_scene(&self) -> Point {
        self.pointer_scene
    }

    /// Cards for the loaded structure at the current scale.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if the viewport size is not finite.
    pub fn cards(&self) -> Result<Vec<Card>, LayoutError> {
        scene::build_cards(&self.entries, RectSize::new(self.viewport_width, self.viewport_height), self.viewport.scale)
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    // --- Delegated data inputs ---

    pub fn load_structure(&mut self, entries: Vec<Value>) {
        self.core.load_structure(entries);
    }

    // --- Viewport ---

    /// Update viewport dimensions and size the backing store to match.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        self.canvas.set_width((width_css * dpr).round().max(1.0) as u32);
        self.canvas.set_height((height_css * dpr).round().max(1.0) as u32);
    }

    // --- Delegated input events ---

    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        self.core.on_wheel(screen_pt, delta)
    }

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button)
    }

    pub fn on_drag_start(&mut self) -> Vec<Action> {
        self.core.on_drag_start()
    }

    pub fn on_drag_end(&mut self, drag_offset: Point, screen_pt: Point) -> Vec<Action> {
        self.core.on_drag_end(drag_offset, screen_pt)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable, the layout is invalid,
    /// or a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let cards = self.core.cards().map_err(|e| JsValue::from_str(&e.to_string()))?;
        render::draw(&ctx, &cards, &self.core.viewport, self.core.viewport_width, self.core.viewport_height, self.core.dpr)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        self.core.viewport()
    }

    #[must_use]
    pub fn pointer_scene(&self) -> Point {
        self.core.pointer_scene()
    }
}
