//! Rendering: draws the card grid to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives the cards and the viewport transform read-only and produces
//! pixels — it does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::scene::Card;
use crate::viewport::ViewportState;

const CARD_FILL: &str = "#ffffff";
const CARD_STROKE: &str = "#1f2933";
const CARD_TEXT: &str = "#1f2933";
const BACKGROUND: &str = "#f4f5f7";

/// Draw the full scene.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    cards: &[Card],
    viewport: &ViewportState,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    // Screen space: clear at device resolution.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, viewport_w, viewport_h);

    // Scene space.
    ctx.translate(viewport.translate_x, viewport.translate_y)?;
    ctx.scale(viewport.scale, viewport.scale)?;

    for card in cards {
        draw_card(ctx, card)?;
    }
    Ok(())
}

fn draw_card(ctx: &CanvasRenderingContext2d, card: &Card) -> Result<(), JsValue> {
    ctx.save();

    ctx.set_fill_style_str(CARD_FILL);
    ctx.fill_rect(card.x, card.y, card.size.width, card.size.height);

    ctx.set_stroke_style_str(CARD_STROKE);
    ctx.set_line_width(card.stroke_width);
    ctx.stroke_rect(card.x, card.y, card.size.width, card.size.height);

    ctx.set_fill_style_str(CARD_TEXT);
    ctx.set_font(&format!("{}px sans-serif", card.font_size));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let center_x = card.x + card.size.width / 2.0;
    let center_y = card.y + card.size.height / 2.0;
    ctx.fill_text_with_max_width(&card.text, center_x, center_y, card.size.width)?;

    ctx.restore();
    Ok(())
}
