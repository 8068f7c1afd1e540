//! Scene model: turns fetched structure entries into positioned cards.
//!
//! The grid dimensions are derived here from the entry count and handed to
//! [`crate::layout`] as explicit inputs; the layout module never looks at
//! the data.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::Serialize;
use serde_json::Value;

use crate::consts::{CARD_FONT_PX, CARD_FRACTION, CARD_GAP, CARD_STROKE_PX};
use crate::layout::{self, LayoutError, RectSize};

/// A drawable card in scene coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    /// Left edge in scene coordinates.
    pub x: f64,
    /// Top edge in scene coordinates.
    pub y: f64,
    pub size: RectSize,
    pub text: String,
    /// Outline width in scene units; shrinks as the scale grows.
    pub stroke_width: f64,
    pub font_size: f64,
    /// Viewport scale the card was built for.
    pub scale: f64,
}

/// Rows and columns for `count` cards: the smallest square-ish grid that
/// fits them, filled row by row.
#[must_use]
pub fn grid_dims(count: usize) -> (usize, usize) {
    if count == 0 {
        return (0, 0);
    }
    let mut columns = count.isqrt();
    if columns * columns < count {
        columns += 1;
    }
    (count.div_ceil(columns), columns)
}

/// Label for one entry of the structure payload.
///
/// Strings are used as-is; objects contribute their `name`, then `title`;
/// anything else falls back to its compact JSON text.
#[must_use]
pub fn card_label(entry: &Value) -> String {
    match entry {
        Value::String(s) => s.clone(),
        Value::Object(map) => map
            .get("name")
            .or_else(|| map.get("title"))
            .and_then(Value::as_str)
            .map_or_else(|| entry.to_string(), str::to_string),
        other => other.to_string(),
    }
}

/// Lay out one card per entry, centered inside `parent`, for the given scale.
///
/// # Errors
///
/// Propagates [`LayoutError`] when `parent` has non-finite dimensions.
pub fn build_cards(entries: &[Value], parent: RectSize, scale: f64) -> Result<Vec<Card>, LayoutError> {
    if entries.is_empty() {
        return Ok(Vec::new());
    }

    let (rows, columns) = grid_dims(entries.len());
    let size = layout::relative_size(parent, CARD_FRACTION);
    let left = layout::center_offset_x(0.0, parent.width, size.width, CARD_GAP, columns)?;
    let top = layout::center_offset_y(0.0, parent.height, size.height, CARD_GAP, rows)?;
    let placements = layout::compute_grid(rows, columns, size, CARD_GAP)?;

    Ok(entries
        .iter()
        .zip(placements)
        .map(|(entry, placement)| Card {
            x: left + placement.x,
            y: top + placement.y,
            size,
            text: card_label(entry),
            stroke_width: CARD_STROKE_PX / scale,
            font_size: CARD_FONT_PX,
            scale,
        })
        .collect())
}
