//! Grid layout: row-major placement of uniform cells and block centering.
//!
//! Placements are offsets inside an unscaled grid whose top-left cell sits at
//! the origin. Centering and viewport translation are applied by callers.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use serde::Serialize;

/// Width and height of a region or a card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectSize {
    pub width: f64,
    pub height: f64,
}

impl RectSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// One cell's offset within the grid.
///
/// `key` is `row - column`. Distinct cells can share a key, so it is only a
/// rendering hint and never an identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardPlacement {
    pub key: i64,
    pub x: f64,
    pub y: f64,
}

/// Caller contract violations.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("gap must be finite and non-negative, got {0}")]
    InvalidGap(f64),
    #[error("cell size must be finite, got {width}x{height}")]
    InvalidCellSize { width: f64, height: f64 },
    #[error("cannot center an empty block")]
    EmptyBlock,
}

/// Place `rows * columns` cells of `cell` size separated by `gap`, row by row.
///
/// # Errors
///
/// Returns [`LayoutError`] if `gap` is negative or non-finite, or if either
/// cell dimension is non-finite.
pub fn compute_grid(rows: usize, columns: usize, cell: RectSize, gap: f64) -> Result<Vec<CardPlacement>, LayoutError> {
    check_gap(gap)?;
    if !(cell.width.is_finite() && cell.height.is_finite()) {
        return Err(LayoutError::InvalidCellSize { width: cell.width, height: cell.height });
    }

    let step_x = cell.width + gap;
    let step_y = cell.height + gap;
    let mut placements = Vec::with_capacity(rows.saturating_mul(columns));
    for row in 0..rows {
        for col in 0..columns {
            placements.push(CardPlacement { key: signed(row) - signed(col), x: index_f64(col) * step_x, y: index_f64(row) * step_y });
        }
    }
    Ok(placements)
}

/// Scale both dimensions of `parent` by `fraction`. No aspect lock, no bounds.
#[must_use]
pub fn relative_size(parent: RectSize, fraction: f64) -> RectSize {
    RectSize { width: parent.width * fraction, height: parent.height * fraction }
}

/// Left edge that horizontally centers `columns` children inside
/// `[region_x, region_x + region_width]`.
///
/// # Errors
///
/// Returns [`LayoutError::EmptyBlock`] when `columns` is zero, and
/// [`LayoutError::InvalidGap`] for a negative or non-finite gap.
pub fn center_offset_x(region_x: f64, region_width: f64, child_width: f64, child_gap: f64, columns: usize) -> Result<f64, LayoutError> {
    center_offset(region_x, region_width, child_width, child_gap, columns)
}

/// Top edge that vertically centers `rows` children inside
/// `[region_y, region_y + region_height]`.
///
/// # Errors
///
/// Same conditions as [`center_offset_x`].
pub fn center_offset_y(region_y: f64, region_height: f64, child_height: f64, child_gap: f64, rows: usize) -> Result<f64, LayoutError> {
    center_offset(region_y, region_height, child_height, child_gap, rows)
}

fn center_offset(start: f64, extent: f64, child: f64, gap: f64, count: usize) -> Result<f64, LayoutError> {
    check_gap(gap)?;
    if count == 0 {
        return Err(LayoutError::EmptyBlock);
    }
    let n = index_f64(count);
    let block = (n - 1.0) * gap + n * child;
    Ok(start + (extent - block) / 2.0)
}

fn check_gap(gap: f64) -> Result<(), LayoutError> {
    if gap.is_finite() && gap >= 0.0 { Ok(()) } else { Err(LayoutError::InvalidGap(gap)) }
}

#[allow(clippy::cast_precision_loss)]
fn index_f64(i: usize) -> f64 {
    i as f64
}

#[allow(clippy::cast_possible_wrap)]
fn signed(i: usize) -> i64 {
    i as i64
}
