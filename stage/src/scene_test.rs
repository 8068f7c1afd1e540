#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn parent() -> RectSize {
    RectSize::new(1000.0, 500.0)
}

// =============================================================
// grid_dims
// =============================================================

#[test]
fn grid_dims_empty() {
    assert_eq!(grid_dims(0), (0, 0));
}

#[test]
fn grid_dims_perfect_squares() {
    assert_eq!(grid_dims(1), (1, 1));
    assert_eq!(grid_dims(4), (2, 2));
    assert_eq!(grid_dims(9), (3, 3));
}

#[test]
fn grid_dims_rounds_columns_up() {
    assert_eq!(grid_dims(2), (1, 2));
    assert_eq!(grid_dims(3), (2, 2));
    assert_eq!(grid_dims(5), (2, 3));
    assert_eq!(grid_dims(10), (3, 4));
}

#[test]
fn grid_dims_always_fits_count() {
    for count in 1..200 {
        let (rows, columns) = grid_dims(count);
        assert!(rows * columns >= count, "{count}");
        assert!((rows - 1) * columns < count, "{count} leaves an empty row");
    }
}

// =============================================================
// card_label
// =============================================================

#[test]
fn label_from_string() {
    assert_eq!(card_label(&json!("Engineering")), "Engineering");
}

#[test]
fn label_from_name_field() {
    assert_eq!(card_label(&json!({"name": "Sales", "title": "ignored"})), "Sales");
}

#[test]
fn label_from_title_field() {
    assert_eq!(card_label(&json!({"title": "CEO"})), "CEO");
}

#[test]
fn label_falls_back_to_json_for_non_string_name() {
    assert_eq!(card_label(&json!({"name": 7})), r#"{"name":7}"#);
}

#[test]
fn label_falls_back_to_json_for_scalars() {
    assert_eq!(card_label(&json!(42)), "42");
    assert_eq!(card_label(&json!(null)), "null");
}

// =============================================================
// build_cards
// =============================================================

#[test]
fn build_cards_empty_entries() {
    assert!(build_cards(&[], parent(), 1.0).unwrap().is_empty());
}

#[test]
fn build_cards_one_per_entry() {
    let entries: Vec<_> = (0..7).map(|i| json!(format!("dept {i}"))).collect();
    let cards = build_cards(&entries, parent(), 1.0).unwrap();
    assert_eq!(cards.len(), 7);
    assert_eq!(cards[0].text, "dept 0");
    assert_eq!(cards[6].text, "dept 6");
}

#[test]
fn build_cards_centers_two_by_two_block() {
    let entries = vec![json!("a"), json!("b"), json!("c"), json!("d")];
    let cards = build_cards(&entries, parent(), 1.0).unwrap();
    // card 120x60, gap 16: block 256x136 inside 1000x500
    let expected = [(372.0, 182.0), (508.0, 182.0), (372.0, 258.0), (508.0, 258.0)];
    for (card, (x, y)) in cards.iter().zip(expected) {
        assert!(approx_eq(card.x, x), "{card:?}");
        assert!(approx_eq(card.y, y), "{card:?}");
        assert!(approx_eq(card.size.width, 120.0));
        assert!(approx_eq(card.size.height, 60.0));
    }
}

#[test]
fn build_cards_row_major_order() {
    let entries = vec![json!("a"), json!("b"), json!("c")];
    let cards = build_cards(&entries, parent(), 1.0).unwrap();
    assert!(approx_eq(cards[0].y, cards[1].y));
    assert!(cards[1].x > cards[0].x);
    assert!(cards[2].y > cards[0].y);
    assert!(approx_eq(cards[2].x, cards[0].x));
}

#[test]
fn build_cards_stroke_scales_inversely() {
    let entries = vec![json!("a")];
    let at_one = build_cards(&entries, parent(), 1.0).unwrap();
    let at_two = build_cards(&entries, parent(), 2.0).unwrap();
    assert_eq!(at_one[0].stroke_width, 1.0);
    assert_eq!(at_two[0].stroke_width, 0.5);
    assert_eq!(at_two[0].scale, 2.0);
    assert_eq!(at_two[0].font_size, 14.0);
}

#[test]
fn build_cards_position_ignores_scale() {
    let entries = vec![json!("a"), json!("b")];
    let a = build_cards(&entries, parent(), 1.0).unwrap();
    let b = build_cards(&entries, parent(), 3.5).unwrap();
    assert_eq!(a[1].x, b[1].x);
    assert_eq!(a[1].y, b[1].y);
}

#[test]
fn build_cards_rejects_non_finite_parent() {
    let entries = vec![json!("a")];
    assert!(build_cards(&entries, RectSize::new(f64::INFINITY, 100.0), 1.0).is_err());
}
