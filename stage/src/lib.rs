//! Viewport and layout engine for the company-structure canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser, and is also
//! linked natively by the `orgchart` binary for headless scene output. It owns
//! the pan/zoom transform between screen and scene coordinates, the grid
//! layout of structure cards, and the session that turns raw pointer and
//! wheel events into transform updates. The host layer only wires DOM events
//! to the engine and acts on the returned [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] session |
//! | [`viewport`] | Viewport transform: zoom, pan, coordinate conversions |
//! | [`layout`] | Row-major grid placement and block centering |
//! | [`scene`] | Card derivation from fetched structure entries |
//! | [`input`] | Input event types and the interaction mode |
//! | [`render`] | Card rendering to a 2D canvas context |
//! | [`consts`] | Shared numeric constants (zoom step, scale floor, card sizing) |

pub mod consts;
pub mod engine;
pub mod input;
pub mod layout;
pub mod render;
pub mod scene;
pub mod viewport;
