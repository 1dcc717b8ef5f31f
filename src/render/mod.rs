//! Rendering: filter the catalog, project cards and summarize.
//!
//! `build_visible_cards` is pure. Its `RenderOutput` is consumed by a
//! presentation adapter such as [`html`].

pub mod html;
pub mod renderer;
pub mod status;

pub use renderer::{build_visible_cards, RenderOutput};
pub use status::Status;
