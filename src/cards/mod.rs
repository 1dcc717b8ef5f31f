//! Card projection: what a record looks like on screen.
//!
//! ## Key Types
//!
//! - `CubeCard`: Title, badges, stat lines and styling of one record
//! - `Badge`: Labelled, styled tag shown under the title

pub mod projector;

pub use projector::{project_card, Badge, CubeCard, CARD_CLASS, NUMERO_PREFIX};
