//! Per-frame scene markup.
//!
//! [`build::build_scene`] places the logo, tagline and cursor for a [`crate::VisualState`];
//! [`model::Scene::to_svg`] serializes the result as a standalone SVG document.

/// Layout of the logo, tagline and cursor.
pub mod build;
/// Scene node types.
pub mod model;
pub(crate) mod svg;
