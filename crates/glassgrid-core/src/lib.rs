//! GlassGrid Core Types and Definitions
//!
//! This crate provides the foundational types for the GlassGrid layout
//! editor. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Geometry**: Integer grid coordinates and rectangles ([`geometry`] module)
//! - **Content**: Opaque per-cell payloads ([`content::Content`])
//! - **Grid**: The layout model itself ([`grid::Grid`], [`grid::Cell`])
//! - **Templates**: The contract with the external component catalog ([`template`] module)

pub mod content;
pub mod geometry;
pub mod grid;
pub mod identifier;
pub mod template;
