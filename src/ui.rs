//! UI module for the progress widgets and the demo window
//!
//! # Architecture
//!
//! - **Primitives** (`primitives`): canvas programs drawing the progress widgets
//! - **Theme** (`theme`): palette and container styles

pub mod primitives;
pub mod theme;
