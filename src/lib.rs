//! Pin-shaped and circular progress widgets for iced
//!
//! The widgets keep their progress state, resolve their style attributes once
//! at construction, and can save and restore their state through a tagged
//! snapshot envelope.

pub mod app;
pub mod features;
pub mod i18n;
pub mod ui;

pub use features::{MeasureSpec, ProgressAttributes, ProgressState, Settings};
pub use ui::primitives::{CircleProgress, PinProgressButton};
