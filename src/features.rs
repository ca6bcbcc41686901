//! Feature modules - widget logic separated from UI
//!
//! Each feature module contains the core logic the progress widgets build on.
//! Features should not depend on UI components directly.

pub mod accessibility;
pub mod geometry;
pub mod progress;
pub mod settings;
pub mod snapshot;

pub use geometry::MeasureSpec;
pub use progress::{CheckableProgress, DownloadState, ProgressState};
pub use settings::{ProgressAttributes, Settings, VisualStyle};
pub use snapshot::{Restore, SnapshotKind};
