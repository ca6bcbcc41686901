//! Primitive UI elements - atomic building blocks
//!
//! This module contains the progress widgets, each implementing iced's
//! `canvas::Program` trait directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Self-contained**: Each primitive handles its own measurement and rendering
//!
//! # Contents
//!
//! - [`CircleProgress`] - Disc with a progress pie and a percentage label
//! - [`PinProgressButton`] - Checkable pin glyph over a progress pie

pub mod circle_progress;
pub mod pin_progress;

pub use circle_progress::CircleProgress;
pub use pin_progress::PinProgressButton;

use iced::Point;
use iced::widget::canvas::{Path, path::Arc};

use crate::features::geometry;

/// Pie wedge from 12 o'clock, `None` when nothing should be drawn
fn pie_path(center: Point, radius: f32, sweep_degrees: i32) -> Option<Path> {
    let (start_angle, end_angle) = geometry::pie_angles(sweep_degrees)?;
    Some(Path::new(|builder| {
        builder.move_to(center);
        builder.arc(Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
        builder.close();
    }))
}
