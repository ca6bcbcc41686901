//! Circular progress indicator primitive
//!
//! Draws a filled disc, a pie sweep of `360 * progress / max` degrees from
//! 12 o'clock, and a centred `"<progress>%"` label, using iced's Canvas.
//!
//! # Design
//!
//! This is a primitive component that implements `canvas::Program` trait.
//! It uses generic Message types and does not depend on application-specific types.
//! The drawing is cached and the cache is dropped whenever the progress state
//! reports a new revision.

use std::cell::Cell;

use iced::widget::Canvas;
use iced::widget::canvas::{Cache, Frame, Geometry, Path, Program, Text};
use iced::{Element, Pixels, Rectangle, Renderer, Size, Theme, mouse};

use crate::features::geometry::{self, MeasureSpec};
use crate::features::progress::ProgressState;
use crate::features::settings::{ProgressAttributes, VisualStyle};
use crate::features::snapshot::{self, Restore, SavedFields, SnapshotKind};

/// Circular progress indicator with a percentage label
pub struct CircleProgress {
    state: ProgressState,
    style: VisualStyle,
    save_enabled: bool,
    cache: Cache,
    painted_revision: Cell<Option<u64>>,
}

impl CircleProgress {
    /// Build from style attributes, resolved against the given theme colours
    pub fn new(attributes: &ProgressAttributes, style: VisualStyle) -> Self {
        Self {
            state: ProgressState::new(attributes.progress, attributes.max),
            style,
            save_enabled: true,
            cache: Cache::new(),
            painted_revision: Cell::new(None),
        }
    }

    pub fn max(&self) -> i32 {
        self.state.max()
    }

    pub fn set_max(&mut self, max: i32) {
        self.state.set_max(max);
    }

    pub fn progress(&self) -> i32 {
        self.state.progress()
    }

    pub fn set_progress(&mut self, progress: i32) {
        self.state.set_progress(progress);
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    pub fn style(&self) -> &VisualStyle {
        &self.style
    }

    /// Whether `save_state` persists the progress fields
    pub fn set_save_enabled(&mut self, enabled: bool) {
        self.save_enabled = enabled;
    }

    /// Intrinsic square size, resolved against host constraints
    pub fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size {
        geometry::measure(self.style.drawable_size, width, height)
    }

    /// Append our fields to the parent's saved payload
    pub fn save_state(&self, parent: Vec<u8>) -> Vec<u8> {
        snapshot::save(
            parent,
            SavedFields {
                progress: self.state.progress(),
                max: self.state.max(),
                checked: None,
            },
            self.save_enabled,
        )
    }

    /// Restore from a saved blob and return what the parent should restore
    pub fn restore_state(&mut self, blob: Vec<u8>) -> Vec<u8> {
        match snapshot::restore(blob, SnapshotKind::Progress) {
            Restore::Ours { parent, fields } => {
                self.state.restore(fields.progress, fields.max);
                parent
            }
            Restore::Delegate(blob) => blob,
        }
    }

    /// Canvas element sized to the intrinsic drawable size
    pub fn view<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        let size = self.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
        Canvas::new(self).width(size.width).height(size.height).into()
    }

    fn sync_cache(&self) {
        let revision = Some(self.state.revision());
        if self.painted_revision.get() != revision {
            self.cache.clear();
            self.painted_revision.set(revision);
        }
    }

    fn paint(&self, frame: &mut Frame) {
        let layout = geometry::Geometry::compute(
            frame.size(),
            self.style.drawable_size,
            self.style.inner_size,
        );
        let center = layout.disc_center();
        let radius = layout.disc_radius();

        // Background disc
        frame.fill(&Path::circle(center, radius), self.style.circle_color);

        // Progress pie
        if let Some(pie) = super::pie_path(center, radius, self.state.sweep_degrees()) {
            frame.fill(&pie, self.style.progress_color);
        }

        frame.fill_text(Text {
            content: self.state.label(),
            position: layout.center,
            color: self.style.text_color,
            size: Pixels(self.style.text_size),
            align_x: iced::alignment::Horizontal::Center.into(),
            align_y: iced::alignment::Vertical::Center,
            ..Text::default()
        });
    }
}

impl<Message> Program<Message> for CircleProgress {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        self.sync_cache();
        vec![
            self.cache
                .draw(renderer, bounds.size(), |frame| self.paint(frame)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Color;

    fn style() -> VisualStyle {
        ProgressAttributes::default().resolve(crate::features::settings::ThemeColors {
            circle: Color::BLACK,
            progress: Color::WHITE,
            text: Color::BLACK,
        })
    }

    fn circle() -> CircleProgress {
        CircleProgress::new(&ProgressAttributes::default(), style())
    }

    #[test]
    fn starts_from_attributes() {
        let attributes = ProgressAttributes {
            max: 250,
            progress: 42,
            ..Default::default()
        };
        let circle = CircleProgress::new(&attributes, style());
        assert_eq!(circle.progress(), 42);
        assert_eq!(circle.max(), 250);
    }

    #[test]
    fn save_and_restore_on_fresh_instance() {
        for (progress, max) in [(0, 100), (100, 100), (42, 250)] {
            let mut original = circle();
            original.set_max(max);
            original.set_progress(progress);

            let blob = original.save_state(b"parent".to_vec());

            let mut fresh = circle();
            let parent = fresh.restore_state(blob);
            assert_eq!(parent, b"parent".to_vec());
            assert_eq!((fresh.progress(), fresh.max()), (progress, max));
        }
    }

    #[test]
    fn foreign_state_goes_to_parent() {
        let mut circle = circle();
        circle.set_progress(12);
        let foreign = vec![9, 9, 9];
        assert_eq!(circle.restore_state(foreign.clone()), foreign);
        assert_eq!(circle.progress(), 12);
    }

    #[test]
    fn disabled_save_keeps_parent_only() {
        let mut circle = circle();
        circle.set_save_enabled(false);
        circle.set_progress(80);
        assert_eq!(circle.save_state(vec![1]), vec![1]);
    }

    #[test]
    fn setters_request_repaint_each_call() {
        let mut circle = circle();
        let before = circle.state().revision();
        circle.set_progress(0);
        circle.set_progress(0);
        circle.set_max(100);
        assert_eq!(circle.state().revision(), before + 3);
    }

    #[test]
    fn zero_max_is_safe() {
        let mut circle = circle();
        circle.set_max(0);
        circle.set_progress(0);
        assert_eq!(circle.state().sweep_degrees(), 0);
        assert_eq!(geometry::pie_angles(circle.state().sweep_degrees()), None);
        let center = iced::Point::new(24.0, 24.0);
        assert!(crate::ui::primitives::pie_path(center, 14.0, circle.state().sweep_degrees()).is_none());
    }

    #[test]
    fn measures_intrinsic_size() {
        let circle = circle();
        assert_eq!(
            circle.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified),
            Size::new(48.0, 48.0)
        );
        assert_eq!(
            circle.measure(MeasureSpec::Exactly(80.0), MeasureSpec::AtMost(32.0)),
            Size::new(80.0, 32.0)
        );
    }
}
