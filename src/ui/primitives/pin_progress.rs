//! Checkable pin progress button primitive
//!
//! A disc holding a pie sweep of the download progress with a pin glyph on
//! top. The checked ("pinned") state fills the glyph and brightens the disc;
//! the unchecked state outlines the glyph over a muted disc.
//!
//! Clicking the button does not flip the state by itself: it publishes the
//! registered checked-change message with the toggled value, and the owner
//! applies it with [`PinProgressButton::set_checked`].

use std::cell::Cell;

use iced::widget::Canvas;
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Program, Stroke};
use iced::{Element, Point, Rectangle, Renderer, Size, Theme, mouse};

use crate::features::geometry::{self, MeasureSpec};
use crate::features::progress::{CheckableProgress, ProgressState};
use crate::features::settings::{ProgressAttributes, VisualStyle};
use crate::features::snapshot::{self, Restore, SavedFields, SnapshotKind};
use crate::ui::theme;

/// Disc opacity while unpinned
const UNCHECKED_DISC_ALPHA: f32 = 0.45;

/// Outline width of the unpinned glyph
const GLYPH_STROKE: f32 = 1.5;

type CheckedListener<Message> = Box<dyn Fn(bool) -> Message>;

/// Pin-shaped progress toggle
pub struct PinProgressButton<Message> {
    state: CheckableProgress,
    style: VisualStyle,
    save_enabled: bool,
    on_checked_change: Option<CheckedListener<Message>>,
    cache: Cache,
    painted_revision: Cell<Option<u64>>,
}

impl<Message> PinProgressButton<Message> {
    pub fn new(attributes: &ProgressAttributes, style: VisualStyle) -> Self {
        Self {
            state: CheckableProgress::new(
                ProgressState::new(attributes.progress, attributes.max),
                false,
            ),
            style,
            save_enabled: true,
            on_checked_change: None,
            cache: Cache::new(),
            painted_revision: Cell::new(None),
        }
    }

    /// Register the message published when the user toggles the button
    pub fn on_checked_change(mut self, listener: impl Fn(bool) -> Message + 'static) -> Self {
        self.on_checked_change = Some(Box::new(listener));
        self
    }

    pub fn max(&self) -> i32 {
        self.state.progress.max()
    }

    pub fn set_max(&mut self, max: i32) {
        self.state.progress.set_max(max);
    }

    pub fn progress(&self) -> i32 {
        self.state.progress.progress()
    }

    pub fn set_progress(&mut self, progress: i32) {
        self.state.progress.set_progress(progress);
    }

    pub fn is_checked(&self) -> bool {
        self.state.is_checked()
    }

    /// Returns whether the checked state changed
    pub fn set_checked(&mut self, checked: bool) -> bool {
        self.state.set_checked(checked)
    }

    pub fn toggle(&mut self) -> bool {
        self.state.toggle()
    }

    pub fn state(&self) -> &CheckableProgress {
        &self.state
    }

    pub fn set_save_enabled(&mut self, enabled: bool) {
        self.save_enabled = enabled;
    }

    pub fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size {
        geometry::measure(self.style.drawable_size, width, height)
    }

    /// Append our fields to the parent's saved payload
    pub fn save_state(&self, parent: Vec<u8>) -> Vec<u8> {
        snapshot::save(
            parent,
            SavedFields {
                progress: self.progress(),
                max: self.max(),
                checked: Some(self.is_checked()),
            },
            self.save_enabled,
        )
    }

    /// Restore from a saved blob and return what the parent should restore
    pub fn restore_state(&mut self, blob: Vec<u8>) -> Vec<u8> {
        match snapshot::restore(blob, SnapshotKind::Checkable) {
            Restore::Ours { parent, fields } => {
                self.state.progress.restore(fields.progress, fields.max);
                self.state.set_checked(fields.checked.unwrap_or(false));
                parent
            }
            Restore::Delegate(blob) => blob,
        }
    }

    pub fn view(&self) -> Element<'_, Message>
    where
        Message: 'static,
    {
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
        let checked = self.state.is_checked();

        let disc_color = if checked {
            self.style.circle_color
        } else {
            theme::muted(self.style.circle_color, UNCHECKED_DISC_ALPHA)
        };
        frame.fill(&Path::circle(center, radius), disc_color);

        if let Some(pie) = super::pie_path(center, radius, self.state.progress.sweep_degrees()) {
            let pie_color = if checked {
                self.style.progress_color
            } else {
                theme::muted(self.style.progress_color, 0.7)
            };
            frame.fill(&pie, pie_color);
        }

        let glyph = PinGlyph::new(center, radius);
        let glyph_color = if checked {
            self.style.text_color
        } else {
            theme::muted(self.style.text_color, 0.8)
        };
        if checked {
            frame.fill(&glyph.head(), glyph_color);
        } else {
            frame.stroke(
                &glyph.head(),
                Stroke::default()
                    .with_width(GLYPH_STROKE)
                    .with_color(glyph_color),
            );
        }
        frame.stroke(
            &glyph.needle(),
            Stroke::default()
                .with_width(GLYPH_STROKE)
                .with_color(glyph_color),
        );
    }
}

/// Push-pin glyph laid out inside the progress disc
struct PinGlyph {
    head_center: Point,
    head_radius: f32,
    needle_top: Point,
    needle_tip: Point,
}

impl PinGlyph {
    fn new(center: Point, radius: f32) -> Self {
        let head_radius = radius * 0.3;
        let head_center = Point::new(center.x, center.y - radius * 0.25);
        Self {
            head_center,
            head_radius,
            needle_top: Point::new(center.x, head_center.y + head_radius),
            needle_tip: Point::new(center.x, center.y + radius * 0.6),
        }
    }

    fn head(&self) -> Path {
        Path::circle(self.head_center, self.head_radius)
    }

    fn needle(&self) -> Path {
        Path::line(self.needle_top, self.needle_tip)
    }
}

impl<Message> Program<Message> for PinProgressButton<Message> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        let listener = self.on_checked_change.as_ref()?;

        match event {
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
                if cursor.is_over(bounds) =>
            {
                let next = !self.state.is_checked();
                tracing::debug!(checked = next, "pin button toggled");
                Some(canvas::Action::publish(listener(next)).and_capture())
            }
            _ => None,
        }
    }

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

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.on_checked_change.is_some() && cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::settings::ThemeColors;
    use iced::Color;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Checked(bool),
    }

    fn pin() -> PinProgressButton<TestMessage> {
        let style = ProgressAttributes::default().resolve(ThemeColors {
            circle: Color::BLACK,
            progress: Color::WHITE,
            text: Color::BLACK,
        });
        PinProgressButton::new(&ProgressAttributes::default(), style)
            .on_checked_change(TestMessage::Checked)
    }

    #[test]
    fn listener_builds_toggle_message() {
        let pin = pin();
        let listener = pin.on_checked_change.as_ref().unwrap();
        assert_eq!(listener(!pin.is_checked()), TestMessage::Checked(true));
    }

    fn press(
        pin: &PinProgressButton<TestMessage>,
        at: Point,
    ) -> Option<(Option<TestMessage>, iced::event::Status)> {
        let event = canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(48.0, 48.0));
        Program::update(pin, &mut (), &event, bounds, mouse::Cursor::Available(at)).map(|action| {
            let (message, _redraw, status) = action.into_inner();
            (message, status)
        })
    }

    #[test]
    fn click_inside_publishes_toggled_value() {
        let mut pin = pin();
        assert_eq!(
            press(&pin, Point::new(10.0, 10.0)),
            Some((Some(TestMessage::Checked(true)), iced::event::Status::Captured))
        );

        pin.set_checked(true);
        assert_eq!(
            press(&pin, Point::new(24.0, 24.0)),
            Some((Some(TestMessage::Checked(false)), iced::event::Status::Captured))
        );
        // publishing does not flip the state by itself
        assert!(pin.is_checked());
    }

    #[test]
    fn click_outside_is_ignored() {
        let pin = pin();
        assert_eq!(press(&pin, Point::new(100.0, 100.0)), None);
    }

    #[test]
    fn click_without_listener_is_ignored() {
        let style = ProgressAttributes::default().resolve(ThemeColors {
            circle: Color::BLACK,
            progress: Color::WHITE,
            text: Color::BLACK,
        });
        let pin = PinProgressButton::new(&ProgressAttributes::default(), style);
        assert_eq!(press(&pin, Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn checked_state_round_trips() {
        let mut original = pin();
        original.set_max(250);
        original.set_progress(42);
        original.set_checked(true);

        let blob = original.save_state(Vec::new());

        let mut fresh = pin();
        assert!(fresh.restore_state(blob).is_empty());
        assert_eq!(fresh.progress(), 42);
        assert_eq!(fresh.max(), 250);
        assert!(fresh.is_checked());
    }

    #[test]
    fn circle_snapshot_is_not_ours() {
        let circle_blob = snapshot::save(
            Vec::new(),
            SavedFields {
                progress: 10,
                max: 100,
                checked: None,
            },
            true,
        );
        let mut pin = pin();
        assert_eq!(pin.restore_state(circle_blob.clone()), circle_blob);
        assert_eq!(pin.progress(), 0);
    }

    #[test]
    fn toggle_requests_repaint() {
        let mut pin = pin();
        let before = pin.state().revision();
        assert!(pin.toggle());
        assert_eq!(pin.state().revision(), before + 1);

        pin.set_progress(pin.progress());
        assert_eq!(pin.state().revision(), before + 2);
    }

    #[test]
    fn glyph_sits_inside_disc() {
        let center = Point::new(24.0, 24.0);
        let glyph = PinGlyph::new(center, 14.0);
        assert!(glyph.head_center.y - glyph.head_radius > center.y - 14.0);
        assert!(glyph.needle_tip.y < center.y + 14.0);
        assert_eq!(glyph.needle_top.y, glyph.head_center.y + glyph.head_radius);
    }
}
