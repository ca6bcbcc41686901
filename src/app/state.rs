//! Application state definitions

use iced::Theme;

use crate::app::Message;
use crate::features::accessibility;
use crate::features::settings::Settings;
use crate::i18n::Locale;
use crate::ui::primitives::{CircleProgress, PinProgressButton};
use crate::ui::theme;

/// Number of pin buttons on the demo screen
pub const PIN_COUNT: usize = 3;

/// Main application state
pub struct App {
    pub settings: Settings,
    pub locale: Locale,
    /// Slider position, mirrored into every widget
    pub slider: i32,
    pub circle: CircleProgress,
    pub pins: Vec<PinProgressButton<Message>>,
    /// Accessibility description of each pin button
    pub descriptions: Vec<&'static str>,
    /// How many times the widgets were rebuilt from snapshots
    pub recreations: u32,
}

impl App {
    /// Build the demo from settings without touching the disk
    pub fn with_settings(settings: Settings, locale: Locale) -> Self {
        let (circle, pins) = Self::build_widgets(&settings);
        let slider = circle.progress();

        let mut app = Self {
            settings,
            locale,
            slider,
            circle,
            pins,
            descriptions: Vec::new(),
            recreations: 0,
        };
        app.apply_progress(slider);
        app
    }

    pub fn theme_for(settings: &Settings) -> Theme {
        if settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Construct fresh widgets, reading style attributes once
    pub fn build_widgets(settings: &Settings) -> (CircleProgress, Vec<PinProgressButton<Message>>) {
        let defaults = theme::progress_defaults(&Self::theme_for(settings));

        let circle = CircleProgress::new(&settings.circle, settings.circle.resolve(defaults));
        let pin_style = settings.pin.resolve(defaults);
        let pins = (0..PIN_COUNT)
            .map(|index| {
                PinProgressButton::new(&settings.pin, pin_style)
                    .on_checked_change(move |checked| Message::PinCheckedChanged(index, checked))
            })
            .collect();

        (circle, pins)
    }

    /// Push a progress value into every widget and refresh descriptions
    pub fn apply_progress(&mut self, progress: i32) {
        self.slider = progress;
        self.circle.set_progress(progress);
        for pin in &mut self.pins {
            pin.set_progress(progress);
        }
        self.refresh_descriptions();
    }

    pub fn refresh_descriptions(&mut self) {
        self.descriptions = self
            .pins
            .iter()
            .map(|pin| accessibility::describe(pin.state(), self.locale))
            .collect();
    }
}
