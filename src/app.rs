//! Demo application module
//!
//! A slider drives the progress of three pin buttons and one circle, the
//! same way a host screen would wire the widgets.

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::i18n::{Key, Language, Locale};
pub use message::Message;
pub use state::{App, PIN_COUNT};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = crate::features::Settings::load();
        let locale = Locale::new(Language::from_code(&settings.display.language));
        tracing::info!(
            "Starting demo (dark mode: {}, language: {})",
            settings.display.dark_mode,
            locale.language.code()
        );

        (Self::with_settings(settings, locale), Task::none())
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        Self::theme_for(&self.settings)
    }

    /// Window title with the current progress
    pub fn title(&self) -> String {
        format!("{} - {}%", self.locale.get(Key::AppName), self.slider)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}
