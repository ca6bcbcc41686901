//! Settings update handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle settings-related messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::DarkModeToggled(dark_mode) => {
                self.settings.display.dark_mode = *dark_mode;
                if let Err(e) = self.settings.save() {
                    tracing::warn!("Failed to save settings: {}", e);
                }
                // Colours are resolved at construction, so a theme switch
                // rebuilds the widgets the same way a configuration change would.
                self.recreate_widgets();
                Some(Task::none())
            }
            _ => None,
        }
    }
}
