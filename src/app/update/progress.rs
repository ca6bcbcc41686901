//! Progress and pin update handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle slider, pin and recreation messages
    pub fn handle_progress(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ProgressChanged(progress) => {
                self.apply_progress(*progress);
                Some(Task::none())
            }
            Message::PinCheckedChanged(index, checked) => {
                match self.pins.get_mut(*index) {
                    Some(pin) => {
                        if pin.set_checked(*checked) {
                            tracing::debug!("Pin {} checked: {}", index, checked);
                        }
                        self.refresh_descriptions();
                    }
                    None => tracing::warn!("Checked change for unknown pin {}", index),
                }
                Some(Task::none())
            }
            Message::RecreateWidgets => {
                self.recreate_widgets();
                Some(Task::none())
            }
            _ => None,
        }
    }

    /// Save every widget, rebuild them from settings, and restore the saved
    /// state into the fresh instances
    pub fn recreate_widgets(&mut self) {
        let saved_circle = self.circle.save_state(Vec::new());
        let saved_pins: Vec<Vec<u8>> = self
            .pins
            .iter()
            .map(|pin| pin.save_state(Vec::new()))
            .collect();

        let (mut circle, mut pins) = Self::build_widgets(&self.settings);

        let leftover = circle.restore_state(saved_circle);
        if !leftover.is_empty() {
            tracing::debug!("Circle left {} bytes for its parent", leftover.len());
        }
        for (pin, saved) in pins.iter_mut().zip(saved_pins) {
            let leftover = pin.restore_state(saved);
            if !leftover.is_empty() {
                tracing::debug!("Pin left {} bytes for its parent", leftover.len());
            }
        }

        self.circle = circle;
        self.pins = pins;
        self.slider = self.circle.progress();
        self.recreations += 1;
        self.refresh_descriptions();
        tracing::info!("Recreated widgets ({} so far)", self.recreations);
    }
}
