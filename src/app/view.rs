//! Application view rendering

use iced::widget::{Space, button, column, container, row, slider, text, toggler};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::i18n::Key;
use crate::ui::theme;

/// Width of one widget card
const CARD_WIDTH: f32 = 120.0;

impl App {
    /// Build the demo window
    pub fn view(&self) -> Element<'_, Message> {
        let mut cards = row![].spacing(12).align_y(Alignment::Start);
        for (index, pin) in self.pins.iter().enumerate() {
            let description = self.descriptions.get(index).copied().unwrap_or_default();
            cards = cards.push(card(pin.view(), description));
        }
        cards = cards.push(card(self.circle.view(), ""));

        let progress_row = row![
            text(self.locale.get(Key::ProgressLabel)).size(14),
            slider(0..=100, self.slider, Message::ProgressChanged).width(Fill),
            text(format!("{}%", self.slider)).size(14).width(48),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let controls = row![
            button(text(self.locale.get(Key::RecreateButton)).size(14))
                .padding([6, 12])
                .style(theme::flat_button)
                .on_press(Message::RecreateWidgets),
            Space::new().width(Fill),
            toggler(self.settings.display.dark_mode)
                .label(self.locale.get(Key::DarkModeToggle))
                .on_toggle(Message::DarkModeToggled),
        ]
        .align_y(Alignment::Center);

        container(
            column![cards, progress_row, controls]
                .spacing(24)
                .align_x(Alignment::Center),
        )
        .padding(24)
        .width(Fill)
        .height(Fill)
        .style(theme::main_content)
        .into()
    }
}

/// One widget with its accessibility description underneath
fn card<'a>(widget: Element<'a, Message>, description: &'static str) -> Element<'a, Message> {
    container(
        column![
            widget,
            text(description)
                .size(11)
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .padding(12)
    .width(CARD_WIDTH)
    .style(theme::card)
    .into()
}
