use iced::widget::{Button, Column, Container, Text};
use iced::{Color, Element, Font, Length};

use crate::client::models::app_state::PanelState;
use crate::client::models::messages::Message;

const BG_MAIN: Color = Color::WHITE;
const ACCENT_COLOR: Color = Color::from_rgb(0.0, 0.44, 0.95); // #0070f3 heading blue
const TEXT_PRIMARY: Color = Color::from_rgb(0.1, 0.1, 0.1);
const TEXT_SECONDARY: Color = Color::from_rgb(0.4, 0.4, 0.4);

const BOLD_FONT: Font = Font {
    family: iced::font::Family::SansSerif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

fn bg_main_appearance(_: &iced::Theme) -> iced::widget::container::Appearance {
    iced::widget::container::Appearance {
        background: Some(iced::Background::Color(BG_MAIN)),
        text_color: Some(TEXT_PRIMARY),
        ..Default::default()
    }
}

pub fn view(state: &PanelState) -> Element<Message> {
    let heading = Text::new("AI Summary App")
        .font(BOLD_FONT)
        .size(32)
        .style(ACCENT_COLOR);

    let check_button = Button::new(Text::new("Check backend").font(BOLD_FONT).size(14))
        .style(iced::theme::Button::Primary)
        .on_press(Message::CheckBackend)
        .padding([10, 16]);

    let status_line = Text::new(&state.status).size(16).style(TEXT_PRIMARY);

    let next_steps = Text::new("Next: deploy this to Vercel, then add API routes.")
        .size(14)
        .style(TEXT_SECONDARY);

    let content = Column::new()
        .spacing(16)
        .padding(24)
        .max_width(800)
        .push(heading)
        .push(check_button)
        .push(status_line)
        .push(next_steps);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(iced::theme::Container::Custom(Box::new(bg_main_appearance)))
        .into()
}
