//! Prompt panel: the free-text job description

use iced::widget::{column, container, text, text_input};
use iced::{Background, Border, Element, Length, Padding};

use crate::app::Message;
use crate::ui::theme;

pub fn view(prompt: &str) -> Element<'_, Message> {
    let content = column![
        text("Job description & criteria").size(16).color(theme::TEXT),
        text("Include location, experience, skills, education, salary and must-have qualities.")
            .size(13)
            .color(theme::TEXT_MUTED),
        text_input("Warehouse worker, Lahti, 2500-3000€...", prompt)
            .on_input(Message::PromptChanged)
            .on_submit(Message::SubmitSearch)
            .padding(12)
            .size(15),
    ]
    .spacing(10);

    container(content)
        .padding(Padding::new(14.0))
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Background::Color(theme::SURFACE)),
            border: Border {
                color: theme::BORDER,
                width: 1.0,
                radius: 10.0.into(),
            },
            ..Default::default()
        })
        .into()
}
