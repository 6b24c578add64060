//! Filter panel: structured constraints beside the prompt

use iced::widget::{column, container, pick_list, slider, text, text_input};
use iced::{Background, Border, Element, Length, Padding};

use crate::app::Message;
use crate::filters::{FilterState, Industry, SALARY_MAX, SALARY_MIN};
use crate::ui::theme;

pub fn view<'a>(filters: &'a FilterState, distance_input: &'a str) -> Element<'a, Message> {
    let (salary_min, salary_max) = filters.salary_range;

    let content = column![
        text("Filters").size(16).color(theme::TEXT),
        text(format!("Salary (€ / month): {} - {}", salary_min, salary_max))
            .size(13)
            .color(theme::TEXT_MUTED),
        slider(SALARY_MIN..=SALARY_MAX, salary_min, Message::SalaryMinChanged).step(100u32),
        slider(SALARY_MIN..=SALARY_MAX, salary_max, Message::SalaryMaxChanged).step(100u32),
        text("Industry").size(13).color(theme::TEXT_MUTED),
        pick_list(
            Industry::options(),
            Some(filters.industry),
            Message::IndustrySelected
        )
        .width(Length::Fill)
        .text_size(13),
        text("Distance (km) from central Lahti 15500")
            .size(13)
            .color(theme::TEXT_MUTED),
        text_input("No distance limit", distance_input)
            .on_input(Message::DistanceChanged)
            .padding(8)
            .size(13),
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
