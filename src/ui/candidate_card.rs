//! Candidate result card
//!
//! One card per result: identity, match score, optional explanation,
//! skill chips and the per-candidate feedback affordance.

use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Alignment, Background, Border, Color, Element, Length, Padding};

use crate::app::{CardState, FeedbackStatus, Message};
use crate::backend::types::{Candidate, FeedbackType};
use crate::ui::theme;

pub fn view<'a>(index: usize, candidate: &'a Candidate, card: &'a CardState) -> Element<'a, Message> {
    let role_line = match candidate.location.label() {
        Some(place) => format!("{} · {}", candidate.role, place),
        None => candidate.role.clone(),
    };

    let score_text = match candidate.match_score {
        Some(score) => format!("Match score: {}%", score),
        None => String::from("Match score: N/A"),
    };

    let mut score_row = row![text(score_text).size(14).color(theme::PRIMARY)]
        .spacing(12)
        .align_y(Alignment::Center);

    let explanation = candidate
        .explanation
        .as_deref()
        .filter(|explanation| !explanation.is_empty());

    if explanation.is_some() {
        let label = if card.show_explanation {
            "Hide explanation"
        } else {
            "Show explanation"
        };
        score_row = score_row.push(
            button(text(label).size(12))
                .padding(Padding::from([2.0, 8.0]))
                .style(|_theme, _status| button::Style {
                    background: None,
                    text_color: theme::PRIMARY,
                    ..button::Style::default()
                })
                .on_press(Message::ToggleExplanation(index)),
        );
    }

    let mut body = column![
        text(&candidate.name).size(18).color(theme::TEXT),
        text(role_line).size(13).color(theme::TEXT_MUTED),
        Space::with_height(6),
        score_row,
    ]
    .spacing(4);

    if card.show_explanation {
        if let Some(explanation) = explanation {
            body = body.push(text(explanation).size(13).color(theme::TEXT));
        }
    }

    if !candidate.skills.is_empty() {
        let chips: Vec<Element<'a, Message>> =
            candidate.skills.iter().map(|skill| chip(skill)).collect();
        body = body.push(Space::with_height(6));
        body = body.push(row(chips).spacing(6));
    }

    body = body.push(Space::with_height(8));
    body = body.push(feedback_row(index, card));
    body = body.push(
        text_input("Optional explanation for your feedback", &card.reason)
            .on_input(move |reason| Message::ReasonChanged(index, reason))
            .padding(8)
            .size(13),
    );

    container(body)
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

fn feedback_row<'a>(index: usize, card: &'a CardState) -> Element<'a, Message> {
    let sending = card.feedback == FeedbackStatus::Sending;

    let up = button(text("👍").size(14))
        .padding(Padding::from([4.0, 12.0]))
        .style(|_theme, _status| solid(theme::SUCCESS))
        .on_press_maybe((!sending).then_some(Message::SendFeedback(index, FeedbackType::Up)));

    let down = button(text("👎").size(14))
        .padding(Padding::from([4.0, 12.0]))
        .style(|_theme, _status| solid(theme::DANGER))
        .on_press_maybe((!sending).then_some(Message::SendFeedback(index, FeedbackType::Down)));

    let notice = match card.feedback {
        FeedbackStatus::Idle => "",
        FeedbackStatus::Sending => "Sending feedback...",
        FeedbackStatus::Sent => "Feedback sent",
        FeedbackStatus::Failed => "Failed to send feedback",
    };
    let notice_color = match card.feedback {
        FeedbackStatus::Failed => theme::WARNING,
        _ => theme::TEXT_MUTED,
    };

    row![up, down, text(notice).size(12).color(notice_color)]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
}

fn solid(color: Color) -> button::Style {
    button::Style {
        background: Some(Background::Color(color)),
        text_color: theme::TEXT,
        border: Border::default().rounded(6),
        ..button::Style::default()
    }
}

fn chip(skill: &str) -> Element<'_, Message> {
    container(text(skill).size(11).color(theme::TEXT))
        .padding(Padding::from([2.0, 8.0]))
        .style(|_theme| container::Style {
            background: Some(Background::Color(theme::CHIP)),
            border: Border::default().rounded(8),
            ..Default::default()
        })
        .into()
}
