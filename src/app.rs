//! Core application state and Iced application implementation
//!
//! Single state container driven by `Message` values; every mutation runs
//! through `update` on the main event loop. The search and per-card
//! feedback calls are the only suspending operations, both performed as
//! background tasks that report back with a completion message.

use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Background, Border, Element, Length, Padding, Task, Theme};

use crate::backend::api::BackendClient;
use crate::backend::types::{Candidate, FeedbackType, SearchRequest};
use crate::config::Settings;
use crate::filters::{FilterState, Industry};
use crate::ui::{candidate_card, filter_panel, prompt_panel, theme};

// ============================================================================
// UI State Types
// ============================================================================

/// Per-card UI state, rebuilt whenever the candidate list is replaced
#[derive(Debug, Clone, Default)]
pub struct CardState {
    pub show_explanation: bool,
    pub reason: String,
    pub feedback: FeedbackStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

// ============================================================================
// Application State
// ============================================================================

pub struct Seula {
    prompt: String,
    filters: FilterState,
    distance_input: String,
    candidates: Vec<Candidate>,
    cards: Vec<CardState>,
    warning: Option<String>,
    loading: bool,
    searched: bool,
    backend: BackendClient,
}

#[derive(Debug, Clone)]
pub enum Message {
    PromptChanged(String),
    SubmitSearch,
    SearchFinished(Result<Vec<Candidate>, String>),
    SalaryMinChanged(u32),
    SalaryMaxChanged(u32),
    IndustrySelected(Industry),
    DistanceChanged(String),
    ToggleExplanation(usize),
    ReasonChanged(usize, String),
    SendFeedback(usize, FeedbackType),
    FeedbackFinished(String, Result<(), String>),
}

impl Seula {
    pub fn new(settings: Settings) -> Self {
        Self {
            prompt: String::new(),
            filters: FilterState::default(),
            distance_input: String::new(),
            candidates: Vec::new(),
            cards: Vec::new(),
            warning: None,
            loading: false,
            searched: false,
            backend: BackendClient::new(&settings.backend),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PromptChanged(prompt) => {
                self.prompt = prompt;
                Task::none()
            }

            Message::SubmitSearch => self.submit_search(),

            Message::SearchFinished(Ok(candidates)) => {
                self.loading = false;
                self.cards = vec![CardState::default(); candidates.len()];
                self.candidates = candidates;
                Task::none()
            }

            Message::SearchFinished(Err(err)) => {
                tracing::error!("Search failed: {}", err);
                self.loading = false;
                self.candidates.clear();
                self.cards.clear();
                self.warning = Some(String::from("Error fetching candidates from backend."));
                Task::none()
            }

            Message::SalaryMinChanged(min) => {
                self.filters.set_salary_min(min);
                Task::none()
            }

            Message::SalaryMaxChanged(max) => {
                self.filters.set_salary_max(max);
                Task::none()
            }

            Message::IndustrySelected(industry) => {
                self.filters.industry = industry;
                Task::none()
            }

            Message::DistanceChanged(raw) => {
                self.filters.set_location_input(&raw);
                self.distance_input = raw;
                Task::none()
            }

            Message::ToggleExplanation(index) => {
                if let Some(card) = self.cards.get_mut(index) {
                    card.show_explanation = !card.show_explanation;
                }
                Task::none()
            }

            Message::ReasonChanged(index, reason) => {
                if let Some(card) = self.cards.get_mut(index) {
                    card.reason = reason;
                }
                Task::none()
            }

            Message::SendFeedback(index, feedback_type) => {
                self.send_feedback(index, feedback_type)
            }

            Message::FeedbackFinished(candidate_id, result) => {
                // The list may have been replaced while the call was in
                // flight; a completion for a gone candidate is dropped.
                if let Some(index) = self.candidates.iter().position(|c| c.id == candidate_id) {
                    if let Some(card) = self.cards.get_mut(index) {
                        match result {
                            Ok(()) => {
                                card.feedback = FeedbackStatus::Sent;
                                card.reason.clear();
                            }
                            Err(err) => {
                                tracing::warn!(candidate = %candidate_id, "Feedback failed: {}", err);
                                card.feedback = FeedbackStatus::Failed;
                            }
                        }
                    }
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = container(
            text("Candidate Search").size(28).color(theme::PRIMARY),
        )
        .width(Length::Fill)
        .center_x(Length::Fill);

        let panels = row![
            container(filter_panel::view(&self.filters, &self.distance_input))
                .width(Length::FillPortion(1)),
            container(prompt_panel::view(&self.prompt)).width(Length::FillPortion(2)),
        ]
        .spacing(16);

        let search_button = button(
            text(if self.loading {
                "Searching..."
            } else {
                "Search Candidates"
            })
            .size(16),
        )
        .padding(Padding::from([10.0, 24.0]))
        .style(|_theme, _status| button::Style {
            background: Some(Background::Color(theme::PRIMARY)),
            text_color: theme::TEXT,
            border: Border::default().rounded(8),
            ..button::Style::default()
        })
        .on_press_maybe((!self.loading).then_some(Message::SubmitSearch));

        let mut content = column![header, Space::with_height(16), panels];

        if let Some(warning) = &self.warning {
            content = content.push(Space::with_height(8));
            content = content.push(text(warning).size(14).color(theme::WARNING));
        }

        content = content.push(Space::with_height(12));
        content = content.push(
            container(search_button)
                .width(Length::Fill)
                .center_x(Length::Fill),
        );
        content = content.push(Space::with_height(12));
        content = content.push(self.view_results());

        container(content)
            .padding(16)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Background::Color(theme::BACKGROUND)),
                ..Default::default()
            })
            .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn view_results(&self) -> Element<'_, Message> {
        if self.loading {
            return status_line("Loading candidates...");
        }
        if !self.searched {
            return status_line(
                "Set filters, describe the job and press \"Search Candidates\" to see results.",
            );
        }
        if self.candidates.is_empty() {
            return status_line("No candidates found for this search.");
        }

        let cards: Vec<Element<'_, Message>> = self
            .candidates
            .iter()
            .zip(self.cards.iter())
            .enumerate()
            .map(|(index, (candidate, card))| candidate_card::view(index, candidate, card))
            .collect();

        container(scrollable(column(cards).spacing(12)).height(Length::Fill))
            .height(Length::FillPortion(1))
            .into()
    }

    // ========================================================================
    // Actions
    // ========================================================================

    fn submit_search(&mut self) -> Task<Message> {
        // One search at a time; the button is disabled while loading but
        // the prompt input can still submit.
        if self.loading {
            return Task::none();
        }
        if self.prompt.trim().is_empty() {
            self.warning = Some(String::from(
                "Please enter a job description or criteria in the prompt!",
            ));
            return Task::none();
        }

        self.warning = None;
        self.loading = true;
        self.searched = true;

        let backend = self.backend.clone();
        let request = SearchRequest::from_filters(&self.prompt, &self.filters);

        Task::perform(
            async move { backend.search(&request).await.map_err(|e| e.to_string()) },
            Message::SearchFinished,
        )
    }

    fn send_feedback(&mut self, index: usize, feedback_type: FeedbackType) -> Task<Message> {
        let Some(candidate) = self.candidates.get(index) else {
            return Task::none();
        };
        let Some(card) = self.cards.get_mut(index) else {
            return Task::none();
        };
        if card.feedback == FeedbackStatus::Sending {
            return Task::none();
        }
        card.feedback = FeedbackStatus::Sending;

        let backend = self.backend.clone();
        let candidate_id = candidate.id.clone();
        let reason = (!card.reason.is_empty()).then(|| card.reason.clone());

        Task::perform(
            async move {
                let result = backend
                    .send_feedback(&candidate_id, feedback_type, reason)
                    .await
                    .map_err(|e| e.to_string());
                (candidate_id, result)
            },
            |(id, result)| Message::FeedbackFinished(id, result),
        )
    }
}

fn status_line(message: &str) -> Element<'_, Message> {
    container(text(message).size(14).color(theme::TEXT_MUTED))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(24)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::types::CandidateLocation;

    fn app() -> Seula {
        Seula::new(Settings::default())
    }

    fn candidate(id: &str) -> Candidate {
        Candidate {
            id: id.to_string(),
            name: format!("Candidate {}", id),
            role: String::from("Welder"),
            location: CandidateLocation::default(),
            match_score: Some(0.9),
            explanation: Some(String::from("Good fit")),
            skills: vec![String::from("welding")],
        }
    }

    fn searched_app(ids: &[&str]) -> Seula {
        let mut app = app();
        let _ = app.update(Message::PromptChanged(String::from("welder")));
        let _ = app.update(Message::SubmitSearch);
        let _ = app.update(Message::SearchFinished(Ok(
            ids.iter().map(|id| candidate(id)).collect()
        )));
        app
    }

    #[test]
    fn empty_prompt_sets_warning_without_searching() {
        let mut app = app();
        let _ = app.update(Message::SubmitSearch);

        assert!(app.warning.is_some());
        assert!(!app.loading);
        assert!(!app.searched);
    }

    #[test]
    fn whitespace_prompt_is_rejected_too() {
        let mut app = app();
        let _ = app.update(Message::PromptChanged(String::from("   ")));
        let _ = app.update(Message::SubmitSearch);

        assert!(app.warning.is_some());
        assert!(!app.searched);
    }

    #[test]
    fn valid_prompt_starts_loading_and_clears_warning() {
        let mut app = app();
        let _ = app.update(Message::SubmitSearch);
        assert!(app.warning.is_some());

        let _ = app.update(Message::PromptChanged(String::from("warehouse worker")));
        let _ = app.update(Message::SubmitSearch);

        assert!(app.warning.is_none());
        assert!(app.loading);
        assert!(app.searched);
    }

    #[test]
    fn resubmit_while_loading_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::PromptChanged(String::from("welder")));
        let _ = app.update(Message::SubmitSearch);
        assert!(app.loading);

        // While loading even an invalid submit is a no-op: the guard runs
        // before validation, so no warning appears.
        let _ = app.update(Message::PromptChanged(String::new()));
        let _ = app.update(Message::SubmitSearch);
        assert!(app.warning.is_none());
        assert!(app.loading);
    }

    #[test]
    fn search_success_replaces_candidates_in_order() {
        let app = searched_app(&["c1", "c2", "c3"]);

        assert!(!app.loading);
        let ids: Vec<&str> = app.candidates.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c2", "c3"]);
        assert_eq!(app.cards.len(), 3);
    }

    #[test]
    fn search_failure_clears_candidates_and_warns() {
        let mut app = searched_app(&["c1"]);

        let _ = app.update(Message::SubmitSearch);
        assert!(app.loading);
        let _ = app.update(Message::SearchFinished(Err(String::from("boom"))));

        assert!(!app.loading);
        assert!(app.candidates.is_empty());
        assert!(app.cards.is_empty());
        assert!(app.warning.is_some());
    }

    #[test]
    fn feedback_success_marks_card_and_clears_reason() {
        let mut app = searched_app(&["c1"]);
        let _ = app.update(Message::ReasonChanged(0, String::from("too far away")));
        let _ = app.update(Message::SendFeedback(0, FeedbackType::Down));
        assert_eq!(app.cards[0].feedback, FeedbackStatus::Sending);

        let _ = app.update(Message::FeedbackFinished(String::from("c1"), Ok(())));

        assert_eq!(app.cards[0].feedback, FeedbackStatus::Sent);
        assert!(app.cards[0].reason.is_empty());
    }

    #[test]
    fn feedback_failure_marks_card_and_keeps_reason() {
        let mut app = searched_app(&["c1"]);
        let _ = app.update(Message::ReasonChanged(0, String::from("missing license")));
        let _ = app.update(Message::SendFeedback(0, FeedbackType::Up));

        let _ = app.update(Message::FeedbackFinished(
            String::from("c1"),
            Err(String::from("500")),
        ));

        assert_eq!(app.cards[0].feedback, FeedbackStatus::Failed);
        assert_eq!(app.cards[0].reason, "missing license");
    }

    #[test]
    fn stale_feedback_completion_is_dropped() {
        let mut app = searched_app(&["c1"]);

        let _ = app.update(Message::FeedbackFinished(String::from("gone"), Ok(())));

        assert_eq!(app.cards[0].feedback, FeedbackStatus::Idle);
    }

    #[test]
    fn explanation_toggle_flips_per_card() {
        let mut app = searched_app(&["c1", "c2"]);

        let _ = app.update(Message::ToggleExplanation(1));
        assert!(!app.cards[0].show_explanation);
        assert!(app.cards[1].show_explanation);

        let _ = app.update(Message::ToggleExplanation(1));
        assert!(!app.cards[1].show_explanation);
    }

    #[test]
    fn filter_messages_update_state() {
        let mut app = app();

        let _ = app.update(Message::SalaryMinChanged(2500));
        let _ = app.update(Message::SalaryMaxChanged(3000));
        let _ = app.update(Message::DistanceChanged(String::from("30")));
        assert_eq!(app.filters.salary_range, (2500, 3000));
        assert_eq!(app.filters.location_km, Some(30.0));

        let _ = app.update(Message::DistanceChanged(String::from("not a number")));
        assert_eq!(app.filters.location_km, None);
        assert_eq!(app.distance_input, "not a number");
    }
}
