//! View components

pub mod candidate_card;
pub mod filter_panel;
pub mod prompt_panel;
pub mod theme;
