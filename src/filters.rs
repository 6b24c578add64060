//! Search filter state
//!
//! Structured constraints submitted alongside the free-text prompt: a
//! two-ended salary bound, an industry pick and an optional distance
//! limit in kilometres.

use std::fmt;

/// Salary slider bounds in € / month
pub const SALARY_MIN: u32 = 0;
pub const SALARY_MAX: u32 = 10_000;

/// Industries known to the search backend
pub const INDUSTRIES: [&str; 12] = [
    "Teollisuus",
    "Logistiikka",
    "HoReCa",
    "Rakennusala",
    "Turvallisuusala",
    "Terveydenhuolto",
    "Satama-ala",
    "ICT / Teknologia",
    "Kemia / Labra",
    "Ilmailu",
    "Opetusala",
    "Puhtausala",
];

/// Industry selection: one of the fixed backend-known industries, or no
/// constraint at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Industry {
    #[default]
    All,
    Named(&'static str),
}

impl Industry {
    /// Options for the pick list, "all" first
    pub fn options() -> Vec<Industry> {
        std::iter::once(Industry::All)
            .chain(INDUSTRIES.iter().copied().map(Industry::Named))
            .collect()
    }

    /// The filter value sent to the backend, if any
    pub fn as_filter(&self) -> Option<&'static str> {
        match self {
            Industry::All => None,
            Industry::Named(name) => Some(name),
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Industry::All => write!(f, "All industries"),
            Industry::Named(name) => write!(f, "{}", name),
        }
    }
}

/// Structured search constraints, mutated directly by the filter panel
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// (min, max) in € / month, min <= max
    pub salary_range: (u32, u32),
    pub industry: Industry,
    /// Distance limit in km from the reference point; None = unconstrained
    pub location_km: Option<f64>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            salary_range: (SALARY_MIN, SALARY_MAX),
            industry: Industry::All,
            location_km: None,
        }
    }
}

impl FilterState {
    /// Move the lower salary bound, keeping min <= max
    pub fn set_salary_min(&mut self, min: u32) {
        self.salary_range.0 = min.min(self.salary_range.1);
    }

    /// Move the upper salary bound, keeping min <= max
    pub fn set_salary_max(&mut self, max: u32) {
        self.salary_range.1 = max.max(self.salary_range.0);
    }

    /// Update the distance filter from raw text input
    pub fn set_location_input(&mut self, raw: &str) {
        self.location_km = parse_distance(raw);
    }
}

/// Distance input coercion: unparsable, zero or negative input all mean
/// "no distance constraint".
pub fn parse_distance(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|km| *km > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_unconstrained() {
        let filters = FilterState::default();
        assert_eq!(filters.salary_range, (0, 10_000));
        assert_eq!(filters.industry, Industry::All);
        assert_eq!(filters.location_km, None);
    }

    #[test]
    fn salary_bounds_stay_ordered() {
        let mut filters = FilterState::default();
        filters.set_salary_max(3000);
        filters.set_salary_min(4000);
        assert_eq!(filters.salary_range, (3000, 3000));

        filters.set_salary_min(1000);
        filters.set_salary_max(500);
        assert_eq!(filters.salary_range, (1000, 1000));
    }

    #[test]
    fn distance_input_is_coerced() {
        assert_eq!(parse_distance("30"), Some(30.0));
        assert_eq!(parse_distance(" 12.5 "), Some(12.5));
        assert_eq!(parse_distance(""), None);
        assert_eq!(parse_distance("abc"), None);
        assert_eq!(parse_distance("0"), None);
        assert_eq!(parse_distance("-5"), None);
    }

    #[test]
    fn industry_options_lead_with_all() {
        let options = Industry::options();
        assert_eq!(options.len(), INDUSTRIES.len() + 1);
        assert_eq!(options[0], Industry::All);
        assert_eq!(options[0].as_filter(), None);
        assert_eq!(options[1].as_filter(), Some("Teollisuus"));
    }

    #[test]
    fn industry_display_names() {
        assert_eq!(Industry::All.to_string(), "All industries");
        assert_eq!(Industry::Named("HoReCa").to_string(), "HoReCa");
    }
}
