// src/state/mod.rs
use chrono::{Datelike, Utc};
use tracing::debug;

use crate::resolve::{HeatingRecord, Resolution, ResolveError};

/// Number of selectable years, current year included.
const YEAR_SPAN: i32 = 18;

/// Location offered before the first resolution has reported what the
/// feed actually contains.
pub const DEFAULT_LOCATION: &str = "Vantaa";

/// What the rendering layer consumes. Overwritten wholesale by the latest
/// applied resolution; never mutated concurrently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub loading: bool,
    pub error: Option<String>,
    pub heating: Option<HeatingRecord>,
    pub available_years: Vec<i32>,
    pub locations: Vec<String>,
}

/// Selectable years: the current year first, each subsequent entry one
/// less.
pub fn available_years(current_year: i32) -> Vec<i32> {
    (0..YEAR_SPAN).map(|i| current_year - i).collect()
}

/// Caller-side state machine around the resolver. Each dispatched
/// resolution gets a monotonically increasing sequence number; a
/// completion is applied only if nothing newer has been applied already,
/// so out-of-order stale completions are discarded rather than clobbering
/// fresher results.
#[derive(Debug)]
pub struct AppState {
    view: ViewState,
    next_seq: u64,
    applied_seq: Option<u64>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::starting_from(Utc::now().year())
    }

    pub fn starting_from(current_year: i32) -> Self {
        Self {
            view: ViewState {
                loading: false,
                error: None,
                heating: None,
                available_years: available_years(current_year),
                locations: vec![DEFAULT_LOCATION.to_string()],
            },
            next_seq: 0,
            applied_seq: None,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Record that a resolution has been dispatched; returns its sequence
    /// number for the matching `apply` call.
    pub fn begin(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.view.loading = true;
        self.view.error = None;
        seq
    }

    /// Apply a completed resolution. Returns false when the completion is
    /// stale (its sequence number, or a later one, has already been
    /// applied) and the view was left untouched. Each sequence number
    /// applies at most once.
    pub fn apply(&mut self, seq: u64, outcome: Result<Resolution, ResolveError>) -> bool {
        if self.applied_seq.is_some_and(|applied| seq <= applied) {
            debug!(seq, "discarding stale resolution");
            return false;
        }
        self.applied_seq = Some(seq);
        if seq + 1 == self.next_seq {
            self.view.loading = false;
        }

        match outcome {
            Ok(resolution) => {
                self.view.locations = resolution.locations;
                self.view.heating = Some(resolution.record);
                self.view.error = None;
            }
            Err(err) => {
                // A failed lookup still tells us what the year's file
                // contains; keep the picker in sync.
                match &err {
                    ResolveError::NotFound { available, .. }
                    | ResolveError::MissingMonth { available, .. } => {
                        self.view.locations = available.clone();
                    }
                    _ => {}
                }
                self.view.error = Some(err.to_string());
                self.view.heating = None;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve_text;
    use crate::resolve::HeatingQuery;

    const SAMPLE: &str = "\
Lämmitystarveluvut (17°Cvrk),I,II
Vantaa,120,100
Helsinki,115,98
";

    fn outcome(month: usize, location: &str) -> Result<Resolution, ResolveError> {
        resolve_text(
            SAMPLE,
            &HeatingQuery {
                year: 2023,
                month,
                location: location.to_string(),
            },
        )
    }

    #[test]
    fn available_years_start_now_and_step_down() {
        let years = available_years(2025);
        assert_eq!(years.len(), 18);
        assert_eq!(years[0], 2025);
        assert_eq!(years[17], 2008);
        for pair in years.windows(2) {
            assert_eq!(pair[0] - pair[1], 1);
        }
    }

    #[test]
    fn starts_idle_with_seed_location() {
        let state = AppState::starting_from(2025);
        let view = state.view();
        assert!(!view.loading);
        assert_eq!(view.error, None);
        assert_eq!(view.heating, None);
        assert_eq!(view.locations, vec![DEFAULT_LOCATION]);
    }

    #[test]
    fn successful_resolution_updates_record_and_locations() {
        let mut state = AppState::starting_from(2025);
        let seq = state.begin();
        assert!(state.view().loading);

        assert!(state.apply(seq, outcome(0, "Vantaa")));
        let view = state.view();
        assert!(!view.loading);
        assert_eq!(view.error, None);
        assert_eq!(
            view.heating.as_ref().map(|r| r.heating_requirement.as_str()),
            Some("120")
        );
        assert_eq!(view.locations, vec!["Vantaa", "Helsinki"]);
    }

    #[test]
    fn failure_surfaces_one_message_and_clears_record() {
        let mut state = AppState::starting_from(2025);
        let seq = state.begin();
        assert!(state.apply(seq, outcome(0, "Vantaa")));

        let seq = state.begin();
        assert!(state.apply(seq, outcome(0, "Atlantis")));
        let view = state.view();
        assert!(view.error.as_deref().is_some_and(|m| m.contains("Atlantis")));
        assert_eq!(view.heating, None);
        // NotFound still refreshed the selectable set.
        assert_eq!(view.locations, vec!["Vantaa", "Helsinki"]);
    }

    #[test]
    fn missing_month_failure_still_refreshes_locations() {
        let mut state = AppState::starting_from(2025);
        assert_eq!(state.view().locations, vec![DEFAULT_LOCATION]);

        // SAMPLE only carries I and II; month 2 (March) is absent.
        let seq = state.begin();
        assert!(state.apply(seq, outcome(2, "Helsinki")));
        let view = state.view();
        assert!(view.error.as_deref().is_some_and(|m| m.contains("March")));
        assert_eq!(view.heating, None);
        assert_eq!(view.locations, vec!["Vantaa", "Helsinki"]);
    }

    #[test]
    fn replayed_completion_is_discarded() {
        let mut state = AppState::starting_from(2025);
        let seq = state.begin();

        assert!(state.apply(seq, outcome(0, "Helsinki")));
        assert!(!state.apply(seq, outcome(0, "Vantaa")));
        assert_eq!(
            state.view().heating.as_ref().map(|r| r.location.as_str()),
            Some("Helsinki")
        );
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut state = AppState::starting_from(2025);
        let first = state.begin();
        let second = state.begin();

        assert!(state.apply(second, outcome(0, "Helsinki")));
        assert!(!state.apply(first, outcome(0, "Vantaa")));

        let view = state.view();
        assert_eq!(
            view.heating.as_ref().map(|r| r.location.as_str()),
            Some("Helsinki")
        );
        assert!(!view.loading);
    }

    #[test]
    fn loading_stays_on_until_the_latest_dispatch_completes() {
        let mut state = AppState::starting_from(2025);
        let first = state.begin();
        let _second = state.begin();

        // The older completion applies (nothing newer has), but a newer
        // dispatch is still in flight.
        assert!(state.apply(first, outcome(0, "Vantaa")));
        assert!(state.view().loading);
    }
}
