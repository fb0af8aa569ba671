//! Reducer - pure function: (state, action) -> DispatchResult
//!
//! This is the search controller. One search is in flight at most; while the
//! display is `Loading` every new submission is rejected rather than
//! replacing the outstanding one.

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{AppState, DisplayState, EMPTY_CITY_MESSAGE, FETCH_FAILED_MESSAGE};

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Search actions =====
        Action::SearchOpen => {
            state.search_mode = true;
            state.search_query.clear();
            DispatchResult::changed()
        }

        Action::SearchClose => {
            state.search_mode = false;
            state.search_query.clear();
            DispatchResult::changed()
        }

        Action::SearchQueryChange(query) => {
            state.search_query = query;
            DispatchResult::changed()
        }

        Action::SearchSubmit(input) => {
            if !state.can_submit() {
                return reject_submission(&input);
            }
            state.search_mode = false;
            state.search_query.clear();
            submit(state, &input)
        }

        Action::SearchExample(index) => {
            let Some(city) = state.examples.get(index).cloned() else {
                return DispatchResult::unchanged();
            };
            if !state.can_submit() {
                return reject_submission(&city);
            }
            submit(state, &city)
        }

        // ===== Weather actions =====
        Action::WeatherRefresh => {
            let Some(city) = state.last_city.clone() else {
                return DispatchResult::unchanged();
            };
            if !state.can_submit() {
                return reject_submission(&city);
            }
            submit(state, &city)
        }

        Action::WeatherDidLoad(result) => {
            if !state.display.is_loading() {
                tracing::debug!("dropping weather result that arrived after loading ended");
                return DispatchResult::unchanged();
            }
            state.display = DisplayState::Success(result);
            DispatchResult::changed()
        }

        Action::WeatherDidError(message) => {
            if !state.display.is_loading() {
                tracing::debug!(%message, "dropping fetch error that arrived after loading ended");
                return DispatchResult::unchanged();
            }
            let title = if message.is_empty() {
                FETCH_FAILED_MESSAGE.to_string()
            } else {
                message
            };
            state.display = DisplayState::error(title, "");
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Render => DispatchResult::changed(),

        Action::Tick => {
            if state.display.is_loading() {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Validate and start a search. Callers have already checked the guard.
fn submit(state: &mut AppState, input: &str) -> DispatchResult<Effect> {
    let city = input.trim();
    if city.is_empty() {
        state.display = DisplayState::error(EMPTY_CITY_MESSAGE, "");
        return DispatchResult::changed();
    }

    tracing::info!(city, "searching");
    state.display = DisplayState::Loading;
    state.last_city = Some(city.to_string());
    state.tick_count = 0;
    DispatchResult::changed_with(Effect::FetchWeather {
        city: city.to_string(),
    })
}

fn reject_submission(input: &str) -> DispatchResult<Effect> {
    tracing::debug!(input, "search already in flight, ignoring submission");
    DispatchResult::unchanged()
}
