//! Whole search flows through EffectStoreTestHarness

use tui_dispatch::testing::*;
use weather_lookup::{
    action::Action,
    components::{Component, WeatherDisplay, WeatherDisplayProps},
    effect::Effect,
    reducer::reducer,
    state::{AppState, CurrentConditions, DisplayState, WeatherResult},
};

fn mock_weather(cached: bool) -> WeatherResult {
    WeatherResult {
        resolved_address: Some("Jakarta, Indonesia".into()),
        address: Some("jakarta".into()),
        current_conditions: CurrentConditions {
            temp: 31.4,
            feelslike: Some(36.2),
            conditions: Some("Partially cloudy".into()),
            humidity: Some(66.0),
            windspeed: Some(11.2),
            pressure: Some(1009.0),
            visibility: Some(9.5),
            description: Some("Hot and humid.".into()),
            datetime: Some("14:30:00".into()),
            datetime_epoch: None,
        },
        cached,
    }
}

/// Render the main screen straight from a state, outside any store
fn render_state(state: &AppState) -> String {
    let mut render = RenderHarness::new(80, 30);
    let mut component = WeatherDisplay;
    render.render_to_string_plain(|frame| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

#[test]
fn test_search_success_flow() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::SearchSubmit("Jakarta".into()));
    harness.assert_state(|s| s.display.is_loading());

    let effects = harness.drain_effects();
    effects.effects_count(1);
    effects.effects_first_matches(
        |e| matches!(e, Effect::FetchWeather { city } if city == "Jakarta"),
    );

    harness.complete_action(Action::WeatherDidLoad(mock_weather(false)));
    let (changed, total) = harness.process_emitted();

    assert_eq!(total, 1);
    assert_eq!(changed, 1);
    harness.assert_state(|s| s.display.is_success());
    harness.assert_state(|s| !s.display.is_loading());
}

#[test]
fn test_search_error_flow() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::SearchSubmit("Atlantis".into()));
    harness.complete_action(Action::WeatherDidError("City not found".into()));
    harness.process_emitted();

    harness.assert_state(|s| s.display.error_title() == Some("City not found"));
    harness.assert_state(|s| s.can_submit());
}

#[test]
fn test_second_search_rejected_while_loading() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::SearchSubmit("Jakarta".into()));
    harness.drain_effects();

    harness.dispatch_collect(Action::SearchSubmit("Tokyo".into()));
    harness.dispatch_collect(Action::SearchExample(0));
    harness.drain_effects().effects_empty();
    harness.assert_state(|s| s.last_city.as_deref() == Some("Jakarta"));

    // Once the first one resolves the control is usable again
    harness.complete_action(Action::WeatherDidLoad(mock_weather(false)));
    harness.process_emitted();
    harness.dispatch_collect(Action::SearchSubmit("Tokyo".into()));
    harness
        .drain_effects()
        .effects_first_matches(|e| matches!(e, Effect::FetchWeather { city } if city == "Tokyo"));
}

#[test]
fn test_overlay_submit_flow() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_all([
        Action::SearchOpen,
        Action::SearchQueryChange("Lima".into()),
    ]);
    harness.assert_state(|s| s.search_mode && s.search_query == "Lima");

    harness.dispatch_collect(Action::SearchSubmit("Lima".into()));
    harness.assert_state(|s| !s.search_mode && s.search_query.is_empty());
    harness.drain_effects().effects_count(1);
}

#[test]
fn test_refresh_repeats_last_city() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);

    harness.dispatch_collect(Action::SearchExample(3));
    harness.complete_action(Action::WeatherDidLoad(mock_weather(true)));
    harness.process_emitted();
    harness.drain_effects();

    harness.dispatch_collect(Action::WeatherRefresh);
    harness
        .drain_effects()
        .effects_first_matches(|e| matches!(e, Effect::FetchWeather { city } if city == "Jakarta"));
}

#[test]
fn test_render_cache_badge_follows_flag() {
    let cached = AppState {
        display: DisplayState::Success(mock_weather(true)),
        ..Default::default()
    };
    let output = render_state(&cached);
    assert!(output.contains("Cached"), "Badge should show:\n{}", output);
    assert!(output.contains("Indonesia"));

    let fresh = AppState {
        display: DisplayState::Success(mock_weather(false)),
        ..Default::default()
    };
    let output = render_state(&fresh);
    assert!(!output.contains("Cached"), "Badge should be hidden:\n{}", output);
}

#[test]
fn test_render_loading_cleared_after_result() {
    let mut harness = EffectStoreTestHarness::new(AppState::default(), reducer);
    let mut component = WeatherDisplay;

    harness.dispatch_collect(Action::SearchSubmit("Jakarta".into()));
    let output = harness.render_plain(80, 30, |frame, area, state| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component.render(frame, area, props);
    });
    assert!(output.contains("Fetching weather"));

    harness.complete_action(Action::WeatherDidError("HTTP error! status: 500".into()));
    harness.process_emitted();

    let output = harness.render_plain(80, 30, |frame, area, state| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component.render(frame, area, props);
    });
    assert!(!output.contains("Fetching weather"));
    assert!(output.contains("HTTP error! status: 500"));
}
