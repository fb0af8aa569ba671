//! Pure presentation: `DisplayState` → `ViewModel`
//!
//! Everything here is string formatting; the components only lay the
//! results out on screen.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::icons::WeatherIcon;
use crate::state::{CurrentConditions, DisplayState, WeatherResult};

const MISSING: &str = "--";

/// What each region of the screen should show
#[derive(Clone, Debug, PartialEq)]
pub struct ViewModel {
    pub loading_visible: bool,
    pub submit_enabled: bool,
    pub error: Option<ErrorPanel>,
    pub weather: Option<WeatherCard>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ErrorPanel {
    pub title: String,
    pub message: String,
}

/// A fully formatted weather report
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherCard {
    pub city: String,
    pub country: String,
    pub icon: WeatherIcon,
    /// Rounded °C
    pub temperature: String,
    /// Unrounded, drives the header gradient
    pub temperature_c: f64,
    pub condition: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind_speed: String,
    pub pressure: String,
    pub visibility: String,
    pub description: String,
    pub last_updated: String,
    pub show_cache_badge: bool,
}

/// Map the display state to what is visible, in local time.
pub fn render(display: &DisplayState) -> ViewModel {
    render_at(display, &Local, Local::now().date_naive())
}

/// Like [`render`], with the clock pinned: observation times are shown in
/// `tz` and a bare time of day is placed on `today`. Regions are mutually
/// exclusive.
pub fn render_at<Tz: TimeZone>(display: &DisplayState, tz: &Tz, today: NaiveDate) -> ViewModel {
    let hidden = ViewModel {
        loading_visible: false,
        submit_enabled: true,
        error: None,
        weather: None,
    };
    match display {
        DisplayState::Idle => hidden,
        DisplayState::Loading => ViewModel {
            loading_visible: true,
            submit_enabled: false,
            ..hidden
        },
        DisplayState::Error { title, message } => ViewModel {
            error: Some(ErrorPanel {
                title: title.clone(),
                message: message.clone(),
            }),
            ..hidden
        },
        DisplayState::Success(result) => ViewModel {
            weather: Some(weather_card(result, tz, today)),
            ..hidden
        },
    }
}

fn weather_card<Tz: TimeZone>(result: &WeatherResult, tz: &Tz, today: NaiveDate) -> WeatherCard {
    let (city, country) =
        parse_address(result.resolved_address.as_deref(), result.address.as_deref());
    let current = &result.current_conditions;
    let condition = current
        .conditions
        .clone()
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| "Unknown".to_string());

    WeatherCard {
        city,
        country,
        icon: WeatherIcon::from_condition(current.conditions.as_deref().unwrap_or_default()),
        temperature: round_half_up(current.temp).to_string(),
        temperature_c: current.temp,
        condition,
        feels_like: format!("Feels like {}", with_unit(current.feelslike, "°C")),
        humidity: with_unit(current.humidity, "%"),
        wind_speed: with_unit(current.windspeed, " km/h"),
        pressure: with_unit(current.pressure, " hPa"),
        visibility: with_unit(current.visibility, " km"),
        description: current
            .description
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| "No description available".to_string()),
        last_updated: format!("Last updated: {}", last_updated(current, tz, today)),
        show_cache_badge: result.cached,
    }
}

fn with_unit(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) => format!("{}{}", round_half_up(v), unit),
        None => MISSING.to_string(),
    }
}

/// Round to the nearest integer, halves towards positive infinity.
pub fn round_half_up(value: f64) -> i64 {
    // `value + 0.5` can itself round up, so compare the exact fraction
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}

/// Split a "City, Country" address on its first comma.
///
/// Falls back to the plain queried address, then to "Unknown".
pub fn parse_address(resolved: Option<&str>, address: Option<&str>) -> (String, String) {
    fn present(s: Option<&str>) -> Option<&str> {
        s.map(str::trim).filter(|s| !s.is_empty())
    }

    match present(resolved) {
        Some(resolved) => {
            let (city, country) = resolved.split_once(',').unwrap_or((resolved, ""));
            let city = city.trim();
            let city = if city.is_empty() { "Unknown" } else { city };
            (city.to_string(), country.trim().to_string())
        }
        None => (present(address).unwrap_or("Unknown").to_string(), String::new()),
    }
}

/// e.g. "Sun, Oct 18, 2026, 02:30 PM"
pub fn format_timestamp(at: &NaiveDateTime) -> String {
    at.format("%a, %b %-d, %Y, %I:%M %p").to_string()
}

/// Wall-clock observation time in `tz`.
///
/// `datetimeEpoch` wins; otherwise `datetime` may be RFC 3339, a naive
/// date-time, or a bare time of day taken to be on `today`.
pub fn observation_time<Tz: TimeZone>(
    current: &CurrentConditions,
    tz: &Tz,
    today: NaiveDate,
) -> Option<NaiveDateTime> {
    if let Some(at) = current
        .datetime_epoch
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
    {
        return Some(at.with_timezone(tz).naive_local());
    }

    let raw = current.datetime.as_deref()?.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(tz).naive_local());
    }
    if let Ok(at) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(at);
    }
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .ok()
        .map(|time| today.and_time(time))
}

fn last_updated<Tz: TimeZone>(current: &CurrentConditions, tz: &Tz, today: NaiveDate) -> String {
    match observation_time(current, tz, today) {
        Some(at) => format_timestamp(&at),
        None => current
            .datetime
            .clone()
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| MISSING.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn jakarta() -> WeatherResult {
        WeatherResult {
            resolved_address: Some("Jakarta, Indonesia".into()),
            address: Some("jakarta".into()),
            current_conditions: CurrentConditions {
                temp: 31.5,
                feelslike: Some(36.4),
                conditions: Some("Partially cloudy".into()),
                humidity: Some(66.0),
                windspeed: Some(11.2),
                pressure: Some(1009.0),
                visibility: Some(9.5),
                description: Some("Hot and humid.".into()),
                datetime: Some("14:30:00".into()),
                datetime_epoch: None,
            },
            cached: true,
        }
    }

    #[test]
    fn test_parse_address() {
        assert_eq!(
            parse_address(Some("Jakarta, Indonesia"), None),
            ("Jakarta".to_string(), "Indonesia".to_string())
        );
        assert_eq!(
            parse_address(Some("Jakarta"), Some("ignored")),
            ("Jakarta".to_string(), String::new())
        );
        assert_eq!(
            parse_address(Some("New York, NY, United States"), None),
            ("New York".to_string(), "NY, United States".to_string())
        );
        assert_eq!(
            parse_address(None, Some("london")),
            ("london".to_string(), String::new())
        );
        assert_eq!(
            parse_address(Some("  "), None),
            ("Unknown".to_string(), String::new())
        );
        assert_eq!(
            parse_address(None, None),
            ("Unknown".to_string(), String::new())
        );
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.51), -3);
        assert_eq!(round_half_up(-0.4), 0);
        assert_eq!(round_half_up(0.49999999999999994), 0);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(4_503_599_627_370_497.0), 4_503_599_627_370_497);
    }

    #[test]
    fn test_format_timestamp() {
        let at = NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(format_timestamp(&at), "Sun, Oct 18, 2026, 02:30 PM");

        let morning = NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        assert_eq!(format_timestamp(&morning), "Mon, Mar 2, 2026, 09:05 AM");
    }

    #[test]
    fn test_observation_time_sources() {
        let mut current = CurrentConditions {
            datetime: Some("14:30:00".into()),
            ..Default::default()
        };
        assert_eq!(
            observation_time(&current, &Utc, today()),
            today().and_hms_opt(14, 30, 0)
        );

        current.datetime = Some("2026-10-17T08:00:00".into());
        assert_eq!(
            observation_time(&current, &Utc, today()),
            NaiveDate::from_ymd_opt(2026, 10, 17).unwrap().and_hms_opt(8, 0, 0)
        );

        current.datetime = Some("2026-10-17T08:00:00+07:00".into());
        assert_eq!(
            observation_time(&current, &Utc, today()),
            NaiveDate::from_ymd_opt(2026, 10, 17).unwrap().and_hms_opt(1, 0, 0)
        );

        current.datetime_epoch = Some(1_760_772_600);
        assert_eq!(
            observation_time(&current, &Utc, today()),
            NaiveDate::from_ymd_opt(2025, 10, 18).unwrap().and_hms_opt(7, 30, 0)
        );
    }

    #[test]
    fn test_weather_card_formatting() {
        let card = weather_card(&jakarta(), &Utc, today());

        assert_eq!(card.city, "Jakarta");
        assert_eq!(card.country, "Indonesia");
        assert_eq!(card.icon, WeatherIcon::Cloudy);
        assert_eq!(card.temperature, "32");
        assert_eq!(card.condition, "Partially cloudy");
        assert_eq!(card.feels_like, "Feels like 36°C");
        assert_eq!(card.humidity, "66%");
        assert_eq!(card.wind_speed, "11 km/h");
        assert_eq!(card.pressure, "1009 hPa");
        assert_eq!(card.visibility, "10 km");
        assert_eq!(card.description, "Hot and humid.");
        assert_eq!(card.last_updated, "Last updated: Sun, Oct 18, 2026, 02:30 PM");
        assert!(card.show_cache_badge);
    }

    #[test]
    fn test_weather_card_fallbacks() {
        let result = WeatherResult {
            current_conditions: CurrentConditions {
                temp: -0.3,
                datetime: Some("yesterday-ish".into()),
                ..Default::default()
            },
            ..Default::default()
        };

        let card = weather_card(&result, &Utc, today());

        assert_eq!(card.city, "Unknown");
        assert_eq!(card.country, "");
        assert_eq!(card.icon, WeatherIcon::Default);
        assert_eq!(card.temperature, "0");
        assert_eq!(card.condition, "Unknown");
        assert_eq!(card.feels_like, "Feels like --");
        assert_eq!(card.visibility, "--");
        assert_eq!(card.description, "No description available");
        assert_eq!(card.last_updated, "Last updated: yesterday-ish");
        assert!(!card.show_cache_badge);
    }

    #[test]
    fn test_render_regions_are_exclusive() {
        let idle = render(&DisplayState::Idle);
        assert!(!idle.loading_visible && idle.submit_enabled);
        assert!(idle.error.is_none() && idle.weather.is_none());

        let loading = render(&DisplayState::Loading);
        assert!(loading.loading_visible && !loading.submit_enabled);
        assert!(loading.error.is_none() && loading.weather.is_none());

        let error = render(&DisplayState::error("City not found", ""));
        assert!(!error.loading_visible && error.submit_enabled);
        assert_eq!(
            error.error,
            Some(ErrorPanel {
                title: "City not found".into(),
                message: String::new(),
            })
        );
        assert!(error.weather.is_none());

        let success = render(&DisplayState::Success(jakarta()));
        assert!(!success.loading_visible && success.submit_enabled);
        assert!(success.error.is_none());
        assert!(success.weather.is_some_and(|card| card.show_cache_badge));
    }

    #[test]
    fn test_render_at_uses_given_clock() {
        let model = render_at(&DisplayState::Success(jakarta()), &Utc, today());

        let card = model.weather.unwrap();
        assert_eq!(card.last_updated, "Last updated: Sun, Oct 18, 2026, 02:30 PM");

        let mut epoch = jakarta();
        epoch.current_conditions.datetime_epoch = Some(1_760_772_600);
        let offset = chrono::FixedOffset::east_opt(7 * 3600).unwrap();
        let card = render_at(&DisplayState::Success(epoch), &offset, today())
            .weather
            .unwrap();
        assert_eq!(card.last_updated, "Last updated: Sat, Oct 18, 2025, 02:30 PM");
    }
}
