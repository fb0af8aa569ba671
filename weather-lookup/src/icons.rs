//! Condition text → weather glyph

use ratatui::style::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherIcon {
    Clear,
    Cloudy,
    Rain,
    Thunderstorm,
    Snow,
    Fog,
    Wind,
    Default,
}

/// Checked in order; the first rule with a matching keyword wins.
const ICON_RULES: [(&[&str], WeatherIcon); 7] = [
    (&["clear", "sunny"], WeatherIcon::Clear),
    (&["cloudy", "cloud"], WeatherIcon::Cloudy),
    (&["rain", "drizzle"], WeatherIcon::Rain),
    (&["thunderstorm", "thunder"], WeatherIcon::Thunderstorm),
    (&["snow"], WeatherIcon::Snow),
    (&["fog", "mist"], WeatherIcon::Fog),
    (&["wind"], WeatherIcon::Wind),
];

impl WeatherIcon {
    /// Case-insensitive substring match against the provider's condition label
    pub fn from_condition(condition: &str) -> Self {
        let condition = condition.to_lowercase();
        ICON_RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|kw| condition.contains(kw)))
            .map(|(_, icon)| *icon)
            .unwrap_or(WeatherIcon::Default)
    }

    pub fn glyph(self) -> &'static str {
        match self {
            WeatherIcon::Clear => "\u{2600}\u{fe0f}",
            WeatherIcon::Cloudy => "\u{2601}\u{fe0f}",
            WeatherIcon::Rain => "\u{1f327}\u{fe0f}",
            WeatherIcon::Thunderstorm => "\u{26c8}\u{fe0f}",
            WeatherIcon::Snow => "\u{2744}\u{fe0f}",
            WeatherIcon::Fog => "\u{1f32b}\u{fe0f}",
            WeatherIcon::Wind => "\u{1f4a8}",
            WeatherIcon::Default => "\u{1f324}\u{fe0f}",
        }
    }

    pub fn color(self) -> Color {
        match self {
            WeatherIcon::Clear => Color::Yellow,
            WeatherIcon::Cloudy | WeatherIcon::Fog => Color::Gray,
            WeatherIcon::Rain => Color::Blue,
            WeatherIcon::Thunderstorm => Color::Magenta,
            WeatherIcon::Snow => Color::White,
            WeatherIcon::Wind => Color::Cyan,
            WeatherIcon::Default => Color::LightYellow,
        }
    }
}
