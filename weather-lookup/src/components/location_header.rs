use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;

pub const CACHE_BADGE: &str = "\u{26a1} Cached";

pub struct LocationHeader;

pub struct LocationHeaderProps<'a> {
    pub city: &'a str,
    pub country: &'a str,
    pub temperature: f64,
    pub show_cache_badge: bool,
}

/// Rows below the FIGlet city name: the country line.
pub const HEADER_OVERHEAD: u16 = 1;

/// Gradient endpoints by temperature band (°C)
pub fn gradient_colors(celsius: f64) -> (ArtColor, ArtColor) {
    match celsius {
        t if t < 0.0 => (
            ArtColor::rgb(150, 200, 255), // Ice blue
            ArtColor::rgb(200, 230, 255), // Light ice
        ),
        t if t < 15.0 => (
            ArtColor::rgb(100, 180, 255), // Cool blue
            ArtColor::rgb(150, 220, 200), // Teal
        ),
        t if t < 25.0 => (
            ArtColor::rgb(100, 200, 150), // Green
            ArtColor::rgb(255, 220, 100), // Yellow
        ),
        t if t < 35.0 => (
            ArtColor::rgb(255, 180, 80), // Orange
            ArtColor::rgb(255, 120, 80), // Deep orange
        ),
        _ => (
            ArtColor::rgb(255, 100, 80), // Red-orange
            ArtColor::rgb(255, 60, 60),  // Hot red
        ),
    }
}

pub fn temperature_fill(celsius: f64) -> Fill {
    let (start, end) = gradient_colors(celsius);
    Fill::Linear(LinearGradient::horizontal(start, end))
}

fn country_line<'a>(country: &'a str, show_cache_badge: bool) -> Line<'a> {
    let mut spans = Vec::new();
    if !country.is_empty() {
        spans.push(Span::styled(country, Style::default().fg(Color::Gray)));
    }
    if show_cache_badge {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            CACHE_BADGE,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans).centered()
}

impl Component<Action> for LocationHeader {
    type Props<'a> = LocationHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // FIGlet city name, artbox picks the font
            Constraint::Length(1), // Country + cache badge
        ])
        .split(area);

        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(temperature_fill(props.temperature));
        frame.render_widget(ArtBox::new(&renderer, props.city), chunks[0]);

        frame.render_widget(
            Paragraph::new(country_line(props.country, props.show_cache_badge)),
            chunks[1],
        );
    }
}
