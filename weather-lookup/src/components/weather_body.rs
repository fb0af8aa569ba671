use artbox::{Alignment as ArtAlignment, Renderer, fonts, integrations::ratatui::ArtBox};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::location_header::{HEADER_OVERHEAD, temperature_fill};
use super::{Component, ERROR_ICON, LocationHeader, LocationHeaderProps};
use crate::action::Action;
use crate::state::AppState;
use crate::view::{self, ErrorPanel, WeatherCard};

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub state: &'a AppState,
}

/// terminus is 6 rows tall; smaller areas fall back to miniwi or plain text.
const ART_CAP: u16 = 6;

impl Component<Action> for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let model = view::render(&props.state.display);

        if let Some(card) = &model.weather {
            render_card(frame, area, card);
        } else if let Some(error) = &model.error {
            render_error(frame, area, error);
        } else if model.loading_visible {
            render_loading(frame, area, props.state);
        } else {
            render_idle(frame, area, props.state);
        }
    }
}

fn centered(text: impl Into<Line<'static>>) -> Paragraph<'static> {
    Paragraph::new(text.into().centered())
}

fn hint_line(key: &'static str, rest: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled(key, Style::default().fg(Color::Cyan).bold()),
        Span::styled(rest, Style::default().fg(Color::DarkGray)),
    ])
}

/// "1 London  2 Tokyo  ..." for the quick picks
pub fn examples_line(examples: &[String]) -> Line<'static> {
    let mut spans = Vec::new();
    for (index, city) in examples.iter().take(9).enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            (index + 1).to_string(),
            Style::default().fg(Color::Cyan).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", city),
            Style::default().fg(Color::Gray),
        ));
    }
    Line::from(spans)
}

fn render_card(frame: &mut Frame, area: Rect, card: &WeatherCard) {
    let chunks = Layout::vertical([
        Constraint::Max(ART_CAP + HEADER_OVERHEAD), // City + country
        Constraint::Length(1),                      // blank
        Constraint::Length(1),                      // glyph + condition
        Constraint::Max(ART_CAP),                   // temperature
        Constraint::Length(1),                      // feels like
        Constraint::Length(1),                      // blank
        Constraint::Length(1),                      // humidity, wind
        Constraint::Length(1),                      // pressure, visibility
        Constraint::Length(1),                      // blank
        Constraint::Length(1),                      // description
        Constraint::Length(1),                      // last updated
    ])
    .flex(Flex::Center)
    .split(area);

    let mut header = LocationHeader;
    header.render(
        frame,
        chunks[0],
        LocationHeaderProps {
            city: &card.city,
            country: &card.country,
            temperature: card.temperature_c,
            show_cache_badge: card.show_cache_badge,
        },
    );

    frame.render_widget(
        centered(Line::from(vec![
            Span::raw(card.icon.glyph()),
            Span::raw("  "),
            Span::styled(card.condition.clone(), Style::default().fg(card.icon.color())),
        ])),
        chunks[2],
    );

    let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
        .with_plain_fallback()
        .with_alignment(ArtAlignment::Center)
        .with_fill(temperature_fill(card.temperature_c));
    let temp_text = format!("{}°C", card.temperature);
    frame.render_widget(ArtBox::new(&renderer, &temp_text), chunks[3]);

    frame.render_widget(
        centered(Span::styled(
            card.feels_like.clone(),
            Style::default().fg(Color::Gray),
        )),
        chunks[4],
    );

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White).bold();
    frame.render_widget(
        centered(Line::from(vec![
            Span::styled("Humidity ", label),
            Span::styled(card.humidity.clone(), value),
            Span::raw("    "),
            Span::styled("Wind ", label),
            Span::styled(card.wind_speed.clone(), value),
        ])),
        chunks[6],
    );
    frame.render_widget(
        centered(Line::from(vec![
            Span::styled("Pressure ", label),
            Span::styled(card.pressure.clone(), value),
            Span::raw("    "),
            Span::styled("Visibility ", label),
            Span::styled(card.visibility.clone(), value),
        ])),
        chunks[7],
    );

    frame.render_widget(
        centered(Span::styled(
            card.description.clone(),
            Style::default().fg(Color::Gray),
        )),
        chunks[9],
    );
    frame.render_widget(
        centered(Span::styled(
            card.last_updated.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        chunks[10],
    );
}

fn render_loading(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)])
        .flex(Flex::Center)
        .split(area);

    let spinner = SPINNER_FRAMES[state.tick_count as usize % SPINNER_FRAMES.len()];
    let city = state.last_city.as_deref().unwrap_or_default();
    frame.render_widget(
        centered(Line::from(vec![
            Span::styled(spinner, Style::default().fg(Color::Cyan)),
            Span::styled(
                format!(" Fetching weather for {}...", city),
                Style::default().fg(Color::Gray),
            ),
        ])),
        chunks[0],
    );
}

fn render_idle(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // hint
        Constraint::Length(1), // blank
        Constraint::Length(1), // quick picks
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(
        centered(hint_line("/", " to search for a city")),
        chunks[0],
    );
    frame.render_widget(centered(examples_line(&state.examples)), chunks[2]);
}

fn render_error(frame: &mut Frame, area: Rect, error: &ErrorPanel) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // blank
        Constraint::Length(1), // icon
        Constraint::Length(1), // title
        Constraint::Length(1), // message
        Constraint::Length(1), // blank
        Constraint::Length(1), // hint
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(centered(ERROR_ICON), chunks[1]);
    frame.render_widget(
        centered(Span::styled(
            error.title.clone(),
            Style::default().fg(Color::Red).bold(),
        )),
        chunks[2],
    );
    if !error.message.is_empty() {
        frame.render_widget(
            centered(Span::styled(
                error.message.clone(),
                Style::default().fg(Color::Rgb(200, 100, 100)),
            )),
            chunks[3],
        );
    }
    frame.render_widget(centered(hint_line("/", " to search again")), chunks[5]);
}
