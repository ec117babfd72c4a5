//! Rendering of the application state to the terminal frame.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph, Wrap};

use crate::{
    AppState, DETAIL_LOADING_MESSAGE, DetailViewState, LIST_LOADING_MESSAGE, ListViewState,
    NOT_FOUND_MESSAGE, RepositoryCard, RepositoryDetails, Route, ViewState,
};

/// Renders the complete UI.
pub fn view(frame: &mut Frame, state: &AppState) {
    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, areas[0], state);
    match state.route {
        Route::List => render_list(frame, areas[1], &state.list),
        Route::Detail { .. } => render_detail(frame, areas[1], &state.detail),
    }
    render_footer(frame, areas[2], state);
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = match state.route {
        Route::List => "Repositories",
        Route::Detail { .. } => "Repository details",
    };
    let header = Paragraph::new(Span::styled(
        title,
        Style::new().add_modifier(Modifier::BOLD),
    ))
    .block(Block::bordered());
    frame.render_widget(header, area);
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = match state.route {
        Route::List => "Up/Down select | Enter open | q quit",
        Route::Detail { .. } => "Esc back | o open in browser | q quit",
    };
    let footer = Paragraph::new(Span::styled(hints, Style::new().fg(Color::DarkGray)));
    frame.render_widget(footer, area);
}

fn render_list(frame: &mut Frame, area: Rect, view: &ListViewState) {
    if let Some((message, style)) = list_message(view) {
        render_centered_message(frame, area, &message, style);
        return;
    }

    let items = view
        .cards()
        .iter()
        .map(|card| ListItem::new(card_text(card)))
        .collect::<Vec<_>>();
    let list = List::new(items)
        .highlight_symbol("> ")
        .highlight_style(Style::new().add_modifier(Modifier::REVERSED));
    let mut list_state = ListState::default();
    list_state.select(Some(view.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_detail(frame: &mut Frame, area: Rect, view: &DetailViewState) {
    if let Some((message, style)) = detail_message(view) {
        render_centered_message(frame, area, &message, style);
        return;
    }

    if let Some(details) = view.details() {
        let paragraph = Paragraph::new(detail_text(&details)).wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

/// The message the list area displays instead of cards, if any.
fn list_message(view: &ListViewState) -> Option<(String, Style)> {
    match &view.state {
        ViewState::Idle => Some((String::new(), Style::new())),
        ViewState::Loading => Some((LIST_LOADING_MESSAGE.to_string(), loading_style())),
        ViewState::Failure(message) => Some((message.clone(), error_style())),
        ViewState::Success(_) => None,
    }
}

/// The message the detail area displays instead of the panel, if any.
fn detail_message(view: &DetailViewState) -> Option<(String, Style)> {
    match &view.state {
        ViewState::Idle => Some((String::new(), Style::new())),
        ViewState::Loading => Some((DETAIL_LOADING_MESSAGE.to_string(), loading_style())),
        ViewState::Failure(message) => Some((message.clone(), error_style())),
        ViewState::Success(None) => Some((NOT_FOUND_MESSAGE.to_string(), error_style())),
        ViewState::Success(Some(_)) => None,
    }
}

/// The lines one list card displays.
fn card_text(card: &RepositoryCard) -> Text<'static> {
    Text::from(vec![
        Line::from(Span::styled(
            card.name.clone(),
            Style::new().add_modifier(Modifier::BOLD),
        )),
        Line::from(card.description.clone()),
        Line::from(Span::styled(
            format!(
                "{}  |  stars {}  forks {}  watchers {}  issues {}",
                card.language, card.stars, card.forks, card.watchers, card.open_issues
            ),
            Style::new().fg(Color::DarkGray),
        )),
        Line::default(),
    ])
}

/// The lines the detail panel displays.
fn detail_text(details: &RepositoryDetails) -> Text<'static> {
    Text::from(vec![
        Line::from(Span::styled(
            details.name.clone(),
            Style::new().add_modifier(Modifier::BOLD),
        )),
        Line::from(details.full_name.clone()),
        Line::default(),
        Line::from(details.description.clone()),
        Line::default(),
        Line::from(format!("Primary language: {}", details.language)),
        Line::from(format!("Stars: {}", details.stars)),
        Line::from(format!("Forks: {}", details.forks)),
        Line::from(format!("Watchers: {}", details.watchers)),
        Line::from(format!("Open issues: {}", details.open_issues)),
        Line::default(),
        Line::from(format!("Link: {}", details.html_url)),
    ])
}

fn render_centered_message(frame: &mut Frame, area: Rect, message: &str, style: Style) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);
    let paragraph = Paragraph::new(Span::styled(message.to_string(), style))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, rows[1]);
}

fn loading_style() -> Style {
    Style::new().fg(Color::Yellow)
}

fn error_style() -> Style {
    Style::new().fg(Color::Red)
}
