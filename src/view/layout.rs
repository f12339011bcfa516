//! Layout rendering (search bar, listing header, status line)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{ActiveSection, Listing, UiState};
use super::utils::truncate_string;

pub fn render_top_bar(frame: &mut Frame, area: Rect, ui_state: &UiState, header: &str) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Search input
            Constraint::Percentage(55), // Listing header
        ])
        .split(area);

    let is_focused = ui_state.active_section == ActiveSection::Search;

    let search_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let search_text = if ui_state.search_query.is_empty() {
        "Search for movies..."
    } else {
        &ui_state.search_query
    };

    let search = Paragraph::new(search_text)
        .style(search_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .padding(Padding::horizontal(1))
                .border_style(if is_focused {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default()
                }),
        );
    frame.render_widget(search, chunks[0]);

    let header_width = chunks[1].width.saturating_sub(4) as usize;
    let header = Paragraph::new(truncate_string(header, header_width))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" MovieRama ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(header, chunks[1]);
}

pub fn render_status_line(frame: &mut Frame, area: Rect, listing: &Listing) {
    let mut spans = vec![Span::styled(
        format!(" {} movies ", listing.items.len()),
        Style::default().fg(Color::DarkGray),
    )];

    if listing.is_loading {
        spans.push(Span::styled(
            " Loading more... ",
            Style::default().fg(Color::Yellow),
        ));
    }

    spans.push(Span::styled(
        " / search  Enter details  o trailer  h help  q quit",
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
