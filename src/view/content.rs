//! Main content area rendering (movie cards, expanded details)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, ListItem, Paragraph},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{poster_url, ActiveSection, Item, Listing, UiState, POSTER_SIZE};
use super::utils::{render_scrollable_list, truncate_string, wrap_text};

const OVERVIEW_LINES: usize = 3;
const REVIEW_LINES: usize = 2;

pub fn render_listing(frame: &mut Frame, area: Rect, ui_state: &UiState, listing: &Listing) {
    let is_focused = ui_state.active_section == ActiveSection::Results;
    let border_style = if is_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", listing.header))
        .padding(Padding::horizontal(1))
        .border_style(border_style);

    if listing.items.is_empty() {
        let msg = if listing.is_loading {
            "Loading..."
        } else {
            "No movies to show"
        };
        let empty = Paragraph::new(msg)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let content_width = area.width.saturating_sub(4) as usize;
    let selected = ui_state.selected_index.min(listing.items.len() - 1);

    let mut cards: Vec<ListItem> = listing
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let style = if i == selected && is_focused {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(Text::from(card_lines(listing, item, content_width, i == selected))).style(style)
        })
        .collect();

    if listing.is_loading {
        cards.push(
            ListItem::new("Loading more movies...")
                .style(Style::default().fg(Color::Yellow)),
        );
    }

    render_scrollable_list(frame, area, cards, selected, block);
}

fn card_lines(listing: &Listing, item: &Item, width: usize, is_selected: bool) -> Vec<Line<'static>> {
    let marker = if listing.expanded == Some(item.id) {
        "▼ "
    } else if is_selected {
        "▶ "
    } else {
        "  "
    };

    let year = item.release_year();
    let title = if year.is_empty() {
        item.title.clone()
    } else {
        format!("{} ({})", item.title, year)
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw(marker),
            Span::styled(
                truncate_string(&title, width.saturating_sub(12)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ★ {:.1}", item.vote_average),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(Span::styled(
            format!("  {}", truncate_string(&listing.genre_labels(item), width.saturating_sub(2))),
            Style::default().fg(Color::Magenta),
        )),
    ];

    let overview = if item.overview.is_empty() {
        "No overview available."
    } else {
        item.overview.as_str()
    };
    lines.extend(
        wrap_text(overview, width.saturating_sub(2), OVERVIEW_LINES)
            .into_iter()
            .map(|line| Line::from(Span::styled(format!("  {}", line), Style::default().fg(Color::Gray)))),
    );

    if listing.expanded == Some(item.id) {
        lines.extend(detail_lines(listing, item, width));
    }

    lines.push(Line::from(""));
    lines
}

fn detail_lines(listing: &Listing, item: &Item, width: usize) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let inner = width.saturating_sub(4);
    let mut lines = Vec::new();

    if let Some(path) = &item.poster_path {
        lines.push(Line::from(vec![
            Span::styled("  Poster: ", label),
            Span::raw(truncate_string(&poster_url(path, POSTER_SIZE), inner)),
        ]));
    }

    if listing.details_loading {
        lines.push(Line::from(Span::styled(
            "  Loading details...",
            Style::default().fg(Color::Yellow),
        )));
        return lines;
    }

    let details = &listing.details;

    let trailer = details
        .trailer()
        .and_then(|video| video.watch_url())
        .map(|url| format!("{} (press o)", url))
        .unwrap_or_else(|| "No trailer available".to_string());
    lines.push(Line::from(vec![
        Span::styled("  Trailer: ", label),
        Span::raw(truncate_string(&trailer, inner)),
    ]));

    lines.push(Line::from(Span::styled("  Reviews:", label)));
    if details.reviews.is_empty() {
        lines.push(Line::from(Span::styled("    No reviews yet", Style::default().fg(Color::DarkGray))));
    }
    for review in &details.reviews {
        let rating = review
            .rating_value
            .map(|r| format!(" ({:.1}/10)", r))
            .unwrap_or_default();
        lines.push(Line::from(Span::styled(
            format!("    {}{}", review.author_name, rating),
            Style::default().fg(Color::White).add_modifier(Modifier::ITALIC),
        )));
        lines.extend(
            wrap_text(&review.content, inner.saturating_sub(2), REVIEW_LINES)
                .into_iter()
                .map(|line| Line::from(Span::styled(format!("      {}", line), Style::default().fg(Color::Gray)))),
        );
    }

    lines.push(Line::from(Span::styled("  Similar:", label)));
    if details.similar.is_empty() {
        lines.push(Line::from(Span::styled("    Nothing similar found", Style::default().fg(Color::DarkGray))));
    }
    for similar in &details.similar {
        let year = similar.release_year();
        let text = if year.is_empty() {
            similar.title.clone()
        } else {
            format!("{} ({})", similar.title, year)
        };
        lines.push(Line::from(format!("    • {}", truncate_string(&text, inner.saturating_sub(2)))));
    }

    lines
}
