//! The two collection panels.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_DIM, COLOR_ERROR};
use crate::error::FetchError;
use crate::models::CatalogRecord;
use crate::view_state::Resource;

pub(super) struct Panel<'a, T> {
    pub title: &'static str,
    pub resource_name: &'static str,
    pub resource: &'a Resource<Vec<T>>,
    pub focused: bool,
    pub selected: Option<usize>,
}

/// Fallback text shown in place of a list that failed to load.
pub fn failure_line(resource: &str, err: &FetchError) -> String {
    format!("failed to load {}: {}", resource, err.user_message())
}

pub(super) fn render_panel<T: CatalogRecord>(frame: &mut Frame, area: Rect, panel: Panel<'_, T>) {
    let border = if panel.focused {
        COLOR_BORDER_FOCUSED
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(format!(" {} ", panel.title));

    match panel.resource {
        Resource::Loading => {
            let text = Line::styled("loading…", Style::default().fg(COLOR_DIM));
            frame.render_widget(Paragraph::new(text).block(block), area);
        }
        Resource::Failed(err) => {
            let text = Line::styled(
                failure_line(panel.resource_name, err),
                Style::default().fg(COLOR_ERROR),
            );
            frame.render_widget(
                Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
                area,
            );
        }
        Resource::Loaded(records) => {
            let entries: Vec<ListItem> = records
                .iter()
                .map(|record| ListItem::new(record.label().to_string()))
                .collect();
            let list = List::new(entries)
                .block(block)
                .highlight_symbol("> ")
                .highlight_style(if panel.focused {
                    Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                });
            let mut state = ListState::default().with_selected(panel.selected);
            frame.render_stateful_widget(list, area, &mut state);
        }
    }
}
