//! UI rendering for the catalog screen.
//!
//! Layout, top to bottom:
//! - Heading
//! - Categories and Items panels, side by side (stacked on narrow terminals)
//! - Keybind hints
//!
//! Rendering reads a [`CatalogView`] and nothing else.

mod lists;
mod plain;
mod theme;

pub use lists::failure_line;
pub use plain::render_plain;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::view_state::{CatalogView, Focus};
use lists::{render_panel, Panel};
use theme::{COLOR_DIM, COLOR_HEADER};

/// Title shown above both lists.
pub const HEADING: &str = "Gimme What Lee Got";

/// Below this width the panels are stacked vertically.
pub const STACK_BELOW_WIDTH: u16 = 60;

/// Render the catalog screen.
pub fn render(frame: &mut Frame, view: &CatalogView) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header);

    let (left, right) = split_body(body);
    render_panel(
        frame,
        left,
        Panel {
            title: "Categories",
            resource_name: "categories",
            resource: &view.categories,
            focused: view.focus == Focus::Categories,
            selected: view.selected(Focus::Categories),
        },
    );
    render_panel(
        frame,
        right,
        Panel {
            title: "Items",
            resource_name: "items",
            resource: &view.items,
            focused: view.focus == Focus::Items,
            selected: view.selected(Focus::Items),
        },
    );

    render_footer(frame, footer);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let heading = Line::from(Span::styled(
        HEADING,
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(heading), area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let hints = Line::styled(
        "q quit  tab switch list  ↑/↓ move",
        Style::default().fg(COLOR_DIM),
    );
    frame.render_widget(Paragraph::new(hints), area);
}

fn split_body(area: Rect) -> (Rect, Rect) {
    let [first, second] = if area.width < STACK_BELOW_WIDTH {
        Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area)
    } else {
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area)
    };
    (first, second)
}
