//! Renderer for the dashboard.
//!
//! Drawing is split in two steps so the draw closure stays synchronous:
//! [`ScreenModel::collect`] gathers everything the active screen needs from
//! the [`Dashboard`], then [`render`] draws it:
//! - header with the screen title (and the sort mode on the network list)
//! - body: a selectable list or a block of text
//! - status line with the latest outbox message

mod body;
mod theme;

pub use body::{collect, ViewBody};
pub use theme::{
    COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_RUNNING, COLOR_SELECTION_BG,
    COLOR_STATUS, COLOR_STOPPED,
};

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::app::{Dashboard, ViewMode};
use crate::input::Cursor;
use crate::models::SortMode;

/// Everything needed to draw one frame.
#[derive(Debug, Clone)]
pub struct ScreenModel {
    pub view: ViewMode,
    pub sort_mode: SortMode,
    pub body: ViewBody,
    /// Latest status message.
    pub status: Option<String>,
}

impl ScreenModel {
    pub async fn collect(dashboard: &Dashboard, status: Option<String>) -> Self {
        Self {
            view: dashboard.view_mode(),
            sort_mode: dashboard.sort_mode(),
            body: collect(dashboard).await,
            status,
        }
    }
}

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Draw `model` with the row under `cursor` highlighted.
pub fn render(frame: &mut Frame, model: &ScreenModel, cursor: &Cursor) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status line
        ])
        .split(frame.area());

    render_header(frame, chunks[0], model);
    render_body(frame, chunks[1], model, cursor);
    render_status(frame, chunks[2], model.status.as_deref());
}

fn render_header(frame: &mut Frame, area: Rect, model: &ScreenModel) {
    let mut spans = vec![
        Span::styled(
            " dockdeck ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(COLOR_DIM)),
        Span::styled(model.view.title(), Style::default().fg(COLOR_HEADER)),
    ];
    if model.view == ViewMode::Networks {
        spans.push(Span::styled(
            format!("  sort: {}", model.sort_mode.label()),
            Style::default().fg(COLOR_DIM),
        ));
    }
    spans.push(Span::styled("  ? help", Style::default().fg(COLOR_DIM)));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_body(frame: &mut Frame, area: Rect, model: &ScreenModel, cursor: &Cursor) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER));

    if model.body.selectable {
        let items: Vec<ListItem> = model
            .body
            .lines
            .iter()
            .cloned()
            .map(ListItem::new)
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(COLOR_SELECTION_BG)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut state = ListState::default();
        if !model.body.lines.is_empty() {
            state.select(Some(cursor.selected().min(model.body.lines.len() - 1)));
        }
        frame.render_stateful_widget(list, area, &mut state);
    } else {
        let text = Paragraph::new(model.body.lines.clone()).block(block);
        frame.render_widget(text, area);
    }
}

fn render_status(frame: &mut Frame, area: Rect, status: Option<&str>) {
    let Some(status) = status else {
        return;
    };
    let color = if status.starts_with("Error") {
        COLOR_ERROR
    } else {
        COLOR_STATUS
    };
    let line = Line::from(Span::styled(
        format!(" {}", status),
        Style::default().fg(color),
    ));
    frame.render_widget(Paragraph::new(line), area);
}
