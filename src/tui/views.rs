//! TUI Views
//!
//! Draws the form, both project panels, and the alert popup.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use super::app::App;
use super::colors;
use super::project_form::FormField;
use super::project_list::ListKind;
use super::surface::{ListPanel, ProjectItem};

const LABEL_WIDTH: usize = 13;

/// Draw the whole board.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(app, frame, chunks[0]);
    render_form(app, frame, chunks[1]);

    let lists = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    render_panel(&app.panel(ListKind::Active), frame, lists[0], colors::ACTIVE);
    render_panel(&app.panel(ListKind::Finished), frame, lists[1], colors::FINISHED);

    render_footer(frame, chunks[3]);

    if let Some(message) = app.alert() {
        render_alert(message, frame, area);
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = vec![
        Span::styled(" projectboard ", Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD)),
        Span::styled("│ ", Style::default().fg(colors::DIM)),
        Span::raw(format!(
            "{} active │ {} finished",
            app.panel(ListKind::Active).items().len(),
            app.panel(ListKind::Finished).items().len()
        )),
    ];
    if let Some(status) = app.status_message() {
        spans.push(Span::styled(format!("  {}", status), Style::default().fg(colors::DIM)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_form(app: &App, frame: &mut Frame, area: Rect) {
    let form = app.form();
    let block = Block::default().borders(Borders::ALL).title(" Add Project ");
    let inner = block.inner(area);

    let lines: Vec<Line> = FormField::ALL
        .iter()
        .map(|&field| {
            let focused = field == form.focus();
            let label_style = if focused {
                Style::default().fg(colors::KEYBIND).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::DIM)
            };
            Line::from(vec![
                Span::styled(format!("{:<width$}", field.label(), width = LABEL_WIDTH), label_style),
                Span::raw(form.value(field).to_string()),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);

    if app.alert().is_none() {
        let focus = form.focus();
        let row = FormField::ALL.iter().position(|&f| f == focus).unwrap_or(0) as u16;
        let column = (LABEL_WIDTH + form.field(focus).cursor_column()) as u16;
        frame.set_cursor_position(Position::new(inner.x + column, inner.y + row));
    }
}

fn format_item(item: &ProjectItem, accent: Color) -> ListItem<'static> {
    ListItem::new(vec![
        Line::from(Span::styled(item.title.clone(), Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(item.assigned.clone(), Style::default().fg(accent))),
        Line::from(Span::raw(item.description.clone())),
        Line::from(""),
    ])
}

fn render_panel(panel: &ListPanel, frame: &mut Frame, area: Rect, accent: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .title(format!(" {} ({}) ", panel.title(), panel.items().len()));

    if panel.items().is_empty() {
        let empty = Paragraph::new("No projects")
            .style(Style::default().fg(colors::DIM))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = panel.items().iter().map(|i| format_item(i, accent)).collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(colors::KEYBIND);
    let line = Line::from(vec![
        Span::styled(" Tab", key),
        Span::raw(" next field  "),
        Span::styled("Shift-Tab", key),
        Span::raw(" previous  "),
        Span::styled("Enter", key),
        Span::raw(" add project  "),
        Span::styled("Esc", key),
        Span::raw(" quit"),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_alert(message: &str, frame: &mut Frame, area: Rect) {
    let popup = centered_rect(50, 5, area);
    let text = vec![
        Line::from(Span::styled(message.to_string(), Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled("Enter / Esc to dismiss", Style::default().fg(colors::DIM))),
    ];
    let alert = Paragraph::new(text).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::ALERT))
            .title(" Alert "),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(alert, popup);
}

/// A rect `percent_x` wide and `height` rows tall, centered in `area`.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
