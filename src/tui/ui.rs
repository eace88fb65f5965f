use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table},
    Frame,
};

use super::app::{App, DisplayItem};
use crate::commands::time_left;

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress
            Constraint::Min(0),    // Table
            Constraint::Length(3), // Help
        ].as_ref())
        .split(f.area());

    let timeline = &app.saved.timeline;
    let progress = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(format!(
            "{} - {} on {}",
            app.saved.name, app.saved.event_type, app.saved.event_date
        )))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(timeline.progress().clamp(0.0, 1.0))
        .label(format!(
            "{}/{} done | est. {}",
            timeline.completed_count(),
            timeline.tasks.len(),
            app.config.format_cost(timeline.total_estimated_cost())
        ));
    f.render_widget(progress, chunks[0]);

    let today = Local::now().date_naive();
    let rows: Vec<Row> = app
        .display_items
        .iter()
        .map(|item| match item {
            DisplayItem::MonthHeader(month, count) => Row::new(vec![
                Cell::from(""),
                Cell::from(format!("{} ({})", month, count)),
            ])
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            DisplayItem::Task(t) => {
                let style = if t.completed {
                    Style::default().fg(Color::DarkGray)
                } else if t.deadline < today {
                    Style::default().fg(Color::Red)
                } else if (t.deadline - today).num_days() <= 14 {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::Green)
                };
                Row::new(vec![
                    Cell::from(t.id.clone()),
                    Cell::from(t.description.clone()),
                    Cell::from(t.deadline.to_string()),
                    Cell::from(time_left(t.deadline, today)),
                    Cell::from(
                        t.suggested_vendor_category
                            .map(|v| v.display_name())
                            .unwrap_or("-"),
                    ),
                    Cell::from(app.config.format_cost(t.estimated_cost)),
                    Cell::from(if t.completed { "Done" } else { "Pending" }),
                ])
                .style(style)
            }
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Min(30),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(14),
        Constraint::Length(12),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(
            Row::new(vec!["ID", "Task", "Deadline", "Time Left", "Vendor", "Est. Cost", "Status"])
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .bottom_margin(1),
        )
        .block(Block::default().borders(Borders::ALL).title("Eventplan - Checklist"))
        .row_highlight_style(Style::default().add_modifier(Modifier::BOLD).bg(Color::DarkGray))
        .highlight_symbol(">> ");

    f.render_stateful_widget(table, chunks[1], &mut app.state);

    let keys = "q: Quit | Space: Toggle Done | c: Show/Hide Done | g: Group by Month";
    let help_text = match &app.status {
        Some(msg) => format!("{} | {}", keys, msg),
        None => keys.to_string(),
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, chunks[2]);
}
