use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use taskboard_core::{CalendarDay, CalendarWeek, Priority, Task, Zone};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::app::{App, InputMode};

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header / add form
            Constraint::Min(1),    // Board
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let calendar = app.calendar();
    draw_header(f, app, &calendar, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(28), Constraint::Percentage(72)])
        .split(main_chunks[1]);

    draw_zone(f, app, 0, None, content_chunks[0]);

    let day_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 7); 7])
        .split(content_chunks[1]);
    for (i, (day, area)) in calendar.days.iter().zip(day_chunks.iter()).enumerate() {
        draw_zone(f, app, i + 1, Some(day), *area);
    }

    let footer = Paragraph::new(footer_text(app))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[2]);
}

fn draw_header(f: &mut Frame, app: &App, calendar: &CalendarWeek, area: Rect) {
    let block = Block::default().borders(Borders::ALL).border_type(BorderType::Rounded);

    if app.input_mode == InputMode::Adding {
        let input = Paragraph::new(app.input.as_str())
            .block(block.title(" What would you like to accomplish? "));
        f.render_widget(input, area);
        let before: String = app.input.chars().take(app.cursor_position).collect();
        f.set_cursor_position((area.x + 1 + before.width() as u16, area.y + 1));
        return;
    }

    let (first, last) = (calendar.days[0].date, calendar.days[6].date);
    let mut title = format!(
        "TASKBOARD  {} - {}",
        first.format("%b %-d"),
        last.format("%b %-d, %Y")
    );
    if calendar.outside_week > 0 {
        title.push_str(&format!("  ({} scheduled in other weeks)", calendar.outside_week));
    }
    let text = match &app.status {
        Some(status) => format!("{}  |  {}", title, status),
        None => title,
    };
    let header = Paragraph::new(text)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(header, area);
}

/// `day` is the calendar column behind the zone, `None` for the unscheduled list.
fn draw_zone(f: &mut Frame, app: &App, index: usize, day: Option<&CalendarDay>, area: Rect) {
    let zone = app.zone(index);
    let tasks = app.zone_tasks(index);
    let is_today = day.is_some_and(|d| d.is_today);
    let drag_target = app.drag.filter(|d| d.target_zone == index);
    let title = zone_title(day, tasks.len());

    let border_style = if drag_target.is_some() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else if app.focus == index {
        Style::default().fg(Color::Yellow)
    } else if is_today {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();
    for (i, task) in tasks.iter().enumerate() {
        if drag_target.map(|d| d.target_index) == Some(i) {
            lines.push(drop_marker(inner_width));
        }
        let dragged = app.drag.map(|d| d.task_id) == Some(task.id());
        let selected = app.input_mode != InputMode::Dragging && app.focus == index && app.selected == i;
        lines.push(task_line(task, inner_width, selected, dragged));
    }
    if drag_target.map(|d| d.target_index) == Some(tasks.len()) {
        lines.push(drop_marker(inner_width));
    }
    if lines.is_empty() {
        let hint = match zone {
            Zone::Unscheduled => "No tasks yet. Press a to add one!",
            Zone::CalendarDay(_) => "Drag tasks here",
        };
        lines.push(Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))));
    }

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn zone_title(day: Option<&CalendarDay>, task_count: usize) -> String {
    match day {
        Some(day) => format!(" {} {} ", day.day_of_week(), day.day_month()),
        None => format!(" Tasks ({}) ", task_count),
    }
}

fn task_line(task: &Task, width: usize, selected: bool, dragged: bool) -> Line<'static> {
    let check = if task.completed() { "✔ " } else { "☐ " };
    let priority_style = match task.priority() {
        Priority::High => Style::default().fg(Color::Red),
        Priority::Medium => Style::default().fg(Color::Yellow),
        Priority::Low => Style::default().fg(Color::Green),
    };
    let marker = match task.priority() {
        Priority::High => "H ",
        Priority::Medium => "M ",
        Priority::Low => "L ",
    };

    let mut text_style = Style::default();
    if task.completed() {
        text_style = text_style.fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT);
    }
    if selected {
        text_style = text_style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
    }
    if dragged {
        text_style = text_style.fg(Color::Red).add_modifier(Modifier::ITALIC);
    }

    let text = truncate(task.text(), width.saturating_sub(4));
    Line::from(vec![
        Span::raw(check),
        Span::styled(marker, priority_style),
        Span::styled(text, text_style),
    ])
}

fn drop_marker(width: usize) -> Line<'static> {
    Line::from(Span::styled(
        "─".repeat(width.max(1)),
        Style::default().fg(Color::Green),
    ))
}

fn footer_text(app: &App) -> &'static str {
    match app.input_mode {
        InputMode::Normal => {
            "a: Add | space: Done | d: Delete | g: Grab | h/l j/k: Move | [ ] t: Week | c: Completed | q: Quit"
        }
        InputMode::Adding => "Enter: Add | Esc: Cancel",
        InputMode::Dragging => "h/l: Day | j/k: Position | Enter: Drop | Esc: Cancel",
    }
}

/// Cuts `text` to at most `width` terminal columns, marking the cut with "…".
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
