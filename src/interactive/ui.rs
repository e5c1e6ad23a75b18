use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::canvas::{Canvas, Circle, Line as CanvasLine},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::app::{AppMode, RoomApp};
use crate::constants::{MSG_EMPTY_WHEEL, WHEEL_COLORS, WHEEL_TEXT_RADIUS_RATIO};
use crate::engine::palette::hex_to_rgb;
use crate::engine::sector_colors;
use crate::formatting::display_name;

/// Radius of the wheel in canvas units; the pointer sits just outside it.
const WHEEL_RADIUS: f64 = 1.0;
const CANVAS_MARGIN: f64 = 1.3;
/// Angular step between the radial strokes that fill a sector.
const FILL_STEP_DEGREES: f64 = 1.5;

/// Canvas point for an angle measured clockwise from the top.
fn polar(angle_degrees: f64, radius: f64) -> (f64, f64) {
    let radians = angle_degrees.to_radians();
    (radius * radians.sin(), radius * radians.cos())
}

fn palette_color(index: usize) -> Color {
    match hex_to_rgb(WHEEL_COLORS[index % WHEEL_COLORS.len()]) {
        Some((r, g, b)) => Color::Rgb(r, g, b),
        None => Color::Gray,
    }
}

pub fn draw(frame: &mut Frame, app: &RoomApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(frame.size());

    draw_header(frame, chunks[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    draw_wheel(frame, body[0], app, Instant::now());
    draw_members(frame, body[1], app);
    draw_footer(frame, chunks[2], app);

    match app.mode {
        AppMode::AddMember => draw_input_overlay(frame, frame.size(), " Add member ", &app.input),
        AppMode::Rename => draw_input_overlay(frame, frame.size(), " Rename team ", &app.input),
        AppMode::ConfirmDelete => draw_confirm_overlay(frame, frame.size(), app),
        AppMode::Normal => {}
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &RoomApp) {
    let pool_size = app.wheel_members().len();
    let header = Line::from(vec![
        Span::styled(
            app.room.team.name.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  ({})", app.room.team.slug), Style::default().fg(Color::DarkGray)),
        Span::raw(format!("  {} on the wheel", pool_size)),
    ]);

    let paragraph = Paragraph::new(header).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_wheel(frame: &mut Frame, area: Rect, app: &RoomApp, now: Instant) {
    let block = Block::default().borders(Borders::ALL).title(" Wheel ");
    let members = app.wheel_members();

    if members.is_empty() {
        let empty = Paragraph::new(MSG_EMPTY_WHEEL)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let count = members.len();
    let slice = 360.0 / count as f64;
    let rotation = app.wheel.angle_at(now);
    let pointer = app.settings.pointer_angle;
    let colors: Vec<Color> = sector_colors(count).into_iter().map(palette_color).collect();
    let labels: Vec<String> = members.iter().map(|m| display_name(&m.name)).collect();

    // Terminal cells are about twice as tall as wide; widen one axis so the
    // wheel stays round.
    let cols = area.width.saturating_sub(2).max(1) as f64;
    let rows = area.height.saturating_sub(2).max(1) as f64;
    let (x_extent, y_extent) = if cols > rows * 2.0 {
        (CANVAS_MARGIN * cols / (rows * 2.0), CANVAS_MARGIN)
    } else {
        (CANVAS_MARGIN, CANVAS_MARGIN * rows * 2.0 / cols)
    };
    let units_per_col = 2.0 * x_extent / cols;

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([-x_extent, x_extent])
        .y_bounds([-y_extent, y_extent])
        .paint(|ctx| {
            for (index, color) in colors.iter().enumerate() {
                let start = index as f64 * slice + rotation;
                let mut offset = 0.0;
                while offset < slice {
                    let (x, y) = polar(start + offset, WHEEL_RADIUS);
                    ctx.draw(&CanvasLine { x1: 0.0, y1: 0.0, x2: x, y2: y, color: *color });
                    offset += FILL_STEP_DEGREES;
                }
            }
            ctx.draw(&Circle { x: 0.0, y: 0.0, radius: WHEEL_RADIUS, color: Color::White });
            ctx.layer();

            // Pointer: a small arrowhead outside the rim aimed at the centre.
            let (tip_x, tip_y) = polar(pointer, WHEEL_RADIUS + 0.02);
            let (left_x, left_y) = polar(pointer - 6.0, WHEEL_RADIUS + 0.22);
            let (right_x, right_y) = polar(pointer + 6.0, WHEEL_RADIUS + 0.22);
            for (x1, y1, x2, y2) in [
                (tip_x, tip_y, left_x, left_y),
                (tip_x, tip_y, right_x, right_y),
                (left_x, left_y, right_x, right_y),
            ] {
                ctx.draw(&CanvasLine { x1, y1, x2, y2, color: Color::White });
            }

            for (index, label) in labels.iter().enumerate() {
                let bisector = index as f64 * slice + slice / 2.0 + rotation;
                let (x, y) = polar(bisector, WHEEL_RADIUS * WHEEL_TEXT_RADIUS_RATIO);
                let half_width = label.chars().count() as f64 * units_per_col / 2.0;
                ctx.print(
                    x - half_width,
                    y,
                    Span::styled(
                        label.clone(),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                );
            }
        });

    frame.render_widget(canvas, area);
}

fn draw_members(frame: &mut Frame, area: Rect, app: &RoomApp) {
    let items: Vec<ListItem> = app
        .room
        .members
        .iter()
        .map(|member| {
            let (checkbox, name_style) = if member.vacation {
                ("[x] ", Style::default().fg(Color::DarkGray))
            } else {
                ("[ ] ", Style::default())
            };
            let mut spans = vec![
                Span::styled(checkbox, Style::default().fg(Color::Yellow)),
                Span::styled(member.name.clone(), name_style),
            ];
            if app.room.is_last_winner(member) {
                spans.push(Span::styled(" ★ last time", Style::default().fg(Color::Magenta)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Members (x = vacation) "))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !app.room.members.is_empty() {
        state.select(Some(app.selected_index));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &RoomApp) {
    let help = match app.mode {
        AppMode::Normal => {
            "s: spin | space: vacation | a: add | d: delete | e: rename | r: refresh | j/k: move | q: quit"
        }
        AppMode::AddMember | AppMode::Rename => "Enter: save | Esc: cancel",
        AppMode::ConfirmDelete => "y: delete | n: keep",
    };

    let mut lines = Vec::new();
    if let Some(error) = &app.error_message {
        lines.push(Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red))));
    } else if let Some(status) = &app.status {
        lines.push(Line::from(Span::styled(status.clone(), Style::default().fg(Color::Green))));
    } else {
        lines.push(Line::from(Span::styled(help, Style::default().fg(Color::DarkGray))));
    }

    let title = if app.error_message.is_some() || app.status.is_some() {
        format!(" {} ", help)
    } else {
        String::new()
    };

    let footer = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(title, Style::default().fg(Color::DarkGray))),
    );
    frame.render_widget(footer, area);
}

fn draw_input_overlay(frame: &mut Frame, area: Rect, title: &str, input: &str) {
    let popup_area = centered_rect(60, 3, area);
    frame.render_widget(Clear, popup_area);

    let paragraph = Paragraph::new(format!("{}_", input)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(paragraph, popup_area);
}

fn draw_confirm_overlay(frame: &mut Frame, area: Rect, app: &RoomApp) {
    let popup_area = centered_rect(50, 3, area);
    frame.render_widget(Clear, popup_area);

    let name = app.selected_member().map(|m| m.name.as_str()).unwrap_or("");
    let paragraph = Paragraph::new(format!("Delete {}? (y/n)", name))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Confirm ")
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(paragraph, popup_area);
}

fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let margin = area.height.saturating_sub(height) / 2;
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(margin),
            Constraint::Length(height),
            Constraint::Length(margin),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_measures_clockwise_from_top() {
        let (x, y) = polar(0.0, 1.0);
        assert!(x.abs() < 1e-9 && (y - 1.0).abs() < 1e-9);

        let (x, y) = polar(90.0, 1.0);
        assert!((x - 1.0).abs() < 1e-9 && y.abs() < 1e-9);

        let (x, y) = polar(180.0, 2.0);
        assert!(x.abs() < 1e-9 && (y + 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_palette_colors_are_rgb() {
        for index in 0..WHEEL_COLORS.len() {
            assert!(matches!(palette_color(index), Color::Rgb(_, _, _)));
        }
    }
}
