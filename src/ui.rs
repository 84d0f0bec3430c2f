//! UI rendering helpers for the terminal user interface.
//!
//! This module draws the clock face, the preset bar, the track grid and the
//! settings panel using `ratatui`. Geometry comes from `crate::clock`; canvas
//! space is measured in braille dots so circles come out round.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap,
        canvas::{Canvas, Circle, Context, Line as HandLine},
    },
};
use std::time::Duration;

use crate::app::{App, Focus, Snapshot};
use crate::audio::PlaybackState;
use crate::clock::{self, Point};
use crate::config::UiSettings;

const CONTROLS: [(&str, &str); 7] = [
    ("tab", "focus"),
    ("h/j/k/l", "move"),
    ("enter", "press"),
    ("s", "settings"),
    ("x", "stop timer"),
    ("m", "stop music"),
    ("q", "quit"),
];

const TRACK_BUTTON_WIDTH: u16 = 8;
const TRACK_ROW_HEIGHT: u16 = 4;

fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Format a `Duration` as `MM:SS`, rounding partial seconds up.
fn format_mmss(d: Duration) -> String {
    let mut secs = d.as_secs();
    if d.subsec_nanos() > 0 {
        secs += 1;
    }
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Canvas-space bounds for a terminal area, in braille dots.
fn dot_bounds(area: Rect) -> clock::Rect {
    clock::Rect::new(0.0, 0.0, f64::from(area.width) * 2.0, f64::from(area.height) * 4.0)
}

/// Canvas y grows upwards; clock geometry grows downwards.
fn flip(p: Point, bounds: clock::Rect) -> (f64, f64) {
    (p.x, bounds.height - p.y)
}

/// Circle plus, when there is progress, a hand from the lifted pivot.
fn draw_dial(
    ctx: &mut Context,
    bounds: clock::Rect,
    progress: Option<f64>,
    radius_scale: f64,
    inset: f64,
    color: Color,
) {
    let pivot = clock::lift(bounds.center(), bounds, inset);
    let (cx, cy) = flip(pivot, bounds);
    ctx.draw(&Circle {
        x: cx,
        y: cy,
        radius: bounds.radius(radius_scale),
        color: Color::DarkGray,
    });

    if let Some(progress) = progress {
        let tip = clock::lift(clock::angle_endpoint(bounds, progress, radius_scale), bounds, inset);
        let (tx, ty) = flip(tip, bounds);
        ctx.draw(&HandLine::new(cx, cy, tx, ty, color));
    }
}

fn draw_clock(frame: &mut Frame, area: Rect, snap: &Snapshot, ui: &UiSettings) {
    let title = match (snap.remaining, snap.expired) {
        (Some(rem), _) => format!(" {} ", format_mmss(rem)),
        (None, true) => " done ".to_string(),
        (None, false) => String::new(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    let bounds = dot_bounds(inner);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, bounds.width])
        .y_bounds([0.0, bounds.height])
        .paint(|ctx| {
            draw_dial(
                ctx,
                bounds,
                snap.countdown,
                ui.radius_scale,
                ui.pivot_inset,
                Color::White,
            );
        });
    frame.render_widget(canvas, area);
}

fn highlight(selected: bool) -> Style {
    if selected {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    }
}

fn draw_presets(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Presets;
    let mut spans: Vec<Span> = Vec::new();
    for (i, minutes) in app.presets.presets().iter().enumerate() {
        spans.push(Span::styled(
            format!(" {minutes} "),
            highlight(focused && app.preset_cursor == i),
        ));
        spans.push(Span::raw("  "));
    }
    let stop_selected = focused && app.preset_cursor == app.presets.presets().len();
    spans.push(Span::styled(" Stop ", highlight(stop_selected)));

    let bar = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" presets "));
    frame.render_widget(bar, area);
}

fn draw_track_button(
    frame: &mut Frame,
    area: Rect,
    glyph: &str,
    selected: bool,
    progress: Option<Option<f64>>,
    ui: &UiSettings,
) {
    let border = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border);
    let inner = block.inner(area);
    let bounds = dot_bounds(inner);
    let glyph = glyph.to_string();

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, bounds.width])
        .y_bounds([0.0, bounds.height])
        .paint(move |ctx| {
            if let Some(progress) = progress {
                draw_dial(
                    ctx,
                    bounds,
                    progress.or(Some(0.0)),
                    ui.track_radius_scale,
                    0.0,
                    Color::Green,
                );
                ctx.layer();
            }
            let c = bounds.center();
            ctx.print(c.x, bounds.height - c.y, glyph.clone());
        });
    frame.render_widget(canvas, area);
}

fn draw_tracks(frame: &mut Frame, area: Rect, app: &App, snap: &Snapshot, ui: &UiSettings) {
    let block = Block::default().borders(Borders::ALL).title(" music ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.catalog.is_empty() {
        let dir = app
            .music_dir
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_default();
        let hint = Paragraph::new(format!("No tracks. Add files to {dir}"))
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true });
        frame.render_widget(hint, inner);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            app.catalog
                .rows
                .iter()
                .map(|_| Constraint::Length(TRACK_ROW_HEIGHT))
                .collect::<Vec<_>>(),
        )
        .split(inner);

    let focused = app.focus == Focus::Tracks;
    for (r, (row, row_area)) in app.catalog.rows.iter().zip(rows.iter()).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                std::iter::once(Constraint::Length(12))
                    .chain(row.tracks.iter().map(|_| Constraint::Length(TRACK_BUTTON_WIDTH)))
                    .collect::<Vec<_>>(),
            )
            .split(*row_area);

        let label = row.name.as_deref().unwrap_or("");
        frame.render_widget(
            Paragraph::new(label).style(Style::default().fg(Color::DarkGray)),
            cells[0],
        );

        for (c, track) in row.tracks.iter().enumerate() {
            let Some(cell) = cells.get(c + 1) else {
                break;
            };
            let progress =
                (snap.playing == PlaybackState::Playing(track.id)).then_some(snap.track_progress);
            draw_track_button(
                frame,
                *cell,
                &track.glyph,
                focused && app.track_cursor == (r, c),
                progress,
                ui,
            );
        }
    }
}

fn draw_settings(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .choices()
        .iter()
        .map(|&minutes| {
            let style = if app.presets.contains(minutes) {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(format!("{minutes:>3}")).style(style)
        })
        .collect();

    let mut list = List::new(items).block(Block::default().borders(Borders::ALL).title(" presets "));
    if app.focus == Focus::Settings {
        list = list
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol(">");
    }
    let mut state = ListState::default();
    state.select(Some(app.settings_cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the entire UI into the provided `frame` from `app` and this tick's `snap`.
pub fn draw(frame: &mut Frame, app: &App, snap: &Snapshot, ui: &UiSettings) {
    let track_height = if app.catalog.is_empty() {
        3
    } else {
        app.catalog.rows.len() as u16 * TRACK_ROW_HEIGHT + 2
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(track_height),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui.header_text.as_str()).alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    let body = if app.settings_open {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(9)])
            .split(chunks[1])
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10)])
            .split(chunks[1])
    };

    draw_clock(frame, body[0], snap, ui);
    if app.settings_open {
        draw_settings(frame, body[1], app);
    }
    draw_presets(frame, chunks[2], app);
    draw_tracks(frame, chunks[3], app, snap, ui);

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mmss_rounds_partial_seconds_up() {
        assert_eq!(format_mmss(Duration::from_secs(0)), "00:00");
        assert_eq!(format_mmss(Duration::from_millis(59_001)), "01:00");
        assert_eq!(format_mmss(Duration::from_secs(5 * 60 + 7)), "05:07");
    }

    #[test]
    fn dot_bounds_and_flip_map_terminal_cells() {
        let b = dot_bounds(Rect::new(3, 4, 10, 5));
        assert_eq!(b.width, 20.0);
        assert_eq!(b.height, 20.0);
        // Twelve o'clock in screen space is the top of the canvas.
        let tip = clock::angle_endpoint(b, 0.0, 1.0);
        assert_eq!(flip(tip, b), (10.0, 20.0));
    }

    #[test]
    fn controls_text_lists_every_key() {
        let text = controls_text();
        for (k, _) in CONTROLS {
            assert!(text.contains(&format!("[{k}]")));
        }
    }
}
