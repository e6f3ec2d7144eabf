pub mod formatters;
mod landing;
mod modals;
mod tables;

use crate::app::{App, InputMode, Screen};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::time::Instant;

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
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

pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);

    match app.screen {
        Screen::Landing => {
            let fade = app.transition.progress(Instant::now());
            landing::draw_landing(frame, chunks[1], app, fade);
        }
        Screen::Results => tables::draw_results(frame, chunks[1], app),
    }

    draw_footer(frame, chunks[2], app);

    match app.input_mode {
        InputMode::Help => modals::draw_help(frame),
        InputMode::RowDetail => modals::draw_row_detail(frame, app),
        InputMode::ExportMenu => modals::draw_export_menu(frame, app),
        InputMode::Normal => {}
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let current_time = chrono::Local::now().format("%H:%M:%S").to_string();
    let (view_indicator, view_color) = match app.screen {
        Screen::Landing => ("주제 · 기간 선택".to_string(), Color::Yellow),
        Screen::Results => (app.selection.to_string(), Color::Magenta),
    };

    let searched_span = match &app.last_search {
        Some(at) => Span::styled(
            format!(" (searched {})", at),
            Style::default().fg(Color::Cyan),
        ),
        None => Span::raw(""),
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Keyword Board ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            view_indicator,
            Style::default().fg(view_color).add_modifier(Modifier::BOLD),
        ),
        searched_span,
        Span::styled(
            format!(" {} items ", app.dataset_len()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(format!("[{}]", current_time), Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Normal => {
            let help = match app.screen {
                Screen::Landing => " [Tab] Group [←→] Select [1-9] Pick [Enter] Search [?] Help [q] Quit ",
                Screen::Results => " [↑↓] Nav [Enter] Detail [e] Export [Esc] Back [?] Help [q] Quit ",
            };
            if let Some(msg) = &app.status_message {
                Line::from(vec![
                    Span::styled(msg, Style::default().fg(Color::Yellow)),
                    Span::raw(" | "),
                    Span::styled(help, Style::default().fg(Color::DarkGray)),
                ])
            } else {
                Line::from(Span::styled(help, Style::default().fg(Color::DarkGray)))
            }
        }
        InputMode::Help => Line::from(Span::styled(
            " [?/Enter/Esc] Close help ",
            Style::default().fg(Color::DarkGray),
        )),
        InputMode::RowDetail => Line::from(Span::styled(
            " [Enter/Esc] Close detail view ",
            Style::default().fg(Color::DarkGray),
        )),
        InputMode::ExportMenu => Line::from(Span::styled(
            " [↑↓/jk] Navigate | [←→/hl] Toggle | [Enter] Confirm | [Esc] Cancel ",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let footer = Paragraph::new(content).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
