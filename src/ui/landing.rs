use super::centered_rect;
use crate::app::{App, ButtonGroup, FocusGroup};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Colors for a fading panel: full strength at 0.0, dimmed past halfway.
fn fade_color(base: Color, fade: f64) -> Color {
    if fade >= 0.5 {
        Color::DarkGray
    } else {
        base
    }
}

fn group_line(group: &ButtonGroup, focused: bool, fade: f64) -> Line<'static> {
    let accent = fade_color(if focused { Color::Cyan } else { Color::Blue }, fade);
    let mut spans = vec![Span::raw("  ")];
    for (i, button) in group.buttons().iter().enumerate() {
        let style = if group.is_active(i) {
            Style::default()
                .bg(accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(fade_color(Color::Gray, fade))
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, button.label), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn heading(text: &'static str, focused: bool, fade: f64) -> Line<'static> {
    let marker = if focused { "▶ " } else { "  " };
    Line::from(Span::styled(
        format!("{}{}", marker, text),
        Style::default()
            .fg(fade_color(Color::Yellow, fade))
            .add_modifier(Modifier::BOLD),
    ))
}

/// Selection overlay: topic group, period group and the search trigger.
pub fn draw_landing(frame: &mut Frame, area: Rect, app: &App, fade: f64) {
    let panel = centered_rect(70, 70, area);
    frame.render_widget(Clear, panel);

    let border = fade_color(Color::Cyan, fade);
    let block = Block::default()
        .title(" 키워드 검색 ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let topic_focus = app.focus == FocusGroup::Topic;
    let period_focus = app.focus == FocusGroup::Period;
    let search_label = if app.transition.is_active() {
        "   [ 검색 중... ]   "
    } else {
        "   [ Enter 검색 ]   "
    };

    let content = vec![
        Line::from(""),
        heading("주제", topic_focus, fade),
        group_line(&app.topics, topic_focus, fade),
        Line::from(""),
        heading("기간", period_focus, fade),
        group_line(&app.periods, period_focus, fade),
        Line::from(""),
        Line::from(Span::styled(
            search_label,
            Style::default()
                .bg(fade_color(Color::Green, fade))
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    ];

    frame.render_widget(Paragraph::new(content).block(block), panel);
}
