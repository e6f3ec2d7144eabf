use super::centered_rect;
use super::formatters::or_dash;
use crate::app::{App, ExportFormat};
use crate::render::SourceKind;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

fn export_menu_content(app: &App) -> Vec<Line<'static>> {
    let sel = app.export_menu_selection;
    let format_str = match app.export_format {
        ExportFormat::Html => "HTML",
        ExportFormat::Json => "JSON",
    };
    let row_style = |selected: bool| -> Style {
        if selected {
            Style::default().bg(Color::Rgb(40, 80, 40)).fg(Color::White)
        } else {
            Style::default()
        }
    };
    vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Format:  ", row_style(sel == 0)),
            Span::styled(
                format!("< {} >", format_str),
                row_style(sel == 0)
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("              ", row_style(sel == 0)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {} rows", app.results.len()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![Span::styled(
            "        [ Export ]        ",
            if sel == 1 {
                Style::default()
                    .bg(Color::Green)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Green)
            },
        )]),
        Line::from(""),
        Line::from(Span::styled(
            "  [←→] Toggle  [Enter] Confirm",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

pub fn draw_export_menu(frame: &mut Frame, app: &App) {
    let area = centered_rect(40, 30, frame.area());
    frame.render_widget(Clear, area);

    let outer_block = Block::default()
        .title(" Export Results ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .style(Style::default().bg(Color::Black));

    let inner_area = outer_block.inner(area);
    frame.render_widget(outer_block, area);

    let menu = Paragraph::new(export_menu_content(app)).alignment(Alignment::Left);
    frame.render_widget(menu, inner_area);
}

fn detail_field(label: &str, value: &str, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:10}", label), Style::default().fg(Color::DarkGray)),
        Span::styled(or_dash(value), Style::default().fg(color)),
    ])
}

pub fn draw_row_detail(frame: &mut Frame, app: &App) {
    let Some(row) = app.selected_row() else {
        return;
    };
    let area = centered_rect(70, 60, frame.area());
    frame.render_widget(Clear, area);

    let source_color = match row.source_kind {
        SourceKind::Video => Color::Red,
        SourceKind::News => Color::Blue,
    };

    let content = vec![
        Line::from(Span::styled(
            row.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        detail_field("순위", &row.rank.to_string(), Color::White),
        detail_field("추천점수", &row.score, Color::Green),
        detail_field("키워드", &row.keywords, Color::Yellow),
        detail_field("출처", &row.source, source_color),
        detail_field("업로드일", &row.upload_date, Color::White),
        detail_field("링크", row.link.as_deref().unwrap_or(""), Color::Cyan),
        Line::from(""),
        Line::from(Span::styled(
            "  [Enter/Esc] Close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(format!(" #{} ", row.rank))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(
        Paragraph::new(content).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn help_section(title: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("─── {} ", title),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            "───────────────────────────",
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn help_binding(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:12}", key), Style::default().fg(Color::Cyan)),
        Span::raw(desc.to_string()),
    ])
}

fn help_content() -> Vec<Line<'static>> {
    vec![
        help_section("General"),
        help_binding("q", "Quit"),
        help_binding("?", "Show this help"),
        Line::from(""),
        help_section("Selection"),
        help_binding("Tab / ↑↓", "Switch between topic and period"),
        help_binding("h / ←", "Previous button"),
        help_binding("l / →", "Next button"),
        help_binding("1-9", "Pick a button in the focused group"),
        help_binding("Enter / /", "Search"),
        Line::from(""),
        help_section("Results"),
        help_binding("↓ / j", "Move selection down"),
        help_binding("↑ / k", "Move selection up"),
        help_binding("Enter", "Row detail"),
        help_binding("e", "Export results (HTML/JSON)"),
        help_binding("Esc / b", "Back to selection"),
        Line::from(""),
        Line::from(Span::styled(
            "  [?/Enter/Esc] Close",
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

pub fn draw_help(frame: &mut Frame) {
    let area = centered_rect(50, 70, frame.area());
    frame.render_widget(Clear, area);

    let outer_block = Block::default()
        .title(" Help - Keyboard Shortcuts ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    let inner_area = outer_block.inner(area);
    frame.render_widget(outer_block, area);

    frame.render_widget(
        Paragraph::new(help_content()).alignment(Alignment::Left),
        inner_area,
    );
}
