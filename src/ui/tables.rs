use super::formatters::*;
use crate::app::App;
use crate::render::{SourceKind, TableBody, TableRow};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

struct ColumnDef {
    name: &'static str,
    width: u16,
    priority: u8,
}

const RESULT_COLUMNS: &[ColumnDef] = &[
    ColumnDef {
        name: "순위",
        width: 5,
        priority: 1,
    },
    ColumnDef {
        name: "제목",
        width: 40,
        priority: 1,
    },
    ColumnDef {
        name: "점수",
        width: 7,
        priority: 1,
    },
    ColumnDef {
        name: "키워드",
        width: 20,
        priority: 3,
    },
    ColumnDef {
        name: "출처",
        width: 12,
        priority: 2,
    },
    ColumnDef {
        name: "링크",
        width: 30,
        priority: 4,
    },
    ColumnDef {
        name: "업로드일",
        width: 12,
        priority: 2,
    },
];

const TITLE_COLUMN: usize = 1;

fn visible_columns(columns: &[ColumnDef], available_width: u16) -> Vec<usize> {
    let max_priority = columns.iter().map(|c| c.priority).max().unwrap_or(1);
    let mut visible: Vec<usize> = Vec::new();
    for priority_cutoff in 1..=max_priority {
        let candidate: Vec<usize> = columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.priority <= priority_cutoff)
            .map(|(i, _)| i)
            .collect();
        let total_width: u16 = candidate.iter().map(|&i| columns[i].width).sum();
        if total_width <= available_width {
            visible = candidate;
        } else {
            break;
        }
    }
    if visible.is_empty() {
        visible = columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.priority == 1)
            .map(|(i, _)| i)
            .collect();
    }
    visible
}

fn column_constraints(
    columns: &[ColumnDef],
    vis: &[usize],
    stretch_col: usize,
    available_width: u16,
) -> Vec<Constraint> {
    let total_vis_width: u16 = vis.iter().map(|&i| columns[i].width).sum();
    let extra = available_width.saturating_sub(total_vis_width);
    vis.iter()
        .map(|&i| {
            if i == stretch_col && extra > 0 {
                Constraint::Min(columns[i].width)
            } else {
                Constraint::Length(columns[i].width)
            }
        })
        .collect()
}

fn header_row(vis: &[usize]) -> Row<'static> {
    let cells: Vec<Cell> = vis
        .iter()
        .map(|&i| {
            Cell::from(RESULT_COLUMNS[i].name)
                .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        })
        .collect();
    Row::new(cells).height(1)
}

fn source_badge(row: &TableRow) -> Cell<'static> {
    let color = match row.source_kind {
        SourceKind::Video => Color::Red,
        SourceKind::News => Color::Blue,
    };
    Cell::from(Span::styled(
        truncate_str(&row.source, 10),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

fn result_cell(col_idx: usize, row: &TableRow, text_style: Style, bold_text: Style) -> Cell<'static> {
    match col_idx {
        0 => Cell::from(row.rank.to_string()).style(bold_text),
        1 => Cell::from(row.title.clone()).style(bold_text),
        2 => Cell::from(row.score.clone()).style(text_style.fg(Color::Green)),
        3 => Cell::from(truncate_str(&row.keywords, 18)).style(text_style),
        4 => source_badge(row),
        5 => Cell::from(row.link.as_deref().map(|l| truncate_str(l, 28)).unwrap_or_default())
            .style(text_style.fg(Color::Cyan)),
        6 => Cell::from(row.upload_date.clone()).style(text_style),
        _ => Cell::from(""),
    }
}

fn result_row(i: usize, row: &TableRow, vis: &[usize], selected_index: usize) -> Row<'static> {
    let is_selected = i == selected_index;
    let text_style = if is_selected {
        Style::default().fg(Color::White)
    } else {
        Style::default()
    };
    let bold_text = if is_selected {
        text_style.add_modifier(Modifier::BOLD)
    } else {
        text_style
    };
    let cells: Vec<Cell> = vis
        .iter()
        .map(|&col| result_cell(col, row, text_style, bold_text))
        .collect();
    let row_style = if is_selected {
        Style::default().bg(Color::Rgb(40, 80, 120))
    } else {
        Style::default()
    };
    Row::new(cells).style(row_style)
}

pub fn draw_results(frame: &mut Frame, area: Rect, app: &mut App) {
    let title = format!(" {} ({}건) ", app.selection, app.results.len());
    let block = Block::default().borders(Borders::ALL).title(title);

    let rows = match &app.table {
        TableBody::Placeholder(message) => {
            let placeholder = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(*message, Style::default().fg(Color::DarkGray))),
            ])
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(placeholder, area);
            return;
        }
        TableBody::Rows(rows) => rows,
    };

    let available_width = area.width.saturating_sub(2);
    let vis = visible_columns(RESULT_COLUMNS, available_width);
    let table_rows: Vec<Row> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| result_row(i, row, &vis, app.selected_index))
        .collect();

    let constraints = column_constraints(RESULT_COLUMNS, &vis, TITLE_COLUMN, available_width);
    let table = Table::new(table_rows, constraints)
        .header(header_row(&vis))
        .block(block);

    app.table_state.select(Some(app.selected_index));
    frame.render_stateful_widget(table, area, &mut app.table_state);
}
