//! Builds the result table from a filtered item list and presents it as
//! HTML rows. The terminal presenter lives in `ui::tables`.

use crate::data::Item;

pub const NO_DATA_MESSAGE: &str = "해당 조건의 데이터가 없습니다.";
pub const COLUMN_COUNT: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    News,
    Video,
}

impl SourceKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            SourceKind::News => "source-news",
            SourceKind::Video => "source-youtube",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Position in the filtered list, starting at 1.
    pub rank: usize,
    pub title: String,
    pub score: String,
    pub keywords: String,
    pub source: String,
    pub source_kind: SourceKind,
    pub link: Option<String>,
    pub upload_date: String,
}

impl TableRow {
    fn from_item(rank: usize, item: &Item) -> Self {
        Self {
            rank,
            title: item.title.clone(),
            score: item.score_text(),
            keywords: item.keywords_text().to_string(),
            source: item.source.clone(),
            source_kind: if item.is_video() {
                SourceKind::Video
            } else {
                SourceKind::News
            },
            link: item.primary_link().map(str::to_string),
            upload_date: item.upload_date_text().to_string(),
        }
    }
}

/// Replaces whatever was shown before; never empty.
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    Placeholder(&'static str),
    Rows(Vec<TableRow>),
}

impl Default for TableBody {
    fn default() -> Self {
        TableBody::Placeholder(NO_DATA_MESSAGE)
    }
}

impl TableBody {
    pub fn rows(&self) -> &[TableRow] {
        match self {
            TableBody::Placeholder(_) => &[],
            TableBody::Rows(rows) => rows,
        }
    }
}

pub fn build_table<'a, I>(items: I) -> TableBody
where
    I: IntoIterator<Item = &'a Item>,
{
    let rows: Vec<TableRow> = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| TableRow::from_item(i + 1, item))
        .collect();
    if rows.is_empty() {
        TableBody::Placeholder(NO_DATA_MESSAGE)
    } else {
        TableBody::Rows(rows)
    }
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn html_row(row: &TableRow) -> String {
    let title = escape_html(&row.title);
    let keywords = escape_html(&row.keywords);
    let link = row
        .link
        .as_deref()
        .map(|url| {
            let url = escape_html(url);
            format!("<a href=\"{url}\" target=\"_blank\">{url}</a>")
        })
        .unwrap_or_default();
    format!(
        "<tr>\
         <td class=\"rank\">{}</td>\
         <td class=\"title\" title=\"{title}\">{title}</td>\
         <td class=\"score\">{}</td>\
         <td class=\"keywords\" title=\"{keywords}\">{keywords}</td>\
         <td class=\"source\"><span class=\"{}\">{}</span></td>\
         <td class=\"links\">{link}</td>\
         <td class=\"date\">{}</td>\
         </tr>",
        row.rank,
        escape_html(&row.score),
        row.source_kind.css_class(),
        escape_html(&row.source),
        escape_html(&row.upload_date),
    )
}

/// Table body rows, one `<tr>` per line.
pub fn to_html_rows(body: &TableBody) -> String {
    match body {
        TableBody::Placeholder(message) => format!(
            "<tr><td colspan=\"{COLUMN_COUNT}\" style=\"text-align:center; padding: 20px;\">{}</td></tr>\n",
            escape_html(message)
        ),
        TableBody::Rows(rows) => rows.iter().map(|r| html_row(r) + "\n").collect(),
    }
}

/// Standalone page wrapping the rendered rows, used by the HTML export.
pub fn to_html_document(body: &TableBody, heading: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"ko\">\n\
         <head><meta charset=\"utf-8\"><title>{heading}</title></head>\n\
         <body>\n\
         <h1>{heading}</h1>\n\
         <table id=\"keyword-table\">\n\
         <thead><tr><th>순위</th><th>제목</th><th>추천점수</th><th>키워드</th><th>출처</th><th>링크</th><th>업로드일</th></tr></thead>\n\
         <tbody>\n{}</tbody>\n\
         </table>\n\
         </body>\n\
         </html>\n",
        to_html_rows(body),
        heading = escape_html(heading),
    )
}
