//! Turns a [`PageView`] into styled terminal lines.

use artworks_lib::view::{PageView, ViewStatus};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Visual style of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Normal,
    Title,
    Header,
    Cursor,
    Muted,
    Error,
}

/// One rendered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub style: LineStyle,
}

impl Line {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

const TITLE: &str = "Art Institute of Chicago - Artworks";
const HELP: &str = "↑/↓ move  space toggle  a page  ←/→ page  g/G first/last  r retry  q quit";

/// Relative widths of the data columns.
const COLUMN_WEIGHTS: &[usize] = &[30, 12, 24, 16, 9, 9];

/// Width of the checkbox column, including its trailing space.
const CHECKBOX_WIDTH: usize = 4;

/// Lines above the table body: title, selected count, blank, header.
const TOP_LINES: usize = 4;

/// Lines below the table body: blank, status, report, help.
const BOTTOM_LINES: usize = 4;

/// Renders `view` for a terminal of `width` x `height` cells.
///
/// `cursor` is the highlighted row, if any. Rows that do not fit are scrolled
/// so the cursor stays visible; the surrounding chrome is always kept.
pub fn render(view: &PageView<u64>, cursor: Option<usize>, width: u16, height: u16) -> Vec<Line> {
    let width = width as usize;
    let widths = column_widths(view.columns.len(), width.saturating_sub(CHECKBOX_WIDTH));

    let mut lines = vec![
        Line::new(fit(TITLE, width), LineStyle::Title),
        Line::new(fit(&view.selected_label(), width), LineStyle::Normal),
        Line::new("", LineStyle::Normal),
    ];

    let header_cells: Vec<String> = view.columns.iter().map(|c| c.to_string()).collect();
    lines.push(Line::new(
        row_text(view.header_checked, &header_cells, &widths, width),
        LineStyle::Header,
    ));

    if view.is_empty() {
        lines.push(Line::new(fit("No records found.", width), LineStyle::Muted));
    }
    let body = body_height(height as usize);
    let start = scroll_offset(cursor, body);
    for (i, row) in view.rows.iter().enumerate().skip(start).take(body) {
        let style = if cursor == Some(i) {
            LineStyle::Cursor
        } else {
            LineStyle::Normal
        };
        lines.push(Line::new(
            row_text(row.selected, &row.cells, &widths, width),
            style,
        ));
    }

    lines.push(Line::new("", LineStyle::Normal));
    lines.push(status_line(&view.status, width));
    lines.push(Line::new(
        fit(&format!("{}  {}", view.range_report, view.page_report), width),
        LineStyle::Normal,
    ));
    lines.push(Line::new(fit(HELP, width), LineStyle::Muted));
    lines
}

/// Number of table rows that fit between the fixed top and bottom lines.
fn body_height(height: usize) -> usize {
    height.saturating_sub(TOP_LINES + BOTTOM_LINES).max(1)
}

/// First row to show so that `cursor` is inside a window of `body` rows.
fn scroll_offset(cursor: Option<usize>, body: usize) -> usize {
    match cursor {
        Some(cursor) if cursor >= body => cursor + 1 - body,
        _ => 0,
    }
}

fn status_line(status: &ViewStatus, width: usize) -> Line {
    match status {
        ViewStatus::Idle => Line::new("", LineStyle::Normal),
        ViewStatus::Loading { page } => {
            Line::new(fit(&format!("Loading page {page}..."), width), LineStyle::Muted)
        }
        ViewStatus::Failed {
            page,
            message,
            retryable,
        } => {
            let hint = if *retryable { " (press r to retry)" } else { "" };
            Line::new(
                fit(&format!("Could not load page {page}: {message}{hint}"), width),
                LineStyle::Error,
            )
        }
    }
}

fn row_text(checked: bool, cells: &[String], widths: &[usize], width: usize) -> String {
    let mut text = String::from(if checked { "[x] " } else { "[ ] " });
    for (cell, &w) in cells.iter().zip(widths) {
        if w == 0 {
            continue;
        }
        let cell = fit(&flatten(cell), w - 1);
        let pad = w - cell.width();
        text.push_str(&cell);
        text.extend(std::iter::repeat_n(' ', pad));
    }
    fit(text.trim_end(), width)
}

/// Splits `available` columns between `count` data columns by weight.
fn column_widths(count: usize, available: usize) -> Vec<usize> {
    let weights: Vec<usize> = (0..count)
        .map(|i| COLUMN_WEIGHTS.get(i).copied().unwrap_or(10))
        .collect();
    let total: usize = weights.iter().sum::<usize>().max(1);
    weights.iter().map(|w| available * w / total).collect()
}

/// Collapses newlines and runs of whitespace into single spaces.
fn flatten(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncates `text` to at most `width` display columns, marking cuts with `…`.
fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
