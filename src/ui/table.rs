//! Shared column-aligned table painter used by all entity views.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::ui::theme::Theme;

pub struct Column {
    pub title: &'static str,
    pub width: usize,
}

pub type Cell = (String, Style);

/// Pad or clip text to an exact display width.
fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

pub fn render_table(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    columns: &[Column],
    rows: &[Vec<Cell>],
    selected: Option<usize>,
) {
    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 10 {
        return;
    }

    // Header row
    let header_spans: Vec<Span> = columns
        .iter()
        .map(|c| Span::styled(fit(c.title, c.width + 1), Theme::table_header()))
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(header_spans)),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );

    let sep = Paragraph::new(Line::from(Span::styled(
        "─".repeat(inner.width as usize),
        Theme::border(),
    )));
    frame.render_widget(sep, Rect::new(inner.x, inner.y + 1, inner.width, 1));

    if rows.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("  (no entries)", Theme::muted()))),
            Rect::new(inner.x, inner.y + 2, inner.width, 1),
        );
        return;
    }

    // Scroll window keeping the selection visible
    let visible = (inner.height as usize).saturating_sub(2);
    let start = match selected {
        Some(s) if s >= visible => s + 1 - visible,
        _ => 0,
    };

    for (line_no, (i, row)) in rows.iter().enumerate().skip(start).take(visible).enumerate() {
        let is_selected = selected == Some(i);
        let spans: Vec<Span> = columns
            .iter()
            .zip(row.iter())
            .map(|(col, (text, style))| {
                let style = if is_selected {
                    style.patch(Theme::row_selected())
                } else {
                    *style
                };
                Span::styled(fit(text, col.width + 1), style)
            })
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(inner.x, inner.y + 2 + line_no as u16, inner.width, 1),
        );
    }
}
