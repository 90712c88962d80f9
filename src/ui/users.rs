use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::state::{AppState, UsersPane};
use crate::ui::fields::render_field;
use crate::ui::rows;
use crate::ui::table::{render_table, Column};
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    match state.users_pane {
        UsersPane::Directory => render_directory(frame, area, state),
        UsersPane::BulkUpload => render_bulk_upload(frame, area, state),
    }
}

fn render_directory(frame: &mut Frame, area: Rect, state: &AppState) {
    let date_format = &state.config.ui.date_format;
    let columns = [
        Column { title: "ID", width: 5 },
        Column { title: "Phone", width: 16 },
        Column { title: "Attributes", width: 34 },
        Column { title: "Consent", width: 24 },
        Column { title: "Created", width: 17 },
    ];
    let table_rows: Vec<Vec<(String, Style)>> = state
        .store
        .users
        .iter()
        .map(|u| {
            vec![
                (u.id.to_string(), Theme::muted()),
                (rows::user_phone(u), Theme::row()),
                (rows::user_attributes(u), Theme::label()),
                (rows::user_consent(u), Theme::label()),
                (
                    rows::format_date(u.created_at.as_deref(), date_format),
                    Theme::muted(),
                ),
            ]
        })
        .collect();
    render_table(
        frame,
        area,
        "Users (n: new, F2: bulk upload)",
        &columns,
        &table_rows,
        Some(state.users_cursor.selected),
    );
}

fn render_bulk_upload(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Bulk Upload (F2: back to directory) ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 5 {
        return;
    }
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Upload a CSV of users (columns: phone, attributes, consent).",
            Theme::label(),
        ))),
        Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), 1),
    );
    render_field(
        frame,
        Rect::new(inner.x + 1, inner.y + 2, inner.width.saturating_sub(2), 1),
        "CSV path",
        &state.upload_path,
        true,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Enter to upload",
            Theme::muted(),
        ))),
        Rect::new(inner.x + 1, inner.y + 4, inner.width.saturating_sub(2), 1),
    );
}
