use ratatui::prelude::*;

use crate::app::state::AppState;
use crate::ui::rows;
use crate::ui::table::{render_table, Column};
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let date_format = &state.config.ui.date_format;
    let columns = [
        Column { title: "ID", width: 5 },
        Column { title: "Name", width: 22 },
        Column { title: "Channel", width: 10 },
        Column { title: "Locale", width: 7 },
        Column { title: "Body", width: 40 },
        Column { title: "Created", width: 17 },
    ];
    let table_rows: Vec<Vec<(String, Style)>> = state
        .store
        .templates
        .iter()
        .map(|t| {
            vec![
                (t.id.to_string(), Theme::muted()),
                (rows::template_name(t), Theme::row()),
                (
                    t.channel.clone().unwrap_or_else(|| "N/A".to_string()),
                    Theme::row(),
                ),
                (
                    t.locale.clone().unwrap_or_else(|| "N/A".to_string()),
                    Theme::row(),
                ),
                (rows::template_body(t), Theme::label()),
                (
                    rows::format_date(t.created_at.as_deref(), date_format),
                    Theme::muted(),
                ),
            ]
        })
        .collect();
    render_table(
        frame,
        area,
        "Templates (n: new)",
        &columns,
        &table_rows,
        Some(state.templates_cursor.selected),
    );
}
