use ratatui::prelude::*;

use crate::app::state::AppState;
use crate::ui::rows;
use crate::ui::table::{render_table, Column};
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let date_format = &state.config.ui.date_format;
    let columns = [
        Column { title: "ID", width: 5 },
        Column { title: "Name", width: 24 },
        Column { title: "Definition", width: 50 },
        Column { title: "Created", width: 17 },
    ];
    let table_rows: Vec<Vec<(String, Style)>> = state
        .store
        .segments
        .iter()
        .map(|s| {
            vec![
                (s.id.to_string(), Theme::muted()),
                (rows::segment_name(s), Theme::row()),
                (rows::segment_definition(s), Theme::label()),
                (
                    rows::format_date(s.created_at.as_deref(), date_format),
                    Theme::muted(),
                ),
            ]
        })
        .collect();
    render_table(
        frame,
        area,
        "Segments (n: new)",
        &columns,
        &table_rows,
        Some(state.segments_cursor.selected),
    );
}
