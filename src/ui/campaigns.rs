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
        Column { title: "Template", width: 11 },
        Column { title: "Segment", width: 11 },
        Column { title: "Status", width: 10 },
        Column { title: "Schedule", width: 17 },
        Column { title: "Created", width: 17 },
        Column { title: "Actions", width: 12 },
    ];
    let table_rows: Vec<Vec<(String, Style)>> = state
        .store
        .campaigns
        .iter()
        .map(|c| {
            let status = rows::campaign_status(c);
            vec![
                (c.id.to_string(), Theme::muted()),
                (rows::campaign_name(c), Theme::row()),
                (rows::campaign_template(c), Theme::row()),
                (rows::campaign_segment(c), Theme::row()),
                (status.to_string(), Theme::campaign_status(status)),
                (rows::campaign_schedule(c, date_format), Theme::row()),
                (
                    rows::format_date(c.created_at.as_deref(), date_format),
                    Theme::muted(),
                ),
                (rows::campaign_actions(c).to_string(), Theme::label()),
            ]
        })
        .collect();
    render_table(
        frame,
        area,
        "Campaigns (n: new, l: launch draft)",
        &columns,
        &table_rows,
        Some(state.campaigns_cursor.selected),
    );
}
