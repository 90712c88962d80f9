use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::state::AppState;
use crate::ui::table::{render_table, Column};
use crate::ui::theme::Theme;
use crate::ui::rows;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Stat boxes
            Constraint::Min(5),    // Recent campaigns
        ])
        .split(area);

    render_stats(frame, chunks[0], state);
    render_recent(frame, chunks[1], state);
}

fn render_stats(frame: &mut Frame, area: Rect, state: &AppState) {
    let boxes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let counts = state.dashboard.counts;
    let stats: [(&str, Option<usize>); 4] = [
        ("Campaigns", counts.map(|c| c.campaigns)),
        ("Users", counts.map(|c| c.users)),
        ("Templates", counts.map(|c| c.templates)),
        ("Messages", counts.map(|c| c.messages)),
    ];

    for (rect, (label, count)) in boxes.iter().zip(stats) {
        let value = match count {
            Some(n) => n.to_string(),
            None => "-".to_string(),
        };
        let block = Block::default()
            .title(format!(" {label} "))
            .title_style(Theme::label())
            .borders(Borders::ALL)
            .border_type(Theme::border_type())
            .border_style(Theme::border());
        let inner = block.inner(*rect);
        frame.render_widget(block, *rect);
        let text = Paragraph::new(Line::from(Span::styled(value, Theme::stat_value())))
            .alignment(Alignment::Center);
        if inner.height > 0 {
            let mid = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
            frame.render_widget(text, mid);
        }
    }
}

fn render_recent(frame: &mut Frame, area: Rect, state: &AppState) {
    let date_format = &state.config.ui.date_format;
    let columns = [
        Column { title: "ID", width: 5 },
        Column { title: "Name", width: 28 },
        Column { title: "Status", width: 10 },
        Column { title: "Created", width: 17 },
    ];
    let rows: Vec<Vec<(String, Style)>> = state
        .dashboard
        .recent_campaigns
        .iter()
        .map(|c| {
            vec![
                (c.id.to_string(), Theme::muted()),
                (rows::campaign_name(c), Theme::row()),
                (
                    rows::campaign_status(c).to_string(),
                    Theme::campaign_status(rows::campaign_status(c)),
                ),
                (
                    rows::format_date(c.created_at.as_deref(), date_format),
                    Theme::muted(),
                ),
            ]
        })
        .collect();
    render_table(frame, area, "Recent Campaigns", &columns, &rows, None);
}
