use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::state::{AppState, MessagesPane, TestField};
use crate::ui::fields::render_field;
use crate::ui::rows;
use crate::ui::table::{render_table, Column};
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    match state.messages_pane {
        MessagesPane::Delivery => render_delivery(frame, area, state),
        MessagesPane::TestSend => render_test_send(frame, area, state),
    }
}

fn render_delivery(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Filter line
            Constraint::Min(4),    // Delivery table
        ])
        .split(area);

    let filter_label = match state.message_filter {
        Some(i) => state
            .message_filter_options
            .get(i)
            .map(|(_, name)| name.as_str())
            .unwrap_or("All campaigns"),
        None => "All campaigns",
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" Filter: ", Theme::label()),
            Span::styled(format!("< {filter_label} >"), Theme::field()),
            Span::styled("  (Left/Right to change)", Theme::muted()),
        ])),
        chunks[0],
    );

    let date_format = &state.config.ui.date_format;
    let columns = [
        Column { title: "ID", width: 5 },
        Column { title: "Campaign", width: 10 },
        Column { title: "User", width: 8 },
        Column { title: "State", width: 12 },
        Column { title: "Provider SID", width: 24 },
        Column { title: "Created", width: 17 },
    ];
    let table_rows: Vec<Vec<(String, Style)>> = state
        .store
        .messages
        .iter()
        .map(|m| {
            let msg_state = rows::message_state(m);
            vec![
                (m.id.to_string(), Theme::muted()),
                (rows::message_campaign(m), Theme::row()),
                (rows::message_user(m), Theme::row()),
                (msg_state.to_string(), Theme::message_state(msg_state)),
                (rows::message_provider_sid(m), Theme::label()),
                (
                    rows::format_date(m.created_at.as_deref(), date_format),
                    Theme::muted(),
                ),
            ]
        })
        .collect();
    render_table(
        frame,
        chunks[1],
        "Delivery (F2: test send)",
        &columns,
        &table_rows,
        Some(state.messages_cursor.selected),
    );
}

fn render_test_send(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Test Send (F2: back to delivery) ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 5 {
        return;
    }
    render_field(
        frame,
        Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), 1),
        "Phone",
        &state.test_phone,
        state.test_focus == TestField::Phone,
    );
    render_field(
        frame,
        Rect::new(inner.x + 1, inner.y + 2, inner.width.saturating_sub(2), 1),
        "Message",
        &state.test_message,
        state.test_focus == TestField::Message,
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Up/Down to switch fields, Enter to send",
            Theme::muted(),
        ))),
        Rect::new(inner.x + 1, inner.y + 4, inner.width.saturating_sub(2), 1),
    );
}
