use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::state::{AppState, Tab};
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = if state.modal.is_open() {
        "Enter: save | Esc: cancel"
    } else {
        match state.tab {
            Tab::Dashboard => "Tab: next view | n: new campaign | F5: refresh | q: quit",
            Tab::Campaigns => "n: new | l: launch | Enter: view | F5: refresh | q: quit",
            Tab::Users | Tab::Messages => "n: new | F2: switch pane | F5: refresh | q: quit",
            _ => "n: new | Enter: open | F5: refresh | q: quit",
        }
    };

    let mut parts = vec![
        Span::styled(
            format!(" {} ", state.tab.title()),
            Style::default().fg(Color::Green).bg(Color::DarkGray),
        ),
        Span::styled(format!(" {hints} "), Theme::status_bar()),
    ];

    let base_url = &state.config.api.base_url;
    let used: usize = parts.iter().map(|s| s.content.len()).sum();
    let remaining = (area.width as usize).saturating_sub(used + base_url.len() + 2);
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        format!(" {base_url} "),
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
