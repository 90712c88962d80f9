use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

use crate::app::state::{AppState, Severity};
use crate::ui::theme::Theme;

/// One-line notification floated above the status bar, bottom-right.
pub fn render(frame: &mut Frame, state: &AppState) {
    let Some(toast) = &state.toast else {
        return;
    };
    let area = frame.area();
    if area.height < 3 {
        return;
    }
    let style = match toast.severity {
        Severity::Success => Theme::toast_success(),
        Severity::Error => Theme::toast_error(),
    };
    let text = format!(" {} ", toast.message);
    let width = (text.len() as u16).min(area.width.saturating_sub(2));
    let rect = Rect::new(
        area.width.saturating_sub(width + 1),
        area.height.saturating_sub(3),
        width,
        1,
    );
    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(Span::styled(text, style)), rect);
}
