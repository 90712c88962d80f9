//! Single-line text field rendering shared by modals and the inline forms.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::state::FieldState;
use crate::ui::theme::Theme;

/// Paint `label: value` on one line, with a block cursor when focused.
pub fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    field: &FieldState,
    focused: bool,
) {
    let mut spans = vec![Span::styled(format!("{label:<14}"), Theme::label())];
    if focused {
        let before = &field.text[..field.cursor];
        let (at, after) = match field.text[field.cursor..].char_indices().nth(1) {
            Some((i, _)) => (
                &field.text[field.cursor..field.cursor + i],
                &field.text[field.cursor + i..],
            ),
            None if field.cursor < field.text.len() => (&field.text[field.cursor..], ""),
            None => (" ", ""),
        };
        spans.push(Span::styled(before.to_string(), Theme::field()));
        spans.push(Span::styled(at.to_string(), Theme::field_focused()));
        spans.push(Span::styled(after.to_string(), Theme::field()));
    } else {
        spans.push(Span::styled(field.text.clone(), Theme::field()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Paint a `< value >` selector line for dropdown-style fields.
pub fn render_select(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let value_style = if focused {
        Theme::field_focused()
    } else {
        Theme::field()
    };
    let spans = vec![
        Span::styled(format!("{label:<14}"), Theme::label()),
        Span::styled(format!("< {value} >"), value_style),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
