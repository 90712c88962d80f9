//! Centered create-entity dialogs. Whichever modal is open captures all
//! keyboard input; Esc discards the form, Enter submits it.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::state::{
    AppState, CampaignField, CampaignForm, Modal, ScheduleType, SegmentField, SegmentForm,
    TemplateField, TemplateForm, UserField, UserForm,
};
use crate::ui::fields::{render_field, render_select};
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let (title, field_count) = match &state.modal {
        Modal::None => return,
        Modal::CreateCampaign(_) => ("Create Campaign", 6),
        Modal::CreateTemplate(_) => ("Create Template", 5),
        Modal::CreateSegment(_) => ("Create Segment", 2),
        Modal::CreateUser(_) => ("Create User", 3),
    };

    let area = frame.area();
    let popup_w = (area.width * 60 / 100)
        .max(50)
        .min(area.width.saturating_sub(4));
    let popup_h = (field_count as u16 + 5).min(area.height.saturating_sub(2));
    let popup_x = (area.width.saturating_sub(popup_w)) / 2;
    let popup_y = (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(format!(" {title} — Enter to save, Esc to cancel "))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border_focused());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height < 3 || inner.width < 20 {
        return;
    }

    let field_rect = |row: u16| {
        Rect::new(
            inner.x + 1,
            inner.y + 1 + row,
            inner.width.saturating_sub(2),
            1,
        )
    };

    match &state.modal {
        Modal::None => {}
        Modal::CreateCampaign(form) => render_campaign(frame, field_rect, form),
        Modal::CreateTemplate(form) => render_template(frame, field_rect, form),
        Modal::CreateSegment(form) => render_segment(frame, field_rect, form),
        Modal::CreateUser(form) => render_user(frame, field_rect, form),
    }

    let help_y = inner.y + inner.height.saturating_sub(1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Tab/Up/Down: fields  Left/Right: options",
            Theme::muted(),
        ))),
        Rect::new(inner.x + 1, help_y, inner.width.saturating_sub(2), 1),
    );
}

fn selector_label<'a>(options: &'a [(i64, String)], selected: Option<usize>) -> &'a str {
    selected
        .and_then(|i| options.get(i))
        .map(|(_, name)| name.as_str())
        .unwrap_or("Select...")
}

fn render_campaign(frame: &mut Frame, rect: impl Fn(u16) -> Rect, form: &CampaignForm) {
    render_field(frame, rect(0), "Name", &form.name, form.focus == CampaignField::Name);
    render_select(
        frame,
        rect(1),
        "Template",
        selector_label(&form.template_options, form.template_selected),
        form.focus == CampaignField::Template,
    );
    render_select(
        frame,
        rect(2),
        "Segment",
        selector_label(&form.segment_options, form.segment_selected),
        form.focus == CampaignField::Segment,
    );
    render_field(frame, rect(3), "Topic", &form.topic, form.focus == CampaignField::Topic);
    render_select(
        frame,
        rect(4),
        "Schedule",
        form.schedule_type.label(),
        form.focus == CampaignField::ScheduleType,
    );
    if form.schedule_type == ScheduleType::Scheduled {
        render_field(
            frame,
            rect(5),
            "Send at",
            &form.scheduled_at,
            form.focus == CampaignField::ScheduledAt,
        );
    }
}

fn render_template(frame: &mut Frame, rect: impl Fn(u16) -> Rect, form: &TemplateForm) {
    render_field(frame, rect(0), "Name", &form.name, form.focus == TemplateField::Name);
    render_field(frame, rect(1), "Channel", &form.channel, form.focus == TemplateField::Channel);
    render_field(frame, rect(2), "Locale", &form.locale, form.focus == TemplateField::Locale);
    render_field(frame, rect(3), "Body", &form.body, form.focus == TemplateField::Body);
    render_field(
        frame,
        rect(4),
        "Placeholders",
        &form.placeholders,
        form.focus == TemplateField::Placeholders,
    );
}

fn render_segment(frame: &mut Frame, rect: impl Fn(u16) -> Rect, form: &SegmentForm) {
    render_field(frame, rect(0), "Name", &form.name, form.focus == SegmentField::Name);
    render_field(
        frame,
        rect(1),
        "Definition",
        &form.definition,
        form.focus == SegmentField::Definition,
    );
}

fn render_user(frame: &mut Frame, rect: impl Fn(u16) -> Rect, form: &UserForm) {
    render_field(frame, rect(0), "Phone", &form.phone, form.focus == UserField::Phone);
    render_field(
        frame,
        rect(1),
        "Attributes",
        &form.attributes,
        form.focus == UserField::Attributes,
    );
    render_field(frame, rect(2), "Consent", &form.consent, form.focus == UserField::Consent);
}
