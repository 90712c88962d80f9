//! Event handling: terminal input routing, API completion handling, form
//! validation, and tab/modal transitions. All store mutation happens here,
//! on the event-loop task; network work is expressed as returned [`Action`]s.

use std::path::PathBuf;

use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
use serde_json::Value;

use crate::api::types::{NewCampaign, NewSegment, NewTemplate, NewUser, TestSend};
use crate::app::action::Action;
use crate::app::event::{ApiEvent, AppEvent, CreatedEntity};
use crate::app::state::*;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => {
            state.expire_toast();
            vec![]
        }
        AppEvent::Api(api) => handle_api(state, api),
    }
}

/// Activate a top-level tab. Every tab except the dashboard refreshes its
/// data on each activation; the dashboard is only loaded explicitly (at
/// startup, after creates, or via manual refresh).
pub fn switch_tab(state: &mut AppState, tab: Tab) -> Vec<Action> {
    state.tab = tab;
    state.dirty = true;
    match tab {
        Tab::Dashboard => vec![],
        Tab::Campaigns => vec![Action::LoadCampaigns {
            generation: state.generations.bump_campaigns(),
        }],
        Tab::Templates => vec![Action::LoadTemplates {
            generation: state.generations.bump_templates(),
        }],
        Tab::Segments => vec![Action::LoadSegments {
            generation: state.generations.bump_segments(),
        }],
        Tab::Users => vec![Action::LoadUsers {
            generation: state.generations.bump_users(),
        }],
        Tab::Messages => {
            state.message_filter = None;
            vec![Action::LoadMessages {
                generation: state.generations.bump_messages(),
                campaign_id: None,
            }]
        }
    }
}

// ---------------------------------------------------------------------------
// API completions
// ---------------------------------------------------------------------------

fn handle_api(state: &mut AppState, event: ApiEvent) -> Vec<Action> {
    match event {
        ApiEvent::DashboardLoaded {
            generation,
            campaigns,
            users,
            templates,
            messages,
        } => {
            if generation != state.generations.dashboard {
                return vec![];
            }
            state.dashboard.counts = Some(DashboardCounts {
                campaigns: campaigns.len(),
                users: users.len(),
                templates: templates.len(),
                messages: messages.len(),
            });
            state.dashboard.recent_campaigns = campaigns.iter().take(5).cloned().collect();
            state.store.campaigns = campaigns;
            state.store.users = users;
            state.store.templates = templates;
            state.store.messages = messages;
            state.campaigns_cursor.clamp(state.store.campaigns.len());
            state.users_cursor.clamp(state.store.users.len());
            state.templates_cursor.clamp(state.store.templates.len());
            state.messages_cursor.clamp(state.store.messages.len());
            state.dirty = true;
            vec![]
        }
        ApiEvent::CampaignsLoaded {
            generation,
            campaigns,
        } => {
            if generation != state.generations.campaigns {
                return vec![];
            }
            state.store.campaigns = campaigns;
            state.campaigns_cursor.clamp(state.store.campaigns.len());
            state.dirty = true;
            vec![]
        }
        ApiEvent::TemplatesLoaded {
            generation,
            templates,
        } => {
            if generation != state.generations.templates {
                return vec![];
            }
            state.store.templates = templates;
            state.templates_cursor.clamp(state.store.templates.len());
            state.dirty = true;
            vec![]
        }
        ApiEvent::SegmentsLoaded {
            generation,
            segments,
        } => {
            if generation != state.generations.segments {
                return vec![];
            }
            state.store.segments = segments;
            state.segments_cursor.clamp(state.store.segments.len());
            state.dirty = true;
            vec![]
        }
        ApiEvent::UsersLoaded { generation, users } => {
            if generation != state.generations.users {
                return vec![];
            }
            state.store.users = users;
            state.users_cursor.clamp(state.store.users.len());
            state.dirty = true;
            vec![]
        }
        ApiEvent::MessagesLoaded {
            generation,
            messages,
            filtered,
        } => {
            if generation != state.generations.messages {
                return vec![];
            }
            state.store.messages = messages;
            state.messages_cursor.clamp(state.store.messages.len());
            if !filtered {
                state.rebuild_message_filter_options();
            }
            state.dirty = true;
            vec![]
        }
        ApiEvent::TemplateOptionsLoaded { templates } => {
            if let Modal::CreateCampaign(form) = &mut state.modal {
                form.template_options = templates
                    .iter()
                    .map(|t| {
                        let label = t
                            .name
                            .clone()
                            .unwrap_or_else(|| format!("Template {}", t.id));
                        (t.id, label)
                    })
                    .collect();
                if let Some(i) = form.template_selected {
                    if i >= form.template_options.len() {
                        form.template_selected = None;
                    }
                }
                state.dirty = true;
            }
            vec![]
        }
        ApiEvent::SegmentOptionsLoaded { segments } => {
            if let Modal::CreateCampaign(form) = &mut state.modal {
                form.segment_options = segments
                    .iter()
                    .map(|s| {
                        let label = s
                            .name
                            .clone()
                            .unwrap_or_else(|| format!("Segment {}", s.id));
                        (s.id, label)
                    })
                    .collect();
                if let Some(i) = form.segment_selected {
                    if i >= form.segment_options.len() {
                        form.segment_selected = None;
                    }
                }
                state.dirty = true;
            }
            vec![]
        }
        ApiEvent::Created { entity } => {
            let (message, reload) = match entity {
                CreatedEntity::Campaign => (
                    "Campaign created successfully",
                    Action::LoadCampaigns {
                        generation: state.generations.bump_campaigns(),
                    },
                ),
                CreatedEntity::Template => (
                    "Template created successfully",
                    Action::LoadTemplates {
                        generation: state.generations.bump_templates(),
                    },
                ),
                CreatedEntity::Segment => (
                    "Segment created successfully",
                    Action::LoadSegments {
                        generation: state.generations.bump_segments(),
                    },
                ),
                CreatedEntity::User => (
                    "User created successfully",
                    Action::LoadUsers {
                        generation: state.generations.bump_users(),
                    },
                ),
            };
            state.show_toast(message);
            state.close_modals();
            vec![
                reload,
                Action::LoadDashboard {
                    generation: state.generations.bump_dashboard(),
                },
            ]
        }
        ApiEvent::CampaignLaunched { id } => {
            state.show_toast(format!("Campaign {id} launched"));
            vec![
                Action::LoadCampaigns {
                    generation: state.generations.bump_campaigns(),
                },
                Action::LoadDashboard {
                    generation: state.generations.bump_dashboard(),
                },
            ]
        }
        ApiEvent::UsersUploaded => {
            state.show_toast("Users uploaded successfully");
            state.upload_path.clear();
            vec![
                Action::LoadUsers {
                    generation: state.generations.bump_users(),
                },
                Action::LoadDashboard {
                    generation: state.generations.bump_dashboard(),
                },
            ]
        }
        ApiEvent::TestMessageSent => {
            state.show_toast("Test message sent successfully");
            state.test_message.clear();
            vec![]
        }
        ApiEvent::Failed { context, error } => {
            tracing::warn!(context = context.as_str(), error = %error, "API request failed");
            state.show_error(format!("Error: {error}"));
            vec![]
        }
    }
}

// ---------------------------------------------------------------------------
// Terminal input
// ---------------------------------------------------------------------------

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

pub fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // An open modal captures all input
    if state.modal.is_open() {
        return handle_modal_key(state, key);
    }

    match key.code {
        KeyCode::Tab => switch_tab(state, state.tab.next()),
        KeyCode::BackTab => switch_tab(state, state.tab.prev()),
        KeyCode::F(2) => {
            toggle_sub_pane(state);
            vec![]
        }
        KeyCode::F(5) => refresh_current(state),
        _ => handle_view_key(state, key),
    }
}

fn toggle_sub_pane(state: &mut AppState) {
    match state.tab {
        Tab::Users => {
            state.users_pane = match state.users_pane {
                UsersPane::Directory => UsersPane::BulkUpload,
                UsersPane::BulkUpload => UsersPane::Directory,
            };
        }
        Tab::Messages => {
            state.messages_pane = match state.messages_pane {
                MessagesPane::Delivery => MessagesPane::TestSend,
                MessagesPane::TestSend => MessagesPane::Delivery,
            };
        }
        _ => {}
    }
}

/// Re-run the active view's loader, keeping any message filter.
fn refresh_current(state: &mut AppState) -> Vec<Action> {
    match state.tab {
        Tab::Dashboard => vec![Action::LoadDashboard {
            generation: state.generations.bump_dashboard(),
        }],
        Tab::Messages => vec![Action::LoadMessages {
            generation: state.generations.bump_messages(),
            campaign_id: state.message_filter_id(),
        }],
        tab => switch_tab(state, tab),
    }
}

fn handle_view_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match state.tab {
        Tab::Dashboard => match key.code {
            KeyCode::Char('q') => vec![Action::Quit],
            KeyCode::Char('n') => open_campaign_modal(state),
            _ => vec![],
        },
        Tab::Campaigns => match key.code {
            KeyCode::Char('q') => vec![Action::Quit],
            KeyCode::Up => {
                state.campaigns_cursor.move_up();
                vec![]
            }
            KeyCode::Down => {
                state.campaigns_cursor.move_down(state.store.campaigns.len());
                vec![]
            }
            KeyCode::Char('n') => open_campaign_modal(state),
            KeyCode::Char('l') => launch_selected(state),
            KeyCode::Enter => {
                if let Some(c) = state.store.campaigns.get(state.campaigns_cursor.selected) {
                    let id = c.id;
                    state.show_toast(format!("Viewing campaign {id} (detail view not implemented)"));
                }
                vec![]
            }
            _ => vec![],
        },
        Tab::Templates => match key.code {
            KeyCode::Char('q') => vec![Action::Quit],
            KeyCode::Up => {
                state.templates_cursor.move_up();
                vec![]
            }
            KeyCode::Down => {
                state.templates_cursor.move_down(state.store.templates.len());
                vec![]
            }
            KeyCode::Char('n') => {
                state.modal = Modal::CreateTemplate(TemplateForm::default());
                vec![]
            }
            KeyCode::Enter => {
                if let Some(t) = state.store.templates.get(state.templates_cursor.selected) {
                    let id = t.id;
                    state.show_toast(format!("Previewing template {id} (preview not implemented)"));
                }
                vec![]
            }
            _ => vec![],
        },
        Tab::Segments => match key.code {
            KeyCode::Char('q') => vec![Action::Quit],
            KeyCode::Up => {
                state.segments_cursor.move_up();
                vec![]
            }
            KeyCode::Down => {
                state.segments_cursor.move_down(state.store.segments.len());
                vec![]
            }
            KeyCode::Char('n') => {
                state.modal = Modal::CreateSegment(SegmentForm::default());
                vec![]
            }
            KeyCode::Enter => {
                if let Some(s) = state.store.segments.get(state.segments_cursor.selected) {
                    let id = s.id;
                    state.show_toast(format!("Segment {id} member list not implemented"));
                }
                vec![]
            }
            _ => vec![],
        },
        Tab::Users => match state.users_pane {
            UsersPane::Directory => match key.code {
                KeyCode::Char('q') => vec![Action::Quit],
                KeyCode::Up => {
                    state.users_cursor.move_up();
                    vec![]
                }
                KeyCode::Down => {
                    state.users_cursor.move_down(state.store.users.len());
                    vec![]
                }
                KeyCode::Char('n') => {
                    state.modal = Modal::CreateUser(UserForm::default());
                    vec![]
                }
                KeyCode::Enter => {
                    if let Some(u) = state.store.users.get(state.users_cursor.selected) {
                        let id = u.id;
                        state.show_toast(format!("Editing user {id} not implemented"));
                    }
                    vec![]
                }
                _ => vec![],
            },
            UsersPane::BulkUpload => match key.code {
                KeyCode::Enter => submit_upload(state),
                _ => {
                    edit_field(&mut state.upload_path, key);
                    vec![]
                }
            },
        },
        Tab::Messages => match state.messages_pane {
            MessagesPane::Delivery => match key.code {
                KeyCode::Char('q') => vec![Action::Quit],
                KeyCode::Up => {
                    state.messages_cursor.move_up();
                    vec![]
                }
                KeyCode::Down => {
                    state.messages_cursor.move_down(state.store.messages.len());
                    vec![]
                }
                KeyCode::Left => cycle_message_filter(state, false),
                KeyCode::Right => cycle_message_filter(state, true),
                _ => vec![],
            },
            MessagesPane::TestSend => match key.code {
                KeyCode::Enter => submit_test_send(state),
                KeyCode::Up | KeyCode::BackTab => {
                    state.test_focus = match state.test_focus {
                        TestField::Phone => TestField::Message,
                        TestField::Message => TestField::Phone,
                    };
                    vec![]
                }
                KeyCode::Down => {
                    state.test_focus = match state.test_focus {
                        TestField::Phone => TestField::Message,
                        TestField::Message => TestField::Phone,
                    };
                    vec![]
                }
                _ => {
                    let field = match state.test_focus {
                        TestField::Phone => &mut state.test_phone,
                        TestField::Message => &mut state.test_message,
                    };
                    edit_field(field, key);
                    vec![]
                }
            },
        },
    }
}

/// Cycle the Messages campaign filter: all -> campaign 1 -> ... -> all.
/// Every change reissues the message loader with the new filter.
fn cycle_message_filter(state: &mut AppState, forward: bool) -> Vec<Action> {
    let len = state.message_filter_options.len();
    if len == 0 {
        return vec![];
    }
    state.message_filter = if forward {
        match state.message_filter {
            None => Some(0),
            Some(i) if i + 1 < len => Some(i + 1),
            Some(_) => None,
        }
    } else {
        match state.message_filter {
            None => Some(len - 1),
            Some(0) => None,
            Some(i) => Some(i - 1),
        }
    };
    vec![Action::LoadMessages {
        generation: state.generations.bump_messages(),
        campaign_id: state.message_filter_id(),
    }]
}

/// Opening the campaign modal also refreshes both dropdowns.
fn open_campaign_modal(state: &mut AppState) -> Vec<Action> {
    state.modal = Modal::CreateCampaign(CampaignForm::default());
    vec![Action::LoadTemplateOptions, Action::LoadSegmentOptions]
}

fn launch_selected(state: &mut AppState) -> Vec<Action> {
    let Some(campaign) = state.store.campaigns.get(state.campaigns_cursor.selected) else {
        return vec![];
    };
    if !campaign.is_draft() {
        state.show_error("Only draft campaigns can be launched");
        return vec![];
    }
    vec![Action::LaunchCampaign { id: campaign.id }]
}

// ---------------------------------------------------------------------------
// Modal input and form submission
// ---------------------------------------------------------------------------

fn handle_modal_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc => {
            state.close_modals();
            return vec![];
        }
        KeyCode::Enter => return submit_modal(state),
        _ => {}
    }

    match &mut state.modal {
        Modal::None => {}
        Modal::CreateCampaign(form) => match key.code {
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            _ => match form.focus {
                CampaignField::Name => edit_field(&mut form.name, key),
                CampaignField::Topic => edit_field(&mut form.topic, key),
                CampaignField::ScheduledAt => edit_field(&mut form.scheduled_at, key),
                CampaignField::Template => match key.code {
                    KeyCode::Left => {
                        select_prev(&mut form.template_selected, form.template_options.len())
                    }
                    KeyCode::Right => {
                        select_next(&mut form.template_selected, form.template_options.len())
                    }
                    _ => {}
                },
                CampaignField::Segment => match key.code {
                    KeyCode::Left => {
                        select_prev(&mut form.segment_selected, form.segment_options.len())
                    }
                    KeyCode::Right => {
                        select_next(&mut form.segment_selected, form.segment_options.len())
                    }
                    _ => {}
                },
                CampaignField::ScheduleType => {
                    if matches!(key.code, KeyCode::Left | KeyCode::Right) {
                        form.schedule_type = form.schedule_type.toggle();
                    }
                }
            },
        },
        Modal::CreateTemplate(form) => match key.code {
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            _ => {
                let field = match form.focus {
                    TemplateField::Name => &mut form.name,
                    TemplateField::Channel => &mut form.channel,
                    TemplateField::Locale => &mut form.locale,
                    TemplateField::Body => &mut form.body,
                    TemplateField::Placeholders => &mut form.placeholders,
                };
                edit_field(field, key);
            }
        },
        Modal::CreateSegment(form) => match key.code {
            KeyCode::Tab | KeyCode::Down | KeyCode::BackTab | KeyCode::Up => form.focus_next(),
            _ => {
                let field = match form.focus {
                    SegmentField::Name => &mut form.name,
                    SegmentField::Definition => &mut form.definition,
                };
                edit_field(field, key);
            }
        },
        Modal::CreateUser(form) => match key.code {
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            _ => {
                let field = match form.focus {
                    UserField::Phone => &mut form.phone,
                    UserField::Attributes => &mut form.attributes,
                    UserField::Consent => &mut form.consent,
                };
                edit_field(field, key);
            }
        },
    }
    vec![]
}

fn submit_modal(state: &mut AppState) -> Vec<Action> {
    let outcome = match &state.modal {
        Modal::None => return vec![],
        Modal::CreateCampaign(form) => build_campaign_payload(form).map(Action::CreateCampaign),
        Modal::CreateTemplate(form) => Ok(Action::CreateTemplate(build_template_payload(form))),
        Modal::CreateSegment(form) => build_segment_payload(form).map(Action::CreateSegment),
        Modal::CreateUser(form) => build_user_payload(form).map(Action::CreateUser),
    };
    match outcome {
        Ok(action) => vec![action],
        Err(message) => {
            state.show_error(message);
            vec![]
        }
    }
}

fn submit_upload(state: &mut AppState) -> Vec<Action> {
    let raw = state.upload_path.text.trim().to_string();
    if raw.is_empty() {
        state.show_error("Please select a CSV file");
        return vec![];
    }
    vec![Action::UploadUsers {
        path: PathBuf::from(raw),
    }]
}

fn submit_test_send(state: &mut AppState) -> Vec<Action> {
    let phone = state.test_phone.text.trim().to_string();
    let message = state.test_message.text.trim().to_string();
    if phone.is_empty() || message.is_empty() {
        state.show_error("Please enter both phone number and message");
        return vec![];
    }
    vec![Action::SendTestMessage(TestSend { phone, message })]
}

/// A campaign needs a name, a resolvable template/segment pair, and a
/// schedule time that normalizes. Everything beyond that (unknown topic,
/// template/segment existence) is the server's call.
pub(crate) fn build_campaign_payload(form: &CampaignForm) -> Result<NewCampaign, String> {
    let name = form.name.text.trim();
    if name.is_empty() {
        return Err("Campaign name is required".to_string());
    }
    let template_id = form
        .selected_template_id()
        .ok_or_else(|| "Select a template".to_string())?;
    let segment_id = form
        .selected_segment_id()
        .ok_or_else(|| "Select a segment".to_string())?;
    let topic_raw = form.topic.text.trim();
    let topic = if topic_raw.is_empty() { "general" } else { topic_raw };
    let scheduled_at = match form.schedule_type {
        ScheduleType::Immediate => None,
        ScheduleType::Scheduled => {
            let raw = form.scheduled_at.text.trim();
            if raw.is_empty() {
                None
            } else {
                Some(normalize_schedule(raw)?)
            }
        }
    };
    Ok(NewCampaign {
        name: name.to_string(),
        template_id,
        segment_id,
        topic: topic.to_string(),
        scheduled_at,
    })
}

pub(crate) fn build_template_payload(form: &TemplateForm) -> NewTemplate {
    let channel = form.channel.text.trim();
    let locale = form.locale.text.trim();
    let placeholders: Vec<String> = form
        .placeholders
        .text
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();
    NewTemplate {
        name: form.name.text.trim().to_string(),
        channel: if channel.is_empty() { "whatsapp" } else { channel }.to_string(),
        locale: if locale.is_empty() { "en" } else { locale }.to_string(),
        body: form.body.text.clone(),
        placeholders: if placeholders.is_empty() {
            None
        } else {
            Some(placeholders)
        },
    }
}

pub(crate) fn build_segment_payload(form: &SegmentForm) -> Result<NewSegment, String> {
    let definition = parse_json_field(&form.definition.text)
        .map_err(|_| "Invalid JSON in segment definition".to_string())?;
    Ok(NewSegment {
        name: form.name.text.trim().to_string(),
        definition,
    })
}

pub(crate) fn build_user_payload(form: &UserForm) -> Result<NewUser, String> {
    let attributes = parse_json_field(&form.attributes.text)
        .map_err(|_| "Invalid JSON in attributes".to_string())?;
    let consent = parse_json_field(&form.consent.text)
        .map_err(|_| "Invalid JSON in consent".to_string())?;
    Ok(NewUser {
        phone: form.phone.text.trim().to_string(),
        attributes,
        consent,
    })
}

/// Empty input means "omit the field"; anything else must be valid JSON.
pub(crate) fn parse_json_field(raw: &str) -> Result<Option<Value>, serde_json::Error> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(trimmed).map(Some)
}

/// Accept an RFC 3339 timestamp or a local `YYYY-MM-DD[T ]HH:MM` and
/// normalize to UTC RFC 3339 for the API.
fn normalize_schedule(raw: &str) -> Result<String, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt
            .with_timezone(&Utc)
            .to_rfc3339_opts(SecondsFormat::Secs, true));
    }
    for fmt in ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            if let Some(local) = Local.from_local_datetime(&naive).earliest() {
                return Ok(local
                    .with_timezone(&Utc)
                    .to_rfc3339_opts(SecondsFormat::Secs, true));
            }
        }
    }
    Err(format!("Invalid schedule time: {raw}"))
}

fn edit_field(field: &mut FieldState, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) => field.insert_char(c),
        KeyCode::Backspace => field.delete_back(),
        KeyCode::Delete => field.delete_forward(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        _ => {}
    }
}

fn select_next(selected: &mut Option<usize>, len: usize) {
    if len == 0 {
        return;
    }
    *selected = Some(match *selected {
        Some(i) => (i + 1) % len,
        None => 0,
    });
}

fn select_prev(selected: &mut Option<usize>, len: usize) {
    if len == 0 {
        return;
    }
    *selected = Some(match *selected {
        Some(0) | None => len - 1,
        Some(i) => i - 1,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Campaign;
    use crate::app::event::ApiContext;
    use crate::config::AppConfig;

    fn new_state() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn campaign(id: i64, name: &str, status: &str) -> Campaign {
        Campaign {
            id,
            name: Some(name.to_string()),
            status: Some(status.to_string()),
            template_id: None,
            segment_id: None,
            topic: None,
            scheduled_at: None,
            created_at: None,
        }
    }

    #[test]
    fn test_switch_tab_issues_loader_with_fresh_generation() {
        let mut state = new_state();
        let actions = switch_tab(&mut state, Tab::Campaigns);
        assert_eq!(state.tab, Tab::Campaigns);
        assert_eq!(actions, vec![Action::LoadCampaigns { generation: 1 }]);

        // Every activation reloads, no caching across visits
        let actions = switch_tab(&mut state, Tab::Campaigns);
        assert_eq!(actions, vec![Action::LoadCampaigns { generation: 2 }]);

        // The dashboard is the one tab with no activation loader
        let actions = switch_tab(&mut state, Tab::Dashboard);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_tab_titles() {
        assert_eq!(Tab::Dashboard.title(), "Dashboard");
        assert_eq!(Tab::Campaigns.title(), "Campaigns");
        assert_eq!(Tab::Messages.title(), "Messages");
    }

    #[test]
    fn test_stale_generation_is_dropped() {
        let mut state = new_state();
        switch_tab(&mut state, Tab::Campaigns); // generation 1
        switch_tab(&mut state, Tab::Dashboard);
        switch_tab(&mut state, Tab::Campaigns); // generation 2

        // The superseded first fetch completes late
        let actions = handle_api(
            &mut state,
            ApiEvent::CampaignsLoaded {
                generation: 1,
                campaigns: vec![campaign(1, "stale", "draft")],
            },
        );
        assert!(actions.is_empty());
        assert!(state.store.campaigns.is_empty());

        // The current fetch lands
        handle_api(
            &mut state,
            ApiEvent::CampaignsLoaded {
                generation: 2,
                campaigns: vec![campaign(2, "fresh", "draft")],
            },
        );
        assert_eq!(state.store.campaigns.len(), 1);
        assert_eq!(state.store.campaigns[0].name.as_deref(), Some("fresh"));
    }

    #[test]
    fn test_reload_is_idempotent() {
        let mut state = new_state();
        switch_tab(&mut state, Tab::Campaigns);
        let items = vec![campaign(1, "a", "draft"), campaign(2, "b", "sent")];
        handle_api(
            &mut state,
            ApiEvent::CampaignsLoaded {
                generation: 1,
                campaigns: items.clone(),
            },
        );
        let first = state.store.campaigns.clone();

        switch_tab(&mut state, Tab::Campaigns);
        handle_api(
            &mut state,
            ApiEvent::CampaignsLoaded {
                generation: 2,
                campaigns: items,
            },
        );
        assert_eq!(state.store.campaigns, first);
    }

    #[test]
    fn test_dashboard_updates_atomically() {
        let mut state = new_state();
        let generation = state.generations.bump_dashboard();
        handle_api(
            &mut state,
            ApiEvent::DashboardLoaded {
                generation,
                campaigns: (1..=7).map(|i| campaign(i, "c", "draft")).collect(),
                users: vec![],
                templates: vec![],
                messages: vec![],
            },
        );
        let counts = state.dashboard.counts.unwrap();
        assert_eq!(counts.campaigns, 7);
        assert_eq!(counts.users, 0);
        // Recent campaigns are capped at five
        assert_eq!(state.dashboard.recent_campaigns.len(), 5);
    }

    #[test]
    fn test_dashboard_failure_leaves_snapshot_untouched() {
        let mut state = new_state();
        let generation = state.generations.bump_dashboard();
        handle_api(
            &mut state,
            ApiEvent::DashboardLoaded {
                generation,
                campaigns: vec![campaign(1, "a", "draft")],
                users: vec![],
                templates: vec![],
                messages: vec![],
            },
        );

        state.generations.bump_dashboard();
        let actions = handle_api(
            &mut state,
            ApiEvent::Failed {
                context: ApiContext::Dashboard,
                error: crate::api::ApiError::Status { status: 500 },
            },
        );
        assert!(actions.is_empty());
        assert_eq!(state.dashboard.counts.unwrap().campaigns, 1);
        assert_eq!(state.dashboard.recent_campaigns.len(), 1);
        let toast = state.toast.as_ref().unwrap();
        assert_eq!(toast.severity, Severity::Error);
    }

    #[test]
    fn test_unfiltered_message_load_rebuilds_filter_options() {
        let mut state = new_state();
        state.store.campaigns = vec![campaign(3, "Promo", "draft")];
        let generation = state.generations.bump_messages();
        handle_api(
            &mut state,
            ApiEvent::MessagesLoaded {
                generation,
                messages: vec![],
                filtered: false,
            },
        );
        assert_eq!(state.message_filter_options, vec![(3, "Promo".to_string())]);

        // A filtered load must not touch the options
        state.store.campaigns.push(campaign(4, "Other", "sent"));
        let generation = state.generations.bump_messages();
        handle_api(
            &mut state,
            ApiEvent::MessagesLoaded {
                generation,
                messages: vec![],
                filtered: true,
            },
        );
        assert_eq!(state.message_filter_options.len(), 1);
    }

    #[test]
    fn test_segment_form_invalid_json_blocks_submission() {
        let mut state = new_state();
        let mut form = SegmentForm::default();
        form.name.text = "vips".into();
        form.definition.text = "{not json".into();
        state.modal = Modal::CreateSegment(form);

        let actions = submit_modal(&mut state);
        assert!(actions.is_empty());
        let toast = state.toast.as_ref().unwrap();
        assert_eq!(toast.severity, Severity::Error);
        assert_eq!(toast.message, "Invalid JSON in segment definition");
        // The modal stays open for correction
        assert!(state.modal.is_open());
    }

    #[test]
    fn test_segment_form_without_definition_omits_it() {
        let mut form = SegmentForm::default();
        form.name.text = "vips".into();
        let payload = build_segment_payload(&form).unwrap();
        assert!(payload.definition.is_none());

        form.definition.text = r#"{"country": "DE"}"#.into();
        let payload = build_segment_payload(&form).unwrap();
        assert_eq!(payload.definition.unwrap()["country"], "DE");
    }

    #[test]
    fn test_user_form_json_validation() {
        let mut form = UserForm::default();
        form.phone.text = "+491701234567".into();
        form.attributes.text = "not json".into();
        assert_eq!(
            build_user_payload(&form).unwrap_err(),
            "Invalid JSON in attributes"
        );

        form.attributes.text = r#"{"plan": "pro"}"#.into();
        form.consent.text = "[broken".into();
        assert_eq!(
            build_user_payload(&form).unwrap_err(),
            "Invalid JSON in consent"
        );
    }

    #[test]
    fn test_campaign_payload_defaults_and_selection() {
        let mut form = CampaignForm::default();
        assert_eq!(
            build_campaign_payload(&form).unwrap_err(),
            "Campaign name is required"
        );

        form.name.text = "Promo".into();
        assert_eq!(
            build_campaign_payload(&form).unwrap_err(),
            "Select a template"
        );

        form.template_options = vec![(5, "Welcome".into())];
        form.template_selected = Some(0);
        form.segment_options = vec![(2, "VIPs".into())];
        form.segment_selected = Some(0);
        let payload = build_campaign_payload(&form).unwrap();
        assert_eq!(payload.template_id, 5);
        assert_eq!(payload.segment_id, 2);
        assert_eq!(payload.topic, "general");
        assert!(payload.scheduled_at.is_none());
    }

    #[test]
    fn test_campaign_schedule_normalization() {
        let mut form = CampaignForm::default();
        form.name.text = "Promo".into();
        form.template_options = vec![(5, "t".into())];
        form.template_selected = Some(0);
        form.segment_options = vec![(2, "s".into())];
        form.segment_selected = Some(0);
        form.schedule_type = ScheduleType::Scheduled;
        form.scheduled_at.text = "2024-06-01T09:00:00Z".into();
        let payload = build_campaign_payload(&form).unwrap();
        assert_eq!(payload.scheduled_at.as_deref(), Some("2024-06-01T09:00:00Z"));

        form.scheduled_at.text = "not a date".into();
        assert!(build_campaign_payload(&form).is_err());
    }

    #[test]
    fn test_template_placeholders_are_split_and_trimmed() {
        let mut form = TemplateForm::default();
        form.name.text = "welcome".into();
        form.placeholders.text = " name , city ,".into();
        let payload = build_template_payload(&form);
        assert_eq!(
            payload.placeholders,
            Some(vec!["name".to_string(), "city".to_string()])
        );
        assert_eq!(payload.channel, "whatsapp");
        assert_eq!(payload.locale, "en");

        form.placeholders.text = "  ".into();
        assert!(build_template_payload(&form).placeholders.is_none());
    }

    #[test]
    fn test_test_send_requires_both_fields() {
        let mut state = new_state();
        state.test_phone.text = "+49170".into();
        let actions = submit_test_send(&mut state);
        assert!(actions.is_empty());
        assert_eq!(state.toast.as_ref().unwrap().severity, Severity::Error);

        state.test_message.text = "hello".into();
        let actions = submit_test_send(&mut state);
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn test_upload_requires_a_file() {
        let mut state = new_state();
        let actions = submit_upload(&mut state);
        assert!(actions.is_empty());
        assert_eq!(
            state.toast.as_ref().unwrap().message,
            "Please select a CSV file"
        );

        state.upload_path.text = "/tmp/users.csv".into();
        let actions = submit_upload(&mut state);
        assert_eq!(
            actions,
            vec![Action::UploadUsers {
                path: PathBuf::from("/tmp/users.csv")
            }]
        );
    }

    #[test]
    fn test_create_success_closes_modal_and_reloads() {
        let mut state = new_state();
        state.modal = Modal::CreateSegment(SegmentForm::default());
        let actions = handle_api(
            &mut state,
            ApiEvent::Created {
                entity: CreatedEntity::Segment,
            },
        );
        assert!(!state.modal.is_open());
        assert_eq!(state.toast.as_ref().unwrap().message, "Segment created successfully");
        assert!(matches!(actions[0], Action::LoadSegments { .. }));
        assert!(matches!(actions[1], Action::LoadDashboard { .. }));
    }

    #[test]
    fn test_toast_expires_on_tick() {
        let mut state = new_state();
        state.config.ui.toast_duration_ms = 0;
        state.show_toast("done");
        assert!(state.toast.is_some());
        handle_event(&mut state, AppEvent::Tick);
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_launch_only_for_draft_campaigns() {
        let mut state = new_state();
        state.store.campaigns = vec![campaign(1, "sent one", "sent")];
        let actions = launch_selected(&mut state);
        assert!(actions.is_empty());
        assert_eq!(state.toast.as_ref().unwrap().severity, Severity::Error);

        state.store.campaigns = vec![campaign(9, "draft one", "draft")];
        let actions = launch_selected(&mut state);
        assert_eq!(actions, vec![Action::LaunchCampaign { id: 9 }]);
    }
}
