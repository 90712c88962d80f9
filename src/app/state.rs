use std::time::{Duration, Instant};

use crate::api::types::{Campaign, Message, Segment, Template, User};
use crate::app::event::Generation;
use crate::config::AppConfig;

/// Top-level views. Exactly one is active at a time; the enum makes the
/// single-active invariant structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Campaigns,
    Templates,
    Segments,
    Users,
    Messages,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Dashboard,
        Tab::Campaigns,
        Tab::Templates,
        Tab::Segments,
        Tab::Users,
        Tab::Messages,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Campaigns => "Campaigns",
            Tab::Templates => "Templates",
            Tab::Segments => "Segments",
            Tab::Users => "Users",
            Tab::Messages => "Messages",
        }
    }

    pub fn next(self) -> Tab {
        let idx = Tab::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Tab::ALL[(idx + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        let idx = Tab::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Tab::ALL[(idx + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// Sub-tabs inside the Users view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsersPane {
    Directory,
    BulkUpload,
}

/// Sub-tabs inside the Messages view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessagesPane {
    Delivery,
    TestSend,
}

/// The cached entity collections. Each slice is replaced wholesale by its
/// loader; there is no partial merging.
#[derive(Debug, Default)]
pub struct Store {
    pub campaigns: Vec<Campaign>,
    pub templates: Vec<Template>,
    pub segments: Vec<Segment>,
    pub users: Vec<User>,
    pub messages: Vec<Message>,
}

/// Summary counts shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardCounts {
    pub campaigns: usize,
    pub users: usize,
    pub templates: usize,
    pub messages: usize,
}

/// Dashboard view data, updated only when all four constituent fetches
/// succeed. A failed dashboard load leaves the previous snapshot intact.
#[derive(Debug, Default)]
pub struct DashboardSnapshot {
    pub counts: Option<DashboardCounts>,
    pub recent_campaigns: Vec<Campaign>,
}

/// Per-loader generation counters (see [`crate::app::event::Generation`]).
#[derive(Debug, Default)]
pub struct Generations {
    pub dashboard: Generation,
    pub campaigns: Generation,
    pub templates: Generation,
    pub segments: Generation,
    pub users: Generation,
    pub messages: Generation,
}

impl Generations {
    pub fn bump_dashboard(&mut self) -> Generation {
        self.dashboard += 1;
        self.dashboard
    }
    pub fn bump_campaigns(&mut self) -> Generation {
        self.campaigns += 1;
        self.campaigns
    }
    pub fn bump_templates(&mut self) -> Generation {
        self.templates += 1;
        self.templates
    }
    pub fn bump_segments(&mut self) -> Generation {
        self.segments += 1;
        self.segments
    }
    pub fn bump_users(&mut self) -> Generation {
        self.users += 1;
        self.users
    }
    pub fn bump_messages(&mut self) -> Generation {
        self.messages += 1;
        self.messages
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Transient notification. A newer toast replaces the current one; ticks
/// hide it once the deadline passes.
#[derive(Debug)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub deadline: Instant,
}

/// Single-line text field editor with a char-boundary cursor.
#[derive(Debug, Default)]
pub struct FieldState {
    pub text: String,
    pub cursor: usize,
}

impl FieldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// Cursor into a rendered table.
#[derive(Debug, Default)]
pub struct TableCursor {
    pub selected: usize,
}

impl TableCursor {
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// Keep the selection valid after a slice replacement.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

/// When a campaign goes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScheduleType {
    #[default]
    Immediate,
    Scheduled,
}

impl ScheduleType {
    pub fn toggle(self) -> ScheduleType {
        match self {
            ScheduleType::Immediate => ScheduleType::Scheduled,
            ScheduleType::Scheduled => ScheduleType::Immediate,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScheduleType::Immediate => "immediate",
            ScheduleType::Scheduled => "scheduled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CampaignField {
    #[default]
    Name,
    Template,
    Segment,
    Topic,
    ScheduleType,
    ScheduledAt,
}

impl CampaignField {
    pub const ALL: [CampaignField; 6] = [
        CampaignField::Name,
        CampaignField::Template,
        CampaignField::Segment,
        CampaignField::Topic,
        CampaignField::ScheduleType,
        CampaignField::ScheduledAt,
    ];
}

/// Form state for the create-campaign modal. Dropdown options arrive
/// asynchronously after the modal opens.
#[derive(Debug, Default)]
pub struct CampaignForm {
    pub name: FieldState,
    pub topic: FieldState,
    pub template_options: Vec<(i64, String)>,
    pub template_selected: Option<usize>,
    pub segment_options: Vec<(i64, String)>,
    pub segment_selected: Option<usize>,
    pub schedule_type: ScheduleType,
    pub scheduled_at: FieldState,
    pub focus: CampaignField,
}

impl CampaignForm {
    pub fn selected_template_id(&self) -> Option<i64> {
        self.template_selected
            .and_then(|i| self.template_options.get(i))
            .map(|(id, _)| *id)
    }

    pub fn selected_segment_id(&self) -> Option<i64> {
        self.segment_selected
            .and_then(|i| self.segment_options.get(i))
            .map(|(id, _)| *id)
    }

    pub fn focus_next(&mut self) {
        let idx = CampaignField::ALL
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        self.focus = CampaignField::ALL[(idx + 1) % CampaignField::ALL.len()];
    }

    pub fn focus_prev(&mut self) {
        let idx = CampaignField::ALL
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        self.focus = CampaignField::ALL[(idx + CampaignField::ALL.len() - 1) % CampaignField::ALL.len()];
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateField {
    Name,
    Channel,
    Locale,
    Body,
    Placeholders,
}

impl TemplateField {
    pub const ALL: [TemplateField; 5] = [
        TemplateField::Name,
        TemplateField::Channel,
        TemplateField::Locale,
        TemplateField::Body,
        TemplateField::Placeholders,
    ];
}

#[derive(Debug)]
pub struct TemplateForm {
    pub name: FieldState,
    pub channel: FieldState,
    pub locale: FieldState,
    pub body: FieldState,
    pub placeholders: FieldState,
    pub focus: TemplateField,
}

impl Default for TemplateForm {
    fn default() -> Self {
        let mut channel = FieldState::new();
        channel.text = "whatsapp".to_string();
        channel.move_end();
        let mut locale = FieldState::new();
        locale.text = "en".to_string();
        locale.move_end();
        Self {
            name: FieldState::new(),
            channel,
            locale,
            body: FieldState::new(),
            placeholders: FieldState::new(),
            focus: TemplateField::Name,
        }
    }
}

impl TemplateForm {
    pub fn focus_next(&mut self) {
        let idx = TemplateField::ALL
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        self.focus = TemplateField::ALL[(idx + 1) % TemplateField::ALL.len()];
    }

    pub fn focus_prev(&mut self) {
        let idx = TemplateField::ALL
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        self.focus = TemplateField::ALL[(idx + TemplateField::ALL.len() - 1) % TemplateField::ALL.len()];
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentField {
    #[default]
    Name,
    Definition,
}

#[derive(Debug, Default)]
pub struct SegmentForm {
    pub name: FieldState,
    pub definition: FieldState,
    pub focus: SegmentField,
}

impl SegmentForm {
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            SegmentField::Name => SegmentField::Definition,
            SegmentField::Definition => SegmentField::Name,
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserField {
    #[default]
    Phone,
    Attributes,
    Consent,
}

impl UserField {
    pub const ALL: [UserField; 3] = [UserField::Phone, UserField::Attributes, UserField::Consent];
}

#[derive(Debug, Default)]
pub struct UserForm {
    pub phone: FieldState,
    pub attributes: FieldState,
    pub consent: FieldState,
    pub focus: UserField,
}

impl UserForm {
    pub fn focus_next(&mut self) {
        let idx = UserField::ALL
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        self.focus = UserField::ALL[(idx + 1) % UserField::ALL.len()];
    }

    pub fn focus_prev(&mut self) {
        let idx = UserField::ALL
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        self.focus = UserField::ALL[(idx + UserField::ALL.len() - 1) % UserField::ALL.len()];
    }
}

/// Modal dialogs. Form state lives inside the variant, so closing a modal
/// drops (resets) its fields.
#[derive(Debug, Default)]
pub enum Modal {
    #[default]
    None,
    CreateCampaign(CampaignForm),
    CreateTemplate(TemplateForm),
    CreateSegment(SegmentForm),
    CreateUser(UserForm),
}

impl Modal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestField {
    Phone,
    Message,
}

pub struct AppState {
    pub config: AppConfig,
    pub store: Store,
    pub dashboard: DashboardSnapshot,
    pub generations: Generations,

    pub tab: Tab,
    pub users_pane: UsersPane,
    pub messages_pane: MessagesPane,
    pub modal: Modal,
    pub toast: Option<Toast>,

    pub campaigns_cursor: TableCursor,
    pub templates_cursor: TableCursor,
    pub segments_cursor: TableCursor,
    pub users_cursor: TableCursor,
    pub messages_cursor: TableCursor,

    /// Campaign filter options for the Messages view: (id, display name).
    pub message_filter_options: Vec<(i64, String)>,
    /// Index into `message_filter_options`; `None` means all campaigns.
    pub message_filter: Option<usize>,

    /// Bulk-upload pane: path to the CSV file.
    pub upload_path: FieldState,

    /// Test-send pane.
    pub test_phone: FieldState,
    pub test_message: FieldState,
    pub test_focus: TestField,

    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            store: Store::default(),
            dashboard: DashboardSnapshot::default(),
            generations: Generations::default(),
            tab: Tab::Dashboard,
            users_pane: UsersPane::Directory,
            messages_pane: MessagesPane::Delivery,
            modal: Modal::None,
            toast: None,
            campaigns_cursor: TableCursor::default(),
            templates_cursor: TableCursor::default(),
            segments_cursor: TableCursor::default(),
            users_cursor: TableCursor::default(),
            messages_cursor: TableCursor::default(),
            message_filter_options: Vec::new(),
            message_filter: None,
            upload_path: FieldState::new(),
            test_phone: FieldState::new(),
            test_message: FieldState::new(),
            test_focus: TestField::Phone,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.raise_toast(message.into(), Severity::Success);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.raise_toast(message.into(), Severity::Error);
    }

    fn raise_toast(&mut self, message: String, severity: Severity) {
        let deadline =
            Instant::now() + Duration::from_millis(self.config.ui.toast_duration_ms);
        self.toast = Some(Toast {
            message,
            severity,
            deadline,
        });
        self.dirty = true;
    }

    /// Hide the toast once its deadline has passed. Called on every tick.
    pub fn expire_toast(&mut self) {
        if let Some(toast) = &self.toast {
            if Instant::now() >= toast.deadline {
                self.toast = None;
                self.dirty = true;
            }
        }
    }

    pub fn close_modals(&mut self) {
        self.modal = Modal::None;
        self.dirty = true;
    }

    /// Rebuild the Messages-view campaign filter options from the current
    /// campaign slice. Only called after unfiltered loads, so an active
    /// filter selection is never reset out from under the operator.
    pub fn rebuild_message_filter_options(&mut self) {
        self.message_filter_options = self
            .store
            .campaigns
            .iter()
            .map(|c| {
                let label = c
                    .name
                    .clone()
                    .unwrap_or_else(|| format!("Campaign {}", c.id));
                (c.id, label)
            })
            .collect();
    }

    /// Campaign id selected in the Messages filter, if any.
    pub fn message_filter_id(&self) -> Option<i64> {
        self.message_filter
            .and_then(|i| self.message_filter_options.get(i))
            .map(|(id, _)| *id)
    }
}
