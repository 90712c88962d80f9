use crossterm::event::Event as CrosstermEvent;

use crate::api::types::{Campaign, Message, Segment, Template, User};
use crate::api::ApiError;

/// Monotonic per-loader counter. A load result is only applied when the
/// generation it was issued under is still the slice's current one, so a
/// superseded fetch that completes late cannot overwrite newer data.
pub type Generation = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// API request completed (successfully or not)
    Api(ApiEvent),

    /// Tick for UI refresh and toast expiry
    Tick,
}

/// Completion of a spawned API task. Loads carry the generation they were
/// issued under; the handler drops stale ones.
#[derive(Debug)]
pub enum ApiEvent {
    /// All four dashboard collections, delivered together (fork-join).
    DashboardLoaded {
        generation: Generation,
        campaigns: Vec<Campaign>,
        users: Vec<User>,
        templates: Vec<Template>,
        messages: Vec<Message>,
    },
    CampaignsLoaded {
        generation: Generation,
        campaigns: Vec<Campaign>,
    },
    TemplatesLoaded {
        generation: Generation,
        templates: Vec<Template>,
    },
    SegmentsLoaded {
        generation: Generation,
        segments: Vec<Segment>,
    },
    UsersLoaded {
        generation: Generation,
        users: Vec<User>,
    },
    MessagesLoaded {
        generation: Generation,
        messages: Vec<Message>,
        /// Whether the request carried a campaign filter. Unfiltered loads
        /// also resynchronize the filter options.
        filtered: bool,
    },

    /// Dropdown data for the campaign-creation modal.
    TemplateOptionsLoaded { templates: Vec<Template> },
    SegmentOptionsLoaded { segments: Vec<Segment> },

    Created { entity: CreatedEntity },
    CampaignLaunched { id: i64 },
    UsersUploaded,
    TestMessageSent,

    Failed { context: ApiContext, error: ApiError },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatedEntity {
    Campaign,
    Template,
    Segment,
    User,
}

/// Which operation a failure belongs to, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiContext {
    Dashboard,
    Campaigns,
    Templates,
    Segments,
    Users,
    Messages,
    TemplateOptions,
    SegmentOptions,
    CreateCampaign,
    CreateTemplate,
    CreateSegment,
    CreateUser,
    LaunchCampaign,
    UploadUsers,
    TestSend,
}

impl ApiContext {
    pub fn as_str(self) -> &'static str {
        match self {
            ApiContext::Dashboard => "dashboard",
            ApiContext::Campaigns => "campaigns",
            ApiContext::Templates => "templates",
            ApiContext::Segments => "segments",
            ApiContext::Users => "users",
            ApiContext::Messages => "messages",
            ApiContext::TemplateOptions => "template options",
            ApiContext::SegmentOptions => "segment options",
            ApiContext::CreateCampaign => "create campaign",
            ApiContext::CreateTemplate => "create template",
            ApiContext::CreateSegment => "create segment",
            ApiContext::CreateUser => "create user",
            ApiContext::LaunchCampaign => "launch campaign",
            ApiContext::UploadUsers => "upload users",
            ApiContext::TestSend => "test send",
        }
    }
}
