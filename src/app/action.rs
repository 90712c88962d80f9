use std::path::PathBuf;

use crate::api::types::{NewCampaign, NewSegment, NewTemplate, NewUser, TestSend};
use crate::app::event::Generation;

/// Commands produced by the event handler and executed by the main loop.
/// Every network operation goes through one of these; nothing in the handler
/// touches the wire directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    LoadDashboard { generation: Generation },
    LoadCampaigns { generation: Generation },
    LoadTemplates { generation: Generation },
    LoadSegments { generation: Generation },
    LoadUsers { generation: Generation },
    LoadMessages { generation: Generation, campaign_id: Option<i64> },

    /// Refresh the campaign-modal dropdowns.
    LoadTemplateOptions,
    LoadSegmentOptions,

    CreateCampaign(NewCampaign),
    CreateTemplate(NewTemplate),
    CreateSegment(NewSegment),
    CreateUser(NewUser),
    LaunchCampaign { id: i64 },
    UploadUsers { path: PathBuf },
    SendTestMessage(TestSend),

    Quit,
}
