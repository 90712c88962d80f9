mod campaigns;
mod dashboard;
mod fields;
mod layout;
mod messages;
mod modal;
mod rows;
mod segments;
mod sidebar;
mod status_bar;
mod table;
mod theme;
mod toast;
mod templates;
mod users;

use ratatui::prelude::*;

use crate::app::state::{AppState, Tab};

/// Paint one full frame from the current state. Rendering is a pure function
/// of state; repeated calls with the same state produce the same frame.
pub fn render(frame: &mut Frame, state: &AppState) {
    let app_layout = layout::compute_layout(frame.area());

    sidebar::render(frame, app_layout.sidebar, state);
    match state.tab {
        Tab::Dashboard => dashboard::render(frame, app_layout.content, state),
        Tab::Campaigns => campaigns::render(frame, app_layout.content, state),
        Tab::Templates => templates::render(frame, app_layout.content, state),
        Tab::Segments => segments::render(frame, app_layout.content, state),
        Tab::Users => users::render(frame, app_layout.content, state),
        Tab::Messages => messages::render(frame, app_layout.content, state),
    }
    status_bar::render(frame, app_layout.status_bar, state);

    // Overlays
    modal::render(frame, state);
    toast::render(frame, state);
}
