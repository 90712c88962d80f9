mod api;
mod app;
mod config;
mod logging;
mod ui;

use crate::api::ApiClient;
use crate::app::action::Action;
use crate::app::event::{ApiContext, ApiEvent, AppEvent, CreatedEntity};
use crate::app::handler;
use crate::app::state::AppState;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    logging::init()?;
    let cfg = config::load_config()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let api = ApiClient::new(cfg.api.base_url.clone());
    let mut state = AppState::new(cfg.clone());

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task (toast expiry and redraw pacing)
    let tick_tx = event_tx.clone();
    let tick_rate = cfg.ui.tick_rate_ms;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_millis(tick_rate));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // The dashboard is the landing view; load it immediately
    dispatch(
        Action::LoadDashboard {
            generation: state.generations.bump_dashboard(),
        },
        &api,
        &event_tx,
    );

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            if action == Action::Quit {
                state.should_quit = true;
                continue;
            }
            dispatch(action, &api, &event_tx);
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}

/// Run one network action on a background task. The task reports back with a
/// single [`ApiEvent`]; it never touches state directly.
fn dispatch(action: Action, api: &ApiClient, tx: &mpsc::UnboundedSender<AppEvent>) {
    let api = api.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let event = run_action(action, &api).await;
        let _ = tx.send(AppEvent::Api(event));
    });
}

async fn run_action(action: Action, api: &ApiClient) -> ApiEvent {
    match action {
        Action::LoadDashboard { generation } => {
            // All four collections together; one failure fails the whole load
            let result = tokio::try_join!(
                api.list_campaigns(),
                api.list_users(),
                api.list_templates(),
                api.list_messages(None),
            );
            match result {
                Ok((campaigns, users, templates, messages)) => ApiEvent::DashboardLoaded {
                    generation,
                    campaigns,
                    users,
                    templates,
                    messages,
                },
                Err(error) => ApiEvent::Failed {
                    context: ApiContext::Dashboard,
                    error,
                },
            }
        }
        Action::LoadCampaigns { generation } => match api.list_campaigns().await {
            Ok(campaigns) => ApiEvent::CampaignsLoaded {
                generation,
                campaigns,
            },
            Err(error) => ApiEvent::Failed {
                context: ApiContext::Campaigns,
                error,
            },
        },
        Action::LoadTemplates { generation } => match api.list_templates().await {
            Ok(templates) => ApiEvent::TemplatesLoaded {
                generation,
                templates,
            },
            Err(error) => ApiEvent::Failed {
                context: ApiContext::Templates,
                error,
            },
        },
        Action::LoadSegments { generation } => match api.list_segments().await {
            Ok(segments) => ApiEvent::SegmentsLoaded {
                generation,
                segments,
            },
            Err(error) => ApiEvent::Failed {
                context: ApiContext::Segments,
                error,
            },
        },
        Action::LoadUsers { generation } => match api.list_users().await {
            Ok(users) => ApiEvent::UsersLoaded { generation, users },
            Err(error) => ApiEvent::Failed {
                context: ApiContext::Users,
                error,
            },
        },
        Action::LoadMessages {
            generation,
            campaign_id,
        } => match api.list_messages(campaign_id).await {
            Ok(messages) => ApiEvent::MessagesLoaded {
                generation,
                messages,
                filtered: campaign_id.is_some(),
            },
            Err(error) => ApiEvent::Failed {
                context: ApiContext::Messages,
                error,
            },
        },
        Action::LoadTemplateOptions => match api.list_templates().await {
            Ok(templates) => ApiEvent::TemplateOptionsLoaded { templates },
            Err(error) => ApiEvent::Failed {
                context: ApiContext::TemplateOptions,
                error,
            },
        },
        Action::LoadSegmentOptions => match api.list_segments().await {
            Ok(segments) => ApiEvent::SegmentOptionsLoaded { segments },
            Err(error) => ApiEvent::Failed {
                context: ApiContext::SegmentOptions,
                error,
            },
        },
        Action::CreateCampaign(payload) => match api.create_campaign(&payload).await {
            Ok(()) => ApiEvent::Created {
                entity: CreatedEntity::Campaign,
            },
            Err(error) => ApiEvent::Failed {
                context: ApiContext::CreateCampaign,
                error,
            },
        },
        Action::CreateTemplate(payload) => match api.create_template(&payload).await {
            Ok(()) => ApiEvent::Created {
                entity: CreatedEntity::Template,
            },
            Err(error) => ApiEvent::Failed {
                context: ApiContext::CreateTemplate,
                error,
            },
        },
        Action::CreateSegment(payload) => match api.create_segment(&payload).await {
            Ok(()) => ApiEvent::Created {
                entity: CreatedEntity::Segment,
            },
            Err(error) => ApiEvent::Failed {
                context: ApiContext::CreateSegment,
                error,
            },
        },
        Action::CreateUser(payload) => match api.create_user(&payload).await {
            Ok(()) => ApiEvent::Created {
                entity: CreatedEntity::User,
            },
            Err(error) => ApiEvent::Failed {
                context: ApiContext::CreateUser,
                error,
            },
        },
        Action::LaunchCampaign { id } => match api.launch_campaign(id).await {
            Ok(()) => ApiEvent::CampaignLaunched { id },
            Err(error) => ApiEvent::Failed {
                context: ApiContext::LaunchCampaign,
                error,
            },
        },
        Action::UploadUsers { path } => match api.upload_users(&path).await {
            Ok(()) => ApiEvent::UsersUploaded,
            Err(error) => ApiEvent::Failed {
                context: ApiContext::UploadUsers,
                error,
            },
        },
        Action::SendTestMessage(payload) => match api.send_test_message(&payload).await {
            Ok(()) => ApiEvent::TestMessageSent,
            Err(error) => ApiEvent::Failed {
                context: ApiContext::TestSend,
                error,
            },
        },
        // Handled in the event loop, never dispatched
        Action::Quit => unreachable!("Quit is handled by the event loop"),
    }
}
