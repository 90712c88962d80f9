use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn table_header() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn row() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn row_selected() -> Style {
        Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    }

    pub fn muted() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn label() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn field() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn field_focused() -> Style {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    }

    pub fn nav_active() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn nav_inactive() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn stat_value() -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn toast_success() -> Style {
        Style::default().fg(Color::Black).bg(Color::Green)
    }

    pub fn toast_error() -> Style {
        Style::default().fg(Color::White).bg(Color::Red)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    /// Campaign lifecycle states as reported by the server. The set is open;
    /// anything unrecognized renders in the default row color.
    pub fn campaign_status(status: &str) -> Style {
        match status {
            "draft" => Style::default().fg(Color::Yellow),
            "scheduled" => Style::default().fg(Color::Cyan),
            "sending" => Style::default().fg(Color::Magenta),
            "sent" => Style::default().fg(Color::Green),
            "failed" => Style::default().fg(Color::Red),
            _ => Self::row(),
        }
    }

    pub fn message_state(state: &str) -> Style {
        match state {
            "queued" => Style::default().fg(Color::Yellow),
            "sent" => Style::default().fg(Color::Cyan),
            "delivered" => Style::default().fg(Color::Green),
            "failed" | "undelivered" => Style::default().fg(Color::Red),
            _ => Self::muted(),
        }
    }
}
