//! Pure cell formatting for the entity tables.
//!
//! Every field coming from the server may be absent; these helpers turn each
//! one into display text with a stable placeholder, so a sparse entity renders
//! as a complete row instead of an error.

use serde_json::Value;

use crate::api::types::{Campaign, Message, Segment, Template, User};

const TRUNCATE_AT: usize = 50;

/// Format a server timestamp for display. `None` renders as "N/A"; a string
/// that does not parse is shown verbatim rather than dropped.
pub fn format_date(raw: Option<&str>, format: &str) -> String {
    let Some(raw) = raw else {
        return "N/A".to_string();
    };
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.format(format).to_string();
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(raw, fmt) {
            return naive.format(format).to_string();
        }
    }
    raw.to_string()
}

/// Cap long free text (template bodies, JSON documents) at a fixed width.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{cut}...")
}

fn json_compact(value: Option<&Value>) -> String {
    match value {
        Some(v) => serde_json::to_string(v).unwrap_or_else(|_| "{}".to_string()),
        None => "{}".to_string(),
    }
}

pub fn campaign_name(c: &Campaign) -> String {
    c.name.clone().unwrap_or_else(|| "Unnamed Campaign".to_string())
}

pub fn campaign_template(c: &Campaign) -> String {
    match c.template_id {
        Some(id) => id.to_string(),
        None => "No template".to_string(),
    }
}

pub fn campaign_segment(c: &Campaign) -> String {
    match c.segment_id {
        Some(id) => id.to_string(),
        None => "No segment".to_string(),
    }
}

/// Missing status displays as "draft", but launch eligibility is decided by
/// [`Campaign::is_draft`] on the actual field, so a status-less campaign is
/// shown as draft without being launchable.
pub fn campaign_status(c: &Campaign) -> &str {
    c.status.as_deref().unwrap_or("draft")
}

pub fn campaign_schedule(c: &Campaign, date_format: &str) -> String {
    match c.scheduled_at.as_deref() {
        Some(raw) => format_date(Some(raw), date_format),
        None => "Immediate".to_string(),
    }
}

pub fn campaign_actions(c: &Campaign) -> &'static str {
    if c.is_draft() {
        "View  Launch"
    } else {
        "View"
    }
}

pub fn template_name(t: &Template) -> String {
    t.name.clone().unwrap_or_else(|| "Unnamed Template".to_string())
}

pub fn template_body(t: &Template) -> String {
    truncate(t.body.as_deref().unwrap_or(""), TRUNCATE_AT)
}

pub fn segment_name(s: &Segment) -> String {
    s.name.clone().unwrap_or_else(|| "Unnamed Segment".to_string())
}

pub fn segment_definition(s: &Segment) -> String {
    truncate(&json_compact(s.definition.as_ref()), TRUNCATE_AT)
}

pub fn user_phone(u: &User) -> String {
    u.phone.clone().unwrap_or_else(|| "No phone".to_string())
}

pub fn user_attributes(u: &User) -> String {
    truncate(&json_compact(u.attributes.as_ref()), TRUNCATE_AT)
}

pub fn user_consent(u: &User) -> String {
    truncate(&json_compact(u.consent.as_ref()), TRUNCATE_AT)
}

pub fn message_campaign(m: &Message) -> String {
    match m.campaign_id {
        Some(id) => id.to_string(),
        None => "No campaign".to_string(),
    }
}

pub fn message_user(m: &Message) -> String {
    match m.user_id {
        Some(id) => id.to_string(),
        None => "No user".to_string(),
    }
}

pub fn message_state(m: &Message) -> &str {
    m.state.as_deref().unwrap_or("unknown")
}

pub fn message_provider_sid(m: &Message) -> String {
    m.provider_sid.clone().unwrap_or_else(|| "Not sent".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::parse_collection;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(None, "%Y-%m-%d %H:%M"), "N/A");
        assert_eq!(
            format_date(Some("2024-06-01T09:30:00Z"), "%Y-%m-%d %H:%M"),
            "2024-06-01 09:30"
        );
        // Unparseable timestamps pass through verbatim
        assert_eq!(format_date(Some("soonish"), "%Y-%m-%d %H:%M"), "soonish");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 50), "short");
        let long = "x".repeat(60);
        let cut = truncate(&long, 50);
        assert_eq!(cut.len(), 53);
        assert!(cut.ends_with("..."));
        // Exactly at the limit stays untouched
        assert_eq!(truncate(&"y".repeat(50), 50), "y".repeat(50));
    }

    #[test]
    fn test_sparse_campaign_renders_with_placeholders() {
        // A campaign carrying only an id still yields a complete row
        let campaigns: Vec<Campaign> = parse_collection(r#"[{"id": 42}]"#).unwrap();
        let c = &campaigns[0];
        assert_eq!(campaign_name(c), "Unnamed Campaign");
        assert_eq!(campaign_template(c), "No template");
        assert_eq!(campaign_segment(c), "No segment");
        assert_eq!(campaign_status(c), "draft");
        assert_eq!(campaign_schedule(c, "%Y-%m-%d %H:%M"), "Immediate");
        assert_eq!(format_date(c.created_at.as_deref(), "%Y-%m-%d %H:%M"), "N/A");
        // Displayed as draft, but not launchable without a real status
        assert!(!c.is_draft());
        assert_eq!(campaign_actions(c), "View");
    }

    #[test]
    fn test_draft_campaign_offers_launch() {
        let campaigns: Vec<Campaign> =
            parse_collection(r#"[{"id":1,"status":"draft"},{"id":2,"status":"sent"}]"#).unwrap();
        assert_eq!(campaign_actions(&campaigns[0]), "View  Launch");
        assert_eq!(campaign_actions(&campaigns[1]), "View");
    }

    #[test]
    fn test_sparse_message_and_user_placeholders() {
        let messages: Vec<Message> = parse_collection(r#"[{"id": 9}]"#).unwrap();
        let m = &messages[0];
        assert_eq!(message_state(m), "unknown");
        assert_eq!(message_provider_sid(m), "Not sent");
        assert_eq!(message_campaign(m), "No campaign");
        assert_eq!(message_user(m), "No user");

        let users: Vec<User> = parse_collection(r#"[{"id": 3}]"#).unwrap();
        let u = &users[0];
        assert_eq!(user_phone(u), "No phone");
        assert_eq!(user_attributes(u), "{}");
        assert_eq!(user_consent(u), "{}");
    }

    #[test]
    fn test_long_json_documents_are_truncated() {
        let body = format!(r#"[{{"id":1,"definition":{{"k":"{}"}}}}]"#, "v".repeat(80));
        let segments: Vec<Segment> = parse_collection(&body).unwrap();
        let cell = segment_definition(&segments[0]);
        assert!(cell.ends_with("..."));
        assert_eq!(cell.chars().count(), 53);
    }
}
