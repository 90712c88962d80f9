//! Entity models and request payloads for the campaign platform API.
//!
//! All entities are owned by the remote server; the console only holds
//! short-lived cached copies. Timestamps stay in the server's ISO-8601 string
//! form and are only formatted at render time. Status-like fields are open
//! sets (`String`) because the server is authoritative over their meaning.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An outbound messaging run targeting a segment with a template.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Campaign {
    pub id: i64,
    pub name: Option<String>,
    pub status: Option<String>,
    pub template_id: Option<i64>,
    pub segment_id: Option<i64>,
    pub topic: Option<String>,
    pub scheduled_at: Option<String>,
    pub created_at: Option<String>,
}

impl Campaign {
    /// Launching is only offered for campaigns the server reports as draft.
    pub fn is_draft(&self) -> bool {
        self.status.as_deref() == Some("draft")
    }
}

/// A reusable message body with channel/locale metadata.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Template {
    pub id: i64,
    pub name: Option<String>,
    pub channel: Option<String>,
    pub locale: Option<String>,
    pub body: Option<String>,
    pub placeholders: Option<Vec<String>>,
    pub created_at: Option<String>,
}

/// A named, server-evaluated filter over the user population.
/// The definition is an opaque document interpreted server-side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Segment {
    pub id: i64,
    pub name: Option<String>,
    pub definition: Option<Value>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: i64,
    pub phone: Option<String>,
    pub attributes: Option<Value>,
    pub consent: Option<Value>,
    pub created_at: Option<String>,
}

/// A single delivery attempt belonging to a campaign.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Message {
    pub id: i64,
    pub campaign_id: Option<i64>,
    pub user_id: Option<i64>,
    pub state: Option<String>,
    pub provider_sid: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCampaign {
    pub name: String,
    pub template_id: i64,
    pub segment_id: i64,
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTemplate {
    pub name: String,
    pub channel: String,
    pub locale: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholders: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSegment {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestSend {
    pub phone: String,
    pub message: String,
}

/// Parse a list-endpoint body into a collection.
///
/// The server may answer an empty collection as `[]`, `null`, or an empty
/// body; all three mean "no entities", never an error.
pub fn parse_collection<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, serde_json::Error> {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    serde_json::from_str(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_is_empty_collection() {
        let campaigns: Vec<Campaign> = parse_collection("").unwrap();
        assert!(campaigns.is_empty());
        let campaigns: Vec<Campaign> = parse_collection("  \n ").unwrap();
        assert!(campaigns.is_empty());
        let campaigns: Vec<Campaign> = parse_collection("null").unwrap();
        assert!(campaigns.is_empty());
        let campaigns: Vec<Campaign> = parse_collection("[]").unwrap();
        assert!(campaigns.is_empty());
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        assert!(parse_collection::<Campaign>("{not json").is_err());
        assert!(parse_collection::<Campaign>("{\"id\":1}").is_err());
    }

    #[test]
    fn test_campaign_deserializes_with_missing_optionals() {
        let campaigns: Vec<Campaign> = parse_collection(r#"[{"id": 7}]"#).unwrap();
        assert_eq!(campaigns.len(), 1);
        let c = &campaigns[0];
        assert_eq!(c.id, 7);
        assert!(c.name.is_none());
        assert!(c.status.is_none());
        assert!(!c.is_draft());
    }

    #[test]
    fn test_draft_campaign() {
        let body = r#"[{"id":1,"name":"Promo","status":"draft","template_id":5,
                        "segment_id":2,"created_at":"2024-01-01T00:00:00Z"}]"#;
        let campaigns: Vec<Campaign> = parse_collection(body).unwrap();
        let c = &campaigns[0];
        assert_eq!(c.name.as_deref(), Some("Promo"));
        assert_eq!(c.status.as_deref(), Some("draft"));
        assert!(c.is_draft());

        let sent: Vec<Campaign> =
            parse_collection(r#"[{"id":2,"status":"sent"}]"#).unwrap();
        assert!(!sent[0].is_draft());
    }

    #[test]
    fn test_payload_omits_absent_optionals() {
        let payload = NewSegment {
            name: "vips".into(),
            definition: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({"name": "vips"}));

        let payload = NewCampaign {
            name: "Promo".into(),
            template_id: 5,
            segment_id: 2,
            topic: "general".into(),
            scheduled_at: Some("2024-06-01T09:00:00Z".into()),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["scheduled_at"], "2024-06-01T09:00:00Z");
    }
}
