//! REST client for the campaign platform backend.
//!
//! Uses reqwest to call the versioned JSON API. Every method maps onto one
//! documented endpoint; non-2xx responses become [`ApiError::Status`] without
//! any structured error-body parsing.

use std::path::Path;

use reqwest::multipart;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::types::{
    self, Campaign, Message, NewCampaign, NewSegment, NewTemplate, NewUser, Segment, Template,
    TestSend, User,
};

/// Failure taxonomy for API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (DNS, connect, transport).
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("API error: {status}")]
    Status { status: u16 },

    /// The response body was not the JSON we expected.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A local file for an upload could not be read.
    #[error("could not read upload file: {0}")]
    Upload(#[from] std::io::Error),
}

/// API client for the campaign platform.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the given base URL (e.g.
    /// `http://localhost:5000/api/v1`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Check HTTP response status, returning an error for non-success codes.
    fn check_status(resp: &reqwest::Response) -> Result<(), ApiError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    async fn get_collection<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let resp = self.http.get(self.url(path)).send().await?;
        Self::check_status(&resp)?;
        let body = resp.text().await?;
        Ok(types::parse_collection(&body)?)
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        Self::check_status(&resp)?;
        Ok(())
    }

    pub async fn list_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        self.get_collection("/campaigns").await
    }

    pub async fn list_templates(&self) -> Result<Vec<Template>, ApiError> {
        self.get_collection("/templates").await
    }

    pub async fn list_segments(&self) -> Result<Vec<Segment>, ApiError> {
        self.get_collection("/segments").await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_collection("/users").await
    }

    /// List messages, optionally restricted to one campaign.
    pub async fn list_messages(&self, campaign_id: Option<i64>) -> Result<Vec<Message>, ApiError> {
        let path = match campaign_id {
            Some(id) => format!("/messages?campaign_id={id}"),
            None => "/messages".to_string(),
        };
        self.get_collection(&path).await
    }

    pub async fn create_campaign(&self, payload: &NewCampaign) -> Result<(), ApiError> {
        self.post_json("/campaigns", payload).await
    }

    pub async fn create_template(&self, payload: &NewTemplate) -> Result<(), ApiError> {
        self.post_json("/templates", payload).await
    }

    pub async fn create_segment(&self, payload: &NewSegment) -> Result<(), ApiError> {
        self.post_json("/segments", payload).await
    }

    pub async fn create_user(&self, payload: &NewUser) -> Result<(), ApiError> {
        self.post_json("/users", payload).await
    }

    /// Launch a draft campaign.
    pub async fn launch_campaign(&self, id: i64) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url(&format!("/campaigns/{id}/launch")))
            .send()
            .await?;
        Self::check_status(&resp)
    }

    pub async fn send_test_message(&self, payload: &TestSend) -> Result<(), ApiError> {
        self.post_json("/messages/test/send", payload).await
    }

    /// Bulk-upload users from a CSV file as a multipart request.
    pub async fn upload_users(&self, path: &Path) -> Result<(), ApiError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("users.csv")
            .to_string();
        let part = multipart::Part::bytes(bytes).file_name(file_name);
        let form = multipart::Form::new().part("file", part);
        let resp = self
            .http
            .post(self.url("/users/bulk"))
            .multipart(form)
            .send()
            .await?;
        Self::check_status(&resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let client = ApiClient::new("http://localhost:5000/api/v1/");
        assert_eq!(client.url("/campaigns"), "http://localhost:5000/api/v1/campaigns");
    }
}
