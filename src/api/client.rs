use super::{ApiError, MeetingApi};
use crate::config::ApiConfig;
use crate::meeting::{
    CreateMeetingRequest, CreateMeetingResponse, Meeting, MeetingListItem, MeetingsEnvelope,
};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// reqwest-backed implementation of [`MeetingApi`]
#[derive(Debug, Clone)]
pub struct MeetingClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl MeetingClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and turn every failure into an [`ApiError`]
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            warn!("Request to meetings API failed: {}", e);
            ApiError::from_transport(&e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = error_detail(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("").to_string());

        warn!("Meetings API responded with {}: {}", status, detail);
        Err(ApiError::from_status(status.as_u16(), detail))
    }

    async fn json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|e| {
            warn!("Failed to decode meetings API response: {}", e);
            ApiError::from_transport(&e)
        })
    }
}

/// Detail text for an error body: the `error` field of a JSON body, else the text itself
fn error_detail(body: &str) -> Option<String> {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        return Some(parsed.error);
    }

    let text = body.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[async_trait]
impl MeetingApi for MeetingClient {
    async fn list_all(&self) -> Result<Vec<MeetingListItem>, ApiError> {
        debug!("GET /meetings");
        let response = self.send(self.client.get(self.url("/meetings"))).await?;
        let envelope: MeetingsEnvelope = Self::json(response).await?;
        Ok(envelope.meetings)
    }

    async fn get_by_id(&self, id: &str) -> Result<Meeting, ApiError> {
        debug!("GET /meetings/{}", id);
        let url = self.url(&format!("/meetings/{}", id));
        let response = self.send(self.client.get(url)).await?;
        let mut meeting: Meeting = Self::json(response).await?;

        if meeting.id.is_empty() {
            meeting.id = id.to_string();
        }

        Ok(meeting)
    }

    async fn create(
        &self,
        request: &CreateMeetingRequest,
    ) -> Result<CreateMeetingResponse, ApiError> {
        debug!("POST /meetings ({})", request.title);
        let response = self
            .send(self.client.post(self.url("/meetings")).json(request))
            .await?;
        Self::json(response).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        debug!("DELETE /meetings/{}", id);
        let url = self.url(&format!("/meetings/{}", id));
        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_prefers_json_field() {
        assert_eq!(
            error_detail(r#"{"error": "Meeting not found"}"#).as_deref(),
            Some("Meeting not found")
        );
        assert_eq!(
            error_detail("Missing JSON body\n").as_deref(),
            Some("Missing JSON body")
        );
        assert_eq!(error_detail("   "), None);
    }

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let config = ApiConfig {
            base_url: "http://localhost:5000/".to_string(),
            timeout_secs: 5,
        };
        let client = MeetingClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(client.url("/meetings"), "http://localhost:5000/meetings");
    }
}
