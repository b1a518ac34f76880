use super::state::{StoredMeeting, StubState};
use crate::meeting::{MeetingListItem, MeetingStatus, MeetingsEnvelope};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub meeting_uuid: String,
    pub title: String,
    pub status: MeetingStatus,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn not_found() -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Meeting not found".to_string(),
        }),
    )
        .into_response()
}

/// A non-blank string field of the request body
fn required_text(body: &Value, field: &str) -> Option<String> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /meetings
/// Store a meeting and queue it for analysis
pub async fn add_meeting(
    State(state): State<StubState>,
    body: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            warn!("Rejected meeting body: {}", rejection);
            return (StatusCode::BAD_REQUEST, "Missing JSON body").into_response();
        }
    };

    let Some(title) = required_text(&body, "title") else {
        return (
            StatusCode::BAD_REQUEST,
            "Missing or invalid title in provided JSON",
        )
            .into_response();
    };

    let Some(content) = required_text(&body, "content") else {
        return (
            StatusCode::BAD_REQUEST,
            "Missing or invalid content in provided JSON",
        )
            .into_response();
    };

    let meeting_id = uuid::Uuid::new_v4().to_string();

    {
        let mut meetings = state.meetings.write().await;
        meetings.insert(
            meeting_id.clone(),
            StoredMeeting {
                title: title.clone(),
                content,
                created_at: Utc::now(),
                status: MeetingStatus::Processing,
                analysis: None,
            },
        );
    }

    if state.queue.send(meeting_id.clone()).is_err() {
        warn!("Analysis worker is gone; meeting {} stays processing", meeting_id);
    }

    info!("Meeting {} added for analysis", meeting_id);

    (
        StatusCode::CREATED,
        Json(CreatedResponse {
            meeting_uuid: meeting_id,
            title,
            status: MeetingStatus::Processing,
        }),
    )
        .into_response()
}

/// GET /meetings/:meeting_id
pub async fn get_meeting(
    State(state): State<StubState>,
    Path(meeting_id): Path<String>,
) -> impl IntoResponse {
    let meetings = state.meetings.read().await;

    match meetings.get(&meeting_id) {
        Some(meeting) => (StatusCode::OK, Json(meeting.to_meeting(&meeting_id))).into_response(),
        None => not_found(),
    }
}

/// GET /meetings
/// List all meetings, newest first
pub async fn list_meetings(State(state): State<StubState>) -> impl IntoResponse {
    let meetings = state.meetings.read().await;

    let mut items: Vec<MeetingListItem> = meetings
        .iter()
        .map(|(id, meeting)| meeting.to_list_item(id))
        .collect();
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    (StatusCode::OK, Json(MeetingsEnvelope { meetings: items }))
}

/// DELETE /meetings/:meeting_id
pub async fn delete_meeting(
    State(state): State<StubState>,
    Path(meeting_id): Path<String>,
) -> impl IntoResponse {
    let removed = {
        let mut meetings = state.meetings.write().await;
        meetings.remove(&meeting_id)
    };

    match removed {
        Some(_) => {
            info!("Meeting {} deleted", meeting_id);
            StatusCode::NO_CONTENT.into_response()
        }
        None => not_found(),
    }
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
