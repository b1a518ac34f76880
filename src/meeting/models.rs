use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Analysis state of a meeting on the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    Processing,
    Completed,
    Failed,

    /// Any status string this client does not know about
    #[serde(other)]
    Unknown,
}

impl MeetingStatus {
    /// `completed` and `failed` never transition again
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MeetingStatus::Processing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingStatus::Processing => "processing",
            MeetingStatus::Completed => "completed",
            MeetingStatus::Failed => "failed",
            MeetingStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MeetingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Backend-produced analysis, present once processing has finished
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub summary: String,

    #[serde(default)]
    pub action_items: Vec<String>,

    #[serde(default)]
    pub participants: Vec<String>,
}

/// A full meeting record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    /// The backend omits the id from `GET /meetings/{id}`; the client fills it in
    #[serde(default)]
    pub id: String,

    pub title: String,

    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,

    pub created_at: DateTime<Utc>,

    pub status: MeetingStatus,
}

/// Projection of a meeting used by `GET /meetings`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingListItem {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub status: MeetingStatus,
}

/// Response envelope of `GET /meetings`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeetingsEnvelope {
    pub meetings: Vec<MeetingListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMeetingRequest {
    pub title: String,
    pub content: String,
}

/// Response of `POST /meetings`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMeetingResponse {
    #[serde(alias = "meeting_uuid")]
    pub id: String,
    pub title: String,
    pub status: MeetingStatus,
}

impl From<&Meeting> for MeetingListItem {
    fn from(meeting: &Meeting) -> Self {
        Self {
            id: meeting.id.clone(),
            title: meeting.title.clone(),
            created_at: meeting.created_at,
            status: meeting.status,
        }
    }
}
