use crate::meeting::{Analysis, Meeting, MeetingListItem, MeetingStatus};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};

/// A meeting as held by the stub backend
#[derive(Debug, Clone)]
pub struct StoredMeeting {
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub status: MeetingStatus,
    pub analysis: Option<Analysis>,
}

impl StoredMeeting {
    pub fn to_meeting(&self, id: &str) -> Meeting {
        Meeting {
            id: id.to_string(),
            title: self.title.clone(),
            content: self.content.clone(),
            analysis: self.analysis.clone(),
            created_at: self.created_at,
            status: self.status,
        }
    }

    pub fn to_list_item(&self, id: &str) -> MeetingListItem {
        MeetingListItem {
            id: id.to_string(),
            title: self.title.clone(),
            created_at: self.created_at,
            status: self.status,
        }
    }
}

/// Shared state for the stub handlers
#[derive(Clone)]
pub struct StubState {
    /// Stored meetings (meeting_id → meeting)
    pub meetings: Arc<RwLock<HashMap<String, StoredMeeting>>>,

    /// Meeting ids waiting for analysis
    pub queue: mpsc::UnboundedSender<String>,
}

impl StubState {
    /// Create the state and the receiving end of the analysis queue
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (queue, rx) = mpsc::unbounded_channel();
        (
            Self {
                meetings: Arc::new(RwLock::new(HashMap::new())),
                queue,
            },
            rx,
        )
    }
}
