// Shared test doubles for the view tests

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use meeting_desk::confirm::{ConfirmationDialog, DialogAnchor};
use meeting_desk::{
    Analysis, ApiError, CreateMeetingRequest, CreateMeetingResponse, Meeting, MeetingApi,
    MeetingListItem, MeetingStatus,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;

pub fn meeting(id: &str, status: MeetingStatus) -> Meeting {
    Meeting {
        id: id.to_string(),
        title: format!("Meeting {}", id),
        content: "Anna: Hallo".to_string(),
        analysis: status.is_terminal().then(|| Analysis {
            summary: "Kurz".to_string(),
            action_items: vec![],
            participants: vec!["Anna".to_string()],
        }),
        created_at: Utc.with_ymd_and_hms(2025, 5, 1, 9, 0, 0).unwrap(),
        status,
    }
}

pub fn list_item(id: &str) -> MeetingListItem {
    MeetingListItem::from(&meeting(id, MeetingStatus::Completed))
}

/// Scripted API: `get_by_id` pops responses in order and repeats the last one
#[derive(Default)]
pub struct MockApi {
    pub meetings: Mutex<Vec<MeetingListItem>>,
    pub list_error: Mutex<Option<ApiError>>,
    pub get_responses: Mutex<VecDeque<Result<Meeting, ApiError>>>,
    pub create_result: Mutex<Option<Result<CreateMeetingResponse, ApiError>>>,
    pub delete_result: Mutex<Option<ApiError>>,
    pub list_calls: AtomicUsize,
    pub get_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub deleted: Mutex<Vec<String>>,
}

impl MockApi {
    pub fn with_gets(responses: Vec<Result<Meeting, ApiError>>) -> Self {
        Self {
            get_responses: Mutex::new(responses.into()),
            ..Self::default()
        }
    }

    pub fn with_meetings(ids: &[&str]) -> Self {
        Self {
            meetings: Mutex::new(ids.iter().map(|id| list_item(id)).collect()),
            ..Self::default()
        }
    }

    pub fn gets(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl MeetingApi for MockApi {
    async fn list_all(&self) -> Result<Vec<MeetingListItem>, ApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.list_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.meetings.lock().unwrap().clone())
    }

    async fn get_by_id(&self, _id: &str) -> Result<Meeting, ApiError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        let mut responses = self.get_responses.lock().unwrap();
        if responses.len() > 1 {
            responses.pop_front().unwrap()
        } else {
            responses.front().cloned().unwrap_or(Err(ApiError::NotFound))
        }
    }

    async fn create(
        &self,
        request: &CreateMeetingRequest,
    ) -> Result<CreateMeetingResponse, ApiError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.create_result
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| {
                Ok(CreateMeetingResponse {
                    id: "new-id".to_string(),
                    title: request.title.clone(),
                    status: MeetingStatus::Processing,
                })
            })
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        if let Some(err) = self.delete_result.lock().unwrap().clone() {
            return Err(err);
        }
        self.deleted.lock().unwrap().push(id.to_string());
        Ok(())
    }
}

/// API whose first `get_by_id` answers at once and every later one hangs
/// until `release` is notified
#[derive(Default)]
pub struct StallingApi {
    pub release: Notify,
    pub get_calls: AtomicUsize,
}

impl StallingApi {
    pub fn gets(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MeetingApi for StallingApi {
    async fn list_all(&self) -> Result<Vec<MeetingListItem>, ApiError> {
        Ok(Vec::new())
    }

    async fn get_by_id(&self, id: &str) -> Result<Meeting, ApiError> {
        if self.get_calls.fetch_add(1, Ordering::SeqCst) > 0 {
            self.release.notified().await;
        }
        Ok(meeting(id, MeetingStatus::Processing))
    }

    async fn create(
        &self,
        _request: &CreateMeetingRequest,
    ) -> Result<CreateMeetingResponse, ApiError> {
        Err(ApiError::Unknown)
    }

    async fn delete(&self, _id: &str) -> Result<(), ApiError> {
        Err(ApiError::Unknown)
    }
}

/// Anchor that records every dialog message and answers with a fixed choice
pub struct RecordingAnchor {
    pub answer: bool,
    pub messages: Mutex<Vec<String>>,
}

impl RecordingAnchor {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            messages: Mutex::new(Vec::new()),
        }
    }

    pub fn shown(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

impl DialogAnchor for RecordingAnchor {
    fn mount(&self, dialog: ConfirmationDialog) {
        self.messages
            .lock()
            .unwrap()
            .push(dialog.config().message.clone());
        if self.answer {
            dialog.confirm();
        } else {
            dialog.cancel();
        }
    }
}
