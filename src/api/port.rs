use super::ApiError;
use crate::meeting::{CreateMeetingRequest, CreateMeetingResponse, Meeting, MeetingListItem};
use async_trait::async_trait;

/// The four operations the views need from the backend.
///
/// Every failure is already mapped to an [`ApiError`]; callers never see the
/// transport error.
#[async_trait]
pub trait MeetingApi: Send + Sync {
    /// List all meetings, newest first as ordered by the backend
    async fn list_all(&self) -> Result<Vec<MeetingListItem>, ApiError>;

    /// Fetch a single meeting
    async fn get_by_id(&self, id: &str) -> Result<Meeting, ApiError>;

    /// Submit a new meeting; analysis starts in the background
    async fn create(&self, request: &CreateMeetingRequest)
        -> Result<CreateMeetingResponse, ApiError>;

    /// Delete a meeting
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}
