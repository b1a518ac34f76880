use crate::api::MeetingApi;
use crate::confirm::{ConfirmationConfig, ConfirmationService};
use crate::meeting::MeetingListItem;
use crate::routes::Route;
use std::sync::Arc;
use tracing::{error, info};

/// Observable state of the list view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    pub meetings: Vec<MeetingListItem>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

/// All meetings, with delete and navigation
pub struct ListView {
    api: Arc<dyn MeetingApi>,
    state: ListState,
}

impl ListView {
    pub fn new(api: Arc<dyn MeetingApi>) -> Self {
        Self {
            api,
            state: ListState::default(),
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Fetch all meetings, replacing the local list
    pub async fn load(&mut self) {
        self.state.is_loading = true;
        self.state.error_message = None;

        match self.api.list_all().await {
            Ok(meetings) => {
                info!("Loaded {} meetings", meetings.len());
                self.state.meetings = meetings;
            }
            Err(e) => {
                error!("Failed to load meetings: {}", e);
                self.state.error_message = Some(e.to_string());
            }
        }

        self.state.is_loading = false;
    }

    /// Delete after confirmation; returns whether the meeting was removed.
    ///
    /// On success only that item leaves the local list, without a re-fetch.
    pub async fn delete(&mut self, id: &str, title: &str, prompt: &ConfirmationService) -> bool {
        if !prompt.confirm(ConfirmationConfig::delete_meeting(title)).await {
            info!("Delete of meeting {} cancelled", id);
            return false;
        }

        match self.api.delete(id).await {
            Ok(()) => {
                info!("Deleted meeting {}", id);
                self.state.meetings.retain(|m| m.id != id);
                true
            }
            Err(e) => {
                error!("Failed to delete meeting {}: {}", id, e);
                self.state.error_message = Some(e.to_string());
                false
            }
        }
    }

    pub fn navigate_to_create(&self) -> Route {
        Route::MeetingCreate
    }

    pub fn navigate_to_detail(&self, id: &str) -> Route {
        Route::MeetingDetail(id.to_string())
    }
}
