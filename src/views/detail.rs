use super::polling::{PollPolicy, Poller};
use crate::api::MeetingApi;
use crate::confirm::{ConfirmationConfig, ConfirmationService};
use crate::meeting::{Meeting, MeetingStatus};
use crate::routes::Route;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{error, info};

/// Lifecycle of the detail view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailPhase {
    #[default]
    Idle,
    Loading,
    /// Meeting is processing; refreshed on every tick
    Polling,
    /// Meeting reached a terminal status
    Settled,
    Error,
}

/// Observable state of the detail view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailState {
    pub phase: DetailPhase,
    pub meeting: Option<Meeting>,
    pub error_message: Option<String>,
}

impl DetailState {
    pub fn is_loading(&self) -> bool {
        self.phase == DetailPhase::Loading
    }

    /// No further updates will arrive on their own
    pub fn is_done(&self) -> bool {
        matches!(self.phase, DetailPhase::Settled | DetailPhase::Error)
    }
}

/// One meeting, refreshed while its analysis is running.
///
/// Dropping the view tears down the polling loop.
pub struct DetailView {
    api: Arc<dyn MeetingApi>,
    meeting_id: String,
    policy: PollPolicy,
    state: Arc<watch::Sender<DetailState>>,
    poller: Option<Poller>,
}

impl DetailView {
    pub fn new(api: Arc<dyn MeetingApi>, meeting_id: impl Into<String>, policy: PollPolicy) -> Self {
        let (state, _) = watch::channel(DetailState::default());
        Self {
            api,
            meeting_id: meeting_id.into(),
            policy,
            state: Arc::new(state),
            poller: None,
        }
    }

    pub fn meeting_id(&self) -> &str {
        &self.meeting_id
    }

    /// Snapshot of the current state
    pub fn state(&self) -> DetailState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change, including polling updates
    pub fn subscribe(&self) -> watch::Receiver<DetailState> {
        self.state.subscribe()
    }

    pub fn is_polling(&self) -> bool {
        self.poller.as_ref().is_some_and(|p| !p.is_finished())
    }

    /// Activate the view; returns a route when there is nothing to show
    pub async fn load(&mut self) -> Option<Route> {
        if self.meeting_id.is_empty() {
            return Some(Route::MeetingList);
        }

        self.state.send_modify(|s| {
            s.phase = DetailPhase::Loading;
            s.error_message = None;
        });

        match self.api.get_by_id(&self.meeting_id).await {
            Ok(meeting) => {
                let processing = meeting.status == MeetingStatus::Processing;
                info!("Loaded meeting {} ({})", self.meeting_id, meeting.status);

                self.state.send_modify(|s| {
                    s.meeting = Some(meeting);
                    s.phase = if processing {
                        DetailPhase::Polling
                    } else {
                        DetailPhase::Settled
                    };
                });

                if processing {
                    self.start_polling();
                }
            }
            Err(e) => {
                error!("Failed to load meeting {}: {}", self.meeting_id, e);
                self.state.send_modify(|s| {
                    s.error_message = Some(e.to_string());
                    s.phase = DetailPhase::Error;
                });
            }
        }

        None
    }

    fn start_polling(&mut self) {
        self.stop_polling();
        self.poller = Some(Poller::spawn(
            Arc::clone(&self.api),
            self.meeting_id.clone(),
            self.policy,
            Arc::clone(&self.state),
        ));
    }

    /// Cancel the polling loop, if any
    pub fn stop_polling(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.cancel();
        }
    }

    /// Wait until the meeting settles or an error stops the view
    pub async fn wait_until_done(&self) -> DetailState {
        let mut rx = self.subscribe();
        loop {
            {
                let current = rx.borrow_and_update();
                if current.is_done() || current.phase == DetailPhase::Idle {
                    return current.clone();
                }
            }
            if rx.changed().await.is_err() {
                return self.state();
            }
        }
    }

    /// Delete after confirmation; returns the route to navigate to on success
    pub async fn delete(&mut self, prompt: &ConfirmationService) -> Option<Route> {
        let title = self.state.borrow().meeting.as_ref().map(|m| m.title.clone())?;

        if !prompt.confirm(ConfirmationConfig::delete_meeting(&title)).await {
            info!("Delete of meeting {} cancelled", self.meeting_id);
            return None;
        }

        match self.api.delete(&self.meeting_id).await {
            Ok(()) => {
                info!("Deleted meeting {}", self.meeting_id);
                self.stop_polling();
                Some(Route::MeetingList)
            }
            Err(e) => {
                error!("Failed to delete meeting {}: {}", self.meeting_id, e);
                self.state.send_modify(|s| s.error_message = Some(e.to_string()));
                None
            }
        }
    }

    pub fn navigate_back(&self) -> Route {
        Route::MeetingList
    }
}

impl Drop for DetailView {
    fn drop(&mut self) {
        self.stop_polling();
    }
}
