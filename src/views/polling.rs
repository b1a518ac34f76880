//! Background refresh of a meeting that is still being analysed.
//!
//! The loop sleeps one interval, fetches once, and only then schedules the
//! next tick, so there is never more than one request in flight. It ends on a
//! terminal status, on the first failed fetch, after the optional maximum
//! duration, or when its [`Poller`] handle is cancelled or dropped.

use super::detail::{DetailPhase, DetailState};
use crate::api::MeetingApi;
use crate::config::PollingConfig;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

pub const POLL_TIMEOUT_MESSAGE: &str = "Zeitüberschreitung beim Warten auf die Analyse";

/// How often and for how long to poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_duration: Option<Duration>,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(3),
            max_duration: None,
        }
    }
}

impl From<&PollingConfig> for PollPolicy {
    fn from(config: &PollingConfig) -> Self {
        Self {
            interval: config.interval(),
            max_duration: config.max_duration(),
        }
    }
}

/// Handle to a running polling loop; cancels the loop when dropped
pub struct Poller {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl Poller {
    pub(crate) fn spawn(
        api: Arc<dyn MeetingApi>,
        meeting_id: String,
        policy: PollPolicy,
        state: Arc<watch::Sender<DetailState>>,
    ) -> Self {
        let cancel = CancellationToken::new();
        let task = tokio::spawn(poll_until_settled(
            api,
            meeting_id,
            policy,
            state,
            cancel.clone(),
        ));

        Self { cancel, task }
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn poll_until_settled(
    api: Arc<dyn MeetingApi>,
    meeting_id: String,
    policy: PollPolicy,
    state: Arc<watch::Sender<DetailState>>,
    cancel: CancellationToken,
) {
    info!(
        "Polling meeting {} every {:?}",
        meeting_id, policy.interval
    );
    let started = Instant::now();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!("Polling of meeting {} cancelled", meeting_id);
                return;
            }
            _ = tokio::time::sleep(policy.interval) => {}
        }

        let result = tokio::select! {
            _ = cancel.cancelled() => {
                debug!("Polling of meeting {} cancelled mid-request", meeting_id);
                return;
            }
            result = api.get_by_id(&meeting_id) => result,
        };

        // Teardown may have raced the response; never publish after it.
        if cancel.is_cancelled() {
            return;
        }

        match result {
            Ok(meeting) => {
                let status = meeting.status;
                state.send_modify(|s| {
                    s.meeting = Some(meeting);
                    if status.is_terminal() {
                        s.phase = DetailPhase::Settled;
                    }
                });

                if status.is_terminal() {
                    info!("Meeting {} settled as {}", meeting_id, status);
                    return;
                }
            }
            Err(e) => {
                warn!("Polling meeting {} failed: {}", meeting_id, e);
                state.send_modify(|s| {
                    s.error_message = Some(e.to_string());
                    s.phase = DetailPhase::Error;
                });
                return;
            }
        }

        if let Some(max) = policy.max_duration {
            if started.elapsed() >= max {
                warn!("Meeting {} still processing after {:?}, giving up", meeting_id, max);
                state.send_modify(|s| {
                    s.error_message = Some(POLL_TIMEOUT_MESSAGE.to_string());
                    s.phase = DetailPhase::Error;
                });
                return;
            }
        }
    }
}
