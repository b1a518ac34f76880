use super::analysis::extract_analysis;
use super::state::StubState;
use crate::meeting::MeetingStatus;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Drain the analysis queue one meeting at a time.
///
/// Each meeting takes `delay` to "analyse". Meetings deleted before or during
/// the analysis are skipped. Returns when every queue sender is gone.
pub async fn run_analysis_worker(
    state: StubState,
    mut queue: mpsc::UnboundedReceiver<String>,
    delay: Duration,
    max_content_len: usize,
) {
    info!("Analysis worker started");

    while let Some(meeting_id) = queue.recv().await {
        info!("Processing meeting {}...", meeting_id);

        let content = {
            let meetings = state.meetings.read().await;
            match meetings.get(&meeting_id) {
                Some(meeting) => meeting.content.clone(),
                None => {
                    warn!("Meeting {} was deleted before processing", meeting_id);
                    continue;
                }
            }
        };

        tokio::time::sleep(delay).await;

        let outcome = if content.chars().count() > max_content_len {
            None
        } else {
            Some(extract_analysis(&content))
        };

        let mut meetings = state.meetings.write().await;
        let Some(meeting) = meetings.get_mut(&meeting_id) else {
            warn!("Meeting {} was deleted while processing", meeting_id);
            continue;
        };

        match outcome {
            Some(analysis) => {
                meeting.analysis = Some(analysis);
                meeting.status = MeetingStatus::Completed;
                info!("Meeting {} analysis completed", meeting_id);
            }
            None => {
                meeting.status = MeetingStatus::Failed;
                warn!(
                    "Meeting {} exceeds {} characters, analysis failed",
                    meeting_id, max_content_len
                );
            }
        }
    }

    info!("Analysis worker stopped");
}
