use super::dialog::{ConfirmationConfig, ConfirmationDialog};
use std::sync::Arc;
use tracing::{error, info};

/// Where confirmation dialogs are rendered.
///
/// `mount` hands over ownership of the dialog; the anchor resolves it whenever
/// the user answers, from any task or thread.
pub trait DialogAnchor: Send + Sync {
    fn mount(&self, dialog: ConfirmationDialog);
}

/// Presents confirmation dialogs and waits for the answer
#[derive(Clone, Default)]
pub struct ConfirmationService {
    anchor: Option<Arc<dyn DialogAnchor>>,
}

impl ConfirmationService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor(anchor: Arc<dyn DialogAnchor>) -> Self {
        Self {
            anchor: Some(anchor),
        }
    }

    /// Install the anchor dialogs are mounted on; required before `confirm`
    pub fn set_anchor(&mut self, anchor: Arc<dyn DialogAnchor>) {
        self.anchor = Some(anchor);
    }

    pub fn has_anchor(&self) -> bool {
        self.anchor.is_some()
    }

    /// Show a dialog and resolve to `true` only if the user confirmed
    pub async fn confirm(&self, config: ConfirmationConfig) -> bool {
        let Some(anchor) = &self.anchor else {
            error!("No dialog anchor set. Call set_anchor first.");
            return false;
        };

        info!("Asking for confirmation: {}", config.title);

        let (dialog, decision) = ConfirmationDialog::new(config);
        anchor.mount(dialog);

        // A dialog dropped without an answer closes the channel; treat as cancel.
        decision.await.unwrap_or(false)
    }
}

/// Anchor that answers every dialog the same way (`--yes`, tests)
#[derive(Debug, Clone, Copy)]
pub struct FixedAnchor(pub bool);

impl DialogAnchor for FixedAnchor {
    fn mount(&self, dialog: ConfirmationDialog) {
        if self.0 {
            dialog.confirm();
        } else {
            dialog.cancel();
        }
    }
}
