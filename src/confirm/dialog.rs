use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tracing::debug;

/// Severity of a confirmation dialog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogType {
    Danger,
    Warning,
    #[default]
    Info,
}

impl DialogType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DialogType::Danger => "danger",
            DialogType::Warning => "warning",
            DialogType::Info => "info",
        }
    }
}

/// What a confirmation dialog asks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationConfig {
    pub title: String,
    pub message: String,
    pub confirm_text: Option<String>,
    pub cancel_text: Option<String>,
    pub dialog_type: Option<DialogType>,
}

impl ConfirmationConfig {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_text: None,
            cancel_text: None,
            dialog_type: None,
        }
    }

    pub fn with_labels(mut self, confirm: impl Into<String>, cancel: impl Into<String>) -> Self {
        self.confirm_text = Some(confirm.into());
        self.cancel_text = Some(cancel.into());
        self
    }

    pub fn with_type(mut self, dialog_type: DialogType) -> Self {
        self.dialog_type = Some(dialog_type);
        self
    }

    /// The prompt both views show before deleting a meeting
    pub fn delete_meeting(title: &str) -> Self {
        Self::new(
            "Meeting löschen",
            format!(
                "Möchten Sie das Meeting \"{}\" wirklich unwiderruflich löschen?",
                title
            ),
        )
        .with_labels("Löschen", "Abbrechen")
        .with_type(DialogType::Danger)
    }
}

/// How the user left the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Confirm,
    Cancel,
    /// Click outside the dialog; counts as cancel
    Backdrop,
}

impl Choice {
    pub fn confirmed(&self) -> bool {
        matches!(self, Choice::Confirm)
    }
}

/// A mounted confirmation dialog.
///
/// Resolving consumes the dialog, so it settles exactly once. Dropping a dialog
/// that was never answered settles it as cancelled.
#[derive(Debug)]
pub struct ConfirmationDialog {
    config: ConfirmationConfig,
    responder: Option<oneshot::Sender<bool>>,
}

impl ConfirmationDialog {
    pub(crate) fn new(config: ConfirmationConfig) -> (Self, oneshot::Receiver<bool>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                config,
                responder: Some(tx),
            },
            rx,
        )
    }

    pub fn config(&self) -> &ConfirmationConfig {
        &self.config
    }

    pub fn dialog_type(&self) -> DialogType {
        self.config.dialog_type.unwrap_or_default()
    }

    pub fn dialog_class(&self) -> String {
        format!("dialog-{}", self.dialog_type().as_str())
    }

    pub fn confirm_button_class(&self) -> String {
        format!("btn-{}", self.dialog_type().as_str())
    }

    pub fn confirm_label(&self) -> &str {
        self.config.confirm_text.as_deref().unwrap_or("Bestätigen")
    }

    pub fn cancel_label(&self) -> &str {
        self.config.cancel_text.as_deref().unwrap_or("Abbrechen")
    }

    /// Plain-text rendering of the dialog
    pub fn render(&self) -> String {
        format!(
            "[{}] {}\n{}\n[{}] / [{}]",
            self.dialog_type().as_str(),
            self.config.title,
            self.config.message,
            self.cancel_label(),
            self.confirm_label()
        )
    }

    pub fn resolve(mut self, choice: Choice) {
        debug!("Confirmation '{}' resolved: {:?}", self.config.title, choice);
        self.settle(choice.confirmed());
    }

    pub fn confirm(self) {
        self.resolve(Choice::Confirm);
    }

    pub fn cancel(self) {
        self.resolve(Choice::Cancel);
    }

    pub fn dismiss(self) {
        self.resolve(Choice::Backdrop);
    }

    fn settle(&mut self, decision: bool) {
        if let Some(tx) = self.responder.take() {
            // The caller may have stopped waiting; nothing left to notify then.
            let _ = tx.send(decision);
        }
    }
}

impl Drop for ConfirmationDialog {
    fn drop(&mut self) {
        self.settle(false);
    }
}
