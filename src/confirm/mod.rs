//! Modal yes/no confirmation prompts
//!
//! A [`ConfirmationService`] mounts a [`ConfirmationDialog`] on a
//! [`DialogAnchor`] and awaits the user's decision.

mod dialog;
mod service;
mod terminal;

pub use dialog::{Choice, ConfirmationConfig, ConfirmationDialog, DialogType};
pub use service::{ConfirmationService, DialogAnchor, FixedAnchor};
pub use terminal::{parse_answer, TerminalAnchor};
