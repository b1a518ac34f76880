use super::dialog::{Choice, ConfirmationDialog};
use super::service::DialogAnchor;
use std::io::{BufRead, Write};
use tracing::warn;

/// Renders dialogs on stderr and reads the answer from stdin
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalAnchor;

impl DialogAnchor for TerminalAnchor {
    fn mount(&self, dialog: ConfirmationDialog) {
        tokio::task::spawn_blocking(move || {
            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "\n{}", dialog.render());
            let _ = write!(stderr, "{}? [j/N] ", dialog.confirm_label());
            let _ = stderr.flush();

            let mut line = String::new();
            let choice = match std::io::stdin().lock().read_line(&mut line) {
                Ok(0) => Choice::Backdrop,
                Ok(_) => parse_answer(&line),
                Err(e) => {
                    warn!("Failed to read confirmation answer: {}", e);
                    Choice::Backdrop
                }
            };

            dialog.resolve(choice);
        });
    }
}

/// `j`, `ja`, `y`, `yes` confirm; everything else cancels
pub fn parse_answer(line: &str) -> Choice {
    match line.trim().to_lowercase().as_str() {
        "j" | "ja" | "y" | "yes" => Choice::Confirm,
        _ => Choice::Cancel,
    }
}
