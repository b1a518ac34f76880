//! Plain-text rendering of view state for the terminal

use super::{CreateView, DetailPhase, DetailState, Field, ListState};
use crate::meeting::format::{local_date_long, local_date_short, status_text};
use std::fmt::Write;

pub fn render_list(state: &ListState) -> String {
    let mut out = String::new();

    if state.is_loading {
        out.push_str("Meetings werden geladen...\n");
    }
    if let Some(error) = &state.error_message {
        let _ = writeln!(out, "Fehler: {}", error);
    }

    if state.meetings.is_empty() && state.error_message.is_none() && !state.is_loading {
        out.push_str("Noch keine Meetings vorhanden.\n");
        return out;
    }

    for meeting in &state.meetings {
        let _ = writeln!(
            out,
            "{:<36}  {:<17}  {:<16}  {}",
            meeting.id,
            local_date_short(&meeting.created_at),
            status_text(meeting.status),
            meeting.title
        );
    }

    out
}

pub fn render_detail(state: &DetailState) -> String {
    let mut out = String::new();

    if state.phase == DetailPhase::Loading {
        out.push_str("Meeting wird geladen...\n");
    }
    if let Some(error) = &state.error_message {
        let _ = writeln!(out, "Fehler: {}", error);
    }

    let Some(meeting) = &state.meeting else {
        return out;
    };

    let _ = writeln!(out, "{}", meeting.title);
    let _ = writeln!(out, "Erstellt: {}", local_date_long(&meeting.created_at));
    let _ = writeln!(out, "Status:   {}", status_text(meeting.status));

    if let Some(analysis) = &meeting.analysis {
        let _ = writeln!(out, "\nZusammenfassung:\n{}", analysis.summary);

        if !analysis.action_items.is_empty() {
            out.push_str("\nAction Items:\n");
            for item in &analysis.action_items {
                let _ = writeln!(out, "- {}", item);
            }
        }

        if !analysis.participants.is_empty() {
            out.push_str("\nTeilnehmer:\n");
            for participant in &analysis.participants {
                let _ = writeln!(out, "- {}", participant);
            }
        }
    } else if state.phase == DetailPhase::Polling {
        out.push_str("\nAnalyse läuft...\n");
    }

    let _ = writeln!(out, "\nInhalt:\n{}", meeting.content);
    out
}

pub fn render_create_errors(view: &CreateView) -> String {
    let mut out = String::new();

    for field in Field::ALL {
        if let Some(error) = view.field_error(field) {
            let _ = writeln!(out, "{}", error);
        }
    }
    if let Some(error) = view.error_message() {
        let _ = writeln!(out, "Fehler: {}", error);
    }

    out
}
