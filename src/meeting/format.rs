//! German presentation helpers for meetings

use super::MeetingStatus;
use chrono::{DateTime, Local, Locale, TimeZone, Utc};
use std::fmt::Display;

/// Human-readable status label
pub fn status_text(status: MeetingStatus) -> &'static str {
    match status {
        MeetingStatus::Completed => "Abgeschlossen",
        MeetingStatus::Processing => "Wird verarbeitet",
        MeetingStatus::Failed => "Fehlgeschlagen",
        MeetingStatus::Unknown => "Unbekannt",
    }
}

/// Style class for a status, e.g. `status-processing`
pub fn status_class(status: MeetingStatus) -> String {
    format!("status-{}", status)
}

/// Numeric date used in the list, e.g. `18.10.2026, 14:05`
pub fn format_date_short<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format("%d.%m.%Y, %H:%M").to_string()
}

/// Long date used on the detail page, e.g. `18. Oktober 2026 um 14:05`
pub fn format_date_long<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format_localized("%-d. %B %Y um %H:%M", Locale::de_DE).to_string()
}

/// [`format_date_short`] in the local time zone
pub fn local_date_short(date: &DateTime<Utc>) -> String {
    format_date_short(&date.with_timezone(&Local))
}

/// [`format_date_long`] in the local time zone
pub fn local_date_long(date: &DateTime<Utc>) -> String {
    format_date_long(&date.with_timezone(&Local))
}
