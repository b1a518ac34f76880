//! Failures of the meetings API, mapped to the message shown to the user.
//!
//! This is the only failure signal the client surfaces; raw transport errors
//! are logged and then folded into one of these variants.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Meeting nicht gefunden")]
    NotFound,

    #[error("Serverfehler bei der Verarbeitung")]
    Server,

    /// Status 0: no HTTP response at all (refused, reset, timed out)
    #[error("Verbindung zum Server fehlgeschlagen")]
    Connection,

    /// The request failed on the client side (building it, decoding the body)
    #[error("Fehler: {0}")]
    Client(String),

    #[error("Fehler {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("Ein unbekannter Fehler ist aufgetreten")]
    Unknown,
}

impl ApiError {
    /// Map a response status and its detail text
    pub fn from_status(status: u16, detail: impl Into<String>) -> Self {
        match status {
            0 => ApiError::Connection,
            404 => ApiError::NotFound,
            500 => ApiError::Server,
            status => ApiError::Status {
                status,
                detail: detail.into(),
            },
        }
    }

    /// Map a transport-level failure from reqwest
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_status(status.as_u16(), err.to_string());
        }

        if err.is_timeout() {
            ApiError::Connection
        } else if err.is_decode() || err.is_body() || err.is_builder() {
            ApiError::Client(err.to_string())
        } else if err.is_connect() || err.is_request() {
            // Sending failed before any response arrived
            ApiError::Connection
        } else {
            ApiError::Unknown
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::from_transport(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_status_messages() {
        assert_eq!(
            ApiError::from_status(404, "ignored").to_string(),
            "Meeting nicht gefunden"
        );
        assert_eq!(
            ApiError::from_status(500, "ignored").to_string(),
            "Serverfehler bei der Verarbeitung"
        );
        assert_eq!(
            ApiError::from_status(0, "").to_string(),
            "Verbindung zum Server fehlgeschlagen"
        );
    }

    #[test]
    fn test_other_status_carries_code_and_detail() {
        let err = ApiError::from_status(400, "Missing or invalid title in provided JSON");
        assert_eq!(
            err.to_string(),
            "Fehler 400: Missing or invalid title in provided JSON"
        );
    }

    #[test]
    fn test_client_side_message() {
        assert_eq!(
            ApiError::Client("expected value".into()).to_string(),
            "Fehler: expected value"
        );
        assert_eq!(
            ApiError::Unknown.to_string(),
            "Ein unbekannter Fehler ist aufgetreten"
        );
    }
}
