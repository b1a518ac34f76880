//! Client for the meetings HTTP API
//!
//! - `GET /meetings` - list all meetings
//! - `GET /meetings/:id` - fetch one meeting
//! - `POST /meetings` - submit a meeting for analysis
//! - `DELETE /meetings/:id` - delete a meeting

mod client;
mod error;
mod port;

pub use client::MeetingClient;
pub use error::ApiError;
pub use port::MeetingApi;
