//! In-memory stand-in for the meetings backend (local development, tests)
//!
//! Serves the same contract the client talks to:
//! - POST /meetings - Submit a meeting, analysis is queued
//! - GET /meetings - List meetings, newest first
//! - GET /meetings/:id - Fetch one meeting
//! - DELETE /meetings/:id - Delete a meeting
//! - GET /health - Health check

mod analysis;
mod handlers;
mod routes;
mod state;
mod worker;

pub use analysis::extract_analysis;
pub use routes::create_router;
pub use state::{StoredMeeting, StubState};
pub use worker::run_analysis_worker;
