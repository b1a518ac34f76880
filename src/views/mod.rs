//! Views over the meetings API
//!
//! Each view owns its state exclusively:
//! - `ListView`: all meetings, delete with optimistic local removal
//! - `CreateView`: validated form for a new meeting
//! - `DetailView`: one meeting, polled while its analysis runs

mod create;
mod detail;
mod list;
mod polling;
pub mod render;

pub use create::{CreateView, Field, FormField};
pub use detail::{DetailPhase, DetailState, DetailView};
pub use list::{ListState, ListView};
pub use polling::{PollPolicy, Poller, POLL_TIMEOUT_MESSAGE};
