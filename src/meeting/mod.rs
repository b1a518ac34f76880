//! Meeting records as served by the meetings API
//!
//! - `models`: wire types for meetings, list items, and create requests
//! - `format`: German status labels and date rendering

pub mod format;
mod models;

pub use models::{
    Analysis, CreateMeetingRequest, CreateMeetingResponse, Meeting, MeetingListItem,
    MeetingStatus, MeetingsEnvelope,
};
