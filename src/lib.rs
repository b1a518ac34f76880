pub mod api;
pub mod config;
pub mod confirm;
pub mod meeting;
pub mod routes;
pub mod stub;
pub mod views;

pub use api::{ApiError, MeetingApi, MeetingClient};
pub use config::Config;
pub use confirm::{ConfirmationConfig, ConfirmationService, DialogAnchor, DialogType};
pub use meeting::{
    Analysis, CreateMeetingRequest, CreateMeetingResponse, Meeting, MeetingListItem,
    MeetingStatus,
};
pub use routes::{Route, RouteError};
pub use stub::{create_router, StubState};
pub use views::{CreateView, DetailPhase, DetailState, DetailView, ListView, PollPolicy};
