use crate::api::MeetingApi;
use crate::meeting::CreateMeetingRequest;
use crate::routes::Route;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Content,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Title, Field::Content];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Title => "Titel",
            Field::Content => "Meeting-Inhalt",
        }
    }
}

/// One form input and whether the user has interacted with it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormField {
    pub value: String,
    pub touched: bool,
}

impl FormField {
    /// Required: blank input is invalid
    pub fn is_valid(&self) -> bool {
        !self.value.trim().is_empty()
    }
}

/// Form for submitting a new meeting
pub struct CreateView {
    api: Arc<dyn MeetingApi>,
    title: FormField,
    content: FormField,
    is_submitting: bool,
    error_message: Option<String>,
}

impl CreateView {
    pub fn new(api: Arc<dyn MeetingApi>) -> Self {
        Self {
            api,
            title: FormField::default(),
            content: FormField::default(),
            is_submitting: false,
            error_message: None,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let input = self.field_mut(field);
        input.value = value.into();
        input.touched = true;
    }

    pub fn field(&self, field: Field) -> &FormField {
        match field {
            Field::Title => &self.title,
            Field::Content => &self.content,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut FormField {
        match field {
            Field::Title => &mut self.title,
            Field::Content => &mut self.content,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.title.is_valid() && self.content.is_valid()
    }

    /// Invalid fields only count once the user touched them
    pub fn is_field_invalid(&self, field: Field) -> bool {
        let input = self.field(field);
        input.touched && !input.is_valid()
    }

    pub fn field_error(&self, field: Field) -> Option<String> {
        self.is_field_invalid(field)
            .then(|| format!("{} ist erforderlich", field.label()))
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Validate and submit; returns the route to navigate to on success.
    ///
    /// An invalid form marks every field touched and sends nothing.
    pub async fn submit(&mut self) -> Option<Route> {
        if self.is_submitting {
            return None;
        }

        if !self.is_valid() {
            warn!("Create form is invalid, not submitting");
            for field in Field::ALL {
                self.field_mut(field).touched = true;
            }
            return None;
        }

        self.is_submitting = true;
        self.error_message = None;

        let request = CreateMeetingRequest {
            title: self.title.value.clone(),
            content: self.content.value.clone(),
        };

        let outcome = match self.api.create(&request).await {
            Ok(created) => {
                info!("Created meeting {} ({})", created.id, created.title);
                Some(Route::MeetingList)
            }
            Err(e) => {
                error!("Error creating meeting: {}", e);
                self.error_message = Some(e.to_string());
                None
            }
        };

        self.is_submitting = false;
        outcome
    }

    pub fn navigate_back(&self) -> Route {
        Route::MeetingList
    }
}
