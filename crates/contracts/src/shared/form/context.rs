use chrono::{DateTime, TimeZone, Utc};

/// Whether a details form creates a new record or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

impl FormMode {
    pub fn for_id<T>(id: Option<T>) -> Self {
        if id.is_some() {
            Self::Edit
        } else {
            Self::Create
        }
    }
}

/// Everything validation needs from the outside world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormContext<Tz = Utc> {
    pub mode: FormMode,
    pub now: DateTime<Utc>,
    /// Time zone of the browser, used to read `datetime-local` inputs
    pub zone: Tz,
}

impl<Tz: TimeZone> FormContext<Tz> {
    pub fn new(mode: FormMode, now: DateTime<Utc>, zone: Tz) -> Self {
        Self { mode, now, zone }
    }

    pub fn is_create(&self) -> bool {
        self.mode == FormMode::Create
    }
}

impl FormContext<Utc> {
    /// Create-mode context in UTC, handy for tests
    pub fn create_utc(now: DateTime<Utc>) -> Self {
        Self::new(FormMode::Create, now, Utc)
    }

    pub fn edit_utc(now: DateTime<Utc>) -> Self {
        Self::new(FormMode::Edit, now, Utc)
    }
}
