use crate::models::CalendarData;
use std::sync::Arc;

/// Loaded once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub data: Arc<CalendarData>,
}

impl AppState {
    pub fn new(data: CalendarData) -> Self {
        Self {
            data: Arc::new(data),
        }
    }
}
