use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::MenuError;
use crate::selector::ComboSelector;
use crate::server::error::ApiError;

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub selector: Arc<Mutex<ComboSelector>>,
    /// Include error details in 500 responses.
    pub debug: bool,
}

impl AppState {
    pub fn new(selector: ComboSelector, debug: bool) -> Self {
        Self {
            selector: Arc::new(Mutex::new(selector)),
            debug,
        }
    }

    /// Lock the selector; never held across an await.
    pub fn lock(&self) -> Result<MutexGuard<'_, ComboSelector>, ApiError> {
        self.selector
            .lock()
            .map_err(|_| self.api_error(MenuError::Internal("selector lock poisoned".to_string())))
    }

    /// Map a core error to its response, honoring debug mode.
    pub fn api_error(&self, err: MenuError) -> ApiError {
        ApiError::from_menu_error(err, self.debug)
    }
}
