//! Book Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::queries::{BookPageView, GetBookPage, GetCustomization};
use crate::application::session::SessionState;
use crate::domain::book::BookCustomization;

/// GetBookPage Handler
pub struct GetBookPageHandler {
    state: Arc<SessionState>,
}

impl GetBookPageHandler {
    pub fn new(state: Arc<SessionState>) -> Self {
        Self { state }
    }

    pub async fn handle(&self, _query: GetBookPage) -> Result<BookPageView, ApplicationError> {
        let session = self.state.lock().await;
        Ok(BookPageView::build(&session))
    }
}

/// GetCustomization Handler
pub struct GetCustomizationHandler {
    state: Arc<SessionState>,
}

impl GetCustomizationHandler {
    pub fn new(state: Arc<SessionState>) -> Self {
        Self { state }
    }

    pub async fn handle(&self, _query: GetCustomization) -> Result<BookCustomization, ApplicationError> {
        Ok(self.state.lock().await.customization)
    }
}
