//! HTTP server for the visualizer.
//!
//! This module implements the HTTP server that:
//! - Serves the interactive form and renders submitted runs back into it
//! - Provides a JSON API for the same parse-and-sort pipeline
//! - Provides a health check for liveness monitoring
//!
//! # Endpoints
//!
//! - `GET /` - The empty form
//! - `POST /` - Form submission; returns the form with both outputs filled in
//! - `POST /api/v1/sort` - JSON sort request (see [`api::SortRequest`])
//! - `GET /health` - Returns 200 if server is running

use std::sync::Arc;

use crate::config::{DEFAULT_MAX_NUMBERS, ServerConfig};
use crate::input::parse_numbers;
use crate::types::NumberList;

pub mod api;
pub mod error;
pub mod form;
pub mod health;
pub mod page;

pub use api::sort_handler;
pub use error::RequestError;
pub use form::{form_handler, submit_handler};
pub use health::health_handler;

/// Shared application state.
///
/// This is passed to all handlers via Axum's `State` extractor. It is
/// immutable once the server starts.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Longest list a single request may sort. Traces grow quadratically, so
    /// this bounds the size of every response.
    max_numbers: usize,
}

impl AppState {
    /// Creates a new `AppState` with the given list limit.
    pub fn new(max_numbers: usize) -> Self {
        AppState {
            inner: Arc::new(AppStateInner { max_numbers }),
        }
    }

    /// Creates the state from the server configuration.
    pub fn from_config(config: &ServerConfig) -> Self {
        AppState::new(config.max_numbers)
    }

    /// Returns the largest list a request may sort.
    pub fn max_numbers(&self) -> usize {
        self.inner.max_numbers
    }

    /// Parses a submission and enforces the list limit.
    pub fn parse_submission(&self, raw: &str) -> Result<NumberList, RequestError> {
        let numbers = parse_numbers(raw)?;
        let max = self.max_numbers();
        if numbers.len() > max {
            return Err(RequestError::TooManyNumbers {
                count: numbers.len(),
                max,
            });
        }
        Ok(numbers)
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(DEFAULT_MAX_NUMBERS)
    }
}

/// Builds the axum Router with all endpoints.
pub fn build_router(app_state: AppState) -> axum::Router {
    use axum::routing::{get, post};

    axum::Router::new()
        .route("/", get(form_handler).post(submit_handler))
        .route("/api/v1/sort", post(sort_handler))
        .route("/health", get(health_handler))
        .with_state(app_state)
}
