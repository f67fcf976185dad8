//! Per-view fetch state

use crate::error::{ApiError, Result};

/// Lifecycle of a view's data: `Loading` until the fetch settles
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Loaded(T),
    Failed(ApiError),
}

impl<T> ViewState<T> {
    /// Map a pending (`None`) or settled fetch onto the view state
    pub fn from_fetch(fetch: Option<Result<T>>) -> Self {
        match fetch {
            None => ViewState::Loading,
            Some(Ok(value)) => ViewState::Loaded(value),
            Some(Err(e)) => ViewState::Failed(e),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}
