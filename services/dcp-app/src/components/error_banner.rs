//! Error banner component

use leptos::prelude::*;

use crate::error::ApiError;

/// Short label for the kind of failure
pub fn error_title(error: &ApiError) -> &'static str {
    match error {
        ApiError::Network(_) => "Connection problem",
        ApiError::Status { .. } => "Server error",
        ApiError::Malformed(_) => "Unexpected response",
        ApiError::NotFound(_) => "Not found",
    }
}

/// A red box describing a failed request
#[component]
pub fn ErrorBanner(error: ApiError) -> impl IntoView {
    let style = "display: block; padding: 0.75rem 1rem; border-radius: 0.25rem; \
                 color: #721c24; background-color: #f8d7da; border: 1px solid #f5c6cb;";

    view! {
        <div role="alert" style=style>
            <strong>{error_title(&error)}</strong>
            ": "
            {error.to_string()}
        </div>
    }
}
