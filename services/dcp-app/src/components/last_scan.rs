//! Last discovery scan indicator

use std::sync::Arc;

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::api::LastScan;
use crate::client::{ApiClient, SharedClient};
use crate::state::ViewState;
use crate::time::format_relative;
use crate::Result;

/// Text shown for a fetched last-scan timestamp
pub fn describe_last_scan(scan: &LastScan, now: DateTime<Utc>) -> String {
    if scan.is_never() {
        "never".to_string()
    } else {
        format_relative(scan.0, now)
    }
}

/// Reads the last scan time, logging a failure
pub async fn load_last_scan(client: &dyn ApiClient) -> Result<LastScan> {
    let result = client.last_scan().await;
    if let Err(e) = &result {
        log::warn!("Fetching last scan failed: {}", e);
    }
    result
}

/// Fetches /api/last and shows how long ago the last scan ran
#[component]
pub fn LastScanInfo() -> impl IntoView {
    let client = expect_context::<SharedClient>();
    let last = LocalResource::new(move || {
        let client = Arc::clone(&client);
        async move { load_last_scan(client.as_ref()).await }
    });

    view! {
        <p style="color: #6c757d;">
            "Last scan: "
            {move || match ViewState::from_fetch(last.get()) {
                ViewState::Loading => "...".to_string(),
                ViewState::Loaded(scan) => describe_last_scan(&scan, Utc::now()),
                ViewState::Failed(e) => format!("unavailable ({})", e),
            }}
        </p>
    }
}
