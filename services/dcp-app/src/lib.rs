//! DCP station manager - Leptos frontend
//!
//! Lists the stations a DCP server has discovered and edits a station's IP
//! address.

pub mod api;
pub mod app;
pub mod client;
pub mod components;
pub mod editor;
pub mod error;
pub mod routes;
pub mod state;
pub mod time;

pub use app::App;
pub use error::{ApiError, Result};

/// Browser entry point: mounts [`App`] with a client bound to the page origin
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use std::sync::Arc;

    use leptos::prelude::provide_context;

    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    let client: client::SharedClient = match client::HttpApiClient::from_window() {
        Ok(client) => Arc::new(client),
        Err(e) => {
            log::error!("Cannot create API client: {}", e);
            return;
        }
    };

    leptos::mount::mount_to_body(move || {
        provide_context(client);
        App()
    });
}
