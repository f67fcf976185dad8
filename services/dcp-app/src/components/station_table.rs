//! Station list table component

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::api::StationCollection;
use crate::client::{ApiClient, SharedClient};
use crate::components::error_banner::ErrorBanner;
use crate::routes::AppRoute;
use crate::state::ViewState;
use crate::Result;

/// Reads the station collection, logging a failure
pub async fn load_stations(client: &dyn ApiClient) -> Result<StationCollection> {
    let result = client.stations().await;
    if let Err(e) = &result {
        log::warn!("Fetching stations failed: {}", e);
    }
    result
}

/// Fetches /api/json and lists every station in server order
#[component]
pub fn StationTable() -> impl IntoView {
    let client = expect_context::<SharedClient>();
    let stations = LocalResource::new(move || {
        let client = Arc::clone(&client);
        async move { load_stations(client.as_ref()).await }
    });

    view! {
        <section>
            {move || match ViewState::from_fetch(stations.get()) {
                ViewState::Loading => view! { <p>"Loading stations..."</p> }.into_any(),
                ViewState::Failed(e) => view! { <ErrorBanner error=e /> }.into_any(),
                ViewState::Loaded(collection) if collection.is_empty() => {
                    view! { <p>"No stations discovered yet."</p> }.into_any()
                }
                ViewState::Loaded(collection) => {
                    view! {
                        <table style="width: 100%; border-collapse: collapse;">
                            <thead>
                                <tr style="border-bottom: 2px solid #dee2e6;">
                                    <th style="padding: 0.5rem; text-align: left;"></th>
                                    <th style="padding: 0.5rem; text-align: left;">"MAC"</th>
                                    <th style="padding: 0.5rem; text-align: left;">"IP address"</th>
                                    <th style="padding: 0.5rem; text-align: left;">"Name of station"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {collection.rows().into_iter().map(|row| {
                                    let href = AppRoute::Station(row.mac.clone()).href();
                                    view! {
                                        <tr style="border-bottom: 1px solid #dee2e6;">
                                            <td style="padding: 0.5rem;">{row.index}</td>
                                            <td style="padding: 0.5rem; font-family: monospace;">
                                                <A href=href>{row.mac}</A>
                                            </td>
                                            <td style="padding: 0.5rem;">{row.ip_address}</td>
                                            <td style="padding: 0.5rem;">{row.name_of_station}</td>
                                        </tr>
                                    }
                                }).collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }.into_any()
                }
            }}
        </section>
    }
}
