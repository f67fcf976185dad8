//! Single station view with the IP address form

use std::sync::Arc;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::api::StationRecord;
use crate::client::{ApiClient, SharedClient};
use crate::components::error_banner::ErrorBanner;
use crate::editor::{self, SaveStatus, StationEditor};
use crate::routes::AppRoute;
use crate::state::ViewState;
use crate::Result;

/// Reads the station keyed by `mac`, logging a failure
pub async fn load_station(
    client: &dyn ApiClient,
    mac: String,
) -> Result<(String, StationRecord)> {
    let result = client.station(&mac).await;
    if let Err(e) = &result {
        log::warn!("Fetching station {} failed: {}", mac, e);
    }
    result.map(|record| (mac, record))
}

/// Fetches /api/{mac} for the routed MAC and shows the edit form once the
/// station is known
#[component]
pub fn StationDetail() -> impl IntoView {
    let client = expect_context::<SharedClient>();
    let params = use_params_map();
    let mac = move || params.with(|p| p.get("mac").unwrap_or_default());

    let station = LocalResource::new(move || {
        let client = Arc::clone(&client);
        let mac = mac();
        async move { load_station(client.as_ref(), mac).await }
    });

    view! {
        <section>
            <p>
                <A href=AppRoute::Stations.href()>"All stations"</A>
            </p>
            {move || match ViewState::from_fetch(station.get()) {
                ViewState::Loading => view! { <p>"Loading station..."</p> }.into_any(),
                ViewState::Failed(e) => view! { <ErrorBanner error=e /> }.into_any(),
                ViewState::Loaded((mac, record)) => {
                    view! { <StationForm editor=StationEditor::new(mac, record) /> }.into_any()
                }
            }}
        </section>
    }
}

#[component]
fn StationForm(editor: StationEditor) -> impl IntoView {
    let client = expect_context::<SharedClient>();
    let subnetmask = editor
        .record()
        .ip_parameter()
        .and_then(|p| p.subnetmask.clone())
        .unwrap_or_default();
    let standard_gateway = editor
        .record()
        .ip_parameter()
        .and_then(|p| p.standard_gateway.clone())
        .unwrap_or_default();
    let form = RwSignal::new(editor);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(request) = form.try_update(|e| e.begin_save()).flatten() else {
            return;
        };
        let client = Arc::clone(&client);
        spawn_local(async move {
            let result = editor::save(client.as_ref(), request).await;
            // The view may be gone by now; try_update is a no-op then
            form.try_update(|e| e.finish_save(result));
        });
    };

    view! {
        <h2>{move || form.with(|e| e.record().station_name().to_string())}</h2>
        <dl>
            <dt>"MAC"</dt>
            <dd style="font-family: monospace;">{move || form.with(|e| e.mac().to_string())}</dd>
            <dt>"Subnet mask"</dt>
            <dd>{subnetmask}</dd>
            <dt>"Standard gateway"</dt>
            <dd>{standard_gateway}</dd>
        </dl>
        <form on:submit=on_submit>
            <label>
                "IP address "
                <input
                    type="text"
                    name="ip_address"
                    prop:value=move || form.with(|e| e.ip_address().to_string())
                    on:input=move |ev| form.update(|e| e.set_ip_address(event_target_value(&ev)))
                />
            </label>
            {move || {
                form.with(|e| e.ip_error())
                    .map(|msg| view! { <span style="color: #721c24; margin-left: 0.5rem;">{msg}</span> })
            }}
            <p>
                <button type="submit" disabled=move || form.with(|e| !e.can_save())>
                    "Save"
                </button>
            </p>
        </form>
        {move || match form.with(|e| e.status().clone()) {
            SaveStatus::Idle => None,
            SaveStatus::Saving => Some(view! { <p>"Saving..."</p> }.into_any()),
            SaveStatus::Saved(_) => Some(view! { <p style="color: #155724;">"Saved"</p> }.into_any()),
            SaveStatus::Failed(e) => Some(view! { <ErrorBanner error=e /> }.into_any()),
        }}
    }
}
