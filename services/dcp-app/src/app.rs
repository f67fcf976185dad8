//! Main App component

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::components::last_scan::LastScanInfo;
use crate::components::station_detail::StationDetail;
use crate::components::station_table::StationTable;
use crate::routes::AppRoute;

/// Root application component.
///
/// Expects a [`SharedClient`](crate::client::SharedClient) in context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="DCP" />
        <Router>
            <main style="font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem;">
                <h1>"DCP"</h1>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=StationList />
                    <Route path=path!("/:mac") view=StationDetail />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn StationList() -> impl IntoView {
    view! {
        <LastScanInfo />
        <StationTable />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <p>"Nothing here. " <A href=AppRoute::Stations.href()>"Back to stations"</A></p>
    }
}
