//! BDD step definitions for API forwarding

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::Router;
use cucumber::{given, then, when};
use serde_json::{json, Value};
use tower::ServiceExt;

use dcp_ui::config::{SiteConfig, UpstreamConfig};
use dcp_ui::server::build_router;
use dcp_ui::upstream::ReqwestUpstream;

use crate::fake_upstream::FakeUpstream;
use crate::world::DcpUiWorld;

/// Build the host router against the world's upstream, starting the fake if needed
pub async fn host_router(world: &mut DcpUiWorld) -> Router {
    let base_url = if world.upstream_unreachable {
        "http://127.0.0.1:1".to_string()
    } else {
        if world.upstream.is_none() {
            world.upstream = Some(FakeUpstream::start(world.stations.clone()).await);
        }
        world.upstream.as_ref().unwrap().base_url()
    };

    let upstream = ReqwestUpstream::new(&UpstreamConfig {
        base_url,
        timeout_seconds: 5,
    })
    .expect("failed to build upstream client");
    build_router(Arc::new(upstream), &SiteConfig::default())
}

pub async fn send(world: &mut DcpUiWorld, method: Method, uri: &str, body: String) {
    let app = host_router(world).await;
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    world.response_status = Some(response.status().as_u16());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    world.response_body = Some(String::from_utf8(body.to_vec()).unwrap());
}

fn response_json(world: &DcpUiWorld) -> Value {
    let body = world.response_body.as_ref().expect("no response body");
    serde_json::from_str(body).unwrap_or_else(|e| panic!("not JSON ({e}): {body}"))
}

#[given(expr = "a DCP server with station {string} at {string} named {string}")]
fn station_on_server(world: &mut DcpUiWorld, mac: String, ip: String, name: String) {
    world.stations.insert(
        mac,
        json!({
            "Source": "AAnlAJog",
            "XID": 42,
            "IPParameter": {
                "IPAddress": ip,
                "Subnetmask": "255.255.255.0",
                "StandardGateway": "0.0.0.0"
            },
            "NameOfStation": {"NameOfStation": name}
        }),
    );
}

#[given("the DCP server is unreachable")]
fn server_unreachable(world: &mut DcpUiWorld) {
    world.upstream_unreachable = true;
}

#[when(expr = "the browser requests {string}")]
async fn browser_requests(world: &mut DcpUiWorld, path: String) {
    send(world, Method::GET, &path, String::new()).await;
}

#[when(expr = "the browser saves station {string} with IP address {string}")]
async fn browser_saves(world: &mut DcpUiWorld, mac: String, ip: String) {
    let mut record = world
        .stations
        .get(&mac)
        .cloned()
        .unwrap_or_else(|| panic!("station {mac} not set up"));
    record["IPParameter"]["IPAddress"] = Value::String(ip);
    let path = format!("/api/{}", mac);
    send(world, Method::POST, &path, record.to_string()).await;
}

#[then(expr = "the response status should be {int}")]
fn response_status(world: &mut DcpUiWorld, expected: u16) {
    assert_eq!(world.response_status, Some(expected));
}

#[then(expr = "the response should list {int} stations")]
fn response_lists_stations(world: &mut DcpUiWorld, count: usize) {
    let json = response_json(world);
    let stations = json.as_object().expect("expected a JSON object");
    assert_eq!(stations.len(), count);
}

#[then(expr = "the response should show IP address {string}")]
fn response_shows_ip(world: &mut DcpUiWorld, ip: String) {
    let json = response_json(world);
    assert_eq!(json["IPParameter"]["IPAddress"], Value::String(ip));
}

#[then(expr = "the response should contain {string}")]
fn response_contains(world: &mut DcpUiWorld, expected: String) {
    let body = world.response_body.as_ref().expect("no response body");
    assert!(
        body.contains(&expected),
        "Expected response to contain '{}', but it didn't.\nResponse body:\n{}",
        expected,
        body
    );
}

#[then(expr = "the DCP server should have received {int} request(s)")]
fn upstream_request_count(world: &mut DcpUiWorld, count: usize) {
    let upstream = world.upstream.as_ref().expect("upstream not started");
    assert_eq!(upstream.requests().len(), count, "{:?}", upstream.requests());
}

#[then(expr = "the DCP server should have received {string} {string}")]
fn upstream_received(world: &mut DcpUiWorld, method: String, path: String) {
    let upstream = world.upstream.as_ref().expect("upstream not started");
    assert!(
        upstream
            .requests()
            .iter()
            .any(|r| r.method == method && r.path == path),
        "no {} {} in {:?}",
        method,
        path,
        upstream.requests()
    );
}

#[then(expr = "the DCP server should have received IP address {string} for station {string}")]
fn upstream_received_ip(world: &mut DcpUiWorld, ip: String, mac: String) {
    let upstream = world.upstream.as_ref().expect("upstream not started");
    let path = format!("/api/{}", mac);
    let saved = upstream
        .requests()
        .into_iter()
        .find(|r| r.method == "POST" && r.path == path)
        .unwrap_or_else(|| panic!("no POST {path}"));
    let body: Value = serde_json::from_str(&saved.body).unwrap();

    let mut expected = world.stations.get(&mac).cloned().unwrap();
    expected["IPParameter"]["IPAddress"] = Value::String(ip);
    assert_eq!(body, expected);
}
