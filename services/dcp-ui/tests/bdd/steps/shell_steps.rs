//! BDD step definitions for the page shell and health endpoint

use axum::http::Method;
use cucumber::{then, when};

use crate::steps::forwarding_steps::send;
use crate::world::DcpUiWorld;

#[when(expr = "the browser opens {string}")]
async fn browser_opens(world: &mut DcpUiWorld, path: String) {
    send(world, Method::GET, &path, String::new()).await;
}

#[then("the response should be the application shell")]
fn response_is_shell(world: &mut DcpUiWorld) {
    let body = world.response_body.as_ref().expect("no response body");
    assert!(body.starts_with("<!DOCTYPE html>"), "{body}");
    assert!(body.contains("import init from '/pkg/dcp-ui.js'"), "{body}");
}
