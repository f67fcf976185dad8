//! BDD test world for the DCP UI host

use cucumber::World;
use serde_json::{Map, Value};

use crate::fake_upstream::FakeUpstream;

#[derive(Debug, Default, World)]
pub struct DcpUiWorld {
    // Upstream DCP server
    pub stations: Map<String, Value>,
    pub upstream_unreachable: bool,
    pub upstream: Option<FakeUpstream>,

    // Last response from the host
    pub response_status: Option<u16>,
    pub response_body: Option<String>,
}
