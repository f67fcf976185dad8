//! Edit state for a single station's IP configuration

use std::net::Ipv4Addr;

use crate::api::StationRecord;
use crate::client::ApiClient;
use crate::error::{ApiError, Result};

/// Outcome of the most recent save
#[derive(Debug, Clone, PartialEq)]
pub enum SaveStatus {
    Idle,
    Saving,
    Saved(String),
    Failed(ApiError),
}

/// A POST waiting to be sent
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub mac: String,
    pub record: StationRecord,
}

/// In-memory copy of a station being edited.
///
/// At most one save is in flight; `begin_save` refuses while `Saving`.
#[derive(Debug, Clone, PartialEq)]
pub struct StationEditor {
    mac: String,
    record: StationRecord,
    status: SaveStatus,
}

impl StationEditor {
    pub fn new(mac: impl Into<String>, record: StationRecord) -> Self {
        Self {
            mac: mac.into(),
            record,
            status: SaveStatus::Idle,
        }
    }

    pub fn mac(&self) -> &str {
        &self.mac
    }

    pub fn record(&self) -> &StationRecord {
        &self.record
    }

    pub fn status(&self) -> &SaveStatus {
        &self.status
    }

    pub fn ip_address(&self) -> &str {
        self.record.ip_address()
    }

    pub fn set_ip_address(&mut self, ip_address: String) {
        self.record.set_ip_address(ip_address);
    }

    /// Validation message for the IP input, if the value is not dotted IPv4
    pub fn ip_error(&self) -> Option<&'static str> {
        match self.ip_address().parse::<Ipv4Addr>() {
            Ok(_) => None,
            Err(_) => Some("Invalid IPv4 address"),
        }
    }

    pub fn can_save(&self) -> bool {
        self.status != SaveStatus::Saving && self.ip_error().is_none()
    }

    /// Mark a save as started and hand out the body to POST
    pub fn begin_save(&mut self) -> Option<SaveRequest> {
        if !self.can_save() {
            return None;
        }
        self.status = SaveStatus::Saving;
        Some(SaveRequest {
            mac: self.mac.clone(),
            record: self.record.clone(),
        })
    }

    /// Record the save result; the edited record is left as is
    pub fn finish_save(&mut self, result: Result<String>) {
        self.status = match result {
            Ok(body) => SaveStatus::Saved(body),
            Err(e) => SaveStatus::Failed(e),
        };
    }
}

/// Send a save request and log the server's answer
pub async fn save(client: &dyn ApiClient, request: SaveRequest) -> Result<String> {
    let result = client.save_station(&request.mac, &request.record).await;
    match &result {
        Ok(body) => log::info!("Saved station {}: {}", request.mac, body),
        Err(e) => log::warn!("Saving station {} failed: {}", request.mac, e),
    }
    result
}
