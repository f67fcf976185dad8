//! DCP API client
//!
//! Components talk to the server through the [`ApiClient`] trait so the
//! views can be exercised without a browser. Response decoding lives in free
//! functions shared by every implementation.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::api::{LastScan, StationCollection, StationRecord};
use crate::error::{ApiError, Result};

/// Client handle shared through Leptos context
pub type SharedClient = Arc<dyn ApiClient>;

/// Operations the UI performs against the DCP API
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait ApiClient: Send + Sync {
    /// GET /api/json
    async fn stations(&self) -> Result<StationCollection>;

    /// GET /api/last
    async fn last_scan(&self) -> Result<LastScan>;

    /// GET /api/{mac}
    async fn station(&self, mac: &str) -> Result<StationRecord>;

    /// POST /api/{mac}, returning the response body as text
    async fn save_station(&self, mac: &str, record: &StationRecord) -> Result<String>;
}

fn check_status(status: u16, url: &str) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status {
            status,
            url: url.to_string(),
        })
    }
}

/// Decode a JSON body after checking the status code
pub fn decode_json<T: DeserializeOwned>(status: u16, url: &str, body: &str) -> Result<T> {
    check_status(status, url)?;
    Ok(serde_json::from_str(body)?)
}

/// Decode a single-station response.
///
/// A 404, or a record without a `Source` marker, means the server does not
/// know the station.
pub fn decode_station(mac: &str, status: u16, url: &str, body: &str) -> Result<StationRecord> {
    if status == 404 {
        return Err(ApiError::NotFound(mac.to_string()));
    }
    let record: StationRecord = decode_json(status, url, body)?;
    if !record.has_source() {
        return Err(ApiError::NotFound(mac.to_string()));
    }
    Ok(record)
}

/// Check a save response and hand back its body
pub fn decode_save(status: u16, url: &str, body: String) -> Result<String> {
    check_status(status, url)?;
    Ok(body)
}

#[cfg(feature = "csr")]
pub use http::HttpApiClient;

#[cfg(feature = "csr")]
mod http {
    use async_trait::async_trait;
    use gloo_net::http::{Request, Response};

    use super::{decode_json, decode_save, decode_station, ApiClient};
    use crate::api::{self, LastScan, StationCollection, StationRecord};
    use crate::error::{ApiError, Result};

    /// Browser client using the fetch API via gloo-net
    #[derive(Debug, Clone)]
    pub struct HttpApiClient {
        origin: String,
    }

    impl HttpApiClient {
        pub fn new(origin: impl Into<String>) -> Self {
            Self {
                origin: origin.into(),
            }
        }

        /// Client bound to the origin the page was served from
        pub fn from_window() -> Result<Self> {
            let window =
                web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
            let origin = window
                .location()
                .origin()
                .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
            Ok(Self::new(origin))
        }

        fn url(&self, path: &str) -> String {
            format!("{}{}", self.origin, path)
        }

        async fn read(url: &str, response: Response) -> Result<(u16, String)> {
            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Network(format!("Reading response body: {}", e)))?;
            log::debug!("{} -> {} ({} bytes)", url, status, body.len());
            Ok((status, body))
        }

        async fn get(&self, path: &str) -> Result<(String, u16, String)> {
            let url = self.url(path);
            log::debug!("GET {}", url);
            let response = Request::get(&url)
                .send()
                .await
                .map_err(|e| ApiError::Network(format!("GET {} failed: {}", url, e)))?;
            let (status, body) = Self::read(&url, response).await?;
            Ok((url, status, body))
        }
    }

    #[async_trait(?Send)]
    impl ApiClient for HttpApiClient {
        async fn stations(&self) -> Result<StationCollection> {
            let (url, status, body) = self.get(api::STATIONS_PATH).await?;
            decode_json(status, &url, &body)
        }

        async fn last_scan(&self) -> Result<LastScan> {
            let (url, status, body) = self.get(api::LAST_SCAN_PATH).await?;
            decode_json(status, &url, &body)
        }

        async fn station(&self, mac: &str) -> Result<StationRecord> {
            let (url, status, body) = self.get(&api::station_path(mac)).await?;
            decode_station(mac, status, &url, &body)
        }

        async fn save_station(&self, mac: &str, record: &StationRecord) -> Result<String> {
            let url = self.url(&api::station_path(mac));
            log::debug!("POST {}", url);
            let response = Request::post(&url)
                .json(record)
                .map_err(|e| ApiError::Malformed(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(format!("POST {} failed: {}", url, e)))?;
            let (status, body) = Self::read(&url, response).await?;
            decode_save(status, &url, body)
        }
    }
}
