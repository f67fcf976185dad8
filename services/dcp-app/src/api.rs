//! Wire types for the DCP API
//!
//! These mirror the JSON the DCP server emits for discovered stations.
//! Only the fields the UI reads are typed; everything else is carried in
//! `extra` so a record can be POSTed back without losing data.

use std::fmt;

use chrono::{DateTime, Datelike, Utc};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Path of the station collection endpoint
pub const STATIONS_PATH: &str = "/api/json";

/// Path of the last-scan timestamp endpoint
pub const LAST_SCAN_PATH: &str = "/api/last";

/// Path of the single-station endpoint for `mac`
pub fn station_path(mac: &str) -> String {
    format!("/api/{}", mac)
}

/// IP configuration block of a station
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IpParameter {
    #[serde(rename = "IPAddress", default)]
    pub ip_address: String,
    #[serde(rename = "Subnetmask", default, skip_serializing_if = "Option::is_none")]
    pub subnetmask: Option<String>,
    #[serde(
        rename = "StandardGateway",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub standard_gateway: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Name-of-station block of a station
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NameOfStation {
    #[serde(rename = "NameOfStation", default)]
    pub name_of_station: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single discovered station as returned by `/api/{mac}`
///
/// The outer `Option` of each top-level field records whether the key was
/// sent at all, so an absent key stays absent and a `null` stays `null` when
/// the record is serialized again.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    #[serde(
        rename = "Source",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub source: Option<Value>,
    #[serde(
        rename = "IPParameter",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub ip_parameter: Option<Option<IpParameter>>,
    #[serde(
        rename = "NameOfStation",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub name_of_station: Option<Option<NameOfStation>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Wraps any value that is present in the input, `null` included
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl StationRecord {
    /// Whether the record carries a truthy `Source` marker.
    ///
    /// The server answers unknown keys with an empty record, so this is the
    /// check that a station actually exists.
    pub fn has_source(&self) -> bool {
        match self.source.as_ref().unwrap_or(&Value::Null) {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    pub fn ip_parameter(&self) -> Option<&IpParameter> {
        self.ip_parameter.as_ref().and_then(Option::as_ref)
    }

    pub fn ip_address(&self) -> &str {
        self.ip_parameter()
            .map(|p| p.ip_address.as_str())
            .unwrap_or_default()
    }

    /// Replace `IPParameter.IPAddress`, creating the block if missing
    pub fn set_ip_address(&mut self, ip_address: String) {
        self.ip_parameter
            .get_or_insert(None)
            .get_or_insert_with(IpParameter::default)
            .ip_address = ip_address;
    }

    pub fn station_name(&self) -> &str {
        self.name_of_station
            .as_ref()
            .and_then(Option::as_ref)
            .map(|n| n.name_of_station.as_str())
            .unwrap_or_default()
    }
}

/// One rendered row of the station table
#[derive(Debug, Clone, PartialEq)]
pub struct StationRow {
    /// 1-based position in server order
    pub index: usize,
    pub mac: String,
    pub ip_address: String,
    pub name_of_station: String,
}

/// All stations keyed by MAC, in the order the server sent them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationCollection {
    entries: Vec<(String, StationRecord)>,
}

impl StationCollection {
    pub fn new(entries: Vec<(String, StationRecord)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, mac: &str) -> Option<&StationRecord> {
        self.entries
            .iter()
            .find(|(key, _)| key == mac)
            .map(|(_, record)| record)
    }

    pub fn rows(&self) -> Vec<StationRow> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, (mac, record))| StationRow {
                index: i + 1,
                mac: mac.clone(),
                ip_address: record.ip_address().to_string(),
                name_of_station: record.station_name().to_string(),
            })
            .collect()
    }
}

impl<'de> Deserialize<'de> for StationCollection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CollectionVisitor;

        impl<'de> Visitor<'de> for CollectionVisitor {
            type Value = StationCollection;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping MAC addresses to stations")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((mac, record)) = map.next_entry::<String, StationRecord>()? {
                    entries.push((mac, record));
                }
                Ok(StationCollection { entries })
            }

            // A server with nothing discovered yet may encode its empty map as null
            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(StationCollection::default())
            }
        }

        deserializer.deserialize_any(CollectionVisitor)
    }
}

/// Time of the last discovery scan as returned by `/api/last`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct LastScan(pub DateTime<Utc>);

impl LastScan {
    /// The server reports year 1 until its first scan completes
    pub fn is_never(&self) -> bool {
        self.0.year() <= 1
    }
}
