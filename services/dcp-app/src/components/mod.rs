//! View components

pub mod error_banner;
pub mod last_scan;
pub mod station_detail;
pub mod station_table;
