//! Links between views

/// Views reachable by URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    /// `/`
    Stations,
    /// `/{mac}`
    Station(String),
}

impl AppRoute {
    pub fn href(&self) -> String {
        match self {
            AppRoute::Stations => "/".to_string(),
            AppRoute::Station(mac) => format!("/{}", mac),
        }
    }
}
