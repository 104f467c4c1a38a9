use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Origin of the local mock data server, used whenever no runtime
/// configuration is available.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HousingLocationInfo {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub photo: String,
    pub available_units: u32,
    pub wifi: bool,
    pub laundry: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationReceipt {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub received_at: DateTime<Utc>,
}

/// Runtime configuration served as `/config.json` next to the SPA bundle.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(rename = "apiUrl", default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl AppConfig {
    /// Resolved API origin; an unset or empty `apiUrl` falls back to the
    /// local mock data server. A trailing slash is dropped so callers can
    /// join paths with plain formatting.
    pub fn api_url(&self) -> String {
        match self.api_url.as_deref() {
            Some(url) if !url.is_empty() => url.trim_end_matches('/').to_owned(),
            _ => DEFAULT_API_URL.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_falls_back_when_unset_or_empty() {
        assert_eq!(AppConfig::default().api_url(), DEFAULT_API_URL);
        let empty = AppConfig {
            api_url: Some(String::new()),
        };
        assert_eq!(empty.api_url(), DEFAULT_API_URL);
    }

    #[test]
    fn api_url_drops_a_trailing_slash() {
        let config = AppConfig {
            api_url: Some("https://homes.example.com/".to_owned()),
        };
        assert_eq!(config.api_url(), "https://homes.example.com");
    }
}
