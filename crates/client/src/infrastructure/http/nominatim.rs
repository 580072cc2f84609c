//! Nominatim reverse-geocoding client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use aikata_domain::{Address, GeoPosition};

use crate::ports::{GeocodeError, ReverseGeocodePort};

/// Default Nominatim base URL.
pub const DEFAULT_NOMINATIM_BASE_URL: &str = "https://nominatim.openstreetmap.org";

const REQUEST_TIMEOUT_SECS: u64 = 10;

// Nominatim's usage policy requires an identifying User-Agent.
const USER_AGENT: &str = concat!("aikata-client/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct NominatimClient {
    client: Client,
    base_url: String,
}

impl NominatimClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from `NOMINATIM_BASE_URL`, falling back to the
    /// public instance.
    pub fn from_env() -> Self {
        let base_url = std::env::var("NOMINATIM_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_NOMINATIM_BASE_URL.to_string());
        Self::new(&base_url)
    }
}

impl Default for NominatimClient {
    fn default() -> Self {
        Self::new(DEFAULT_NOMINATIM_BASE_URL)
    }
}

#[async_trait]
impl ReverseGeocodePort for NominatimClient {
    async fn reverse(&self, position: GeoPosition) -> Result<Option<Address>, GeocodeError> {
        let response = self
            .client
            .get(format!("{}/reverse", self.base_url))
            .query(&[
                ("format", "json".to_string()),
                ("lat", position.latitude.to_string()),
                ("lon", position.longitude.to_string()),
                ("zoom", "18".to_string()),
                ("addressdetails", "1".to_string()),
                ("accept-language", "ja".to_string()),
            ])
            .send()
            .await
            .map_err(|e| GeocodeError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::RequestFailed(format!(
                "HTTP status {}",
                status.as_u16()
            )));
        }

        let body: ReverseResponse = response
            .json()
            .await
            .map_err(|e| GeocodeError::InvalidResponse(e.to_string()))?;
        Ok(body.into_address())
    }
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    display_name: String,
    address: Option<ReverseAddress>,
}

/// The subset of Nominatim address fields the screen uses. Which field
/// carries each level varies by place, hence the either/or pairs.
#[derive(Debug, Default, Deserialize)]
struct ReverseAddress {
    state: Option<String>,
    province: Option<String>,
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    suburb: Option<String>,
    neighbourhood: Option<String>,
    road: Option<String>,
}

impl ReverseResponse {
    fn into_address(self) -> Option<Address> {
        let address = self.address?;
        Some(Address {
            prefecture: address.state.or(address.province).unwrap_or_default(),
            city: address
                .city
                .or(address.town)
                .or(address.village)
                .unwrap_or_default(),
            district: address
                .suburb
                .or(address.neighbourhood)
                .unwrap_or_default(),
            street: address.road.unwrap_or_default(),
            display_name: self.display_name,
        })
    }
}
