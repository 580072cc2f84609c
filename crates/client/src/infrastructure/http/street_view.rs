//! Street View Static API imagery probe.
//!
//! Existence of imagery is checked with a HEAD request against the image
//! URL; the same URL doubles as the backdrop source when the probe
//! succeeds. Without an API key every probe reports unavailable, which
//! drops resolution straight to the bundled region images.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use aikata_domain::GeoPosition;

use crate::ports::{ImageryError, StreetImageryPort};

/// Default Street View Static API endpoint.
pub const DEFAULT_STREET_VIEW_BASE_URL: &str = "https://maps.googleapis.com/maps/api/streetview";

const REQUEST_TIMEOUT_SECS: u64 = 10;
const IMAGE_SIZE: &str = "1920x1080";

#[derive(Clone)]
pub struct StreetViewClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl StreetViewClient {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
        }
    }

    /// Create a client from `GOOGLE_API_KEY`; the key is optional.
    pub fn from_env() -> Self {
        Self::new(
            DEFAULT_STREET_VIEW_BASE_URL,
            std::env::var("GOOGLE_API_KEY").ok(),
        )
    }

    fn image_url(&self, position: GeoPosition, heading: u16) -> Result<Option<Url>, ImageryError> {
        let Some(key) = self.api_key.as_deref() else {
            return Ok(None);
        };
        let location = format!("{},{}", position.latitude, position.longitude);
        let heading = heading.to_string();
        let url = Url::parse_with_params(
            &self.base_url,
            [
                ("size", IMAGE_SIZE),
                ("location", location.as_str()),
                ("heading", heading.as_str()),
                ("pitch", "0"),
                ("fov", "90"),
                ("key", key),
            ],
        )
        .map_err(|e| ImageryError::InvalidUrl(e.to_string()))?;
        Ok(Some(url))
    }
}

#[async_trait]
impl StreetImageryPort for StreetViewClient {
    async fn probe(
        &self,
        position: GeoPosition,
        heading: u16,
    ) -> Result<Option<String>, ImageryError> {
        let Some(url) = self.image_url(position, heading)? else {
            tracing::debug!("street imagery key not configured, skipping probe");
            return Ok(None);
        };

        let response = self
            .client
            .head(url.clone())
            .send()
            .await
            .map_err(|e| ImageryError::RequestFailed(e.to_string()))?;

        if response.status().is_success() {
            Ok(Some(url.into()))
        } else {
            Ok(None)
        }
    }
}
