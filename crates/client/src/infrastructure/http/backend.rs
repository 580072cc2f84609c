//! HTTP client for the companion backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use aikata_domain::{CharacterProfile, ChoiceKind, DialogueChoice};
use aikata_protocol::{
    CharacterTurnResponse, CharactersResponse, ChoiceOptionsRequest, ChoiceOptionsResponse,
    DialogueTurnRequest,
};

use crate::ports::{BackendError, CharacterDirectoryPort, DialogueBackendPort};

/// Default backend base URL.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client for the companion dialogue backend.
#[derive(Clone)]
pub struct CompanionApiClient {
    client: Client,
    base_url: String,
}

impl CompanionApiClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client from `API_BASE_URL`, falling back to the default.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
        Self::new(&base_url)
    }

    async fn post_json<Req, Resp>(&self, path: &str, request: &Req) -> Result<Resp, BackendError>
    where
        Req: serde::Serialize + Sync,
        Resp: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(request)
            .send()
            .await
            .map_err(|e| BackendError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status.as_u16()));
        }

        response
            .json::<Resp>()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}

impl Default for CompanionApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[async_trait]
impl DialogueBackendPort for CompanionApiClient {
    async fn character_turn(&self, request: DialogueTurnRequest) -> Result<String, BackendError> {
        let body: CharacterTurnResponse =
            self.post_json("/api/dialogue/character", &request).await?;
        Ok(body.message)
    }

    async fn choice_options(
        &self,
        request: ChoiceOptionsRequest,
    ) -> Result<Vec<DialogueChoice>, BackendError> {
        let body: ChoiceOptionsResponse = self.post_json("/api/dialogue/options", &request).await?;
        Ok(body
            .options
            .into_iter()
            .map(|option| DialogueChoice::new(option.text, ChoiceKind::from_wire(&option.kind)))
            .collect())
    }
}

#[async_trait]
impl CharacterDirectoryPort for CompanionApiClient {
    async fn list_characters(&self) -> Result<Vec<CharacterProfile>, BackendError> {
        let response = self
            .client
            .get(format!("{}/api/characters", self.base_url))
            .send()
            .await
            .map_err(|e| BackendError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status.as_u16()));
        }

        let body: CharactersResponse = response
            .json()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;
        if !body.success {
            return Err(BackendError::InvalidResponse(
                "registry reported success=false".to_string(),
            ));
        }

        Ok(body
            .characters
            .into_iter()
            .map(|record| CharacterProfile {
                id: record.id,
                name: record.name,
                character_image_url: record.character_image_url,
                background_image_url: record.background_image_url,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = CompanionApiClient::new("http://localhost:5000/");
        assert_eq!(client.base_url, "http://localhost:5000");
    }
}
