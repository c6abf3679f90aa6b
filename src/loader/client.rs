use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tokio::time::timeout;

use crate::config::ApiConfig;
use crate::game::Character;
use crate::loader::error::LoadError;
use crate::loader::CharacterSource;

/// One page of `GET /character`.
#[derive(Debug, Deserialize)]
struct CharacterPage {
    results: Vec<Character>,
}

/// Fetches the first page of characters from the Rick and Morty API.
pub struct RickAndMortyClient {
    client: Client,
    base_url: String,
    count: usize,
    timeout: Duration,
}

impl RickAndMortyClient {
    /// Build a client that yields the first `count` characters of the page.
    pub fn new(api: &ApiConfig, count: usize) -> Result<Self, LoadError> {
        let client = Client::builder()
            .connect_timeout(api.connect_timeout())
            .build()
            .map_err(LoadError::Client)?;

        Ok(Self {
            client,
            base_url: api.base_url.trim_end_matches('/').to_string(),
            count,
            timeout: api.timeout(),
        })
    }

    pub fn characters_url(&self) -> String {
        format!("{}/character", self.base_url)
    }

    async fn fetch(&self, url: &str) -> Result<Vec<Character>, LoadError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| LoadError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| LoadError::Request {
            url: url.to_string(),
            source,
        })?;
        let page: CharacterPage = serde_json::from_str(&body)?;
        take_first(page.results, self.count)
    }
}

#[async_trait]
impl CharacterSource for RickAndMortyClient {
    async fn load_characters(&self) -> Result<Vec<Character>, LoadError> {
        let url = self.characters_url();
        tracing::debug!(url = %url, count = self.count, "Fetching characters");

        match timeout(self.timeout, self.fetch(&url)).await {
            Ok(result) => result,
            Err(_) => Err(LoadError::Timeout {
                duration: self.timeout.as_secs(),
            }),
        }
    }
}

/// Keep the first `count` records in provider order.
fn take_first(mut results: Vec<Character>, count: usize) -> Result<Vec<Character>, LoadError> {
    if results.len() < count {
        return Err(LoadError::NotEnoughCharacters {
            wanted: count,
            got: results.len(),
        });
    }
    results.truncate(count);
    Ok(results)
}
