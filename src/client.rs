use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;
use crate::error::FetchError;

/// Thin wrapper around a shared `reqwest::Client` rooted at a PokeAPI
/// base URL.
#[derive(Debug, Clone)]
pub struct PokeClient {
    http: reqwest::Client,
    base_url: String,
}

impl PokeClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("dexbrowse/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Self::new(config.base_url.clone())
    }

    pub fn pokemon_list_url(&self, limit: usize) -> String {
        format!("{}/pokemon?limit={}", self.base_url, limit)
    }

    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }

    pub fn species_url(&self, id: u32) -> String {
        format!("{}/pokemon-species/{}", self.base_url, id)
    }

    /// GET `url` and decode the body as JSON. Any non-2xx status is
    /// reported as `FetchError::Status`.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!(%url, "GET");
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        resp.json::<T>().await.map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_rooted_at_base() {
        let client = PokeClient::new("http://localhost:8080/api/v2/").unwrap();
        assert_eq!(
            client.pokemon_list_url(52),
            "http://localhost:8080/api/v2/pokemon?limit=52"
        );
        assert_eq!(
            client.pokemon_url("mr-mime"),
            "http://localhost:8080/api/v2/pokemon/mr-mime"
        );
        assert_eq!(
            client.species_url(122),
            "http://localhost:8080/api/v2/pokemon-species/122"
        );
    }
}
