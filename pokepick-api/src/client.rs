//! PokéAPI client

use log::debug;
use url::Url;

use crate::error::ApiError;
use crate::model::NamedResource;
use crate::model::PokemonPage;

/// Base URL of the public PokéAPI.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co";

/// Client for the PokéAPI list endpoints.
///
/// Cheap to clone and safe to share across tasks.
///
/// # Example
///
/// ```ignore
/// use pokepick_api::Client;
///
/// let client = Client::new();
/// let pokemon = client.list_pokemon(50, 0).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Creates a client pointing at the public PokéAPI.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Creates a client pointing at a custom base URL.
    ///
    /// The URL is validated eagerly so a bad endpoint fails here rather than
    /// on the first request.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into();
        Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;

        Ok(Self {
            base_url,
            http_client: reqwest::Client::new(),
        })
    }

    /// Returns the base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches one page of the Pokémon list.
    ///
    /// Results come back in the API's own order (numeric id); see
    /// [`crate::model::sort_by_name`] for alphabetical presentation.
    pub async fn list_pokemon(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<NamedResource>, ApiError> {
        let url = format!(
            "{}/api/v2/pokemon?limit={limit}&offset={offset}",
            self.base_url.trim_end_matches('/')
        );

        debug!("GET {url}");
        let response = self.http_client.get(&url).send().await?;

        if response.status().is_success() {
            let page: PokemonPage = response.json().await?;
            debug!("fetched {} of {} pokemon", page.results.len(), page.count);
            Ok(page.results)
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::http(status, body))
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
