use super::api_types::MovieResponse;
use crate::pipeline::{Result, provider::HttpClient};
use tracing::debug;

const KINOPOISK_BASE_URL: &str = "https://api.kinopoisk.dev/v1.4";

/// Primary metadata source (kinopoisk.dev)
pub struct KinopoiskProvider {
    client: HttpClient,
}

impl KinopoiskProvider {
    pub fn new(api_key: &str) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new(KINOPOISK_BASE_URL, api_key)?,
        })
    }

    /// Custom base URL, used by tests and self-hosted mirrors
    pub fn with_base_url(base_url: impl Into<String>, api_key: &str) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new(base_url, api_key)?,
        })
    }

    /// Fetch the full movie payload for one film id.
    ///
    /// 404 maps to `PipelineError::NotFound`, any other non-200 status to
    /// `PipelineError::Api`; both are fatal for the fetch.
    pub async fn get_movie(&self, film_id: &str) -> Result<MovieResponse> {
        debug!("Fetching movie {film_id} from kinopoisk.dev");
        self.client.get(&format!("/movie/{film_id}")).await
    }
}
