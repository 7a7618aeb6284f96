use super::api_types::StaffMember;
use crate::pipeline::{
    Result,
    cast::{CastEntry, CastOrigin, CastSource, filter_unofficial_staff},
    provider::HttpClient,
};
use async_trait::async_trait;
use tracing::debug;

const UNOFFICIAL_BASE_URL: &str = "https://kinopoiskapiunofficial.tech";

/// Secondary cast source (kinopoiskapiunofficial.tech)
pub struct UnofficialProvider {
    client: HttpClient,
}

impl UnofficialProvider {
    pub fn new(api_key: &str) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new(UNOFFICIAL_BASE_URL, api_key)?,
        })
    }

    /// Custom base URL, used by tests
    pub fn with_base_url(base_url: impl Into<String>, api_key: &str) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new(base_url, api_key)?,
        })
    }

    /// Fetch the raw staff array for one film id
    pub async fn get_staff(&self, film_id: &str) -> Result<Vec<StaffMember>> {
        debug!("Fetching staff for film {film_id} from unofficial API");
        self.client
            .get_with_params("/api/v1/staff", &[("filmId", film_id)])
            .await
    }
}

#[async_trait]
impl CastSource for UnofficialProvider {
    fn origin(&self) -> CastOrigin {
        CastOrigin::Unofficial
    }

    async fn fetch_cast(&self, film_id: &str) -> Result<Vec<CastEntry>> {
        let staff = self.get_staff(film_id).await?;
        Ok(filter_unofficial_staff(&staff))
    }
}
