//! Pexels 検索API

use super::{http_client, PhotoProvider, ProviderError};
use async_trait::async_trait;
use recipe_photo_common::{Candidate, PhotoSource};
use serde::Deserialize;
use std::time::Duration;

pub const PEXELS_BASE_URL: &str = "https://api.pexels.com";

const DEFAULT_DESCRIPTION: &str = "Food photo";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    photos: Vec<PexelsPhoto>,
}

#[derive(Debug, Deserialize)]
struct PexelsPhoto {
    alt: Option<String>,
    src: PexelsSrc,
    #[serde(default)]
    photographer: String,
    #[serde(default)]
    width: u32,
    #[serde(default)]
    height: u32,
}

#[derive(Debug, Deserialize)]
struct PexelsSrc {
    large: String,
    #[serde(default)]
    medium: String,
}

impl From<PexelsPhoto> for Candidate {
    fn from(photo: PexelsPhoto) -> Self {
        Candidate {
            url: photo.src.large,
            thumbnail_url: photo.src.medium,
            description: photo
                .alt
                .filter(|alt| !alt.is_empty())
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            source: PhotoSource::Pexels,
            attribution_name: photo.photographer,
            width: photo.width,
            height: photo.height,
            likes: 0,
        }
    }
}

pub struct PexelsProvider {
    http_client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl PexelsProvider {
    pub fn new(api_key: Option<String>, timeout: Duration) -> Result<Self, ProviderError> {
        Ok(Self {
            http_client: http_client(timeout)?,
            api_key,
            base_url: PEXELS_BASE_URL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl PhotoProvider for PexelsProvider {
    fn source(&self) -> PhotoSource {
        PhotoSource::Pexels
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    async fn search(&self, query: &str) -> Result<Vec<Candidate>, ProviderError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredentials(PhotoSource::Pexels))?;

        let url = format!("{}/v1/search", self.base_url);
        tracing::debug!(query = %query, url = %url, "Querying Pexels API");

        let response = self
            .http_client
            .get(&url)
            .query(&[("query", query), ("per_page", "15"), ("orientation", "landscape")])
            .header("Authorization", key)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api(status.as_u16(), error_text));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        Ok(body.photos.into_iter().map(Candidate::from).collect())
    }
}
