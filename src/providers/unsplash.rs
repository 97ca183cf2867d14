//! Unsplash 検索API

use super::{http_client, PhotoProvider, ProviderError};
use async_trait::async_trait;
use recipe_photo_common::{Candidate, PhotoSource, SearchMode};
use serde::Deserialize;
use std::time::Duration;

pub const UNSPLASH_BASE_URL: &str = "https://api.unsplash.com";

const DEFAULT_DESCRIPTION: &str = "Food photo";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<UnsplashPhoto>,
}

#[derive(Debug, Deserialize)]
struct UnsplashPhoto {
    description: Option<String>,
    alt_description: Option<String>,
    urls: UnsplashUrls,
    user: UnsplashUser,
    #[serde(default)]
    width: u32,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    likes: u32,
}

#[derive(Debug, Deserialize)]
struct UnsplashUrls {
    regular: String,
    #[serde(default)]
    small: String,
}

#[derive(Debug, Deserialize)]
struct UnsplashUser {
    #[serde(default)]
    name: String,
}

impl From<UnsplashPhoto> for Candidate {
    fn from(photo: UnsplashPhoto) -> Self {
        let description = [photo.description, photo.alt_description]
            .into_iter()
            .flatten()
            .find(|d| !d.is_empty())
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

        Candidate {
            url: photo.urls.regular,
            thumbnail_url: photo.urls.small,
            description,
            source: PhotoSource::Unsplash,
            attribution_name: photo.user.name,
            width: photo.width,
            height: photo.height,
            likes: photo.likes,
        }
    }
}

pub struct UnsplashProvider {
    http_client: reqwest::Client,
    access_key: Option<String>,
    base_url: String,
    mode: SearchMode,
}

impl UnsplashProvider {
    pub fn new(access_key: Option<String>, mode: SearchMode, timeout: Duration) -> Result<Self, ProviderError> {
        Ok(Self {
            http_client: http_client(timeout)?,
            access_key,
            base_url: UNSPLASH_BASE_URL.to_string(),
            mode,
        })
    }

    /// 接続先を差し替える（テスト用のモックサーバーなど）
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn query_params<'a>(&self, query: &'a str) -> Vec<(&'static str, &'a str)> {
        match self.mode {
            SearchMode::Scored => vec![
                ("query", query),
                ("per_page", "15"),
                ("orientation", "landscape"),
                ("order_by", "relevance"),
                ("content_filter", "high"),
            ],
            SearchMode::FirstMatch => vec![
                ("query", query),
                ("per_page", "20"),
                ("orientation", "landscape"),
                ("order_by", "relevance"),
            ],
        }
    }
}

#[async_trait]
impl PhotoProvider for UnsplashProvider {
    fn source(&self) -> PhotoSource {
        PhotoSource::Unsplash
    }

    fn is_available(&self) -> bool {
        self.access_key.is_some()
    }

    async fn search(&self, query: &str) -> Result<Vec<Candidate>, ProviderError> {
        let key = self
            .access_key
            .as_deref()
            .ok_or(ProviderError::MissingCredentials(PhotoSource::Unsplash))?;

        let url = format!("{}/search/photos", self.base_url);
        tracing::debug!(query = %query, url = %url, "Querying Unsplash API");

        let response = self
            .http_client
            .get(&url)
            .query(&self.query_params(query))
            .header("Authorization", format!("Client-ID {}", key))
            .header("Accept-Version", "v1")
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

        Ok(body.results.into_iter().map(Candidate::from).collect())
    }
}
