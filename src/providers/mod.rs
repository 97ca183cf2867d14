//! 写真プロバイダ
//!
//! 外部の写真検索APIを共通の `PhotoProvider` トレイトで扱う。

pub mod pexels;
pub mod rate_limiter;
pub mod unsplash;

use async_trait::async_trait;
use recipe_photo_common::{Candidate, PhotoSource, SearchMode};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub use pexels::PexelsProvider;
pub use rate_limiter::RateLimiter;
pub use unsplash::UnsplashProvider;

use crate::config::Config;

/// プロバイダ呼び出しのエラー
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Missing credentials for {0}")]
    MissingCredentials(PhotoSource),
}

/// 写真検索プロバイダ
#[async_trait]
pub trait PhotoProvider: Send + Sync {
    fn source(&self) -> PhotoSource;

    /// 認証情報があり呼び出せるか
    fn is_available(&self) -> bool;

    /// クエリで写真を検索する（レスポンス順を保つ）
    async fn search(&self, query: &str) -> Result<Vec<Candidate>, ProviderError>;
}

pub(crate) fn http_client(timeout: Duration) -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .user_agent(concat!("recipe-photo/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
        .map_err(|e| ProviderError::Network(e.to_string()))
}

/// 設定の優先順位どおりにプロバイダを組み立てる
///
/// キーのないプロバイダも含めて返す（呼び出し側で `is_available` により除外される）。
pub fn build_providers(
    config: &Config,
    mode: SearchMode,
) -> Result<Vec<Arc<dyn PhotoProvider>>, ProviderError> {
    let timeout = Duration::from_secs(config.timeout_seconds);
    let mut providers: Vec<Arc<dyn PhotoProvider>> = Vec::new();

    for source in &config.provider_order {
        if providers.iter().any(|p| p.source() == *source) {
            continue;
        }
        let key = config.api_key(*source);
        let provider: Arc<dyn PhotoProvider> = match source {
            PhotoSource::Unsplash => Arc::new(UnsplashProvider::new(key, mode, timeout)?),
            PhotoSource::Pexels => Arc::new(PexelsProvider::new(key, timeout)?),
        };
        providers.push(provider);
    }

    Ok(providers)
}
