//! プロバイダのHTTPアダプタのテスト（モックサーバー使用）

use recipe_photo::orchestrator::ProviderOrchestrator;
use recipe_photo::providers::{PexelsProvider, PhotoProvider, ProviderError, UnsplashProvider};
use recipe_photo_common::{classify, normalize, plan, PhotoSource, RecipeRecord, SearchMode};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMEOUT: Duration = Duration::from_secs(5);

fn unsplash_body() -> serde_json::Value {
    json!({
        "total": 2,
        "results": [
            {
                "description": "Pesto pasta in a white bowl",
                "alt_description": "green pasta",
                "urls": {"regular": "https://images.example/u1", "small": "https://images.example/u1s"},
                "user": {"name": "Ann Lee"},
                "width": 4000, "height": 2667, "likes": 42
            },
            {
                "description": null,
                "alt_description": null,
                "urls": {"regular": "https://images.example/u2", "small": "https://images.example/u2s"},
                "user": {"name": "Bo"},
                "width": 3000, "height": 2000, "likes": 0
            }
        ]
    })
}

fn pexels_body() -> serde_json::Value {
    json!({
        "page": 1,
        "photos": [
            {
                "alt": "Soup in a bowl",
                "photographer": "Cara Diaz",
                "width": 5000, "height": 3333,
                "src": {"large": "https://images.example/p1", "medium": "https://images.example/p1m"}
            }
        ]
    })
}

/// Unsplash: 認証ヘッダとクエリパラメータを付けて検索し、候補に変換する
#[tokio::test]
async fn test_unsplash_search() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .and(query_param("query", "pesto pasta"))
        .and(query_param("orientation", "landscape"))
        .and(query_param("content_filter", "high"))
        .and(header("Authorization", "Client-ID test-key"))
        .and(header("Accept-Version", "v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(unsplash_body()))
        .expect(1)
        .mount(&server)
        .await;

    let provider = UnsplashProvider::new(Some("test-key".into()), SearchMode::Scored, TIMEOUT)
        .unwrap()
        .with_base_url(server.uri());
    let candidates = provider.search("pesto pasta").await.unwrap();

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].url, "https://images.example/u1");
    assert_eq!(candidates[0].description, "Pesto pasta in a white bowl");
    assert_eq!(candidates[0].likes, 42);
    assert_eq!(candidates[0].attribution(), "Photo by Ann Lee on Unsplash");
    assert_eq!(candidates[1].description, "Food photo");
}

/// Unsplash: 2xx以外はAPIエラー
#[tokio::test]
async fn test_unsplash_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .respond_with(ResponseTemplate::new(401).set_body_string("OAuth error: invalid token"))
        .mount(&server)
        .await;

    let provider = UnsplashProvider::new(Some("bad".into()), SearchMode::FirstMatch, TIMEOUT)
        .unwrap()
        .with_base_url(server.uri());
    let result = provider.search("soup").await;

    match result {
        Err(ProviderError::Api(status, body)) => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid token"));
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

/// Pexels: キーをそのまま Authorization に載せる
#[tokio::test]
async fn test_pexels_search() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("query", "warm soup bowl"))
        .and(query_param("per_page", "15"))
        .and(header("Authorization", "pexels-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pexels_body()))
        .mount(&server)
        .await;

    let provider = PexelsProvider::new(Some("pexels-key".into()), TIMEOUT)
        .unwrap()
        .with_base_url(server.uri());
    let candidates = provider.search("warm soup bowl").await.unwrap();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].source, PhotoSource::Pexels);
    assert_eq!(candidates[0].thumbnail_url, "https://images.example/p1m");
    assert_eq!(candidates[0].attribution(), "Photo by Cara Diaz from Pexels");
}

/// Pexels: 壊れたJSONは解析エラー
#[tokio::test]
async fn test_pexels_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let provider = PexelsProvider::new(Some("k".into()), TIMEOUT)
        .unwrap()
        .with_base_url(server.uri());
    assert!(matches!(provider.search("soup").await, Err(ProviderError::Parse(_))));
}

/// キーがなければ利用不可で、リクエストも送らない
#[tokio::test]
async fn test_missing_key_is_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pexels_body()))
        .expect(0)
        .mount(&server)
        .await;

    let provider = PexelsProvider::new(None, TIMEOUT).unwrap().with_base_url(server.uri());
    assert!(!provider.is_available());
    assert!(matches!(
        provider.search("soup").await,
        Err(ProviderError::MissingCredentials(PhotoSource::Pexels))
    ));
}

/// 片方のプロバイダが落ちていても、もう片方の候補で検索が成立する
#[tokio::test]
async fn test_orchestrator_over_http_with_failing_provider() {
    let unsplash_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/photos"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&unsplash_server)
        .await;

    let pexels_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pexels_body()))
        .mount(&pexels_server)
        .await;

    let providers: Vec<Arc<dyn PhotoProvider>> = vec![
        Arc::new(
            UnsplashProvider::new(Some("u".into()), SearchMode::Scored, TIMEOUT)
                .unwrap()
                .with_base_url(unsplash_server.uri()),
        ),
        Arc::new(
            PexelsProvider::new(Some("p".into()), TIMEOUT)
                .unwrap()
                .with_base_url(pexels_server.uri()),
        ),
    ];
    let orchestrator = ProviderOrchestrator::new(providers);

    let ctx = normalize(&RecipeRecord::titled("Lentil Soup"));
    let queries = plan(&classify(&ctx), SearchMode::Scored);
    let collected = orchestrator.collect_all(&queries, &ctx, false).await;

    // 3クエリ × Pexels のみ
    assert_eq!(collected.len(), 3);
    assert!(collected.iter().all(|c| c.candidate.source == PhotoSource::Pexels));
}
