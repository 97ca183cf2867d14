//! テスト用のプロバイダ

#![allow(dead_code)]

use async_trait::async_trait;
use recipe_photo::providers::{PhotoProvider, ProviderError};
use recipe_photo_common::{Candidate, PhotoSource};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;

/// クエリごとに決まった応答を返すプロバイダ
pub struct FakeProvider {
    source: PhotoSource,
    available: bool,
    responses: HashMap<String, Result<Vec<Candidate>, u16>>,
    latency: Duration,
    calls: Mutex<Vec<(String, Instant)>>,
    finished: Mutex<Vec<Instant>>,
}

impl FakeProvider {
    pub fn new(source: PhotoSource) -> Self {
        Self {
            source,
            available: true,
            responses: HashMap::new(),
            latency: Duration::ZERO,
            calls: Mutex::new(Vec::new()),
            finished: Mutex::new(Vec::new()),
        }
    }

    pub fn unavailable(source: PhotoSource) -> Self {
        Self {
            available: false,
            ..Self::new(source)
        }
    }

    /// 応答までにかかる時間
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// `search_text` に対する応答（説明文の一覧）
    pub fn respond(mut self, search_text: &str, descriptions: &[&str]) -> Self {
        let candidates = descriptions
            .iter()
            .enumerate()
            .map(|(i, d)| candidate(self.source, &format!("{}-{}-{}", self.source, search_text, i), d))
            .collect();
        self.responses.insert(search_text.to_string(), Ok(candidates));
        self
    }

    /// `search_text` に対してHTTPエラーを返す
    pub fn fail(mut self, search_text: &str, status: u16) -> Self {
        self.responses.insert(search_text.to_string(), Err(status));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(q, _)| q.clone()).collect()
    }

    pub fn call_times(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().iter().map(|(_, t)| *t).collect()
    }

    pub fn finish_times(&self) -> Vec<Instant> {
        self.finished.lock().unwrap().clone()
    }
}

#[async_trait]
impl PhotoProvider for FakeProvider {
    fn source(&self) -> PhotoSource {
        self.source
    }

    fn is_available(&self) -> bool {
        self.available
    }

    async fn search(&self, query: &str) -> Result<Vec<Candidate>, ProviderError> {
        self.calls.lock().unwrap().push((query.to_string(), Instant::now()));
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.finished.lock().unwrap().push(Instant::now());

        match self.responses.get(query) {
            Some(Ok(candidates)) => Ok(candidates.clone()),
            Some(Err(status)) => Err(ProviderError::Api(*status, "fake failure".into())),
            None => Ok(Vec::new()),
        }
    }
}

pub fn candidate(source: PhotoSource, url: &str, description: &str) -> Candidate {
    Candidate {
        url: url.to_string(),
        thumbnail_url: format!("{}/thumb", url),
        description: description.to_string(),
        source,
        attribution_name: "Test Photographer".into(),
        width: 1600,
        height: 1000,
        likes: 0,
    }
}
