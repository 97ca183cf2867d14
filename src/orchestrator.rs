//! プロバイダ呼び出しの制御
//!
//! プロバイダは優先順位どおりに1件ずつ順番に呼ぶ（並列にはしない）。
//! 同一プロバイダへの連続呼び出しの間には `provider_delay` を空ける。
//! 間隔の状態は1回の検索の中だけで持つ。

use crate::providers::{PhotoProvider, ProviderError, RateLimiter};
use recipe_photo_common::filter::first_passing;
use recipe_photo_common::{best_of_response, Candidate, PlannedQuery, RecipeContext, ScoredCandidate};
use std::sync::Arc;
use std::time::Duration;

/// 同一プロバイダへの呼び出し間隔（下限）
pub const DEFAULT_PROVIDER_DELAY: Duration = Duration::from_millis(1000);

/// 先着モードで見つかった候補
#[derive(Debug, Clone, PartialEq)]
pub struct FirstMatch {
    pub candidate: Candidate,
    /// 一致したクエリ（検索語）
    pub matched_query: String,
}

pub struct ProviderOrchestrator {
    providers: Vec<Arc<dyn PhotoProvider>>,
    provider_delay: Duration,
}

/// 1回の検索の間だけ使うプロバイダと間隔制御の組
struct Slot<'a> {
    provider: &'a dyn PhotoProvider,
    limiter: RateLimiter,
}

impl<'a> Slot<'a> {
    async fn call(&self, query: &str) -> Vec<Candidate> {
        self.limiter.wait().await;
        let source = self.provider.source();
        let result = self.provider.search(query).await;
        self.limiter.mark().await;

        match result {
            Ok(candidates) => {
                tracing::debug!(provider = %source, query = %query, count = candidates.len(), "Provider returned candidates");
                candidates
            }
            Err(ProviderError::MissingCredentials(_)) => {
                tracing::debug!(provider = %source, "Provider has no credentials");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(provider = %source, query = %query, error = %e, "Provider search failed");
                Vec::new()
            }
        }
    }
}

impl ProviderOrchestrator {
    pub fn new(providers: Vec<Arc<dyn PhotoProvider>>) -> Self {
        Self {
            providers,
            provider_delay: DEFAULT_PROVIDER_DELAY,
        }
    }

    /// 呼び出し間隔を延ばす（既定値より短くはできない）
    pub fn with_provider_delay(mut self, delay: Duration) -> Self {
        self.provider_delay = delay.max(DEFAULT_PROVIDER_DELAY);
        self
    }

    /// 認証情報のあるプロバイダが1つでもあるか
    pub fn has_available_provider(&self) -> bool {
        self.providers.iter().any(|p| p.is_available())
    }

    fn slots(&self) -> Vec<Slot<'_>> {
        self.providers
            .iter()
            .filter(|p| {
                let available = p.is_available();
                if !available {
                    tracing::debug!(provider = %p.source(), "Skipping unavailable provider");
                }
                available
            })
            .map(|p| Slot {
                provider: p.as_ref(),
                limiter: RateLimiter::new(self.provider_delay),
            })
            .collect()
    }

    /// 先着モード
    ///
    /// 先頭のプロバイダで全クエリを順に試し、食品フィルタを通る最初の候補で
    /// 即座に終了する。1件も見つからなければ次のプロバイダで同じことを繰り返す。
    pub async fn first_match(&self, queries: &[PlannedQuery]) -> Option<FirstMatch> {
        for slot in self.slots() {
            for query in queries {
                let candidates = slot.call(&query.search_text).await;
                if let Some(candidate) = first_passing(&candidates) {
                    tracing::info!(provider = %slot.provider.source(), query = %query.term, "First matching photo found");
                    return Some(FirstMatch {
                        candidate: candidate.clone(),
                        matched_query: query.term.clone(),
                    });
                }
            }
            tracing::debug!(provider = %slot.provider.source(), "No match from provider, trying next");
        }

        None
    }

    /// 全候補モード
    ///
    /// クエリごとに全プロバイダを1回ずつ呼び、各応答からスコア最良（正のもの）を
    /// 1件だけ残す。途中で打ち切らず、発見順（クエリ順 → プロバイダ順）で返す。
    pub async fn collect_all(
        &self,
        queries: &[PlannedQuery],
        ctx: &RecipeContext,
        is_dietary_restricted: bool,
    ) -> Vec<ScoredCandidate> {
        let slots = self.slots();
        let mut collected = Vec::new();

        for query in queries {
            for slot in &slots {
                let candidates = slot.call(&query.search_text).await;
                if let Some(best) = best_of_response(&candidates, ctx, &query.term, is_dietary_restricted) {
                    tracing::debug!(
                        provider = %slot.provider.source(),
                        query = %query.term,
                        score = best.score,
                        "Kept best candidate of response"
                    );
                    collected.push(best);
                }
            }
        }

        collected
    }
}
