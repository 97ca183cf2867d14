//! 検索クエリ計画
//!
//! 分類結果のクエリを上限件数で切り詰め、検索モードに応じて
//! プロバイダへ送る文字列を決める。

use crate::keywords::SCORED_QUERY_SUFFIX;
use crate::types::DishClassification;
use serde::{Deserialize, Serialize};

/// クエリ数の上限
pub const MAX_QUERIES: usize = 4;

/// 検索モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    /// 最初にフィルタを通った候補で打ち切る
    FirstMatch,
    /// 全プロバイダ・全クエリの候補をスコアで比較
    #[default]
    Scored,
}

impl std::str::FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first-match" | "first" | "fast" => Ok(SearchMode::FirstMatch),
            "scored" | "all" | "ai" => Ok(SearchMode::Scored),
            _ => Err(format!("Unknown mode: {}. Use scored or first-match", s)),
        }
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::FirstMatch => write!(f, "first-match"),
            SearchMode::Scored => write!(f, "scored"),
        }
    }
}

/// 計画済みクエリ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedQuery {
    /// 分類で得たクエリ（スコアリングの照合語）
    pub term: String,
    /// プロバイダへ送る文字列
    pub search_text: String,
}

/// クエリを計画する（上限 `MAX_QUERIES`）
pub fn plan(classification: &DishClassification, mode: SearchMode) -> Vec<PlannedQuery> {
    plan_with_limit(classification, mode, MAX_QUERIES)
}

/// 上限を指定してクエリを計画する（1〜`MAX_QUERIES` に丸める）
pub fn plan_with_limit(
    classification: &DishClassification,
    mode: SearchMode,
    limit: usize,
) -> Vec<PlannedQuery> {
    classification
        .queries
        .iter()
        .take(limit.clamp(1, MAX_QUERIES))
        .map(|term| PlannedQuery {
            term: term.clone(),
            search_text: match mode {
                SearchMode::FirstMatch => term.clone(),
                SearchMode::Scored => format!("{}{}", term, SCORED_QUERY_SUFFIX),
            },
        })
        .collect()
}
