//! 最終候補の選択

use crate::types::{ScoredCandidate, SelectionResult};

/// スコア付き候補から1件を選ぶ
///
/// - スコア 0 以下は除外
/// - `score + confidence * 5` の降順
/// - 同点は発見順（入力順）を維持
pub fn select(scored: Vec<ScoredCandidate>) -> SelectionResult {
    let mut remaining: Vec<ScoredCandidate> = scored.into_iter().filter(|s| s.score > 0).collect();

    // 安定ソートなので同点は先に見つかった方が残る
    remaining.sort_by(|a, b| b.rank_weight().total_cmp(&a.rank_weight()));

    match remaining.into_iter().next() {
        Some(best) => SelectionResult::Chosen(best),
        None => SelectionResult::NotFound,
    }
}
