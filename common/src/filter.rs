//! 先着モードの基本フィルタ

use crate::keywords::{contains_any, FILTER_EXCLUDE_KEYWORDS, FILTER_FOOD_KEYWORDS};
use crate::types::Candidate;

/// 説明文が料理写真らしいか
///
/// 食品キーワードを含み、除外キーワードを含まない場合に true。
pub fn passes_food_filter(description: &str) -> bool {
    let description = description.to_lowercase();
    contains_any(&description, FILTER_FOOD_KEYWORDS) && !contains_any(&description, FILTER_EXCLUDE_KEYWORDS)
}

/// フィルタを通る最初の候補
pub fn first_passing(candidates: &[Candidate]) -> Option<&Candidate> {
    candidates.iter().find(|c| passes_food_filter(&c.description))
}
