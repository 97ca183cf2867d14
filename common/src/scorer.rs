//! 関連度スコアリング
//!
//! 候補写真の説明文をレシピと照合し、整数スコアと信頼度を計算する。
//! 加点・減点の重みは `keywords` に定義。
//!
//! | 条件 | 点 |
//! |------|----|
//! | 食品キーワード（11語）1語ごと | +2 |
//! | クエリの単語1語ごと | +5 |
//! | alfredo かつ説明に sauce と white | +10 |
//! | lasagna 一致 | +10 |
//! | chicken 一致 | +8 |
//! | ヴィーガン: 非ヴィーガン語あり | -20 |
//! | ヴィーガン: ヴィーガン向け語あり | +8 |
//! | 無関係語 1語ごと | -3 |
//! | homemade / fresh / delicious のいずれか | +2 |

use crate::keywords::*;
use crate::normalizer::RecipeContext;
use crate::types::{Candidate, ScoredCandidate};

/// 候補をスコアリングする
pub fn score(
    candidate: &Candidate,
    ctx: &RecipeContext,
    matched_query: &str,
    is_dietary_restricted: bool,
) -> ScoredCandidate {
    let value = score_description(&candidate.description, &ctx.title, matched_query, is_dietary_restricted);

    ScoredCandidate {
        candidate: candidate.clone(),
        score: value,
        confidence: confidence(value),
        matched_query: matched_query.to_string(),
    }
}

/// 説明文のスコアを計算する
///
/// `title` は小文字化済みのレシピタイトル。
pub fn score_description(
    description: &str,
    title: &str,
    matched_query: &str,
    is_dietary_restricted: bool,
) -> i32 {
    let description = description.to_lowercase();
    let mut score = 0;

    score += count_matches(&description, SCORE_FOOD_KEYWORDS) as i32 * FOOD_KEYWORD_WEIGHT;

    let query = matched_query.to_lowercase();
    let query_hits = query.split_whitespace().filter(|word| description.contains(word)).count();
    score += query_hits as i32 * QUERY_WORD_WEIGHT;

    if title.contains("alfredo") && description.contains("sauce") && description.contains("white") {
        score += ALFREDO_MATCH_BONUS;
    }
    if title.contains("lasagna") && description.contains("lasagna") {
        score += LASAGNA_MATCH_BONUS;
    }
    if title.contains("chicken") && description.contains("chicken") {
        score += CHICKEN_MATCH_BONUS;
    }

    if is_dietary_restricted && title.contains("vegan") {
        if contains_any(&description, NON_VEGAN_TERMS) {
            score -= NON_VEGAN_PENALTY;
        }
        if contains_any(&description, VEGAN_FRIENDLY_TERMS) {
            score += VEGAN_FRIENDLY_BONUS;
        }
    }

    score -= count_matches(&description, UNRELATED_TERMS) as i32 * UNRELATED_PENALTY;

    if contains_any(&description, QUALITY_TERMS) {
        score += QUALITY_BONUS;
    }

    score
}

/// スコアを 0〜1 の信頼度に変換
pub fn confidence(score: i32) -> f64 {
    (score as f64 / 10.0).clamp(0.0, 1.0)
}

/// 1回の検索結果から最良の候補を選ぶ
///
/// スコアが正のものだけを対象にし、同点なら先に返された候補を採る。
pub fn best_of_response(
    candidates: &[Candidate],
    ctx: &RecipeContext,
    matched_query: &str,
    is_dietary_restricted: bool,
) -> Option<ScoredCandidate> {
    let mut best: Option<ScoredCandidate> = None;

    for candidate in candidates {
        let scored = score(candidate, ctx, matched_query, is_dietary_restricted);
        if scored.score <= 0 {
            continue;
        }
        let better = best.as_ref().map(|b| scored.score > b.score).unwrap_or(true);
        if better {
            best = Some(scored);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::normalize;
    use crate::types::{PhotoSource, RecipeRecord};

    fn candidate(description: &str) -> Candidate {
        Candidate {
            url: "https://img/1".into(),
            thumbnail_url: "https://img/1/small".into(),
            description: description.to_string(),
            source: PhotoSource::Pexels,
            attribution_name: "Bo".into(),
            width: 1200,
            height: 800,
            likes: 3,
        }
    }

    #[test]
    fn test_food_keyword_adds_two() {
        let base = score_description("a bowl", "soup", "zzz", false);
        let more = score_description("a bowl with a plate", "soup", "zzz", false);
        assert_eq!(more - base, 2);
    }

    #[test]
    fn test_query_words_add_five_each() {
        // "creamy" と "white" が一致（"alfredo" は不一致）
        assert_eq!(score_description("creamy white", "x", "creamy white alfredo", false), 10);
    }

    #[test]
    fn test_alfredo_bonus() {
        let title = "vegan alfredo sauce";
        // sauce(+2), white sauce ボーナス(+10)
        assert_eq!(score_description("white sauce", title, "zzz", false), 12);
    }

    #[test]
    fn test_lasagna_and_chicken_bonus() {
        assert_eq!(score_description("lasagna", "cheesy lasagna", "zzz", false), 10);
        // chicken は食品キーワードでもある（+2 +8）
        assert_eq!(score_description("chicken", "roast chicken", "zzz", false), 10);
    }

    #[test]
    fn test_vegan_penalty_is_twenty() {
        let title = "vegan mushroom stroganoff";
        let without = score_description("mushroom bowl", title, "zzz", true);
        let with = score_description("mushroom bowl chicken", title, "zzz", true);
        // chicken は食品キーワード(+2)でもあるため差は -18
        assert_eq!(with - without, -20 + 2);

        let without = score_description("stroganoff bowl", title, "zzz", true);
        let with = score_description("stroganoff bowl beef", title, "zzz", true);
        assert_eq!(with - without, -20);
    }

    #[test]
    fn test_vegan_rules_require_restriction_flag() {
        let title = "vegan chili";
        assert_eq!(score_description("beef chili", title, "zzz", false), 0);
        assert_eq!(score_description("beef chili", title, "zzz", true), -20);
        // 両方発火する
        assert_eq!(score_description("vegan cheese", title, "zzz", true), -20 + 8);
    }

    #[test]
    fn test_unrelated_penalty_uncapped() {
        assert_eq!(
            score_description("people text logo building background person", "x", "zzz", false),
            -18
        );
    }

    #[test]
    fn test_quality_bonus_is_flat() {
        assert_eq!(score_description("homemade fresh delicious", "x", "zzz", false), 2);
    }

    #[test]
    fn test_confidence() {
        assert_eq!(confidence(5), 0.5);
        assert_eq!(confidence(25), 1.0);
        assert_eq!(confidence(-4), 0.0);
    }

    #[test]
    fn test_score_carries_query_and_confidence() {
        let ctx = normalize(&RecipeRecord::titled("Cheesy Lasagna Sheet Pasta"));
        let scored = score(&candidate("Baked lasagna in a dish"), &ctx, "baked lasagna cheese layers", false);

        // dish(+2) + baked,lasagna(+10) + lasagna ボーナス(+10)
        assert_eq!(scored.score, 22);
        assert_eq!(scored.confidence, 1.0);
        assert_eq!(scored.matched_query, "baked lasagna cheese layers");
    }

    #[test]
    fn test_best_of_response_prefers_first_on_tie() {
        let ctx = normalize(&RecipeRecord::titled("Roast Chicken"));
        let mut first = candidate("chicken dish");
        first.url = "first".into();
        let mut second = candidate("dish chicken");
        second.url = "second".into();

        let best = best_of_response(&[candidate("a car"), first, second], &ctx, "zzz", false)
            .expect("候補が選ばれない");
        assert_eq!(best.candidate.url, "first");
    }

    #[test]
    fn test_best_of_response_requires_positive() {
        let ctx = normalize(&RecipeRecord::titled("Roast Chicken"));
        assert!(best_of_response(&[candidate("people in a building")], &ctx, "zzz", false).is_none());
    }
}
