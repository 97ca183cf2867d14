//! 料理分類
//!
//! 正規化済みテキストから料理の種類を判定し、検索クエリを決める。
//! ルールは `DISH_RULES` の順に評価し、最初に一致したものを採用する。
//! 順序で結果が変わるので入れ替えないこと（例: "chicken alfredo" は
//! ソース判定より後、チキン判定の中でパスタとして扱う）。

use crate::keywords::*;
use crate::normalizer::RecipeContext;
use crate::types::{Dietary, DishClassification, DishType};
use regex::Regex;
use std::collections::HashSet;

/// 分類ルール（判定関数と分類関数の組）
pub struct DishRule {
    pub name: &'static str,
    pub matches: fn(&RecipeContext) -> bool,
    pub classify: fn(&RecipeContext) -> DishClassification,
}

/// 評価順の分類ルール
pub const DISH_RULES: &[DishRule] = &[
    DishRule { name: "sauce", matches: is_sauce, classify: classify_sauce },
    DishRule { name: "pasta", matches: is_pasta, classify: classify_pasta },
    DishRule { name: "chicken", matches: is_chicken, classify: classify_chicken },
    DishRule { name: "breakfast", matches: is_breakfast, classify: classify_breakfast },
    DishRule { name: "dessert", matches: is_dessert, classify: classify_dessert },
    DishRule { name: "soup", matches: is_soup, classify: classify_soup },
    DishRule { name: "fallback", matches: always, classify: classify_fallback },
];

/// レシピを分類する
///
/// 必ず1件以上の空でないクエリを返す。
pub fn classify(ctx: &RecipeContext) -> DishClassification {
    let rule = DISH_RULES
        .iter()
        .find(|rule| (rule.matches)(ctx))
        .unwrap_or(&DISH_RULES[DISH_RULES.len() - 1]);

    let mut result = (rule.classify)(ctx);
    result.queries = finalize_queries(result.queries);
    result
}

/// 一致したルール名（ログ・ドライラン表示用）
pub fn matched_rule_name(ctx: &RecipeContext) -> &'static str {
    DISH_RULES
        .iter()
        .find(|rule| (rule.matches)(ctx))
        .map(|rule| rule.name)
        .unwrap_or("fallback")
}

fn build(
    dish_type: DishType,
    sub_type: Option<&str>,
    dietary: Dietary,
    queries: &[&str],
) -> DishClassification {
    DishClassification {
        dish_type,
        sub_type: sub_type.map(str::to_string),
        dietary,
        queries: queries.iter().map(|q| q.to_string()).collect(),
    }
}

/// 空・重複を除き、最低1件を保証
fn finalize_queries(queries: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result: Vec<String> = queries
        .into_iter()
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty() && q != "food")
        .filter(|q| seen.insert(q.clone()))
        .collect();

    if result.is_empty() {
        result.push(SAFETY_QUERY.to_string());
    }
    result
}

// ---------------------------------------------------------------------------
// ソース
// ---------------------------------------------------------------------------

fn is_sauce(ctx: &RecipeContext) -> bool {
    ctx.title.contains("sauce") || ctx.category == "sauces" || ctx.description.contains("sauce")
}

fn classify_sauce(ctx: &RecipeContext) -> DishClassification {
    if ctx.title.contains("alfredo") || ctx.description.contains("alfredo") {
        let vegan = contains_any(&ctx.all_text(), VEGAN_MARKERS);
        return if vegan {
            build(DishType::Sauce, Some("alfredo"), Dietary::Vegan, ALFREDO_VEGAN_QUERIES)
        } else {
            build(DishType::Sauce, Some("alfredo"), Dietary::Regular, ALFREDO_REGULAR_QUERIES)
        };
    }

    if ctx.title.contains("marinara") || ctx.title.contains("tomato") || ctx.ingredients_text.contains("tomato") {
        return build(DishType::Sauce, Some("tomato"), Dietary::Regular, TOMATO_SAUCE_QUERIES);
    }

    if ctx.title.contains("pesto") {
        return build(DishType::Sauce, Some("pesto"), Dietary::Regular, PESTO_QUERIES);
    }

    build(DishType::Sauce, Some("generic"), Dietary::Regular, GENERIC_SAUCE_QUERIES)
}

// ---------------------------------------------------------------------------
// パスタ・麺
// ---------------------------------------------------------------------------

fn is_pasta(ctx: &RecipeContext) -> bool {
    contains_any(&ctx.title, PASTA_TITLE_TERMS) || contains_any(&ctx.ingredients_text, PASTA_INGREDIENT_TERMS)
}

fn classify_pasta(ctx: &RecipeContext) -> DishClassification {
    let title = &ctx.title;

    // チーズ・肉の有無ではクエリを変えない
    if title.contains("lasagna") || title.contains("lasagne") {
        return build(DishType::Pasta, Some("lasagna"), Dietary::Regular, LASAGNA_QUERIES);
    }

    if title.contains("drunken") {
        // イタリアン指定がなければタイ風とみなす
        return if title.contains("italian") {
            build(
                DishType::Pasta,
                Some("italian_drunken_noodles"),
                Dietary::Regular,
                ITALIAN_DRUNKEN_NOODLES_QUERIES,
            )
        } else {
            build(DishType::Pasta, Some("thai_noodles"), Dietary::Regular, THAI_NOODLES_QUERIES)
        };
    }

    if title.contains("carbonara") {
        return build(DishType::Pasta, Some("carbonara"), Dietary::Regular, CARBONARA_QUERIES);
    }

    build(DishType::Pasta, Some("generic"), Dietary::Regular, GENERIC_PASTA_QUERIES)
}

// ---------------------------------------------------------------------------
// チキン
// ---------------------------------------------------------------------------

fn is_chicken(ctx: &RecipeContext) -> bool {
    ctx.title.contains("chicken") || ctx.ingredients_text.contains("chicken")
}

fn classify_chicken(ctx: &RecipeContext) -> DishClassification {
    let title = &ctx.title;

    if title.contains("sweet") && title.contains("sour") {
        return build(DishType::Meat, Some("sweet_sour_chicken"), Dietary::Regular, SWEET_SOUR_CHICKEN_QUERIES);
    }

    if title.contains("pineapple") {
        return build(DishType::Meat, Some("pineapple_chicken"), Dietary::Regular, PINEAPPLE_CHICKEN_QUERIES);
    }

    // チキンアルフレッドはパスタ扱い
    if title.contains("alfredo") {
        return build(DishType::Pasta, Some("chicken_alfredo"), Dietary::Regular, CHICKEN_ALFREDO_QUERIES);
    }

    build(DishType::Meat, Some("chicken"), Dietary::Regular, GENERIC_CHICKEN_QUERIES)
}

// ---------------------------------------------------------------------------
// 朝食・デザート・スープ
// ---------------------------------------------------------------------------

fn is_breakfast(ctx: &RecipeContext) -> bool {
    ctx.category == "breakfast" || contains_any(&ctx.title, BREAKFAST_TITLE_TERMS)
}

fn classify_breakfast(_ctx: &RecipeContext) -> DishClassification {
    build(DishType::Breakfast, None, Dietary::Regular, BREAKFAST_QUERIES)
}

fn is_dessert(ctx: &RecipeContext) -> bool {
    ctx.category == "desserts" || contains_any(&ctx.title, DESSERT_TITLE_TERMS)
}

fn classify_dessert(_ctx: &RecipeContext) -> DishClassification {
    build(DishType::Dessert, None, Dietary::Regular, DESSERT_QUERIES)
}

fn is_soup(ctx: &RecipeContext) -> bool {
    ctx.category == "soups" || contains_any(&ctx.title, SOUP_TITLE_TERMS)
}

fn classify_soup(_ctx: &RecipeContext) -> DishClassification {
    build(DishType::Soup, None, Dietary::Regular, SOUP_QUERIES)
}

// ---------------------------------------------------------------------------
// フォールバック
// ---------------------------------------------------------------------------

fn always(_ctx: &RecipeContext) -> bool {
    true
}

fn classify_fallback(ctx: &RecipeContext) -> DishClassification {
    let clean = clean_title(&ctx.display_title);
    let mut queries = Vec::new();

    if !clean.is_empty() {
        queries.push(format!("{} food", clean));
        queries.push(format!("homemade {}", clean));
        queries.push(format!("{} dish", clean));
    }

    if !ctx.category.is_empty() && ctx.category != UNSPECIFIC_CATEGORY {
        queries.push(format!("{} food", ctx.category));
    }

    DishClassification {
        dish_type: DishType::Generic,
        sub_type: None,
        dietary: Dietary::Regular,
        queries,
    }
}

/// タイトルからブランド名・末尾の番号・引用符を除去
///
/// 大文字小文字は保持する（"Doc Bear's Backyard Surprise III" → "Backyard Surprise"）。
pub fn clean_title(title: &str) -> String {
    lazy_static::lazy_static! {
        static ref BRAND_RE: Regex = Regex::new(r"(?i)doc bear'?s?").unwrap();
        // 末尾のローマ数字（I〜III）または数字
        static ref TRAILING_NUMBER_RE: Regex = Regex::new(r"(?i)\s+(i{1,3}|\d+)$").unwrap();
        static ref QUOTE_RE: Regex = Regex::new(r#"['"]"#).unwrap();
        static ref SPACES_RE: Regex = Regex::new(r"\s+").unwrap();
    }

    let without_brand = BRAND_RE.replace_all(title.trim(), "");
    let without_number = TRAILING_NUMBER_RE.replace(&without_brand, "");
    let without_quotes = QUOTE_RE.replace_all(&without_number, "");
    // 除去した跡の連続空白は1つにまとめる
    SPACES_RE.replace_all(without_quotes.trim(), " ").into_owned()
}
