//! レシピテキストの正規化
//!
//! レシピの各フィールドを小文字化し、分類・スコアリングで使う
//! `RecipeContext` を組み立てる。

use crate::types::RecipeRecord;
use serde::Serialize;

/// 正規化済みのレシピテキスト
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeContext {
    /// 元の大文字小文字を保ったタイトル（フォールバッククエリ用）
    pub display_title: String,
    pub title: String,
    pub description: String,
    pub ingredients_text: String,
    pub tags_text: String,
    pub category: String,
}

/// 食事制限を示すタイトル内キーワード
const RESTRICTED_TITLE_TERMS: &[&str] = &["vegan", "vegetarian", "gluten"];
/// 食事制限を示すタグ
const RESTRICTED_TAG_TERMS: &[&str] = &["vegan", "vegetarian"];

impl RecipeContext {
    /// 全フィールドを連結したテキスト
    pub fn all_text(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.title, self.description, self.ingredients_text, self.tags_text, self.category
        )
    }

    /// 食事制限のあるレシピか
    pub fn is_dietary_restricted(&self) -> bool {
        RESTRICTED_TITLE_TERMS.iter().any(|t| self.title.contains(t))
            || RESTRICTED_TAG_TERMS.iter().any(|t| self.tags_text.contains(t))
    }
}

/// レシピを正規化する
pub fn normalize(recipe: &RecipeRecord) -> RecipeContext {
    let ingredients_text = recipe
        .ingredients
        .iter()
        .map(|ing| ing.name().to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    let tags_text = recipe.tags.join(" ").to_lowercase();

    // 先頭のハイフンのみ空白に（"main-dish" → "main dish"）
    let category = recipe
        .category
        .as_deref()
        .unwrap_or("")
        .replacen('-', " ", 1)
        .to_lowercase();

    RecipeContext {
        display_title: recipe.title.trim().to_string(),
        title: recipe.title.to_lowercase(),
        description: recipe.description.as_deref().unwrap_or("").to_lowercase(),
        ingredients_text,
        tags_text,
        category,
    }
}
