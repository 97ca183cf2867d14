//! レシピJSONパーサー
//!
//! エクスポートされたレシピJSONを読み込む。受け付ける形式:
//! 1. レシピの配列 `[...]`
//! 2. `{"recipes": [...]}`
//! 3. 単一のレシピオブジェクト

use crate::error::{Error, Result};
use crate::types::RecipeRecord;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum RecipeDocument {
    List(Vec<RecipeRecord>),
    Wrapped { recipes: Vec<RecipeRecord> },
    Single(RecipeRecord),
}

/// JSON文字列からレシピ一覧をパース
///
/// # Returns
/// * `Ok(Vec<RecipeRecord>)` - パース成功
/// * `Err(Error::Parse)` - 空入力・タイトルのないレシピを含む場合
/// * `Err(Error::Json)` - JSONとして不正な場合
pub fn parse_recipes(json: &str) -> Result<Vec<RecipeRecord>> {
    if json.trim().is_empty() {
        return Err(Error::Parse("レシピJSONが空です".into()));
    }

    // 形式判定の前に構文エラーを拾う
    let value: serde_json::Value = serde_json::from_str(json)?;
    let document: RecipeDocument = serde_json::from_value(value)
        .map_err(|e| Error::Parse(format!("レシピJSONの形式が不正: {}", e)))?;

    let recipes = match document {
        RecipeDocument::List(recipes) => recipes,
        RecipeDocument::Wrapped { recipes } => recipes,
        RecipeDocument::Single(recipe) => vec![recipe],
    };

    if let Some(index) = recipes.iter().position(|r| r.title.trim().is_empty()) {
        return Err(Error::Parse(format!("{}件目のレシピにタイトルがありません", index + 1)));
    }

    Ok(recipes)
}

/// ファイルからレシピ一覧を読み込み
pub fn load_recipes(path: &Path) -> Result<Vec<RecipeRecord>> {
    let content = std::fs::read_to_string(path)?;
    parse_recipes(&content)
}
