//! 型定義
//!
//! CLIとライブラリで共有される型:
//! - RecipeRecord: 入力レシピ
//! - DishClassification: 料理分類の結果
//! - Candidate / ScoredCandidate: プロバイダから得た写真候補
//! - SelectionResult: 最終選択結果

use serde::{Deserialize, Serialize};
use std::fmt;

/// 入力レシピ（保存済みレシピのJSON表現）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeRecord {
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub ingredients: Vec<Ingredient>,
    pub tags: Vec<String>,
    pub category: Option<String>,

    /// 既存の外部画像URL
    pub image_url: Option<String>,
    pub has_photos: bool,
    pub uploaded_image: Option<StoredImage>,
    pub extracted_image: Option<StoredImage>,
}

/// 既定のプレースホルダ画像
pub const PLACEHOLDER_IMAGE_URL: &str = "/images/recipe-placeholder.jpg";

impl RecipeRecord {
    /// タイトルのみのレシピ（テスト・CLI用）
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// 既に何らかの画像を持っているか
    pub fn has_existing_image(&self) -> bool {
        let external = self
            .image_url
            .as_deref()
            .map(|url| !url.trim().is_empty() && url != PLACEHOLDER_IMAGE_URL)
            .unwrap_or(false);
        let uploaded = self.uploaded_image.as_ref().map(StoredImage::has_data).unwrap_or(false);
        let extracted = self.extracted_image.as_ref().map(StoredImage::has_data).unwrap_or(false);

        self.has_photos || external || uploaded || extracted
    }
}

/// 材料（文字列または構造化オブジェクト）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Ingredient {
    Plain(String),
    Structured {
        #[serde(default)]
        name: Option<String>,
    },
}

impl Ingredient {
    /// 材料名（構造化材料で名前がない場合は空）
    pub fn name(&self) -> &str {
        match self {
            Ingredient::Plain(text) => text,
            Ingredient::Structured { name } => name.as_deref().unwrap_or(""),
        }
    }
}

impl From<&str> for Ingredient {
    fn from(value: &str) -> Self {
        Ingredient::Plain(value.to_string())
    }
}

/// アップロード済み・抽出済みの画像
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredImage {
    pub data: Option<String>,
}

impl StoredImage {
    fn has_data(&self) -> bool {
        self.data.as_deref().map(|d| !d.is_empty()).unwrap_or(false)
    }
}

/// 料理の大分類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DishType {
    Sauce,
    Pasta,
    Meat,
    Breakfast,
    Dessert,
    Soup,
    Generic,
}

impl fmt::Display for DishType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DishType::Sauce => "sauce",
            DishType::Pasta => "pasta",
            DishType::Meat => "meat",
            DishType::Breakfast => "breakfast",
            DishType::Dessert => "dessert",
            DishType::Soup => "soup",
            DishType::Generic => "generic",
        };
        write!(f, "{}", name)
    }
}

/// 食事制限
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dietary {
    #[default]
    Regular,
    Vegan,
}

/// 料理分類の結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishClassification {
    pub dish_type: DishType,
    pub sub_type: Option<String>,
    pub dietary: Dietary,
    /// 検索クエリ（具体的なものから順）
    pub queries: Vec<String>,
}

/// 写真プロバイダ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoSource {
    Unsplash,
    Pexels,
}

impl PhotoSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhotoSource::Unsplash => "unsplash",
            PhotoSource::Pexels => "pexels",
        }
    }

    /// 帰属表示の文言
    pub fn attribution(&self, photographer: &str) -> String {
        match self {
            PhotoSource::Unsplash => format!("Photo by {} on Unsplash", photographer),
            PhotoSource::Pexels => format!("Photo by {} from Pexels", photographer),
        }
    }
}

impl fmt::Display for PhotoSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PhotoSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unsplash" => Ok(PhotoSource::Unsplash),
            "pexels" => Ok(PhotoSource::Pexels),
            _ => Err(format!("Unknown provider: {}. Use unsplash or pexels", s)),
        }
    }
}

/// プロバイダから返された写真候補
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub url: String,
    pub thumbnail_url: String,
    pub description: String,
    pub source: PhotoSource,
    pub attribution_name: String,
    pub width: u32,
    pub height: u32,
    pub likes: u32,
}

impl Candidate {
    pub fn attribution(&self) -> String {
        self.source.attribution(&self.attribution_name)
    }
}

/// スコア付き候補
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub score: i32,
    pub confidence: f64,
    pub matched_query: String,
}

impl ScoredCandidate {
    /// 並べ替えに使う重み（score + confidence * 5）
    pub fn rank_weight(&self) -> f64 {
        self.score as f64 + self.confidence * 5.0
    }
}

/// 写真選択の結果
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionResult {
    Chosen(ScoredCandidate),
    NotFound,
}

impl SelectionResult {
    pub fn chosen(&self) -> Option<&ScoredCandidate> {
        match self {
            SelectionResult::Chosen(scored) => Some(scored),
            SelectionResult::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SelectionResult::Chosen(_))
    }
}
