//! 写真割り当ての保存

use crate::error::{RecipePhotoError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use recipe_photo_common::{Candidate, RecipeRecord, ScoredCandidate, SearchMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// レシピに割り当てた写真
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoAssignment {
    pub recipe_id: Option<String>,
    pub recipe_title: String,
    pub url: String,
    pub thumbnail_url: String,
    pub attribution: String,
    /// `unsplash` / `pexels`（スコアモードは `_ai_enhanced` 付き）
    pub source: String,
    pub search_term: String,
    pub description: String,
    pub score: Option<i32>,
    pub confidence: Option<f64>,
    pub assigned_at: DateTime<Utc>,
}

impl PhotoAssignment {
    fn base(recipe: &RecipeRecord, candidate: &Candidate, search_term: &str, mode: SearchMode) -> Self {
        let source = match mode {
            SearchMode::FirstMatch => candidate.source.as_str().to_string(),
            SearchMode::Scored => format!("{}_ai_enhanced", candidate.source),
        };

        Self {
            recipe_id: recipe.id.clone(),
            recipe_title: recipe.title.clone(),
            url: candidate.url.clone(),
            thumbnail_url: candidate.thumbnail_url.clone(),
            attribution: candidate.attribution(),
            source,
            search_term: search_term.to_string(),
            description: candidate.description.clone(),
            score: None,
            confidence: None,
            assigned_at: Utc::now(),
        }
    }

    /// 先着モードの候補から作る
    pub fn from_first_match(recipe: &RecipeRecord, candidate: &Candidate, search_term: &str) -> Self {
        Self::base(recipe, candidate, search_term, SearchMode::FirstMatch)
    }

    /// スコア付き候補から作る
    pub fn from_scored(recipe: &RecipeRecord, scored: &ScoredCandidate) -> Self {
        Self {
            score: Some(scored.score),
            confidence: Some(scored.confidence),
            ..Self::base(recipe, &scored.candidate, &scored.matched_query, SearchMode::Scored)
        }
    }
}

/// 割り当てを受け取る保存先
#[async_trait]
pub trait RecipePersistence: Send + Sync {
    async fn save_assignment(&self, assignment: &PhotoAssignment) -> Result<()>;
}

/// JSON配列ファイルへ追記する保存先
pub struct JsonFilePersistence {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 保存済みの割り当てを読み込む（ファイルがなければ空）
    pub async fn load(&self) -> Result<Vec<PhotoAssignment>> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Ok(Vec::new());
        }

        let content = tokio::fs::read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            RecipePhotoError::Persistence(format!("{} を読み込めません: {}", self.path.display(), e))
        })
    }
}

#[async_trait]
impl RecipePersistence for JsonFilePersistence {
    async fn save_assignment(&self, assignment: &PhotoAssignment) -> Result<()> {
        let _guard = self.lock.lock().await;

        let mut assignments = self.load().await?;
        assignments.push(assignment.clone());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let json = serde_json::to_string_pretty(&assignments)?;
        tokio::fs::write(&self.path, json).await?;

        tracing::debug!(path = %self.path.display(), count = assignments.len(), "Saved photo assignment");
        Ok(())
    }
}
