//! 複数レシピの一括処理
//!
//! レシピは1件ずつ順番に処理し、処理したレシピの間に `recipe_delay` を空ける
//! （最後のレシピの後には待たない）。1件の失敗で全体を止めない。

use crate::error::RecipePhotoError;
use crate::finder::RecipePhotoFinder;
use crate::persistence::{PhotoAssignment, RecipePersistence};
use recipe_photo_common::RecipeRecord;
use serde::Serialize;
use std::time::Duration;

/// バッチ処理の設定
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// 既に画像のあるレシピも処理する
    pub reprocess: bool,
    pub recipe_delay: Duration,
    pub recipe_timeout: Option<Duration>,
    /// 処理対象の最大件数（スキップ分は数えない）
    pub limit: Option<usize>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            reprocess: false,
            recipe_delay: Duration::from_millis(1500),
            recipe_timeout: None,
            limit: None,
        }
    }
}

/// レシピ1件の処理結果
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecipeOutcome {
    Assigned(PhotoAssignment),
    NotFound,
    Skipped { reason: String },
    Failed { error: String },
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItem {
    pub recipe_id: Option<String>,
    pub title: String,
    pub outcome: RecipeOutcome,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub items: Vec<BatchItem>,
    pub success: usize,
    /// 失敗と「見つからない」の合計
    pub failed: usize,
    pub skipped: usize,
    pub total: usize,
}

impl BatchReport {
    fn record(&mut self, item: BatchItem) {
        match item.outcome {
            RecipeOutcome::Assigned(_) => self.success += 1,
            RecipeOutcome::NotFound | RecipeOutcome::Failed { .. } => self.failed += 1,
            RecipeOutcome::Skipped { .. } => self.skipped += 1,
        }
        self.total += 1;
        self.items.push(item);
    }
}

pub struct BatchRunner<'a> {
    finder: &'a RecipePhotoFinder,
    persistence: &'a dyn RecipePersistence,
    options: BatchOptions,
}

impl<'a> BatchRunner<'a> {
    pub fn new(
        finder: &'a RecipePhotoFinder,
        persistence: &'a dyn RecipePersistence,
        options: BatchOptions,
    ) -> Self {
        Self {
            finder,
            persistence,
            options,
        }
    }

    pub async fn run(&self, recipes: &[RecipeRecord]) -> BatchReport {
        self.run_with_progress(recipes, |_, _, _| {}).await
    }

    /// 1件ごとに `on_item(番号, 件数, 結果)` を呼びながら処理する
    pub async fn run_with_progress<F>(&self, recipes: &[RecipeRecord], mut on_item: F) -> BatchReport
    where
        F: FnMut(usize, usize, &BatchItem),
    {
        let mut report = BatchReport::default();
        let mut processed = 0usize;
        let count = recipes.len();

        for (index, recipe) in recipes.iter().enumerate() {
            let skip_reason = if self.options.limit.is_some_and(|limit| processed >= limit) {
                Some("処理件数の上限に達しました")
            } else if !self.options.reprocess && recipe.has_existing_image() {
                Some("既に画像があります")
            } else {
                None
            };

            let outcome = match skip_reason {
                Some(reason) => {
                    tracing::debug!(title = %recipe.title, reason, "Skipping recipe");
                    RecipeOutcome::Skipped { reason: reason.to_string() }
                }
                None => {
                    if processed > 0 && !self.options.recipe_delay.is_zero() {
                        tokio::time::sleep(self.options.recipe_delay).await;
                    }
                    processed += 1;
                    self.process(recipe).await
                }
            };

            let item = BatchItem {
                recipe_id: recipe.id.clone(),
                title: recipe.title.clone(),
                outcome,
            };
            on_item(index + 1, count, &item);
            report.record(item);
        }

        tracing::info!(
            success = report.success,
            failed = report.failed,
            skipped = report.skipped,
            total = report.total,
            "Batch finished"
        );
        report
    }

    async fn process(&self, recipe: &RecipeRecord) -> RecipeOutcome {
        let found = match self.options.recipe_timeout {
            Some(limit) => match tokio::time::timeout(limit, self.finder.find(recipe)).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    let err = RecipePhotoError::Timeout(limit.as_secs());
                    tracing::warn!(title = %recipe.title, "{}", err);
                    return RecipeOutcome::Failed { error: err.to_string() };
                }
            },
            None => self.finder.find(recipe).await,
        };

        let Some(assignment) = found.assignment else {
            return RecipeOutcome::NotFound;
        };

        match self.persistence.save_assignment(&assignment).await {
            Ok(()) => RecipeOutcome::Assigned(assignment),
            Err(e) => {
                tracing::warn!(title = %recipe.title, error = %e, "Failed to save assignment");
                RecipeOutcome::Failed { error: e.to_string() }
            }
        }
    }
}
