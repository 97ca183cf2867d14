//! レシピ1件の写真検索
//!
//! 正規化 → 分類 → クエリ計画 → プロバイダ呼び出し → スコアリング → 選択

use crate::orchestrator::ProviderOrchestrator;
use crate::persistence::PhotoAssignment;
use recipe_photo_common::{
    classify, matched_rule_name, normalize, plan_with_limit, select, DishClassification,
    PlannedQuery, RecipeRecord, SearchMode, MAX_QUERIES,
};
use serde::Serialize;

/// 検索せずに分類だけ行った結果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeAnalysis {
    pub title: String,
    /// 一致した分類ルール名
    pub rule: &'static str,
    pub classification: DishClassification,
    pub queries: Vec<PlannedQuery>,
    pub is_dietary_restricted: bool,
}

/// 検索結果
#[derive(Debug, Clone)]
pub struct FindOutcome {
    pub classification: DishClassification,
    pub mode: SearchMode,
    /// 比較した候補数（先着モードでは見つかれば1）
    pub candidates_considered: usize,
    /// 選ばれた写真（見つからなければ None）
    pub assignment: Option<PhotoAssignment>,
}

impl FindOutcome {
    pub fn is_found(&self) -> bool {
        self.assignment.is_some()
    }
}

pub struct RecipePhotoFinder {
    orchestrator: ProviderOrchestrator,
    mode: SearchMode,
    max_queries: usize,
}

impl RecipePhotoFinder {
    pub fn new(orchestrator: ProviderOrchestrator, mode: SearchMode) -> Self {
        Self {
            orchestrator,
            mode,
            max_queries: MAX_QUERIES,
        }
    }

    /// クエリ数の上限（1〜`MAX_QUERIES`）
    pub fn with_max_queries(mut self, max_queries: usize) -> Self {
        self.max_queries = max_queries.clamp(1, MAX_QUERIES);
        self
    }

    /// 分類とクエリ計画だけを行う（プロバイダは呼ばない）
    pub fn analyze(&self, recipe: &RecipeRecord) -> RecipeAnalysis {
        let ctx = normalize(recipe);
        let classification = classify(&ctx);
        let queries = plan_with_limit(&classification, self.mode, self.max_queries);

        RecipeAnalysis {
            title: recipe.title.clone(),
            rule: matched_rule_name(&ctx),
            is_dietary_restricted: ctx.is_dietary_restricted(),
            classification,
            queries,
        }
    }

    /// レシピに合う写真を探す
    pub async fn find(&self, recipe: &RecipeRecord) -> FindOutcome {
        let ctx = normalize(recipe);
        let classification = classify(&ctx);
        let queries = plan_with_limit(&classification, self.mode, self.max_queries);

        tracing::debug!(
            title = %recipe.title,
            rule = matched_rule_name(&ctx),
            dish_type = %classification.dish_type,
            sub_type = ?classification.sub_type,
            queries = queries.len(),
            "Classified recipe"
        );

        let (assignment, candidates_considered) = match self.mode {
            SearchMode::FirstMatch => match self.orchestrator.first_match(&queries).await {
                Some(found) => (
                    Some(PhotoAssignment::from_first_match(recipe, &found.candidate, &found.matched_query)),
                    1,
                ),
                None => (None, 0),
            },
            SearchMode::Scored => {
                let candidates = self
                    .orchestrator
                    .collect_all(&queries, &ctx, ctx.is_dietary_restricted())
                    .await;
                let considered = candidates.len();
                let assignment = select(candidates)
                    .chosen()
                    .map(|scored| PhotoAssignment::from_scored(recipe, scored));
                (assignment, considered)
            }
        };

        match &assignment {
            Some(a) => tracing::info!(title = %recipe.title, source = %a.source, query = %a.search_term, "Photo selected"),
            None => tracing::info!(title = %recipe.title, "No suitable photo found"),
        }

        FindOutcome {
            classification,
            mode: self.mode,
            candidates_considered,
            assignment,
        }
    }
}
