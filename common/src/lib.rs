//! Recipe Photo Common Library
//!
//! レシピ写真割り当ての純粋ロジック（I/Oなし）:
//! 正規化 → 料理分類 → クエリ計画 → スコアリング → 選択

pub mod types;
pub mod error;
pub mod normalizer;
pub mod keywords;
pub mod classifier;
pub mod planner;
pub mod filter;
pub mod scorer;
pub mod selector;
pub mod parser;

pub use types::{
    Candidate, Dietary, DishClassification, DishType, Ingredient, PhotoSource, RecipeRecord,
    ScoredCandidate, SelectionResult,
};
pub use error::{Error, Result};
pub use normalizer::{normalize, RecipeContext};
pub use classifier::{classify, matched_rule_name};
pub use planner::{plan, plan_with_limit, PlannedQuery, SearchMode, MAX_QUERIES};
pub use filter::passes_food_filter;
pub use scorer::{best_of_response, score};
pub use selector::select;
pub use parser::{load_recipes, parse_recipes};
