//! キーワード・クエリ定義
//!
//! 分類ルール・フィルタ・スコアリングで使う固定テーブル。
//! 制御フローから切り離して、ここだけを編集すればルールを調整できる。

// ---------------------------------------------------------------------------
// 料理別の検索クエリ
// ---------------------------------------------------------------------------

pub const ALFREDO_VEGAN_QUERIES: &[&str] = &[
    "vegan alfredo sauce white bowl",
    "cashew cream sauce white",
    "dairy free alfredo sauce",
    "plant based white sauce pasta",
    "vegan pasta sauce creamy white",
];

pub const ALFREDO_REGULAR_QUERIES: &[&str] = &[
    "alfredo sauce white creamy bowl",
    "white pasta sauce parmesan",
    "creamy alfredo sauce dish",
    "traditional alfredo sauce",
];

pub const TOMATO_SAUCE_QUERIES: &[&str] = &[
    "marinara sauce red tomato bowl",
    "tomato pasta sauce red",
    "red pasta sauce bowl",
    "italian tomato sauce",
];

pub const PESTO_QUERIES: &[&str] = &[
    "pesto sauce green basil",
    "basil pesto sauce bowl",
    "green pesto sauce",
    "italian pesto",
];

pub const GENERIC_SAUCE_QUERIES: &[&str] = &[
    "pasta sauce bowl cooking",
    "homemade sauce kitchen",
    "cooking sauce recipe",
];

pub const LASAGNA_QUERIES: &[&str] = &[
    "vegetarian lasagna layers cheese baked",
    "cheese lasagna casserole dish",
    "homemade lasagna layers pasta",
    "baked lasagna cheese layers",
    "lasagna pasta dish italian",
];

pub const ITALIAN_DRUNKEN_NOODLES_QUERIES: &[&str] = &[
    "italian drunken noodles pasta",
    "drunken noodles italian style",
    "pasta with vegetables italian",
    "italian pasta dish colorful",
    "drunken pasta italian recipe",
];

pub const THAI_NOODLES_QUERIES: &[&str] = &[
    "thai drunken noodles pad kee mao",
    "spicy wide rice noodles thai",
    "thai stir fry noodles vegetables",
];

pub const CARBONARA_QUERIES: &[&str] = &[
    "pasta carbonara creamy italian",
    "spaghetti carbonara dish",
    "carbonara pasta bowl",
    "italian carbonara pasta",
];

pub const GENERIC_PASTA_QUERIES: &[&str] = &[
    "pasta dish italian homemade",
    "cooked pasta meal plate",
    "italian pasta dinner",
];

pub const SWEET_SOUR_CHICKEN_QUERIES: &[&str] = &[
    "sweet and sour chicken pieces orange",
    "chinese sweet sour chicken dish",
    "chicken with sweet sour sauce",
    "orange glazed chicken pieces",
    "asian sweet sour chicken",
];

pub const PINEAPPLE_CHICKEN_QUERIES: &[&str] = &[
    "chicken with pineapple chunks tropical",
    "hawaiian chicken pineapple dish",
    "tropical chicken pineapple",
    "grilled chicken pineapple sauce",
];

pub const CHICKEN_ALFREDO_QUERIES: &[&str] = &[
    "chicken alfredo pasta creamy",
    "fettuccine chicken alfredo",
    "chicken pasta alfredo sauce",
    "creamy chicken pasta",
];

pub const GENERIC_CHICKEN_QUERIES: &[&str] = &[
    "cooked chicken dish plate",
    "chicken dinner main course",
    "chicken meal homemade",
];

pub const BREAKFAST_QUERIES: &[&str] = &[
    "breakfast food plate morning",
    "breakfast meal homemade",
    "morning breakfast dish",
];

pub const DESSERT_QUERIES: &[&str] = &[
    "homemade dessert sweet",
    "dessert plate sweet",
    "baked dessert food",
];

pub const SOUP_QUERIES: &[&str] = &[
    "homemade soup bowl",
    "soup dish comfort food",
    "warm soup bowl",
];

/// どのクエリも残らなかった場合の最終クエリ
pub const SAFETY_QUERY: &str = "homemade food";

// ---------------------------------------------------------------------------
// 分類トリガー
// ---------------------------------------------------------------------------

pub const VEGAN_MARKERS: &[&str] = &["vegan", "cashew", "plant"];
pub const PASTA_TITLE_TERMS: &[&str] = &["pasta", "noodles", "lasagna", "spaghetti", "linguine", "fettuccine"];
pub const PASTA_INGREDIENT_TERMS: &[&str] = &["pasta", "noodles"];
pub const BREAKFAST_TITLE_TERMS: &[&str] = &["pancake", "waffle", "breakfast", "cereal", "oatmeal"];
pub const DESSERT_TITLE_TERMS: &[&str] = &["cake", "cookie", "dessert", "pie", "chocolate"];
pub const SOUP_TITLE_TERMS: &[&str] = &["soup", "stew", "broth"];

/// フォールバックでカテゴリクエリを出さないカテゴリ
pub const UNSPECIFIC_CATEGORY: &str = "entrees";

// ---------------------------------------------------------------------------
// 基本フィルタ（先着モード）
// ---------------------------------------------------------------------------

pub const FILTER_FOOD_KEYWORDS: &[&str] = &[
    "food", "dish", "meal", "sauce", "pasta", "chicken", "recipe", "cooking",
    "kitchen", "plate", "bowl", "dinner", "lunch", "breakfast",
];

pub const FILTER_EXCLUDE_KEYWORDS: &[&str] = &[
    "person", "people", "man", "woman", "restaurant", "menu", "logo",
];

// ---------------------------------------------------------------------------
// 関連度スコア
// ---------------------------------------------------------------------------

/// スコア付きモードでクエリに付ける接尾辞
pub const SCORED_QUERY_SUFFIX: &str = " food recipe cooking";

pub const SCORE_FOOD_KEYWORDS: &[&str] = &[
    "food", "dish", "meal", "recipe", "cooking", "kitchen", "plate", "bowl",
    "sauce", "pasta", "chicken",
];
pub const FOOD_KEYWORD_WEIGHT: i32 = 2;
pub const QUERY_WORD_WEIGHT: i32 = 5;
pub const ALFREDO_MATCH_BONUS: i32 = 10;
pub const LASAGNA_MATCH_BONUS: i32 = 10;
pub const CHICKEN_MATCH_BONUS: i32 = 8;

pub const NON_VEGAN_TERMS: &[&str] = &["meat", "dairy", "cheese", "beef", "chicken", "fish"];
pub const NON_VEGAN_PENALTY: i32 = 20;
pub const VEGAN_FRIENDLY_TERMS: &[&str] = &["vegan", "plant", "cashew", "dairy free"];
pub const VEGAN_FRIENDLY_BONUS: i32 = 8;

pub const UNRELATED_TERMS: &[&str] = &["person", "people", "background", "text", "logo", "building"];
pub const UNRELATED_PENALTY: i32 = 3;

pub const QUALITY_TERMS: &[&str] = &["homemade", "fresh", "delicious"];
pub const QUALITY_BONUS: i32 = 2;

/// テキストに含まれるキーワード数
pub fn count_matches(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| text.contains(*k)).count()
}

/// いずれかのキーワードを含むか
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_query_sets_non_empty_and_distinct() {
        let query_sets: &[(&str, &[&str])] = &[
            ("alfredo_vegan", ALFREDO_VEGAN_QUERIES),
            ("alfredo_regular", ALFREDO_REGULAR_QUERIES),
            ("tomato", TOMATO_SAUCE_QUERIES),
            ("pesto", PESTO_QUERIES),
            ("sauce_generic", GENERIC_SAUCE_QUERIES),
            ("lasagna", LASAGNA_QUERIES),
            ("italian_drunken_noodles", ITALIAN_DRUNKEN_NOODLES_QUERIES),
            ("thai_noodles", THAI_NOODLES_QUERIES),
            ("carbonara", CARBONARA_QUERIES),
            ("pasta_generic", GENERIC_PASTA_QUERIES),
            ("sweet_sour_chicken", SWEET_SOUR_CHICKEN_QUERIES),
            ("pineapple_chicken", PINEAPPLE_CHICKEN_QUERIES),
            ("chicken_alfredo", CHICKEN_ALFREDO_QUERIES),
            ("chicken", GENERIC_CHICKEN_QUERIES),
            ("breakfast", BREAKFAST_QUERIES),
            ("dessert", DESSERT_QUERIES),
            ("soup", SOUP_QUERIES),
        ];
        for (key, queries) in query_sets {
            assert!(!queries.is_empty(), "{} が空", key);
            let unique: HashSet<_> = queries.iter().collect();
            assert_eq!(unique.len(), queries.len(), "{} に重複あり", key);
            assert!(queries.iter().all(|q| !q.trim().is_empty()));
        }
    }

    #[test]
    fn test_score_food_keywords_has_eleven_words() {
        assert_eq!(SCORE_FOOD_KEYWORDS.len(), 11);
    }

    #[test]
    fn test_count_matches() {
        assert_eq!(count_matches("a pasta dish in a bowl", SCORE_FOOD_KEYWORDS), 3);
        assert_eq!(count_matches("", SCORE_FOOD_KEYWORDS), 0);
    }

    #[test]
    fn test_contains_any_is_substring() {
        // "woman" は "man" も含む
        assert!(contains_any("a woman", &["man"]));
        assert!(!contains_any("noodles", FILTER_EXCLUDE_KEYWORDS));
    }
}
