use crate::error::{RecipePhotoError, Result};
use recipe_photo_common::{PhotoSource, MAX_QUERIES};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const UNSPLASH_KEY_ENV: &str = "UNSPLASH_ACCESS_KEY";
pub const PEXELS_KEY_ENV: &str = "PEXELS_API_KEY";

const MIN_PROVIDER_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub unsplash_access_key: Option<String>,
    pub pexels_api_key: Option<String>,
    /// プロバイダの優先順位
    pub provider_order: Vec<PhotoSource>,
    /// 同一プロバイダへの連続呼び出しの間隔（1000未満は1000として扱う）
    pub provider_delay_ms: u64,
    /// バッチ処理でのレシピ間の待ち時間
    pub recipe_delay_ms: u64,
    /// 検索クエリ数の上限（最大4）
    pub max_queries: usize,
    /// HTTPリクエストのタイムアウト
    pub timeout_seconds: u64,
    /// 1レシピあたりのタイムアウト（未設定なら無制限）
    pub recipe_timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unsplash_access_key: None,
            pexels_api_key: None,
            provider_order: vec![PhotoSource::Unsplash, PhotoSource::Pexels],
            provider_delay_ms: 1000,
            recipe_delay_ms: 1500,
            max_queries: MAX_QUERIES,
            timeout_seconds: 30,
            recipe_timeout_seconds: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| RecipePhotoError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("recipe-photo").join("config.json"))
    }

    /// プロバイダのAPIキー（環境変数を優先）
    pub fn api_key(&self, source: PhotoSource) -> Option<String> {
        let (env_name, stored) = match source {
            PhotoSource::Unsplash => (UNSPLASH_KEY_ENV, &self.unsplash_access_key),
            PhotoSource::Pexels => (PEXELS_KEY_ENV, &self.pexels_api_key),
        };

        resolve_key(std::env::var(env_name).ok(), stored.as_deref())
    }

    pub fn set_api_key(&mut self, source: PhotoSource, key: String) -> Result<()> {
        match source {
            PhotoSource::Unsplash => self.unsplash_access_key = Some(key),
            PhotoSource::Pexels => self.pexels_api_key = Some(key),
        }
        self.save()
    }

    pub fn provider_delay(&self) -> Duration {
        Duration::from_millis(self.provider_delay_ms.max(MIN_PROVIDER_DELAY_MS))
    }

    pub fn max_queries(&self) -> usize {
        self.max_queries.clamp(1, MAX_QUERIES)
    }

    pub fn recipe_delay(&self) -> Duration {
        Duration::from_millis(self.recipe_delay_ms)
    }

    pub fn recipe_timeout(&self) -> Option<Duration> {
        self.recipe_timeout_seconds.map(Duration::from_secs)
    }
}

/// 空でない方のキーを選ぶ（環境変数が優先）
fn resolve_key(env_value: Option<String>, stored: Option<&str>) -> Option<String> {
    let non_blank = |key: &String| !key.trim().is_empty();
    env_value
        .filter(non_blank)
        .or_else(|| stored.map(str::to_string).filter(non_blank))
}

/// キーを表示用に伏せる
pub fn mask_key(key: &str) -> String {
    let visible: String = key.chars().take(4).collect();
    if key.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{}****", visible)
    }
}
