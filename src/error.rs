use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipePhotoError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("写真プロバイダのAPIキーが設定されていません。`recipe-photo config --set-unsplash-key KEY` または `--set-pexels-key KEY` で設定してください")]
    MissingApiKey,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("プロバイダエラー: {0}")]
    Provider(#[from] crate::providers::ProviderError),

    #[error("保存エラー: {0}")]
    Persistence(String),

    #[error("タイムアウト: {0}秒以内に処理が終わりませんでした")]
    Timeout(u64),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] recipe_photo_common::Error),
}

pub type Result<T> = std::result::Result<T, RecipePhotoError>;
