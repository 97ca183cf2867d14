use clap::{Parser, Subcommand};
use recipe_photo_common::SearchMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recipe-photo")]
#[command(about = "レシピ写真の自動割り当てツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// レシピを分類し検索クエリを表示（写真検索はしない）
    Classify {
        /// レシピJSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 検索モード (scored/first-match)
        #[arg(short, long, default_value = "scored")]
        mode: SearchMode,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// レシピに合う写真を検索して割り当てる
    Find {
        /// レシピJSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 検索モード (scored/first-match)
        #[arg(short, long, default_value = "scored")]
        mode: SearchMode,

        /// 割り当て結果の出力JSON（デフォルト: 入力ファイルと同じ場所の assignments.json）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 既に画像のあるレシピも再処理
        #[arg(long)]
        reprocess: bool,

        /// 処理するレシピ数の上限
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// 設定を表示・変更
    Config {
        /// UnsplashのAccess Keyを設定
        #[arg(long)]
        set_unsplash_key: Option<String>,

        /// PexelsのAPIキーを設定
        #[arg(long)]
        set_pexels_key: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
