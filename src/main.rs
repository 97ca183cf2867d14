use anyhow::Context;
use clap::Parser;
use recipe_photo::batch::{BatchOptions, BatchRunner, RecipeOutcome};
use recipe_photo::cli::{Cli, Commands};
use recipe_photo::config::{mask_key, Config};
use recipe_photo::error::RecipePhotoError;
use recipe_photo::finder::RecipePhotoFinder;
use recipe_photo::orchestrator::ProviderOrchestrator;
use recipe_photo::persistence::JsonFilePersistence;
use recipe_photo::providers::build_providers;
use recipe_photo_common::{load_recipes, PhotoSource, RecipeRecord};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn read_recipes(input: &Path) -> Result<Vec<RecipeRecord>, RecipePhotoError> {
    if !input.exists() {
        return Err(RecipePhotoError::FileNotFound(input.display().to_string()));
    }
    Ok(load_recipes(input)?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load().context("設定ファイルを読み込めません")?;

    match cli.command {
        Commands::Classify { input, mode, json } => {
            let recipes = read_recipes(&input)?;
            let finder = RecipePhotoFinder::new(ProviderOrchestrator::new(Vec::new()), mode)
                .with_max_queries(config.max_queries());
            let analyses: Vec<_> = recipes.iter().map(|r| finder.analyze(r)).collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&analyses)?);
                return Ok(());
            }

            println!("🍽  recipe-photo - 料理分類 ({}件)\n", analyses.len());
            for analysis in &analyses {
                let c = &analysis.classification;
                println!(
                    "■ {} → {}{} [{:?}] ({}){}",
                    analysis.title,
                    c.dish_type,
                    c.sub_type.as_deref().map(|s| format!("/{}", s)).unwrap_or_default(),
                    c.dietary,
                    analysis.rule,
                    if analysis.is_dietary_restricted { " (食事制限あり)" } else { "" }
                );
                for (i, query) in analysis.queries.iter().enumerate() {
                    println!("  {}. {}", i + 1, query.search_text);
                }
            }
        }

        Commands::Find { input, mode, output, reprocess, limit } => {
            println!("📸 recipe-photo - 写真検索 ({})\n", mode);

            let providers = build_providers(&config, mode).map_err(RecipePhotoError::from)?;
            for provider in &providers {
                if !provider.is_available() {
                    println!("- {} はキー未設定のためスキップ", provider.source());
                }
            }

            let orchestrator = ProviderOrchestrator::new(providers).with_provider_delay(config.provider_delay());
            if !orchestrator.has_available_provider() {
                return Err(RecipePhotoError::MissingApiKey.into());
            }

            println!("[1/3] レシピを読み込み中...");
            let recipes = read_recipes(&input)?;
            println!("✔ {}件のレシピを読み込みました\n", recipes.len());

            let finder = RecipePhotoFinder::new(orchestrator, mode).with_max_queries(config.max_queries());

            let output = output.unwrap_or_else(|| {
                input
                    .parent()
                    .unwrap_or(Path::new("."))
                    .join("assignments.json")
            });
            let persistence = JsonFilePersistence::new(&output);

            let options = BatchOptions {
                reprocess,
                recipe_delay: config.recipe_delay(),
                recipe_timeout: config.recipe_timeout(),
                limit,
            };

            println!("[2/3] 写真を検索中...");
            let runner = BatchRunner::new(&finder, &persistence, options);
            let report = runner
                .run_with_progress(&recipes, |index, count, item| match &item.outcome {
                    RecipeOutcome::Assigned(a) => {
                        println!("  [{}/{}] ✔ {} ← {} ({})", index, count, item.title, a.attribution, a.search_term)
                    }
                    RecipeOutcome::NotFound => println!("  [{}/{}] ✗ {} 見つかりません", index, count, item.title),
                    RecipeOutcome::Skipped { reason } => {
                        println!("  [{}/{}] - {} スキップ: {}", index, count, item.title, reason)
                    }
                    RecipeOutcome::Failed { error } => {
                        println!("  [{}/{}] ✗ {} 失敗: {}", index, count, item.title, error)
                    }
                })
                .await;
            println!();

            println!("[3/3] 結果");
            println!("  成功: {}", report.success);
            println!("  失敗: {}", report.failed);
            println!("  スキップ: {}", report.skipped);
            println!("  合計: {}", report.total);
            if report.success > 0 {
                println!("✔ 割り当てを保存: {}", persistence.path().display());
            }

            println!("\n✅ 完了");
        }

        Commands::Config { set_unsplash_key, set_pexels_key, show } => {
            let mut config = config;

            if let Some(key) = set_unsplash_key {
                config.set_api_key(PhotoSource::Unsplash, key)?;
                println!("✔ UnsplashのAccess Keyを設定しました");
            }

            if let Some(key) = set_pexels_key {
                config.set_api_key(PhotoSource::Pexels, key)?;
                println!("✔ PexelsのAPIキーを設定しました");
            }

            if show {
                let order: Vec<String> = config.provider_order.iter().map(|s| s.to_string()).collect();
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                for source in [PhotoSource::Unsplash, PhotoSource::Pexels] {
                    let key = config
                        .api_key(source)
                        .map(|k| mask_key(&k))
                        .unwrap_or_else(|| "未設定".to_string());
                    println!("  {} キー: {}", source, key);
                }
                println!("  プロバイダ順: {}", order.join(" → "));
                println!("  プロバイダ間隔: {}ms", config.provider_delay().as_millis());
                println!("  レシピ間隔: {}ms", config.recipe_delay_ms);
                println!("  最大クエリ数: {}", config.max_queries());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                if let Some(secs) = config.recipe_timeout_seconds {
                    println!("  レシピごとのタイムアウト: {}秒", secs);
                }
            }
        }
    }

    Ok(())
}
