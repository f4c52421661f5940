use clap::Parser;
use inventory_lister::utils::{logger, validation::Validate};
use inventory_lister::{
    CliConfig, InventoryPipeline, ListingEngine, LocalStorage, Vocabulary, VocabularyConfig,
};

fn load_vocabulary(config: &CliConfig) -> inventory_lister::Result<Vocabulary> {
    match &config.vocabulary {
        Some(path) => {
            tracing::info!("📁 Loading vocabulary from: {}", path);
            let vocabulary_config = VocabularyConfig::from_file(path)?;
            vocabulary_config.validate()?;
            Ok(vocabulary_config.into_vocabulary())
        }
        None => Ok(Vocabulary::default()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.verbose, config.log_format);

    tracing::info!("Starting inventory-lister CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let vocabulary = match load_vocabulary(&config) {
        Ok(vocabulary) => vocabulary,
        Err(e) => {
            tracing::error!("❌ Failed to load vocabulary: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    // 輸入路徑轉為絕對路徑，避免被當成輸出目錄底下的相對路徑
    config.input = std::path::absolute(&config.input)?
        .to_string_lossy()
        .into_owned();
    let show_preview = config.mode.writes_preview();

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = InventoryPipeline::with_vocabulary(storage, config, vocabulary);
    let engine = ListingEngine::new(pipeline);

    match engine.run().await {
        Ok(outcome) => {
            if show_preview {
                for line in &outcome.preview_lines {
                    println!("{}", line);
                }
            }
            tracing::info!("✅ Inventory listing completed successfully!");
            for path in &outcome.output_paths {
                println!("📁 Output saved to: {}", path);
            }
        }
        Err(e) => {
            // 邊界層統一處理：記錄完整錯誤，回報通用失敗訊息
            tracing::error!("❌ Inventory listing failed: {} (Kind: {:?})", e, e.kind());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
