use clap::Parser;
use fleet_tracker::utils::error::ErrorSeverity;
use fleet_tracker::utils::{logger, validation::Validate};
use fleet_tracker::{
    CliConfig, HttpTextSource, LocalStorage, TrackerConfig, TrackerEngine, TrackerPipeline,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliConfig::parse();

    // 初始化日誌
    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting fleet-tracker");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    // 載入配置：設定檔優先，否則使用內建類別
    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match TrackerConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            }
        }
        None => TrackerConfig::for_category(args.category, "./output"),
    };

    apply_overrides(&mut config, &args);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    let storage = LocalStorage::new(config.output_path().to_string());
    let source = HttpTextSource::new(&config)?;
    let pipeline = TrackerPipeline::new(storage, source, config.clone())?.retain_ids(&args.ids);

    display_config_summary(&config, &args, pipeline.entities().len());

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No pages will be fetched");
        for entity in pipeline.entities() {
            println!(
                "  {:<8} {:<32} {:<10} {}",
                entity.id,
                entity.name,
                entity.homeport.to_string(),
                entity.url
            );
        }
        return Ok(());
    }

    let engine = TrackerEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Tracker run completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Tracker run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn apply_overrides(config: &mut TrackerConfig, args: &CliConfig) {
    if let Some(output_path) = &args.output_path {
        config.load.output_path = output_path.clone();
        tracing::info!("🔧 Output path overridden to: {}", output_path);
    }
    if let Some(year) = args.reference_year {
        config.status.reference_year = Some(year);
        tracing::info!("🔧 Reference year overridden to: {}", year);
    }
    if let Some(concurrent) = args.concurrent_requests {
        config.source.concurrent_requests = Some(concurrent);
        tracing::info!("🔧 Concurrent requests overridden to: {}", concurrent);
    }
}

fn display_config_summary(config: &TrackerConfig, args: &CliConfig, tracked: usize) {
    let window = config.year_window();
    println!("📋 Configuration Summary:");
    println!("  Tracker: {} ({})", config.tracker.name, config.category());
    println!("  Entities: {}", tracked);
    println!(
        "  Status window: {}-{} (fallback {})",
        window.primary().start(),
        window.primary().end(),
        window.secondary()
    );
    println!("  Output: {}", config.output_path());
    println!("  Formats: {}", config.load.output_formats.join(", "));
    println!("  Concurrent Requests: {}", config.concurrent_requests());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }
}
