use clap::Parser;
use house_volume::config::cli::ReportSettings;
use house_volume::utils::error::{ErrorSeverity, HouseError};
use house_volume::utils::{logger, validation::Validate};
use house_volume::{CliConfig, House, LocalStorage, ReportEngine};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting house-volume");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match run(&config) {
        Ok(Some(output_path)) => {
            println!("✅ Report saved to: {}", output_path);
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(e) => {
            tracing::error!(
                "❌ house-volume failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code)
        }
    }
}

/// Returns the written path, or `None` when the report went to stdout.
fn run(config: &CliConfig) -> Result<Option<String>, HouseError> {
    config.validate()?;

    let house_config = config.load_house_config()?;
    let house = config.build_house(house_config.as_ref())?;
    let settings = config.report_settings(house_config.as_ref());
    settings.validate()?;

    display_summary(&house, &settings);

    let engine = ReportEngine::for_format(settings.format)?;
    match &settings.output_path {
        Some(path) => {
            let storage = LocalStorage::new(path.clone());
            engine
                .write_report(&house, &storage, &settings.file_name)
                .map(Some)
        }
        None => {
            println!("{}", engine.render(&house)?);
            Ok(None)
        }
    }
}

fn display_summary(house: &House, settings: &ReportSettings) {
    tracing::info!("📋 Report summary:");
    tracing::info!("   Address: {}", house.address());
    tracing::info!("   Price per m³: {}", house.price_per_cubic_meter());
    tracing::info!("   Rooms: {}", house.rooms().len());
    tracing::info!("   Format: {}", settings.format);
    match &settings.output_path {
        Some(path) => tracing::info!("   Output: {}/{}", path, settings.file_name),
        None => tracing::info!("   Output: stdout"),
    }
}
