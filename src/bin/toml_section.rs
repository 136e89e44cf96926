use clap::Parser;
use partners_section::core::ConfigProvider;
use partners_section::utils::{logger, validation::Validate};
use partners_section::{HttpPartnerSource, LocalStorage, SectionEngine, TomlConfig};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "toml-section")]
#[command(about = "Render the partners section from a TOML configuration")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "partners-section.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Show what would be fetched and written without doing it
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    match (args.verbose, config.log_level()) {
        (false, Some(level)) => logger::init_with_level(level),
        (verbose, _) => logger::init_cli_logger(verbose),
    }
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be fetched or written");
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    let source = HttpPartnerSource::from_config(&config)?;
    let storage = LocalStorage::new(config.output_path().to_string());
    let engine = SectionEngine::new_with_monitoring(Arc::new(source), storage, config, monitor_enabled);

    match engine.run().await {
        Ok(report) => {
            println!("✅ Partners section rendered ({} partners)", report.partners_rendered);
            println!("📁 Output saved to: {}", report.output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Section render failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.severity().exit_code());
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Source: {}", config.api_endpoint());
    println!("  Timeout: {:?}", config.request_timeout());
    println!("  Headers: {} custom headers", config.headers().len());
    println!("  Max Partners: {}", config.max_partners());
    println!("  Output: {}/{}", config.output_path(), config.output_filename());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
