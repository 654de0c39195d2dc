use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use transparency_checker::cli::ServerCli;
use transparency_checker::core::{ConfigManager, OllamaClient};
use transparency_checker::logging::init_tracing;
use transparency_checker::{start_web_server, TransparencyAnalyzer};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = ServerCli::parse();

    let config = ConfigManager::load_from(&cli.config, &cli.environment)?
        .apply_overrides(cli.overrides());

    init_tracing(config.server.log_file.as_deref())?;
    info!("Loaded configuration for environment: {}", config.environment);
    match &config.source {
        Some(path) => info!("Configuration file: {}", path.display()),
        None => info!(
            "{} not found, using built-in defaults",
            cli.config.display()
        ),
    }

    let client = OllamaClient::from_settings(&config.backend)?;
    info!(
        "Inference backend: {} (model {}, timeout {}s)",
        client.base_url(),
        client.model(),
        config.backend.timeout_seconds
    );

    print_banner(&config);

    let analyzer = TransparencyAnalyzer::new(Arc::new(client));
    start_web_server(&config, analyzer).await
}

fn print_banner(config: &ConfigManager) {
    let url = config.public_url();
    let rule = "=".repeat(50);

    info!("{}", rule);
    info!("🚀 Job Transparency Checker API");
    info!("{}", rule);
    info!("✅ Server running: {}", url);
    info!("🔍 Test it: {}/test", url);
    info!("Quick test with curl:");
    info!(
        r#"curl -X POST {}/analyze -H "Content-Type: application/json" -d '{{"title":"Test Job","salary":"$60,000-$120,000","ai_used":"Yes","description":"We use AI to screen candidates...","requirements":"Must have Canadian experience"}}'"#,
        url
    );
    info!("{}", rule);
}
