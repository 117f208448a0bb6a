mod bot;

use clap::{Parser, Subcommand};
use domashka_api::PracticumClient;
use domashka_core::config;
use domashka_telegram::TelegramNotifier;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "domashka",
    version,
    about = "Homework review status notifier for Telegram"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the poll loop.
    Start,
    /// Check config and credential health.
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg = config::load(&cli.config)?;
    cfg.apply_env();

    match cli.command {
        Commands::Start => {
            // Log to stdout and bot.log simultaneously.
            let file_appender = tracing_appender::rolling::never(&cfg.bot.log_dir, "bot.log");
            let (file_writer, _guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::registry()
                .with(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(&cfg.bot.log_level)),
                )
                .with(tracing_subscriber::fmt::layer())
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(file_writer)
                        .with_ansi(false),
                )
                .init();

            // Preflight: all three secrets or no loop at all.
            if let Err(e) = cfg.check_credentials() {
                error!("{e}");
                anyhow::bail!(
                    "{e}. Set them in {} or via environment variables.",
                    cli.config
                );
            }

            let api = Arc::new(PracticumClient::new(cfg.practicum.clone()));
            let notifier = Arc::new(TelegramNotifier::new(cfg.telegram.clone()));

            // The first query window starts now; the server's echoed
            // `current_date` takes over from here.
            let start_cursor = chrono::Utc::now().timestamp();

            info!(
                "domashka starting | endpoint: {} | chat: {}",
                cfg.practicum.endpoint, cfg.telegram.chat_id,
            );
            let bot = bot::Bot::new(api, notifier, cfg.bot.poll_interval_secs, start_cursor);
            bot.run().await;
        }
        Commands::Status => {
            println!("domashka — Status Check\n");
            println!("Config: {}", cli.config);
            println!("Endpoint: {}", cfg.practicum.endpoint);
            println!("Poll interval: {}s", cfg.bot.poll_interval_secs);
            println!();

            println!(
                "  practicum token: {}",
                if cfg.practicum.token.is_empty() {
                    "missing"
                } else {
                    "configured"
                }
            );
            println!(
                "  telegram token:  {}",
                if cfg.telegram.bot_token.is_empty() {
                    "missing"
                } else {
                    "configured"
                }
            );
            println!(
                "  telegram chat:   {}",
                if cfg.telegram.chat_id.is_empty() {
                    "missing"
                } else {
                    "configured"
                }
            );
        }
    }

    Ok(())
}
