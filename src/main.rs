//! Seula: desktop client for the candidate search service
//!
//! A single window fronting the remote search backend: filters and a
//! free-text job description go in, ranked candidates come out, and
//! per-candidate up/down feedback is posted back.
//!
//! Usage:
//!   seula          - Open the search window
//!   seula status   - Check backend health
//!   seula help     - Show help

mod app;
mod backend;
mod config;
mod filters;
mod ui;

use app::Seula;
use backend::api::BackendClient;
use config::Settings;
use iced::{window, Size, Task};
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> iced::Result {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 {
        return handle_cli_command(&args[1]);
    }

    start_app()
}

fn init_logging() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn handle_cli_command(cmd: &str) -> iced::Result {
    init_logging();

    match cmd {
        "status" => {
            let settings = Settings::load_or_default();
            let client = BackendClient::new(&settings.backend);
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

            rt.block_on(async {
                match client.health_check().await {
                    Ok(health) => {
                        let version = health.version.unwrap_or_else(|| String::from("unknown"));
                        println!("Backend is {} (version {})", health.status, version);
                    }
                    Err(e) => eprintln!("Backend unreachable: {}", e),
                }
            });
            Ok(())
        }
        "help" | "--help" | "-h" => {
            println!("Seula - desktop client for the candidate search service\n");
            println!("Usage: seula [command]\n");
            println!("Commands:");
            println!("  (none)   Open the search window");
            println!("  status   Check backend health");
            println!("  help     Show this help message");
            println!("\nBackend address comes from config/default.toml or SEULA__BACKEND__BASE_URL");
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", cmd);
            eprintln!("Run 'seula help' for usage");
            Ok(())
        }
    }
}

fn start_app() -> iced::Result {
    init_logging();

    let settings = Settings::load_or_default();
    tracing::info!("Starting Seula (backend at {})", settings.backend.base_url);

    iced::application("Seula", Seula::update, Seula::view)
        .theme(Seula::theme)
        .window(window::Settings {
            size: Size::new(960.0, 720.0),
            position: window::Position::Centered,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || (Seula::new(settings.clone()), Task::none()))
}
