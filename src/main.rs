use clap::Parser;
use portal_pairs::args::Cli;
use portal_pairs::logging::{default_log_path, init_tracing};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(err) = init_tracing(&log_path) {
        eprintln!("Warning: logging disabled: {:#}", err);
    }
    tracing::info!(
        pairs = config.game.pairs,
        api = %config.api.base_url,
        "Starting portal-pairs"
    );

    if let Err(err) = portal_pairs::ui::run(config).await {
        tracing::error!(error = %err, "Game exited with error");
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
