use clap::Parser;

use feira::cli::{self, Cli};
use feira::config::Config;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    config.logging.init();

    if let Err(e) = cli::run(cli, config).await {
        feira::cli::output::error(&e.to_string());
        std::process::exit(if e.is_client_error() { 2 } else { 1 });
    }
}
