//! FairCheck CLI - retrieval-grounded fair-competition pre-review.

use clap::Parser;
use faircheck_cli::{commands, Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> faircheck_cli::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    let formatter = Formatter::new(!cli.no_color);

    match cli.command {
        Command::Review(args) => {
            commands::execute_review(args, &config, &formatter).await?;
        }
        Command::Retrieve(args) => {
            commands::execute_retrieve(args, &config, &formatter)?;
        }
        Command::Config => {
            commands::execute_config(&config, &formatter)?;
        }
    }

    Ok(())
}
