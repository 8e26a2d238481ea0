mod cmd;

use clap::Parser;
use cmd::config::{Effective, SimArgs};

#[derive(Parser)]
#[command(name = "fetch-sim", about = "Record fetch simulator: sequential vs concurrent")]
struct Cli {
    #[command(flatten)]
    args: SimArgs,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let eff = match Effective::new(&cli.args) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    cmd::run::run(&eff).await;
}
