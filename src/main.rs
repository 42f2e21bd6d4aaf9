use clap::Parser;
use hoopedge::cli::{
    check, normalize, output, picks, strategies, CheckCommand, Cli, Commands,
};
use hoopedge::error::Result;
use tracing::debug;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.load_config()?;
    config.init_logging();
    debug!(command = ?cli.command, "hoopedge starting");

    match &cli.command {
        Commands::Picks(args) => picks::execute(&config, args).await,
        Commands::Strategies(args) => strategies::execute(&config, args),
        Commands::Normalize(args) => normalize::execute(&config, args),
        Commands::Check(CheckCommand::Config(args)) => {
            check::execute_config(&config, args.config.as_deref())
        }
    }
}
