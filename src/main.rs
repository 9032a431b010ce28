use clap::Parser;

use tierpost::cli::{check, read, run, CheckCommand, Cli, Commands};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Run(args) => run::execute(args).await,
        Commands::Read(args) => read::execute(&args.config).await,
        Commands::Check(command) => match command {
            CheckCommand::Config(args) => check::execute_config(&args.config),
            CheckCommand::Source(args) => check::execute_source(&args.config).await,
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
