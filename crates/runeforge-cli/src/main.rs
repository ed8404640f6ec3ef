//! Runeforge CLI entry point.
//!
//! Binary name: `rforge`
//!
//! Parses CLI arguments, sets up tracing, wires the advisor service to a
//! catalog backend, then dispatches to the command handler.

mod cli;
mod state;
#[cfg(test)]
mod test_support;

use clap::Parser;
use clap_complete::generate;

use runeforge_observe::tracing_setup::{init_tracing, shutdown_tracing};
use runeforge_types::character::CreateProfileRequest;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,runeforge=debug",
        _ => "trace",
    };
    init_tracing(filter, cli.otel).map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "rforge", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init(cli.offline.as_deref()).await?;

    match cli.command {
        Commands::Classes => {
            cli::catalog::list_classes(&state, cli.json).await?;
        }

        Commands::Playstyles => {
            cli::playstyle::list_playstyles(&state, cli.json)?;
        }

        Commands::Build {
            name,
            level,
            class_name,
            playstyle,
            suggest,
        } => {
            let request = CreateProfileRequest {
                name,
                level,
                class_name,
            };
            cli::build::build(&state, request, &playstyle, suggest, cli.json).await?;
        }

        Commands::Suggest { playstyle, token } => {
            cli::suggest::suggest(&state, playstyle.as_deref(), token.as_deref(), cli.json).await?;
        }

        Commands::Demo => {
            cli::demo::run_demo(&state, cli.json).await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
