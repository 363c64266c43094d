use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod branding;
mod commands;

#[derive(Parser)]
#[command(name = "cyclops")]
#[command(about = "Method complexity and identifier linting for Rust sources", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze Rust sources for complex methods and non-ASCII identifiers
    Analyze(commands::analyze::AnalyzeArgs),
    /// Initialize Cyclops in a new project
    Init(commands::init::InitArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so JSON on stdout stays machine-readable.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => {
            if args.format != "json" {
                branding::print_logo();
            }
            let clean = commands::analyze::exec(args)?;
            if !clean {
                std::process::exit(1);
            }
        }
        Commands::Init(args) => {
            commands::init::exec(args)?;
        }
    }

    Ok(())
}
