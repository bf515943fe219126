mod init;
mod probe;
mod seed;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;

use seed::SeedArgs;

#[derive(Parser)]
#[command(name = "star-seeder")]
#[command(version)]
#[command(
    about = "Generate a synthetic retail star-schema dataset and load it into PostgreSQL",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate connection settings and reachability of the target database
    Probe,

    /// Create the five destination tables when they do not already exist
    Init,

    /// Run the full pipeline: generate dimensions and facts, load them in order
    Seed(SeedArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Probe => probe::run(),
        Commands::Init => init::run(),
        Commands::Seed(args) => seed::run(args),
        Commands::Completions { shell } => {
            generate(
                shell,
                &mut Cli::command(),
                "star-seeder",
                &mut io::stdout(),
            );
            Ok(())
        }
    }
}
