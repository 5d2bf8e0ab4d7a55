//! CLI Adapter.

mod logging;
mod new;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "larapress")]
#[command(version)]
#[command(about = "Scaffold new LaraPress applications", long_about = None)]
struct Cli {
    /// Show debug diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new LaraPress application
    #[clap(visible_alias = "n")]
    New {
        /// Directory to create; defaults to the current directory
        name: Option<String>,
        /// Install the latest "development" release
        #[arg(long)]
        dev: bool,
        /// Install even if the directory already exists
        #[arg(short, long)]
        force: bool,
        /// Disable ANSI output in the delegated composer and artisan commands
        #[arg(long)]
        no_ansi: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::New { name, dev, force, no_ansi } => {
            new::run_new(new::NewArgs { name, dev, force, no_ansi })
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
