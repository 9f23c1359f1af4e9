mod commands;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "depotcat",
    version,
    about = "Depot manifest normalizer and release catalog generator"
)]
struct Cli {
    /// Output results as structured JSON.
    #[arg(long, default_value_t = false, global = true)]
    json: bool,

    /// Enable verbose (debug) logging output.
    #[arg(short, long, default_value_t = false, global = true)]
    verbose: bool,

    /// Enable trace-level logging (more detailed than --verbose).
    #[arg(long, default_value_t = false, global = true)]
    trace: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a depot manifest report and publish its release catalog.
    Publish {
        /// Path to the downloaded depot manifest report.
        #[arg(long)]
        manifest: PathBuf,
        /// Path to the catalog config (version tables, latest seeds, base URL).
        #[arg(long, default_value = "depotcat.toml")]
        config: PathBuf,
        /// Output directory for the catalog and history files.
        #[arg(long, default_value = ".")]
        out: PathBuf,
        /// Publish under this version label instead of resolving the
        /// manifest id through the version tables.
        #[arg(long)]
        release: Option<String>,
    },
    /// Parse a depot manifest report and print its normalized header.
    Inspect {
        /// Path to the downloaded depot manifest report.
        #[arg(long)]
        manifest: PathBuf,
    },
    /// Generate shell completions for bash, zsh, fish, elvish, or powershell.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("DEPOTCAT_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .without_time()
        .init();

    let result = match cli.command {
        Commands::Publish {
            manifest,
            config,
            out,
            release,
        } => commands::publish::run(&manifest, &config, &out, release.as_deref(), cli.json),
        Commands::Inspect { manifest } => commands::inspect::run(&manifest, cli.json),
        Commands::Completions { shell } => commands::completions::run::<Cli>(shell),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
