use anyhow::Result;
use clap::Parser;
use portmap::cli::{Cli, Commands};
use portmap::commands::analyze::{handle_analyze, AnalyzeConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            no_parallel,
            verbosity,
        } => {
            init_logging(verbosity);
            handle_analyze(AnalyzeConfig {
                path,
                format: format.into(),
                output,
                parallel: !no_parallel,
            })
        }
    }
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
