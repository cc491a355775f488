//! Room-path discovery CLI.
//!
//! Reads comma-separated starting rooms, walks each through the
//! digit-reversal rule and prints the derivation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use maze::core::parser::ValidationError;
use maze::discover::{DEFAULT_INPUT, DiscoverOptions, discover};
use maze::exit_codes;
use maze::io::config::{
    ConfigOverrides, DEFAULT_CONFIG_FILE, MazeConfig, OutputFormat, apply_overrides, load_config,
    write_config,
};
use maze::io::render::render;
use maze::logging;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "maze",
    version,
    about = "Discover room paths by iterated digit reversal"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the path for each comma-separated starting room.
    Discover {
        /// Starting rooms, e.g. "0, 47". Use `-` to read from stdin.
        #[arg(default_value = DEFAULT_INPUT)]
        input: String,
        /// Maximum steps per starting room.
        #[arg(long)]
        steps: Option<usize>,
        /// Steps shown in detail per path (text output).
        #[arg(long)]
        detail: Option<usize>,
        /// Output format.
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Drop characters other than digits, commas, whitespace and hyphens.
        #[arg(long, overrides_with = "no_filter")]
        filter: bool,
        /// Parse input as given, even if the config enables filtering.
        #[arg(long, overrides_with = "filter")]
        no_filter: bool,
        /// Pause before printing results, in milliseconds.
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Config file (missing file means defaults).
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
    /// Write a default config file if missing.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
        /// Config file to write.
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
}

fn main() {
    logging::init();
    let code = match run() {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("{:#}", err);
            if err.downcast_ref::<ValidationError>().is_some() {
                exit_codes::INVALID_INPUT
            } else {
                exit_codes::ERROR
            }
        }
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Discover {
            input,
            steps,
            detail,
            format,
            filter,
            no_filter,
            delay_ms,
            config,
        } => {
            let overrides = ConfigOverrides {
                max_steps: steps,
                detail_steps: detail,
                delay_ms,
                filter_input: flag_override(filter, no_filter),
                format,
            };
            cmd_discover(&input, &config, &overrides)
        }
        Command::Init { force, config } => cmd_init(&config, force),
    }
}

/// Map a `--x`/`--no-x` flag pair to an optional override.
fn flag_override(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn cmd_discover(input: &str, config_path: &Path, overrides: &ConfigOverrides) -> Result<()> {
    let cfg = load_config(config_path).context("load config")?;
    let cfg = apply_overrides(cfg, overrides)?;

    let raw = if input == "-" {
        std::io::read_to_string(std::io::stdin()).context("read input from stdin")?
    } else {
        input.to_string()
    };

    let outcome = discover(&raw, &DiscoverOptions::from(&cfg))?;
    print!("{}", render(&outcome.results, cfg.format, cfg.detail_steps)?);
    Ok(())
}

fn cmd_init(config_path: &Path, force: bool) -> Result<()> {
    if !force && config_path.exists() {
        println!("config exists: {}", config_path.display());
        return Ok(());
    }
    write_config(config_path, &MazeConfig::default())
        .with_context(|| format!("write {}", config_path.display()))?;
    info!(path = %config_path.display(), "config written");
    println!("wrote {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_discover_defaults() {
        let cli = Cli::parse_from(["maze", "discover"]);
        match cli.command {
            Command::Discover {
                input,
                steps,
                filter,
                config,
                ..
            } => {
                assert_eq!(input, DEFAULT_INPUT);
                assert_eq!(steps, None);
                assert!(!filter);
                assert_eq!(config, PathBuf::from(DEFAULT_CONFIG_FILE));
            }
            Command::Init { .. } => panic!("expected discover"),
        }
    }

    #[test]
    fn parse_discover_flags() {
        let cli = Cli::parse_from([
            "maze", "discover", "5, 9", "--steps", "4", "--format", "json", "--filter",
        ]);
        match cli.command {
            Command::Discover {
                input,
                steps,
                format,
                filter,
                ..
            } => {
                assert_eq!(input, "5, 9");
                assert_eq!(steps, Some(4));
                assert_eq!(format, Some(OutputFormat::Json));
                assert!(filter);
            }
            Command::Init { .. } => panic!("expected discover"),
        }
    }

    #[test]
    fn parse_filter_flag_pair() {
        let parsed = |args: &[&str]| match Cli::parse_from(args).command {
            Command::Discover {
                filter, no_filter, ..
            } => flag_override(filter, no_filter),
            Command::Init { .. } => panic!("expected discover"),
        };
        assert_eq!(parsed(&["maze", "discover"]), None);
        assert_eq!(parsed(&["maze", "discover", "--filter"]), Some(true));
        assert_eq!(parsed(&["maze", "discover", "--no-filter"]), Some(false));
        assert_eq!(
            parsed(&["maze", "discover", "--filter", "--no-filter"]),
            Some(false)
        );
    }

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["maze", "init", "--force"]);
        assert!(matches!(cli.command, Command::Init { force: true, .. }));
    }
}
