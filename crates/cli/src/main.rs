//! MMU simulator CLI.
//!
//! This binary is the caller of the simulator core. It performs:
//! 1. **Translate:** Translate logical addresses against one session and report TLB statistics.
//! 2. **Replace:** Run a page-reference string under FIFO, LRU or Optimal.
//! 3. **Compare:** Run all three replacement policies on the same reference string.
//! 4. **State:** Translate optional addresses, then dump page table, frames and TLB.
//!
//! Configuration comes from a JSON file (`--config`) or the built-in defaults.
//! `--json` switches every command to structured output.

mod render;

use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use mmusim_core::config::Config;
use mmusim_core::mmu::{MemorySnapshot, MemoryState, TranslationResult};
use mmusim_core::replacement::{PolicyKind, ReplacementSimulator};
use mmusim_core::stats::TlbStatistics;

#[derive(Parser, Debug)]
#[command(
    name = "mmusim",
    author,
    version,
    about = "Paged virtual memory / MMU simulator",
    long_about = "Translate logical addresses through a TLB and page table, or run page-reference strings under FIFO, LRU and Optimal replacement.\n\nExamples:\n  mmusim translate 0 1024 1030\n  mmusim replace --policy fifo --frames 3 1 2 3 4 1 2 5 1 2 3 4 5\n  mmusim compare --config mmu.json 7 0 1 2 0 3 0 4\n  mmusim --json state 0 4096"
)]
struct Cli {
    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate logical addresses in order within one session.
    Translate {
        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Logical addresses (decimal).
        #[arg(required = true)]
        addresses: Vec<u64>,
    },

    /// Run a page-reference string under one replacement policy.
    Replace {
        /// Replacement policy: fifo, lru or optimal.
        #[arg(short, long)]
        policy: PolicyKind,

        /// Frame count (defaults to the configured frame count).
        #[arg(short, long)]
        frames: Option<usize>,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Page references.
        #[arg(required = true)]
        pages: Vec<u32>,
    },

    /// Run a page-reference string under every replacement policy.
    Compare {
        /// Frame count (defaults to the configured frame count).
        #[arg(short, long)]
        frames: Option<usize>,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Page references.
        #[arg(required = true)]
        pages: Vec<u32>,
    },

    /// Translate optional addresses, then print page table, frames and TLB.
    State {
        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Logical addresses to translate first.
        addresses: Vec<u64>,
    },
}

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    /// Configuration file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The simulator rejected the input.
    #[error(transparent)]
    Sim(#[from] mmusim_core::Error),

    /// JSON output could not be produced.
    #[error("cannot encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

type Result<T> = std::result::Result<T, CliError>;

/// One translated address, successful or not.
#[derive(Serialize, Debug)]
struct TranslationLine {
    address: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<TranslationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize, Debug)]
struct TranslateOutput {
    translations: Vec<TranslationLine>,
    tlb: Option<TlbStatistics>,
}

#[derive(Serialize, Debug)]
struct StateOutput {
    translations: Vec<TranslationLine>,
    state: MemorySnapshot,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Installs a stderr `fmt` subscriber; `RUST_LOG` overrides `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let json = cli.json;
    match cli.command {
        Commands::Translate { config, addresses } => {
            let mut mmu = MemoryState::new(&load_config(config.as_deref())?)?;
            let translations = translate_all(&mut mmu, &addresses);
            let tlb = mmu.tlb_statistics();
            if json {
                print_json(&TranslateOutput { translations, tlb })?;
            } else {
                for line in &translations {
                    print_translation(line);
                }
                println!("{}", render::tlb_statistics(tlb.as_ref()));
            }
        }
        Commands::Replace {
            policy,
            frames,
            config,
            pages,
        } => {
            let simulator = simulator(config.as_deref(), frames)?;
            let report = simulator.run(policy, &pages)?;
            if json {
                print_json(&report)?;
            } else {
                print!("{}", render::replacement(&report));
            }
        }
        Commands::Compare {
            frames,
            config,
            pages,
        } => {
            let simulator = simulator(config.as_deref(), frames)?;
            let reports = simulator.compare(&pages)?;
            if json {
                print_json(&reports)?;
            } else {
                print!("{}", render::comparison(&reports));
            }
        }
        Commands::State { config, addresses } => {
            let mut mmu = MemoryState::new(&load_config(config.as_deref())?)?;
            let translations = translate_all(&mut mmu, &addresses);
            let state = mmu.snapshot();
            if json {
                print_json(&StateOutput {
                    translations,
                    state,
                })?;
            } else {
                for line in &translations {
                    print_translation(line);
                }
                print!("{}", render::snapshot(&state));
            }
        }
    }
    Ok(())
}

/// Reads and validates the configuration, falling back to defaults.
fn load_config(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        debug!("using default configuration");
        return Ok(Config::default());
    };
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = Config::from_json_str(&text)?;
    debug!(path = %path.display(), "configuration loaded");
    Ok(config)
}

fn simulator(config: Option<&Path>, frames: Option<usize>) -> Result<ReplacementSimulator> {
    let config = load_config(config)?;
    let frames = frames.unwrap_or(config.num_frames);
    Ok(ReplacementSimulator::new(frames, config.memory_access_time)?)
}

/// Translates every address; failures are recorded and the session continues.
fn translate_all(mmu: &mut MemoryState, addresses: &[u64]) -> Vec<TranslationLine> {
    addresses
        .iter()
        .map(|&address| match mmu.translate(address) {
            Ok(result) => TranslationLine {
                address,
                result: Some(result),
                error: None,
            },
            Err(e) => {
                warn!(address, error = %e, "translation failed");
                TranslationLine {
                    address,
                    result: None,
                    error: Some(e.to_string()),
                }
            }
        })
        .collect()
}

fn print_translation(line: &TranslationLine) {
    println!("Logical Address: {}", line.address);
    if let Some(result) = &line.result {
        println!("{}", render::translation(result));
    }
    if let Some(error) = &line.error {
        println!("Translation failed: {error}\n");
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
