mod audio;
mod buffer;
mod cli_messages;
mod config;
mod consts;
mod events;
mod gadgets;
mod logging;
mod magi;
mod scheduler;
mod session;
mod ui;

use crate::config::{Config, get_config_path};
use crate::session::headless_mode::{HeadlessFrames, parse_frames};
use crate::session::setup::Overrides;
use crate::session::{run_headless_mode, run_magi_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Run without the terminal UI, printing updates to stdout
        #[arg(long)]
        headless: bool,

        /// Seed for the random source, for reproducible sessions
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        /// Path to the config file
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Stop after this many seconds (headless only)
        #[arg(long, value_name = "SECONDS", requires = "headless")]
        duration_secs: Option<u64>,

        /// Replay these comma-separated millisecond timestamps (headless only)
        #[arg(
            long,
            value_name = "MS,MS,...",
            requires = "headless",
            conflicts_with = "duration_secs"
        )]
        frames: Option<String>,

        /// Disable background colors
        #[arg(long)]
        no_background: bool,

        /// Turn off audio cues
        #[arg(long)]
        mute: bool,
    },
    /// Open the MAGI voting screen
    Magi {
        /// Seed for the random source
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        /// File name shown in the header
        #[arg(long, value_name = "NAME")]
        file: Option<String>,

        /// Path to the config file
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Turn off audio cues
        #[arg(long)]
        mute: bool,

        /// Disable background colors
        #[arg(long)]
        no_background: bool,
    },
    /// Write a config file with the default settings
    InitConfig {
        /// Where to write it
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init_max_level();

    let args = Args::parse();
    match args.command {
        Command::Start {
            headless,
            seed,
            config,
            duration_secs,
            frames,
            no_background,
            mute,
        } => {
            let session = setup_session(Overrides {
                config_path: config,
                seed,
                mute,
                magi_file: None,
            })?;
            if headless {
                let frames = match frames {
                    Some(list) => HeadlessFrames::Scripted(parse_frames(&list)?),
                    None => HeadlessFrames::Live { duration_secs },
                };
                run_headless_mode(session, frames).await
            } else {
                run_tui_mode(session, !no_background)
            }
        }
        Command::Magi {
            seed,
            file,
            config,
            mute,
            no_background,
        } => {
            let session = setup_session(Overrides {
                config_path: config,
                seed,
                mute,
                magi_file: file,
            })?;
            run_magi_mode(session, !no_background)
        }
        Command::InitConfig { config, force } => {
            let path = match config {
                Some(path) => path,
                None => get_config_path()?,
            };
            init_config(&path, force)
        }
    }
}

fn init_config(path: &std::path::Path, force: bool) -> Result<(), Box<dyn Error>> {
    if path.exists() && !force {
        print_cmd_warn!(
            "Config exists",
            "{} (use --force to overwrite)",
            path.display()
        );
        return Err(Box::from(format!(
            "refusing to overwrite {}",
            path.display()
        )));
    }
    Config::default()
        .save(path)
        .map_err(|e| format!("Failed to save config: {}", e))?;
    print_cmd_success!("Config written", "{}", path.display());
    Ok(())
}
