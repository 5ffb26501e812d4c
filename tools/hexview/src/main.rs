//! hexview - command-line hex inspector
//!
//! Classifies hex tokens, decodes float32 words (in-process or through a
//! running hexsrv) and prints hex dumps of files.

mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use hex_utils::hex2num;

use crate::commands::{decode_float, dump_file};
use crate::render::{check_rows, colorize_token, format_number, DEFAULT_WIDTH};

#[derive(Parser)]
#[command(name = "hexview")]
#[command(about = "Hex token inspector and file dumper")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a hex token to a number
    Num {
        /// Hex token, with or without 0x
        hex: String,
    },

    /// Show every classification of a hex token
    Check {
        /// Hex token
        hex: String,
    },

    /// Decode a 4-byte hex word as float32
    Float {
        /// Hex word, e.g. 3F800000
        hex: String,

        /// Decode through a running hexsrv instead of in-process
        #[arg(short, long, value_name = "URL")]
        remote: Option<String>,
    },

    /// Hex dump of a file
    Dump {
        /// File to dump
        file: PathBuf,

        /// Bytes per row
        #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
        width: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure colored output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let log_level = if cli.verbose { "debug" } else { "warn" };
    common::logging::init("hexview", log_level).map_err(|e| anyhow::anyhow!("{}", e))?;

    match cli.command {
        Commands::Num { hex } => {
            println!("{}", format_number(hex2num(&hex)));
        },
        Commands::Check { hex } => {
            println!("{}", colorize_token(&hex).bold());
            for (label, value) in check_rows(&hex) {
                let label = format!("{:<14}", format!("{}:", label));
                println!("  {} {}", label.cyan(), value);
            }
        },
        Commands::Float { hex, remote } => {
            println!("{}", decode_float(&hex, remote.as_deref()).await?);
        },
        Commands::Dump { file, width } => {
            let lines = dump_file(&file, width).await?;
            if lines.is_empty() {
                println!("{}", "(empty file)".dimmed());
            }
            for line in lines {
                println!("{}", line);
            }
        },
    }

    Ok(())
}
