use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bingo_core::{Board, average_difficulty, build_toggle_payload};
use bingo_protocol::PlayerBoard;
use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the rounded average difficulty of a board
    Average {
        /// Player document or bare board map, `-` for stdin
        #[arg(default_value = "-")]
        file: PathBuf,
    },
    /// Print the toggle payload for a cell
    Toggle {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        cell: String,
        /// Any JSON value, coerced to a boolean
        #[arg(short, long, default_value = "true")]
        done: String,
    },
    /// Print the payload that flips a cell on a player's board
    Flip {
        #[arg(short, long)]
        cell: String,
        /// Player document, `-` for stdin
        #[arg(default_value = "-")]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();
    log::debug!("{args:?}");

    let output = match args.command {
        Command::Average { file } => average(read_json(&file)?),
        Command::Toggle { name, cell, done } => toggle(&name, &cell, &done),
        Command::Flip { cell, file } => flip(&cell, read_json(&file)?),
    }?;

    println!("{output}");
    Ok(())
}

/// A player document names its player; a bare board map only holds cells.
fn is_player_document(document: &Value) -> bool {
    document.get("board").is_some() && document.get("name").is_some_and(Value::is_string)
}

fn average(document: Value) -> Result<Value> {
    let average = if is_player_document(&document) {
        let player: PlayerBoard =
            serde_json::from_value(document).context("Invalid player document")?;
        player.average_difficulty()
    } else {
        let board: Option<Board> = serde_json::from_value(document).context("Invalid board")?;
        average_difficulty(board.as_ref())
    };
    Ok(Value::from(average))
}

fn toggle(name: &str, cell: &str, done: &str) -> Result<Value> {
    let done: Value = serde_json::from_str(done)
        .with_context(|| format!("--done is not a JSON value: {done}"))?;
    let payload = build_toggle_payload(name, cell, &done)?;
    Ok(serde_json::to_value(payload)?)
}

fn flip(cell: &str, document: Value) -> Result<Value> {
    let player: PlayerBoard =
        serde_json::from_value(document).context("Invalid player document")?;
    let payload = player
        .toggle_request(cell)
        .with_context(|| format!("Cannot toggle {cell} for {}", player.name))?;
    Ok(serde_json::to_value(payload)?)
}

fn read_json(path: &Path) -> Result<Value> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        text
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?
    };
    log::debug!("Read {} bytes from {}", text.len(), path.display());

    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}
