use anyhow::{Context, Result};
use clap::Parser;
use premove::{premove, premove_dests, Board, Color, Square};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "List premove destinations for a piece on a JSON board", long_about = None)]
struct Args {
    /// Square of the piece to premove, e.g. e1 (ignored with --all)
    #[arg(value_name = "SQUARE", required_unless_present = "all")]
    square: Option<String>,

    /// JSON board file keyed by square, or '-' for stdin
    #[arg(long, default_value = "-")]
    board: PathBuf,

    /// The moving side still has castling rights
    #[arg(long)]
    castle: bool,

    /// List destinations for every piece of this color ('white' or 'black')
    #[arg(long)]
    all: Option<String>,

    /// Print JSON instead of plain text
    #[arg(long)]
    json: bool,
}

fn load_board(path: &PathBuf) -> Result<Board> {
    if path.as_os_str() == "-" {
        Board::from_reader(io::stdin().lock()).context("reading board from stdin")
    } else {
        let f = File::open(path).with_context(|| format!("opening board file {}", path.display()))?;
        Board::from_reader(f).with_context(|| format!("parsing board file {}", path.display()))
    }
}

fn join(dests: &[Square]) -> String {
    dests.iter().map(|s| s.to_string()).collect::<Vec<_>>().join(" ")
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let board = load_board(&args.board)?;

    if let Some(color) = args.all.as_deref() {
        let color: Color = color.parse()?;
        let dests = premove_dests(&board, color, args.castle);
        if args.json {
            println!("{}", serde_json::to_string(&dests)?);
        } else {
            for (from, to) in &dests {
                println!("{}: {}", from, join(to));
            }
        }
        return Ok(());
    }

    let square = args.square.as_deref().context("missing SQUARE")?;
    let key: Square = square.parse()?;
    let dests = premove(&board, key, args.castle);
    if args.json {
        println!("{}", serde_json::to_string(&dests)?);
    } else {
        println!("{}", join(&dests));
    }
    Ok(())
}
