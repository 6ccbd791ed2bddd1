use anyhow::Result;
use clap::Parser;
use premove::{premove, Board, Color, Piece, Pos, Role, Square};

#[derive(Parser, Debug)]
#[command(name = "demo", about = "Draw a role's premove pattern on an otherwise empty board")]
struct Args {
    /// Role name, e.g. knight or unicorn
    #[arg(value_name = "ROLE")]
    role: String,
    /// Square to place the piece on
    #[arg(value_name = "SQUARE", default_value = "d4")]
    square: String,
    /// Piece color
    #[arg(long, default_value = "white")]
    color: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let role: Role = args.role.parse()?;
    let color: Color = args.color.parse()?;
    let from: Square = args.square.parse()?;

    let board: Board = [(from, Piece::new(role, color))].into_iter().collect();
    let dests = premove(&board, from, false);

    println!("{} on {} ({} destinations)", Piece::new(role, color), from, dests.len());
    for rank in (0..8u8).rev() {
        let row: Vec<&str> = (0..8u8)
            .map(|file| {
                let sq = Square::from_pos(Pos::new(file, rank));
                if sq == from { "@" } else if dests.contains(&sq) { "*" } else { "." }
            })
            .collect();
        println!("{} {}", rank + 1, row.join(" "));
    }
    println!("  a b c d e f g h");
    Ok(())
}
