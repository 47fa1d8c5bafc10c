use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use minesweeper_core::{CellCount, Coord, GameConfig, MineGenerator, RandomMineGenerator};

mod command;
mod game;
mod render;

use command::Command;
use game::{Flow, Session};
use render::BoardView;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Number of rows
    #[arg(short, long, default_value_t = 9)]
    rows: Coord,

    /// Number of columns
    #[arg(short, long, default_value_t = 9)]
    columns: Coord,

    /// Number of mines, capped at the number of tiles
    #[arg(short, long, default_value_t = 10)]
    mines: CellCount,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

const HELP: &str = "commands: r ROW COL (reveal), m ROW COL (flag/question/clear), n [ROWS COLS MINES] (new game), q (quit)";

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    log::debug!("seed: {:?}", args.seed);

    let config = GameConfig::new((args.rows, args.columns), args.mines)
        .context("Invalid board dimensions")?;
    let generator = match args.seed {
        Some(seed) => RandomMineGenerator::seeded(seed),
        None => RandomMineGenerator::from_entropy(),
    };
    let mut session = Session::new(config, generator)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{HELP}")?;
    draw(&mut stdout, &session)?;

    for line in stdin.lock().lines() {
        let line = line.context("Could not read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let flow = line
            .parse::<Command>()
            .and_then(|command| session.apply(command));
        match flow {
            Ok(Flow::Quit) => break,
            Ok(Flow::Redraw) => draw(&mut stdout, &session)?,
            Ok(Flow::Continue) => {}
            Err(err) => writeln!(stdout, "{err:#}")?,
        }
    }

    Ok(())
}

fn draw<G: MineGenerator>(out: &mut impl Write, session: &Session<G>) -> io::Result<()> {
    writeln!(out, "{}", BoardView(session.board()))?;
    if let Some(banner) = session.banner() {
        writeln!(out, "{banner}")?;
    }
    out.flush()
}
