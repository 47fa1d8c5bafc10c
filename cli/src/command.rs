use std::str::FromStr;

use anyhow::{Context, bail};
use minesweeper_core::{CellCount, Coord, Coord2, GameConfig};

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Reveal(Coord2),
    Mark(Coord2),
    /// New game, keeping the current size and mines when none are given
    New(Option<GameConfig>),
    Quit,
}

fn parse_number<T: FromStr>(word: Option<&str>, what: &str) -> anyhow::Result<T> {
    let word = word.with_context(|| format!("missing {what}"))?;
    word.parse()
        .map_err(|_| anyhow::anyhow!("{what} must be a non-negative number, got {word:?}"))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            bail!("empty command");
        };

        let command = match verb {
            "r" | "reveal" => Self::Reveal((
                parse_number::<Coord>(words.next(), "row")?,
                parse_number::<Coord>(words.next(), "column")?,
            )),
            "m" | "mark" => Self::Mark((
                parse_number::<Coord>(words.next(), "row")?,
                parse_number::<Coord>(words.next(), "column")?,
            )),
            "n" | "new" => match words.next() {
                None => Self::New(None),
                rows => {
                    let rows = parse_number::<Coord>(rows, "rows")?;
                    let columns = parse_number::<Coord>(words.next(), "columns")?;
                    let mines = parse_number::<CellCount>(words.next(), "mines")?;
                    Self::New(Some(GameConfig::new((rows, columns), mines)?))
                }
            },
            "q" | "quit" => Self::Quit,
            other => bail!("unknown command {other:?}"),
        };

        if let Some(extra) = words.next() {
            bail!("unexpected {extra:?} after {verb:?}");
        }
        Ok(command)
    }
}
