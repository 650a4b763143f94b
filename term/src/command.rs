use minado_core::{Coord, Coord2, Difficulty};
use std::time::Duration;

/// One line of player input.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Open(Coord2),
    Flag(Coord2),
    /// Press held on a cell for a while, classified by the long-press threshold
    Hold(Coord2, Duration),
    NewGame(Option<Difficulty>),
    Restart,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  o ROW COL        open (tap) a cell
  f ROW COL        flag or unflag (long press) a cell
  h ROW COL SECS   hold a cell for SECS seconds
  n [DIFFICULTY]   new game, optionally easy/medium/hard
  r                restart with the same difficulty
  ?                show this help
  q                quit";

impl Command {
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("o" | "open", [row, col]) => Self::Open(coords(row, col)?),
            ("f" | "flag", [row, col]) => Self::Flag(coords(row, col)?),
            ("h" | "hold", [row, col, secs]) => {
                let secs: f64 = secs
                    .parse()
                    .map_err(|_| format!("{secs:?} is not a number of seconds"))?;
                let held = Duration::try_from_secs_f64(secs)
                    .map_err(|_| format!("{secs} is not a valid duration"))?;
                Self::Hold(coords(row, col)?, held)
            }
            ("n" | "new", []) => Self::NewGame(None),
            ("n" | "new", [level]) => Self::NewGame(Some(level.parse().map_err(|e| format!("{e}"))?)),
            ("r" | "restart", []) => Self::Restart,
            ("?" | "help", _) => Self::Help,
            ("q" | "quit", _) => Self::Quit,
            (verb, _) => return Err(format!("cannot understand {verb:?}, type ? for help")),
        };
        Ok(Some(command))
    }
}

fn coords(row: &str, col: &str) -> Result<Coord2, String> {
    Ok((axis(row)?, axis(col)?))
}

fn axis(word: &str) -> Result<Coord, String> {
    word.parse()
        .map_err(|_| format!("{word:?} is not a row or column number"))
}
