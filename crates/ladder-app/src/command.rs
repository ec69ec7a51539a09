// Text command parsing for the league prompt.

use std::path::PathBuf;

use thiserror::Error;

/// A parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Render every row.
    Print,
    /// `add player <name>`. The name is taken verbatim, so stray whitespace
    /// reaches name validation instead of being trimmed away.
    AddPlayer { name: String },
    /// `record win <winner> <loser>`.
    RecordWin { winner: String, loser: String },
    /// Show the player in the top row.
    Winner,
    Save { path: PathBuf },
    Load { path: PathBuf },
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown command '{input}'. Type 'help' for a list of commands")]
    Unknown { input: String },

    #[error("Usage: {usage}")]
    Usage { usage: &'static str },
}

pub const HELP: &str = "\
Commands:
  print                          show the league, one row per line
  add player <name>              add a player to the bottom row
  record win <winner> <loser>    winner must be one row below loser
  winner                         show the player in the top row
  save <path>                    write the league to a JSON file
  load <path>                    replace the league with one from a file
  help                           show this message
  quit                           leave the prompt";

/// Parse one line of input. Trailing line terminators are ignored.
pub fn parse(input: &str) -> Result<Command, ParseError> {
    let line = input.trim_end_matches(['\r', '\n']);
    let head = line.trim_start();

    if let Some(name) = head.strip_prefix("add player ") {
        return Ok(Command::AddPlayer {
            name: name.to_string(),
        });
    }

    if let Some(rest) = head.strip_prefix("record win ") {
        let args: Vec<&str> = rest.split_whitespace().collect();
        return match args.as_slice() {
            [winner, loser] => Ok(Command::RecordWin {
                winner: winner.to_string(),
                loser: loser.to_string(),
            }),
            _ => Err(ParseError::Usage {
                usage: "record win <winner> <loser>",
            }),
        };
    }

    if let Some(rest) = head.strip_prefix("save ") {
        return path_arg(rest, "save <path>").map(|path| Command::Save { path });
    }

    if let Some(rest) = head.strip_prefix("load ") {
        return path_arg(rest, "load <path>").map(|path| Command::Load { path });
    }

    let trimmed = head.trim_end();
    match trimmed {
        "add player" => {
            return Err(ParseError::Usage {
                usage: "add player <name>",
            })
        }
        "record win" => {
            return Err(ParseError::Usage {
                usage: "record win <winner> <loser>",
            })
        }
        "save" => {
            return Err(ParseError::Usage {
                usage: "save <path>",
            })
        }
        "load" => {
            return Err(ParseError::Usage {
                usage: "load <path>",
            })
        }
        _ => {}
    }

    // Remaining commands take no arguments.
    let (word, args) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));
    let (cmd, usage) = match word {
        "print" => (Command::Print, "print"),
        "winner" => (Command::Winner, "winner"),
        "help" => (Command::Help, "help"),
        "quit" => (Command::Quit, "quit"),
        "exit" => (Command::Quit, "exit"),
        _ => {
            return Err(ParseError::Unknown {
                input: line.trim().to_string(),
            })
        }
    };
    if args.trim().is_empty() {
        Ok(cmd)
    } else {
        Err(ParseError::Usage { usage })
    }
}

fn path_arg(rest: &str, usage: &'static str) -> Result<PathBuf, ParseError> {
    let path = rest.trim();
    if path.is_empty() {
        Err(ParseError::Usage { usage })
    } else {
        Ok(PathBuf::from(path))
    }
}
