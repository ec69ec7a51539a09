// Interactive prompt: reads commands line by line and prints responses.

use std::io::{self, BufRead, Write};

use ladder_core::store::LeagueStore;
use tracing::info;

use crate::command::{self, Command};
use crate::session::Session;

pub const PROMPT: &str = "> ";

/// Run the prompt until end of input or `quit`. Empty lines are skipped and
/// empty responses print nothing.
pub fn run<S, R, W>(session: &mut Session<S>, input: R, mut output: W) -> io::Result<()>
where
    S: LeagueStore,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match command::parse(&line) {
            Ok(Command::Quit) => {
                info!("Quit requested");
                break;
            }
            parsed => session.respond(&line, parsed),
        };
        if !response.is_empty() {
            writeln!(output, "{response}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ladder_core::store::MemoryStore;
    use ladder_core::League;
    use std::io::Cursor;

    fn run_script(script: &str) -> (String, Session<MemoryStore>) {
        let mut session = Session::new(League::new(), MemoryStore::new());
        let mut out = Vec::new();
        run(&mut session, Cursor::new(script), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), session)
    }

    #[test]
    fn prints_only_non_empty_responses() {
        let (out, _) = run_script("add player Amy\nadd player Bob\nprint\n");
        assert_eq!(out, "> > > Amy\nBob\n> \n");
    }

    #[test]
    fn quit_stops_reading() {
        let (out, session) = run_script("add player Amy\nquit\nadd player Bob\n");
        assert_eq!(out, "> > ");
        assert!(!session.league().contains("Bob"));
    }

    #[test]
    fn exit_stops_reading() {
        let (out, session) = run_script("add player Amy\nexit\nadd player Bob\n");
        assert_eq!(out, "> > ");
        assert!(session.league().contains("Amy"));
        assert!(!session.league().contains("Bob"));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let (out, _) = run_script("\n   \nwinner\n");
        assert_eq!(out, "> > > No players yet\n> \n");
    }

    #[test]
    fn rejected_input_matches_session_response() {
        let (out, mut session) = run_script("winner Bob\n");
        let expected = session.send_command("winner Bob");
        assert_eq!(expected, "Usage: winner");
        assert_eq!(out, format!("> {expected}\n> \n"));
    }

    #[test]
    fn errors_are_printed() {
        let (out, _) = run_script("add player Bob#\n");
        assert_eq!(out, "> Player name Bob# contains invalid characters\n> \n");
    }
}
