// Command dispatch: owns one league and routes parsed commands to it, the
// renderer, and the league store.

use std::path::Path;

use ladder_core::render::{render, EMPTY_LEAGUE};
use ladder_core::store::{JsonFileStore, LeagueStore, StoreError};
use ladder_core::{League, LeagueError};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::command::{self, Command, ParseError, HELP};

/// Anything a dispatched command can fail with. The message is printed to
/// the user unchanged.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    League(#[from] LeagueError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A running game: one league plus the store used by `save` and `load`.
pub struct Session<S = JsonFileStore> {
    league: League,
    store: S,
}

impl<S: LeagueStore> Session<S> {
    pub fn new(league: League, store: S) -> Self {
        Session { league, store }
    }

    pub fn league(&self) -> &League {
        &self.league
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Parse and run one line of input, returning the text to show the user.
    /// Successful mutations return an empty string.
    pub fn send_command(&mut self, input: &str) -> String {
        self.respond(input, command::parse(input))
    }

    /// Turn the outcome of parsing `input` into response text, logging
    /// rejected input.
    pub fn respond(&mut self, input: &str, parsed: Result<Command, ParseError>) -> String {
        match parsed {
            Ok(cmd) => self.execute(cmd),
            Err(e) => {
                debug!("Rejected input {:?}: {}", input, e);
                e.to_string()
            }
        }
    }

    /// Run an already-parsed command. `Quit` is a no-op here; the prompt loop
    /// decides when to stop.
    pub fn execute(&mut self, cmd: Command) -> String {
        match self.dispatch(cmd) {
            Ok(output) => output,
            Err(e) => {
                warn!("Command failed: {}", e);
                e.to_string()
            }
        }
    }

    fn dispatch(&mut self, cmd: Command) -> Result<String, SessionError> {
        match cmd {
            Command::Print => Ok(render(&self.league)),
            Command::AddPlayer { name } => {
                self.league.add_player(&name)?;
                info!(
                    "Added player {} ({} in league)",
                    name,
                    self.league.player_count()
                );
                Ok(String::new())
            }
            Command::RecordWin { winner, loser } => {
                self.league.record_win(&winner, &loser)?;
                info!("Recorded win: {} over {}", winner, loser);
                Ok(String::new())
            }
            Command::Winner => Ok(self.league.winner().unwrap_or(EMPTY_LEAGUE).to_string()),
            Command::Save { path } => {
                self.store.save(&path, &self.league)?;
                Ok(String::new())
            }
            Command::Load { path } => {
                self.load(&path)?;
                Ok(String::new())
            }
            Command::Help => Ok(HELP.to_string()),
            Command::Quit => Ok(String::new()),
        }
    }

    /// Replace the current league with the one stored at `path`. The current
    /// league is kept if loading fails.
    pub fn load(&mut self, path: &Path) -> Result<(), StoreError> {
        let league = self.store.load(path, self.league.growth())?;
        info!(
            "Replaced league ({} players) with {} players from {}",
            self.league.player_count(),
            league.player_count(),
            path.display()
        );
        self.league = league;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
