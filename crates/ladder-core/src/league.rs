// League rows, row growth policy, and the promotion rules.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Every way a league mutation can be refused. The `Display` text is what
/// the command loop prints back to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeagueError {
    #[error("Player name {name} contains invalid characters")]
    InvalidName { name: String },

    #[error("Cannot add player '{name}' because they are already in the game")]
    DuplicatePlayer { name: String },

    #[error("Player '{name}' is not in the game")]
    PlayerNotFound { name: String },

    #[error(
        "Cannot record match result. Winner '{winner}' must be one row below loser '{loser}'"
    )]
    InvalidMatch { winner: String, loser: String },
}

// ---------------------------------------------------------------------------
// Row growth
// ---------------------------------------------------------------------------

/// How many players each row may hold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowGrowth {
    /// Row 0 holds one player, then every capacity repeats once:
    /// 1, 2, 2, 3, 3, 4, 4, ...
    #[default]
    Paired,
    /// Row `i` holds `i + 1` players: 1, 2, 3, 4, ...
    Triangular,
}

impl RowGrowth {
    /// Capacity of the row at `row` (0 = top).
    pub fn capacity(self, row: usize) -> usize {
        match self {
            RowGrowth::Paired if row == 0 => 1,
            RowGrowth::Paired => (row + 1) / 2 + 1,
            RowGrowth::Triangular => row + 1,
        }
    }
}

/// Capacity of `row` under the default growth policy.
pub fn capacity(row: usize) -> usize {
    RowGrowth::default().capacity(row)
}

// ---------------------------------------------------------------------------
// Name validation
// ---------------------------------------------------------------------------

/// Check that a player name is non-empty and made only of letters, digits,
/// `_` and `-`.
fn validate_name(name: &str) -> Result<(), LeagueError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(LeagueError::InvalidName {
            name: name.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// League
// ---------------------------------------------------------------------------

/// One rank tier: player names in slot order.
pub type Row = Vec<String>;

/// Where a player currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub row: usize,
    pub column: usize,
}

/// The ranked ladder. Row 0 is the top; the single player there is the
/// current winner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct League {
    rows: Vec<Row>,
    /// name -> slot, kept in sync with `rows` on every mutation.
    index: HashMap<String, Slot>,
    growth: RowGrowth,
}

impl League {
    /// An empty league using the default growth policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty league with an explicit growth policy.
    pub fn with_growth(growth: RowGrowth) -> Self {
        League {
            rows: Vec::new(),
            index: HashMap::new(),
            growth,
        }
    }

    /// Rebuild a league by adding every stored name in row/slot order.
    ///
    /// Stops at the first name that `add_player` refuses. The resulting rows
    /// follow `growth`, so they only match `rows` when the stored structure
    /// was produced under the same policy.
    pub fn from_rows<R, S>(rows: &[R], growth: RowGrowth) -> Result<Self, LeagueError>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut league = League::with_growth(growth);
        for row in rows {
            for name in row.as_ref() {
                league.add_player(name.as_ref())?;
            }
        }
        Ok(league)
    }

    pub fn growth(&self) -> RowGrowth {
        self.growth
    }

    /// Add a player at the bottom of the ladder.
    ///
    /// The name joins the last row if it still has room, otherwise a new row
    /// is opened below it.
    pub fn add_player(&mut self, name: &str) -> Result<(), LeagueError> {
        validate_name(name)?;
        if self.index.contains_key(name) {
            return Err(LeagueError::DuplicatePlayer {
                name: name.to_string(),
            });
        }

        let last_has_room = self
            .rows
            .last()
            .is_some_and(|row| row.len() < self.growth.capacity(self.rows.len() - 1));
        if !last_has_room {
            self.rows.push(Vec::new());
        }

        let row = self.rows.len() - 1;
        let column = self.rows[row].len();
        self.rows[row].push(name.to_string());
        self.index.insert(name.to_string(), Slot { row, column });
        Ok(())
    }

    /// Rows from top to bottom.
    pub fn players(&self) -> &[Row] {
        &self.rows
    }

    /// Record that `winner` beat `loser`.
    ///
    /// The winner must sit exactly one row below the loser. On success the
    /// two trade slots; nobody else moves and no row changes size.
    pub fn record_win(&mut self, winner: &str, loser: &str) -> Result<(), LeagueError> {
        let winner_slot = self.slot_of(winner)?;
        let loser_slot = self.slot_of(loser)?;

        if winner_slot.row != loser_slot.row + 1 {
            return Err(LeagueError::InvalidMatch {
                winner: winner.to_string(),
                loser: loser.to_string(),
            });
        }

        self.rows[loser_slot.row][loser_slot.column] = winner.to_string();
        self.rows[winner_slot.row][winner_slot.column] = loser.to_string();
        if let Some(slot) = self.index.get_mut(winner) {
            *slot = loser_slot;
        }
        if let Some(slot) = self.index.get_mut(loser) {
            *slot = winner_slot;
        }
        Ok(())
    }

    /// The sole occupant of row 0, or `None` for an empty league.
    pub fn winner(&self) -> Option<&str> {
        self.rows
            .first()
            .and_then(|row| row.first())
            .map(String::as_str)
    }

    pub fn player_count(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn position(&self, name: &str) -> Option<Slot> {
        self.index.get(name).copied()
    }

    fn slot_of(&self, name: &str) -> Result<Slot, LeagueError> {
        self.position(name)
            .ok_or_else(|| LeagueError::PlayerNotFound {
                name: name.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
