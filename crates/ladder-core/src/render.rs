// Plain-text rendering of the ladder, one row per line.

use crate::league::League;

/// Printed instead of rows when nobody has joined yet.
pub const EMPTY_LEAGUE: &str = "No players yet";

/// Render the league top to bottom. Names in a row are separated by a single
/// space; there is no trailing newline.
pub fn render(league: &League) -> String {
    if league.is_empty() {
        return EMPTY_LEAGUE.to_string();
    }
    league
        .players()
        .iter()
        .map(|row| row.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_league_message() {
        assert_eq!(render(&League::new()), "No players yet");
    }

    #[test]
    fn one_line_per_row() {
        let mut league = League::new();
        for name in ["Alice", "Bob", "Charlie", "David"] {
            league.add_player(name).unwrap();
        }
        assert_eq!(render(&league), "Alice\nBob Charlie\nDavid");
    }

    #[test]
    fn reflects_promotion() {
        let mut league = League::new();
        for name in ["Alice", "Bob", "Charlie", "David"] {
            league.add_player(name).unwrap();
        }
        league.record_win("Bob", "Alice").unwrap();
        let output = render(&league);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec!["Bob", "Alice Charlie", "David"]);
    }
}
