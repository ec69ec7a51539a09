// Library root: the league itself plus the renderer and file store the
// command loop drives it through.

pub mod league;
pub mod render;
pub mod store;

pub use league::{capacity, League, LeagueError, Row, RowGrowth, Slot};
