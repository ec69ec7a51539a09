// Ladder league entry point.
//
// Startup sequence:
// 1. Load config (defaults when config/ladder.toml is absent)
// 2. Initialize tracing (log to file, not terminal)
// 3. Build the league, loading the file named on the command line if any
// 4. Run the prompt on stdin/stdout until EOF or `quit`

use std::path::{Path, PathBuf};

use anyhow::Context;
use ladder_app::config::{self, LoggingSection};
use ladder_app::repl;
use ladder_app::session::Session;
use ladder_core::store::{JsonFileStore, LeagueStore};
use ladder_core::League;
use tracing::info;

fn main() -> anyhow::Result<()> {
    // 1. Load config
    let config = config::load_config().context("failed to load configuration")?;

    // 2. Initialize tracing
    init_tracing(&config.logging)?;
    info!(
        "Ladder starting up: row_growth={:?}, pretty={}",
        config.league.row_growth, config.storage.pretty
    );

    // 3. Build the league
    let store = JsonFileStore::new(config.storage.pretty);
    let league = match std::env::args().nth(1) {
        Some(path) => store
            .load(Path::new(&path), config.league.row_growth)
            .with_context(|| format!("failed to load league from {path}"))?,
        None => League::with_growth(config.league.row_growth),
    };
    let mut session = Session::new(league, store);

    // 4. Run the prompt
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    repl::run(&mut session, stdin.lock(), stdout.lock()).context("prompt I/O failed")?;

    info!(
        "Ladder shut down with {} players",
        session.league().player_count()
    );
    Ok(())
}

/// Initialize tracing to log to a file (the terminal is used by the prompt).
fn init_tracing(logging: &LoggingSection) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = PathBuf::from(&logging.dir);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let log_file = std::fs::File::create(log_dir.join("ladder.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter)),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
