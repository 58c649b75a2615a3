//! # chit-cli
//!
//! Terminal front end for the chit goal tracker:
//! - `chit welcome <name>` — save your name and open goal entry
//! - `chit goal add/list/remove/clear/lock/unlock` — manage the goal list
//! - `chit draw` — draw one goal at random
//! - `chit history` — review what has been picked so far
//! - `chit status` — show the current screen
//! - `chit reset` — delete everything and start over
//!
//! All state lives in a per-user data directory; the screens and record
//! rules come from the session layer, this binary only renders them.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use chit_session::Session;
use chit_store::JsonFileStore;

/// chit — list your goals, then draw them one chit at a time.
#[derive(Parser)]
#[command(name = "chit", version, about)]
struct Cli {
    /// Data directory for stored records (defaults to the platform data
    /// dir, or $CHIT_DATA_DIR when set).
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current screen and its records.
    Status,
    /// Save your name and open goal entry.
    Welcome {
        /// Your name (1-20 characters, display only).
        name: String,
    },
    /// Manage the goal list.
    Goal {
        #[command(subcommand)]
        command: commands::goal::GoalCommands,
    },
    /// Draw one goal at random from the remaining list.
    Draw,
    /// Show the pick history.
    History {
        /// Clear the pick history instead of showing it.
        #[arg(long)]
        clear: bool,
    },
    /// Delete every stored record and start over.
    Reset {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with rendered screens.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };

    tracing::debug!("using data dir {}", data_dir.display());

    let store = JsonFileStore::new(&data_dir)?;
    let mut session = Session::open(store)?;

    match &cli.command {
        Commands::Status => commands::status::execute(&session),
        Commands::Welcome { name } => commands::welcome::execute(&mut session, name),
        Commands::Goal { command } => commands::goal::execute(command, &mut session),
        Commands::Draw => commands::draw::execute(&mut session),
        Commands::History { clear } => commands::history::execute(&mut session, *clear),
        Commands::Reset { yes } => commands::reset::execute(&mut session, *yes),
    }
}

/// Resolve the data directory: $CHIT_DATA_DIR, else `<platform data dir>/chit`.
fn default_data_dir() -> anyhow::Result<PathBuf> {
    if let Some(dir) = std::env::var_os("CHIT_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let base = dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("no platform data directory; pass --data-dir"))?;
    Ok(base.join("chit"))
}
