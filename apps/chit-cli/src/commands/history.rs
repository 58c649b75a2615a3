// history.rs - The review screen: pick history and progress counters.

use chrono::Local;
use rand::Rng;

use chit_session::{Screen, Session};
use chit_store::KvStore;

pub fn execute<S: KvStore, R: Rng>(session: &mut Session<S, R>, clear: bool) -> anyhow::Result<()> {
    if clear {
        session.clear_history()?;
        println!("Pick history cleared.");
        return Ok(());
    }

    session.show_history();
    if session.screen() != Screen::Review {
        println!("No user yet. Run `chit welcome <name>` first.");
        return Ok(());
    }

    let progress = session.progress();
    println!(
        "Progress: {} picked, {} remaining ({} total).",
        progress.completed, progress.remaining, progress.total
    );

    let history = session.history();
    if history.is_empty() {
        println!("Nothing picked yet.");
    } else {
        println!();
        for (i, pick) in history.iter().enumerate() {
            println!(
                "{:>3}. {}  (picked {})",
                i + 1,
                pick.text,
                pick.picked_at.with_timezone(&Local).format("%b %-d %H:%M")
            );
        }
    }

    session.back();
    Ok(())
}
