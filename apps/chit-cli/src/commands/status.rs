// status.rs - Render the current screen.

use rand::Rng;

use chit_goal::MAX_GOALS;
use chit_session::{Screen, Session};
use chit_store::KvStore;

pub fn execute<S: KvStore, R: Rng>(session: &Session<S, R>) -> anyhow::Result<()> {
    let view = session.view();

    match view.screen {
        Screen::New => {
            println!("No user yet. Run `chit welcome <name>` to get started.");
        }
        Screen::Setup => {
            if let Some(user) = &view.user {
                println!("Hey {}!", user.name);
            }
            if view.goals.is_empty() && !view.history.is_empty() {
                println!("All goals picked! Add new ones with `chit goal add <text>`.");
                return Ok(());
            }
            println!(
                "Goal entry is open ({}/{} goals).",
                view.goals.len(),
                MAX_GOALS
            );
            for (i, goal) in view.goals.iter().enumerate() {
                println!("{:>3}. {}", i + 1, goal.text);
            }
            if view.goals.is_empty() {
                println!("Add your goals with `chit goal add <text>`.");
            } else {
                println!("Lock in with `chit goal lock` when you're done.");
            }
        }
        Screen::Picking => {
            if let Some(user) = &view.user {
                println!("Hey {}!", user.name);
            }
            println!(
                "{} goal(s) waiting. Run `chit draw` to pick one.",
                view.goals.len()
            );
        }
        // A fresh session starts outside the review overlay, but render
        // it anyway rather than panic if that ever changes.
        Screen::Review => {
            println!("{} pick(s) in history. Run `chit history` for details.", view.history.len());
        }
    }
    Ok(())
}
