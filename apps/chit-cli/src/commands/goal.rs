// goal.rs - Goal subcommands: add, list, remove, clear, lock, unlock.

use clap::Subcommand;
use rand::Rng;

use chit_goal::{MAX_GOALS, MAX_GOAL_CHARS};
use chit_session::Session;
use chit_store::KvStore;

#[derive(Subcommand)]
pub enum GoalCommands {
    /// Add a goal to the list.
    Add {
        /// The goal text (1-80 characters).
        text: String,
    },
    /// List the remaining goals in entry order.
    List,
    /// Remove a goal by id.
    Remove {
        /// Goal id (shown by `chit goal list`).
        id: i64,
    },
    /// Empty the list and reopen goal entry. Pick history stays.
    Clear,
    /// Lock the list in and start picking.
    Lock,
    /// Reopen goal entry without losing any goals.
    Unlock,
}

pub fn execute<S: KvStore, R: Rng>(
    cmd: &GoalCommands,
    session: &mut Session<S, R>,
) -> anyhow::Result<()> {
    if session.user().is_none() {
        println!("No user yet. Run `chit welcome <name>` first.");
        return Ok(());
    }

    match cmd {
        GoalCommands::Add { text } => add_goal(session, text),
        GoalCommands::List => list_goals(session),
        GoalCommands::Remove { id } => remove_goal(session, *id),
        GoalCommands::Clear => {
            session.clear_goals()?;
            println!("Goal list cleared. Goal entry is open again.");
            Ok(())
        }
        GoalCommands::Lock => lock_goals(session),
        GoalCommands::Unlock => {
            session.unlock_goals()?;
            println!("Goal entry reopened. Your goals are untouched.");
            Ok(())
        }
    }
}

fn add_goal<S: KvStore, R: Rng>(session: &mut Session<S, R>, text: &str) -> anyhow::Result<()> {
    match session.add_goal(text)? {
        Some(goal) => {
            println!(
                "Added: {} ({}/{} goals)",
                goal.text,
                session.list_goals().len(),
                MAX_GOALS
            );
        }
        None => {
            if session.list_goals().len() >= MAX_GOALS {
                println!("The list is full ({} goals). Remove one first.", MAX_GOALS);
            } else {
                println!("Goals must be 1-{} characters.", MAX_GOAL_CHARS);
            }
        }
    }
    Ok(())
}

fn list_goals<S: KvStore, R: Rng>(session: &Session<S, R>) -> anyhow::Result<()> {
    let goals = session.list_goals();
    if goals.is_empty() {
        println!("No goals yet. Add one with `chit goal add <text>`.");
        return Ok(());
    }

    println!("{:<4} {:<16} GOAL", "#", "ID");
    println!("{}", "-".repeat(60));
    for (i, goal) in goals.iter().enumerate() {
        println!("{:<4} {:<16} {}", i + 1, goal.id, goal.text);
    }
    println!(
        "\n{}/{} goals{}.",
        goals.len(),
        MAX_GOALS,
        if session.goals_locked() {
            " (locked in)"
        } else {
            ""
        }
    );
    Ok(())
}

fn remove_goal<S: KvStore, R: Rng>(session: &mut Session<S, R>, id: i64) -> anyhow::Result<()> {
    if session.remove_goal(id)? {
        println!("Removed goal {}.", id);
    } else {
        println!("No goal with id {}.", id);
    }
    Ok(())
}

fn lock_goals<S: KvStore, R: Rng>(session: &mut Session<S, R>) -> anyhow::Result<()> {
    if session.list_goals().is_empty() {
        println!("Add at least one goal before locking in.");
        return Ok(());
    }
    session.lock_goals()?;
    println!(
        "{} goal(s) locked in. Run `chit draw` to pick one.",
        session.list_goals().len()
    );
    Ok(())
}
