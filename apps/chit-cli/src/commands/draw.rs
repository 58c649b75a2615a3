// draw.rs - Draw one goal at random.

use chrono::Local;
use rand::Rng;

use chit_goal::DrawOutcome;
use chit_session::Session;
use chit_store::KvStore;

pub fn execute<S: KvStore, R: Rng>(session: &mut Session<S, R>) -> anyhow::Result<()> {
    if session.user().is_none() {
        println!("No user yet. Run `chit welcome <name>` first.");
        return Ok(());
    }
    if !session.goals_locked() {
        if session.list_goals().is_empty() {
            println!("No goals yet. Add some with `chit goal add <text>`.");
        } else {
            println!("Goals are not locked in yet. Run `chit goal lock` first.");
        }
        return Ok(());
    }

    match session.draw_one()? {
        DrawOutcome::Drawn(pick) => {
            println!("Today's goal: {}", pick.text);
            println!(
                "Picked {}",
                pick.picked_at
                    .with_timezone(&Local)
                    .format("%A, %b %-d %Y %H:%M")
            );
            let remaining = session.list_goals().len();
            if remaining == 0 {
                println!("\nThat was the last one. All goals picked!");
                println!("Run `chit goal unlock` to add new goals, or `chit history` to review.");
            } else {
                println!("\n{} goal(s) remaining.", remaining);
            }
        }
        DrawOutcome::Exhausted => {
            println!("All goals picked! Run `chit goal unlock` to add new goals.");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chit_store::MemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn draw_moves_exactly_one_goal() {
        let mut session =
            Session::with_rng(MemoryStore::new(), StdRng::seed_from_u64(5)).unwrap();
        session.create_user("Ann").unwrap().unwrap();
        for text in ["a", "b", "c"] {
            session.add_goal(text).unwrap().unwrap();
        }
        session.lock_goals().unwrap();

        execute(&mut session).unwrap();
        assert_eq!(session.list_goals().len(), 2);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn draw_without_lock_mutates_nothing() {
        let mut session =
            Session::with_rng(MemoryStore::new(), StdRng::seed_from_u64(5)).unwrap();
        session.create_user("Ann").unwrap().unwrap();
        session.add_goal("a").unwrap().unwrap();

        execute(&mut session).unwrap();
        assert_eq!(session.list_goals().len(), 1);
        assert!(session.history().is_empty());
    }
}
