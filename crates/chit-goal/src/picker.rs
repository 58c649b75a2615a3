// picker.rs - The random draw: move one goal from the list into history.
//
// The draw selects a uniform random index over the remaining list, so
// every goal has probability 1/count regardless of insertion order or
// prior draws. Both record writes happen inside the one synchronous call,
// history before the shrunken list; reconcile() repairs the one window an
// interruption can leave behind.

use chit_store::{KvStore, StoreError};
use chrono::Utc;
use rand::Rng;

use crate::keys;
use crate::records::{Goal, Pick};

/// Result of a draw: either a pick record, or the sentinel for an empty
/// remaining list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOutcome {
    Drawn(Pick),
    Exhausted,
}

/// Draw one goal at random from the remaining list.
///
/// An empty list returns [`DrawOutcome::Exhausted`] and performs no
/// mutation. Otherwise the selected goal leaves the remaining list and is
/// appended to the pick history with the draw timestamp.
pub fn draw_one<S: KvStore, R: Rng>(store: &mut S, rng: &mut R) -> Result<DrawOutcome, StoreError> {
    let mut goals: Vec<Goal> = store.get_json(keys::GOALS).unwrap_or_default();
    if goals.is_empty() {
        return Ok(DrawOutcome::Exhausted);
    }

    // Uniform unit draw mapped to an index by floor-multiply.
    let index = (rng.gen::<f64>() * goals.len() as f64).floor() as usize;
    debug_assert!(index < goals.len());
    let goal = goals.remove(index);
    let pick = goal.into_pick(Utc::now());

    let mut picked: Vec<Pick> = store.get_json(keys::PICKED).unwrap_or_default();
    picked.push(pick.clone());

    // History first: an interruption between the two writes leaves the
    // goal in both records, which reconcile() drops from the list on the
    // next session open. The reverse order would lose the goal entirely.
    store.set_json(keys::PICKED, &picked)?;
    store.set_json(keys::GOALS, &goals)?;

    tracing::debug!("drew goal {} ({} remaining)", pick.id, goals.len());
    Ok(DrawOutcome::Drawn(pick))
}

/// Whether every goal has been drawn (the remaining list is empty).
pub fn is_exhausted<S: KvStore>(store: &S) -> bool {
    let goals: Vec<Goal> = store.get_json(keys::GOALS).unwrap_or_default();
    goals.is_empty()
}

/// The pick history, in draw order.
pub fn history<S: KvStore>(store: &S) -> Vec<Pick> {
    store.get_json(keys::PICKED).unwrap_or_default()
}

/// Drop any remaining goal whose id already appears in the pick history.
///
/// A draw interrupted between its two writes leaves the goal in both
/// records; running this on session open restores the invariant that a
/// goal lives in exactly one place.
pub fn reconcile<S: KvStore>(store: &mut S) -> Result<(), StoreError> {
    let picked: Vec<Pick> = store.get_json(keys::PICKED).unwrap_or_default();
    if picked.is_empty() {
        return Ok(());
    }

    let goals: Vec<Goal> = store.get_json(keys::GOALS).unwrap_or_default();
    let kept: Vec<Goal> = goals
        .iter()
        .filter(|g| !picked.iter().any(|p| p.id == g.id))
        .cloned()
        .collect();

    if kept.len() != goals.len() {
        tracing::warn!(
            "dropping {} goal(s) from the list that were already drawn",
            goals.len() - kept.len()
        );
        store.set_json(keys::GOALS, &kept)?;
    }
    Ok(())
}
