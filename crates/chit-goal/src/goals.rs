// goals.rs - The goal repository: CRUD over the remaining goal list.
//
// Invalid input (blank text, over-length text, a full list) degrades to a
// silent no-op; only the store itself can produce an error. The list is
// kept in insertion order, which is also the display numbering order.

use chit_store::{KvStore, StoreError};
use chrono::Utc;

use crate::keys;
use crate::records::{Goal, Pick, MAX_GOALS};

/// The remaining goal list, in insertion order.
pub fn list<S: KvStore>(store: &S) -> Vec<Goal> {
    store.get_json(keys::GOALS).unwrap_or_default()
}

/// Append a new goal. Returns `Ok(None)` without touching the store when
/// the text is blank or over-length, or the list already holds
/// [`MAX_GOALS`] goals.
pub fn add<S: KvStore>(store: &mut S, text: &str) -> Result<Option<Goal>, StoreError> {
    let mut goals = list(store);
    if goals.len() >= MAX_GOALS {
        return Ok(None);
    }
    let Some(goal) = Goal::new(fresh_id(store, &goals), text) else {
        return Ok(None);
    };
    goals.push(goal.clone());
    store.set_json(keys::GOALS, &goals)?;
    tracing::debug!("added goal {} ({} in list)", goal.id, goals.len());
    Ok(Some(goal))
}

/// Remove the goal with the given id. Returns whether anything was
/// removed; an absent id is a no-op, not an error.
pub fn remove<S: KvStore>(store: &mut S, id: i64) -> Result<bool, StoreError> {
    let mut goals = list(store);
    let before = goals.len();
    goals.retain(|g| g.id != id);
    if goals.len() == before {
        return Ok(false);
    }
    store.set_json(keys::GOALS, &goals)?;
    tracing::debug!("removed goal {} ({} in list)", id, goals.len());
    Ok(true)
}

/// Empty the remaining goal list. An empty list means goal entry is open
/// again, so the lock flag is cleared too. Pick history is untouched.
pub fn clear<S: KvStore>(store: &mut S) -> Result<(), StoreError> {
    store.delete(keys::GOALS)?;
    store.delete(keys::LOCKED)
}

/// Close goal entry. The flag is stored even for an empty list; the
/// session keeps deriving the setup screen until goals exist.
pub fn lock<S: KvStore>(store: &mut S) -> Result<(), StoreError> {
    store.set_json(keys::LOCKED, &true)
}

/// Reopen goal entry without touching the existing goals.
pub fn unlock<S: KvStore>(store: &mut S) -> Result<(), StoreError> {
    store.delete(keys::LOCKED)
}

/// Whether goal entry is currently closed.
pub fn is_locked<S: KvStore>(store: &S) -> bool {
    store.get_json(keys::LOCKED).unwrap_or(false)
}

/// Next goal id: the current time in milliseconds, bumped until it is
/// unique across both the remaining list and the pick history. Two goals
/// created in the same millisecond therefore cannot collide.
fn fresh_id<S: KvStore>(store: &S, goals: &[Goal]) -> i64 {
    let picked: Vec<Pick> = store.get_json(keys::PICKED).unwrap_or_default();
    let mut id = Utc::now().timestamp_millis();
    while goals.iter().any(|g| g.id == id) || picked.iter().any(|p| p.id == id) {
        id += 1;
    }
    id
}
