// session.rs - Session: the facade the presentation layer drives.
//
// Owns the store and the RNG, and translates every user action into the
// goal/picker operations. The review screen is the one piece of state
// that lives only in memory: it is an explicit navigation overlay, and
// any mutating call drops it so the next screen() is freshly derived.

use chit_goal::picker::{self, DrawOutcome};
use chit_goal::records::{Goal, Pick, User};
use chit_goal::{goals, keys};
use chit_store::{KvStore, StoreError};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::screen::{derive_screen, Screen};

/// Everything a front end needs to render the current screen.
#[derive(Debug, Clone)]
pub struct SessionView {
    pub screen: Screen,
    pub user: Option<User>,
    pub goals: Vec<Goal>,
    pub history: Vec<Pick>,
    pub locked: bool,
}

/// Progress counters for the history view: picks so far, goals left,
/// and their sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub remaining: usize,
    pub total: usize,
}

/// One user's session over an injected store.
pub struct Session<S: KvStore, R: Rng> {
    store: S,
    rng: R,
    reviewing: bool,
}

impl<S: KvStore> Session<S, ThreadRng> {
    /// Open a session over the store with the thread-local RNG.
    pub fn open(store: S) -> Result<Self, StoreError> {
        Self::with_rng(store, rand::thread_rng())
    }
}

impl<S: KvStore, R: Rng> Session<S, R> {
    /// Open a session with an explicit RNG (tests use a seeded one).
    ///
    /// Opening runs the picker's reconcile pass, so a draw interrupted in
    /// a previous session is repaired before anything reads the records.
    pub fn with_rng(mut store: S, rng: R) -> Result<Self, StoreError> {
        picker::reconcile(&mut store)?;
        Ok(Self {
            store,
            rng,
            reviewing: false,
        })
    }

    // ----- user -----

    /// Create the user record from the welcome flow.
    ///
    /// A no-op returning `None` when a user already exists (only a full
    /// reset replaces a user) or when the name is blank or over-length.
    pub fn create_user(&mut self, name: &str) -> Result<Option<User>, StoreError> {
        self.reviewing = false;
        if self.user().is_some() {
            return Ok(None);
        }
        let Some(user) = User::new(name) else {
            return Ok(None);
        };
        self.store.set_json(keys::USER, &user)?;
        tracing::debug!("created user '{}'", user.name);
        Ok(Some(user))
    }

    /// The current user record, if any.
    pub fn user(&self) -> Option<User> {
        self.store.get_json(keys::USER)
    }

    // ----- screens -----

    /// The screen to show right now, derived fresh from the records.
    pub fn screen(&self) -> Screen {
        if self.reviewing && self.user().is_some() {
            return Screen::Review;
        }
        derive_screen(
            self.user().is_some(),
            goals::is_locked(&self.store),
            goals::list(&self.store).len(),
        )
    }

    /// The screen plus every record needed to render it.
    pub fn view(&self) -> SessionView {
        SessionView {
            screen: self.screen(),
            user: self.user(),
            goals: goals::list(&self.store),
            history: picker::history(&self.store),
            locked: goals::is_locked(&self.store),
        }
    }

    /// Navigate to the history view. Only meaningful once a user exists;
    /// before that the derived screen stays New.
    pub fn show_history(&mut self) {
        if self.user().is_some() {
            self.reviewing = true;
        }
    }

    /// Leave the history view; the next screen() derives from the records.
    pub fn back(&mut self) {
        self.reviewing = false;
    }

    // ----- goal entry -----

    /// Add a goal. `None` when the text is invalid or the list is full.
    pub fn add_goal(&mut self, text: &str) -> Result<Option<Goal>, StoreError> {
        self.reviewing = false;
        goals::add(&mut self.store, text)
    }

    /// Remove a goal by id; reports whether anything was removed.
    pub fn remove_goal(&mut self, id: i64) -> Result<bool, StoreError> {
        self.reviewing = false;
        goals::remove(&mut self.store, id)
    }

    /// Empty the goal list and reopen entry. Pick history is untouched.
    pub fn clear_goals(&mut self) -> Result<(), StoreError> {
        self.reviewing = false;
        goals::clear(&mut self.store)
    }

    /// The remaining goal list, in insertion order.
    pub fn list_goals(&self) -> Vec<Goal> {
        goals::list(&self.store)
    }

    /// Close goal entry and hand the list to the picker.
    pub fn lock_goals(&mut self) -> Result<(), StoreError> {
        self.reviewing = false;
        goals::lock(&mut self.store)
    }

    /// Reopen goal entry ("edit goals") without touching the goals.
    pub fn unlock_goals(&mut self) -> Result<(), StoreError> {
        self.reviewing = false;
        goals::unlock(&mut self.store)
    }

    /// Whether goal entry is currently closed.
    pub fn goals_locked(&self) -> bool {
        goals::is_locked(&self.store)
    }

    // ----- picking -----

    /// Draw one goal at random; `Exhausted` when none remain.
    pub fn draw_one(&mut self) -> Result<DrawOutcome, StoreError> {
        self.reviewing = false;
        picker::draw_one(&mut self.store, &mut self.rng)
    }

    /// Whether every goal has been drawn.
    pub fn is_exhausted(&self) -> bool {
        picker::is_exhausted(&self.store)
    }

    // ----- history -----

    /// The pick history, in draw order.
    pub fn history(&self) -> Vec<Pick> {
        picker::history(&self.store)
    }

    /// Progress counters for the history view.
    pub fn progress(&self) -> Progress {
        let completed = self.history().len();
        let remaining = self.list_goals().len();
        Progress {
            completed,
            remaining,
            total: completed + remaining,
        }
    }

    /// Empty the pick history only; user, goals, and lock flag stay.
    pub fn clear_history(&mut self) -> Result<(), StoreError> {
        self.reviewing = false;
        self.store.delete(keys::PICKED)
    }

    // ----- reset -----

    /// Delete all four records. The next screen() derives New.
    pub fn reset_everything(&mut self) -> Result<(), StoreError> {
        self.reviewing = false;
        self.store.delete(keys::USER)?;
        self.store.delete(keys::GOALS)?;
        self.store.delete(keys::PICKED)?;
        self.store.delete(keys::LOCKED)?;
        tracing::debug!("all records deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chit_store::MemoryStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> Session<MemoryStore, StdRng> {
        Session::with_rng(MemoryStore::new(), StdRng::seed_from_u64(11)).unwrap()
    }

    #[test]
    fn fresh_store_derives_new() {
        let session = session();
        assert_eq!(session.screen(), Screen::New);
        assert!(session.user().is_none());
    }

    #[test]
    fn welcome_then_lock_reaches_picking() {
        let mut session = session();

        let user = session.create_user("Ann").unwrap().unwrap();
        assert_eq!(user.name, "Ann");
        assert_eq!(session.screen(), Screen::Setup);

        for text in ["run", "read", "write"] {
            session.add_goal(text).unwrap().unwrap();
        }
        assert_eq!(session.list_goals().len(), 3);

        session.lock_goals().unwrap();
        assert_eq!(session.screen(), Screen::Picking);
    }

    #[test]
    fn create_user_rejects_invalid_names() {
        let mut session = session();
        assert!(session.create_user("   ").unwrap().is_none());
        assert!(session.create_user(&"x".repeat(21)).unwrap().is_none());
        assert_eq!(session.screen(), Screen::New);
    }

    #[test]
    fn create_user_does_not_overwrite_existing_user() {
        let mut session = session();
        session.create_user("Ann").unwrap().unwrap();
        assert!(session.create_user("Ben").unwrap().is_none());
        assert_eq!(session.user().unwrap().name, "Ann");
    }

    #[test]
    fn draw_moves_a_goal_and_updates_progress() {
        let mut session = session();
        session.create_user("Ann").unwrap().unwrap();
        for text in ["a", "b", "c"] {
            session.add_goal(text).unwrap().unwrap();
        }
        session.lock_goals().unwrap();

        let DrawOutcome::Drawn(pick) = session.draw_one().unwrap() else {
            panic!("expected a pick from three goals");
        };
        assert_eq!(session.list_goals().len(), 2);
        assert_eq!(session.history(), vec![pick]);
        assert_eq!(
            session.progress(),
            Progress {
                completed: 1,
                remaining: 2,
                total: 3
            }
        );
    }

    #[test]
    fn drawing_everything_returns_to_setup_while_still_locked() {
        let mut session = session();
        session.create_user("Ann").unwrap().unwrap();
        for text in ["a", "b"] {
            session.add_goal(text).unwrap().unwrap();
        }
        session.lock_goals().unwrap();

        while let DrawOutcome::Drawn(_) = session.draw_one().unwrap() {}

        assert!(session.is_exhausted());
        assert!(session.goals_locked());
        assert_eq!(session.screen(), Screen::Setup);
    }

    #[test]
    fn lock_with_zero_goals_keeps_setup() {
        // Tolerated behavior: the flag is stored, the screen doesn't move.
        let mut session = session();
        session.create_user("Ann").unwrap().unwrap();
        session.lock_goals().unwrap();

        assert!(session.goals_locked());
        assert_eq!(session.screen(), Screen::Setup);

        // The flag takes effect as soon as goals exist.
        session.add_goal("late goal").unwrap().unwrap();
        assert_eq!(session.screen(), Screen::Picking);
    }

    #[test]
    fn unlock_is_idempotent() {
        let mut session = session();
        session.create_user("Ann").unwrap().unwrap();
        session.add_goal("a").unwrap().unwrap();
        session.lock_goals().unwrap();

        session.unlock_goals().unwrap();
        let after_once = session.screen();
        session.unlock_goals().unwrap();
        assert_eq!(session.screen(), after_once);
        assert_eq!(after_once, Screen::Setup);
    }

    #[test]
    fn clear_goals_unlocks_and_keeps_history() {
        let mut session = session();
        session.create_user("Ann").unwrap().unwrap();
        for text in ["a", "b"] {
            session.add_goal(text).unwrap().unwrap();
        }
        session.lock_goals().unwrap();
        session.draw_one().unwrap();

        session.clear_goals().unwrap();
        assert_eq!(session.screen(), Screen::Setup);
        assert!(!session.goals_locked());
        assert!(session.list_goals().is_empty());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn review_navigation_overlay() {
        let mut session = session();

        // Without a user, show_history is a no-op.
        session.show_history();
        assert_eq!(session.screen(), Screen::New);

        session.create_user("Ann").unwrap().unwrap();
        session.show_history();
        assert_eq!(session.screen(), Screen::Review);

        session.back();
        assert_eq!(session.screen(), Screen::Setup);
    }

    #[test]
    fn mutations_drop_the_review_overlay() {
        let mut session = session();
        session.create_user("Ann").unwrap().unwrap();
        session.show_history();
        assert_eq!(session.screen(), Screen::Review);

        session.add_goal("a").unwrap().unwrap();
        assert_eq!(session.screen(), Screen::Setup);
    }

    #[test]
    fn clear_history_leaves_everything_else() {
        let mut session = session();
        session.create_user("Ann").unwrap().unwrap();
        for text in ["a", "b"] {
            session.add_goal(text).unwrap().unwrap();
        }
        session.lock_goals().unwrap();
        session.draw_one().unwrap();

        session.clear_history().unwrap();
        assert!(session.history().is_empty());
        assert_eq!(session.list_goals().len(), 1);
        assert!(session.goals_locked());
        assert!(session.user().is_some());
    }

    #[test]
    fn reset_everything_returns_to_new() {
        let mut session = session();
        session.create_user("Ann").unwrap().unwrap();
        session.add_goal("a").unwrap().unwrap();
        session.lock_goals().unwrap();
        session.draw_one().unwrap();

        session.reset_everything().unwrap();
        assert_eq!(session.screen(), Screen::New);
        assert!(session.user().is_none());
        assert!(session.list_goals().is_empty());
        assert!(session.history().is_empty());
        assert!(!session.goals_locked());
    }

    #[test]
    fn corrupt_user_record_degrades_to_new() {
        let mut store = MemoryStore::new();
        store.set(keys::USER, "{{{").unwrap();
        let session = Session::with_rng(store, StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(session.screen(), Screen::New);
    }

    #[test]
    fn open_repairs_an_interrupted_draw() {
        // A goal sitting in both records (draw interrupted between its
        // two writes) is dropped from the list when the session opens.
        let mut store = MemoryStore::new();
        let goal = goals::add(&mut store, "half drawn").unwrap().unwrap();
        let pick = goal.into_pick(chrono::Utc::now());
        store.set_json(keys::PICKED, &vec![pick]).unwrap();

        let session = Session::with_rng(store, StdRng::seed_from_u64(11)).unwrap();
        assert!(session.list_goals().is_empty());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn view_carries_records_for_rendering() {
        let mut session = session();
        session.create_user("Ann").unwrap().unwrap();
        session.add_goal("a").unwrap().unwrap();

        let view = session.view();
        assert_eq!(view.screen, Screen::Setup);
        assert_eq!(view.user.unwrap().name, "Ann");
        assert_eq!(view.goals.len(), 1);
        assert!(view.history.is_empty());
        assert!(!view.locked);
    }
}
