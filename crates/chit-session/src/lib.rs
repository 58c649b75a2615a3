//! # chit-session
//!
//! The session layer: which screen is showing, and the facade the
//! presentation layer talks to.
//!
//! The screen is never stored. It is re-derived from the persisted
//! records every time it is asked for, so stored state and visible state
//! cannot drift apart:
//!
//! ```text
//! no user record          -> New
//! unlocked OR empty list  -> Setup
//! otherwise               -> Picking
//! ```
//!
//! [`Session`] owns the store and the RNG and exposes every operation a
//! front end needs: user creation, goal entry, locking, the draw, the
//! history view, and the resets. All transitions are caused by explicit
//! calls; nothing is time-based.

pub mod screen;
pub mod session;

pub use screen::{derive_screen, Screen};
pub use session::{Progress, Session, SessionView};
