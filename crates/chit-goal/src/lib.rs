//! # chit-goal
//!
//! Goal records and the operations over them.
//!
//! A [`Goal`] is a user-entered text item waiting to be drawn. Drawing one
//! moves it out of the remaining list and into the pick history as a
//! [`Pick`] with a draw timestamp. A goal exists in exactly one of those
//! two places at a time.
//!
//! ## Key components
//!
//! - [`records`] — `User`, `Goal`, and `Pick` with validated constructors
//! - [`goals`] — the goal repository: add/remove/clear/list plus the lock flag
//! - [`picker`] — the uniform random draw and the exhausted sentinel
//!
//! Every operation takes the store explicitly, so tests run against an
//! in-memory store and production against the durable one.

pub mod goals;
pub mod keys;
pub mod picker;
pub mod records;

pub use picker::DrawOutcome;
pub use records::{Goal, Pick, User, MAX_GOALS, MAX_GOAL_CHARS, MAX_NAME_CHARS};
