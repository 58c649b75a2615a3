// records.rs - User, Goal, and Pick record types.
//
// All three are plain structs with validated constructors. Field names
// serialize as camelCase so a store written by this crate is record-
// compatible with the original browser app's localStorage layout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of goals in the remaining list, enforced on creation.
pub const MAX_GOALS: usize = 20;

/// Maximum length of a user name, in characters.
pub const MAX_NAME_CHARS: usize = 20;

/// Maximum length of a goal text, in characters.
pub const MAX_GOAL_CHARS: usize = 80;

/// The single user of the tracker. Display use only, not an identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a user from raw input: trimmed, non-empty, at most
    /// [`MAX_NAME_CHARS`] characters. Invalid input returns `None`.
    pub fn new(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() || name.chars().count() > MAX_NAME_CHARS {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            created_at: Utc::now(),
        })
    }
}

/// A goal still waiting to be drawn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Unique integer id: creation time in milliseconds, bumped past any
    /// id already taken (see `goals::add`).
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Build a goal from raw input: trimmed, non-empty, at most
    /// [`MAX_GOAL_CHARS`] characters. Invalid input returns `None`.
    pub fn new(id: i64, text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() || text.chars().count() > MAX_GOAL_CHARS {
            return None;
        }
        Some(Self {
            id,
            text: text.to_string(),
            created_at: Utc::now(),
        })
    }

    /// Convert into a pick record at draw time. Only the picker calls this.
    pub fn into_pick(self, picked_at: DateTime<Utc>) -> Pick {
        Pick {
            id: self.id,
            text: self.text,
            created_at: self.created_at,
            picked_at,
        }
    }
}

/// A drawn goal: all of the goal's fields plus the draw timestamp.
/// Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pick {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub picked_at: DateTime<Utc>,
}
