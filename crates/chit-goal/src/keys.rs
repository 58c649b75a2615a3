// keys.rs - The four logical store keys.
//
// Everything the application persists lives under these keys. The store
// namespace (its directory) plus these names is the whole on-disk layout.

/// The user record (name and creation time).
pub const USER: &str = "user";

/// The remaining goal list, in insertion order.
pub const GOALS: &str = "goals";

/// The pick history, in draw order.
pub const PICKED: &str = "picked";

/// The lock flag: present and true while goal entry is closed.
pub const LOCKED: &str = "locked";
