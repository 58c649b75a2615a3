// screen.rs - Screen enum and the pure derivation rule.

use std::fmt;

/// The four screens of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// No user record exists yet; show the welcome flow.
    New,

    /// Goal entry is open: the user exists and either the list is
    /// unlocked or there is nothing to pick from.
    Setup,

    /// Goals are locked in and at least one remains; show the picker.
    Picking,

    /// The history view. An explicit navigation target, never derived
    /// from the store.
    Review,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::New => write!(f, "new"),
            Screen::Setup => write!(f, "setup"),
            Screen::Picking => write!(f, "picking"),
            Screen::Review => write!(f, "review"),
        }
    }
}

/// Derive the screen from the persisted records.
///
/// This is evaluated fresh whenever the session needs to know its screen;
/// the result is never written back to the store. A lock flag set while
/// the list is empty has no visible effect, by the second rule.
pub fn derive_screen(user_present: bool, locked: bool, goal_count: usize) -> Screen {
    if !user_present {
        Screen::New
    } else if !locked || goal_count == 0 {
        Screen::Setup
    } else {
        Screen::Picking
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_user_derives_new() {
        assert_eq!(derive_screen(false, false, 0), Screen::New);
        // Stray records without a user still derive New.
        assert_eq!(derive_screen(false, true, 3), Screen::New);
    }

    #[test]
    fn unlocked_derives_setup() {
        assert_eq!(derive_screen(true, false, 0), Screen::Setup);
        assert_eq!(derive_screen(true, false, 5), Screen::Setup);
    }

    #[test]
    fn locked_with_empty_list_derives_setup() {
        assert_eq!(derive_screen(true, true, 0), Screen::Setup);
    }

    #[test]
    fn locked_with_goals_derives_picking() {
        assert_eq!(derive_screen(true, true, 1), Screen::Picking);
        assert_eq!(derive_screen(true, true, 20), Screen::Picking);
    }

    #[test]
    fn screen_display_names() {
        assert_eq!(Screen::New.to_string(), "new");
        assert_eq!(Screen::Setup.to_string(), "setup");
        assert_eq!(Screen::Picking.to_string(), "picking");
        assert_eq!(Screen::Review.to_string(), "review");
    }
}
