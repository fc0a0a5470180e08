//! Keyboard modifier state tracking.

use super::events::Key;

/// Which of Shift, Ctrl and Alt are currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates modifier flags from a key event. Returns true if `key` was a modifier.
    pub fn track(&mut self, key: Key, pressed: bool) -> bool {
        match key {
            Key::Shift => self.shift = pressed,
            Key::Ctrl => self.ctrl = pressed,
            Key::Alt => self.alt = pressed,
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_press_and_release() {
        let mut mods = Modifiers::new();
        assert!(mods.track(Key::Ctrl, true));
        assert!(mods.ctrl);
        assert!(!mods.track(Key::Char('a'), true));
        assert!(mods.track(Key::Ctrl, false));
        assert_eq!(mods, Modifiers::default());
    }
}
