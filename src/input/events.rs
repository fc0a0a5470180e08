//! Backend-neutral input event types.

use crate::util::Point;

/// Generic key representation.
///
/// Backends map their native key symbols to these values; keybinding lookup
/// works on the name returned by [`Key::binding_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Printable character key (letters, digits, symbols)
    Char(char),
    Escape,
    Return,
    Backspace,
    Tab,
    Space,
    Shift,
    Ctrl,
    Alt,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Name used in keybinding strings, or `None` for modifier and unknown keys.
    pub fn binding_name(self) -> Option<String> {
        let name = match self {
            Key::Char(c) => return Some(c.to_string()),
            Key::Escape => "Escape",
            Key::Return => "Return",
            Key::Backspace => "Backspace",
            Key::Tab => "Tab",
            Key::Space => "Space",
            Key::Shift | Key::Ctrl | Key::Alt | Key::Unknown => return None,
        };
        Some(name.to_string())
    }
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Primary button: picks the foreground color
    Left,
    /// Secondary button: picks the background color
    Right,
    /// Middle button: drags the window
    Middle,
    /// Side button (reserved)
    Back,
    /// Side button (reserved)
    Forward,
}

/// Pointer location in both widget-local and global screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerPosition {
    pub local: Point,
    pub global: Point,
}

impl PointerPosition {
    pub fn new(local: Point, global: Point) -> Self {
        Self { local, global }
    }

    /// Position for a window whose top-left corner sits at `origin`.
    pub fn in_window(local: Point, origin: Point) -> Self {
        Self::new(local, origin + local)
    }
}
