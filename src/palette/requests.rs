//! Side effects requested by the palette widget.
//!
//! The widget never talks to the host or the window directly. Each handler
//! queues [`PaletteRequest`]s which the driver drains and delivers, skipping
//! host-bound requests when no host is present.

use crate::draw::Color;
use crate::host::{AppInfo, HostAction};
use crate::util::Point;
use crate::window::CursorStyle;

/// Informational dialogs shown by the small buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteMessage {
    /// Greeting with the application version and palette size
    About { width: i32, height: i32 },
    /// A quote about painting
    Quote,
}

impl PaletteMessage {
    pub fn title(&self) -> &'static str {
        match self {
            PaletteMessage::About { .. } => "Test Btn1",
            PaletteMessage::Quote => "Test Btn4",
        }
    }

    pub fn body(&self, app: &AppInfo) -> String {
        match self {
            PaletteMessage::About { width, height } => format!(
                "Hello! This is {} version {}\n\nwidth {} height {}",
                app.name, app.version, width, height
            ),
            PaletteMessage::Quote => "\"The position of the artist is humble. He is essentially a channel.\" Piet Mondrian".to_string(),
        }
    }
}

/// One side effect for the driver to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum PaletteRequest {
    /// Set the host's foreground color
    PushForeground(Color),
    /// Set the host's background color
    PushBackground(Color),
    /// Trigger a host action
    TriggerHostAction(HostAction),
    /// Audible alert
    Beep,
    ShowMessage(PaletteMessage),
    SetCursor(CursorStyle),
    /// Move the window's top-left corner to this global position
    MoveWindow(Point),
    /// Repaint the window from the current frame
    Redraw,
    /// Close the palette (hide when hosted, exit when standalone)
    Close,
}

impl PaletteRequest {
    /// Whether delivering this request needs a host.
    pub fn needs_host(&self) -> bool {
        matches!(
            self,
            PaletteRequest::PushForeground(_)
                | PaletteRequest::PushBackground(_)
                | PaletteRequest::TriggerHostAction(_)
        )
    }

    /// Whether the request only applies without a host. The exit key is a
    /// host tool shortcut, so a hosted popup never closes through it.
    pub fn standalone_only(&self) -> bool {
        matches!(self, PaletteRequest::Close)
    }
}
