use log::debug;

use crate::config::Action;
use crate::host::HostAction;
use crate::input::{Key, Modifiers};

use super::actions::log_failure;
use super::{PaletteRequest, PaletteWidget};

impl PaletteWidget {
    /// Handles a key press. Returns `true` when the key was consumed.
    ///
    /// The canvas-only binding is always consumed, even when no host is
    /// present to act on it, so it never moves keyboard focus.
    pub fn on_key_press(&mut self, key: Key, modifiers: Modifiers) -> bool {
        if key == Key::Escape && self.menu.take().is_some() {
            self.request(PaletteRequest::Redraw);
            return true;
        }

        let Some(action) = self.actions.lookup(key, modifiers) else {
            return false;
        };
        debug!("Key {:?} mapped to {:?}", key, action);

        let result = match action {
            Action::Exit => {
                self.request(PaletteRequest::Close);
                Ok(())
            }
            Action::ToggleCanvasOnly => {
                self.request(PaletteRequest::TriggerHostAction(HostAction::ShowCanvasOnly));
                Ok(())
            }
            Action::SwapColors => self.swap_colors(),
            Action::ResetColors => self.reset_colors(),
            Action::InvertTexture => self.invert_texture(),
            Action::MirrorHorizontal => self.mirror_texture_horizontal(),
            Action::MirrorVertical => self.mirror_texture_vertical(),
        };
        log_failure(result, "key press");
        true
    }
}
