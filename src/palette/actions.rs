use log::{debug, info, warn};

use crate::draw::{BLACK, RasterError, WHITE};
use crate::host::HostAction;
use crate::session::{self, PersistError};

use super::layout::{CANVAS_SIZE, PaletteButton};
use super::menu::TextureAction;
use super::{PaletteMessage, PaletteRequest, PaletteWidget};

impl PaletteWidget {
    /// Exchanges the foreground and background colors.
    pub fn swap_colors(&mut self) -> Result<(), RasterError> {
        std::mem::swap(&mut self.foreground, &mut self.background);
        debug!(
            "Swapped colors (fg {}, bg {})",
            self.foreground.to_hex(),
            self.background.to_hex()
        );
        self.refresh()
    }

    /// Restores white foreground and black background.
    pub fn reset_colors(&mut self) -> Result<(), RasterError> {
        self.foreground = WHITE;
        self.background = BLACK;
        debug!("Reset colors to defaults");
        self.refresh()
    }

    /// Inverts the texture colors in place. Applying it twice restores the texture.
    pub fn invert_texture(&mut self) -> Result<(), RasterError> {
        self.assets.texture.invert_colors()?;
        self.refresh()
    }

    pub fn mirror_texture_horizontal(&mut self) -> Result<(), RasterError> {
        self.assets.texture.mirror_horizontal()?;
        self.refresh()
    }

    pub fn mirror_texture_vertical(&mut self) -> Result<(), RasterError> {
        self.assets.texture.mirror_vertical()?;
        self.refresh()
    }

    pub fn apply_texture_action(&mut self, action: TextureAction) -> Result<(), RasterError> {
        info!("Applying texture action: {}", action.label());
        match action {
            TextureAction::Invert => self.invert_texture(),
            TextureAction::MirrorHorizontal => self.mirror_texture_horizontal(),
            TextureAction::MirrorVertical => self.mirror_texture_vertical(),
        }
    }

    /// Performs the action of a button drawn over the frame, on press for
    /// the swap and reset icons and on release for the others.
    pub fn activate_button(&mut self, button: PaletteButton) {
        debug!("Button {:?} clicked", button);
        let result = match button {
            PaletteButton::Large => {
                self.request(PaletteRequest::Beep);
                Ok(())
            }
            PaletteButton::Info => {
                self.request(PaletteRequest::ShowMessage(PaletteMessage::About {
                    width: CANVAS_SIZE,
                    height: CANVAS_SIZE,
                }));
                Ok(())
            }
            PaletteButton::RotateLeft => {
                self.request(PaletteRequest::TriggerHostAction(HostAction::RotateCanvasLeft));
                Ok(())
            }
            PaletteButton::RotateRight => {
                self.request(PaletteRequest::TriggerHostAction(HostAction::RotateCanvasRight));
                Ok(())
            }
            PaletteButton::Quote => {
                self.request(PaletteRequest::ShowMessage(PaletteMessage::Quote));
                Ok(())
            }
            PaletteButton::Swap => self.swap_colors(),
            PaletteButton::Reset => self.reset_colors(),
        };
        log_failure(result, "button click");
    }

    /// Writes the clean-shutdown marker file.
    pub fn persist_session_data(&self) -> Result<(), PersistError> {
        session::write_marker(self.session.marker_file())
    }

    /// Like [`persist_session_data`](Self::persist_session_data), logging failures.
    pub fn persist_session_data_logged(&self) {
        if let Err(err) = self.persist_session_data() {
            warn!("Failed to persist palette session data: {}", err);
        }
    }
}

/// Logs a failed recomposition from an event handler.
pub(super) fn log_failure(result: Result<(), RasterError>, context: &str) {
    if let Err(err) = result {
        warn!("Failed to update palette after {}: {}", context, err);
    }
}
