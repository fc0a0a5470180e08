//! Host plugin glue: the toggle action and the popup's show/hide lifecycle.
//!
//! [`PopupPaletteExtension`] owns the window and, once first shown, the
//! palette widget. The host delivers [`HostEvent`]s; the extension turns them
//! into window operations and widget calls, then drains the widget's request
//! queue through [`dispatch_requests`].
//!
//! Re-parenting after a canvas-only toggle must not happen inside the host's
//! own handling of that toggle. It is queued and performed by
//! [`run_deferred`](PopupPaletteExtension::run_deferred), which the host
//! calls from its event loop on the next tick.

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::config::{Config, PopupConfig};
use crate::host::{ActionId, Host, HostAction, HostEvent};
use crate::palette::{CANVAS_SIZE, PaletteWidget};
use crate::util::Point;
use crate::window::{PopupWindow, dispatch_requests};

/// Builds the palette widget on first use.
pub type WidgetFactory = Box<dyn FnMut() -> Result<PaletteWidget>>;

/// Registration and placement settings, from `[popup]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionOptions {
    pub action_name: String,
    pub action_label: String,
    pub toggle_shortcut: Option<String>,
    /// Extra upward shift so the pointer glyph clears the palette center
    pub cursor_hotspot_offset: i32,
}

impl ExtensionOptions {
    pub fn from_config(config: &PopupConfig) -> Self {
        Self {
            action_name: config.action_name.clone(),
            action_label: config.action_label.clone(),
            toggle_shortcut: config.toggle_shortcut.clone(),
            cursor_hotspot_offset: config.cursor_hotspot_offset,
        }
    }
}

impl Default for ExtensionOptions {
    fn default() -> Self {
        Self::from_config(&PopupConfig::default())
    }
}

/// Work postponed to the next host event-loop tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeferredTask {
    Reparent,
}

/// The palette's presence inside a host application.
pub struct PopupPaletteExtension<H: Host, W: PopupWindow> {
    host: H,
    window: W,
    options: ExtensionOptions,
    factory: WidgetFactory,
    widget: Option<PaletteWidget>,
    toggle_action: Option<ActionId>,
    canvas_only_action: Option<ActionId>,
    deferred: Vec<DeferredTask>,
}

impl<H: Host, W: PopupWindow> PopupPaletteExtension<H, W> {
    pub fn new(host: H, window: W, options: ExtensionOptions, factory: WidgetFactory) -> Self {
        Self {
            host,
            window,
            options,
            factory,
            widget: None,
            toggle_action: None,
            canvas_only_action: None,
            deferred: Vec::new(),
        }
    }

    /// Extension whose widget is built from `config` on first toggle.
    pub fn from_config(host: H, window: W, config: &Config) -> Self {
        let options = ExtensionOptions::from_config(&config.popup);
        let config = config.clone();
        Self::new(
            host,
            window,
            options,
            Box::new(move || PaletteWidget::from_config(&config)),
        )
    }

    /// Registers the toggle action and subscribes to the host's canvas-only
    /// action. Calling it again is a no-op.
    pub fn setup(&mut self) {
        if self.toggle_action.is_some() {
            debug!("Popup palette already set up");
            return;
        }

        let id = self.host.create_action(
            &self.options.action_name,
            &self.options.action_label,
            self.options.toggle_shortcut.as_deref(),
        );
        self.toggle_action = Some(id);

        self.canvas_only_action = self.host.find_action(HostAction::ShowCanvasOnly.name());
        if self.canvas_only_action.is_none() {
            warn!(
                "Host has no '{}' action; canvas-only re-parenting disabled",
                HostAction::ShowCanvasOnly.name()
            );
        }

        info!(
            "Registered '{}' ({}) with shortcut {}",
            self.options.action_name,
            self.options.action_label,
            self.options.toggle_shortcut.as_deref().unwrap_or("<host default>")
        );
    }

    /// Routes one host event.
    pub fn handle_host_event(&mut self, event: HostEvent) -> Result<()> {
        match event {
            HostEvent::ActionTriggered(id) if Some(id) == self.toggle_action => {
                self.toggle_visibility()
            }
            HostEvent::ActionTriggered(id) if Some(id) == self.canvas_only_action => {
                self.on_canvas_only_toggled();
                Ok(())
            }
            HostEvent::ActionTriggered(id) => {
                debug!("Ignoring unrelated host action {:?}", id);
                Ok(())
            }
            HostEvent::AboutToQuit => {
                self.on_host_about_to_quit();
                Ok(())
            }
        }
    }

    /// Hides the popup when shown; otherwise centers it on the pointer,
    /// attaches it to the host's active window and shows it focused.
    ///
    /// The widget is built on the first call.
    pub fn toggle_visibility(&mut self) -> Result<()> {
        if self.window.is_visible() {
            self.window.set_parent(None);
            self.window.hide();
            debug!("Popup palette hidden");
            return Ok(());
        }

        self.ensure_widget()?;

        let cursor = self.window.cursor_position();
        let position = cursor
            - Point::new(
                CANVAS_SIZE / 2,
                CANVAS_SIZE / 2 + self.options.cursor_hotspot_offset,
            );
        self.window.move_to(position);
        self.window.set_parent(self.host.active_window());
        self.window.show();
        self.window.activate();
        self.window.set_focus();
        debug!(
            "Popup palette shown at ({}, {}) for pointer ({}, {})",
            position.x, position.y, cursor.x, cursor.y
        );
        Ok(())
    }

    fn ensure_widget(&mut self) -> Result<()> {
        if self.widget.is_some() {
            return Ok(());
        }
        let widget = (self.factory)().context("Failed to create popup palette")?;
        self.window.set_mask(widget.mask());
        self.widget = Some(widget);
        Ok(())
    }

    /// Persists session data synchronously and releases the widget.
    ///
    /// Must complete before the host tears down. Pending deferred work is
    /// discarded.
    pub fn on_host_about_to_quit(&mut self) {
        self.deferred.clear();
        match self.widget.take() {
            Some(widget) => {
                widget.persist_session_data_logged();
                info!("Popup palette saved session data before host shutdown");
            }
            None => debug!("Host quitting before the palette was created"),
        }
    }

    /// Schedules a re-parent for the next tick after the host's canvas-only
    /// view toggled.
    pub fn on_canvas_only_toggled(&mut self) {
        if self.widget.is_none() {
            return;
        }
        if !self.deferred.contains(&DeferredTask::Reparent) {
            debug!("Canvas-only toggled, re-parenting on next tick");
            self.deferred.push(DeferredTask::Reparent);
        }
    }

    /// Whether [`run_deferred`](Self::run_deferred) has work queued.
    pub fn has_deferred(&self) -> bool {
        !self.deferred.is_empty()
    }

    /// Runs work postponed by earlier events.
    pub fn run_deferred(&mut self) {
        for task in std::mem::take(&mut self.deferred) {
            match task {
                DeferredTask::Reparent => self.reparent(),
            }
        }
    }

    fn reparent(&mut self) {
        if !self.window.is_visible() {
            return;
        }
        self.window.set_parent(None);
        self.window.hide();
        self.window.set_parent(self.host.active_window());
        self.window.show();
        self.window.activate();
        self.window.set_focus();
        debug!("Popup palette re-parented");
    }

    /// The palette, once created.
    pub fn widget_mut(&mut self) -> Option<&mut PaletteWidget> {
        self.widget.as_mut()
    }

    pub fn widget(&self) -> Option<&PaletteWidget> {
        self.widget.as_ref()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut W {
        &mut self.window
    }

    /// Delivers the widget's queued requests to the window and the host.
    ///
    /// Close requests are standalone-only and never reach this popup; it is
    /// hidden through the toggle action alone.
    pub fn flush_requests(&mut self) {
        let Some(widget) = self.widget.as_mut() else {
            return;
        };
        let requests = widget.take_requests();
        if requests.is_empty() {
            return;
        }

        let app = self.host.app_info();
        dispatch_requests(
            requests,
            &mut self.window,
            Some(&mut self.host as &mut dyn Host),
            &app,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::WindowHandle;
    use crate::input::{Key, Modifiers, MouseButton, PointerPosition};
    use crate::palette::PaletteOptions;
    use crate::palette::testing::assets;
    use crate::session::{MARKER_TEXT, SessionOptions, read_marker};
    use crate::window::testing::{CANVAS_ONLY_ACTION, RecordingHost, RecordingWindow};
    use std::cell::Cell;
    use std::path::PathBuf;
    use std::rc::Rc;

    type Extension = PopupPaletteExtension<RecordingHost, RecordingWindow>;

    fn extension_with_marker(marker: PathBuf) -> (Extension, Rc<Cell<usize>>) {
        let built = Rc::new(Cell::new(0));
        let counter = built.clone();
        let factory: WidgetFactory = Box::new(move || {
            counter.set(counter.get() + 1);
            Ok(PaletteWidget::new(
                assets(),
                PaletteOptions::new(SessionOptions::new(marker.clone())),
            )?)
        });
        let window = RecordingWindow {
            cursor: Point::new(600, 400),
            ..Default::default()
        };
        let mut extension = PopupPaletteExtension::new(
            RecordingHost::default(),
            window,
            ExtensionOptions::default(),
            factory,
        );
        extension.setup();
        (extension, built)
    }

    fn extension() -> (Extension, Rc<Cell<usize>>) {
        extension_with_marker(PathBuf::from("/nonexistent/popuppalette/test.txt"))
    }

    fn toggle_id(extension: &Extension) -> ActionId {
        extension.host().find_action("showpopuppalette").unwrap()
    }

    #[test]
    fn setup_registers_toggle_action_once() {
        let (mut extension, _) = extension();
        extension.setup();
        let registered: Vec<_> = extension
            .host()
            .actions
            .iter()
            .filter(|(name, _, _)| name == "showpopuppalette")
            .collect();
        assert_eq!(registered.len(), 1);
        assert_eq!(registered[0].1, "Popup Palette");
        assert_eq!(registered[0].2, None);
    }

    #[test]
    fn widget_is_built_lazily_on_first_toggle() {
        let (mut extension, built) = extension();
        assert!(extension.widget().is_none());
        assert_eq!(built.get(), 0);

        let id = toggle_id(&extension);
        extension.handle_host_event(HostEvent::ActionTriggered(id)).unwrap();
        extension.handle_host_event(HostEvent::ActionTriggered(id)).unwrap();
        extension.handle_host_event(HostEvent::ActionTriggered(id)).unwrap();

        assert_eq!(built.get(), 1);
        assert_eq!(
            extension.window().mask_pixels,
            Some((CANVAS_SIZE * CANVAS_SIZE) as usize)
        );
    }

    #[test]
    fn toggle_shows_centered_on_pointer_then_hides_detached() {
        let (mut extension, _) = extension();

        extension.toggle_visibility().unwrap();
        let window = extension.window();
        assert!(window.visible);
        assert!(window.focused);
        assert_eq!(window.position, Point::new(600 - 256, 400 - 256 - 24));
        assert_eq!(window.parent, Some(WindowHandle(1)));

        extension.toggle_visibility().unwrap();
        let window = extension.window();
        assert!(!window.visible);
        assert_eq!(window.parent, None);
    }

    #[test]
    fn toggling_twice_from_hidden_follows_the_pointer() {
        let (mut extension, _) = extension();
        extension.toggle_visibility().unwrap();
        extension.toggle_visibility().unwrap();

        extension.window_mut().cursor = Point::new(1000, 900);
        extension.toggle_visibility().unwrap();
        assert!(extension.window().visible);
        assert_eq!(extension.window().position, Point::new(744, 620));
    }

    #[test]
    fn factory_failure_is_reported_and_leaves_window_hidden() {
        let mut extension = PopupPaletteExtension::new(
            RecordingHost::default(),
            RecordingWindow::default(),
            ExtensionOptions::default(),
            Box::new(|| Err(anyhow::anyhow!("texture missing"))),
        );
        extension.setup();
        let err = extension.toggle_visibility().unwrap_err();
        assert!(format!("{err:#}").contains("texture missing"));
        assert!(!extension.window().visible);
    }

    #[test]
    fn canvas_only_toggle_reparents_on_next_tick() {
        let (mut extension, _) = extension();
        extension.toggle_visibility().unwrap();
        extension.window_mut().log.clear();

        let canvas_only = extension.host().find_action(CANVAS_ONLY_ACTION).unwrap();
        extension
            .handle_host_event(HostEvent::ActionTriggered(canvas_only))
            .unwrap();
        extension.on_canvas_only_toggled();
        assert!(extension.has_deferred());
        assert!(extension.window().log.is_empty());

        extension.run_deferred();
        assert!(!extension.has_deferred());
        assert_eq!(
            extension.window().log,
            vec!["parent None", "hide", "parent Some(1)", "show", "focus"]
        );
    }

    #[test]
    fn canvas_only_toggle_before_creation_does_nothing() {
        let (mut extension, _) = extension();
        extension.on_canvas_only_toggled();
        assert!(!extension.has_deferred());
    }

    #[test]
    fn about_to_quit_persists_and_drops_widget() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("test.txt");
        let (mut extension, _) = extension_with_marker(marker.clone());
        extension.toggle_visibility().unwrap();
        extension.on_canvas_only_toggled();

        extension.handle_host_event(HostEvent::AboutToQuit).unwrap();

        assert_eq!(read_marker(&marker).unwrap().as_deref(), Some(MARKER_TEXT));
        assert!(extension.widget().is_none());
        assert!(!extension.has_deferred());
    }

    #[test]
    fn about_to_quit_tolerates_unwritable_marker() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let (mut extension, _) = extension_with_marker(blocker.join("test.txt"));
        extension.toggle_visibility().unwrap();
        extension.on_host_about_to_quit();
        assert!(extension.widget().is_none());
    }

    #[test]
    fn picks_and_keys_reach_the_host() {
        let (mut extension, _) = extension();
        extension.toggle_visibility().unwrap();

        let origin = extension.window().position;
        let widget = extension.widget_mut().unwrap();
        widget.on_pointer_press(
            MouseButton::Right,
            PointerPosition::in_window(Point::new(10, 10), origin),
        );
        widget.on_key_press(Key::Tab, Modifiers::default());
        extension.flush_requests();

        let host = extension.host();
        assert_eq!(
            host.background.map(|c| c.to_rgba8()),
            Some(crate::palette::testing::RED)
        );
        assert_eq!(host.triggered, vec![CANVAS_ONLY_ACTION.to_string()]);
        assert!(extension.window().redraws >= 1);
    }

    #[test]
    fn exit_key_leaves_hosted_popup_open() {
        let (mut extension, _) = extension();
        extension.toggle_visibility().unwrap();
        extension
            .widget_mut()
            .unwrap()
            .on_key_press(Key::Char('z'), Modifiers::default());
        extension.flush_requests();
        assert!(extension.window().visible);
        assert_eq!(extension.window().parent, Some(WindowHandle(1)));
        assert!(extension.widget().is_some());
    }

    #[test]
    fn unrelated_actions_are_ignored() {
        let (mut extension, built) = extension();
        extension
            .handle_host_event(HostEvent::ActionTriggered(ActionId(999)))
            .unwrap();
        assert_eq!(built.get(), 0);
        assert!(!extension.window().visible);
    }
}
