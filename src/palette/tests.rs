use super::testing::{BLUE, RED, assets_with_mask, solid};
use super::*;
use crate::draw::fill_rect;
use crate::host::HostAction;
use crate::input::{Key, Modifiers, MouseButton, PointerPosition};
use crate::session::{MARKER_TEXT, read_marker};
use crate::util::Rect;
use crate::window::CursorStyle;

fn options() -> PaletteOptions {
    PaletteOptions::new(SessionOptions::new("/nonexistent/marker.txt"))
}

fn widget() -> PaletteWidget {
    PaletteWidget::new(assets_with_mask(Mask::full(CANVAS_SIZE, CANVAS_SIZE)), options()).unwrap()
}

fn at(x: i32, y: i32) -> PointerPosition {
    PointerPosition::in_window(Point::new(x, y), Point::new(100, 200))
}

fn rgba(color: Color) -> [u8; 4] {
    color.to_rgba8()
}

fn picked(widget: &PaletteWidget, x: i32, y: i32) -> [u8; 4] {
    rgba(widget.pick_color_at(Point::new(x, y)).unwrap().unwrap())
}

#[test]
fn default_options_bind_every_action() {
    let options = options();
    assert_eq!(options.actions.len(), 7);
    assert_eq!(
        options.actions.lookup(Key::Char('x'), Modifiers::default()),
        Some(crate::config::Action::SwapColors)
    );
}

#[test]
fn new_widget_starts_white_on_black() {
    let mut widget = widget();
    assert_eq!(widget.foreground(), WHITE);
    assert_eq!(widget.background(), BLACK);
    assert_eq!(widget.readout(), "x = 0, y = 0");
    assert!(!widget.is_dragging());
    assert!(widget.take_requests().is_empty());
}

#[test]
fn frame_shows_texture_gradient_and_swatches() {
    let widget = widget();
    assert_eq!(picked(&widget, 10, 10), RED);
    assert_eq!(picked(&widget, 300, 100), BLUE);
    // Gradient interior: foreground on the top row, background on the bottom.
    assert_eq!(picked(&widget, 500, 2), [255, 255, 255, 255]);
    assert_eq!(picked(&widget, 500, 509), [0, 0, 0, 255]);
    // Outline
    assert_eq!(picked(&widget, 497, 100), [0, 0, 0, 255]);
    // Foreground swatch overlaps the background swatch.
    assert_eq!(picked(&widget, 440, 456), [255, 255, 255, 255]);
    assert_eq!(picked(&widget, 476, 492), [0, 0, 0, 255]);
}

#[test]
fn pick_off_canvas_is_none() {
    let widget = widget();
    assert!(widget.pick_color_at(Point::new(-1, 0)).unwrap().is_none());
    assert!(widget.pick_color_at(Point::new(0, CANVAS_SIZE)).unwrap().is_none());
}

#[test]
fn left_click_on_gradient_top_pushes_current_foreground() {
    let mut opts = options();
    opts.foreground = Color::from_rgba8(255, 128, 0, 255);
    let mut widget = PaletteWidget::new(
        assets_with_mask(Mask::full(CANVAS_SIZE, CANVAS_SIZE)),
        opts,
    )
    .unwrap();

    widget.on_pointer_press(MouseButton::Left, at(500, 2));

    let orange = Color::from_rgba8(255, 128, 0, 255);
    assert_eq!(widget.foreground(), orange);
    assert_eq!(
        widget.take_requests(),
        vec![PaletteRequest::PushForeground(orange), PaletteRequest::Redraw]
    );
}

#[test]
fn left_click_picks_foreground_and_right_click_background() {
    let mut widget = widget();
    widget.on_pointer_press(MouseButton::Left, at(10, 10));
    widget.on_pointer_press(MouseButton::Right, at(300, 100));

    assert_eq!(rgba(widget.foreground()), RED);
    assert_eq!(rgba(widget.background()), BLUE);
    // The frame was recomposed with the new colors.
    assert_eq!(picked(&widget, 500, 2), RED);
    assert_eq!(picked(&widget, 500, 509), BLUE);

    let requests = widget.take_requests();
    assert!(matches!(requests[0], PaletteRequest::PushForeground(c) if rgba(c) == RED));
    assert!(requests.iter().any(
        |r| matches!(r, PaletteRequest::PushBackground(c) if rgba(*c) == BLUE)
    ));
}

#[test]
fn swapping_twice_restores_colors() {
    let mut widget = widget();
    widget.on_pointer_press(MouseButton::Left, at(10, 10));
    let (fg, bg) = (widget.foreground(), widget.background());

    widget.swap_colors().unwrap();
    assert_eq!(widget.foreground(), bg);
    assert_eq!(widget.background(), fg);
    assert_eq!(picked(&widget, 500, 2), rgba(bg));

    widget.swap_colors().unwrap();
    assert_eq!(widget.foreground(), fg);
    assert_eq!(widget.background(), bg);
}

#[test]
fn reset_restores_white_and_black() {
    let mut widget = widget();
    widget.on_pointer_press(MouseButton::Left, at(10, 10));
    widget.on_pointer_press(MouseButton::Right, at(300, 10));
    widget.reset_colors().unwrap();
    assert_eq!(widget.foreground(), WHITE);
    assert_eq!(widget.background(), BLACK);
}

#[test]
fn swap_and_reset_buttons_act_on_press() {
    let mut widget = widget();
    widget.on_pointer_press(MouseButton::Left, at(472, 461));
    assert_eq!(widget.foreground(), BLACK);
    assert_eq!(widget.background(), WHITE);

    widget.on_pointer_press(MouseButton::Left, at(440, 490));
    assert_eq!(widget.foreground(), WHITE);
    assert_eq!(widget.background(), BLACK);
    assert!(
        !widget
            .take_requests()
            .iter()
            .any(|r| matches!(r, PaletteRequest::PushForeground(_)))
    );
}

#[test]
fn mirroring_twice_restores_texture() {
    let mut widget = widget();
    let original = widget.texture().pixels().unwrap();

    widget.mirror_texture_horizontal().unwrap();
    assert_eq!(picked(&widget, 10, 10), BLUE);
    widget.mirror_texture_horizontal().unwrap();
    assert_eq!(widget.texture().pixels().unwrap(), original);

    widget.mirror_texture_vertical().unwrap();
    widget.mirror_texture_vertical().unwrap();
    assert_eq!(widget.texture().pixels().unwrap(), original);
}

#[test]
fn inverting_twice_restores_texture() {
    let mut widget = widget();
    let original = widget.texture().pixels().unwrap();

    widget.invert_texture().unwrap();
    assert_eq!(picked(&widget, 10, 10), [55, 225, 225, 255]);
    widget.invert_texture().unwrap();
    assert_eq!(widget.texture().pixels().unwrap(), original);
}

#[test]
fn right_click_on_large_button_opens_texture_menu() {
    let mut widget = widget();
    widget.on_pointer_press(MouseButton::Right, at(256, 256));
    let menu = *widget.context_menu().expect("menu open");
    assert_eq!(widget.background(), BLACK);

    let item = menu.rect();
    widget.on_pointer_press(MouseButton::Left, at(item.x + 5, item.y + 5));
    assert!(widget.context_menu().is_none());
    assert_eq!(picked(&widget, 10, 10), [55, 225, 225, 255]);
}

#[test]
fn any_press_outside_menu_closes_it_without_picking() {
    let mut widget = widget();
    widget.on_pointer_press(MouseButton::Right, at(256, 256));
    widget.take_requests();

    widget.on_pointer_press(MouseButton::Left, at(10, 10));
    assert!(widget.context_menu().is_none());
    assert_eq!(widget.foreground(), WHITE);
    assert_eq!(widget.take_requests(), vec![PaletteRequest::Redraw]);
}

#[test]
fn escape_closes_menu() {
    let mut widget = widget();
    widget.on_pointer_press(MouseButton::Right, at(256, 256));
    assert!(widget.on_key_press(Key::Escape, Modifiers::default()));
    assert!(widget.context_menu().is_none());
}

#[test]
fn small_buttons_act_on_release_over_the_same_button() {
    let mut widget = widget();

    widget.on_pointer_press(MouseButton::Left, at(200, 330));
    assert!(widget.take_requests().is_empty());
    widget.on_pointer_release(MouseButton::Left, at(201, 331));
    assert_eq!(
        widget.take_requests(),
        vec![PaletteRequest::ShowMessage(PaletteMessage::About {
            width: 512,
            height: 512
        })]
    );

    widget.on_pointer_press(MouseButton::Left, at(230, 330));
    widget.on_pointer_release(MouseButton::Left, at(10, 10));
    assert!(widget.take_requests().is_empty());

    widget.on_pointer_press(MouseButton::Left, at(260, 330));
    widget.on_pointer_release(MouseButton::Left, at(260, 330));
    assert_eq!(
        widget.take_requests(),
        vec![PaletteRequest::TriggerHostAction(HostAction::RotateCanvasRight)]
    );

    widget.on_pointer_press(MouseButton::Left, at(256, 256));
    widget.on_pointer_release(MouseButton::Left, at(256, 256));
    assert_eq!(widget.take_requests(), vec![PaletteRequest::Beep]);
}

#[test]
fn presses_on_readout_are_consumed() {
    let mut widget = widget();
    widget.on_pointer_press(MouseButton::Left, at(200, 170));
    assert_eq!(widget.foreground(), WHITE);
    assert!(widget.take_requests().is_empty());
}

#[test]
fn presses_outside_mask_are_ignored() {
    let shape = solid(CANVAS_SIZE, CANVAS_SIZE, [0, 0, 0, 255]);
    {
        let ctx = shape.context().unwrap();
        fill_rect(&ctx, Rect::fixed(0, 0, 64, 64), WHITE).unwrap();
    }
    let mask = Mask::from_raster(&shape).unwrap();
    let mut widget = PaletteWidget::new(assets_with_mask(mask), options()).unwrap();

    widget.on_pointer_press(MouseButton::Left, at(10, 10));
    assert_eq!(widget.foreground(), WHITE);
    widget.on_pointer_press(MouseButton::Left, at(100, 100));
    assert_eq!(rgba(widget.foreground()), RED);
}

#[test]
fn middle_drag_moves_window_by_pointer_delta() {
    let mut widget = widget();
    widget.on_pointer_press(MouseButton::Middle, at(10, 20));
    assert!(widget.is_dragging());

    widget.on_pointer_motion(PointerPosition::new(Point::new(10, 20), Point::new(150, 260)));
    assert_eq!(widget.readout(), "x = 10, y = 20");
    assert_eq!(
        widget.take_requests(),
        vec![
            PaletteRequest::Redraw,
            PaletteRequest::MoveWindow(Point::new(140, 240))
        ]
    );

    widget.on_pointer_release(MouseButton::Middle, at(10, 20));
    assert!(!widget.is_dragging());
    widget.on_pointer_motion(at(30, 40));
    assert_eq!(widget.take_requests(), vec![PaletteRequest::Redraw]);
    assert_eq!(widget.readout(), "x = 30, y = 40");
}

#[test]
fn side_buttons_only_beep() {
    let mut widget = widget();
    widget.on_pointer_press(MouseButton::Back, at(10, 10));
    widget.on_pointer_press(MouseButton::Forward, at(10, 10));
    assert_eq!(widget.foreground(), WHITE);
    assert_eq!(
        widget.take_requests(),
        vec![PaletteRequest::Beep, PaletteRequest::Beep]
    );
}

#[test]
fn hover_swaps_cursor_and_dedupes_redraws() {
    let mut widget = widget();
    widget.on_pointer_enter();
    widget.on_pointer_motion(at(1, 1));
    assert!(widget.is_hovered());
    assert_eq!(
        widget.take_requests(),
        vec![
            PaletteRequest::SetCursor(CursorStyle::Palette),
            PaletteRequest::Redraw
        ]
    );
    widget.on_pointer_leave();
    assert!(!widget.is_hovered());
    assert_eq!(
        widget.take_requests(),
        vec![
            PaletteRequest::SetCursor(CursorStyle::Default),
            PaletteRequest::Redraw
        ]
    );
}

#[test]
fn tab_requests_canvas_only_and_is_consumed() {
    let mut widget = widget();
    assert!(widget.on_key_press(Key::Tab, Modifiers::default()));
    assert_eq!(
        widget.take_requests(),
        vec![PaletteRequest::TriggerHostAction(HostAction::ShowCanvasOnly)]
    );
}

#[test]
fn exit_binding_requests_close() {
    let mut widget = widget();
    assert!(widget.on_key_press(Key::Char('z'), Modifiers::default()));
    assert_eq!(widget.take_requests(), vec![PaletteRequest::Close]);
}

#[test]
fn unbound_keys_are_not_consumed() {
    let mut widget = widget();
    assert!(!widget.on_key_press(Key::Char('q'), Modifiers::default()));
    assert!(!widget.on_key_press(Key::Shift, Modifiers::default()));
    assert!(widget.take_requests().is_empty());
}

#[test]
fn persist_writes_marker_file() {
    let dir = tempfile::tempdir().unwrap();
    let marker = dir.path().join("test.txt");
    let widget = PaletteWidget::new(
        assets_with_mask(Mask::full(CANVAS_SIZE, CANVAS_SIZE)),
        PaletteOptions::new(SessionOptions::new(&marker)),
    )
    .unwrap();

    widget.persist_session_data().unwrap();
    assert_eq!(read_marker(&marker).unwrap().as_deref(), Some(MARKER_TEXT));
}

#[test]
fn painted_output_keeps_frame_outside_overlays() {
    let widget = widget();
    let painted = widget.render_to_raster().unwrap();
    assert_eq!(painted.color_at(10, 10).unwrap().unwrap().to_rgba8(), RED);
    assert_eq!(
        painted.color_at(500, 2).unwrap().unwrap().to_rgba8(),
        [255, 255, 255, 255]
    );
}
