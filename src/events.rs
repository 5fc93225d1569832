use crate::audio::Soundtrack;
use crate::dom;
use crate::input::{self, DragState};
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::SceneState;
use web_sys as web;

/// Keep the canvas backing store at CSS size * devicePixelRatio. The renderer
/// and projection pick the new size up on the next frame.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    if let Some(window) = web::window() {
        dom::add_listener(&window, "resize", move |_: web::Event| {
            dom::sync_canvas_backing_size(&canvas_resize);
        });
    }
}

/// Wheel zoom and right/shift-drag pan. No rotate gesture; the orbit owns the
/// camera angle.
pub fn wire_controls(canvas: &web::HtmlCanvasElement, scene: &Rc<RefCell<SceneState>>) {
    let drag = Rc::new(RefCell::new(DragState::default()));

    let scene_wheel = scene.clone();
    dom::add_listener(canvas, "wheel", move |ev: web::WheelEvent| {
        ev.prevent_default();
        let px = input::wheel_pixels(ev.delta_y(), ev.delta_mode());
        scene_wheel.borrow_mut().controls.zoom(px);
    });

    let drag_down = drag.clone();
    let canvas_down = canvas.clone();
    dom::add_listener(canvas, "pointerdown", move |ev: web::PointerEvent| {
        if !input::starts_pan(ev.button(), ev.shift_key()) {
            return;
        }
        drag_down.borrow_mut().begin(
            ev.pointer_id(),
            ev.offset_x() as f32,
            ev.offset_y() as f32,
        );
        _ = canvas_down.set_pointer_capture(ev.pointer_id());
    });

    let drag_move = drag.clone();
    let scene_move = scene.clone();
    dom::add_listener(canvas, "pointermove", move |ev: web::PointerEvent| {
        let delta = drag_move.borrow_mut().drag_to(
            ev.pointer_id(),
            ev.offset_x() as f32,
            ev.offset_y() as f32,
        );
        if let Some((dx, dy)) = delta {
            scene_move.borrow_mut().controls.pan(dx, dy);
        }
    });

    for event in ["pointerup", "pointercancel"] {
        let drag_up = drag.clone();
        dom::add_listener(canvas, event, move |ev: web::PointerEvent| {
            drag_up.borrow_mut().end(ev.pointer_id());
        });
    }

    // right-drag must not open the browser menu
    dom::add_listener(canvas, "contextmenu", |ev: web::MouseEvent| {
        ev.prevent_default();
    });
}

/// The first click, tap or key press retries a track the browser refused to
/// autoplay.
pub fn wire_gesture_unlock(soundtrack: &Rc<Soundtrack>) {
    let Some(window) = web::window() else {
        return;
    };
    let on_pointer = soundtrack.clone();
    dom::add_listener(&window, "pointerdown", move |_: web::PointerEvent| {
        on_pointer.resume_active();
    });
    let on_key = soundtrack.clone();
    dom::add_listener(&window, "keydown", move |_: web::KeyboardEvent| {
        on_key.resume_active();
    });
}
