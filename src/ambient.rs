use crate::audio::Soundtrack;
use crate::constants::FLICKER_INTERVAL_MS;
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::{AmbientMode, SceneState};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Apply the startup mode: pick the soundtrack and, in secret mode, start
/// the light flicker. Called once; there is no way back to normal.
pub fn enter(mode: AmbientMode, soundtrack: &Soundtrack, scene: &Rc<RefCell<SceneState>>) {
    log::info!("[ambient] mode={:?}", mode);
    soundtrack.start(mode);
    if mode.is_secret() {
        start_flicker(scene.clone());
    }
}

fn start_flicker(scene: Rc<RefCell<SceneState>>) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move || {
        scene.borrow_mut().lights.toggle_flicker();
    }) as Box<dyn FnMut()>);
    if let Err(e) = window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        FLICKER_INTERVAL_MS,
    ) {
        log::error!("[ambient] flicker interval error: {:?}", e);
    }
    closure.forget();
}
