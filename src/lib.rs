#![cfg(target_arch = "wasm32")]
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::{AmbientMode, SceneState};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod ambient;
mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod playback;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tree-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, constants::CANVAS_ID)?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    events::wire_canvas_resize(&canvas);

    let mut rng = StdRng::from_entropy();
    let mode = AmbientMode::roll(&mut rng);
    let scene = SceneState::build(rng);
    let s = scene.summary();
    log::info!(
        "[scene] layers={} ornaments={} fairy_lights={} gifts={} snowflakes={}",
        s.layers,
        s.ornaments,
        s.fairy_lights,
        s.gifts,
        s.snowflakes
    );

    // Upload meshes before the scene is shared with timers and listeners.
    let gpu = frame::init_gpu(&canvas, &scene).await;
    let scene = Rc::new(RefCell::new(scene));

    let soundtrack = Rc::new(audio::Soundtrack::from_document(&document));
    ambient::enter(mode, &soundtrack, &scene);
    events::wire_gesture_unlock(&soundtrack);
    events::wire_controls(&canvas, &scene);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        gpu,
        canvas,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
