#![cfg(target_arch = "wasm32")]
use crate::audio::{Player, SpectrumSampler, WaveformSampler};
use crate::camera::{Camera, OrbitControls};
use crate::constants::*;
use crate::core::{MotionIntegrator, ParamStore, SessionClock};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod panel;
mod parallax;
mod playback;
mod render;

// Keep the canvas backing store at container CSS size * devicePixelRatio
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, container: &web::Element) {
    dom::sync_canvas_backing_size(canvas, container);
    let canvas_resize = canvas.clone();
    let container_resize = container.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize, &container_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn spawn_track_load(ctx: web::AudioContext, player: Rc<RefCell<Player>>) {
    spawn_local(async move {
        match audio::load_track(&ctx, TRACK_URL).await {
            Ok(buffer) => {
                log::info!("[audio] loaded {} ({:.1}s)", TRACK_URL, buffer.duration());
                player.borrow_mut().set_buffer(buffer);
            }
            Err(e) => log::error!("[audio] track load failed: {:?}", e),
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("reason-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = document
        .get_element_by_id(CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CONTAINER_ID))?;
    let canvas = dom::ensure_canvas(&document, &container, CANVAS_ID)?;
    wire_canvas_resize(&canvas, &container);

    let graph = audio::build_graph()?;
    let store = Rc::new(RefCell::new(ParamStore::new()));
    let panel = match panel::Panel::mount(&document, PANEL_CONTAINER_ID, store.clone()) {
        Ok(p) => Some(p),
        Err(e) => {
            log::warn!("[panel] not mounted: {:?}", e);
            None
        }
    };

    let player = Rc::new(RefCell::new(Player::new(
        graph.ctx.clone(),
        graph.output.clone(),
    )));
    events::wire_player(events::PlayerWiring {
        document: document.clone(),
        player: player.clone(),
        store: store.clone(),
        panel,
    });
    spawn_track_load(graph.ctx.clone(), player.clone());

    events::wire_parallax(&document);

    let camera = Camera::new(CAMERA_DISTANCE, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_FAR);
    let mut controls = OrbitControls::from_eye(camera.eye, Vec3::ZERO, ORBIT_DAMPING);
    controls.min_distance = ORBIT_MIN_DISTANCE;
    controls.max_distance = ORBIT_MAX_DISTANCE;
    let orbit = Rc::new(RefCell::new(controls));
    events::wire_orbit_controls(canvas.clone(), orbit.clone());

    let gpu = frame::init_gpu(&canvas, &store.borrow()).await;
    let seen_revision = store.borrow().revision();

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        integrator: MotionIntegrator::new(StdRng::from_entropy()),
        store,
        waveform: WaveformSampler::new(graph.analyser.clone()),
        spectrum: SpectrumSampler::new(graph.analyser.clone()),
        clock: SessionClock::start(),
        gpu,
        camera,
        orbit,
        canvas,
        player,
        readouts: events::PlayerReadouts::find(&document),
        seen_revision,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
