use crate::audio::{Player, SpectrumSampler, WaveformSampler};
use crate::camera::{Camera, OrbitControls};
use crate::core::{MotionIntegrator, ParamStore, SessionClock};
use crate::events::PlayerReadouts;
use crate::render::{self, SurfaceRecovery};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub integrator: MotionIntegrator,
    pub store: Rc<RefCell<ParamStore>>,
    pub waveform: WaveformSampler,
    pub spectrum: SpectrumSampler,
    pub clock: SessionClock,

    pub gpu: Option<render::GpuState<'a>>,
    pub camera: Camera,
    pub orbit: Rc<RefCell<OrbitControls>>,
    pub canvas: web::HtmlCanvasElement,

    pub player: Rc<RefCell<Player>>,
    pub readouts: PlayerReadouts,
    pub seen_revision: u64,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let (params, revision) = {
            let store = self.store.borrow();
            (store.motion(), store.revision())
        };
        let out = self
            .integrator
            .step(&params, &self.clock, &mut self.waveform, &mut self.spectrum);
        if out.triggered {
            log::trace!(
                "[motion] transient t={:.2} freq={:.3}",
                out.uniforms.time,
                out.uniforms.frequency
            );
        }

        self.orbit.borrow_mut().update();
        self.orbit.borrow().apply_to(&mut self.camera);

        if let Some(gpu) = self.gpu.as_mut() {
            if revision != self.seen_revision {
                let store = self.store.borrow();
                gpu.set_color(store.color());
                gpu.set_bloom(store.bloom());
                gpu.set_shape(store.mesh_shape());
                self.seen_revision = revision;
            }

            let (w, h) = (self.canvas.width(), self.canvas.height());
            gpu.resize_if_needed(w, h);
            self.camera.set_viewport(w, h);

            gpu.set_frame(&out);
            if let Err(e) = gpu.render(&self.camera) {
                match gpu.recover(&e) {
                    SurfaceRecovery::Reconfigure => log::debug!("[gpu] surface {:?}, reconfigured", e),
                    SurfaceRecovery::Skip => log::debug!("[gpu] frame skipped: {:?}", e),
                }
            }
        }

        self.readouts.update(&self.player.borrow());
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    store: &ParamStore,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, store.mesh_shape(), store.color(), store.bloom()).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let cb: Option<js_sys::Function> = tick
        .borrow()
        .as_ref()
        .map(|c| c.as_ref().unchecked_ref::<js_sys::Function>().clone());
    if let (Some(w), Some(cb)) = (web::window(), cb) {
        _ = w.request_animation_frame(&cb);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
