use crate::camera::OrbitControls;
use crate::constants::ORBIT_ZOOM_STEP;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Default, Clone, Copy)]
struct DragState {
    active: bool,
    pointer_id: i32,
    last_x: f32,
    last_y: f32,
}

#[derive(Clone)]
struct OrbitWiring {
    canvas: web::HtmlCanvasElement,
    orbit: Rc<RefCell<OrbitControls>>,
    drag: Rc<RefCell<DragState>>,
}

/// Drag to orbit, wheel to dolly. Motion is queued on the controls and
/// applied with inertia by the frame loop.
pub fn wire_orbit_controls(canvas: web::HtmlCanvasElement, orbit: Rc<RefCell<OrbitControls>>) {
    let w = OrbitWiring {
        canvas,
        orbit,
        drag: Rc::new(RefCell::new(DragState::default())),
    };
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

fn listen<E: FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(w: &OrbitWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "pointerdown", move |ev: web::PointerEvent| {
        let mut d = w2.drag.borrow_mut();
        d.active = true;
        d.pointer_id = ev.pointer_id();
        d.last_x = ev.client_x() as f32;
        d.last_y = ev.client_y() as f32;
        _ = w2.canvas.set_pointer_capture(ev.pointer_id());
    });
}

fn wire_pointermove(w: &OrbitWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "pointermove", move |ev: web::PointerEvent| {
        let mut d = w2.drag.borrow_mut();
        if !d.active || d.pointer_id != ev.pointer_id() {
            return;
        }
        let x = ev.client_x() as f32;
        let y = ev.client_y() as f32;
        let height = w2.canvas.get_bounding_client_rect().height() as f32;
        w2.orbit
            .borrow_mut()
            .rotate_by_pixels(x - d.last_x, y - d.last_y, height);
        d.last_x = x;
        d.last_y = y;
    });
}

fn wire_pointerup(w: &OrbitWiring) {
    for event in ["pointerup", "pointercancel"] {
        let w2 = w.clone();
        listen(&w.canvas, event, move |ev: web::PointerEvent| {
            let mut d = w2.drag.borrow_mut();
            if d.pointer_id == ev.pointer_id() {
                d.active = false;
                _ = w2.canvas.release_pointer_capture(ev.pointer_id());
            }
        });
    }
}

fn wire_wheel(w: &OrbitWiring) {
    let w2 = w.clone();
    listen(&w.canvas, "wheel", move |ev: web::WheelEvent| {
        w2.orbit
            .borrow_mut()
            .zoom_by_wheel(ev.delta_y() as f32, ORBIT_ZOOM_STEP);
        ev.prevent_default();
    });
}
