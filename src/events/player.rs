use crate::audio::Player;
use crate::constants::{
    CLASS_PAUSE, CLASS_PLAY, CURRENT_TIME_ID, DURATION_ID, DURATION_SLIDER_ID, PAUSED_DAMPING,
    PLAYING_DAMPING, PLAY_BUTTON_ID,
};
use crate::core::{Param, ParamStore};
use crate::panel::Panel;
use crate::playback::{format_time, SliderGrab};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PlayerWiring {
    pub document: web::Document,
    pub player: Rc<RefCell<Player>>,
    pub store: Rc<RefCell<ParamStore>>,
    pub panel: Option<Rc<Panel>>,
}

fn set_button_playing(document: &web::Document, playing: bool) {
    if let Some(el) = document.get_element_by_id(PLAY_BUTTON_ID) {
        let cl = el.class_list();
        let (from, to) = if playing {
            (CLASS_PLAY, CLASS_PAUSE)
        } else {
            (CLASS_PAUSE, CLASS_PLAY)
        };
        _ = cl.remove_1(from);
        _ = cl.add_1(to);
    }
}

fn write_damping(w: &PlayerWiring, value: f32) {
    if let Err(e) = w.store.borrow_mut().set(Param::Damping, value) {
        log::warn!("[player] {}", e);
        return;
    }
    if let Some(panel) = &w.panel {
        panel.reflect(Param::Damping, value);
    }
}

pub fn wire_player(w: PlayerWiring) {
    wire_ended(&w);
    wire_toggle(&w);
    wire_seek(&w);
}

fn wire_ended(w: &PlayerWiring) {
    let player = w.player.clone();
    let document = w.document.clone();
    let closure = Closure::wrap(Box::new(move || {
        player.borrow_mut().finish();
        set_button_playing(&document, false);
        log::info!("[player] track ended");
    }) as Box<dyn FnMut()>);
    w.player
        .borrow_mut()
        .set_on_ended(closure.as_ref().unchecked_ref::<js_sys::Function>().clone());
    closure.forget();
}

fn wire_toggle(w: &PlayerWiring) {
    let wiring = w.clone();
    crate::dom::add_click_listener(&w.document, PLAY_BUTTON_ID, move || {
        let mut player = wiring.player.borrow_mut();
        if !player.is_ready() {
            log::info!("[player] track still loading");
            return;
        }
        if player.is_playing() {
            player.pause();
            drop(player);
            set_button_playing(&wiring.document, false);
            write_damping(&wiring, PAUSED_DAMPING);
        } else {
            match player.play() {
                Ok(()) => {
                    drop(player);
                    set_button_playing(&wiring.document, true);
                    write_damping(&wiring, PLAYING_DAMPING);
                }
                Err(e) => log::error!("[player] play failed: {:?}", e),
            }
        }
    });
}

fn wire_seek(w: &PlayerWiring) {
    let Some(slider) = w
        .document
        .get_element_by_id(DURATION_SLIDER_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        return;
    };
    let player = w.player.clone();
    let source = slider.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        if let Ok(pos) = source.value().parse::<f64>() {
            if let Err(e) = player.borrow_mut().seek(pos) {
                log::warn!("[player] seek failed: {:?}", e);
            }
        }
    }) as Box<dyn FnMut(_)>);
    _ = slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Position slider and `m:ss` labels, refreshed once per frame.
pub struct PlayerReadouts {
    slider: Option<web::HtmlInputElement>,
    grab: Rc<Cell<SliderGrab>>,
    current: Option<web::Element>,
    duration: Option<web::Element>,
    last_second: Option<u64>,
}

fn on_slider(
    slider: &web::HtmlInputElement,
    event: &str,
    grab: &Rc<Cell<SliderGrab>>,
    held: bool,
) {
    let grab = grab.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let mut g = grab.get();
        if held {
            g.grab();
        } else {
            g.release();
        }
        grab.set(g);
    }) as Box<dyn FnMut(_)>);
    _ = slider.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

impl PlayerReadouts {
    pub fn find(document: &web::Document) -> Self {
        let slider = document
            .get_element_by_id(DURATION_SLIDER_ID)
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok());
        let grab = Rc::new(Cell::new(SliderGrab::default()));
        if let Some(s) = &slider {
            on_slider(s, "pointerdown", &grab, true);
            for event in ["pointerup", "pointercancel"] {
                on_slider(s, event, &grab, false);
            }
        }
        Self {
            slider,
            grab,
            current: document.get_element_by_id(CURRENT_TIME_ID),
            duration: document.get_element_by_id(DURATION_ID),
            last_second: None,
        }
    }

    pub fn update(&mut self, player: &Player) {
        if !player.is_ready() {
            return;
        }
        let position = player.position();
        let duration = player.duration();
        if let Some(s) = &self.slider {
            s.set_max(&duration.to_string());
            if let Some(value) = self.grab.get().follow(position) {
                s.set_value(&value.to_string());
            }
        }
        // Labels only change once per second
        let second = position.floor() as u64;
        if self.last_second == Some(second) {
            return;
        }
        self.last_second = Some(second);
        if let Some(el) = &self.current {
            el.set_text_content(Some(&format_time(position)));
        }
        if let Some(el) = &self.duration {
            el.set_text_content(Some(&format_time(duration)));
        }
    }
}
