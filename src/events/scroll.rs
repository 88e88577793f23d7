use crate::constants::HERO_BUTTON_ID;
use crate::dom;
use crate::parallax::{
    self, Layer, Locator, BRAND_STATEMENT_SELECTOR, LAYERS, WORK_BACKGROUND_ID,
    WORK_LAYER_STYLES, WORK_SECTION_SELECTOR,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Clone the work background twice, darker and stacked above the original
fn stack_work_layers(document: &web::Document) -> Vec<web::HtmlElement> {
    let Some(base) = dom::html_element_by_id(document, WORK_BACKGROUND_ID) else {
        return Vec::new();
    };
    let mut layers = vec![base.clone()];
    for _ in 1..WORK_LAYER_STYLES.len() {
        let Ok(node) = base.clone_node_with_deep(true) else {
            break;
        };
        let Ok(el) = node.dyn_into::<web::HtmlElement>() else {
            break;
        };
        el.remove_attribute("id").ok();
        layers.push(el);
    }
    let mut anchor: web::Node = base.clone().into();
    for i in parallax::work_layer_dom_order(layers.len()).into_iter().skip(1) {
        let el = &layers[i];
        if let Some(parent) = anchor.parent_node() {
            _ = parent.insert_before(el, anchor.next_sibling().as_ref());
        }
        anchor = el.clone().into();
    }
    for (el, (background, z_index)) in layers.iter().zip(WORK_LAYER_STYLES) {
        let style = el.style();
        if let Some(bg) = background {
            _ = style.set_property("background-color", bg);
        }
        _ = style.set_property("z-index", z_index);
    }
    layers
}

fn resolve(
    document: &web::Document,
    layer: &Layer,
    work: &[web::HtmlElement],
) -> Option<web::HtmlElement> {
    match layer.locator {
        Locator::Id(id) => dom::html_element_by_id(document, id),
        Locator::Selector(sel) => document
            .query_selector(sel)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok()),
        Locator::WorkLayer(i) => work.get(i).cloned(),
    }
}

fn animate_brand_statements(document: &web::Document) {
    if let Ok(list) = document.query_selector_all(BRAND_STATEMENT_SELECTOR) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                _ = el.class_list().add_1("animate");
            }
        }
    }
}

fn wire_hero_button(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, HERO_BUTTON_ID, move || {
        if let Ok(Some(section)) = doc.query_selector(WORK_SECTION_SELECTOR) {
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    });
}

/// Parallax transforms on scroll plus the landing page's small extras.
pub fn wire_parallax(document: &web::Document) {
    let Some(window) = web::window() else {
        return;
    };
    let work = stack_work_layers(document);
    let targets: Vec<(Layer, web::HtmlElement)> = LAYERS
        .iter()
        .filter_map(|layer| resolve(document, layer, &work).map(|el| (*layer, el)))
        .collect();
    log::debug!("[parallax] {} of {} layers present", targets.len(), LAYERS.len());

    let win = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        for (layer, el) in &targets {
            dom::set_transform(el, &parallax::transform_for(layer, scroll_y));
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();

    animate_brand_statements(document);
    wire_hero_button(document);
}
