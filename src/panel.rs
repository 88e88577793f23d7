use crate::core::{Param, ParamGroup, ParamStore};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Control {
    param: Param,
    input: web::HtmlInputElement,
    readout: web::Element,
}

/// Slider panel bound to the parameter store.
///
/// Sliders only write the store; the frame loop notices the new revision on
/// its next tick and pushes colours, bloom and geometry to the renderer.
pub struct Panel {
    controls: Vec<Control>,
}

fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

fn format_value(param: Param, value: f32) -> String {
    match param.range().step {
        Some(step) if step >= 1.0 => format!("{:.0}", value),
        _ => format!("{:.2}", value),
    }
}

fn folder(document: &web::Document, title: &str, open: bool) -> anyhow::Result<web::HtmlDetailsElement> {
    let details: web::HtmlDetailsElement = document
        .create_element("details")
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    details.set_open(open);
    let summary = document.create_element("summary").map_err(js_err)?;
    summary.set_text_content(Some(title));
    details.append_child(&summary).map_err(js_err)?;
    Ok(details)
}

fn slider(
    document: &web::Document,
    param: Param,
    value: f32,
) -> anyhow::Result<(web::Element, web::HtmlInputElement, web::Element)> {
    let row = document.create_element("label").map_err(js_err)?;
    row.set_class_name("panel-row");
    let name = document.create_element("span").map_err(js_err)?;
    name.set_text_content(Some(param.label()));

    let input: web::HtmlInputElement = document
        .create_element("input")
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    let range = param.range();
    input.set_type("range");
    input.set_min(&range.min.to_string());
    input.set_max(&range.max.to_string());
    match range.step {
        Some(step) => input.set_step(&step.to_string()),
        None => input.set_step("any"),
    }
    input.set_value(&value.to_string());
    _ = input.set_attribute("data-param", param.name());

    let readout = document.create_element("output").map_err(js_err)?;
    readout.set_text_content(Some(&format_value(param, value)));

    row.append_child(&name).map_err(js_err)?;
    row.append_child(&input).map_err(js_err)?;
    row.append_child(&readout).map_err(js_err)?;
    Ok((row, input, readout))
}

impl Panel {
    /// Build the panel inside `#container_id`, closed, one folder per group.
    pub fn mount(
        document: &web::Document,
        container_id: &str,
        store: Rc<RefCell<ParamStore>>,
    ) -> anyhow::Result<Rc<Panel>> {
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", container_id))?;
        let root = folder(document, "Controls", false)?;
        root.set_class_name("panel");

        let mut controls = Vec::with_capacity(Param::ALL.len());
        for group in ParamGroup::ALL {
            let section = folder(document, group.title(), true)?;
            for param in Param::ALL.iter().copied().filter(|p| p.group() == group) {
                let value = store.borrow().get(param);
                let (row, input, readout) = slider(document, param, value)?;
                section.append_child(&row).map_err(js_err)?;
                wire_input(&input, &readout, param, store.clone());
                controls.push(Control {
                    param,
                    input,
                    readout,
                });
            }
            root.append_child(&section).map_err(js_err)?;
        }
        container.append_child(&root).map_err(js_err)?;
        log::info!("[panel] mounted {} controls", controls.len());
        Ok(Rc::new(Panel { controls }))
    }

    /// Move a slider to reflect a write that did not come from the panel.
    pub fn reflect(&self, param: Param, value: f32) {
        if let Some(c) = self.controls.iter().find(|c| c.param == param) {
            c.input.set_value(&value.to_string());
            c.readout
                .set_text_content(Some(&format_value(param, value)));
        }
    }
}

fn wire_input(
    input: &web::HtmlInputElement,
    readout: &web::Element,
    param: Param,
    store: Rc<RefCell<ParamStore>>,
) {
    let source = input.clone();
    let readout = readout.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let raw = source.value();
        let Ok(value) = raw.parse::<f32>() else {
            log::warn!("[panel] {} ignored unparsable value {:?}", param.name(), raw);
            return;
        };
        match store.borrow_mut().set(param, value) {
            Ok(()) => readout.set_text_content(Some(&format_value(param, value))),
            Err(e) => log::warn!("[panel] {}", e),
        }
    }) as Box<dyn FnMut(_)>);
    _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}
