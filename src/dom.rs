use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn set_transform(el: &web::HtmlElement, transform: &str) {
    _ = el.style().set_property("transform", transform);
}

/// Size the canvas backing store to its container's CSS size times the
/// device pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, container: &web::Element) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = container.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Reuse a canvas already in the container, or create one.
pub fn ensure_canvas(
    document: &web::Document,
    container: &web::Element,
    id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    if let Some(existing) = document.get_element_by_id(id) {
        return existing
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", id, e));
    }
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_id(id);
    _ = canvas
        .style()
        .set_property("width", "100%");
    _ = canvas.style().set_property("height", "100%");
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}
