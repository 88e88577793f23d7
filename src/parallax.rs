// Scroll-driven offsets for the landing page layers.

/// How a layer is located in the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Locator {
    Id(&'static str),
    Selector(&'static str),
    /// Nth clone of the work background (0 = the original element).
    WorkLayer(usize),
}

/// Per-layer multipliers applied to the scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layer {
    pub locator: Locator,
    pub x: f32,
    pub y: f32,
    pub y_bias: f32,
    pub scale: Option<f32>,
}

impl Layer {
    const fn vertical(locator: Locator, y: f32) -> Self {
        Self {
            locator,
            x: 0.0,
            y,
            y_bias: 0.0,
            scale: None,
        }
    }
}

pub const WORK_BACKGROUND_ID: &str = "work-bg";
pub const WORK_SECTION_SELECTOR: &str = ".work";
pub const BRAND_STATEMENT_SELECTOR: &str = ".brand-statement";

/// Background colours and stacking order for the original work background
/// and its two clones.
pub const WORK_LAYER_STYLES: [(Option<&str>, &str); 3] = [
    (None, "3"),
    (Some("rgba(22, 22, 22, 1)"), "4"),
    (Some("rgba(0, 0, 0, 1)"), "5"),
];

/// Document order of the work background layers, by layer index.
///
/// Every clone goes in directly after the original, so the newest clone sits
/// closest to it: `[0, n-1, ..., 1]`. Stacking on screen comes from z-index.
pub fn work_layer_dom_order(count: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(count);
    if count > 0 {
        order.push(0);
        order.extend((1..count).rev());
    }
    order
}

pub const LAYERS: [Layer; 8] = [
    Layer::vertical(Locator::Id("name"), 2.0),
    Layer::vertical(Locator::Id("underline"), 2.0),
    Layer {
        locator: Locator::Id("button"),
        x: 0.5,
        y: 0.5,
        y_bias: 0.0,
        scale: None,
    },
    Layer::vertical(Locator::Selector(".brand-statement-container"), 1.2),
    Layer {
        locator: Locator::Id("the-reason"),
        x: 0.0,
        y: 1.5,
        y_bias: 0.0,
        scale: Some(1.1),
    },
    Layer::vertical(Locator::WorkLayer(0), 0.6),
    Layer::vertical(Locator::WorkLayer(1), 0.37),
    Layer {
        locator: Locator::WorkLayer(2),
        x: 0.0,
        y: 0.2,
        y_bias: 1.0,
        scale: None,
    },
];

/// Offset grows at half the scroll speed and starts at one pixel.
#[inline]
pub fn scroll_offset(scroll_y: f64) -> f32 {
    1.0 + scroll_y as f32 * 0.5
}

/// CSS `transform` value for `layer` at the given scroll position.
pub fn transform_for(layer: &Layer, scroll_y: f64) -> String {
    let n = scroll_offset(scroll_y);
    let mut parts: Vec<String> = Vec::with_capacity(3);
    if layer.x != 0.0 {
        parts.push(format!("translateX({}px)", -n * layer.x));
    }
    parts.push(format!("translateY({}px)", -n * layer.y + layer.y_bias));
    if let Some(s) = layer.scale {
        parts.push(format!("scale({})", s));
    }
    parts.join(" ")
}
