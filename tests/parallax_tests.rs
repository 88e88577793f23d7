// Host-side tests for scroll parallax transforms.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod parallax {
    include!("../src/parallax.rs");
}

use parallax::*;

fn layer(locator: Locator) -> Layer {
    *LAYERS
        .iter()
        .find(|l| l.locator == locator)
        .expect("layer present")
}

#[test]
fn offset_starts_at_one_and_grows_at_half_speed() {
    assert_eq!(scroll_offset(0.0), 1.0);
    assert_eq!(scroll_offset(100.0), 51.0);
}

#[test]
fn vertical_layers_translate_up() {
    assert_eq!(transform_for(&layer(Locator::Id("name")), 0.0), "translateY(-2px)");
    assert_eq!(transform_for(&layer(Locator::Id("name")), 198.0), "translateY(-200px)");
    assert_eq!(transform_for(&layer(Locator::WorkLayer(1)), 198.0), "translateY(-37px)");
}

#[test]
fn button_moves_diagonally() {
    assert_eq!(
        transform_for(&layer(Locator::Id("button")), 198.0),
        "translateX(-50px) translateY(-50px)"
    );
}

#[test]
fn hero_text_scales() {
    assert_eq!(
        transform_for(&layer(Locator::Id("the-reason")), 198.0),
        "translateY(-150px) scale(1.1)"
    );
}

#[test]
fn top_work_layer_carries_bias() {
    assert_eq!(transform_for(&layer(Locator::WorkLayer(2)), 198.0), "translateY(-19px)");
}

#[test]
fn work_layers_stack_upwards() {
    let z: Vec<i32> = WORK_LAYER_STYLES
        .iter()
        .map(|(_, z)| z.parse().unwrap())
        .collect();
    assert!(z.windows(2).all(|w| w[0] < w[1]));
    assert!(WORK_LAYER_STYLES[0].0.is_none());
    let work_layers = LAYERS
        .iter()
        .filter(|l| matches!(l.locator, Locator::WorkLayer(_)))
        .count();
    assert_eq!(work_layers, WORK_LAYER_STYLES.len());
}

#[test]
fn newest_work_clone_sits_next_to_the_original() {
    assert_eq!(work_layer_dom_order(3), vec![0, 2, 1]);
    assert_eq!(work_layer_dom_order(WORK_LAYER_STYLES.len())[0], 0);
    assert_eq!(work_layer_dom_order(1), vec![0]);
    assert!(work_layer_dom_order(0).is_empty());
}
