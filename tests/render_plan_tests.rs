// Host-side tests for the per-frame pass order and offscreen target sizing.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod plan {
    include!("../src/render/plan.rs");
}

use plan::*;

#[test]
fn scene_renders_first_and_bloom_lands_last() {
    let passes = frame_passes();
    assert_eq!(passes.len(), 6);
    assert_eq!(passes[0].kind, PassKind::Mesh);
    assert_eq!(passes[0].target, PassTarget::SceneHdr);
    let last = passes.last().unwrap();
    assert_eq!(last.kind, PassKind::BloomComposite);
    assert_eq!(last.target, PassTarget::Surface);
    assert_eq!(last.load, PassLoad::Load);
}

#[test]
fn surface_is_cleared_exactly_once_before_bloom() {
    let passes = frame_passes();
    let surface: Vec<_> = passes
        .iter()
        .enumerate()
        .filter(|(_, p)| p.target == PassTarget::Surface)
        .collect();
    let clears: Vec<_> = surface
        .iter()
        .filter(|(_, p)| p.load == PassLoad::Clear)
        .collect();
    assert_eq!(clears.len(), 1);
    let bloom = surface
        .iter()
        .find(|(_, p)| p.kind == PassKind::BloomComposite)
        .unwrap();
    assert!(clears[0].0 < bloom.0);
}

#[test]
fn blur_chain_ping_pongs() {
    let passes = frame_passes();
    let chain: Vec<_> = passes
        .iter()
        .filter(|p| {
            matches!(
                p.kind,
                PassKind::Bright | PassKind::BlurHorizontal | PassKind::BlurVertical
            )
        })
        .map(|p| p.target)
        .collect();
    assert_eq!(
        chain,
        vec![PassTarget::BloomA, PassTarget::BloomB, PassTarget::BloomA]
    );
}

#[test]
fn labels_are_unique() {
    let passes = frame_passes();
    let mut labels: Vec<_> = passes.iter().map(|p| p.label).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), passes.len());
}

#[test]
fn bloom_targets_are_half_resolution() {
    let s = TargetSizes::for_surface(1280, 720).unwrap();
    assert_eq!(s.scene, (1280, 720));
    assert_eq!(s.bloom, (640, 360));
    assert_eq!(s.of(PassTarget::Surface), (1280, 720));
    assert_eq!(s.of(PassTarget::BloomB), (640, 360));
}

#[test]
fn tiny_and_empty_viewports() {
    let s = TargetSizes::for_surface(1, 1).unwrap();
    assert_eq!(s.bloom, (1, 1));
    assert_eq!(TargetSizes::for_surface(0, 720), None);
    assert_eq!(TargetSizes::for_surface(1280, 0), None);
}

#[test]
fn resize_changes_every_target() {
    let before = TargetSizes::for_surface(800, 600).unwrap();
    let after = TargetSizes::for_surface(1024, 768).unwrap();
    assert_ne!(before, after);
    for t in [
        PassTarget::SceneHdr,
        PassTarget::BloomA,
        PassTarget::BloomB,
        PassTarget::Surface,
    ] {
        assert_ne!(before.of(t), after.of(t));
    }
    assert_eq!(after.of(PassTarget::BloomA), (512, 384));
}

#[test]
fn blur_sources_share_bloom_resolution() {
    let s = TargetSizes::for_surface(1919, 1081).unwrap();
    assert_eq!(s.of(PassTarget::SceneHdr), (1919, 1081));
    assert_eq!(s.of(PassTarget::BloomA), (959, 540));
    assert_eq!(s.of(PassTarget::BloomA), s.of(PassTarget::BloomB));
}
