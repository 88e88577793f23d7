// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn damping_presets_are_valid() {
    assert!(PLAYING_DAMPING > 0.0 && PLAYING_DAMPING < 1.0);
    assert_eq!(PAUSED_DAMPING, 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn analyser_window_is_a_power_of_two() {
    assert!(ANALYSER_FFT_SIZE.is_power_of_two());
    // 64 spectrum bins, as the landing page always used
    assert_eq!(ANALYSER_FFT_SIZE, 128);
    assert!((32..=32768).contains(&ANALYSER_FFT_SIZE));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_frustum_contains_the_mesh() {
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
    assert!(CAMERA_DISTANCE > CAMERA_NEAR && CAMERA_DISTANCE < CAMERA_FAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(ORBIT_MIN_DISTANCE <= CAMERA_DISTANCE && CAMERA_DISTANCE <= ORBIT_MAX_DISTANCE);
    assert!(ORBIT_ZOOM_STEP > 0.0 && ORBIT_ZOOM_STEP < 1.0);
    assert!(ORBIT_DAMPING > 0.0 && ORBIT_DAMPING <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_constants_are_positive() {
    assert!(DRIFT_SCALE > 0.0);
    assert!(FREQUENCY_GAIN > 0.0);
    assert!(DISPLACEMENT_DIVISOR > 0.0);
    assert_eq!(BYTE_SAMPLE_MIDPOINT, 128.0);
    assert!(MAX_DETAIL > 0);
}

#[test]
fn volume_is_audible_and_not_boosted() {
    assert!(PLAYBACK_VOLUME > 0.0 && PLAYBACK_VOLUME <= 1.0);
    assert!(TRACK_URL.ends_with(".mp3"));
}
