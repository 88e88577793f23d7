// Host-side tests for track position bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod playback {
    include!("../src/playback.rs");
}

use playback::*;

#[test]
fn play_pause_resume_tracks_position() {
    let mut c = PlaybackClock::new(100.0);
    assert!(!c.is_playing());
    assert_eq!(c.play(10.0), 0.0);
    assert!(c.is_playing());
    assert_eq!(c.position(15.0), 5.0);

    c.pause(15.0);
    assert!(!c.is_playing());
    assert_eq!(c.position(99.0), 5.0);

    assert_eq!(c.play(20.0), 5.0);
    assert_eq!(c.position(22.0), 7.0);
}

#[test]
fn pause_when_stopped_is_a_no_op() {
    let mut c = PlaybackClock::new(30.0);
    c.pause(12.0);
    assert_eq!(c.position(12.0), 0.0);
}

#[test]
fn seek_clamps_and_follows_playback() {
    let mut c = PlaybackClock::new(100.0);
    assert_eq!(c.seek(40.0, 0.0), 40.0);
    assert_eq!(c.position(3.0), 40.0);
    c.play(5.0);
    assert_eq!(c.seek(50.0, 6.0), 50.0);
    assert_eq!(c.position(7.0), 51.0);
    assert_eq!(c.seek(500.0, 7.0), 100.0);
    assert_eq!(c.seek(-5.0, 7.0), 0.0);
}

#[test]
fn position_never_passes_duration() {
    let mut c = PlaybackClock::new(10.0);
    c.play(0.0);
    assert_eq!(c.position(1000.0), 10.0);
}

#[test]
fn finish_rewinds_and_play_after_end_restarts() {
    let mut c = PlaybackClock::new(10.0);
    c.play(0.0);
    c.finish();
    assert!(!c.is_playing());
    assert_eq!(c.position(50.0), 0.0);

    c.seek(10.0, 0.0);
    assert_eq!(c.play(1.0), 0.0);
}

#[test]
fn negative_duration_is_treated_as_empty() {
    let c = PlaybackClock::new(-1.0);
    assert_eq!(c.duration(), 0.0);
}

#[test]
fn format_time_is_minutes_and_padded_seconds() {
    assert_eq!(format_time(0.0), "0:00");
    assert_eq!(format_time(65.0), "1:05");
    assert_eq!(format_time(59.9), "0:59");
    assert_eq!(format_time(3600.0), "60:00");
    assert_eq!(format_time(-3.0), "0:00");
    assert_eq!(format_time(f64::NAN), "0:00");
}

#[test]
fn held_slider_is_not_moved_by_playback() {
    let mut grab = SliderGrab::default();
    assert_eq!(grab.follow(12.5), Some(12.5));
    grab.grab();
    assert_eq!(grab.follow(13.0), None);
    assert_eq!(grab.follow(14.0), None);
    grab.release();
    assert_eq!(grab.follow(14.0), Some(14.0));
}
