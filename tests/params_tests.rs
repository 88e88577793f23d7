// Host-side tests for the parameter store.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod params {
    include!("../src/core/params.rs");
}

use params::*;

#[test]
fn defaults_match_the_landing_page() {
    let s = ParamStore::new();
    assert_eq!(s.color(), [1.0, 2.0, 2.0]);
    assert_eq!(
        s.bloom(),
        BloomSettings {
            threshold: 0.1,
            strength: 0.2,
            radius: 0.4,
        }
    );
    assert_eq!(
        s.mesh_shape(),
        MeshShape {
            radius: 5.0,
            detail: 0,
        }
    );
    assert_eq!(s.get(Param::Sensitivity), 0.1);
    assert_eq!(s.get(Param::SoundThreshold), 2.0);
    assert_eq!(s.get(Param::SpeedY), 0.01);
    assert_eq!(s.get(Param::Damping), 1.0);
    assert_eq!(s.revision(), 0);
}

#[test]
fn names_round_trip_and_are_unique() {
    for p in Param::ALL {
        assert_eq!(Param::from_name(p.name()), Some(p));
    }
    let mut names: Vec<_> = Param::ALL.iter().map(|p| p.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), Param::ALL.len());
    assert_eq!(Param::from_name("nope"), None);
}

#[test]
fn every_group_has_params_and_defaults_fit_ranges() {
    for g in ParamGroup::ALL {
        assert!(Param::ALL.iter().any(|p| p.group() == g), "{:?} empty", g);
    }
    for p in Param::ALL {
        let r = p.range();
        let d = p.default_value();
        assert!(r.min <= d && d <= r.max, "{} default {} outside range", p.name(), d);
    }
}

#[test]
fn set_bumps_revision_and_named_access_works() {
    let mut s = ParamStore::new();
    s.set(Param::Red, 3.0).unwrap();
    assert_eq!(s.revision(), 1);
    assert_eq!(s.set_named("damping", 0.94), Ok(Param::Damping));
    assert_eq!(s.revision(), 2);
    assert_eq!(s.get_named("damping"), Ok(0.94));
    assert_eq!(s.get(Param::Red), 3.0);
}

#[test]
fn unknown_names_and_non_finite_values_are_rejected() {
    let mut s = ParamStore::new();
    assert_eq!(
        s.set_named("volume", 1.0),
        Err(ParamError::UnknownName("volume".into()))
    );
    assert!(matches!(
        s.set(Param::Size, f32::NAN),
        Err(ParamError::NonFinite { name: "size", .. })
    ));
    assert!(s.set(Param::Size, f32::INFINITY).is_err());
    assert_eq!(s.get(Param::Size), 5.0);
    assert_eq!(s.revision(), 0);
    assert!(s.get_named("volume").is_err());
}

#[test]
fn derived_views_clamp_out_of_range_writes() {
    let mut s = ParamStore::new();
    s.set(Param::Damping, 1.5).unwrap();
    s.set(Param::Sensitivity, -1.0).unwrap();
    s.set(Param::Detail, 2.6).unwrap();
    s.set(Param::Size, -3.0).unwrap();
    s.set(Param::Radius, 4.0).unwrap();
    let m = s.motion();
    assert_eq!(m.damping, 1.0);
    assert_eq!(m.sensitivity, 0.0);
    assert_eq!(s.mesh_shape(), MeshShape { radius: 0.0, detail: 3 });
    assert_eq!(s.bloom().radius, 1.0);

    s.set(Param::Detail, 1000.0).unwrap();
    assert_eq!(s.mesh_shape().detail, constants::MAX_DETAIL);
}

#[test]
fn motion_snapshot_reads_axes() {
    let mut s = ParamStore::new();
    s.set(Param::SpeedX, 0.3).unwrap();
    s.set(Param::RandomZ, 0.7).unwrap();
    let m = s.motion();
    assert_eq!(m.speed, glam::Vec3::new(0.3, 0.01, 0.0));
    assert_eq!(m.random, glam::Vec3::new(0.0, 0.0, 0.7));
}
