use super::analysis::{AmplitudeSampler, Clock, FrequencySampler};
use super::constants::{DRIFT_SCALE, FREQUENCY_GAIN};
use super::params::MotionParams;
use glam::Vec3;
use rand::prelude::*;

/// Shader inputs refreshed by the integrator.
///
/// Both values only move when a transient fires; between transients the
/// renderer keeps drawing with the last triggered `time` and `frequency`.
/// That stepwise shimmer is how the visualizer has always looked, so it is
/// kept rather than smoothed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShaderUniforms {
    pub time: f32,
    pub frequency: f32,
}

/// Everything the renderer needs from one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    pub rotation: Vec3,
    pub uniforms: ShaderUniforms,
    pub triggered: bool,
}

/// True when `current` rises far enough above the last registered transient.
///
/// A zero threshold never fires: the ratio would be infinite (or NaN when
/// `previous` is also zero), and neither compares greater.
#[inline]
pub fn transient_triggered(current: f32, previous: f32, sound_threshold: f32) -> bool {
    if sound_threshold == 0.0 || !sound_threshold.is_finite() {
        return false;
    }
    current > previous / sound_threshold
}

/// Random kick in `[-1, 1) * amplitude * scale` per axis.
pub fn random_impulse<R: Rng>(rng: &mut R, amplitude: f32, scale: Vec3) -> Vec3 {
    let mut axis = |s: f32| rng.gen_range(-1.0_f32..1.0) * amplitude * s;
    Vec3::new(axis(scale.x), axis(scale.y), axis(scale.z))
}

/// Audio-driven rotation state for the icosahedron.
///
/// One instance lives for the whole session and is stepped once per frame.
pub struct MotionIntegrator {
    velocity: Vec3,
    previous_amplitude: f32,
    rotation: Vec3,
    uniforms: ShaderUniforms,
    rng: StdRng,
}

impl MotionIntegrator {
    pub fn new(rng: StdRng) -> Self {
        Self {
            velocity: Vec3::ZERO,
            previous_amplitude: 0.0,
            rotation: Vec3::ZERO,
            uniforms: ShaderUniforms::default(),
            rng,
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn previous_amplitude(&self) -> f32 {
        self.previous_amplitude
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    pub fn uniforms(&self) -> ShaderUniforms {
        self.uniforms
    }

    /// Adds to the angular velocity; decay applies from the next step on.
    pub fn apply_impulse(&mut self, impulse: Vec3) {
        self.velocity += impulse;
    }

    /// Advance one frame.
    ///
    /// Reads the amplitude once, samples frequency and the clock only when a
    /// transient fires, then applies damping and drift unconditionally.
    pub fn step<C, A, F>(
        &mut self,
        params: &MotionParams,
        clock: &C,
        amplitude: &mut A,
        frequency: &mut F,
    ) -> FrameOutput
    where
        C: Clock + ?Sized,
        A: AmplitudeSampler + ?Sized,
        F: FrequencySampler + ?Sized,
    {
        let current = amplitude.sample_amplitude();
        let triggered =
            transient_triggered(current, self.previous_amplitude, params.sound_threshold);
        if triggered {
            let impulse = random_impulse(&mut self.rng, current, params.random);
            self.apply_impulse(impulse);
            self.previous_amplitude = current;
            self.uniforms.time = clock.elapsed();
            self.uniforms.frequency =
                frequency.sample_frequency() * current * params.sensitivity * FREQUENCY_GAIN;
        }

        self.velocity *= params.damping;
        self.rotation += self.velocity + params.speed * DRIFT_SCALE;

        FrameOutput {
            rotation: self.rotation,
            uniforms: self.uniforms,
            triggered,
        }
    }
}
