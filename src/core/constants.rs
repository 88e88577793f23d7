// Integrator tuning shared by the frame loop and host tests.

/// Per-tick rotation contributed by a unit `speed_*` parameter (radians).
pub const DRIFT_SCALE: f32 = 0.2;

/// Gain applied to `average_frequency * amplitude * sensitivity` when the
/// frequency uniform is refreshed.
pub const FREQUENCY_GAIN: f32 = 10.0;

// Unsigned 8-bit PCM midpoint; a buffer full of this value is silence.
pub const BYTE_SAMPLE_MIDPOINT: f32 = 128.0;

// Icosahedron subdivision limit exposed by the panel
pub const MAX_DETAIL: u32 = 40;

// Shader displacement: `frequency / DISPLACEMENT_DIVISOR` scales the noise offset
pub const DISPLACEMENT_DIVISOR: f32 = 30.0;
