use super::constants::BYTE_SAMPLE_MIDPOINT;

/// Monotonic elapsed time since session start, in seconds.
pub trait Clock {
    fn elapsed(&self) -> f32;
}

/// Produces one loudness value per call.
pub trait AmplitudeSampler {
    fn sample_amplitude(&mut self) -> f32;
}

/// Produces one "average frequency" value per call.
pub trait FrequencySampler {
    fn sample_frequency(&mut self) -> f32;
}

/// Wall clock anchored at construction.
pub struct SessionClock {
    start: instant::Instant,
}

impl SessionClock {
    pub fn start() -> Self {
        Self {
            start: instant::Instant::now(),
        }
    }
}

impl Clock for SessionClock {
    fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

/// Root-mean-square loudness of unsigned 8-bit time-domain samples.
///
/// Each sample is mapped to `(s - 128) / 128` before squaring, so a buffer of
/// 128s is silent and a full-scale square wave (0/255) lands just under 1.
/// An empty buffer counts as silence.
pub fn rms_from_time_domain(samples: &[u8]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_squares: f32 = samples
        .iter()
        .map(|&s| {
            let normalized = (s as f32 - BYTE_SAMPLE_MIDPOINT) / BYTE_SAMPLE_MIDPOINT;
            normalized * normalized
        })
        .sum();
    (sum_squares / samples.len() as f32).sqrt()
}

/// Mean magnitude over unsigned 8-bit spectrum bins (0 when empty).
pub fn average_frequency(bins: &[u8]) -> f32 {
    if bins.is_empty() {
        return 0.0;
    }
    let total: u32 = bins.iter().map(|&b| b as u32).sum();
    total as f32 / bins.len() as f32
}
