/// Track position bookkeeping for a buffer source that cannot be paused.
///
/// WebAudio buffer sources are one-shot, so pausing means stopping the node
/// and remembering how far in we were; resuming starts a fresh node at that
/// offset. All times are in seconds on the audio context clock.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlaybackClock {
    duration: f64,
    play_start_time: f64,
    pause_offset: f64,
    playing: bool,
}

impl PlaybackClock {
    pub fn new(duration: f64) -> Self {
        Self {
            duration: duration.max(0.0),
            ..Self::default()
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Mark playback as started at `now`; returns the offset the source
    /// node should start from.
    pub fn play(&mut self, now: f64) -> f64 {
        if self.pause_offset >= self.duration {
            self.pause_offset = 0.0;
        }
        self.play_start_time = now - self.pause_offset;
        self.playing = true;
        self.pause_offset
    }

    pub fn pause(&mut self, now: f64) {
        if self.playing {
            self.pause_offset = self.position(now);
            self.playing = false;
        }
    }

    /// Natural end of the track: stop and rewind.
    pub fn finish(&mut self) {
        self.playing = false;
        self.pause_offset = 0.0;
    }

    /// Jump to `position`; while playing, the caller restarts the source from
    /// the returned offset.
    pub fn seek(&mut self, position: f64, now: f64) -> f64 {
        let target = position.clamp(0.0, self.duration);
        self.pause_offset = target;
        if self.playing {
            self.play_start_time = now - target;
        }
        target
    }

    pub fn position(&self, now: f64) -> f64 {
        let raw = if self.playing {
            now - self.play_start_time
        } else {
            self.pause_offset
        };
        raw.clamp(0.0, self.duration)
    }
}

/// `m:ss` rendering used by the time readouts.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() {
        seconds.max(0.0).floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// Tracks whether the user is holding the position slider.
///
/// While held, playback must not move the thumb out from under the pointer;
/// the seek handler still applies every input the user makes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SliderGrab {
    held: bool,
}

impl SliderGrab {
    pub fn grab(&mut self) {
        self.held = true;
    }

    pub fn release(&mut self) {
        self.held = false;
    }

    /// Value to write into the slider for `position`, or `None` while held.
    pub fn follow(&self, position: f64) -> Option<f64> {
        (!self.held).then_some(position)
    }
}
