use crate::constants::{ANALYSER_FFT_SIZE, PLAYBACK_VOLUME};
use crate::core::{average_frequency, rms_from_time_domain, AmplitudeSampler, FrequencySampler};
use crate::playback::PlaybackClock;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

pub struct AudioGraph {
    pub ctx: web::AudioContext,
    pub output: web::GainNode,
    pub analyser: Option<web::AnalyserNode>,
}

fn create_gain(audio_ctx: &web::AudioContext, value: f32, label: &str) -> anyhow::Result<web::GainNode> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("[audio] {} GainNode error: {:?}", label, e);
            Err(js_err(e))
        }
    }
}

// Analyser taps the output gain so it sees exactly what is heard
fn create_analyser(audio_ctx: &web::AudioContext, source: &web::GainNode) -> Option<web::AnalyserNode> {
    match web::AnalyserNode::new(audio_ctx) {
        Ok(a) => {
            a.set_fft_size(ANALYSER_FFT_SIZE);
            _ = source.connect_with_audio_node(&a);
            Some(a)
        }
        Err(e) => {
            log::warn!("[audio] AnalyserNode unavailable, visuals stay idle: {:?}", e);
            None
        }
    }
}

/// Output gain → destination, with an analyser hanging off the gain.
pub fn build_graph() -> anyhow::Result<AudioGraph> {
    let ctx = web::AudioContext::new().map_err(js_err)?;
    let output = create_gain(&ctx, PLAYBACK_VOLUME, "Output")?;
    _ = output.connect_with_audio_node(&ctx.destination());
    let analyser = create_analyser(&ctx, &output);
    Ok(AudioGraph {
        ctx,
        output,
        analyser,
    })
}

/// Fetch and decode a track into an `AudioBuffer`.
pub async fn load_track(ctx: &web::AudioContext, url: &str) -> anyhow::Result<web::AudioBuffer> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    if !resp.ok() {
        anyhow::bail!("fetch {} failed: HTTP {}", url, resp.status());
    }
    let bytes: js_sys::ArrayBuffer = JsFuture::from(resp.array_buffer().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    let decoded = JsFuture::from(ctx.decode_audio_data(&bytes).map_err(js_err)?)
        .await
        .map_err(js_err)?;
    decoded.dyn_into::<web::AudioBuffer>().map_err(js_err)
}

/// Reads the analyser's byte waveform and reduces it to an RMS amplitude.
///
/// With no analyser (creation failed) this reports silence; an analyser with
/// nothing playing yields a flat 128 waveform, which is also silence.
pub struct WaveformSampler {
    analyser: Option<web::AnalyserNode>,
    waveform: Vec<u8>,
}

impl WaveformSampler {
    pub fn new(analyser: Option<web::AnalyserNode>) -> Self {
        let len = analyser.as_ref().map(|a| a.fft_size() as usize).unwrap_or(0);
        Self {
            analyser,
            waveform: vec![0; len],
        }
    }
}

impl AmplitudeSampler for WaveformSampler {
    fn sample_amplitude(&mut self) -> f32 {
        let Some(a) = &self.analyser else {
            return 0.0;
        };
        a.get_byte_time_domain_data(&mut self.waveform);
        rms_from_time_domain(&self.waveform)
    }
}

/// Reads the analyser's byte spectrum and averages its bins.
pub struct SpectrumSampler {
    analyser: Option<web::AnalyserNode>,
    spectrum: Vec<u8>,
}

impl SpectrumSampler {
    pub fn new(analyser: Option<web::AnalyserNode>) -> Self {
        let bins = analyser
            .as_ref()
            .map(|a| a.frequency_bin_count() as usize)
            .unwrap_or(0);
        Self {
            analyser,
            spectrum: vec![0; bins],
        }
    }
}

impl FrequencySampler for SpectrumSampler {
    fn sample_frequency(&mut self) -> f32 {
        let Some(a) = &self.analyser else {
            return 0.0;
        };
        a.get_byte_frequency_data(&mut self.spectrum);
        average_frequency(&self.spectrum)
    }
}

/// Plays a decoded track through the output gain with pause/resume/seek.
pub struct Player {
    ctx: web::AudioContext,
    output: web::GainNode,
    buffer: Option<web::AudioBuffer>,
    source: Option<web::AudioBufferSourceNode>,
    clock: PlaybackClock,
    on_ended: Option<js_sys::Function>,
}

impl Player {
    pub fn new(ctx: web::AudioContext, output: web::GainNode) -> Self {
        Self {
            ctx,
            output,
            buffer: None,
            source: None,
            clock: PlaybackClock::default(),
            on_ended: None,
        }
    }

    pub fn set_buffer(&mut self, buffer: web::AudioBuffer) {
        self.clock = PlaybackClock::new(buffer.duration());
        self.buffer = Some(buffer);
    }

    /// Called when the track runs out on its own (not on pause or seek).
    pub fn set_on_ended(&mut self, f: js_sys::Function) {
        self.on_ended = Some(f);
    }

    pub fn is_ready(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn is_playing(&self) -> bool {
        self.clock.is_playing()
    }

    pub fn duration(&self) -> f64 {
        self.clock.duration()
    }

    pub fn position(&self) -> f64 {
        self.clock.position(self.ctx.current_time())
    }

    fn start_source(&mut self, offset: f64) -> anyhow::Result<()> {
        let buffer = self
            .buffer
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("track not loaded"))?;
        let src = self.ctx.create_buffer_source().map_err(js_err)?;
        src.set_buffer(Some(buffer));
        src.connect_with_audio_node(&self.output).map_err(js_err)?;
        src.set_onended(self.on_ended.as_ref());
        src.start_with_when_and_grain_offset(0.0, offset)
            .map_err(js_err)?;
        self.source = Some(src);
        Ok(())
    }

    fn stop_source(&mut self) {
        if let Some(src) = self.source.take() {
            // Detach first: stopping fires `ended`, which means "finished" only
            // when the track ran out by itself
            src.set_onended(None);
            _ = src.stop();
            _ = src.disconnect();
        }
    }

    pub fn play(&mut self) -> anyhow::Result<()> {
        if !self.is_ready() || self.is_playing() {
            return Ok(());
        }
        _ = self.ctx.resume();
        let offset = self.clock.play(self.ctx.current_time());
        if let Err(e) = self.start_source(offset) {
            self.clock.pause(self.ctx.current_time());
            return Err(e);
        }
        log::info!("[player] play from {:.1}s", offset);
        Ok(())
    }

    pub fn pause(&mut self) {
        self.stop_source();
        self.clock.pause(self.ctx.current_time());
        log::info!("[player] paused at {:.1}s", self.position());
    }

    pub fn finish(&mut self) {
        self.source = None;
        self.clock.finish();
    }

    pub fn seek(&mut self, position: f64) -> anyhow::Result<()> {
        let was_playing = self.is_playing();
        if was_playing {
            self.stop_source();
        }
        let offset = self.clock.seek(position, self.ctx.current_time());
        if was_playing {
            self.start_source(offset)?;
        }
        Ok(())
    }
}
