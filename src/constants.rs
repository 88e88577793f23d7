/// Page wiring and playback tuning for the web frontend.
///
/// Element ids match the landing page markup; numeric values keep magic
/// numbers out of the wiring code.
// DOM hooks
pub const CONTAINER_ID: &str = "visualizer-container";
pub const CANVAS_ID: &str = "visualizer-canvas";
pub const PANEL_CONTAINER_ID: &str = "gui-container";
pub const PLAY_BUTTON_ID: &str = "audioButton";
pub const DURATION_SLIDER_ID: &str = "durationSlider";
pub const CURRENT_TIME_ID: &str = "currentTime";
pub const DURATION_ID: &str = "duration";
pub const HERO_BUTTON_ID: &str = "button";

// Play button state classes
pub const CLASS_PLAY: &str = "play";
pub const CLASS_PAUSE: &str = "pause";

// Audio
pub const TRACK_URL: &str = "assets/audio/the reason.mp3";
pub const PLAYBACK_VOLUME: f32 = 0.5;
pub const ANALYSER_FFT_SIZE: u32 = 128; // same window as the page's AudioAnalyser(sound, 128)

// Damping written to the parameter store by the play/pause button
pub const PLAYING_DAMPING: f32 = 0.94; // impulses bleed off while the track runs
pub const PAUSED_DAMPING: f32 = 1.0; // keep the last spin when paused

// Camera
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_DISTANCE: f32 = 40.0;

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_ZOOM_STEP: f32 = 0.95;
pub const ORBIT_MIN_DISTANCE: f32 = 1.0;
pub const ORBIT_MAX_DISTANCE: f32 = 500.0;
