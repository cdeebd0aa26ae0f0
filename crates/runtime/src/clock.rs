use foundation::time::{clamp_day_ms, wrap_day_ms};

/// Default wall-to-simulated time multiplier: one wall second sweeps
/// one thousand simulated seconds, so a full day replays in ~86 seconds.
pub const DEFAULT_SPEED: f64 = 1000.0;

/// The simulated time-of-day cursor driving event visibility.
///
/// Contract:
/// - `tick` advances only while playing and always wraps into `[0, DAY_MS)`.
/// - `scrub_to` clamps rather than rejects, and always pauses playback:
///   manual scrubbing takes over from autoplay.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackClock {
    current_ms: f64,
    playing: bool,
    speed: f64,
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED)
    }
}

impl PlaybackClock {
    /// Starts at midnight, playing.
    pub fn new(speed: f64) -> Self {
        Self {
            current_ms: 0.0,
            playing: true,
            speed,
        }
    }

    pub fn current_ms(&self) -> f64 {
        self.current_ms
    }

    pub fn playing(&self) -> bool {
        self.playing
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Advance by a wall-clock delta. No-op while paused.
    pub fn tick(&mut self, delta_wall_ms: f64) {
        if !self.playing {
            return;
        }
        self.current_ms = wrap_day_ms(self.current_ms + delta_wall_ms * self.speed);
    }

    /// Jump the cursor. Clamps into `[0, DAY_MS]` and pauses playback.
    pub fn scrub_to(&mut self, ms: f64) {
        self.current_ms = clamp_day_ms(ms);
        self.playing = false;
    }

    /// Slider interface: whole seconds in `[0, 86_400]`.
    pub fn scrub_to_seconds(&mut self, seconds: u32) {
        self.scrub_to(seconds as f64 * 1000.0);
    }

    /// Current cursor as whole seconds, for feeding back to a slider.
    pub fn slider_seconds(&self) -> u32 {
        (self.current_ms / 1000.0).round() as u32
    }

    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }
}
