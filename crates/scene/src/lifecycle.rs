use runtime::clock::PlaybackClock;

use crate::color::Rgb;
use crate::store::EventStore;

/// Simulated pulsation window after occurrence for `OccurrenceHour`.
const PULSE_WINDOW_MS: f64 = 3_600_000.0;
/// Wall-clock half-period control for `WallClockDecay`.
const DECAY_PERIOD_MS: f64 = 500.0;
/// Wave level whose upward crossing counts one completed pulse.
const PULSE_CREST: f64 = 0.9;
/// Completed pulses before a marker settles.
const MAX_PULSES: u32 = 2;
/// Dimmed terminal color for settled markers.
const SETTLED_COLOR: Rgb = Rgb::new(0.45, 0.45, 0.45);

/// How markers animate after the cursor sweeps past their occurrence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PulsePolicy {
    /// Sine swell for the first simulated hour after occurrence, then
    /// settle at unit scale.
    OccurrenceHour,
    /// Fast wall-clock swell that freezes after two crests, dimming the
    /// marker to a terminal color.
    WallClockDecay,
}

impl Default for PulsePolicy {
    fn default() -> Self {
        Self::OccurrenceHour
    }
}

/// Recompute every site's visual state from the playback cursor.
///
/// Visibility contract: a site is visible exactly when
/// `clock.current_ms() >= occurrence_ms`, so an event appears the same
/// frame the cursor reaches its time-of-day and disappears once the
/// cursor wraps behind it; one contiguous visible window per loop.
pub fn advance(store: &mut EventStore, clock: &PlaybackClock, wall_ms: f64, policy: PulsePolicy) {
    let cursor = clock.current_ms();

    for site in store.sites_mut() {
        let visual = &mut site.visual;
        visual.visible = cursor >= site.record.occurrence_ms;
        if !visual.visible {
            visual.scale = 1.0;
            continue;
        }

        match policy {
            PulsePolicy::OccurrenceHour => {
                let elapsed = cursor - site.record.occurrence_ms;
                visual.scale = if elapsed < PULSE_WINDOW_MS {
                    1.0 + 0.5 * (std::f64::consts::TAU * elapsed / PULSE_WINDOW_MS).sin()
                } else {
                    1.0
                };
            }
            PulsePolicy::WallClockDecay => {
                if visual.pulse_count >= MAX_PULSES {
                    // Settled permanently; nothing left to recompute.
                    continue;
                }

                let wave = (std::f64::consts::PI * wall_ms / DECAY_PERIOD_MS).sin();
                if wave > PULSE_CREST && visual.prev_wave <= PULSE_CREST {
                    visual.pulse_count += 1;
                }
                visual.prev_wave = wave;

                if visual.pulse_count >= MAX_PULSES {
                    visual.scale = 1.0;
                    visual.color_override = Some(SETTLED_COLOR);
                } else {
                    visual.scale = 1.0 + 0.2 * wave;
                }
            }
        }
    }
}
