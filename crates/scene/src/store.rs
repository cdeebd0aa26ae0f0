use foundation::math::{sphere_surface, Vec3};
use foundation::time::wrap_day_ms;

use crate::color::{magnitude_color, Rgb};

/// Rendered marker radius per unit of magnitude.
const MARKER_RADIUS_PER_MAGNITUDE: f64 = 0.5;
/// Hitbox inflation over the rendered marker; picking tolerance only.
const HITBOX_INFLATION: f64 = 1.2;
/// Floor so tiny or negative magnitudes still get a pickable marker.
const MIN_MARKER_RADIUS: f64 = 0.05;

/// A schema-checked feed record, ready for ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSample {
    pub lon_deg: f64,
    pub lat_deg: f64,
    /// Depth in kilometers. Carried through but not used for projection.
    pub depth_km: f64,
    pub magnitude: f64,
    /// Epoch milliseconds of the occurrence.
    pub timestamp_ms: i64,
    pub place: String,
}

/// Immutable per-event data, fixed at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    /// Globe-local position on the sphere surface.
    pub position: Vec3,
    pub magnitude: f64,
    /// Timestamp reduced modulo one day; places the event on the
    /// recurring synthetic daily cycle.
    pub occurrence_ms: f64,
    /// Original epoch timestamp, kept for display.
    pub timestamp_ms: i64,
    pub place: String,
    pub color: Rgb,
    pub marker_radius: f64,
    /// Invisible picking volume radius, co-located with the marker.
    pub hitbox_radius: f64,
}

/// Frame-derived visual state.
///
/// Everything here is recomputable from the clock each frame except
/// `pulse_count` (and its crossing detector), which is a history and is
/// deliberately carried across frames.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct VisualState {
    pub visible: bool,
    /// Uniform pulsation scale; always in `[0.5, 1.5]`, exactly 1 once
    /// settled.
    pub scale: f64,
    /// Completed pulsation crests. Monotonically non-decreasing.
    pub pulse_count: u32,
    /// Terminal color once pulsation is exhausted.
    pub color_override: Option<Rgb>,
    /// Previous pulse-wave sample, for crest crossing detection.
    pub(crate) prev_wave: f64,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            visible: false,
            scale: 1.0,
            pulse_count: 0,
            color_override: None,
            prev_wave: 0.0,
        }
    }
}

/// One globe marker: the immutable record plus its animated state.
///
/// A single composite keeps marker and hitbox in lock-step by identity
/// instead of by parallel-array index.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSite {
    pub record: EventRecord,
    pub visual: VisualState,
}

/// Ordered collection of event sites. Append-only; records never change
/// after ingestion, visual state is rewritten every frame.
#[derive(Debug, Default)]
pub struct EventStore {
    sites: Vec<EventSite>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append events projected onto a globe of the given radius.
    ///
    /// The store is incremental: samples arriving after the loop has
    /// started simply participate from the next frame on.
    pub fn ingest(&mut self, samples: impl IntoIterator<Item = EventSample>, globe_radius: f64) {
        for sample in samples {
            self.sites.push(EventSite {
                record: record_from_sample(sample, globe_radius),
                visual: VisualState::default(),
            });
        }
    }

    pub fn load(
        samples: impl IntoIterator<Item = EventSample>,
        globe_radius: f64,
    ) -> Self {
        let mut store = Self::new();
        store.ingest(samples, globe_radius);
        store
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn sites(&self) -> &[EventSite] {
        &self.sites
    }

    pub fn sites_mut(&mut self) -> &mut [EventSite] {
        &mut self.sites
    }

    pub fn visible_count(&self) -> usize {
        self.sites.iter().filter(|s| s.visual.visible).count()
    }
}

fn record_from_sample(sample: EventSample, globe_radius: f64) -> EventRecord {
    let marker_radius =
        (MARKER_RADIUS_PER_MAGNITUDE * sample.magnitude).max(MIN_MARKER_RADIUS);

    EventRecord {
        position: sphere_surface(sample.lon_deg, sample.lat_deg, globe_radius),
        magnitude: sample.magnitude,
        occurrence_ms: wrap_day_ms(sample.timestamp_ms as f64),
        timestamp_ms: sample.timestamp_ms,
        place: sample.place,
        color: magnitude_color(sample.magnitude),
        marker_radius,
        hitbox_radius: marker_radius * HITBOX_INFLATION,
    }
}
