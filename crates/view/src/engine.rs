use runtime::clock::PlaybackClock;
use runtime::frame::Frame;
use scene::color::Rgb;
use scene::lifecycle::{self, PulsePolicy};
use scene::picking::{self, Tooltip};
use scene::store::{EventSample, EventStore};

use crate::camera::{CameraController, MarkerScaleDirection};
use foundation::math::Vec3;

/// Globe surface radius in world units.
pub const GLOBE_RADIUS: f64 = 30.0;

/// One marker ready for the renderer: pulse scale and camera zoom
/// compensation already folded together, settled color applied.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkerInstance {
    pub position: Vec3,
    pub radius: f64,
    pub scale: f64,
    pub color: Rgb,
}

/// Per-frame orchestration of the whole engine.
///
/// Frame order: playback clock advances, the lifecycle animator rewrites
/// visual state from the clock, then the camera applies any pending intro
/// motion. Pointer picking is stateless per call and independent of frame
/// timing.
#[derive(Debug)]
pub struct Engine {
    store: EventStore,
    clock: PlaybackClock,
    camera: CameraController,
    policy: PulsePolicy,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(PulsePolicy::default(), MarkerScaleDirection::default())
    }
}

impl Engine {
    pub fn new(policy: PulsePolicy, scale_direction: MarkerScaleDirection) -> Self {
        Self {
            store: EventStore::new(),
            clock: PlaybackClock::default(),
            camera: CameraController::new(scale_direction),
            policy,
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn clock(&self) -> &PlaybackClock {
        &self.clock
    }

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    /// Add events; they join the lifecycle on the next frame. The loop is
    /// expected to already be running when a feed arrives.
    pub fn ingest(&mut self, samples: impl IntoIterator<Item = EventSample>) -> usize {
        let before = self.store.len();
        self.store.ingest(samples, GLOBE_RADIUS);
        self.store.len() - before
    }

    /// Advance one frame of wall time.
    pub fn advance(&mut self, frame: Frame) {
        self.clock.tick(frame.dt_ms);
        lifecycle::advance(&mut self.store, &self.clock, frame.wall_ms(), self.policy);
        self.camera.update();
    }

    /// Resolve a pointer position to the nearest visible event, if any.
    pub fn pointer_moved(&self, ndc_x: f64, ndc_y: f64, aspect: f64) -> Option<Tooltip> {
        let ray = self.camera.pointer_ray(ndc_x, ndc_y, aspect);
        let hit = picking::pick_ray(&self.store, ray)?;
        picking::tooltip_for(&self.store, hit)
    }

    // Input pass-throughs. The presentation layer owns widgets; the engine
    // owns the semantics.

    pub fn pointer_down(&mut self, pos_px: [f64; 2]) {
        self.camera.on_pointer_down(pos_px);
    }

    pub fn pointer_drag(&mut self, pos_px: [f64; 2]) {
        self.camera.on_pointer_move(pos_px);
    }

    pub fn pointer_up(&mut self) {
        self.camera.on_pointer_up();
    }

    pub fn wheel(&mut self, delta: f64) {
        self.camera.on_wheel(delta);
    }

    pub fn scrub_to_seconds(&mut self, seconds: u32) {
        self.clock.scrub_to_seconds(seconds);
    }

    pub fn toggle_play(&mut self) {
        self.clock.toggle_play();
    }

    /// Render list for the visible markers of the current frame.
    pub fn markers(&self) -> Vec<MarkerInstance> {
        let zoom_scale = self.camera.marker_scale();
        self.store
            .sites()
            .iter()
            .filter(|site| site.visual.visible)
            .map(|site| MarkerInstance {
                position: site.record.position,
                radius: site.record.marker_radius,
                scale: site.visual.scale * zoom_scale,
                color: site.visual.color_override.unwrap_or(site.record.color),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{Engine, GLOBE_RADIUS};
    use runtime::frame::Frame;
    use scene::store::EventSample;

    fn sample_at(lon: f64, lat: f64, timestamp_ms: i64) -> EventSample {
        EventSample {
            lon_deg: lon,
            lat_deg: lat,
            depth_km: 5.0,
            magnitude: 5.0,
            timestamp_ms,
            place: "Test Ridge".to_string(),
        }
    }

    #[test]
    fn starts_empty_and_running() {
        let engine = Engine::default();
        assert!(engine.store().is_empty());
        assert!(engine.clock().playing());
        assert!(engine.markers().is_empty());
        // Picking against nothing is a miss, not a failure.
        assert_eq!(engine.pointer_moved(0.0, 0.0, 1.0), None);
    }

    #[test]
    fn events_ingested_mid_run_join_the_next_frame() {
        let mut engine = Engine::default();
        let mut frame = Frame::new(0, 1000.0 / 60.0);

        engine.advance(frame);
        frame = frame.next();
        assert!(engine.markers().is_empty());

        // Feed arrives with an event at midnight; the cursor has already
        // passed it, so it shows on the very next frame.
        assert_eq!(engine.ingest([sample_at(0.0, 0.0, 0)]), 1);
        engine.advance(frame);
        assert_eq!(engine.markers().len(), 1);
        assert_eq!(engine.store().visible_count(), 1);
    }

    #[test]
    fn marker_scale_folds_pulse_and_zoom() {
        let mut engine = Engine::default();
        engine.ingest([sample_at(0.0, 0.0, 0)]);

        // Scrub exactly onto the occurrence: pulse phase 0 => scale 1.
        engine.scrub_to_seconds(0);
        engine.advance(Frame::new(0, 16.0));

        let markers = engine.markers();
        assert_eq!(markers.len(), 1);
        let expected = engine.camera().marker_scale();
        assert!((markers[0].scale - expected).abs() < 1e-12);
        assert!((markers[0].position.length() - GLOBE_RADIUS).abs() < 1e-9);
    }

    #[test]
    fn drag_then_pick_finds_the_marker_under_the_pointer() {
        let mut engine = Engine::default();
        engine.ingest([sample_at(0.0, 0.0, 0)]);

        // Make the marker visible without advancing simulated time past it.
        engine.scrub_to_seconds(60);
        engine.advance(Frame::new(0, 16.0));

        // The marker sits on the +X face; a quarter yaw turn brings the
        // camera's central ray onto it in globe-local space.
        engine.pointer_down([0.0, 0.0]);
        engine.pointer_drag([std::f64::consts::FRAC_PI_2 / 0.005, 0.0]);
        engine.pointer_up();

        let tip = engine.pointer_moved(0.0, 0.0, 1.0).expect("tooltip");
        assert_eq!(tip.place, "Test Ridge");
        assert_eq!(tip.magnitude, 5.0);
        assert_eq!(tip.formatted_time, "12:00 AM");
    }

    #[test]
    fn scrubbing_pauses_the_loop() {
        let mut engine = Engine::default();
        engine.scrub_to_seconds(3_600);
        assert!(!engine.clock().playing());

        let cursor = engine.clock().current_ms();
        engine.advance(Frame::new(0, 16.0));
        assert_eq!(engine.clock().current_ms(), cursor);

        engine.toggle_play();
        engine.advance(Frame::new(1, 16.0));
        assert!(engine.clock().current_ms() > cursor);
    }

    #[test]
    fn intro_runs_until_first_interaction() {
        let mut engine = Engine::default();
        let yaw_start = engine.camera().yaw();
        engine.advance(Frame::new(0, 16.0));
        assert!(engine.camera().yaw() > yaw_start);

        engine.wheel(10.0);
        let yaw = engine.camera().yaw();
        engine.advance(Frame::new(1, 16.0));
        assert_eq!(engine.camera().yaw(), yaw);
    }
}
