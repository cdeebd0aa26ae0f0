//! Interactive globe camera with a scripted intro sweep.
//!
//! The camera sits on the +Z axis looking at the globe center; drag input
//! rotates the globe group (yaw about +Y, pitch about +X) rather than
//! moving the camera, so picking happens in globe-local space.

use foundation::math::{rotate_x, rotate_y, Vec3};
use scene::picking::Ray;

/// Closest allowed camera distance from the globe center.
pub const MIN_ZOOM: f64 = 40.0;
/// Farthest allowed camera distance.
pub const MAX_ZOOM: f64 = 300.0;
/// Distance at which markers render at their natural size.
pub const REFERENCE_ZOOM: f64 = 150.0;
/// Vertical field of view (radians).
pub const FOV_Y_RAD: f64 = 75.0 * std::f64::consts::PI / 180.0;

/// Drag rotation per pixel of pointer movement (radians).
const DRAG_SENSITIVITY: f64 = 0.005;
/// Zoom change per wheel delta unit.
const WHEEL_SENSITIVITY: f64 = 0.05;
/// Intro sweep yaw per frame (radians).
const INTRO_YAW_STEP: f64 = 0.002;
/// Intro approach easing per frame.
const INTRO_ZOOM_EASE: f64 = 0.04;
/// Intro start and settle distances.
const INTRO_START_ZOOM: f64 = 260.0;
const INTRO_TARGET_ZOOM: f64 = REFERENCE_ZOOM;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Mode {
    AutoIntro,
    UserControlled,
}

/// Which way the zoom-compensating marker scale runs.
///
/// Both signs are defensible visually, so the direction is explicit
/// configuration rather than a constant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MarkerScaleDirection {
    /// `zoom / reference`: markers shrink as the camera approaches.
    ShrinkOnApproach,
    /// `reference / zoom`: markers grow as the camera approaches.
    GrowOnApproach,
}

impl Default for MarkerScaleDirection {
    fn default() -> Self {
        Self::ShrinkOnApproach
    }
}

#[derive(Debug, Clone)]
pub struct CameraController {
    zoom: f64,
    yaw: f64,
    pitch: f64,
    mode: Mode,
    dragging: bool,
    last_pointer_px: [f64; 2],
    scale_direction: MarkerScaleDirection,
}

impl Default for CameraController {
    fn default() -> Self {
        Self {
            zoom: INTRO_START_ZOOM,
            yaw: 0.0,
            pitch: 0.0,
            mode: Mode::AutoIntro,
            dragging: false,
            last_pointer_px: [0.0, 0.0],
            scale_direction: MarkerScaleDirection::default(),
        }
    }
}

impl CameraController {
    pub fn new(scale_direction: MarkerScaleDirection) -> Self {
        Self {
            scale_direction,
            ..Self::default()
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// True once the user has dragged or zoomed. One-way; the intro never
    /// resumes.
    pub fn user_interacted(&self) -> bool {
        self.mode == Mode::UserControlled
    }

    pub fn on_pointer_down(&mut self, pos_px: [f64; 2]) {
        self.mode = Mode::UserControlled;
        self.dragging = true;
        self.last_pointer_px = pos_px;
    }

    pub fn on_pointer_move(&mut self, pos_px: [f64; 2]) {
        if !self.dragging {
            return;
        }
        let dx = pos_px[0] - self.last_pointer_px[0];
        let dy = pos_px[1] - self.last_pointer_px[1];
        self.yaw += dx * DRAG_SENSITIVITY;
        self.pitch += dy * DRAG_SENSITIVITY;
        self.last_pointer_px = pos_px;
    }

    pub fn on_pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Additive wheel zoom, clamped to `[MIN_ZOOM, MAX_ZOOM]`.
    pub fn on_wheel(&mut self, delta: f64) {
        self.mode = Mode::UserControlled;
        self.zoom = (self.zoom + delta * WHEEL_SENSITIVITY).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Per-frame update. Only the intro sweep does anything here; user
    /// control is applied directly by the input handlers.
    pub fn update(&mut self) {
        if self.mode != Mode::AutoIntro {
            return;
        }
        self.yaw += INTRO_YAW_STEP;
        // Monotonic approach from above; never undershoots the target.
        self.zoom = (self.zoom + (INTRO_TARGET_ZOOM - self.zoom) * INTRO_ZOOM_EASE)
            .max(INTRO_TARGET_ZOOM)
            .clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Uniform marker scale compensating for camera distance.
    pub fn marker_scale(&self) -> f64 {
        match self.scale_direction {
            MarkerScaleDirection::ShrinkOnApproach => self.zoom / REFERENCE_ZOOM,
            MarkerScaleDirection::GrowOnApproach => REFERENCE_ZOOM / self.zoom,
        }
    }

    /// Globe-local picking ray through normalized device coordinates.
    ///
    /// NDC is the usual `[-1, 1]` square, +Y up. The world ray from the
    /// camera is inverse-rotated by the accumulated globe rotation so the
    /// picking service can intersect untransformed marker positions.
    pub fn pointer_ray(&self, ndc_x: f64, ndc_y: f64, aspect: f64) -> Ray {
        let half = (FOV_Y_RAD / 2.0).tan();
        let world_origin = Vec3::new(0.0, 0.0, self.zoom);
        let world_dir = Vec3::new(ndc_x * half * aspect, ndc_y * half, -1.0);

        // Globe world transform is Rx(pitch) * Ry(yaw); invert both.
        let local_origin = rotate_y(rotate_x(world_origin, -self.pitch), -self.yaw);
        let local_dir = rotate_y(rotate_x(world_dir, -self.pitch), -self.yaw);

        Ray::new(local_origin, local_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CameraController, MarkerScaleDirection, INTRO_START_ZOOM, INTRO_TARGET_ZOOM, MAX_ZOOM,
        MIN_ZOOM, REFERENCE_ZOOM,
    };

    #[test]
    fn wheel_zoom_clamps_at_both_ends() {
        let mut camera = CameraController::default();
        camera.on_wheel(-1.0e9);
        assert_eq!(camera.zoom(), MIN_ZOOM);
        camera.on_wheel(1.0e9);
        assert_eq!(camera.zoom(), MAX_ZOOM);
    }

    #[test]
    fn first_interaction_permanently_ends_the_intro() {
        let mut camera = CameraController::default();
        assert!(!camera.user_interacted());

        camera.update();
        let yaw_before = camera.yaw();
        assert!(yaw_before > 0.0);

        camera.on_pointer_down([10.0, 10.0]);
        camera.on_pointer_up();
        assert!(camera.user_interacted());

        // No further scripted motion.
        camera.update();
        camera.update();
        assert_eq!(camera.yaw(), yaw_before);
    }

    #[test]
    fn wheel_also_latches_user_control() {
        let mut camera = CameraController::default();
        camera.on_wheel(1.0);
        assert!(camera.user_interacted());
    }

    #[test]
    fn intro_zoom_approaches_target_monotonically() {
        let mut camera = CameraController::default();
        let mut previous = INTRO_START_ZOOM;
        for _ in 0..2_000 {
            camera.update();
            assert!(camera.zoom() <= previous);
            assert!(camera.zoom() >= INTRO_TARGET_ZOOM);
            previous = camera.zoom();
        }
        assert!((camera.zoom() - INTRO_TARGET_ZOOM).abs() < 1.0);
    }

    #[test]
    fn drag_accumulates_yaw_and_pitch() {
        let mut camera = CameraController::default();
        camera.on_pointer_down([100.0, 100.0]);
        camera.on_pointer_move([140.0, 80.0]);
        assert!((camera.yaw() - 40.0 * 0.005).abs() < 1e-12);
        assert!((camera.pitch() - -20.0 * 0.005).abs() < 1e-12);

        // Moves without an active drag are ignored.
        camera.on_pointer_up();
        let yaw = camera.yaw();
        camera.on_pointer_move([500.0, 500.0]);
        assert_eq!(camera.yaw(), yaw);
    }

    #[test]
    fn marker_scale_direction_is_configurable() {
        let mut shrink = CameraController::new(MarkerScaleDirection::ShrinkOnApproach);
        let mut grow = CameraController::new(MarkerScaleDirection::GrowOnApproach);

        // Move both close to the globe.
        shrink.on_wheel(-1.0e9);
        grow.on_wheel(-1.0e9);

        assert!(shrink.marker_scale() < 1.0);
        assert!(grow.marker_scale() > 1.0);
        assert!((shrink.marker_scale() - MIN_ZOOM / REFERENCE_ZOOM).abs() < 1e-12);
        assert!((grow.marker_scale() - REFERENCE_ZOOM / MIN_ZOOM).abs() < 1e-12);
    }

    #[test]
    fn center_ray_points_at_the_globe_center() {
        let mut camera = CameraController::default();
        camera.on_pointer_down([0.0, 0.0]);
        camera.on_pointer_up();

        let ray = camera.pointer_ray(0.0, 0.0, 16.0 / 9.0);
        // Unrotated globe: camera on +Z looking down -Z.
        assert!((ray.origin.z - camera.zoom()).abs() < 1e-12);
        assert!((ray.dir.x).abs() < 1e-12);
        assert!((ray.dir.y).abs() < 1e-12);
        assert!(ray.dir.z < 0.0);
    }

    #[test]
    fn pointer_ray_tracks_globe_rotation() {
        let mut camera = CameraController::default();
        // Drag a quarter turn of yaw.
        camera.on_pointer_down([0.0, 0.0]);
        camera.on_pointer_move([std::f64::consts::FRAC_PI_2 / 0.005, 0.0]);
        camera.on_pointer_up();

        let ray = camera.pointer_ray(0.0, 0.0, 1.0);
        // The local-space center ray now approaches from -X.
        assert!((ray.origin.x + camera.zoom()).abs() < 1e-9);
        let dir = ray.dir.normalized().unwrap();
        assert!((dir.x - 1.0).abs() < 1e-9);
    }
}
