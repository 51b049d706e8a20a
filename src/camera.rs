//! Orbit/pan camera controller.
//!
//! The camera orbits a pivot point on a fixed-radius sphere, pans and flies by
//! translating the eye and pivot together, and can present the scene through
//! either a perspective or an orthographic projection. All math is pure so the
//! controller can be driven from tests without a window.

use glam::{Mat4, Vec2, Vec3};

/// Scroll wheel speed step per notch.
const SPEED_STEP: f32 = 0.5;
/// Lower bound for the fly speed. The upper bound comes from [`Settings`].
///
/// [`Settings`]: crate::config::Settings
pub const MIN_FLY_SPEED: f32 = 0.1;
/// Field of view bounds in degrees.
const MIN_FOV: f32 = 1.0;
const MAX_FOV: f32 = 45.0;
/// Scroll wheel fov step per notch, in degrees.
const FOV_STEP: f32 = 0.5;
/// Keeps the pitch away from the poles so the view basis never degenerates.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.1;

const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 100.0;
/// Half-height of the orthographic view volume.
const ORTHO_HALF_HEIGHT: f32 = 5.0;

const INITIAL_EYE: Vec3 = Vec3::new(0.0, 1.5, 5.0);
const INITIAL_RADIUS: f32 = 3.0;

/// Which projection the camera renders through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Perspective,
    Orthographic,
}

/// Per-frame fly input on the three camera axes, each in -1..=1.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlyInput {
    /// Along the view direction (W/S).
    pub forward: f32,
    /// Along the camera right axis (D/A).
    pub strafe: f32,
    /// Along the camera up axis (Q/E).
    pub lift: f32,
}

/// The orbit/pan camera state machine.
pub struct OrbitCamera {
    pub eye: Vec3,
    pub target: Vec3,
    /// Orbit sphere radius around the target.
    pub radius: f32,
    /// Accumulated azimuth in radians.
    yaw: f32,
    /// Accumulated altitude in radians, clamped to ±[`PITCH_LIMIT`].
    pitch: f32,
    pub fly_speed: f32,
    pub max_fly_speed: f32,
    /// Perspective field of view in degrees.
    pub fov: f32,
    pub mode: Projection,
}

impl OrbitCamera {
    /// Creates a camera in the initial pose, with the given fly speed ceiling.
    pub fn new(max_fly_speed: f32) -> Self {
        Self {
            eye: INITIAL_EYE,
            target: Vec3::ZERO,
            radius: INITIAL_RADIUS,
            yaw: 0.0,
            pitch: 0.0,
            fly_speed: 1.0,
            max_fly_speed,
            fov: MAX_FOV,
            mode: Projection::Perspective,
        }
    }

    /// Restores the initial pose. Speed, fov and projection mode are kept.
    pub fn reset(&mut self) {
        self.eye = INITIAL_EYE;
        self.target = Vec3::ZERO;
        self.radius = INITIAL_RADIUS;
        self.yaw = 0.0;
        self.pitch = 0.0;
    }

    /// View direction from the eye toward the target.
    pub fn front(&self) -> Vec3 {
        (self.target - self.eye).normalize()
    }

    /// Roll-free camera right axis.
    pub fn right(&self) -> Vec3 {
        self.front().cross(Vec3::Y).normalize()
    }

    /// Roll-free camera up axis.
    pub fn up(&self) -> Vec3 {
        self.right().cross(self.front())
    }

    /// Orbits the eye around the target. `delta` is the mouse drag in pixels,
    /// one pixel per degree, with positive y dragging the view upward. The
    /// pitch stops just short of the poles and the eye stays on the orbit
    /// sphere.
    pub fn orbit(&mut self, delta: Vec2) {
        self.yaw += delta.x.to_radians();
        self.pitch = (self.pitch + delta.y.to_radians()).clamp(-PITCH_LIMIT, PITCH_LIMIT);

        self.eye = self.target
            + self.radius
                * Vec3::new(
                    self.pitch.cos() * self.yaw.sin(),
                    self.pitch.sin(),
                    self.pitch.cos() * self.yaw.cos(),
                );
    }

    /// Pans the eye and the orbit pivot together along the camera right and up
    /// axes. `delta` is the mouse drag in pixels, positive y upward.
    pub fn pan(&mut self, delta: Vec2, delta_time: f32) {
        let offset = (self.right() * delta.x + self.up() * delta.y) * delta_time;
        self.eye += offset;
        self.target += offset;
    }

    /// Flies the camera along its own axes. The orbit pivot moves with the
    /// eye, so a later orbit spins around wherever the camera has flown to.
    pub fn fly(&mut self, input: FlyInput, delta_time: f32) {
        let movement = (self.front() * input.forward
            + self.right() * input.strafe
            + self.up() * input.lift)
            * self.fly_speed
            * delta_time;
        self.eye += movement;
        self.target += movement;
    }

    /// Adjusts the fly speed from a scroll wheel notch count.
    pub fn adjust_speed(&mut self, scroll_y: f32) {
        self.fly_speed =
            (self.fly_speed + scroll_y * SPEED_STEP).clamp(MIN_FLY_SPEED, self.max_fly_speed);
    }

    /// Narrows or widens the perspective field of view from a scroll wheel
    /// notch count.
    pub fn zoom(&mut self, scroll_y: f32) {
        self.fov = (self.fov - scroll_y * FOV_STEP).clamp(MIN_FOV, MAX_FOV);
    }

    /// Flips between the perspective and orthographic projections.
    pub fn toggle_projection(&mut self) {
        self.mode = match self.mode {
            Projection::Perspective => Projection::Orthographic,
            Projection::Orthographic => Projection::Perspective,
        };
    }

    /// Right-handed view matrix looking from the eye at the target.
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    /// Projection matrix for the current mode and window aspect ratio.
    pub fn projection(&self, aspect_ratio: f32) -> Mat4 {
        match self.mode {
            Projection::Perspective => Mat4::perspective_rh_gl(
                self.fov.to_radians(),
                aspect_ratio,
                NEAR_PLANE,
                FAR_PLANE,
            ),
            Projection::Orthographic => {
                let half_width = ORTHO_HALF_HEIGHT * aspect_ratio;
                Mat4::orthographic_rh_gl(
                    -half_width,
                    half_width,
                    -ORTHO_HALF_HEIGHT,
                    ORTHO_HALF_HEIGHT,
                    NEAR_PLANE,
                    FAR_PLANE,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> OrbitCamera {
        OrbitCamera::new(5.0)
    }

    #[test]
    fn orbit_keeps_eye_on_radius_sphere() {
        let mut camera = camera();
        for delta in [
            Vec2::new(35.0, 10.0),
            Vec2::new(-120.0, 40.0),
            Vec2::new(3.0, -75.0),
        ] {
            camera.orbit(delta);
            let distance = (camera.eye - camera.target).length();
            assert!((distance - camera.radius).abs() < 1e-4);
        }
    }

    #[test]
    fn orbit_pitch_stops_short_of_the_poles() {
        let mut camera = camera();
        camera.orbit(Vec2::new(0.0, 10_000.0));
        // The eye must stay strictly below the pole of the orbit sphere.
        assert!(camera.eye.y - camera.target.y < camera.radius);
        assert!(camera.eye.y - camera.target.y > camera.radius * (PITCH_LIMIT - 0.01).sin());
        // The basis must still be usable.
        assert!(camera.right().is_finite());
        assert!(camera.up().length() > 0.9);
    }

    #[test]
    fn orbit_with_zero_delta_is_stable() {
        let mut camera = camera();
        camera.orbit(Vec2::new(90.0, 20.0));
        let eye = camera.eye;
        camera.orbit(Vec2::ZERO);
        assert!((camera.eye - eye).length() < 1e-5);
    }

    #[test]
    fn pan_moves_eye_and_target_together() {
        let mut camera = camera();
        let separation = camera.target - camera.eye;
        camera.pan(Vec2::new(40.0, -25.0), 0.016);
        assert!((camera.target - camera.eye - separation).length() < 1e-5);
        assert!(camera.eye != INITIAL_EYE);
    }

    #[test]
    fn orbit_after_pan_circles_the_panned_pivot() {
        let mut camera = camera();
        camera.pan(Vec2::new(100.0, 0.0), 0.016);
        let pivot = camera.target;
        camera.orbit(Vec2::new(45.0, 15.0));
        assert_eq!(camera.target, pivot);
        assert!(((camera.eye - pivot).length() - camera.radius).abs() < 1e-4);
    }

    #[test]
    fn fly_moves_along_the_view_direction() {
        let mut camera = camera();
        let front = camera.front();
        let before = camera.eye;
        camera.fly(
            FlyInput {
                forward: 1.0,
                ..FlyInput::default()
            },
            0.5,
        );
        let displacement = camera.eye - before;
        assert!((displacement.normalize() - front).length() < 1e-5);
        assert!((displacement.length() - camera.fly_speed * 0.5).abs() < 1e-5);
    }

    #[test]
    fn scroll_speed_is_clamped_to_its_range() {
        let mut camera = camera();
        for _ in 0..100 {
            camera.adjust_speed(1.0);
        }
        assert_eq!(camera.fly_speed, camera.max_fly_speed);
        for _ in 0..100 {
            camera.adjust_speed(-1.0);
        }
        assert_eq!(camera.fly_speed, MIN_FLY_SPEED);
    }

    #[test]
    fn fov_is_clamped_to_its_range() {
        let mut camera = camera();
        for _ in 0..200 {
            camera.zoom(1.0);
        }
        assert_eq!(camera.fov, MIN_FOV);
        for _ in 0..200 {
            camera.zoom(-1.0);
        }
        assert_eq!(camera.fov, MAX_FOV);
    }

    #[test]
    fn reset_restores_the_initial_pose() {
        let mut camera = camera();
        camera.orbit(Vec2::new(123.0, -45.0));
        camera.pan(Vec2::new(30.0, 30.0), 0.1);
        camera.fly(
            FlyInput {
                forward: 1.0,
                strafe: -1.0,
                lift: 1.0,
            },
            1.0,
        );
        camera.reset();
        assert_eq!(camera.eye, INITIAL_EYE);
        assert_eq!(camera.target, Vec3::ZERO);
        assert_eq!(camera.radius, INITIAL_RADIUS);
    }

    #[test]
    fn projection_toggle_round_trips() {
        let mut camera = camera();
        assert_eq!(camera.mode, Projection::Perspective);
        camera.toggle_projection();
        assert_eq!(camera.mode, Projection::Orthographic);
        camera.toggle_projection();
        assert_eq!(camera.mode, Projection::Perspective);
    }

    #[test]
    fn projection_matrix_follows_the_mode() {
        let mut camera = camera();
        let perspective = camera.projection(4.0 / 3.0);
        camera.toggle_projection();
        let orthographic = camera.projection(4.0 / 3.0);
        assert_ne!(perspective, orthographic);
        // Orthographic projection has no w-divide.
        assert_eq!(orthographic.row(3), glam::Vec4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn view_matrix_centers_the_target() {
        let mut camera = camera();
        camera.orbit(Vec2::new(60.0, 20.0));
        let seen = camera.view().transform_point3(camera.target);
        assert!(seen.x.abs() < 1e-4);
        assert!(seen.y.abs() < 1e-4);
        assert!((seen.z + camera.radius).abs() < 1e-4);
    }
}
