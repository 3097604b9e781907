//! Scene state and the per-tick animation step.
//!
//! [`SceneState`] owns the model, view and projection matrices together with the parameters
//! that drive the cube: its position on the orbit and how (and whether) it spins.

use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec3};

use crate::input::Action;

/// Distance of the cube from the origin.
pub const ORBIT_RADIUS: f32 = 4.0;
/// Orbit rate in radians per second.
pub const ORBIT_RATE: f32 = FRAC_PI_2;
/// Spin rate in degrees per second at speed 1.
pub const SPIN_RATE: f32 = 90.0;
/// Highest selectable spin speed multiplier.
pub const MAX_SPEED: u8 = 6;

const EYE: Vec3 = Vec3::new(0.0, 8.0, -16.0);
const FOV_Y_DEGREES: f32 = 45.0;
const Z_NEAR: f32 = 0.01;
const Z_FAR: f32 = 100.0;

/// Which way the cube spins around its own Y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Reverse => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

/// Whether the event loop keeps running after an action was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Everything the animation and the renderer read or write between frames.
#[derive(Debug, Clone)]
pub struct SceneState {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    pub width: u32,
    pub height: u32,
    /// Radians. Not wrapped; `sin`/`cos` take care of that.
    pub orbit_angle: f32,
    /// Degrees.
    pub spin_angle: f32,
    pub spin_enabled: bool,
    pub direction: Direction,
    pub speed: u8,
}

impl SceneState {
    /// Creates the initial scene for a window of the given size. The camera is fixed at
    /// `(0, 8, -16)` looking at the origin.
    pub fn new(width: u32, height: u32) -> Self {
        let mut state = Self {
            model: Mat4::IDENTITY,
            view: Mat4::look_at_rh(EYE, Vec3::ZERO, Vec3::Y),
            projection: projection(width, height),
            width,
            height,
            orbit_angle: 0.0,
            spin_angle: 0.0,
            spin_enabled: false,
            direction: Direction::default(),
            speed: 1,
        };
        state.model = state.compute_model();
        state
    }

    /// Advances the animation by `dt` seconds and recomputes the model matrix.
    ///
    /// `dt` is taken as-is: a long stall produces one large jump.
    pub fn step(&mut self, dt: f32) {
        self.orbit_angle += dt * ORBIT_RATE;
        if self.spin_enabled {
            self.spin_angle += dt * SPIN_RATE * self.speed as f32 * self.direction.sign();
        }
        self.model = self.compute_model();
    }

    fn compute_model(&self) -> Mat4 {
        let translation = Vec3::new(
            ORBIT_RADIUS * self.orbit_angle.sin(),
            0.0,
            ORBIT_RADIUS * self.orbit_angle.cos(),
        );
        Mat4::from_translation(translation) * Mat4::from_rotation_y(self.spin_angle.to_radians())
    }

    /// The combined transform uploaded to the shader. The model matrix is applied first.
    pub fn mvp(&self) -> Mat4 {
        self.projection * self.view * self.model
    }

    /// Updates the stored window size and the projection. The view is left alone.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.projection = projection(width, height);
    }

    /// Applies a single input action.
    pub fn apply(&mut self, action: Action) -> Flow {
        match action {
            Action::Quit => return Flow::Quit,
            Action::FlipDirection => self.direction = self.direction.flipped(),
            Action::SetSpeed(speed) => self.speed = speed.clamp(1, MAX_SPEED),
            Action::StartRotation => self.spin_enabled = true,
            Action::StopRotation => self.spin_enabled = false,
            Action::Resize(width, height) => self.resize(width, height),
        }
        Flow::Continue
    }
}

fn projection(width: u32, height: u32) -> Mat4 {
    // A minimized window reports a zero height.
    let aspect = width as f32 / height.max(1) as f32;
    Mat4::perspective_rh_gl(FOV_Y_DEGREES.to_radians(), aspect, Z_NEAR, Z_FAR)
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_initial_model_translation() {
        let state = SceneState::new(640, 480);
        assert!(state.model.w_axis.truncate().abs_diff_eq(Vec3::new(0.0, 0.0, 4.0), EPS));
        assert!(!state.spin_enabled);
        assert_eq!(state.direction, Direction::Forward);
        assert_eq!(state.speed, 1);
    }

    #[test]
    fn test_step_advances_orbit() {
        let mut state = SceneState::new(640, 480);
        for dt in [0.0, 0.016, 0.5, 2.0] {
            let before = state.orbit_angle;
            state.step(dt);
            assert!((state.orbit_angle - (before + dt * FRAC_PI_2)).abs() < EPS);
        }
    }

    #[test]
    fn test_zero_dt_is_finite() {
        let mut state = SceneState::new(640, 480);
        state.spin_enabled = true;
        state.step(0.0);
        assert!(state.model.is_finite());
        assert!(state.mvp().is_finite());
    }

    #[test]
    fn test_spin_frozen_when_disabled() {
        let mut state = SceneState::new(640, 480);
        state.spin_angle = 12.5;
        state.speed = 4;
        state.step(1.25);
        assert_eq!(state.spin_angle, 12.5);
    }

    #[test]
    fn test_spin_rate() {
        for speed in 1..=MAX_SPEED {
            for direction in [Direction::Forward, Direction::Reverse] {
                let mut state = SceneState::new(640, 480);
                state.spin_enabled = true;
                state.speed = speed;
                state.direction = direction;
                state.spin_angle = 30.0;
                state.step(0.25);
                let expected = 30.0 + 0.25 * 90.0 * speed as f32 * direction.sign();
                assert!((state.spin_angle - expected).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_model_follows_orbit_and_spin() {
        let mut state = SceneState::new(640, 480);
        state.spin_enabled = true;
        state.step(1.0);
        // A quarter orbit puts the cube on +X, spun 90 degrees.
        let expected = Mat4::from_translation(Vec3::new(4.0, 0.0, 0.0))
            * Mat4::from_rotation_y(FRAC_PI_2);
        assert!(state.model.abs_diff_eq(expected, EPS));
    }

    #[test]
    fn test_flip_direction_twice() {
        let mut state = SceneState::new(640, 480);
        let original = state.direction;
        state.apply(Action::FlipDirection);
        assert_eq!(state.direction, Direction::Reverse);
        state.apply(Action::FlipDirection);
        assert_eq!(state.direction, original);
    }

    #[test]
    fn test_speed_three_for_one_second() {
        let mut state = SceneState::new(640, 480);
        state.apply(Action::SetSpeed(3));
        state.apply(Action::StartRotation);
        let before = state.spin_angle;
        state.step(1.0);
        assert!((state.spin_angle - before - 270.0 * state.direction.sign()).abs() < EPS);
    }

    #[test]
    fn test_speed_is_clamped() {
        let mut state = SceneState::new(640, 480);
        state.apply(Action::SetSpeed(9));
        assert_eq!(state.speed, MAX_SPEED);
        state.apply(Action::SetSpeed(0));
        assert_eq!(state.speed, 1);
    }

    #[test]
    fn test_resize_updates_projection_only() {
        let mut state = SceneState::new(640, 480);
        let view = state.view;
        assert_eq!(state.apply(Action::Resize(800, 600)), Flow::Continue);
        assert_eq!((state.width, state.height), (800, 600));
        assert_eq!(state.view, view);
        let expected = Mat4::perspective_rh_gl(45f32.to_radians(), 800.0 / 600.0, 0.01, 100.0);
        assert!(state.projection.abs_diff_eq(expected, EPS));
        // x_axis.x is f / aspect, y_axis.y is f.
        let aspect = state.projection.y_axis.y / state.projection.x_axis.x;
        assert!((aspect - 800.0 / 600.0).abs() < EPS);
    }

    #[test]
    fn test_resize_to_zero_height() {
        let mut state = SceneState::new(640, 480);
        state.resize(640, 0);
        assert!(state.projection.is_finite());
    }

    #[test]
    fn test_stop_then_start_rotation() {
        let mut state = SceneState::new(640, 480);
        state.spin_angle = 42.0;
        assert_eq!(state.apply(Action::StopRotation), Flow::Continue);
        assert_eq!(state.apply(Action::StartRotation), Flow::Continue);
        assert!(state.spin_enabled);
        assert_eq!(state.spin_angle, 42.0);
    }

    #[test]
    fn test_quit() {
        let mut state = SceneState::new(640, 480);
        assert_eq!(state.apply(Action::Quit), Flow::Quit);
    }

    #[test]
    fn test_mvp_matches_sequential_transform() {
        let mut state = SceneState::new(640, 480);
        state.spin_enabled = true;
        state.step(0.7);
        let vertex = Vec4::new(1.0, -1.0, 1.0, 1.0);
        let sequential = state.projection * (state.view * (state.model * vertex));
        assert!((state.mvp() * vertex).abs_diff_eq(sequential, EPS));
    }

    #[test]
    fn test_camera_looks_at_origin() {
        let state = SceneState::new(640, 480);
        // The origin lands on the view axis, in front of the camera.
        let eye_space = state.view * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(eye_space.x.abs() < EPS);
        assert!(eye_space.y.abs() < EPS);
        assert!((eye_space.z + EYE.length()).abs() < EPS);
    }
}
