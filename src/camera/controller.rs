use std::f32::consts::TAU;

use glam::Vec3;

use crate::camera::core::Camera;
use crate::input::{FrameInput, NavAction};
use crate::options::NavigationOptions;
use crate::wormhole::WormholeGeometry;

/// Turns one frame of held input into camera commands.
///
/// Owns the orbit mode flag; while orbiting the camera circles the throat
/// in the XZ plane and free translation is locked out. The controller only
/// moves and rotates the camera; the caller still runs
/// [`Camera::update_view`] before reading matrices.
#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    options: NavigationOptions,
    orbiting: bool,
}

impl NavigationController {
    /// Create a controller with the given tuning.
    #[must_use]
    pub fn new(options: NavigationOptions) -> Self {
        Self {
            options,
            orbiting: false,
        }
    }

    /// Whether orbit mode is active.
    #[must_use]
    pub fn is_orbiting(&self) -> bool {
        self.orbiting
    }

    /// Current tuning.
    #[must_use]
    pub fn options(&self) -> &NavigationOptions {
        &self.options
    }

    /// Replace the tuning.
    pub fn set_options(&mut self, options: NavigationOptions) {
        self.options = options;
    }

    /// Apply one frame of input lasting `frame_time_ms` milliseconds.
    pub fn update(
        &mut self,
        camera: &mut Camera,
        wormhole: &WormholeGeometry,
        input: &FrameInput,
        frame_time_ms: f32,
    ) {
        let mut delta = frame_time_ms * self.options.step_per_ms;
        let mouse_scale = frame_time_ms * self.options.mouse_step_per_ms;
        if input.is_held(NavAction::Boost) {
            delta *= self.options.boost_factor;
        }

        if !self.orbiting {
            Self::translate(camera, wormhole, input, delta);
        }

        let roll = delta * self.options.roll_factor;
        if input.is_held(NavAction::RollLeft) {
            camera.roll(-roll);
        }
        if input.is_held(NavAction::RollRight) {
            camera.roll(roll);
        }

        if input.was_triggered(NavAction::LookAtCenter) && !self.orbiting {
            camera.look_at(camera.position(), Vec3::ZERO, camera.up());
        }

        if input.was_triggered(NavAction::ToggleOrbit) {
            self.toggle_orbit(camera, wormhole);
        }

        if self.orbiting {
            self.orbit_step(camera, wormhole, delta);
        }

        if input.looking {
            let max = self.options.max_mouse_step;
            camera.yaw((input.mouse_delta.x * mouse_scale).min(max));
            camera.pitch(-(input.mouse_delta.y * mouse_scale).min(max));
        }
    }

    fn translate(
        camera: &mut Camera,
        wormhole: &WormholeGeometry,
        input: &FrameInput,
        delta: f32,
    ) {
        if input.is_held(NavAction::StrafeLeft) {
            camera.strafe(-delta, wormhole);
        }
        if input.is_held(NavAction::StrafeRight) {
            camera.strafe(delta, wormhole);
        }
        if input.is_held(NavAction::WalkForward) {
            camera.walk(delta, wormhole);
        }
        if input.is_held(NavAction::WalkBackward) {
            camera.walk(-delta, wormhole);
        }
        if input.is_held(NavAction::FlyDown) {
            camera.fly(-delta, wormhole);
        }
        if input.is_held(NavAction::FlyUp) {
            camera.fly(delta, wormhole);
        }
    }

    fn toggle_orbit(&mut self, camera: &mut Camera, wormhole: &WormholeGeometry) {
        self.orbiting = !self.orbiting;
        log::debug!("orbit mode {}", if self.orbiting { "on" } else { "off" });
        if self.orbiting {
            let start = Vec3::new(
                wormhole.radius + wormhole.length + self.options.orbit_offset,
                0.0,
                0.0,
            );
            camera.set_position_through(start, wormhole);
        }
    }

    fn orbit_step(
        &self,
        camera: &mut Camera,
        wormhole: &WormholeGeometry,
        delta: f32,
    ) {
        let angle = delta * self.options.orbit_rate * TAU;
        let (sin, cos) = angle.sin_cos();
        let old = camera.position();
        let next = Vec3::new(
            old.x * cos - old.z * sin,
            0.0,
            old.x * sin + old.z * cos,
        );
        camera.set_position_through(next, wormhole);
    }
}
