//! One flight through the wormhole: camera, geometry, input and controller
//! owned together and stepped a frame at a time.

use crate::camera::{Camera, FrameSnapshot, NavigationController, Sheet};
use crate::input::{InputEvent, InputProcessor};
use crate::options::Options;
use crate::wormhole::WormholeGeometry;

/// Owns all navigation state for a single viewer.
///
/// Feed raw events with [`FlightSession::handle_event`] and call
/// [`FlightSession::step`] once per frame; the returned snapshot is what
/// the renderer draws.
#[derive(Debug, Clone)]
pub struct FlightSession {
    camera: Camera,
    wormhole: WormholeGeometry,
    controller: NavigationController,
    input: InputProcessor,
    frame: u64,
}

impl FlightSession {
    /// Build a session from options.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            camera: Camera::from_options(&options.camera),
            wormhole: options.wormhole,
            controller: NavigationController::new(options.navigation.clone()),
            input: InputProcessor::with_key_bindings(
                options.keybindings.clone(),
            ),
            frame: 0,
        }
    }

    /// Current camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera, for direct commands outside the input path.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Current wormhole shape.
    #[must_use]
    pub fn wormhole(&self) -> &WormholeGeometry {
        &self.wormhole
    }

    /// Replace the wormhole shape; takes effect on the next step.
    pub fn set_wormhole(&mut self, wormhole: WormholeGeometry) {
        self.wormhole = wormhole;
    }

    /// Navigation controller (orbit state and tuning).
    #[must_use]
    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    /// Number of frames stepped so far.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Queue a raw input event for the next step.
    pub fn handle_event(&mut self, event: &InputEvent) {
        self.input.handle_event(event);
    }

    /// Change the render resolution and horizontal field of view.
    pub fn resize(&mut self, width: u32, height: u32, fov_degrees: f32) {
        if width > 0 && height > 0 {
            self.camera.set_resolution_fov(width, height, fov_degrees);
            self.camera.update_proj();
        }
    }

    /// Advance one frame of `frame_time_ms` milliseconds and return the
    /// state the renderer should draw.
    pub fn step(&mut self, frame_time_ms: f32) -> FrameSnapshot {
        let before = self.camera.sheet();
        let input = self.input.take_frame();
        self.controller.update(
            &mut self.camera,
            &self.wormhole,
            &input,
            frame_time_ms,
        );
        self.camera.update_view();
        self.camera.update_proj();
        self.frame += 1;

        let after = self.camera.sheet();
        if after != before {
            log::info!(
                "frame {}: now on the {} sheet (l = {:.4})",
                self.frame,
                sheet_name(after),
                self.camera.l()
            );
        }

        FrameSnapshot::capture(&self.camera, &self.wormhole)
    }
}

fn sheet_name(sheet: Sheet) -> &'static str {
    match sheet {
        Sheet::Near => "near",
        Sheet::Far => "far",
    }
}
