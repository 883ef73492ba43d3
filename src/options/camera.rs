use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, motion rates and startup pose.
pub struct CameraOptions {
    /// Render width in pixels.
    #[schemars(skip)]
    pub width: u32,
    /// Render height in pixels.
    #[schemars(skip)]
    pub height: u32,
    /// Horizontal field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fov_degrees: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub near_z: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub far_z: f32,
    /// Translation speed multiplier.
    #[schemars(title = "Speed", range(min = 0.5, max = 50.0), extend("step" = 0.5))]
    pub speed: f32,
    /// Rotation sensitivity multiplier.
    #[schemars(title = "Rotate Rate", range(min = 0.1, max = 4.0), extend("step" = 0.05))]
    pub rotate_rate: f32,
    /// Startup eye position.
    #[schemars(skip)]
    pub eye: [f32; 3],
    /// Startup look-at target.
    #[schemars(skip)]
    pub target: [f32; 3],
    /// World up used for the startup look-at.
    #[schemars(skip)]
    pub world_up: [f32; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            fov_degrees: 65.0,
            near_z: 0.1,
            far_z: 100.0,
            speed: 10.0,
            rotate_rate: 1.0,
            eye: [2.0, 0.0, 2.0],
            target: [-1.0, 0.0, -1.0],
            world_up: [0.0, 1.0, 0.0],
        }
    }
}
