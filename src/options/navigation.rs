use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Navigation", inline)]
#[serde(default)]
/// How held input is turned into camera motion each frame.
pub struct NavigationOptions {
    /// Movement delta per millisecond of frame time.
    #[schemars(skip)]
    pub step_per_ms: f32,
    /// Delta multiplier while the boost action is held.
    #[schemars(title = "Boost", range(min = 1.0, max = 50.0), extend("step" = 1.0))]
    pub boost_factor: f32,
    /// Roll angle per unit of movement delta.
    #[schemars(skip)]
    pub roll_factor: f32,
    /// Mouse look angle per pixel per millisecond of frame time.
    #[schemars(skip)]
    pub mouse_step_per_ms: f32,
    /// Upper bound on the yaw/pitch applied from one frame of mouse motion.
    #[schemars(skip)]
    pub max_mouse_step: f32,
    /// Distance outside the throat (plus its length) where orbiting starts.
    #[schemars(title = "Orbit Offset", range(min = 0.1, max = 4.0), extend("step" = 0.01))]
    pub orbit_offset: f32,
    /// Orbit revolutions per unit of movement delta.
    #[schemars(title = "Orbit Rate", range(min = 0.05, max = 4.0), extend("step" = 0.05))]
    pub orbit_rate: f32,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            step_per_ms: 1e-4,
            boost_factor: 10.0,
            roll_factor: 2.0,
            mouse_step_per_ms: 1e-4,
            max_mouse_step: PI / 36.0,
            orbit_offset: 0.81,
            orbit_rate: 50.0 / 60.0,
        }
    }
}
