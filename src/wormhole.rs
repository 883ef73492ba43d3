//! Wormhole geometry shared by the camera and the lensing stage.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shape of the traversable wormhole.
///
/// Only `radius` affects navigation: it is the throat sphere the camera
/// reflects through when changing sheets. `mass` and `length` are handed to
/// the lensing shader untouched. A changed `radius` takes effect on the next
/// camera update.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Wormhole", inline)]
#[serde(default)]
pub struct WormholeGeometry {
    /// Mass parameter of the lensing function.
    #[schemars(title = "Mass", range(min = 0.00001, max = 4.0), extend("step" = 0.00001))]
    pub mass: f32,
    /// Throat radius; the sheet-crossing boundary.
    #[schemars(title = "Radius", range(min = 0.00001, max = 4.0), extend("step" = 0.00001))]
    pub radius: f32,
    /// Throat length.
    #[schemars(title = "Length", range(min = 0.0, max = 6.0), extend("step" = 0.01))]
    pub length: f32,
}

impl Default for WormholeGeometry {
    fn default() -> Self {
        Self {
            mass: 0.1,
            radius: 0.5,
            length: 0.0,
        }
    }
}

impl WormholeGeometry {
    /// Pack into the 16-byte root-constant block read by the shaders.
    #[must_use]
    pub fn to_uniform(&self) -> WormholeUniform {
        WormholeUniform {
            mass: self.mass,
            radius: self.radius,
            length: self.length,
            _pad: 0.0,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU layout of [`WormholeGeometry`].
pub struct WormholeUniform {
    /// Mass parameter.
    pub mass: f32,
    /// Throat radius.
    pub radius: f32,
    /// Throat length.
    pub length: f32,
    /// Padding for 16-byte alignment.
    pub(crate) _pad: f32,
}
