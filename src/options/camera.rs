use std::f32::consts::FRAC_PI_2;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Projection", inline)]
#[serde(default)]
/// Projection parameters for both camera models.
pub struct ProjectionOptions {
    /// Initial perspective vertical field of view in radians.
    #[schemars(title = "Field of View", range(min = 0.2, max = 2.0), extend("step" = 0.05))]
    pub fov: f32,
    /// Perspective near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Perspective far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Vertical orthographic extent at scale 1.0 (world units).
    #[schemars(title = "Ortho Extent", range(min = 10.0, max = 10000.0), extend("step" = 10.0))]
    pub ortho_extent: f32,
    /// Orthographic near clipping plane distance.
    #[schemars(skip)]
    pub ortho_znear: f32,
    /// Orthographic far clipping plane distance.
    #[schemars(skip)]
    pub ortho_zfar: f32,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            fov: 0.9,
            znear: 0.1,
            zfar: 10_000.0,
            ortho_extent: 1000.0,
            ortho_znear: 0.1,
            ortho_zfar: 100_000.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
/// Keyboard and pointer sensitivities.
pub struct ControlOptions {
    /// World units travelled per unit of frame-time scalar.
    #[schemars(title = "Move Speed", range(min = 1.0, max = 200.0), extend("step" = 1.0))]
    pub move_speed: f32,
    /// Radians per unit of frame-time scalar for arrow-key rotation (applied
    /// twice per step).
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 6.0), extend("step" = 0.05))]
    pub rotation_speed: f32,
    /// Yaw radians per pixel of horizontal drag.
    #[schemars(skip)]
    pub mouse_yaw_speed: f32,
    /// Pitch radians per pixel of vertical drag.
    #[schemars(skip)]
    pub mouse_pitch_speed: f32,
    /// Orthographic pan per pixel of drag, multiplied by the ortho scale.
    #[schemars(title = "Ortho Pan Speed", range(min = 0.05, max = 5.0), extend("step" = 0.05))]
    pub ortho_pan_speed: f32,
    /// Orthographic zoom step per scroll notch.
    #[schemars(title = "Ortho Zoom Speed", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub ortho_zoom_speed: f32,
    /// Orthographic look-at pan per unit of frame-time scalar for keys.
    #[schemars(skip)]
    pub ortho_key_pan_rate: f32,
    /// Factor applied by the fast modifier and removed by the precise one.
    #[schemars(skip)]
    pub modifier_factor: f32,
    /// Extra multiplier on `modifier_factor` while boost is held.
    #[schemars(skip)]
    pub boost_factor: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            move_speed: 20.0,
            rotation_speed: FRAC_PI_2,
            mouse_yaw_speed: FRAC_PI_2 / 500.0,
            mouse_pitch_speed: FRAC_PI_2 / 300.0,
            ortho_pan_speed: 0.85,
            ortho_zoom_speed: 0.1,
            ortho_key_pan_rate: 10.0,
            modifier_factor: 2.0,
            boost_factor: 10.0,
        }
    }
}
