use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f64,
    /// Near clipping plane distance.
    pub znear: f64,
    /// Far clipping plane distance.
    pub zfar: f64,
    /// Rotation sensitivity in radians per pixel of drag.
    pub rotate_speed: f64,
    /// Roll sensitivity in radians per input step.
    pub roll_speed: f64,
    /// Zoom sensitivity per scroll step.
    pub zoom_speed: f64,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 90.0,
            znear: 0.1,
            zfar: 1000.0,
            rotate_speed: 0.01,
            roll_speed: 0.01,
            zoom_speed: 0.05,
        }
    }
}
