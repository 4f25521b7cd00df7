use serde::{Deserialize, Serialize};

use crate::camera::stereo::{Glasses, StereoProjection};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Stereoscopic rendering parameters.
pub struct StereoOptions {
    /// Whether the view renders a stereo pair instead of a mono pass.
    pub enabled: bool,
    /// Eye separation in world units.
    pub separation: f64,
    /// Anaglyph glasses variant (left filter named first).
    pub glasses: Glasses,
    /// Stereoscopic projection convention.
    pub projection: StereoProjection,
}

impl Default for StereoOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            separation: 0.1,
            glasses: Glasses::RedBlue,
            projection: StereoProjection::OffAxis,
        }
    }
}
