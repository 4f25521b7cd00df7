//! Mouse-driven camera control.
//!
//! Maps 2D drag deltas, roll, and scroll input onto the camera's rotation
//! strategies. Which strategy a drag drives is selected by [`DragMode`];
//! the hosting view forwards raw input events and never touches the
//! camera frame directly.

use glam::DVec2;

use crate::camera::core::Camera;
use crate::camera::rotation::WorldAxis;
use crate::options::{CameraOptions, Options};

/// Zoom distance limits, in world units.
const MIN_ZOOM_DIST: f64 = 1e-3;
const MAX_ZOOM_DIST: f64 = 1e6;

/// Rotation strategy driven by a mouse drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragMode {
    /// Orbit around the origin about the camera's own up/right vectors.
    #[default]
    LocalPivot,
    /// Rotate about the fixed world z (horizontal) and x (vertical) axes.
    WorldAxes,
    /// Orbit on a sphere around the point of interest (world-z up).
    SphericalOrbit,
}

/// Interactive camera controller for one hosting view.
pub struct CameraController {
    /// The camera being driven.
    pub camera: Camera,
    /// Active drag strategy.
    pub mode: DragMode,
    rotate_speed: f64,
    roll_speed: f64,
    zoom_speed: f64,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(&CameraOptions::default())
    }
}

impl CameraController {
    /// Controller with a default camera configured from `options`.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        let mut camera = Camera::new();
        camera.set_fovy(options.fovy);
        camera.set_clip_planes(options.znear, options.zfar);
        Self {
            camera,
            mode: DragMode::default(),
            rotate_speed: options.rotate_speed,
            roll_speed: options.roll_speed,
            zoom_speed: options.zoom_speed,
        }
    }

    /// Re-apply runtime options (projection parameters, speeds, stereo).
    pub fn apply_options(&mut self, options: &Options) {
        self.camera.set_fovy(options.camera.fovy);
        self.camera
            .set_clip_planes(options.camera.znear, options.camera.zfar);
        self.camera
            .set_stereo_params(options.stereo.separation, options.stereo.glasses);
        self.camera.set_stereo_proj(options.stereo.projection);
        self.rotate_speed = options.camera.rotate_speed;
        self.roll_speed = options.camera.roll_speed;
        self.zoom_speed = options.camera.zoom_speed;
    }

    /// Apply a mouse-drag delta (pixels) through the active strategy.
    pub fn rotate(&mut self, delta: DVec2) {
        let dx = -delta.x * self.rotate_speed;
        let dy = -delta.y * self.rotate_speed;
        match self.mode {
            DragMode::LocalPivot => {
                self.camera.fix_rot_around_vup(dx);
                self.camera.fix_rot_around_right(dy);
            }
            DragMode::WorldAxes => {
                self.camera.rotate_world(WorldAxis::Z, dx);
                self.camera.rotate_world(WorldAxis::X, dy);
            }
            DragMode::SphericalOrbit => {
                let sph = self.camera.spherical_eye_pos();
                let _ = self.camera.move_on_sphere(
                    sph.theta + dy,
                    sph.phi + dx,
                    sph.dist,
                );
            }
        }
    }

    /// Roll about the viewing direction.
    pub fn roll(&mut self, delta: f64) {
        self.camera.fix_rot_around_dir(delta * self.roll_speed);
    }

    /// Scale the eye's distance from the point of interest.
    ///
    /// Pure radial move: the orientation frame is untouched. A camera
    /// sitting on its point of interest cannot zoom (no radial axis).
    pub fn zoom(&mut self, delta: f64) {
        let offset = self.camera.pos() - self.camera.poi();
        let dist = offset.length();
        if dist < MIN_ZOOM_DIST {
            return;
        }
        let scaled = (dist * (1.0 - delta * self.zoom_speed))
            .clamp(MIN_ZOOM_DIST, MAX_ZOOM_DIST);
        self.camera
            .set_eye_pos(self.camera.poi() + offset * (scaled / dist));
    }

    /// Propagate a viewport resize to the camera.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_size(width, height);
    }
}
