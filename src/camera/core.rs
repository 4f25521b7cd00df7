//! Core camera state and basis maintenance.
//!
//! The camera owns an orthonormal viewing frame {dir, vup, right} plus the
//! projection and stereo parameters. `right` is derived, never set by
//! callers: every mutator that touches `dir` or `vup` recomputes it as
//! `normalize(dir × vup)` before returning, so readers always observe a
//! consistent frame.

use glam::{DVec3, Mat4};

use crate::camera::stereo::{
    ChannelMask, Glasses, StereoProjection, ViewSetup,
};

/// Length threshold below which a direction or offset is degenerate.
pub(crate) const DEGENERATE_EPS: f64 = 1e-12;

/// Viewing state for one hosting view.
///
/// Constructed once per view and mutated continuously by user input; all
/// math is double precision, downcast to `f32` only at the GPU boundary
/// ([`CameraUniform`]).
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye position in world space.
    pub(crate) pos: DVec3,
    /// Forward viewing direction (unit).
    pub(crate) dir: DVec3,
    /// View-up reference vector (unit).
    pub(crate) vup: DVec3,
    /// Derived right vector, `normalize(dir × vup)`.
    pub(crate) right: DVec3,
    /// Look-at target (point of interest).
    pub(crate) poi: DVec3,
    /// Vertical field of view in degrees.
    pub(crate) fovy: f64,
    /// Near clipping plane distance.
    pub(crate) znear: f64,
    /// Far clipping plane distance.
    pub(crate) zfar: f64,
    /// Viewport width in pixels.
    pub(crate) width: u32,
    /// Viewport height in pixels.
    pub(crate) height: u32,
    /// Viewport aspect ratio (width / height).
    pub(crate) aspect: f64,
    /// Stereo eye separation in world units.
    pub(crate) sep: f64,
    /// Anaglyph glasses variant.
    pub(crate) glasses: Glasses,
    /// Stereoscopic projection variant.
    pub(crate) stereo_proj: StereoProjection,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Camera with the default placement: eye at (0, 0, 10) looking down
    /// −z at the origin, y up, 90° vertical field of view.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pos: DVec3::new(0.0, 0.0, 10.0),
            dir: DVec3::NEG_Z,
            vup: DVec3::Y,
            right: DVec3::X,
            poi: DVec3::ZERO,
            fovy: 90.0,
            znear: 0.1,
            zfar: 1000.0,
            width: 1280,
            height: 720,
            aspect: 1280.0 / 720.0,
            sep: 0.1,
            glasses: Glasses::RedBlue,
            stereo_proj: StereoProjection::OffAxis,
        }
    }

    /// Eye position.
    #[must_use]
    pub const fn pos(&self) -> DVec3 {
        self.pos
    }

    /// Forward viewing direction (unit).
    #[must_use]
    pub const fn dir(&self) -> DVec3 {
        self.dir
    }

    /// View-up reference vector (unit).
    #[must_use]
    pub const fn vup(&self) -> DVec3 {
        self.vup
    }

    /// Derived right vector (unit).
    #[must_use]
    pub const fn right(&self) -> DVec3 {
        self.right
    }

    /// Point of interest.
    #[must_use]
    pub const fn poi(&self) -> DVec3 {
        self.poi
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub const fn fovy(&self) -> f64 {
        self.fovy
    }

    /// Near clipping plane distance.
    #[must_use]
    pub const fn znear(&self) -> f64 {
        self.znear
    }

    /// Far clipping plane distance.
    #[must_use]
    pub const fn zfar(&self) -> f64 {
        self.zfar
    }

    /// Viewport width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Viewport height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Viewport aspect ratio (width / height).
    #[must_use]
    pub const fn aspect(&self) -> f64 {
        self.aspect
    }

    /// Stereo eye separation in world units.
    #[must_use]
    pub const fn sep(&self) -> f64 {
        self.sep
    }

    /// Anaglyph glasses variant.
    #[must_use]
    pub const fn glasses(&self) -> Glasses {
        self.glasses
    }

    /// Stereoscopic projection variant.
    #[must_use]
    pub const fn stereo_proj(&self) -> StereoProjection {
        self.stereo_proj
    }

    /// Move the eye. Direction, up, and right are untouched.
    pub fn set_eye_pos(&mut self, pos: DVec3) {
        self.pos = pos;
    }

    /// Set the forward direction (normalized) and re-derive `right`.
    ///
    /// A ~zero vector is rejected and the frame left unchanged.
    pub fn set_dir(&mut self, dir: DVec3) {
        if dir.length() < DEGENERATE_EPS {
            log::debug!("set_dir rejected ~zero direction {dir}");
            return;
        }
        self.dir = dir.normalize();
        self.update_right();
    }

    /// Set the view-up reference (normalized) and re-derive `right`.
    ///
    /// A ~zero vector is rejected and the frame left unchanged.
    pub fn set_vup(&mut self, vup: DVec3) {
        if vup.length() < DEGENERATE_EPS {
            log::debug!("set_vup rejected ~zero up vector {vup}");
            return;
        }
        self.vup = vup.normalize();
        self.update_right();
    }

    /// Set the point of interest and aim the camera at it.
    ///
    /// The direction is recomputed as `normalize(poi − pos)` unless the
    /// point coincides with the eye, in which case the previous direction
    /// is kept (the point itself is still stored).
    pub fn set_poi(&mut self, poi: DVec3) {
        self.poi = poi;
        let offset = poi - self.pos;
        if offset.length() < DEGENERATE_EPS {
            log::debug!("set_poi with point on the eye; keeping direction");
            return;
        }
        self.dir = offset.normalize();
        self.update_right();
    }

    /// Set the vertical field of view in degrees.
    pub fn set_fovy(&mut self, fovy: f64) {
        self.fovy = fovy;
    }

    /// Set the near and far clipping plane distances.
    pub fn set_clip_planes(&mut self, znear: f64, zfar: f64) {
        self.znear = znear;
        self.zfar = zfar;
    }

    /// Set the viewport size and recompute the aspect ratio.
    pub fn set_size(&mut self, width: u32, height: u32) {
        if height == 0 {
            log::debug!("set_size rejected zero-height viewport");
            return;
        }
        self.width = width;
        self.height = height;
        self.aspect = f64::from(width) / f64::from(height);
    }

    /// Set the stereo eye separation and glasses variant.
    pub fn set_stereo_params(&mut self, sep: f64, glasses: Glasses) {
        self.sep = sep;
        self.glasses = glasses;
    }

    /// Select the stereoscopic projection variant.
    pub fn set_stereo_proj(&mut self, proj: StereoProjection) {
        self.stereo_proj = proj;
    }

    /// Re-derive `right = normalize(dir × vup)`.
    ///
    /// When dir and vup are (near) parallel the cross product degenerates;
    /// `right` then keeps its last valid value.
    pub(crate) fn update_right(&mut self) {
        let right = self.dir.cross(self.vup);
        if right.length() < DEGENERATE_EPS {
            log::debug!("dir parallel to vup; keeping previous right vector");
            return;
        }
        self.right = right.normalize();
    }
}

/// GPU uniform buffer contents for one eye pass.
///
/// Layout mirrors what the renderer's shaders expect; all fields are
/// downcast from the camera's double-precision state.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Writable color channels for this pass (RGBA bit set).
    pub channel_mask: u32,
    /// Padding for GPU alignment.
    pub(crate) _pad: [f32; 3],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Uniform with identity view-projection and all channels writable.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0, 0.0, 10.0],
            aspect: 16.0 / 9.0,
            forward: [0.0, 0.0, -1.0],
            fovy: 90.0,
            channel_mask: ChannelMask::ALL.bits(),
            _pad: [0.0; 3],
        }
    }

    /// Refresh all fields from the camera and one eye's view setup.
    pub fn update(&mut self, camera: &Camera, setup: &ViewSetup) {
        self.view_proj =
            (setup.projection * setup.view).as_mat4().to_cols_array_2d();
        self.position = camera.pos().as_vec3().to_array();
        self.aspect = camera.aspect() as f32;
        self.forward = camera.dir().as_vec3().to_array();
        self.fovy = camera.fovy() as f32;
        self.channel_mask = setup.mask.bits();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::stereo::ChannelMask;

    fn assert_orthonormal(camera: &Camera) {
        assert!((camera.dir().length() - 1.0).abs() < 1e-12);
        assert!((camera.vup().length() - 1.0).abs() < 1e-12);
        assert!((camera.right().length() - 1.0).abs() < 1e-12);
        assert!(camera.right().dot(camera.dir()).abs() < 1e-12);
        assert!(camera.right().dot(camera.vup()).abs() < 1e-12);
    }

    #[test]
    fn default_frame_is_right_handed() {
        let camera = Camera::new();
        assert_eq!(camera.pos(), DVec3::new(0.0, 0.0, 10.0));
        assert_eq!(camera.dir(), DVec3::NEG_Z);
        assert_eq!(camera.vup(), DVec3::Y);
        assert_eq!(camera.right(), DVec3::X);
        assert_orthonormal(&camera);
    }

    #[test]
    fn set_poi_aims_the_camera() {
        let mut camera = Camera::new();
        camera.set_poi(DVec3::new(10.0, 0.0, 10.0));
        assert!((camera.dir() - DVec3::X).length() < 1e-12);
        assert_orthonormal(&camera);
    }

    #[test]
    fn set_poi_on_the_eye_keeps_direction() {
        let mut camera = Camera::new();
        let dir = camera.dir();
        camera.set_poi(camera.pos());
        assert_eq!(camera.dir(), dir);
        assert_eq!(camera.poi(), DVec3::new(0.0, 0.0, 10.0));
    }

    #[test]
    fn degenerate_up_keeps_previous_right() {
        let mut camera = Camera::new();
        let right = camera.right();
        // vup parallel to dir: cross product degenerates
        camera.set_vup(DVec3::NEG_Z);
        assert_eq!(camera.right(), right);
    }

    #[test]
    fn setters_normalize_their_input() {
        let mut camera = Camera::new();
        camera.set_dir(DVec3::new(0.0, 0.0, -7.0));
        camera.set_vup(DVec3::new(0.0, 3.0, 0.0));
        assert_orthonormal(&camera);
    }

    #[test]
    fn mutator_sequence_preserves_the_invariant() {
        let mut camera = Camera::new();
        camera.set_eye_pos(DVec3::new(2.0, -1.0, 4.0));
        camera.set_poi(DVec3::new(0.5, 0.5, 0.5));
        camera.set_vup(DVec3::new(0.2, 1.0, 0.1));
        camera.set_dir(DVec3::new(1.0, 2.0, -1.0));
        assert_orthonormal(&camera);
    }

    #[test]
    fn zero_height_resize_is_rejected() {
        let mut camera = Camera::new();
        let aspect = camera.aspect();
        camera.set_size(800, 0);
        assert_eq!(camera.aspect(), aspect);
        camera.set_size(800, 400);
        assert_eq!(camera.aspect(), 2.0);
    }

    #[test]
    fn uniform_tracks_the_active_setup() {
        let camera = Camera::new();
        let setup = camera.mono_setup();
        let mut uniform = CameraUniform::new();
        uniform.update(&camera, &setup);
        assert_eq!(uniform.channel_mask, ChannelMask::ALL.bits());
        assert_eq!(uniform.forward, [0.0, 0.0, -1.0]);
        assert_eq!(uniform.fovy, 90.0);
    }
}
