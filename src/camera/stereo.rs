//! Stereoscopic view and projection generation.
//!
//! For each eye the camera produces a [`ViewSetup`]: a view matrix, a
//! projection matrix, and the color [`ChannelMask`] the eye is allowed to
//! write. Three projection conventions are supported:
//!
//! - **off-axis**: asymmetric (sheared) frustums sharing one convergence
//!   plane — the physically accurate model. The only mode where the
//!   projection matrix itself differs between eyes.
//! - **parallel**: eye and focus both shifted sideways; symmetric
//!   projection, only the view differs.
//! - **toe-in**: both eyes aimed at the same focus point; symmetric
//!   projection.
//!
//! Matrices are right-handed with [0, 1] depth range (wgpu convention).

use std::ops::BitOr;

use glam::{DMat4, DVec4};
use serde::{Deserialize, Serialize};

use crate::camera::core::{Camera, DEGENERATE_EPS};

/// Focal lengths below this are degenerate for off-axis framing.
const FOCAL_EPS: f64 = 1e-9;

/// Which eye of the stereo pair a setup belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eye {
    /// Left eye, offset by −right·sep/2.
    Left,
    /// Right eye, offset by +right·sep/2.
    Right,
}

impl Eye {
    /// Sign of this eye's lateral offset along the right vector.
    #[must_use]
    pub const fn side(self) -> f64 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    /// The opposite eye.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Anaglyph glasses variant, named left-filter-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glasses {
    /// Red left filter, blue right filter.
    RedBlue,
    /// Red left filter, green right filter.
    RedGreen,
    /// Red left filter, cyan right filter.
    RedCyan,
    /// Blue left filter, red right filter.
    BlueRed,
    /// Green left filter, red right filter.
    GreenRed,
    /// Cyan left filter, red right filter.
    CyanRed,
}

impl Glasses {
    /// Color channels the given eye may write through these glasses.
    ///
    /// The right eye always gets the complementary channel set of the
    /// pair, so each variant yields a distinct left/right split.
    #[must_use]
    pub const fn channel_mask(self, eye: Eye) -> ChannelMask {
        match (self, eye) {
            (Self::RedBlue | Self::RedGreen | Self::RedCyan, Eye::Left)
            | (Self::BlueRed | Self::GreenRed | Self::CyanRed, Eye::Right) => {
                ChannelMask::RED
            }
            (Self::RedBlue, Eye::Right) | (Self::BlueRed, Eye::Left) => {
                ChannelMask::BLUE
            }
            (Self::RedGreen, Eye::Right) | (Self::GreenRed, Eye::Left) => {
                ChannelMask::GREEN
            }
            (Self::RedCyan, Eye::Right) | (Self::CyanRed, Eye::Left) => {
                ChannelMask::CYAN
            }
        }
    }
}

/// Stereoscopic projection convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StereoProjection {
    /// Asymmetric frustums converging at the focal plane.
    OffAxis,
    /// Parallel view axes, symmetric frustums.
    Parallel,
    /// Symmetric frustums aimed at a common focus point.
    ToeIn,
}

/// Set of writable color channels, as RGBA bits.
///
/// The bit layout matches `wgpu::ColorWrites` (RED = 1, GREEN = 2,
/// BLUE = 4, ALPHA = 8) so renderers can pass [`ChannelMask::bits`]
/// straight through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelMask(u32);

impl ChannelMask {
    /// No channels writable.
    pub const NONE: Self = Self(0);
    /// Red channel.
    pub const RED: Self = Self(1);
    /// Green channel.
    pub const GREEN: Self = Self(2);
    /// Blue channel.
    pub const BLUE: Self = Self(4);
    /// Alpha channel.
    pub const ALPHA: Self = Self(8);
    /// Green and blue channels.
    pub const CYAN: Self = Self(2 | 4);
    /// All three color channels.
    pub const COLOR: Self = Self(1 | 2 | 4);
    /// All channels including alpha.
    pub const ALL: Self = Self(1 | 2 | 4 | 8);

    /// Raw RGBA bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether every channel of `other` is writable in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Complement within the three color channels; alpha is untouched.
    #[must_use]
    pub const fn rgb_complement(self) -> Self {
        Self(!self.0 & Self::COLOR.0)
    }
}

impl BitOr for ChannelMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Per-pass rendering parameters: view and projection matrices plus the
/// writable channel set. Consumed by the (external) renderer.
#[derive(Debug, Clone, Copy)]
pub struct ViewSetup {
    /// World-to-eye view matrix.
    pub view: DMat4,
    /// Eye-to-clip projection matrix.
    pub projection: DMat4,
    /// Color channels this pass may write.
    pub mask: ChannelMask,
}

/// Horizontal and vertical near-plane frustum edges of one eye.
#[derive(Debug, Clone, Copy)]
pub struct FrustumEdges {
    /// Left edge at the near plane.
    pub left: f64,
    /// Right edge at the near plane.
    pub right: f64,
    /// Bottom edge at the near plane.
    pub bottom: f64,
    /// Top edge at the near plane.
    pub top: f64,
}

impl Camera {
    /// View setup for mono rendering: all channels writable, symmetric
    /// projection, view along the current direction.
    ///
    /// `look_to` along the stored direction rather than look-at on the
    /// point of interest, so the setup stays well-defined when the point
    /// of interest sits on the eye.
    #[must_use]
    pub fn mono_setup(&self) -> ViewSetup {
        ViewSetup {
            view: DMat4::look_to_rh(self.pos, self.dir, self.vup),
            projection: self.symmetric_projection(),
            mask: ChannelMask::ALL,
        }
    }

    /// View setup for one eye of the stereo pair.
    ///
    /// With `sep == 0` both eyes coincide and all three modes degenerate
    /// to the mono framing (no division by the separation anywhere).
    #[must_use]
    pub fn stereo_setup(&self, eye: Eye) -> ViewSetup {
        let offset = self.right * (eye.side() * self.sep * 0.5);
        let eye_pos = self.pos + offset;
        let focus = match self.stereo_proj {
            // Off-axis keeps the view axes parallel; one unit of direction
            // keeps vergence at the original focal plane.
            StereoProjection::OffAxis => self.poi + offset + self.dir,
            StereoProjection::Parallel => self.poi + offset,
            StereoProjection::ToeIn => self.poi,
        };
        let projection = match self.stereo_proj {
            StereoProjection::OffAxis => self.off_axis_projection(eye),
            StereoProjection::Parallel | StereoProjection::ToeIn => {
                self.symmetric_projection()
            }
        };
        // No look-at solution when the focus sits on the eye or straight
        // along vup (eye moved directly above a stale poi); aim along the
        // stored direction instead.
        let aim = focus - eye_pos;
        let view = if aim.length() < FOCAL_EPS
            || aim.normalize().cross(self.vup).length() < DEGENERATE_EPS
        {
            DMat4::look_to_rh(eye_pos, self.dir, self.vup)
        } else {
            DMat4::look_at_rh(eye_pos, focus, self.vup)
        };
        ViewSetup {
            view,
            projection,
            mask: self.glasses.channel_mask(eye),
        }
    }

    /// Both eyes' view setups, left first.
    #[must_use]
    pub fn stereo_setups(&self) -> [ViewSetup; 2] {
        [self.stereo_setup(Eye::Left), self.stereo_setup(Eye::Right)]
    }

    /// Off-axis near-plane frustum edges for one eye.
    ///
    /// `None` when the point of interest sits on the eye: the focal
    /// length is then undefined and no asymmetric framing exists.
    #[must_use]
    pub fn off_axis_frustum(&self, eye: Eye) -> Option<FrustumEdges> {
        let focal = (self.pos - self.poi).length();
        if focal < FOCAL_EPS {
            return None;
        }
        let wd2 = self.znear * (self.fovy.to_radians() * 0.5).tan();
        let ndfl = self.znear / focal;
        let shift = -eye.side() * 0.5 * self.sep * ndfl;
        Some(FrustumEdges {
            left: -self.aspect * wd2 + shift,
            right: self.aspect * wd2 + shift,
            bottom: -wd2,
            top: wd2,
        })
    }

    /// Symmetric perspective projection shared by mono, parallel, and
    /// toe-in rendering.
    fn symmetric_projection(&self) -> DMat4 {
        DMat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    fn off_axis_projection(&self, eye: Eye) -> DMat4 {
        self.off_axis_frustum(eye).map_or_else(
            || {
                log::warn!(
                    "off-axis stereo with the point of interest on the eye; \
                     falling back to symmetric framing"
                );
                self.symmetric_projection()
            },
            |edges| frustum_rh(&edges, self.znear, self.zfar),
        )
    }
}

/// Right-handed frustum projection with [0, 1] depth range from explicit
/// near-plane edges. Agrees with `DMat4::perspective_rh` when the edges
/// are symmetric.
fn frustum_rh(edges: &FrustumEdges, znear: f64, zfar: f64) -> DMat4 {
    let inv_w = 1.0 / (edges.right - edges.left);
    let inv_h = 1.0 / (edges.top - edges.bottom);
    let r = zfar / (znear - zfar);
    DMat4::from_cols(
        DVec4::new(2.0 * znear * inv_w, 0.0, 0.0, 0.0),
        DVec4::new(0.0, 2.0 * znear * inv_h, 0.0, 0.0),
        DVec4::new(
            (edges.right + edges.left) * inv_w,
            (edges.top + edges.bottom) * inv_h,
            r,
            -1.0,
        ),
        DVec4::new(0.0, 0.0, r * znear, 0.0),
    )
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;

    fn assert_mat_eq(a: DMat4, b: DMat4, tol: f64) {
        let a = a.to_cols_array();
        let b = b.to_cols_array();
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < tol, "matrices differ: {x} vs {y}");
        }
    }

    fn off_axis_camera() -> Camera {
        let mut camera = Camera::new();
        camera.set_stereo_params(0.1, Glasses::RedCyan);
        camera.set_stereo_proj(StereoProjection::OffAxis);
        camera.set_fovy(90.0);
        camera.set_clip_planes(0.5, 100.0);
        camera
    }

    #[test]
    fn red_cyan_off_axis_scenario() {
        // Eye at (0,0,10) on the poi at the origin: focal length 10.
        let camera = off_axis_camera();
        let [left, right] = camera.stereo_setups();
        assert_eq!(left.mask, ChannelMask::RED);
        assert_eq!(right.mask, ChannelMask::CYAN);

        let fl = camera.off_axis_frustum(Eye::Left).unwrap();
        let fr = camera.off_axis_frustum(Eye::Right).unwrap();
        // Each eye's edges are offset from the other's by sep·near/focal.
        let expected = 0.1 * 0.5 / 10.0;
        assert!((fl.left - fr.left - expected).abs() < 1e-12);
        assert!((fl.right - fr.right - expected).abs() < 1e-12);
        assert_eq!(fl.bottom, fr.bottom);
        assert_eq!(fl.top, fr.top);
    }

    #[test]
    fn off_axis_shifts_are_antisymmetric() {
        for sep in [0.0, 0.05, 0.1, 2.0, -0.3] {
            let mut camera = off_axis_camera();
            camera.set_stereo_params(sep, Glasses::RedBlue);
            let fl = camera.off_axis_frustum(Eye::Left).unwrap();
            let fr = camera.off_axis_frustum(Eye::Right).unwrap();
            let shift_l = (fl.left + fl.right) * 0.5;
            let shift_r = (fr.left + fr.right) * 0.5;
            assert!(
                (shift_l + shift_r).abs() < 1e-12,
                "shifts {shift_l} and {shift_r} do not cancel for sep {sep}"
            );
        }
    }

    #[test]
    fn only_off_axis_differs_in_projection_between_eyes() {
        for (proj, differs) in [
            (StereoProjection::OffAxis, true),
            (StereoProjection::Parallel, false),
            (StereoProjection::ToeIn, false),
        ] {
            let mut camera = off_axis_camera();
            camera.set_stereo_proj(proj);
            let [left, right] = camera.stereo_setups();
            let same = left
                .projection
                .to_cols_array()
                .iter()
                .zip(right.projection.to_cols_array().iter())
                .all(|(a, b)| (a - b).abs() < 1e-15);
            assert_eq!(!same, differs, "mode {proj:?}");
        }
    }

    #[test]
    fn zero_separation_degenerates_to_mono() {
        for proj in [
            StereoProjection::OffAxis,
            StereoProjection::Parallel,
            StereoProjection::ToeIn,
        ] {
            let mut camera = off_axis_camera();
            camera.set_stereo_proj(proj);
            camera.set_stereo_params(0.0, Glasses::RedCyan);
            let [left, right] = camera.stereo_setups();
            assert_mat_eq(left.view, right.view, 1e-15);
            assert_mat_eq(left.projection, right.projection, 1e-15);
            // Channel split remains: only the geometry collapses.
            assert_ne!(left.mask, right.mask);
        }
    }

    #[test]
    fn swapping_eyes_and_negating_sep_reproduces_the_pair() {
        for proj in [
            StereoProjection::OffAxis,
            StereoProjection::Parallel,
            StereoProjection::ToeIn,
        ] {
            let mut camera = off_axis_camera();
            camera.set_stereo_proj(proj);
            let mut mirrored = camera.clone();
            mirrored.set_stereo_params(-camera.sep(), camera.glasses());

            for eye in [Eye::Left, Eye::Right] {
                let a = camera.stereo_setup(eye);
                let b = mirrored.stereo_setup(eye.other());
                assert_mat_eq(a.view, b.view, 1e-15);
                assert_mat_eq(a.projection, b.projection, 1e-15);
            }
        }
    }

    #[test]
    fn channel_masks_follow_the_glasses_table() {
        let table = [
            (Glasses::RedBlue, ChannelMask::RED, ChannelMask::BLUE),
            (Glasses::RedGreen, ChannelMask::RED, ChannelMask::GREEN),
            (Glasses::RedCyan, ChannelMask::RED, ChannelMask::CYAN),
            (Glasses::BlueRed, ChannelMask::BLUE, ChannelMask::RED),
            (Glasses::GreenRed, ChannelMask::GREEN, ChannelMask::RED),
            (Glasses::CyanRed, ChannelMask::CYAN, ChannelMask::RED),
        ];
        for (glasses, left, right) in table {
            assert_eq!(glasses.channel_mask(Eye::Left), left, "{glasses:?}");
            assert_eq!(glasses.channel_mask(Eye::Right), right, "{glasses:?}");
        }
    }

    #[test]
    fn cyan_pair_masks_are_rgb_complements() {
        // Only the red/cyan pair covers all three color channels, so it is
        // the only swapped pair whose masks complement within RGB; the
        // single-channel pairs leave one channel dark for both eyes.
        for eye in [Eye::Left, Eye::Right] {
            assert_eq!(
                Glasses::RedCyan.channel_mask(eye).rgb_complement(),
                Glasses::CyanRed.channel_mask(eye),
                "{eye:?}"
            );
            assert_eq!(
                Glasses::RedCyan
                    .channel_mask(eye)
                    .bits()
                    | Glasses::RedCyan.channel_mask(eye.other()).bits(),
                ChannelMask::COLOR.bits()
            );
        }
    }

    #[test]
    fn all_six_variants_have_distinct_channel_splits() {
        let variants = [
            Glasses::RedBlue,
            Glasses::RedGreen,
            Glasses::RedCyan,
            Glasses::BlueRed,
            Glasses::GreenRed,
            Glasses::CyanRed,
        ];
        let splits: Vec<_> = variants
            .iter()
            .map(|g| (g.channel_mask(Eye::Left), g.channel_mask(Eye::Right)))
            .collect();
        for (i, a) in splits.iter().enumerate() {
            for b in splits.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
            // Left and right never share a channel.
            assert_eq!(a.0.bits() & a.1.bits(), 0);
        }
    }

    #[test]
    fn symmetric_frustum_matches_perspective() {
        let camera = off_axis_camera();
        let wd2 = 0.5 * (90.0_f64.to_radians() * 0.5).tan();
        let edges = FrustumEdges {
            left: -camera.aspect() * wd2,
            right: camera.aspect() * wd2,
            bottom: -wd2,
            top: wd2,
        };
        let explicit = frustum_rh(&edges, 0.5, 100.0);
        let reference = DMat4::perspective_rh(
            90.0_f64.to_radians(),
            camera.aspect(),
            0.5,
            100.0,
        );
        assert_mat_eq(explicit, reference, 1e-12);
    }

    #[test]
    fn poi_on_the_eye_falls_back_to_symmetric_framing() {
        let mut camera = off_axis_camera();
        camera.set_eye_pos(camera.poi());
        assert!(camera.off_axis_frustum(Eye::Left).is_none());
        let [left, right] = camera.stereo_setups();
        for setup in [left, right] {
            for v in setup.projection.to_cols_array() {
                assert!(v.is_finite());
            }
        }
        assert_mat_eq(left.projection, right.projection, 1e-15);
    }

    #[test]
    fn eye_straight_above_the_focus_keeps_a_finite_view() {
        // Moving the eye directly above a stale poi puts the toe-in focus
        // exactly along vup; the view must still be finite.
        let mut camera = off_axis_camera();
        camera.set_stereo_proj(StereoProjection::ToeIn);
        camera.set_eye_pos(DVec3::new(0.0, 5.0, 0.0));
        for sep in [0.0, 0.1] {
            camera.set_stereo_params(sep, Glasses::RedCyan);
            for setup in camera.stereo_setups() {
                for v in setup.view.to_cols_array() {
                    assert!(v.is_finite(), "sep {sep}");
                }
            }
        }
    }

    #[test]
    fn mono_setup_writes_all_channels() {
        let camera = Camera::new();
        let setup = camera.mono_setup();
        assert_eq!(setup.mask, ChannelMask::ALL);
        assert!(setup.mask.contains(ChannelMask::RED));
        assert_mat_eq(
            setup.view,
            DMat4::look_at_rh(camera.pos(), DVec3::ZERO, DVec3::Y),
            1e-12,
        );
    }
}
