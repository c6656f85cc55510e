use glam::{EulerRot, Mat4, Quat, Vec3, Vec4};

use super::bounds::BoundingBox;
use super::controller::Viewport;
use super::frustum::Frustum;
use crate::error::CameraError;
use crate::input::{EdgeLatch, PointerState};
use crate::options::{ControlOptions, Options, ProjectionOptions};

/// Height of the orthographic eye above the look-at point.
///
/// Known approximation: it assumes the scene sits roughly at ground level
/// and is not adjustable. Geometry taller than this above the look-at point
/// is clipped.
pub const ORTHO_EYE_HEIGHT: f32 = 10.0;

/// Up vector of the top-down orthographic view.
const ORTHO_UP: Vec3 = Vec3::NEG_Z;

/// Smallest orthographic scale the zoom controls can reach.
pub const MIN_ORTHO_SCALE: f32 = 1e-6;

/// Floor for a single multiplicative zoom step.
const MIN_ZOOM_FACTOR: f32 = 0.01;

/// Default eye position: two units back and one up from the origin.
fn default_position() -> Vec3 {
    2.0 * Vec3::Z + Vec3::Y
}

/// Free-flying perspective camera with a top-down orthographic alternative.
///
/// Pose fields may be changed freely between frames; the view and projection
/// matrices only change in [`Camera::update`] and [`Camera::reset`].
#[derive(Debug, Clone)]
pub struct Camera {
    pub(crate) position: Vec3,
    pub(crate) yaw: f32,
    pub(crate) pitch: f32,
    pub(crate) fov: f32,
    pub(crate) ortho_look_at: Vec3,
    pub(crate) ortho_scale: f32,
    pub(crate) ortho_mode: bool,
    pub(crate) is_enabled: bool,

    /// Viewport aspect ratio from the last non-degenerate viewport.
    pub(crate) aspect: f32,
    pub(crate) view: Mat4,
    pub(crate) projection: Mat4,
    /// Mode and eye the current `view` was built from.
    pub(crate) view_ortho: bool,
    pub(crate) view_eye: Vec3,

    pub(crate) previous_pointer: Option<PointerState>,
    pub(crate) current_pointer: Option<PointerState>,
    pub(crate) mode_toggle_latch: EdgeLatch,

    pub(crate) projection_options: ProjectionOptions,
    pub(crate) controls: ControlOptions,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the camera matrices for one frame.
pub struct CameraUniform {
    /// World-to-eye transform.
    pub view: [[f32; 4]; 4],
    /// Eye-to-clip transform.
    pub projection: [[f32; 4]; 4],
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Eye position in world space.
    pub eye: [f32; 3],
    /// 1 when the orthographic projection is active.
    pub ortho: u32,
}

impl Camera {
    /// Create a camera in the default pose, perspective mode.
    #[must_use]
    pub fn new(options: &Options, viewport: Viewport) -> Self {
        let mut camera = Self {
            position: default_position(),
            yaw: 0.0,
            pitch: 0.0,
            fov: options.projection.fov,
            ortho_look_at: Vec3::ZERO,
            ortho_scale: 1.0,
            ortho_mode: false,
            is_enabled: true,
            aspect: viewport.aspect_ratio().unwrap_or(1.0),
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            view_ortho: false,
            view_eye: default_position(),
            previous_pointer: None,
            current_pointer: None,
            mode_toggle_latch: EdgeLatch::default(),
            projection_options: options.projection.clone(),
            controls: options.controls.clone(),
        };
        camera.reset();
        camera
    }

    /// Restore the default pose: eye two units back and one up, level
    /// orientation, ortho view centered on the origin at scale 1.
    ///
    /// Projection mode and field of view are left alone. Both matrices are
    /// rebuilt immediately.
    pub fn reset(&mut self) {
        self.position = default_position();
        self.yaw = 0.0;
        self.pitch = 0.0;
        self.ortho_look_at = Vec3::ZERO;
        self.ortho_scale = 1.0;
        self.update_view_matrix();
        self.update_projection_matrix();
        log::debug!("camera reset to default pose");
    }

    /// Rotation built from the current yaw and pitch (roll is always zero).
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Perspective viewing direction: `-Z` rotated by [`Camera::rotation`].
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    /// Move by `delta` given in camera-local axes, scaled by the move speed.
    pub fn add_to_position(&mut self, delta: Vec3) {
        let rotated = self.rotation() * delta;
        self.position += self.controls.move_speed * rotated;
    }

    pub(crate) fn update_view_matrix(&mut self) {
        if self.ortho_mode {
            let eye = self.ortho_look_at + Vec3::Y * ORTHO_EYE_HEIGHT;
            self.view = Mat4::look_at_rh(eye, self.ortho_look_at, ORTHO_UP);
            self.view_eye = eye;
        } else {
            let rotation = self.rotation();
            let target = self.position + rotation * Vec3::NEG_Z;
            let up = rotation * Vec3::Y;
            self.view = Mat4::look_at_rh(self.position, target, up);
            self.view_eye = self.position;
        }
        self.view_ortho = self.ortho_mode;
    }

    pub(crate) fn update_projection_matrix(&mut self) {
        let p = &self.projection_options;
        self.projection = if self.ortho_mode {
            let height = self.ortho_scale * p.ortho_extent;
            let half_w = height * self.aspect * 0.5;
            let half_h = height * 0.5;
            Mat4::orthographic_rh(
                -half_w,
                half_w,
                -half_h,
                half_h,
                p.ortho_znear,
                p.ortho_zfar,
            )
        } else {
            Mat4::perspective_rh(self.fov, self.aspect, p.znear, p.zfar)
        };
    }

    /// Multiply the ortho scale by `factor`, keeping it strictly positive.
    pub(crate) fn zoom_ortho(&mut self, factor: f32) {
        let factor = factor.max(MIN_ZOOM_FACTOR);
        self.ortho_scale = (self.ortho_scale * factor).max(MIN_ORTHO_SCALE);
    }

    // ── Derived matrices ─────────────────────────────────────────────────

    /// View matrix from the last update.
    #[must_use]
    pub fn view(&self) -> Mat4 {
        self.view
    }

    /// Projection matrix from the last update.
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Combined `projection * view`.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Eye position the current view matrix was built from.
    ///
    /// Like the matrices, this only follows pose and mode changes at the next
    /// [`Camera::update`].
    #[must_use]
    pub fn eye_position(&self) -> Vec3 {
        self.view_eye
    }

    /// Matrices packed for upload to a uniform buffer.
    ///
    /// The eye and mode flag describe the same frame as the matrices.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view: self.view.to_cols_array_2d(),
            projection: self.projection.to_cols_array_2d(),
            view_proj: self.view_projection().to_cols_array_2d(),
            eye: self.view_eye.to_array(),
            ortho: u32::from(self.view_ortho),
        }
    }

    /// Aspect ratio used by the current projection.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect
    }

    // ── Visibility ───────────────────────────────────────────────────────

    /// Whether `bbox` is not entirely outside the current view volume.
    #[must_use]
    pub fn contains(&self, bbox: &BoundingBox) -> bool {
        Frustum::from_view_projection(self.view_projection())
            .intersects_box(bbox)
    }

    /// Same test as [`Camera::contains`].
    #[must_use]
    pub fn is_visible_box(&self, bbox: &BoundingBox) -> bool {
        self.contains(bbox)
    }

    /// Point visibility is not supported: always `false`.
    #[must_use]
    pub fn is_visible_point(&self, _point: Vec3) -> bool {
        false
    }

    /// Drops `w` and defers to [`Camera::is_visible_point`], so always
    /// `false`.
    #[must_use]
    pub fn is_visible_homogeneous(&self, point: Vec4) -> bool {
        self.is_visible_point(point.truncate())
    }

    // ── Pose accessors ───────────────────────────────────────────────────

    /// World-space eye position used in perspective mode.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Set the perspective eye position.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Yaw in radians (unbounded).
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Set yaw in radians.
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
    }

    /// Pitch in radians (unbounded).
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set pitch in radians.
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch;
    }

    /// Perspective vertical field of view in radians.
    #[must_use]
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Set the perspective vertical field of view in radians.
    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
    }

    /// Point the orthographic view is centered on.
    #[must_use]
    pub fn ortho_look_at(&self) -> Vec3 {
        self.ortho_look_at
    }

    /// Set the point the orthographic view is centered on.
    pub fn set_ortho_look_at(&mut self, look_at: Vec3) {
        self.ortho_look_at = look_at;
    }

    /// Orthographic zoom factor (always > 0).
    #[must_use]
    pub fn ortho_scale(&self) -> f32 {
        self.ortho_scale
    }

    /// Set the orthographic zoom factor.
    ///
    /// # Errors
    ///
    /// Returns [`CameraError::InvalidOrthoScale`] unless `scale` is finite
    /// and strictly positive; the current scale is kept in that case.
    pub fn set_ortho_scale(&mut self, scale: f32) -> Result<(), CameraError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(CameraError::InvalidOrthoScale(scale));
        }
        self.ortho_scale = scale;
        Ok(())
    }

    /// Whether the orthographic projection is active.
    #[must_use]
    pub fn is_ortho(&self) -> bool {
        self.ortho_mode
    }

    /// Select the orthographic (`true`) or perspective (`false`) model.
    pub fn set_ortho_mode(&mut self, ortho: bool) {
        self.ortho_mode = ortho;
    }

    /// Advisory enable flag; [`Camera::update`] does not consult it.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.is_enabled
    }

    /// Set the advisory enable flag.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.is_enabled = enabled;
    }

    /// Whether the mode key was held at the last sampled frame.
    #[must_use]
    pub fn mode_key_latched(&self) -> bool {
        self.mode_toggle_latch.is_latched()
    }
}
