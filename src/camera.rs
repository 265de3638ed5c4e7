use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

pub const DEFAULT_NEAR_PLANE: f32 = -100.0;
pub const DEFAULT_FAR_PLANE: f32 = 100.0;

/// Smallest near plane handed to a perspective projection
pub const MIN_PERSPECTIVE_NEAR: f32 = 0.1;

/// Scalar setters treat changes below this as "no change"
pub const SETTER_EPSILON: f32 = 1e-6;

/// Projection kind, fixed for the lifetime of a camera
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    Orthographic,
    Perspective,
}

/// Camera with a world pose and cached view/projection data.
///
/// `zoom_or_fov` is the orthographic half-extent scale or, for
/// perspective cameras, the vertical field of view in radians.
/// Rotation is stored as Euler angles (x = pitch, y = yaw, z = roll)
/// composed as `Rz * Ry * Rx`.
#[derive(Debug, Clone)]
pub struct Camera {
    projection: Projection,
    zoom_or_fov: f32,
    aspect_ratio: f32,
    near_plane: f32,
    far_plane: f32,
    position: Vec3,
    rotation: Vec3,
    transform: Mat4,
    projection_matrix: Mat4,
}

impl Camera {
    /// Create a camera with the default clipping planes (-100, 100)
    pub fn new(projection: Projection, zoom_or_fov: f32, aspect_ratio: f32) -> Self {
        Self::with_planes(
            projection,
            zoom_or_fov,
            aspect_ratio,
            DEFAULT_NEAR_PLANE,
            DEFAULT_FAR_PLANE,
        )
    }

    /// Create a camera at the origin with explicit clipping planes.
    ///
    /// `aspect_ratio` must be positive; a zero aspect yields non-finite
    /// projection values rather than an error.
    pub fn with_planes(
        projection: Projection,
        zoom_or_fov: f32,
        aspect_ratio: f32,
        near_plane: f32,
        far_plane: f32,
    ) -> Self {
        log::trace!(
            "Camera::with_planes({:?}, {}, {}, {}, {})",
            projection,
            zoom_or_fov,
            aspect_ratio,
            near_plane,
            far_plane
        );

        let mut camera = Self {
            projection,
            zoom_or_fov,
            aspect_ratio,
            near_plane,
            far_plane,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            transform: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
        };
        camera.recalculate_view();
        camera.recalculate_projection();
        camera
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn zoom_or_fov(&self) -> f32 {
        self.zoom_or_fov
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn near_plane(&self) -> f32 {
        self.near_plane
    }

    pub fn far_plane(&self) -> f32 {
        self.far_plane
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// World transform: `translate(position) * rotation`
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    /// World transform with the translation removed
    pub fn rotation_matrix(&self) -> Mat4 {
        Mat4::from_translation(-self.position) * self.transform
    }

    /// World space to camera space
    pub fn view_matrix(&self) -> Mat4 {
        self.transform.inverse()
    }

    /// Camera space to clip space
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection_matrix
    }

    /// Local forward axis (-Z at identity rotation)
    pub fn forward(&self) -> Vec3 {
        -self.rotation_matrix().z_axis.truncate()
    }

    /// Local right axis (+X at identity rotation)
    pub fn right(&self) -> Vec3 {
        self.rotation_matrix().x_axis.truncate()
    }

    /// Local up axis (+Y at identity rotation)
    pub fn up(&self) -> Vec3 {
        self.rotation_matrix().y_axis.truncate()
    }

    /// View matrix built from the local axes with a look-at construction.
    /// Matches `view_matrix` for any pose.
    pub fn look_at_view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), self.up())
    }

    pub fn set_zoom_or_fov(&mut self, zoom_or_fov: f32) {
        if (self.zoom_or_fov - zoom_or_fov).abs() < SETTER_EPSILON {
            return;
        }
        self.zoom_or_fov = zoom_or_fov;
        self.recalculate_projection();
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        if (self.aspect_ratio - aspect_ratio).abs() < SETTER_EPSILON {
            return;
        }
        self.aspect_ratio = aspect_ratio;
        self.recalculate_projection();
    }

    pub fn set_near_plane(&mut self, near_plane: f32) {
        if (self.near_plane - near_plane).abs() < SETTER_EPSILON {
            return;
        }
        self.near_plane = near_plane;
        self.recalculate_projection();
    }

    pub fn set_far_plane(&mut self, far_plane: f32) {
        if (self.far_plane - far_plane).abs() < SETTER_EPSILON {
            return;
        }
        self.far_plane = far_plane;
        self.recalculate_projection();
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.recalculate_view();
    }

    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
        self.recalculate_view();
    }

    fn recalculate_projection(&mut self) {
        self.projection_matrix = match self.projection {
            Projection::Orthographic => {
                let half_width = self.aspect_ratio * self.zoom_or_fov;
                Mat4::orthographic_rh_gl(
                    -half_width,
                    half_width,
                    -1.0,
                    1.0,
                    self.near_plane,
                    self.far_plane,
                )
            }
            Projection::Perspective => Mat4::perspective_rh_gl(
                self.zoom_or_fov,
                self.aspect_ratio,
                self.near_plane.max(MIN_PERSPECTIVE_NEAR),
                self.far_plane,
            ),
        };
        log::debug!(
            "{:?} projection rebuilt (zoom_or_fov={}, aspect={}, near={}, far={})",
            self.projection,
            self.zoom_or_fov,
            self.aspect_ratio,
            self.near_plane,
            self.far_plane
        );
    }

    fn recalculate_view(&mut self) {
        let rotation = Mat4::from_rotation_z(self.rotation.z)
            * Mat4::from_rotation_y(self.rotation.y)
            * Mat4::from_rotation_x(self.rotation.x);
        self.transform = Mat4::from_translation(self.position) * rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const TOLERANCE: f32 = 1e-5;

    #[test]
    fn test_new_camera_starts_at_origin() {
        let camera = Camera::new(Projection::Orthographic, 1.0, 1.0);
        assert_eq!(camera.position(), Vec3::ZERO);
        assert_eq!(camera.rotation(), Vec3::ZERO);
        assert_eq!(camera.near_plane(), DEFAULT_NEAR_PLANE);
        assert_eq!(camera.far_plane(), DEFAULT_FAR_PLANE);
        assert!(camera.view_matrix().abs_diff_eq(Mat4::IDENTITY, TOLERANCE));
    }

    #[test]
    fn test_position_does_not_touch_projection() {
        let mut camera = Camera::new(Projection::Perspective, 0.8, 1.5);
        let before = camera.projection_matrix();

        camera.set_position(Vec3::new(4.0, -2.0, 7.0));
        camera.set_rotation(Vec3::new(0.3, 0.2, 0.1));

        assert_eq!(camera.projection_matrix(), before);
    }

    #[test]
    fn test_setter_below_epsilon_is_ignored() {
        let mut camera = Camera::new(Projection::Orthographic, 1.0, 2.0);
        camera.set_aspect_ratio(2.0 + 1e-7);
        assert_eq!(camera.aspect_ratio(), 2.0);

        camera.set_zoom_or_fov(1.5);
        assert_eq!(camera.zoom_or_fov(), 1.5);
    }

    #[test]
    fn test_rotation_matrix_has_no_translation() {
        let mut camera = Camera::new(Projection::Perspective, 0.8, 1.0);
        camera.set_position(Vec3::new(1.0, 2.0, 3.0));
        camera.set_rotation(Vec3::new(0.0, FRAC_PI_2, 0.0));

        let rotation = camera.rotation_matrix();
        assert!(rotation.w_axis.truncate().abs_diff_eq(Vec3::ZERO, TOLERANCE));
    }

    #[test]
    fn test_perspective_clamps_near_plane() {
        let clamped = Camera::with_planes(Projection::Perspective, 0.8, 1.0, -100.0, 100.0);
        let explicit =
            Camera::with_planes(Projection::Perspective, 0.8, 1.0, MIN_PERSPECTIVE_NEAR, 100.0);
        assert!(clamped
            .projection_matrix()
            .abs_diff_eq(explicit.projection_matrix(), TOLERANCE));
        assert!(clamped.projection_matrix().is_finite());
    }

    #[test]
    fn test_zero_aspect_produces_non_finite_projection() {
        let camera = Camera::new(Projection::Orthographic, 1.0, 0.0);
        assert!(!camera.projection_matrix().is_finite());
    }

    #[test]
    fn test_local_axes_at_identity() {
        let camera = Camera::new(Projection::Perspective, 0.8, 1.0);
        assert!(camera.forward().abs_diff_eq(Vec3::NEG_Z, TOLERANCE));
        assert!(camera.right().abs_diff_eq(Vec3::X, TOLERANCE));
        assert!(camera.up().abs_diff_eq(Vec3::Y, TOLERANCE));
    }

    #[test]
    fn test_projection_serde_names() {
        let json = serde_json::to_string(&Projection::Perspective).unwrap();
        assert_eq!(json, "\"perspective\"");
        let parsed: Projection = serde_json::from_str("\"orthographic\"").unwrap();
        assert_eq!(parsed, Projection::Orthographic);
    }
}
