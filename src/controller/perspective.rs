use glam::Vec3;

use crate::camera::{Camera, Projection};

use super::CameraController;

/// Vertical field of view of the camera a new controller starts with
pub const DEFAULT_FOV_DEGREES: f32 = 45.0;
pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 1.0;

/// Fly camera: moves along its local axes, yaws with keys and looks
/// around with the cursor
#[derive(Debug, Clone)]
pub struct PerspectiveController {
    camera: Camera,
    delta: f32,
    translation_speed: f32,
    rotation_speed: f32,
    mouse_sensitivity: f32,
}

impl PerspectiveController {
    pub fn new(delta: f32, translation_speed: f32, rotation_speed: f32) -> Self {
        log::trace!(
            "PerspectiveController::new(delta={}, translation={}, rotation={})",
            delta,
            translation_speed,
            rotation_speed
        );
        Self {
            camera: Camera::new(
                Projection::Perspective,
                DEFAULT_FOV_DEGREES.to_radians(),
                1.0,
            ),
            delta,
            translation_speed,
            rotation_speed,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
        }
    }

    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        self.mouse_sensitivity = sensitivity;
    }

    fn translation_step(&self) -> f32 {
        self.translation_speed * self.delta
    }

    fn rotation_step(&self) -> f32 {
        self.rotation_speed * self.delta
    }

    fn translate(&mut self, offset: Vec3) {
        let position = self.camera.position() + offset;
        self.camera.set_position(position);
    }

    /// Third column of the rotation matrix (camera +Z, i.e. backwards)
    fn back_axis(&self) -> Vec3 {
        self.camera.rotation_matrix().z_axis.truncate()
    }

    fn right_axis(&self) -> Vec3 {
        self.camera.rotation_matrix().x_axis.truncate()
    }

    /// Rotate from a cursor move given in raw window pixels.
    ///
    /// Moving the cursor right (new_x > prev_x) decreases yaw and moving
    /// it down decreases pitch. Deltas are not normalized by viewport size
    /// or DPI.
    pub fn move_with_cursor(&mut self, prev_x: f64, prev_y: f64, new_x: f64, new_y: f64) {
        let delta_x = (prev_x - new_x) as f32;
        let delta_y = (prev_y - new_y) as f32;
        let scale = self.mouse_sensitivity * self.delta;

        let mut rotation = self.camera.rotation();
        rotation.y += delta_x * scale;
        rotation.x += delta_y * scale;
        self.camera.set_rotation(rotation);
    }

    pub fn move_forward(&mut self) {
        let offset = -self.back_axis() * self.translation_step();
        self.translate(offset);
    }

    pub fn move_back(&mut self) {
        let offset = self.back_axis() * self.translation_step();
        self.translate(offset);
    }

    pub fn move_right(&mut self) {
        let offset = self.right_axis() * self.translation_step();
        self.translate(offset);
    }

    pub fn move_left(&mut self) {
        let offset = -self.right_axis() * self.translation_step();
        self.translate(offset);
    }

    /// World-space up, independent of the camera's pitch and roll
    pub fn move_up(&mut self) {
        let offset = Vec3::Y * self.translation_step();
        self.translate(offset);
    }

    pub fn move_down(&mut self) {
        let offset = Vec3::NEG_Y * self.translation_step();
        self.translate(offset);
    }

    pub fn rotate_left(&mut self) {
        let mut rotation = self.camera.rotation();
        rotation.y -= self.rotation_step();
        self.camera.set_rotation(rotation);
    }

    pub fn rotate_right(&mut self) {
        let mut rotation = self.camera.rotation();
        rotation.y += self.rotation_step();
        self.camera.set_rotation(rotation);
    }
}

impl CameraController for PerspectiveController {
    fn set_delta(&mut self, delta: f32) {
        self.delta = delta;
    }

    fn delta(&self) -> f32 {
        self.delta
    }

    fn camera(&self) -> &Camera {
        &self.camera
    }

    fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    fn translation_speed(&self) -> f32 {
        self.translation_speed
    }

    fn set_translation_speed(&mut self, speed: f32) {
        self.translation_speed = speed;
    }

    fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    fn set_rotation_speed(&mut self, speed: f32) {
        self.rotation_speed = speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-5;

    #[test]
    fn test_default_camera_uses_45_degree_fov() {
        let controller = PerspectiveController::new(1.0, 1.0, 1.0);
        let camera = controller.camera();
        assert_eq!(camera.projection(), Projection::Perspective);
        assert!((camera.zoom_or_fov() - 45f32.to_radians()).abs() < TOLERANCE);
        assert_eq!(camera.aspect_ratio(), 1.0);
        assert_eq!(controller.mouse_sensitivity(), DEFAULT_MOUSE_SENSITIVITY);
    }

    #[test]
    fn test_move_up_ignores_pitch() {
        let mut controller = PerspectiveController::new(1.0, 2.0, 1.0);
        controller
            .camera_mut()
            .set_rotation(Vec3::new(0.7, 0.3, 0.0));
        controller.move_up();
        assert!(controller
            .camera()
            .position()
            .abs_diff_eq(Vec3::new(0.0, 2.0, 0.0), TOLERANCE));
    }

    #[test]
    fn test_strafe_follows_yaw() {
        let mut controller = PerspectiveController::new(1.0, 1.0, 1.0);
        controller
            .camera_mut()
            .set_rotation(Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0));
        controller.move_right();
        // Right axis turns from +X to -Z after a quarter yaw
        assert!(controller
            .camera()
            .position()
            .abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), TOLERANCE));
    }

    #[test]
    fn test_cursor_vertical_motion_changes_pitch() {
        let mut controller = PerspectiveController::new(0.5, 1.0, 1.0);
        controller.set_mouse_sensitivity(2.0);
        controller.move_with_cursor(5.0, 5.0, 5.0, 9.0);
        let rotation = controller.camera().rotation();
        assert!((rotation.x - -4.0).abs() < TOLERANCE);
        assert_eq!(rotation.y, 0.0);
    }

    #[test]
    fn test_rotate_keys_adjust_yaw() {
        let mut controller = PerspectiveController::new(0.1, 1.0, 10.0);
        controller.rotate_right();
        assert!((controller.camera().rotation().y - 1.0).abs() < TOLERANCE);
        controller.rotate_left();
        assert!(controller.camera().rotation().y.abs() < TOLERANCE);
    }
}
