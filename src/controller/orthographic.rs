use crate::camera::{Camera, Projection};

use super::CameraController;

/// Planar pan/roll controller for an orthographic camera
#[derive(Debug, Clone)]
pub struct OrthographicController {
    camera: Camera,
    delta: f32,
    translation_speed: f32,
    rotation_speed: f32,
}

impl OrthographicController {
    /// Create a controller owning a unit-zoom, square orthographic camera
    pub fn new(delta: f32, translation_speed: f32, rotation_speed: f32) -> Self {
        log::trace!(
            "OrthographicController::new(delta={}, translation={}, rotation={})",
            delta,
            translation_speed,
            rotation_speed
        );
        Self {
            camera: Camera::new(Projection::Orthographic, 1.0, 1.0),
            delta,
            translation_speed,
            rotation_speed,
        }
    }

    fn translation_step(&self) -> f32 {
        self.translation_speed * self.delta
    }

    fn rotation_step(&self) -> f32 {
        self.rotation_speed * self.delta
    }

    pub fn move_up(&mut self) {
        let mut position = self.camera.position();
        position.y += self.translation_step();
        self.camera.set_position(position);
    }

    pub fn move_down(&mut self) {
        let mut position = self.camera.position();
        position.y -= self.translation_step();
        self.camera.set_position(position);
    }

    pub fn move_right(&mut self) {
        let mut position = self.camera.position();
        position.x += self.translation_step();
        self.camera.set_position(position);
    }

    pub fn move_left(&mut self) {
        let mut position = self.camera.position();
        position.x -= self.translation_step();
        self.camera.set_position(position);
    }

    /// Roll counter-clockwise (negative Z)
    pub fn rotate_left(&mut self) {
        let mut rotation = self.camera.rotation();
        rotation.z -= self.rotation_step();
        self.camera.set_rotation(rotation);
    }

    pub fn rotate_right(&mut self) {
        let mut rotation = self.camera.rotation();
        rotation.z += self.rotation_step();
        self.camera.set_rotation(rotation);
    }
}

impl CameraController for OrthographicController {
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
