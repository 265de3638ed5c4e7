//! Camera controllers: turn discrete input and cursor motion into pose
//! changes on an owned [`Camera`], scaled by the current frame delta.

mod orthographic;
mod perspective;

pub use orthographic::OrthographicController;
pub use perspective::{PerspectiveController, DEFAULT_FOV_DEGREES, DEFAULT_MOUSE_SENSITIVITY};

use crate::camera::{Camera, Projection};
use crate::core::CursorMotion;

/// Capabilities shared by every controller variant
pub trait CameraController {
    /// Frame delta in seconds used by subsequent move/rotate calls.
    /// Must be set each frame before movement, otherwise the previous
    /// value is reused.
    fn set_delta(&mut self, delta: f32);

    fn delta(&self) -> f32;

    fn camera(&self) -> &Camera;

    fn camera_mut(&mut self) -> &mut Camera;

    /// Units per second
    fn translation_speed(&self) -> f32;

    fn set_translation_speed(&mut self, speed: f32);

    /// Radians per second
    fn rotation_speed(&self) -> f32;

    fn set_rotation_speed(&mut self, speed: f32);
}

/// Discrete movement a key binding can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerCommand {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    MoveForward,
    MoveBack,
    RotateLeft,
    RotateRight,
}

/// The controller driving the host's camera, dispatched by variant
#[derive(Debug, Clone)]
pub enum ActiveController {
    Orthographic(OrthographicController),
    Perspective(PerspectiveController),
}

impl ActiveController {
    pub fn projection(&self) -> Projection {
        match self {
            Self::Orthographic(_) => Projection::Orthographic,
            Self::Perspective(_) => Projection::Perspective,
        }
    }

    /// Run a command on the active variant.
    /// Returns false when the variant has no such movement.
    pub fn apply(&mut self, command: ControllerCommand) -> bool {
        match self {
            Self::Orthographic(controller) => match command {
                ControllerCommand::MoveUp => controller.move_up(),
                ControllerCommand::MoveDown => controller.move_down(),
                ControllerCommand::MoveLeft => controller.move_left(),
                ControllerCommand::MoveRight => controller.move_right(),
                ControllerCommand::RotateLeft => controller.rotate_left(),
                ControllerCommand::RotateRight => controller.rotate_right(),
                ControllerCommand::MoveForward | ControllerCommand::MoveBack => return false,
            },
            Self::Perspective(controller) => match command {
                ControllerCommand::MoveUp => controller.move_up(),
                ControllerCommand::MoveDown => controller.move_down(),
                ControllerCommand::MoveLeft => controller.move_left(),
                ControllerCommand::MoveRight => controller.move_right(),
                ControllerCommand::MoveForward => controller.move_forward(),
                ControllerCommand::MoveBack => controller.move_back(),
                ControllerCommand::RotateLeft => controller.rotate_left(),
                ControllerCommand::RotateRight => controller.rotate_right(),
            },
        }
        true
    }

    /// Cursor look; orthographic controllers ignore the cursor
    pub fn move_with_cursor(&mut self, motion: CursorMotion) -> bool {
        match self {
            Self::Orthographic(_) => false,
            Self::Perspective(controller) => {
                controller.move_with_cursor(motion.prev_x, motion.prev_y, motion.new_x, motion.new_y);
                true
            }
        }
    }

    fn inner(&self) -> &dyn CameraController {
        match self {
            Self::Orthographic(controller) => controller,
            Self::Perspective(controller) => controller,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn CameraController {
        match self {
            Self::Orthographic(controller) => controller,
            Self::Perspective(controller) => controller,
        }
    }
}

impl From<OrthographicController> for ActiveController {
    fn from(controller: OrthographicController) -> Self {
        Self::Orthographic(controller)
    }
}

impl From<PerspectiveController> for ActiveController {
    fn from(controller: PerspectiveController) -> Self {
        Self::Perspective(controller)
    }
}

impl CameraController for ActiveController {
    fn set_delta(&mut self, delta: f32) {
        self.inner_mut().set_delta(delta);
    }

    fn delta(&self) -> f32 {
        self.inner().delta()
    }

    fn camera(&self) -> &Camera {
        self.inner().camera()
    }

    fn camera_mut(&mut self) -> &mut Camera {
        self.inner_mut().camera_mut()
    }

    fn translation_speed(&self) -> f32 {
        self.inner().translation_speed()
    }

    fn set_translation_speed(&mut self, speed: f32) {
        self.inner_mut().set_translation_speed(speed);
    }

    fn rotation_speed(&self) -> f32 {
        self.inner().rotation_speed()
    }

    fn set_rotation_speed(&mut self, speed: f32) {
        self.inner_mut().set_rotation_speed(speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_orthographic_rejects_depth_moves() {
        let mut controller = ActiveController::from(OrthographicController::new(1.0, 1.0, 1.0));
        assert!(!controller.apply(ControllerCommand::MoveForward));
        assert!(!controller.apply(ControllerCommand::MoveBack));
        assert_eq!(controller.camera().position(), Vec3::ZERO);
    }

    #[test]
    fn test_orthographic_ignores_cursor() {
        let mut controller = ActiveController::from(OrthographicController::new(1.0, 1.0, 1.0));
        let motion = CursorMotion::new((0.0, 0.0), (25.0, 40.0));
        assert!(!controller.move_with_cursor(motion));
        assert_eq!(controller.camera().rotation(), Vec3::ZERO);
    }

    #[test]
    fn test_dispatch_reaches_variant() {
        let mut controller = ActiveController::from(PerspectiveController::new(1.0, 2.0, 1.0));
        assert_eq!(controller.projection(), Projection::Perspective);
        assert!(controller.apply(ControllerCommand::MoveBack));
        assert_eq!(controller.camera().position(), Vec3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_trait_setters_forward_to_variant() {
        let mut controller = ActiveController::from(OrthographicController::new(1.0, 1.0, 1.0));
        controller.set_delta(0.5);
        controller.set_translation_speed(4.0);
        controller.set_rotation_speed(3.0);

        assert_eq!(controller.delta(), 0.5);
        assert_eq!(controller.translation_speed(), 4.0);
        assert_eq!(controller.rotation_speed(), 3.0);

        assert!(controller.apply(ControllerCommand::MoveUp));
        assert_eq!(controller.camera().position(), Vec3::new(0.0, 2.0, 0.0));
    }
}
