use glam::Mat4;

use crate::camera::Projection;
use crate::config::SandboxConfig;
use crate::controller::{
    ActiveController, CameraController, ControllerCommand, OrthographicController,
    PerspectiveController,
};
use crate::core::{ButtonState, CursorMotion, InputSource, Key, MouseButton, PollModeInput};

/// Keys driving the orthographic pan/roll camera
pub const ORTHOGRAPHIC_BINDINGS: [(Key, ControllerCommand); 6] = [
    (Key::ArrowUp, ControllerCommand::MoveUp),
    (Key::ArrowDown, ControllerCommand::MoveDown),
    (Key::ArrowLeft, ControllerCommand::MoveLeft),
    (Key::ArrowRight, ControllerCommand::MoveRight),
    (Key::KeyQ, ControllerCommand::RotateLeft),
    (Key::KeyE, ControllerCommand::RotateRight),
];

/// Keys driving the perspective fly camera
pub const PERSPECTIVE_BINDINGS: [(Key, ControllerCommand); 8] = [
    (Key::KeyW, ControllerCommand::MoveForward),
    (Key::KeyS, ControllerCommand::MoveBack),
    (Key::KeyA, ControllerCommand::MoveLeft),
    (Key::KeyD, ControllerCommand::MoveRight),
    (Key::Space, ControllerCommand::MoveUp),
    (Key::Shift, ControllerCommand::MoveDown),
    (Key::KeyQ, ControllerCommand::RotateLeft),
    (Key::KeyE, ControllerCommand::RotateRight),
];

/// Mouse button that enables cursor look on the perspective camera
pub const LOOK_BUTTON: MouseButton = MouseButton::Right;

/// Key that asks the host to close the sandbox
pub const QUIT_KEY: Key = Key::Escape;

/// State the input callbacks act on
#[derive(Debug, Clone)]
pub struct SandboxState {
    pub controller: ActiveController,
    /// Cursor look is active while the look button is held
    pub looking: bool,
    /// Cursor motion of the current poll, applied once the look button is read
    pub pending_look: Option<CursorMotion>,
    pub quit_requested: bool,
}

/// Host wiring: frame delta -> controller, viewport -> camera,
/// polled input -> controller commands
pub struct Sandbox {
    state: SandboxState,
    input: PollModeInput<SandboxState>,
}

impl Sandbox {
    pub fn new(config: &SandboxConfig) -> Self {
        let settings = &config.controller;
        let mut controller = match config.projection {
            Projection::Orthographic => ActiveController::from(OrthographicController::new(
                settings.delta,
                settings.translation_speed,
                settings.rotation_speed,
            )),
            Projection::Perspective => {
                let mut controller = PerspectiveController::new(
                    settings.delta,
                    settings.translation_speed,
                    settings.rotation_speed,
                );
                controller.set_mouse_sensitivity(settings.mouse_sensitivity);
                ActiveController::from(controller)
            }
        };

        let camera = controller.camera_mut();
        if let Some(zoom_or_fov) = config.camera.zoom_or_fov {
            camera.set_zoom_or_fov(zoom_or_fov);
        }
        camera.set_near_plane(config.camera.near);
        camera.set_far_plane(config.camera.far);
        camera.set_position(config.camera.position());

        let mut input = PollModeInput::new();
        match config.projection {
            Projection::Orthographic => Self::bind_keys(&mut input, &ORTHOGRAPHIC_BINDINGS),
            Projection::Perspective => {
                Self::bind_keys(&mut input, &PERSPECTIVE_BINDINGS);
                Self::bind_cursor_look(&mut input);
            }
        }
        input.register_key_callback(QUIT_KEY, |state: &mut SandboxState, button| {
            if button.is_pressed() {
                state.quit_requested = true;
            }
        });

        log::info!(
            "Sandbox ready: {:?} camera at {:?}",
            config.projection,
            config.camera.position
        );

        Self {
            state: SandboxState {
                controller,
                looking: false,
                pending_look: None,
                quit_requested: false,
            },
            input,
        }
    }

    fn bind_keys(input: &mut PollModeInput<SandboxState>, bindings: &[(Key, ControllerCommand)]) {
        for &(key, command) in bindings {
            input.register_key_callback(key, move |state: &mut SandboxState, button| {
                if button.is_pressed() {
                    state.controller.apply(command);
                }
            });
        }
    }

    // Cursor callbacks fire before mouse callbacks, so the motion is held
    // until the look button state of the same poll is known
    fn bind_cursor_look(input: &mut PollModeInput<SandboxState>) {
        input.register_cursor_callback(|state: &mut SandboxState, motion| {
            state.pending_look = (!motion.is_stationary()).then_some(motion);
        });
        input.register_mouse_callback(LOOK_BUTTON, |state: &mut SandboxState, button| {
            state.looking = button == ButtonState::Pressed;
            if let Some(motion) = state.pending_look.take() {
                if state.looking {
                    state.controller.move_with_cursor(motion);
                }
            }
        });
    }

    /// Advance one frame: push the frame delta, follow the viewport's
    /// aspect ratio when known, then poll input and run callbacks.
    pub fn update<S>(&mut self, delta: f32, aspect_ratio: Option<f32>, source: &S)
    where
        S: InputSource + ?Sized,
    {
        self.state.controller.set_delta(delta);
        if let Some(aspect_ratio) = aspect_ratio {
            self.state.controller.camera_mut().set_aspect_ratio(aspect_ratio);
        }
        self.input.poll_and_invoke(source, &mut self.state);
    }

    /// Combined transform uploaded to the shader
    pub fn view_projection(&self) -> Mat4 {
        let camera = self.state.controller.camera();
        camera.projection_matrix() * camera.view_matrix()
    }

    pub fn controller(&self) -> &ActiveController {
        &self.state.controller
    }

    pub fn controller_mut(&mut self) -> &mut ActiveController {
        &mut self.state.controller
    }

    pub fn is_looking(&self) -> bool {
        self.state.looking
    }

    /// Whether the quit key was pressed during any update so far
    pub fn quit_requested(&self) -> bool {
        self.state.quit_requested
    }

    pub fn input(&self) -> &PollModeInput<SandboxState> {
        &self.input
    }
}
