use std::collections::HashSet;
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::input::{ButtonState, InputSource, Key, MouseButton};

/// Adapter that turns winit window events into pollable input state
#[derive(Debug, Clone, Default)]
pub struct WinitInput {
    pressed_keys: HashSet<Key>,
    pressed_buttons: HashSet<MouseButton>,
    /// Last reported cursor position (relative to window)
    cursor_position: (f64, f64),
}

impl WinitInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(key) = Self::keycode_to_key(keycode) {
                        self.set_key(key, event.state);
                    }
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(button) = Self::winit_to_mouse_button(*button) {
                    self.set_mouse_button(button, *state);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_position = (position.x, position.y);
            }
            WindowEvent::Focused(false) => self.release_all(),
            _ => {}
        }
    }

    pub fn set_key(&mut self, key: Key, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.pressed_keys.insert(key);
            }
            ElementState::Released => {
                self.pressed_keys.remove(&key);
            }
        }
    }

    pub fn set_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.pressed_buttons.insert(button);
            }
            ElementState::Released => {
                self.pressed_buttons.remove(&button);
            }
        }
    }

    pub fn set_cursor_position(&mut self, x: f64, y: f64) {
        self.cursor_position = (x, y);
    }

    /// Drop every held key and button, e.g. when the window loses focus
    /// and release events will never arrive
    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
        self.pressed_buttons.clear();
    }

    /// Map winit KeyCode to Key
    fn keycode_to_key(keycode: KeyCode) -> Option<Key> {
        match keycode {
            KeyCode::KeyW => Some(Key::KeyW),
            KeyCode::KeyA => Some(Key::KeyA),
            KeyCode::KeyS => Some(Key::KeyS),
            KeyCode::KeyD => Some(Key::KeyD),
            KeyCode::KeyQ => Some(Key::KeyQ),
            KeyCode::KeyE => Some(Key::KeyE),
            KeyCode::Space => Some(Key::Space),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Key::Shift),
            KeyCode::Escape => Some(Key::Escape),
            KeyCode::ArrowUp => Some(Key::ArrowUp),
            KeyCode::ArrowDown => Some(Key::ArrowDown),
            KeyCode::ArrowLeft => Some(Key::ArrowLeft),
            KeyCode::ArrowRight => Some(Key::ArrowRight),
            _ => None,
        }
    }

    /// Map winit MouseButton to MouseButton
    fn winit_to_mouse_button(button: WinitMouseButton) -> Option<MouseButton> {
        match button {
            WinitMouseButton::Left => Some(MouseButton::Left),
            WinitMouseButton::Right => Some(MouseButton::Right),
            _ => None,
        }
    }
}

impl InputSource for WinitInput {
    fn key_state(&self, key: Key) -> ButtonState {
        self.pressed_keys.contains(&key).into()
    }

    fn mouse_button_state(&self, button: MouseButton) -> ButtonState {
        self.pressed_buttons.contains(&button).into()
    }

    fn cursor_position(&self) -> (f64, f64) {
        self.cursor_position
    }
}
