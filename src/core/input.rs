/// Keyboard key identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    Space,
    Shift,
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

/// Mouse button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonState {
    #[default]
    Released,
    Pressed,
}

impl ButtonState {
    pub fn is_pressed(self) -> bool {
        self == Self::Pressed
    }
}

impl From<bool> for ButtonState {
    fn from(pressed: bool) -> Self {
        if pressed {
            Self::Pressed
        } else {
            Self::Released
        }
    }
}

/// Cursor movement between two polls, in window pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorMotion {
    pub prev_x: f64,
    pub prev_y: f64,
    pub new_x: f64,
    pub new_y: f64,
}

impl CursorMotion {
    pub fn new(prev: (f64, f64), new: (f64, f64)) -> Self {
        Self {
            prev_x: prev.0,
            prev_y: prev.1,
            new_x: new.0,
            new_y: new.1,
        }
    }

    pub fn is_stationary(&self) -> bool {
        self.prev_x == self.new_x && self.prev_y == self.new_y
    }
}

/// Polled input state - answers "what is down right now"
pub trait InputSource {
    fn key_state(&self, key: Key) -> ButtonState;

    fn mouse_button_state(&self, button: MouseButton) -> ButtonState;

    /// Cursor position relative to the window, in pixels
    fn cursor_position(&self) -> (f64, f64);
}

pub type ButtonCallback<T> = Box<dyn FnMut(&mut T, ButtonState)>;
pub type CursorCallback<T> = Box<dyn FnMut(&mut T, CursorMotion)>;

/// Callback registry driven by polling an [`InputSource`] once per frame.
///
/// Callbacks receive the target passed to [`poll_and_invoke`], so the
/// registry never holds a reference to whatever it drives.
///
/// [`poll_and_invoke`]: PollModeInput::poll_and_invoke
pub struct PollModeInput<T> {
    key_callbacks: Vec<(Key, ButtonCallback<T>)>,
    mouse_callbacks: Vec<(MouseButton, ButtonCallback<T>)>,
    cursor_callback: Option<CursorCallback<T>>,
    last_cursor: Option<(f64, f64)>,
}

impl<T> PollModeInput<T> {
    pub fn new() -> Self {
        Self {
            key_callbacks: Vec::new(),
            mouse_callbacks: Vec::new(),
            cursor_callback: None,
            last_cursor: None,
        }
    }

    /// Register a callback for `key`. A key keeps its first callback;
    /// later registrations are ignored and return false.
    pub fn register_key_callback<F>(&mut self, key: Key, callback: F) -> bool
    where
        F: FnMut(&mut T, ButtonState) + 'static,
    {
        log::trace!("register_key_callback({:?})", key);
        if self.key_callbacks.iter().any(|(k, _)| *k == key) {
            log::warn!("Callback already registered for key: '{:?}'", key);
            return false;
        }
        log::info!("Registered callback for key: '{:?}'", key);
        self.key_callbacks.push((key, Box::new(callback)));
        true
    }

    pub fn register_mouse_callback<F>(&mut self, button: MouseButton, callback: F) -> bool
    where
        F: FnMut(&mut T, ButtonState) + 'static,
    {
        log::trace!("register_mouse_callback({:?})", button);
        if self.mouse_callbacks.iter().any(|(b, _)| *b == button) {
            log::warn!("Callback already registered for mouse button: '{:?}'", button);
            return false;
        }
        log::info!("Registered callback for mouse button: '{:?}'", button);
        self.mouse_callbacks.push((button, Box::new(callback)));
        true
    }

    pub fn register_cursor_callback<F>(&mut self, callback: F) -> bool
    where
        F: FnMut(&mut T, CursorMotion) + 'static,
    {
        log::trace!("register_cursor_callback");
        if self.cursor_callback.is_some() {
            log::warn!("Cursor callback already registered");
            return false;
        }
        self.cursor_callback = Some(Box::new(callback));
        true
    }

    pub fn unregister_key_callback(&mut self, key: Key) -> bool {
        let before = self.key_callbacks.len();
        self.key_callbacks.retain(|(k, _)| *k != key);
        if self.key_callbacks.len() == before {
            log::warn!("No callback assigned to key: '{:?}'", key);
            return false;
        }
        log::info!("Unregistered callback for key: '{:?}'", key);
        true
    }

    pub fn unregister_mouse_callback(&mut self, button: MouseButton) -> bool {
        let before = self.mouse_callbacks.len();
        self.mouse_callbacks.retain(|(b, _)| *b != button);
        if self.mouse_callbacks.len() == before {
            log::warn!("Callback not registered for mouse button: '{:?}'", button);
            return false;
        }
        log::info!("Unregistered callback for mouse button: '{:?}'", button);
        true
    }

    pub fn unregister_cursor_callback(&mut self) -> bool {
        log::trace!("unregister_cursor_callback");
        self.cursor_callback.take().is_some()
    }

    pub fn has_key_callback(&self, key: Key) -> bool {
        self.key_callbacks.iter().any(|(k, _)| *k == key)
    }

    pub fn has_mouse_callback(&self, button: MouseButton) -> bool {
        self.mouse_callbacks.iter().any(|(b, _)| *b == button)
    }

    pub fn has_cursor_callback(&self) -> bool {
        self.cursor_callback.is_some()
    }

    /// Poll `source` and invoke every registered callback on `target`.
    ///
    /// Order: cursor callback, then key callbacks, then mouse callbacks,
    /// each group in registration order. Button callbacks fire every poll
    /// with the current state, released or not. The first poll reports a
    /// stationary cursor.
    pub fn poll_and_invoke<S>(&mut self, source: &S, target: &mut T)
    where
        S: InputSource + ?Sized,
    {
        let position = source.cursor_position();
        let previous = self.last_cursor.replace(position).unwrap_or(position);

        if let Some(callback) = self.cursor_callback.as_mut() {
            callback(target, CursorMotion::new(previous, position));
        }

        for (key, callback) in self.key_callbacks.iter_mut() {
            callback(target, source.key_state(*key));
        }

        for (button, callback) in self.mouse_callbacks.iter_mut() {
            callback(target, source.mouse_button_state(*button));
        }
    }
}

impl<T> Default for PollModeInput<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Default)]
    struct MockSource {
        keys: Vec<Key>,
        buttons: Vec<MouseButton>,
        cursor: (f64, f64),
    }

    impl InputSource for MockSource {
        fn key_state(&self, key: Key) -> ButtonState {
            self.keys.contains(&key).into()
        }

        fn mouse_button_state(&self, button: MouseButton) -> ButtonState {
            self.buttons.contains(&button).into()
        }

        fn cursor_position(&self) -> (f64, f64) {
            self.cursor
        }
    }

    #[test]
    fn test_key_hash() {
        let mut set = HashSet::new();
        set.insert(Key::KeyW);
        set.insert(Key::KeyW);
        set.insert(Key::ArrowUp);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_button_state_from_bool() {
        assert_eq!(ButtonState::from(true), ButtonState::Pressed);
        assert_eq!(ButtonState::from(false), ButtonState::Released);
        assert!(!ButtonState::default().is_pressed());
    }

    #[test]
    fn test_duplicate_key_registration_keeps_first() {
        let mut input: PollModeInput<Vec<&'static str>> = PollModeInput::new();
        assert!(input.register_key_callback(Key::KeyQ, |log, _| log.push("first")));
        assert!(!input.register_key_callback(Key::KeyQ, |log, _| log.push("second")));

        let mut log = Vec::new();
        input.poll_and_invoke(&MockSource::default(), &mut log);
        assert_eq!(log, vec!["first"]);
    }

    #[test]
    fn test_released_state_is_delivered() {
        let mut input: PollModeInput<Vec<ButtonState>> = PollModeInput::new();
        input.register_key_callback(Key::KeyW, |states, state| states.push(state));
        input.register_key_callback(Key::KeyS, |states, state| states.push(state));

        let source = MockSource {
            keys: vec![Key::KeyS],
            ..Default::default()
        };
        let mut states = Vec::new();
        input.poll_and_invoke(&source, &mut states);

        assert_eq!(states, vec![ButtonState::Released, ButtonState::Pressed]);
    }

    #[test]
    fn test_unregister_missing_callbacks() {
        let mut input: PollModeInput<()> = PollModeInput::new();
        assert!(!input.unregister_key_callback(Key::Escape));
        assert!(!input.unregister_mouse_callback(MouseButton::Right));
        assert!(!input.unregister_cursor_callback());
    }

    #[test]
    fn test_first_poll_is_stationary() {
        let mut input: PollModeInput<Vec<CursorMotion>> = PollModeInput::new();
        input.register_cursor_callback(|motions, motion| motions.push(motion));

        let mut source = MockSource {
            cursor: (100.0, 50.0),
            ..Default::default()
        };
        let mut motions = Vec::new();
        input.poll_and_invoke(&source, &mut motions);
        source.cursor = (110.0, 45.0);
        input.poll_and_invoke(&source, &mut motions);

        assert!(motions[0].is_stationary());
        assert_eq!(motions[1], CursorMotion::new((100.0, 50.0), (110.0, 45.0)));
    }
}
