pub mod clock;
pub mod input;
pub mod input_adapter;
pub mod timer;
pub mod window;

pub use clock::FrameClock;
pub use input::{
    ButtonCallback, ButtonState, CursorCallback, CursorMotion, InputSource, Key, MouseButton,
    PollModeInput,
};
pub use input_adapter::WinitInput;
pub use timer::FpsCounter;
pub use window::Viewport;
