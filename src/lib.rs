pub mod app;
pub mod debug;
pub mod error;
pub mod layout;
pub mod widgets;
pub mod windowing;

pub use app::App;
pub use error::RouterError;
pub use layout::Rect;
pub use widgets::{Button, ButtonCanvas, ButtonLook, Control};
pub use windowing::{
    ClickEvent, ControlId, ControlRegistry, FixedHost, Host, InputEvent, KeyEvent, Outcome,
    PointerEvent, SystemHost, Window, WindowBuilder,
};

pub use glam::{Vec2, vec2};
pub use winit::event::MouseButton;
pub use winit::keyboard::{Key, NamedKey};

pub type Result<T> = anyhow::Result<T>;

pub fn init_logging() {
    // A second call (tests, embedding apps) keeps the first logger.
    let _ = env_logger::try_init();
}
