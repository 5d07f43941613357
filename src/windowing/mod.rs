pub mod click;
pub mod events;
pub mod focus;
pub mod host;
pub mod registry;
pub mod window;
pub mod winit_input;

pub use events::{ClickEvent, InputEvent, KeyEvent, Outcome, PointerEvent};
pub use host::{FixedHost, Host, IntervalHandle, SystemHost};
pub use registry::{ControlId, ControlRegistry};
pub use window::{Window, WindowBuilder};
