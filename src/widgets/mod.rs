pub mod base;
pub mod button;

pub use base::Control;
pub use button::{Button, ButtonCanvas, ButtonLook};
