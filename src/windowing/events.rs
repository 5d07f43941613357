use glam::Vec2;
use winit::event::MouseButton;
use winit::keyboard::Key;

/// Raw pointer input as delivered by the host, positions in logical pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerEvent {
    Down { button: MouseButton, pos: Vec2 },
    Up { button: MouseButton, pos: Vec2 },
    Move { pos: Vec2 },
    Wheel { pos: Vec2, delta: Vec2 },
}

impl PointerEvent {
    pub fn pos(&self) -> Vec2 {
        match *self {
            PointerEvent::Down { pos, .. }
            | PointerEvent::Up { pos, .. }
            | PointerEvent::Move { pos }
            | PointerEvent::Wheel { pos, .. } => pos,
        }
    }

    pub fn button(&self) -> Option<MouseButton> {
        match *self {
            PointerEvent::Down { button, .. } | PointerEvent::Up { button, .. } => Some(button),
            _ => None,
        }
    }

    /// Down and up events; moves and wheel turns are not button events.
    pub fn is_button(&self) -> bool {
        self.button().is_some()
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self, PointerEvent::Down { .. })
    }

    pub fn is_release(&self) -> bool {
        matches!(self, PointerEvent::Up { .. })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum KeyEvent {
    Down { key: Key },
    Up { key: Key },
    Char { ch: char },
}

impl KeyEvent {
    pub fn is_tab(&self) -> bool {
        matches!(self, KeyEvent::Char { ch: '\t' })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Key(KeyEvent),
}

impl From<PointerEvent> for InputEvent {
    fn from(ev: PointerEvent) -> Self {
        InputEvent::Pointer(ev)
    }
}

impl From<KeyEvent> for InputEvent {
    fn from(ev: KeyEvent) -> Self {
        InputEvent::Key(ev)
    }
}

/// Synthesized by the router on a release over the already focused control.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ClickEvent {
    pub button: MouseButton,
    pub pos: Vec2,
    pub is_double: bool,
}

/// What a control did with a pointer event.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Outcome {
    #[default]
    Unhandled,
    Handled,
}

impl Outcome {
    pub fn is_handled(self) -> bool {
        self == Outcome::Handled
    }
}

impl From<bool> for Outcome {
    fn from(handled: bool) -> Self {
        if handled {
            Outcome::Handled
        } else {
            Outcome::Unhandled
        }
    }
}
