use crate::windowing::events::{InputEvent, KeyEvent, PointerEvent};

pub fn pointer_name(ev: &PointerEvent) -> &'static str {
    match ev {
        PointerEvent::Down { .. } => "PointerDown",
        PointerEvent::Up { .. } => "PointerUp",
        PointerEvent::Move { .. } => "PointerMove",
        PointerEvent::Wheel { .. } => "Wheel",
    }
}

pub fn key_name(ev: &KeyEvent) -> &'static str {
    match ev {
        KeyEvent::Down { .. } => "KeyDown",
        KeyEvent::Up { .. } => "KeyUp",
        KeyEvent::Char { ch: '\t' } => "Tab",
        KeyEvent::Char { .. } => "CharInput",
    }
}

pub fn event_name(ev: &InputEvent) -> &'static str {
    match ev {
        InputEvent::Pointer(p) => pointer_name(p),
        InputEvent::Key(k) => key_name(k),
    }
}
