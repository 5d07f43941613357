use winit::event::MouseButton;
use winit::keyboard::{Key, NamedKey};

use super::base::Control;
use crate::{
    layout::Rect,
    windowing::events::{ClickEvent, KeyEvent, Outcome, PointerEvent},
};

/// Visual state a canvas needs to draw a [`Button`].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ButtonLook {
    pub hovered: bool,
    pub pressed: bool,
    pub focused: bool,
}

/// Anything a [`Button`] can be painted onto.
pub trait ButtonCanvas {
    fn draw_button(&mut self, label: &str, rect: Rect, look: ButtonLook);
}

impl ButtonCanvas for () {
    fn draw_button(&mut self, _label: &str, _rect: Rect, _look: ButtonLook) {}
}

impl ButtonCanvas for Vec<(String, ButtonLook)> {
    fn draw_button(&mut self, label: &str, _rect: Rect, look: ButtonLook) {
        self.push((label.to_string(), look));
    }
}

/// Rectangular push button. Focusable, a tab stop, and clickable with the
/// left mouse button or with Enter/Space while focused.
pub struct Button {
    pub label: String,
    pub rect: Rect,
    z_index: i32,
    tab_index: i32,
    on_click: Box<dyn FnMut(&ClickEvent) + Send>,
    look: ButtonLook,
    dirty: bool,
}

impl Button {
    pub fn new(label: impl Into<String>, rect: Rect) -> Self {
        Self {
            label: label.into(),
            rect,
            z_index: 0,
            tab_index: 0,
            on_click: Box::new(|_| {}),
            look: ButtonLook::default(),
            dirty: true,
        }
    }

    pub fn on_click(mut self, f: impl FnMut(&ClickEvent) + Send + 'static) -> Self {
        self.on_click = Box::new(f);
        self
    }

    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = tab_index;
        self
    }

    pub fn look(&self) -> ButtonLook {
        self.look
    }

    fn update(&mut self, look: ButtonLook) {
        if look != self.look {
            self.look = look;
            self.dirty = true;
        }
    }
}

impl<R: ButtonCanvas + ?Sized> Control<R> for Button {
    fn z_index(&self) -> i32 {
        self.z_index
    }

    fn tab_index(&self) -> i32 {
        self.tab_index
    }

    fn tab_stop(&self) -> bool {
        true
    }

    fn can_focus(&self) -> bool {
        true
    }

    fn is_invalid(&self) -> bool {
        self.dirty
    }

    fn pointer(&mut self, event: &PointerEvent) -> Outcome {
        let inside = self.rect.contains(event.pos());
        let mut look = self.look;

        let outcome = match *event {
            // Hovering highlights but never claims focus.
            PointerEvent::Move { .. } => {
                look.hovered = inside;
                Outcome::Unhandled
            }
            PointerEvent::Down {
                button: MouseButton::Left,
                ..
            } if inside => {
                look.pressed = true;
                Outcome::Handled
            }
            PointerEvent::Up {
                button: MouseButton::Left,
                ..
            } => {
                look.pressed = false;
                Outcome::from(inside)
            }
            _ => Outcome::Unhandled,
        };

        self.update(look);
        outcome
    }

    fn key(&mut self, event: &KeyEvent) {
        if let KeyEvent::Down {
            key: Key::Named(NamedKey::Enter | NamedKey::Space),
        } = event
        {
            (self.on_click)(&ClickEvent {
                button: MouseButton::Left,
                pos: self.rect.center(),
                is_double: false,
            });
        }
    }

    fn click(&mut self, event: &ClickEvent) {
        if event.button == MouseButton::Left {
            (self.on_click)(event);
        }
    }

    fn focus_changed(&mut self, focused: bool) {
        self.update(ButtonLook {
            focused,
            ..self.look
        });
    }

    fn paint(&mut self, ctx: &mut R) {
        ctx.draw_button(&self.label, self.rect, self.look);
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use glam::vec2;

    fn down(x: f32, y: f32) -> PointerEvent {
        PointerEvent::Down {
            button: MouseButton::Left,
            pos: vec2(x, y),
        }
    }

    fn up(x: f32, y: f32) -> PointerEvent {
        PointerEvent::Up {
            button: MouseButton::Left,
            pos: vec2(x, y),
        }
    }

    fn control(b: &mut Button) -> &mut dyn Control<Vec<(String, ButtonLook)>> {
        b
    }

    #[test]
    fn handles_presses_inside_only() {
        let mut b = Button::new("ok", Rect::from_xywh(0.0, 0.0, 10.0, 10.0));
        let c = control(&mut b);

        assert_eq!(c.pointer(&down(20.0, 20.0)), Outcome::Unhandled);
        assert_eq!(c.pointer(&down(5.0, 5.0)), Outcome::Handled);
        assert!(b.look().pressed);

        let c = control(&mut b);
        assert_eq!(c.pointer(&up(50.0, 5.0)), Outcome::Unhandled);
        assert!(!b.look().pressed);
    }

    #[test]
    fn hover_never_claims() {
        let mut b = Button::new("ok", Rect::from_xywh(0.0, 0.0, 10.0, 10.0));
        let outcome = control(&mut b).pointer(&PointerEvent::Move { pos: vec2(1.0, 1.0) });
        assert_eq!(outcome, Outcome::Unhandled);
        assert!(b.look().hovered);
    }

    #[test]
    fn paint_clears_invalid() {
        let mut b = Button::new("ok", Rect::from_xywh(0.0, 0.0, 10.0, 10.0));
        let mut canvas = Vec::new();
        let c = control(&mut b);
        assert!(c.is_invalid());

        c.focus_changed(true);
        c.paint(&mut canvas);
        assert!(!c.is_invalid());
        assert_eq!(
            canvas,
            vec![(
                "ok".to_string(),
                ButtonLook {
                    focused: true,
                    ..ButtonLook::default()
                }
            )]
        );
    }

    #[test]
    fn enter_and_click_fire_callback() {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let sink = fired.clone();
        let mut b = Button::new("ok", Rect::from_xywh(0.0, 0.0, 10.0, 10.0))
            .on_click(move |ev| sink.lock().unwrap().push(ev.is_double));
        let c = control(&mut b);

        c.key(&KeyEvent::Down {
            key: Key::Named(NamedKey::Enter),
        });
        c.click(&ClickEvent {
            button: MouseButton::Left,
            pos: vec2(1.0, 1.0),
            is_double: true,
        });
        c.click(&ClickEvent {
            button: MouseButton::Right,
            pos: vec2(1.0, 1.0),
            is_double: false,
        });

        assert_eq!(*fired.lock().unwrap(), vec![false, true]);
    }
}
