use glam::{Vec2, vec2};
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    keyboard::Key,
};

use super::events::{InputEvent, KeyEvent, PointerEvent};

/// Pixel deltas are folded into line units at this rate.
const PIXELS_PER_LINE: f32 = 20.0;

/// Turns winit window events into router input.
///
/// winit reports button presses without a position, so the last cursor
/// position is remembered and stamped onto them. Positions are logical
/// pixels.
#[derive(Debug)]
pub struct WinitInput {
    cursor: Vec2,
    scale_factor: f64,
}

impl WinitInput {
    pub fn new(scale_factor: f64) -> Self {
        Self {
            cursor: Vec2::ZERO,
            scale_factor,
        }
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    pub fn translate(&mut self, event: &WindowEvent) -> Vec<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                vec![self.cursor_moved(*position).into()]
            }
            WindowEvent::MouseInput { state, button, .. } => {
                vec![self.mouse_input(*state, *button).into()]
            }
            WindowEvent::MouseWheel { delta, .. } => vec![self.wheel(*delta).into()],
            WindowEvent::KeyboardInput { event, .. } => self
                .keyboard(event.state, &event.logical_key, event.text.as_deref())
                .into_iter()
                .map(InputEvent::from)
                .collect(),
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.scale_factor = *scale_factor;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> PointerEvent {
        let logical = position.to_logical::<f32>(self.scale_factor);
        self.cursor = vec2(logical.x, logical.y);
        PointerEvent::Move { pos: self.cursor }
    }

    pub fn mouse_input(&self, state: ElementState, button: MouseButton) -> PointerEvent {
        match state {
            ElementState::Pressed => PointerEvent::Down {
                button,
                pos: self.cursor,
            },
            ElementState::Released => PointerEvent::Up {
                button,
                pos: self.cursor,
            },
        }
    }

    pub fn wheel(&self, delta: MouseScrollDelta) -> PointerEvent {
        let delta = match delta {
            MouseScrollDelta::LineDelta(x, y) => vec2(x, y),
            MouseScrollDelta::PixelDelta(p) => {
                let logical = p.to_logical::<f32>(self.scale_factor);
                vec2(logical.x, logical.y) / PIXELS_PER_LINE
            }
        };
        PointerEvent::Wheel {
            pos: self.cursor,
            delta,
        }
    }

    /// Key down or up, then on press one `Char` per character of `text`.
    pub fn keyboard(&self, state: ElementState, key: &Key, text: Option<&str>) -> Vec<KeyEvent> {
        match state {
            ElementState::Pressed => {
                let mut out = vec![KeyEvent::Down { key: key.clone() }];
                out.extend(text.unwrap_or_default().chars().map(|ch| KeyEvent::Char { ch }));
                out
            }
            ElementState::Released => vec![KeyEvent::Up { key: key.clone() }],
        }
    }
}
