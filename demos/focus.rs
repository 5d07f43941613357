use tabkit::{App, Button, ButtonCanvas, ButtonLook, Rect, Result, Window};

/// Stands in for a renderer: reports what would be drawn.
struct LogCanvas;

impl ButtonCanvas for LogCanvas {
    fn draw_button(&mut self, label: &str, rect: Rect, look: ButtonLook) {
        log::info!(
            "draw {label:>6} at {:?} hovered={} pressed={} focused={}",
            rect.origin,
            look.hovered,
            look.pressed,
            look.focused
        );
    }
}

fn main() -> Result<()> {
    let window: Window<LogCanvas> = Window::new();

    window.add(
        Button::new("panel", Rect::from_xywh(20.0, 20.0, 360.0, 260.0))
            .tab_index(0)
            .on_click(|ev| log::info!("panel clicked (double: {})", ev.is_double)),
    );
    window.add(
        Button::new("ok", Rect::from_xywh(150.0, 120.0, 100.0, 40.0))
            .z_index(1)
            .tab_index(1)
            .on_click(|ev| log::info!("ok clicked (double: {})", ev.is_double)),
    );

    App::new(window, LogCanvas)
        .with_title("Focus Demo")
        .with_size(400, 300)
        .run()
}
