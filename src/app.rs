use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder as HostWindowBuilder,
};

use crate::{Result, windowing::Window, windowing::winit_input::WinitInput};

struct WindowConfig {
    title: String,
    size: winit::dpi::LogicalSize<u32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Tabkit App".to_string(),
            size: winit::dpi::LogicalSize::new(800, 600),
        }
    }
}

/// Runs a [`Window`] inside a winit event loop, painting into `canvas`.
pub struct App<R> {
    window: Window<R>,
    canvas: R,
    window_config: WindowConfig,
}

impl<R> App<R> {
    pub fn new(window: Window<R>, canvas: R) -> Self {
        Self {
            window,
            canvas,
            window_config: WindowConfig::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window_config.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.window_config.size = winit::dpi::LogicalSize::new(width, height);
        self
    }

    pub fn run(self) -> Result<()> {
        crate::init_logging();
        log::info!("Starting {}...", &self.window_config.title);

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let host_window = HostWindowBuilder::new()
            .with_title(&self.window_config.title)
            .with_inner_size(self.window_config.size)
            .build(&event_loop)?;

        let mut input = WinitInput::new(host_window.scale_factor());
        let Self {
            mut window,
            mut canvas,
            ..
        } = self;

        event_loop.run(move |event, elwt| match &event {
            Event::WindowEvent { window_id, event } if *window_id == host_window.id() => {
                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::RedrawRequested => window.paint(&mut canvas),
                    other => {
                        for ev in input.translate(other) {
                            // Already logged by the router; keep pumping.
                            let _ = window.dispatch(ev);
                        }
                    }
                }
            }
            Event::AboutToWait => {
                if window.is_invalid() {
                    host_window.request_redraw();
                }
            }
            _ => {}
        })?;

        Ok(())
    }
}
