use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::context::SceneContext;
use crate::frame::FrameClock;
use crate::renderer::{RenderOptions, Renderer};

pub const INITIAL_WINDOW_WIDTH: u32 = 800;
pub const INITIAL_WINDOW_HEIGHT: u32 = 600;

#[derive(Debug, Clone, Copy)]
pub struct AppOptions {
    pub width: u32,
    pub height: u32,
    pub bloom: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            width: INITIAL_WINDOW_WIDTH,
            height: INITIAL_WINDOW_HEIGHT,
            bloom: true,
        }
    }
}

/// Application boundary: owns the window, the scene context, and the
/// renderer, and drives the self-rescheduling frame loop
/// (`about_to_wait` requests a redraw, `RedrawRequested` renders).
///
/// Window, context, and renderer are constructed exactly once behind an
/// `is_none` presence check; a second `resumed` call is a no-op.
pub struct App {
    options: AppOptions,
    window: Option<Arc<Window>>,
    context: Option<SceneContext>,
    renderer: Option<Renderer>,
    clock: FrameClock,
}

impl App {
    pub fn new(options: AppOptions) -> Self {
        Self {
            options,
            window: None,
            context: None,
            renderer: None,
            clock: FrameClock::new(),
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(context) = &mut self.context {
            context.shutdown();
        }
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(context), Some(renderer)) = (&mut self.context, &mut self.renderer) else {
            return;
        };

        let frame = self.clock.tick();
        context.update(&frame);

        match renderer.render(context.scene()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = renderer.size();
                renderer.resize(size);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("surface out of memory, stopping");
                self.shutdown(event_loop);
            }
            Err(e) => log::warn!("skipping frame: {e}"),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title("Snake Diorama")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.options.width,
                    self.options.height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        let aspect = size.width.max(1) as f32 / size.height.max(1) as f32;

        let mut context = SceneContext::new(aspect);
        context.init();

        let render_options = RenderOptions {
            bloom: self.options.bloom,
        };
        let renderer = match pollster::block_on(Renderer::new(window.clone(), render_options)) {
            Ok(r) => r,
            Err(e) => {
                log::error!("failed to initialize renderer: {e}");
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window);
        self.context = Some(context);
        self.renderer = Some(renderer);
        self.clock = FrameClock::new();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => self.shutdown(event_loop),
            WindowEvent::Resized(size) => {
                if let Some(context) = &mut self.context {
                    let aspect = size.width.max(1) as f32 / size.height.max(1) as f32;
                    context.scene_mut().camera_mut().set_aspect(aspect);
                }
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
