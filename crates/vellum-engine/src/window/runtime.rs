use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::translate_window_event;
use crate::input::InputState;

/// The editor window's initial appearance.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Top-left corner of the window; `None` lets the platform decide.
    pub initial_position: Option<LogicalPosition<f64>>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "vellum".to_string(),
            initial_size: LogicalSize::new(640.0, 480.0),
            initial_position: Some(LogicalPosition::new(128.0, 128.0)),
        }
    }
}

pub struct Runtime;

impl Runtime {
    /// Opens the window and blocks in the event loop until the app exits.
    ///
    /// Window or GPU setup failures end the loop and are returned here.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState {
            config,
            gpu_init,
            app,
            window: None,
            exit_requested: false,
            fatal: None,
        };

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        state.fatal.map_or(Ok(()), Err)
    }
}

/// The window and the surface that borrows it, kept together.
#[self_referencing]
struct WindowEntry {
    input_state: InputState,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

impl WindowEntry {
    fn create(event_loop: &ActiveEventLoop, config: &RuntimeConfig, gpu_init: GpuInit) -> Result<Self> {
        let mut attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(config.initial_size);
        if let Some(pos) = config.initial_position {
            attrs = attrs.with_position(pos);
        }
        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        WindowEntryTryBuilder {
            input_state: InputState::default(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed for window")
    }

    fn request_redraw(&self) {
        self.with_window(|w| w.request_redraw());
    }

    /// Logical size, or `None` while the window is minimized.
    fn logical_size(&self) -> Option<(f32, f32)> {
        self.with_window(|w| {
            let size: LogicalSize<f32> = w.inner_size().to_logical(w.scale_factor());
            (size.width > 0.0 && size.height > 0.0).then_some((size.width, size.height))
        })
    }

    fn resize_surface(&mut self) {
        let size = self.with_window(|w| w.inner_size());
        self.with_gpu_mut(|gpu| gpu.resize(size));
    }
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    window: Option<WindowEntry>,
    exit_requested: bool,
    fatal: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn apply(&mut self, event_loop: &ActiveEventLoop, control: AppControl) {
        match control {
            AppControl::Continue => {}
            AppControl::Redraw => {
                if let Some(entry) = self.window.as_ref() {
                    entry.request_redraw();
                }
            }
            AppControl::Exit => {
                self.exit_requested = true;
                event_loop.exit();
            }
        }
    }

    /// Tells the app the new projection extent and repaints.
    fn notify_resize(&mut self, event_loop: &ActiveEventLoop) {
        let Some((w, h)) = self.window.as_ref().and_then(WindowEntry::logical_size) else {
            return;
        };
        let control = self.app.on_resize(w, h);
        self.apply(event_loop, control);
        self.apply(event_loop, AppControl::Redraw);
    }

    fn dispatch_input(&mut self, event: &WindowEvent) -> AppControl {
        let (app, window) = (&mut self.app, &mut self.window);
        let Some(entry) = window.as_mut() else {
            return AppControl::Continue;
        };

        entry.with_mut(|fields| {
            match translate_window_event(fields.window, fields.input_state, event) {
                Some(ev) => {
                    fields.input_state.apply_event(&ev);
                    app.on_input(&ev, fields.input_state)
                }
                None => AppControl::Continue,
            }
        })
    }

    fn redraw(&mut self) -> AppControl {
        let (app, window) = (&mut self.app, &mut self.window);
        let Some(entry) = window.as_mut() else {
            return AppControl::Continue;
        };

        entry.with_mut(|fields| {
            let mut ctx = FrameCtx {
                window: WindowCtx {
                    id: fields.window.id(),
                    window: fields.window,
                },
                gpu: fields.gpu,
                input: fields.input_state,
            };
            app.on_frame(&mut ctx)
        })
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match WindowEntry::create(event_loop, &self.config, self.gpu_init.clone()) {
            Ok(entry) => {
                log::debug!("window created: {}", self.config.title);
                self.window = Some(entry);
                // First show: establish the projection and paint once.
                self.notify_resize(event_loop);
            }
            Err(e) => {
                log::error!("failed to create window: {e:#}");
                self.fatal = Some(e);
                self.exit_requested = true;
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }
        event_loop.set_control_flow(ControlFlow::Wait);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let control = self.dispatch_input(&event);
        self.apply(event_loop, control);
        if self.exit_requested {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                let control = self.app.on_close();
                self.apply(event_loop, control);
            }
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.window.as_mut() {
                    entry.resize_surface();
                }
                self.notify_resize(event_loop);
            }
            WindowEvent::RedrawRequested => {
                let control = self.redraw();
                self.apply(event_loop, control);
            }
            _ => {}
        }
    }
}
