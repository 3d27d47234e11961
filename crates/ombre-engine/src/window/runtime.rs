use std::sync::Arc;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::translate_window_event;
use crate::input::{InputFrame, InputState};

/// Window configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "ombre".to_string(),
            initial_size: LogicalSize::new(720.0, 480.0),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and drives `app` until it exits or the window closes.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        // Redraws are requested on input and resize only.
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut state = AppState { config, gpu_init, app, window: None, failure: None };
        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

struct WindowEntry {
    window: Arc<Window>,
    gpu: Gpu,
    input_state: InputState,
    input_frame: InputFrame,
}

struct AppState<A: App> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,
    window: Option<WindowEntry>,
    failure: Option<anyhow::Error>,
}

impl<A: App> AppState<A> {
    fn create_window(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );
        let gpu = pollster::block_on(Gpu::new(window.clone(), self.gpu_init.clone()))
            .context("GPU initialization failed")?;

        Ok(WindowEntry {
            window,
            gpu,
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
        })
    }

    /// Runs one app callback against the window entry and shuts down when it
    /// asks to exit.
    fn drive<F>(&mut self, event_loop: &ActiveEventLoop, f: F)
    where
        F: FnOnce(&mut A, &mut FrameCtx<'_>) -> AppControl,
    {
        let Some(entry) = self.window.as_mut() else {
            return;
        };
        let control = {
            let mut ctx = FrameCtx {
                window: WindowCtx { window: &entry.window },
                gpu: &mut entry.gpu,
                input_frame: &entry.input_frame,
            };
            f(&mut self.app, &mut ctx)
        };
        entry.input_frame.clear();

        if control == AppControl::Exit {
            log::debug!("app requested exit");
            self.window = None;
            event_loop.exit();
        }
    }
}

impl<A: App> ApplicationHandler for AppState<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match self.create_window(event_loop) {
            Ok(entry) => {
                entry.window.request_redraw();
                self.window = Some(entry);
                self.drive(event_loop, |app, ctx| {
                    app.on_start(ctx);
                    AppControl::Continue
                });
            }
            Err(err) => {
                log::error!("failed to open the studio window: {err:#}");
                self.failure = Some(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(entry) = self.window.as_mut() else {
            return;
        };

        let events = translate_window_event(&entry.input_state, &event);
        if !events.is_empty() {
            for ev in events {
                entry.input_state.apply_event(&mut entry.input_frame, ev);
            }
            entry.window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => {
                self.window = None;
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                entry.gpu.resize(new_size);
                entry.window.request_redraw();
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.window.inner_size();
                entry.gpu.resize(new_size);
                entry.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                self.drive(event_loop, |app, ctx| app.on_frame(ctx));
            }

            _ => {}
        }
    }
}
