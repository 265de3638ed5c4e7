use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use peridot::app::Sandbox;
use peridot::camera::Projection;
use peridot::cli::Cli;
use peridot::config::SandboxConfig;
use peridot::core::{FpsCounter, FrameClock, Viewport, WinitInput};
use peridot::renderer::Renderer;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

struct App {
    config: SandboxConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    sandbox: Sandbox,
    input: WinitInput,
    clock: FrameClock,
    fps: FpsCounter,
}

impl App {
    fn new(config: SandboxConfig) -> Self {
        let sandbox = Sandbox::new(&config);
        Self {
            config,
            window: None,
            renderer: None,
            sandbox,
            input: WinitInput::new(),
            clock: FrameClock::new(),
            fps: FpsCounter::new(FPS_UPDATE_INTERVAL),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let delta = self.clock.tick();
        if let Some(fps) = self.fps.tick(delta) {
            log::info!("FPS: {:.1} at {:.0}s", fps, self.clock.elapsed());
        }

        let (Some(window), Some(renderer)) = (&self.window, &mut self.renderer) else {
            return;
        };

        let viewport = Viewport::from(window.inner_size());
        self.sandbox.update(delta, viewport.aspect_ratio(), &self.input);
        if self.sandbox.quit_requested() {
            event_loop.exit();
            return;
        }

        if let Err(e) = renderer.render(self.sandbox.view_projection()) {
            log::error!("Render error: {:#}", e);
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
                .with_title(self.config.window.title.clone())
                .with_inner_size(winit::dpi::PhysicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(Renderer::new(window.clone())) {
            Ok(renderer) => renderer,
            Err(e) => {
                log::error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.clock.reset();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.input.process_event(&event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(Viewport::from(size));
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

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => SandboxConfig::load(path)?,
        None => SandboxConfig::default(),
    };
    cli.apply(&mut config);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config.clone());

    match config.projection {
        Projection::Orthographic => {
            log::info!("Sandbox - Controls: arrows to pan, Q/E to roll, Escape to quit")
        }
        Projection::Perspective => log::info!(
            "Sandbox - Controls: WASD, Space/Shift, Q/E, hold right mouse to look, Escape to quit"
        ),
    }
    event_loop.run_app(&mut app)?;

    let seconds = app.clock.elapsed();
    log::info!(
        "Sandbox closed after {} frames in {:.1}s",
        app.clock.frames(),
        seconds
    );

    Ok(())
}
