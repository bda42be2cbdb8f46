//! Application event loop.
//!
//! [`run`] opens the window, builds the GPU [`Context`], the [`Game`] and the
//! [`DebugUi`], and then drives everything from winit events.
//!
//! # Lifecycle Flow
//!
//! Each frame follows this pattern:
//! 1. Feed window/device events to both the UI and the [`InputState`]
//! 2. Mirror the UI's input capture into the [`InputState`]
//! 3. Update the game (camera, entity animation, exit request)
//! 4. Lay out the debug UI
//! 5. Write per-object constants, draw the scene, draw the UI over it
//! 6. Present frame

use std::{iter, sync::Arc};

use anyhow::Context as _;
use instant::Instant;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    config::AppConfig,
    context::Context,
    game::{Control, Game},
    input::InputState,
    ui::{DebugUi, UiFrame},
};

/// Everything that only exists once the window is up.
pub struct AppState {
    pub(crate) ctx: Context,
    game: Game,
    ui: DebugUi,
    input: InputState,
}

impl AppState {
    async fn new(window: Arc<Window>, config: &AppConfig) -> anyhow::Result<Self> {
        let ctx = Context::new(window, config).await?;
        let game = Game::new(&ctx.device, ctx.config.format, ctx.aspect_ratio(), config).await?;
        let ui = DebugUi::new(ctx.window(), &ctx.device, ctx.config.format);
        Ok(Self {
            ctx,
            game,
            ui,
            input: InputState::new(),
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        if self.ctx.resize(width, height) {
            self.game.on_resize(width, height);
        }
    }

    fn render(&mut self, ui_frame: UiFrame) -> Result<(), wgpu::SurfaceError> {
        // invoke main render loop
        self.ctx.window.request_redraw();

        // Rendering requires the surface to be configured
        if !self.ctx.is_surface_configured() {
            return Ok(());
        }

        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.game.write_uniforms(&self.ctx.queue);
        self.game
            .encode_scene(&mut encoder, &view, &self.ctx.depth_texture.view);
        let ui_commands = self.ui.paint(
            &self.ctx.device,
            &self.ctx.queue,
            &mut encoder,
            &view,
            ui_frame,
        );

        self.ctx
            .queue
            .submit(ui_commands.into_iter().chain(iter::once(encoder.finish())));
        self.ctx.window.pre_present_notify();
        output.present();
        Ok(())
    }

    /// One full frame: update, lay out the UI, render. Returns whether to keep running.
    fn frame(&mut self, dt: f32, total_time: f32) -> Control {
        self.input
            .set_capture(self.ui.wants_keyboard(), self.ui.wants_pointer());
        let control = self.game.update(dt, total_time, &self.input);
        self.input.end_frame();
        if control == Control::Exit {
            return control;
        }

        let size = self.ctx.size();
        let AppState { ctx, game, ui, .. } = self;
        let ui_frame = ui.run(ctx.window(), size, |egui_ctx| game.build_ui(egui_ctx, size));

        match self.render(ui_frame) {
            Ok(()) => {}
            // Reconfigure the surface if it's lost or outdated
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = self.ctx.window.inner_size();
                log::warn!("surface lost or outdated, reconfiguring");
                self.resize(size.width, size.height);
            }
            Err(wgpu::SurfaceError::Timeout) => log::warn!("surface texture timed out, frame skipped"),
            Err(e) => log::error!("Unable to render {}", e),
        }
        Control::Continue
    }
}

pub struct App {
    config: AppConfig,
    async_runtime: tokio::runtime::Runtime,
    state: Option<AppState>,
    start_time: Instant,
    last_time: Instant,
    init_error: Option<anyhow::Error>,
}

impl App {
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let async_runtime =
            tokio::runtime::Runtime::new().context("failed to start the async runtime")?;
        Ok(Self {
            config,
            async_runtime,
            state: None,
            start_time: Instant::now(),
            last_time: Instant::now(),
            init_error: None,
        })
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<AppState> {
        let window_attributes = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.width,
                self.config.height,
            ));
        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .context("failed to create the window")?,
        );
        self.async_runtime
            .block_on(AppState::new(window, &self.config))
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        match self.init(event_loop) {
            Ok(state) => {
                state.ctx.window.request_redraw();
                self.start_time = Instant::now();
                self.last_time = self.start_time;
                self.state = Some(state);
            }
            Err(e) => {
                log::error!("initialisation failed: {:#}", e);
                self.init_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let Some(state) = &mut self.state {
            state.input.handle_device_event(&event);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };

        // Input sees every event, releases included; capture is applied per frame.
        state.ui.handle_window_event(&state.ctx.window, &event);
        state.input.handle_window_event(&event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => state.resize(size.width, size.height),
            WindowEvent::RedrawRequested => {
                let now = Instant::now();
                let dt = now.duration_since(self.last_time).as_secs_f32();
                let total_time = now.duration_since(self.start_time).as_secs_f32();
                self.last_time = now;

                if state.frame(dt, total_time) == Control::Exit {
                    log::info!("exit requested");
                    event_loop.exit();
                }
            }
            _ => {}
        }
    }
}

/// Opens the window and runs until it is closed or Escape is pressed.
pub fn run(config: AppConfig) -> anyhow::Result<()> {
    if let Err(e) = env_logger::try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    };

    let event_loop = EventLoop::new().context("failed to create an event loop")?;
    let mut app = App::new(config)?;
    event_loop.run_app(&mut app)?;

    match app.init_error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
