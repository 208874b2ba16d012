use std::sync::Arc;

use tracing::{debug, error, info};
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::Window,
};

// Import from the library crate
use lanerunner::{
    cli::CliArgs,
    controller::{FrameTimer, GameSession, InputProcessor},
    error::AppError,
    logging, resolve_config,
    view::{self, hud, CorridorRenderer, GpuContext},
    GameConfig,
};

const CLEAR_COLOR: wgpu::Color = wgpu::Color { r: 0.0, g: 0.4, b: 0.6, a: 1.0 };

struct App {
    window: Arc<Window>,
    gpu: GpuContext,
    depth_view: wgpu::TextureView,
    corridor: CorridorRenderer,

    // egui
    egui_renderer: egui_wgpu::Renderer,
    egui_state: egui_winit::State,
    egui_ctx: egui::Context,

    // Game state
    session: GameSession,
    input: InputProcessor,
    timer: FrameTimer,
    title: String,
    quit_requested: bool,
}

/// Winit logical key to the key names used by `KeyBindings`.
fn key_name(key: &Key) -> Option<&str> {
    match key {
        Key::Character(s) => Some(s.as_str()),
        Key::Named(NamedKey::Space) => Some(" "),
        Key::Named(NamedKey::Shift) => Some("Shift"),
        Key::Named(NamedKey::Escape) => Some("Escape"),
        Key::Named(NamedKey::ArrowLeft) => Some("ArrowLeft"),
        Key::Named(NamedKey::ArrowRight) => Some("ArrowRight"),
        _ => None,
    }
}

impl App {
    async fn new(window: Arc<Window>, config: &GameConfig) -> Result<Self, AppError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window.clone())?;
        let gpu = GpuContext::new(&instance, surface, size.width, size.height).await?;

        let (_, depth_view) = view::create_depth_texture(&gpu.device, gpu.config.width, gpu.config.height);

        let mut session = GameSession::new(config);
        session.camera_mut().set_aspect(gpu.config.width, gpu.config.height);

        let mesh = view::build_corridor_mesh(session.track(), config.start().z);
        debug!(vertices = mesh.vertices.len(), "built corridor mesh");
        let corridor = CorridorRenderer::new(&gpu.device, &gpu.queue, gpu.format, mesh.upload(&gpu.device));

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            None,
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &gpu.device,
            gpu.format,
            egui_wgpu::RendererOptions::default(),
        );

        Ok(Self {
            window,
            gpu,
            depth_view,
            corridor,
            egui_renderer,
            egui_state,
            egui_ctx,
            title: String::new(),
            session,
            input: InputProcessor::new(config.key_bindings.clone()),
            timer: FrameTimer::new(config.max_frame_dt),
            quit_requested: false,
        })
    }

    fn input(&mut self, event: &WindowEvent) -> bool {
        // First let egui process the event
        let egui_captured = self.egui_state.on_window_event(self.window.as_ref(), event).consumed;
        if egui_captured {
            return true;
        }

        match event {
            WindowEvent::KeyboardInput { event: KeyEvent { state: ElementState::Pressed, logical_key, repeat: false, .. }, .. } => {
                if let Some(intent) = key_name(logical_key).and_then(|k| self.input.intent_for_key(k)) {
                    if !self.session.handle(intent) {
                        self.quit_requested = true;
                    }
                }
                true
            }
            _ => false,
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.gpu.resize(new_size.width, new_size.height);
            let (_, depth_view) = view::create_depth_texture(&self.gpu.device, new_size.width, new_size.height);
            self.depth_view = depth_view;
            self.session.camera_mut().set_aspect(new_size.width, new_size.height);
        }
    }

    fn update(&mut self) {
        let dt = self.timer.tick();
        let outcome = self.session.step(dt);
        if outcome.collided {
            debug!(lives = self.session.lives(), cursor = self.session.track().cursor(), "hit obstacle");
        }

        let title = self.session.status_title();
        if title != self.title {
            self.window.set_title(&title);
            self.title = title;
        }

        self.corridor.update_camera(&self.gpu.queue, self.session.camera());
    }

    fn render_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(&self.window);
        let mut output = self.egui_ctx.run(raw_input, |ctx| {
            hud::draw_hud(ctx, &self.session, self.input.bindings(), self.timer.fps);
        });
        let platform_output = std::mem::take(&mut output.platform_output);
        self.egui_state.handle_platform_output(&self.window, platform_output);
        output
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.gpu.surface.get_current_texture()?;
        let view = output.texture.create_view(&wgpu::TextureViewDescriptor::default());

        let full_output = self.render_ui();
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.gpu.config.width, self.gpu.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };
        let primitives = self.egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);
        let textures_delta = full_output.textures_delta;

        let mut encoder = self.gpu.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("render_encoder"),
        });

        for (id, image_delta) in &textures_delta.set {
            self.egui_renderer.update_texture(&self.gpu.device, &self.gpu.queue, *id, image_delta);
        }
        self.egui_renderer.update_buffers(&self.gpu.device, &self.gpu.queue, &mut encoder, &primitives, &screen_descriptor);

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("corridor_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.corridor.draw(&mut render_pass);
        }

        // Render egui on top
        {
            let egui_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui_render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.egui_renderer.render(&mut egui_pass.forget_lifetime(), &primitives, &screen_descriptor);
        }

        for id in &textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

fn run() -> Result<(), AppError> {
    let args = CliArgs::parse().map_err(AppError::Usage)?;
    let config = resolve_config(&args)?;
    info!(?args, "starting lanerunner");

    let event_loop = EventLoop::new().map_err(AppError::CreateEventLoop)?;
    let window_attributes = Window::default_attributes()
        .with_title("lanerunner")
        .with_inner_size(winit::dpi::LogicalSize::new(config.window_width, config.window_height));
    let window = event_loop
        .create_window(window_attributes)
        .map_err(AppError::CreateWindow)?;
    let window = Arc::new(window);

    let mut app = pollster::block_on(App::new(window, &config))?;

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { ref event, window_id } if window_id == app.window.id() => {
                if !app.input(event) {
                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::Resized(physical_size) => app.resize(*physical_size),
                        WindowEvent::RedrawRequested => {
                            app.update();
                            match app.render() {
                                Ok(_) => {}
                                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                                    let size = app.window.inner_size();
                                    app.resize(size);
                                }
                                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                                Err(e) => error!("surface error: {e:?}"),
                            }
                        }
                        _ => {}
                    }
                }
                if app.quit_requested {
                    elwt.exit();
                }
            }
            Event::AboutToWait => {
                app.window.request_redraw();
            }
            _ => {}
        })
        .map_err(AppError::EventLoopRun)
}

fn main() {
    logging::init();

    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }
}
