//! Dots: point masses on a wraparound plane
//!
//! Opens a window, steps the particle system once per frame with the smoothed frame time
//! and draws every particle as a small square.

mod cli;
mod clock;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Args;
use clock::{FpsReport, FrameClock};
use dots_renderer::{MarkerRenderer, Viewport};
use dots_simulation::{MarkerInstance, ParticleSystem};
use std::sync::Arc;
use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

const TITLE: &str = "Dots";

struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    renderer: MarkerRenderer,
    viewport: Viewport,
}

impl GpuState {
    async fn new(window: Arc<Window>, viewport: Viewport) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no suitable GPU adapter")?;

        log::info!("Using GPU: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: wgpu::MemoryHints::default(),
                experimental_features: wgpu::ExperimentalFeatures::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .or_else(|| surface_caps.formats.first().copied())
            .context("surface reports no formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoNoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = MarkerRenderer::new(&device, config.format);
        log::info!("Renderer initialized ({:?})", config.format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            renderer,
            viewport,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn render(&mut self, markers: &[MarkerInstance]) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer
            .render(&self.device, &self.queue, &view, &self.viewport, markers);

        output.present();
        Ok(())
    }
}

struct App {
    args: Args,
    system: ParticleSystem,
    clock: Option<FrameClock>,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    markers: Vec<MarkerInstance>,
    error: Option<anyhow::Error>,
}

impl App {
    fn new(args: Args, system: ParticleSystem) -> Self {
        Self {
            args,
            system,
            clock: None,
            window: None,
            gpu_state: None,
            markers: Vec::new(),
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let refresh_hz = event_loop.primary_monitor().and_then(|monitor| {
            let size = monitor.size();
            let refresh = monitor
                .refresh_rate_millihertz()
                .map(|mhz| f64::from(mhz) / 1000.0);
            log::info!("Display:");
            log::info!("\tname:    {}", monitor.name().unwrap_or_default());
            log::info!("\twidth:   {}", size.width);
            log::info!("\theight:  {}", size.height);
            log::info!("\trefresh: {:?}", refresh);
            refresh
        });

        let window_attributes = Window::default_attributes()
            .with_title(TITLE)
            .with_inner_size(winit::dpi::PhysicalSize::new(
                u32::from(self.args.width),
                u32::from(self.args.height),
            ));
        let window = Arc::new(
            event_loop
                .create_window(window_attributes)
                .context("failed to create window")?,
        );
        log::info!("Window:");
        log::info!("\twidth:  {}", self.args.width);
        log::info!("\theight: {}", self.args.height);

        let viewport = Viewport::new(self.system.width(), self.system.height());
        let gpu_state = pollster::block_on(GpuState::new(window.clone(), viewport))?;

        let (time_step, fixed) = match self.args.time_step {
            Some(time_step) => (time_step, true),
            None => (FrameClock::initial_time_step(refresh_hz), false),
        };
        log::info!("Initial time step: {:.5}s (fixed: {})", time_step, fixed);

        self.clock = Some(FrameClock::new(time_step, fixed, Instant::now()));
        self.window = Some(window);
        self.gpu_state = Some(gpu_state);
        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(gpu_state), Some(clock)) =
            (&self.window, &mut self.gpu_state, &mut self.clock)
        else {
            return;
        };

        let loop_start = Instant::now();

        self.system.step(clock.time_step());

        self.markers.clear();
        self.markers
            .extend(self.system.markers().map(|marker| marker.to_instance()));

        match gpu_state.render(&self.markers) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu_state.resize(window.inner_size())
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of GPU memory");
                event_loop.exit();
                return;
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }

        let now = Instant::now();
        if let Some(report) = clock.frame(now - loop_start, now) {
            window.set_title(&format!("{} - FPS: {:.1}", TITLE, report.fps));
            log_report(&report, &self.system);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                log::error!("{:#}", e);
                self.error = Some(e);
                event_loop.exit();
            }
        }
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
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => {
                if let Some(clock) = &mut self.clock {
                    log_report(&clock.report(Instant::now()), &self.system);
                }
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn log_report(report: &FpsReport, system: &ParticleSystem) {
    log::info!(
        "[{:.3} / {}] fps: {:.2}; time_step: {:.5}",
        report.elapsed,
        report.frames,
        report.fps,
        report.time_step
    );
    log::debug!(
        "tick {} sim time {:.3}s kinetic energy {:.6e}",
        system.tick(),
        system.elapsed(),
        system.kinetic_energy()
    );
}

fn run_headless(system: &mut ParticleSystem, ticks: u64, time_step: f64) {
    log::info!("Running {} steps headless (time step {:.5}s)", ticks, time_step);

    let start = Instant::now();
    let mut clock = FrameClock::new(time_step, true, start);
    for _ in 0..ticks {
        let loop_start = Instant::now();
        system.step(time_step);
        let now = Instant::now();
        if let Some(report) = clock.frame(now - loop_start, now) {
            log_report(&report, system);
        }
    }
    log_report(&clock.report(Instant::now()), system);

    log::info!("Finished {} steps", clock.frames());
    log::info!("Kinetic energy: {:.6e}", system.kinetic_energy());
    if let Some(first) = system.particles().first() {
        log::info!(
            "Particle 0: position ({:.6}, {:.6}) velocity ({:.6e}, {:.6e})",
            first.position.x,
            first.position.y,
            first.velocity.x,
            first.velocity.y
        );
    }
}

fn main() -> Result<()> {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Welcome!");

    let mut system =
        ParticleSystem::with_params(args.width, args.height, args.particles, args.params());
    log::info!(
        "Initialized {} particles ({:?}, {:?})",
        system.len(),
        system.params().seeding,
        system.params().force_law
    );

    if let Some(ticks) = args.headless {
        let time_step = args.time_step.unwrap_or(clock::FALLBACK_TIME_STEP);
        run_headless(&mut system, ticks, time_step);
        log::info!("Goodbye!");
        return Ok(());
    }

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(args, system);
    event_loop.run_app(&mut app)?;

    log::info!("Goodbye!");
    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
