//! Windowed app builder and runner.

use crate::animator::FieldAnimator;
use crate::config::FieldConfig;
use crate::error::{AppError, TextureError};
use crate::gpu::GpuState;
use crate::input::FieldInput;
use crate::particle::Bounds;
use crate::render::DrawList;
use crate::spawn::SpawnContext;
use crate::textures::{FilterMode, LogoImage};
use crate::time::Clock;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop, EventLoopProxy},
    window::{Window, WindowId},
};

/// Smooth-scroll step interval while nothing is being rendered.
const IDLE_SCROLL_FRAME: Duration = Duration::from_millis(16);

/// Events delivered to the app from outside the window.
#[derive(Debug)]
enum AppEvent {
    ImageLoaded(LogoImage),
    ImageFailed(TextureError),
}

/// A windowed logo field builder.
///
/// Use method chaining to configure, then call `.run()` to start.
///
/// ```ignore
/// LogoFieldApp::new()
///     .with_image("assets/logo.png")
///     .with_config(FieldConfig::default().with_max_logos(30))
///     .with_page_height(4.0)
///     .run()?;
/// ```
pub struct LogoFieldApp {
    image: PathBuf,
    filter: FilterMode,
    config: FieldConfig,
    window_size: (u32, u32),
    page_height: f32,
    scroll_indicator: bool,
    seed: Option<u64>,
    title: String,
}

impl LogoFieldApp {
    /// Create an app with default settings, drawing `logo.jpeg`.
    pub fn new() -> Self {
        Self {
            image: PathBuf::from("logo.jpeg"),
            filter: FilterMode::Linear,
            config: FieldConfig::default(),
            window_size: (1280, 720),
            page_height: 3.0,
            scroll_indicator: true,
            seed: None,
            title: "Logo Field".to_string(),
        }
    }

    /// Load the logo from an image file, in the background.
    pub fn with_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.image = path.into();
        self
    }

    /// Set how the logo is sampled when scaled.
    pub fn with_filter(mut self, filter: FilterMode) -> Self {
        self.filter = filter;
        self
    }

    /// Replace the whole field configuration.
    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    /// Set the virtual page height, in viewport heights.
    pub fn with_page_height(mut self, viewports: f32) -> Self {
        self.page_height = viewports;
        self
    }

    /// Enable or disable the `Enter` scroll indicator.
    pub fn with_scroll_indicator(mut self, enabled: bool) -> Self {
        self.scroll_indicator = enabled;
        self
    }

    /// Seed the random source for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Run the app. This blocks until the window is closed.
    pub fn run(self) -> Result<(), AppError> {
        let event_loop = EventLoop::<AppEvent>::with_user_event().build()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        load_image(self.image.clone(), self.filter, event_loop.create_proxy());

        let mut app = App::new(self);
        event_loop.run_app(&mut app)?;

        match app.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Default for LogoFieldApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode the logo off the event loop thread and report back through `proxy`.
fn load_image(path: PathBuf, filter: FilterMode, proxy: EventLoopProxy<AppEvent>) {
    let spawned = std::thread::Builder::new()
        .name("logo-loader".to_string())
        .spawn({
            let proxy = proxy.clone();
            move || {
                let event = match LogoImage::from_file(&path) {
                    Ok(image) => {
                        log::info!(
                            "loaded logo {} ({}x{})",
                            path.display(),
                            image.width,
                            image.height
                        );
                        AppEvent::ImageLoaded(image.with_filter(filter))
                    }
                    Err(err) => AppEvent::ImageFailed(err),
                };
                send(&proxy, event);
            }
        });

    if let Err(err) = spawned {
        send(&proxy, AppEvent::ImageFailed(TextureError::Io(err)));
    }
}

fn send(proxy: &EventLoopProxy<AppEvent>, event: AppEvent) {
    if proxy.send_event(event).is_err() {
        log::debug!("event loop closed before the logo image resolved");
    }
}

struct App {
    title: String,
    window_size: (u32, u32),
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    /// Decoded logo waiting for the window to exist.
    pending_image: Option<LogoImage>,
    animator: FieldAnimator,
    input: FieldInput,
    clock: Clock,
    draw_list: DrawList,
    error: Option<AppError>,
}

impl App {
    fn new(builder: LogoFieldApp) -> Self {
        let (width, height) = builder.window_size;
        let bounds = Bounds::new(width as f32, height as f32);
        let spawn = match builder.seed {
            Some(seed) => SpawnContext::seeded(seed),
            None => SpawnContext::new(),
        };

        Self {
            title: builder.title,
            window_size: builder.window_size,
            window: None,
            gpu_state: None,
            pending_image: None,
            animator: FieldAnimator::with_spawn(builder.config, bounds, spawn),
            input: FieldInput::new(
                bounds.width,
                bounds.height,
                builder.page_height,
                builder.scroll_indicator,
            ),
            clock: Clock::new(),
            draw_list: DrawList::new(),
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: AppError) {
        log::error!("{}", err);
        self.error = Some(err);
        event_loop.exit();
    }

    /// Feed queued input to the animator.
    fn dispatch(&mut self, now: Duration) {
        for event in self.input.drain() {
            self.animator.handle(event, now);
        }
    }

    /// Bring up the renderer once both the window and the logo exist.
    fn try_start(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = self.window.clone() else {
            return;
        };
        let Some(image) = self.pending_image.take() else {
            return;
        };

        // The instance buffer grows on demand past this
        let capacity = self.animator.field().config().pointer_cap().min(1024);
        match pollster::block_on(GpuState::new(window.clone(), &image, capacity)) {
            Ok(gpu_state) => {
                self.gpu_state = Some(gpu_state);
                self.animator.image_loaded();
                window.request_redraw();
            }
            Err(err) => self.fail(event_loop, err.into()),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = self.clock.now();
        self.input.step();
        self.dispatch(now);
        self.animator.advance(now);
        self.animator.frame(&mut self.draw_list);

        if let Some(gpu_state) = &mut self.gpu_state {
            match gpu_state.render(self.draw_list.sprites()) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    gpu_state.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("GPU out of memory, closing");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("render error: {:?}", e),
            }
        }

        if let Some(window) = &self.window {
            if self.clock.tick() {
                let fps = self.clock.fps();
                log::trace!("frame {}: {:.1} FPS", self.clock.frame(), fps);
                window.set_title(&format!("{} - {:.0} FPS", self.title, fps));
            }
            if self.animator.is_running() {
                window.request_redraw();
            }
        }
    }
}

impl ApplicationHandler<AppEvent> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.window_size;
        let window_attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(width, height));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => return self.fail(event_loop, err.into()),
        };

        let size = window.inner_size();
        log::info!("window created at {}x{}", size.width, size.height);
        self.input.resize(size.width as f32, size.height as f32);
        self.dispatch(self.clock.now());

        self.window = Some(window);
        self.try_start(event_loop);
    }

    fn user_event(&mut self, event_loop: &ActiveEventLoop, event: AppEvent) {
        match event {
            AppEvent::ImageLoaded(image) => {
                self.pending_image = Some(image);
                self.try_start(event_loop);
            }
            AppEvent::ImageFailed(err) => {
                log::warn!("logo image failed to load: {}", err);
                self.animator.image_failed();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            other => {
                if let WindowEvent::Resized(physical_size) = other {
                    if let Some(gpu_state) = &mut self.gpu_state {
                        gpu_state.resize(physical_size);
                    }
                }
                self.input.handle_event(&other);
                self.dispatch(self.clock.now());
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = self.clock.now();

        // Redraws step the smooth scroll once the loop runs; until then it is
        // stepped here at roughly frame rate
        let idle_scroll = !self.animator.is_running() && self.input.is_smooth_scrolling();
        if idle_scroll {
            self.input.step();
            self.dispatch(now);
        }
        self.animator.advance(now);

        // Timers keep running before the render loop starts, so wake for them
        let mut wake = self.animator.next_deadline();
        if idle_scroll && self.input.is_smooth_scrolling() {
            let frame = now + IDLE_SCROLL_FRAME;
            wake = Some(wake.map_or(frame, |deadline| deadline.min(frame)));
        }
        let flow = match wake {
            Some(deadline) => ControlFlow::WaitUntil(self.clock.instant_at(deadline)),
            None => ControlFlow::Wait,
        };
        event_loop.set_control_flow(flow);
    }
}
