//! Winit window backend for orb.
//!
//! Opens a native window and presents the orb framebuffer using:
//! - [`winit`] for window creation and input events
//! - [`softbuffer`] for CPU-based pixel presentation
//!
//! Unlike a callback-driven winit application, [`WinitWindow`] is polled:
//! each [`poll_event`](RenderWindow::poll_event) on an empty queue pumps the
//! native event loop once without waiting. Pumping is available on Windows,
//! macOS, Linux (X11 and Wayland) and Android.
//!
//! # Usage
//!
//! ```rust,no_run
//! use orb_core::{CircleShape, Color, RenderLoop, WindowConfig};
//! use orb_winit::WinitWindow;
//!
//! let mut window = WinitWindow::open(WindowConfig::default()).unwrap();
//! let circle = CircleShape::new(100.0).with_fill_color(Color::GREEN);
//! RenderLoop::new().run(&mut window, &[&circle]).unwrap();
//! ```

mod input;
mod present;

use std::collections::VecDeque;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    error::{EventLoopError, OsError},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Window, WindowId},
};

use orb_core::{Event, Framebuffer, RenderWindow, WindowConfig};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures of the native window backend.
#[derive(Debug, thiserror::Error)]
pub enum WinitError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] OsError),

    #[error("surface error: {0}")]
    Surface(#[from] softbuffer::SoftBufferError),

    #[error("event loop exited with code {0} before a window was created")]
    Exited(i32),

    #[error("surface buffer holds {actual} pixels, expected {width}x{height}")]
    BufferSize {
        width: usize,
        height: usize,
        actual: usize,
    },
}

// ---------------------------------------------------------------------------
// Surface
// ---------------------------------------------------------------------------

/// The OS window together with the softbuffer surface presenting into it.
struct SurfaceState {
    window: Arc<Window>,
    surface: softbuffer::Surface<Arc<Window>, Arc<Window>>,
    pixel_width: u32,
    pixel_height: u32,
}

impl SurfaceState {
    fn create(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Self, WinitError> {
        let window_attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(PhysicalSize::new(config.width, config.height))
            .with_resizable(config.resizable);

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let context = softbuffer::Context::new(window.clone())?;
        let surface = softbuffer::Surface::new(&context, window.clone())?;

        let PhysicalSize { width, height } = window.inner_size();
        let mut state = Self {
            window,
            surface,
            pixel_width: 0,
            pixel_height: 0,
        };
        state.resize(width, height)?;
        Ok(state)
    }

    /// The recorded size only changes once the surface has accepted it.
    fn resize(&mut self, width: u32, height: u32) -> Result<(), WinitError> {
        // Minimised windows report a zero size; keep the old buffer.
        if let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) {
            self.surface.resize(w, h)?;
        }
        self.pixel_width = width;
        self.pixel_height = height;
        Ok(())
    }

    fn present(&mut self, framebuffer: &Framebuffer) -> Result<(), WinitError> {
        let width = self.pixel_width as usize;
        let height = self.pixel_height as usize;
        if width == 0 || height == 0 {
            return Ok(());
        }

        let mut buf = self.surface.buffer_mut()?;
        if !present::blit_stretched(framebuffer, &mut buf, width, height) {
            return Err(WinitError::BufferSize {
                width,
                height,
                actual: buf.len(),
            });
        }
        buf.present()?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// PumpHandler: ApplicationHandler
// ---------------------------------------------------------------------------

/// Receives native callbacks while the event loop is pumped and queues them.
struct PumpHandler {
    config: WindowConfig,
    state: Option<SurfaceState>,
    pending: VecDeque<Event>,
    error: Option<WinitError>,
    closed: bool,
}

impl PumpHandler {
    fn new(config: WindowConfig) -> Self {
        Self {
            config,
            state: None,
            pending: VecDeque::new(),
            error: None,
            closed: false,
        }
    }
}

impl ApplicationHandler for PumpHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() || self.closed {
            return;
        }
        match SurfaceState::create(event_loop, &self.config) {
            Ok(state) => {
                log::debug!("created window {:?}", state.window.id());
                self.state = Some(state);
            }
            Err(e) => self.error = Some(e),
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.closed {
            return;
        }

        if let WindowEvent::Resized(PhysicalSize { width, height }) = event {
            if let Some(state) = self.state.as_mut() {
                if let Err(e) = state.resize(width, height) {
                    log::warn!("failed to resize surface to {width}x{height}: {e}");
                    self.error = Some(e);
                }
            }
        }

        if let Some(event) = input::translate(&event) {
            self.pending.push_back(event);
        }
    }
}

// ---------------------------------------------------------------------------
// WinitWindow
// ---------------------------------------------------------------------------

/// A native window implementing [`RenderWindow`].
///
/// Must be opened on the main thread.
pub struct WinitWindow {
    event_loop: EventLoop<()>,
    handler: PumpHandler,
    framebuffer: Option<Framebuffer>,
    exited: bool,
}

impl WinitWindow {
    /// Create the event loop and open a window as described by `config`.
    pub fn open(config: WindowConfig) -> Result<Self, WinitError> {
        let mut event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let framebuffer = Framebuffer::new(config.width, config.height);
        let mut handler = PumpHandler::new(config);

        // The window can only be created once the platform resumes us.
        while handler.state.is_none() {
            let status = event_loop.pump_app_events(Some(Duration::ZERO), &mut handler);
            if let Some(e) = handler.error.take() {
                return Err(e);
            }
            if let PumpStatus::Exit(code) = status {
                return Err(WinitError::Exited(code));
            }
        }

        Ok(Self {
            event_loop,
            handler,
            framebuffer: Some(framebuffer),
            exited: false,
        })
    }

    fn pump(&mut self) {
        if self.exited {
            return;
        }
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.handler);
        if let PumpStatus::Exit(code) = status {
            log::warn!("event loop exited with code {code}");
            self.exited = true;
            self.handler.pending.push_back(Event::Closed);
        }
    }
}

impl RenderWindow for WinitWindow {
    type Error = WinitError;

    fn is_open(&self) -> bool {
        self.framebuffer.is_some()
    }

    fn poll_event(&mut self) -> Option<Event> {
        if !self.is_open() {
            return None;
        }
        if self.handler.pending.is_empty() {
            self.pump();
        }
        self.handler.pending.pop_front()
    }

    fn close(&mut self) {
        if self.framebuffer.take().is_none() {
            return;
        }
        self.handler.closed = true;
        self.handler.pending.clear();
        // Dropping the surface and the last window handle destroys the window.
        self.handler.state = None;
    }

    fn size(&self) -> (u32, u32) {
        (self.handler.config.width, self.handler.config.height)
    }

    fn title(&self) -> &str {
        &self.handler.config.title
    }

    fn target(&mut self) -> Option<&mut Framebuffer> {
        self.framebuffer.as_mut()
    }

    fn display(&mut self) -> Result<(), WinitError> {
        if let Some(e) = self.handler.error.take() {
            return Err(e);
        }
        match (self.framebuffer.as_ref(), self.handler.state.as_mut()) {
            (Some(fb), Some(state)) => state.present(fb),
            _ => Ok(()),
        }
    }
}
