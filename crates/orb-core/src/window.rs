//! The [`RenderWindow`] trait shared by every window backend, and its
//! creation-time [`WindowConfig`].

use crate::color::Color;
use crate::event::Event;
use crate::framebuffer::Framebuffer;
use crate::shape::Drawable;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Creation-time window settings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowConfig {
    /// Window title.
    pub title: String,
    /// Framebuffer width in pixels.
    pub width: u32,
    /// Framebuffer height in pixels.
    pub height: u32,
    /// Whether the user may resize the window.
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "SFML window".into(),
            width: 800,
            height: 600,
            resizable: true,
        }
    }
}

// ---------------------------------------------------------------------------
// RenderWindow
// ---------------------------------------------------------------------------

/// A window that can be polled for events and drawn into.
///
/// Drawing goes to a [`Framebuffer`] owned by the window and becomes visible
/// on [`display`](Self::display). Once [`close`](Self::close) has been
/// called, polling yields nothing and every drawing call is a no-op.
pub trait RenderWindow {
    type Error: std::error::Error + 'static;

    /// Whether the window is still open.
    fn is_open(&self) -> bool;

    /// Next pending event, without blocking.
    fn poll_event(&mut self) -> Option<Event>;

    /// Close the window and release its surface. Idempotent.
    fn close(&mut self);

    /// Framebuffer size as configured at creation.
    fn size(&self) -> (u32, u32);

    fn title(&self) -> &str;

    /// The framebuffer being drawn into, or `None` once closed.
    fn target(&mut self) -> Option<&mut Framebuffer>;

    /// Present the framebuffer. A no-op once closed.
    fn display(&mut self) -> Result<(), Self::Error>;

    /// Fill the framebuffer with `color`.
    fn clear(&mut self, color: Color) {
        if let Some(fb) = self.target() {
            fb.clear(color);
        }
    }

    /// Render `drawable` onto the framebuffer.
    fn draw(&mut self, drawable: &dyn Drawable) {
        if let Some(fb) = self.target() {
            drawable.draw(fb);
        }
    }
}
