//! **orb-core**: backend-agnostic pieces of the orb window demo.
//!
//! This crate provides colours, geometry, a CPU framebuffer, drawable shapes,
//! window events, the [`RenderWindow`] trait that window backends implement,
//! and the [`RenderLoop`] that polls, clears, draws and presents until the
//! window is closed. [`HeadlessWindow`] runs the same loop without a display.

pub mod color;
pub mod event;
pub mod framebuffer;
pub mod geom;
pub mod headless;
pub mod render_loop;
pub mod shape;
pub mod window;

pub use color::Color;
pub use event::{Event, Key, MouseButton};
pub use framebuffer::Framebuffer;
pub use geom::{Rect, Vec2};
pub use headless::HeadlessWindow;
pub use render_loop::{FrameStats, RenderLoop};
pub use shape::{CircleShape, Drawable};
pub use window::{RenderWindow, WindowConfig};
