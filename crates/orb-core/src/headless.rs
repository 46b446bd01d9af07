//! A [`RenderWindow`] with no OS surface behind it.
//!
//! Events come from a script of per-frame batches and every presented frame
//! is captured, which makes the render loop observable without a display.

use std::collections::VecDeque;
use std::convert::Infallible;

use crate::event::Event;
use crate::framebuffer::Framebuffer;
use crate::window::{RenderWindow, WindowConfig};

/// An offscreen window driven by scripted events.
#[derive(Debug)]
pub struct HeadlessWindow {
    config: WindowConfig,
    framebuffer: Option<Framebuffer>,
    script: VecDeque<Vec<Event>>,
    pending: VecDeque<Event>,
    batch_taken: bool,
    last_frame: Option<Framebuffer>,
    frames_presented: u64,
}

impl HeadlessWindow {
    /// An open window that never receives any event.
    pub fn new(config: WindowConfig) -> Self {
        let framebuffer = Framebuffer::new(config.width, config.height);
        Self {
            config,
            framebuffer: Some(framebuffer),
            script: VecDeque::new(),
            pending: VecDeque::new(),
            batch_taken: false,
            last_frame: None,
            frames_presented: 0,
        }
    }

    /// Script the events delivered per frame: batch `n` is drained during
    /// frame `n`. Once the script runs out, polling yields nothing.
    pub fn with_script(mut self, batches: impl IntoIterator<Item = Vec<Event>>) -> Self {
        self.script = batches.into_iter().collect();
        self
    }

    /// Copy of the framebuffer as of the most recent present.
    pub fn last_frame(&self) -> Option<&Framebuffer> {
        self.last_frame.as_ref()
    }

    /// Number of frames presented while the window was open.
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl RenderWindow for HeadlessWindow {
    type Error = Infallible;

    fn is_open(&self) -> bool {
        self.framebuffer.is_some()
    }

    fn poll_event(&mut self) -> Option<Event> {
        if !self.is_open() {
            return None;
        }
        if !self.batch_taken {
            self.batch_taken = true;
            if let Some(batch) = self.script.pop_front() {
                self.pending.extend(batch);
            }
        }
        self.pending.pop_front()
    }

    fn close(&mut self) {
        if self.framebuffer.take().is_some() {
            log::debug!("headless window '{}' closed", self.config.title);
        }
        self.pending.clear();
    }

    fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    fn title(&self) -> &str {
        &self.config.title
    }

    fn target(&mut self) -> Option<&mut Framebuffer> {
        self.framebuffer.as_mut()
    }

    fn display(&mut self) -> Result<(), Infallible> {
        if let Some(fb) = self.framebuffer.as_ref() {
            self.last_frame = Some(fb.clone());
            self.frames_presented += 1;
            // The next frame drains the next scripted batch.
            self.batch_taken = false;
        }
        Ok(())
    }
}
