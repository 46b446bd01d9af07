//! The poll / clear / draw / present loop.

use crate::color::Color;
use crate::event::Event;
use crate::shape::Drawable;
use crate::window::RenderWindow;

/// Counters collected over one run of the loop.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Frames presented on an open window.
    pub frames: u64,
    /// Events polled, close requests included.
    pub events: u64,
}

/// Runs a window until it is closed, redrawing a fixed scene every frame.
#[derive(Clone, Debug, Default)]
pub struct RenderLoop {
    background: Color,
}

impl RenderLoop {
    /// A loop clearing to the default (black) background.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the clear colour (builder).
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Run until `window` reports itself closed.
    ///
    /// Each iteration drains every pending event, closing the window on
    /// [`Event::Closed`] and ignoring the rest, then clears, draws `scene`
    /// in order and presents. A close request does not cut the iteration
    /// short: the render phase still runs and is a no-op on the closed
    /// window, and the loop ends at the next open check.
    pub fn run<W: RenderWindow + ?Sized>(
        &self,
        window: &mut W,
        scene: &[&dyn Drawable],
    ) -> Result<FrameStats, W::Error> {
        let (width, height) = window.size();
        log::info!("window '{}' open at {width}x{height}", window.title());

        let mut stats = FrameStats::default();
        while window.is_open() {
            while let Some(event) = window.poll_event() {
                stats.events += 1;
                self.handle_event(window, event);
            }

            let presenting = window.is_open();
            window.clear(self.background);
            for drawable in scene {
                window.draw(*drawable);
            }
            window.display()?;
            if presenting {
                stats.frames += 1;
            }
        }

        log::info!("window closed after {} frames", stats.frames);
        log::debug!("{stats:?}");
        Ok(stats)
    }

    fn handle_event<W: RenderWindow + ?Sized>(&self, window: &mut W, event: Event) {
        if event.is_close() {
            log::debug!("close requested");
            window.close();
        } else {
            log::trace!("ignoring {event:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Key;
    use crate::geom::Vec2;
    use crate::headless::HeadlessWindow;
    use crate::shape::CircleShape;
    use crate::window::WindowConfig;

    fn circle() -> CircleShape {
        CircleShape::new(100.0)
            .with_fill_color(Color::GREEN)
            .with_position(Vec2::new(350.0, 250.0))
    }

    fn noise() -> Vec<Event> {
        vec![
            Event::FocusLost,
            Event::MouseMoved { x: 12.0, y: 40.0 },
            Event::KeyPressed { key: Key::Escape },
            Event::Resized { width: 1024, height: 768 },
        ]
    }

    #[test]
    fn close_on_first_frame_presents_nothing() {
        let mut w = HeadlessWindow::new(WindowConfig::default()).with_script([vec![Event::Closed]]);
        let c = circle();
        let stats = RenderLoop::new().run(&mut w, &[&c]).unwrap();
        assert!(!w.is_open());
        assert_eq!(stats, FrameStats { frames: 0, events: 1 });
    }

    #[test]
    fn loop_runs_until_close_then_stops_within_one_iteration() {
        let mut script = vec![Vec::new(); 5];
        script.push(vec![Event::Closed]);
        let mut w = HeadlessWindow::new(WindowConfig::default()).with_script(script);
        let c = circle();
        let stats = RenderLoop::new().run(&mut w, &[&c]).unwrap();
        assert_eq!(stats.frames, 5);
        assert_eq!(w.frames_presented(), 5);
    }

    #[test]
    fn events_after_close_in_same_batch_are_dropped() {
        let mut w = HeadlessWindow::new(WindowConfig::default())
            .with_script([vec![Event::FocusGained, Event::Closed, Event::FocusLost]]);
        let stats = RenderLoop::new().run(&mut w, &[]).unwrap();
        assert_eq!(stats.events, 2);
    }

    #[test]
    fn circle_is_drawn_every_frame() {
        let mut script = vec![noise(); 3];
        script.push(vec![Event::Closed]);
        let mut w = HeadlessWindow::new(WindowConfig::default()).with_script(script);
        let c = circle();
        let stats = RenderLoop::new().run(&mut w, &[&c]).unwrap();
        assert_eq!(stats.frames, 3);

        let frame = w.last_frame().unwrap();
        assert_eq!((frame.width(), frame.height()), (800, 600));
        assert_eq!(frame.pixel(450, 350), Some(Color::GREEN));
        assert_eq!(frame.pixel(355, 350), Some(Color::GREEN));
        assert_eq!(frame.pixel(345, 350), Some(Color::BLACK));
        assert_eq!(frame.pixel(352, 252), Some(Color::BLACK));
        assert_eq!(frame.pixel(10, 10), Some(Color::BLACK));
    }

    #[test]
    fn non_close_events_leave_state_unchanged() {
        let c = circle();

        let mut quiet = HeadlessWindow::new(WindowConfig::default())
            .with_script([vec![], vec![], vec![Event::Closed]]);
        RenderLoop::new().run(&mut quiet, &[&c]).unwrap();

        let mut noisy = HeadlessWindow::new(WindowConfig::default())
            .with_script([noise(), noise(), vec![Event::Closed]]);
        let stats = RenderLoop::new().run(&mut noisy, &[&c]).unwrap();

        assert_eq!(stats.events, 9);
        assert_eq!(quiet.frames_presented(), noisy.frames_presented());
        assert_eq!(quiet.last_frame(), noisy.last_frame());
        assert_eq!(noisy.size(), (800, 600));
        assert_eq!(c, circle());
    }

    #[test]
    fn background_colour_is_configurable() {
        let mut w = HeadlessWindow::new(WindowConfig {
            width: 8,
            height: 8,
            ..Default::default()
        })
        .with_script([vec![], vec![Event::Closed]]);
        RenderLoop::new()
            .with_background(Color::BLUE)
            .run(&mut w, &[])
            .unwrap();
        assert_eq!(w.last_frame().unwrap().pixel(4, 4), Some(Color::BLUE));
    }
}
