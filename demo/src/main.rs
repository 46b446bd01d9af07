//! Opens the demo window and draws a green circle until it is closed.
//!
//! Run: cargo run --bin orb

use orb_core::RenderLoop;
use orb_winit::WinitWindow;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut window = WinitWindow::open(orb_demo::window_config())?;
    let circle = orb_demo::green_circle();

    let stats = RenderLoop::new().run(&mut window, &[&circle])?;
    log::debug!("presented {} frames, polled {} events", stats.frames, stats.events);

    Ok(())
}
