//! The scene shown by the `orb` binary: one green circle in an 800x600
//! window titled "SFML window".

use orb_core::{CircleShape, Color, Vec2, WindowConfig};

/// Radius of the demo circle.
pub const RADIUS: f32 = 100.0;

/// Top-left corner of the circle's bounding box.
pub const POSITION: Vec2 = Vec2::new(350.0, 250.0);

/// The window the demo opens.
pub fn window_config() -> WindowConfig {
    WindowConfig {
        title: "SFML window".into(),
        width: 800,
        height: 600,
        ..Default::default()
    }
}

/// The only drawable in the scene.
pub fn green_circle() -> CircleShape {
    CircleShape::new(RADIUS)
        .with_fill_color(Color::GREEN)
        .with_position(POSITION)
}
