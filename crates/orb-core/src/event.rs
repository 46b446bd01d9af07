//! Window events: [`Event`], [`Key`], [`MouseButton`].

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// A keyboard key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
    Enter,
    Tab,
    Space,
    Backspace,
    Delete,
    /// A printable character.
    Char(char),
    /// Any key without a dedicated variant.
    Other,
}

// ---------------------------------------------------------------------------
// MouseButton
// ---------------------------------------------------------------------------

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// Something that happened to a window, as returned by polling it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// The user asked for the window to be closed.
    Closed,
    /// The drawable area changed size, in physical pixels.
    Resized { width: u32, height: u32 },
    FocusLost,
    FocusGained,
    KeyPressed { key: Key },
    KeyReleased { key: Key },
    MouseMoved { x: f32, y: f32 },
    MouseEntered,
    MouseLeft,
    MouseButtonPressed { button: MouseButton },
    MouseButtonReleased { button: MouseButton },
    /// Vertical wheel movement; positive is away from the user.
    MouseWheelScrolled { delta: f32 },
}

impl Event {
    /// Whether this is a request to close the window.
    #[inline]
    pub fn is_close(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_closed_is_a_close_request() {
        assert!(Event::Closed.is_close());
        assert!(!Event::FocusLost.is_close());
        assert!(!Event::Resized { width: 1, height: 1 }.is_close());
        assert!(!Event::KeyPressed { key: Key::Escape }.is_close());
    }
}
