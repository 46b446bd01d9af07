//! Translates winit window events into orb [`Event`] values.

use winit::event::{ElementState, MouseButton as WButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{Key as WKey, NamedKey};

use orb_core::event::{Event, Key, MouseButton};

/// Map a native event, or `None` for events orb has no counterpart for.
pub(crate) fn translate(event: &WindowEvent) -> Option<Event> {
    match event {
        WindowEvent::CloseRequested => Some(Event::Closed),
        WindowEvent::Resized(size) => Some(Event::Resized {
            width: size.width,
            height: size.height,
        }),
        WindowEvent::Focused(true) => Some(Event::FocusGained),
        WindowEvent::Focused(false) => Some(Event::FocusLost),
        WindowEvent::CursorMoved { position, .. } => Some(Event::MouseMoved {
            x: position.x as f32,
            y: position.y as f32,
        }),
        WindowEvent::CursorEntered { .. } => Some(Event::MouseEntered),
        WindowEvent::CursorLeft { .. } => Some(Event::MouseLeft),
        WindowEvent::KeyboardInput { event, .. } => {
            Some(translate_key(&event.logical_key, event.state))
        }
        WindowEvent::MouseInput { state, button, .. } => {
            Some(translate_mouse_button(*state, *button))
        }
        WindowEvent::MouseWheel { delta, .. } => translate_wheel(*delta),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Keyboard
// ---------------------------------------------------------------------------

pub(crate) fn translate_key(logical: &WKey, state: ElementState) -> Event {
    let key = match logical {
        WKey::Named(named) => match named {
            NamedKey::ArrowUp => Key::ArrowUp,
            NamedKey::ArrowDown => Key::ArrowDown,
            NamedKey::ArrowLeft => Key::ArrowLeft,
            NamedKey::ArrowRight => Key::ArrowRight,
            NamedKey::Escape => Key::Escape,
            NamedKey::Enter => Key::Enter,
            NamedKey::Tab => Key::Tab,
            NamedKey::Space => Key::Space,
            NamedKey::Backspace => Key::Backspace,
            NamedKey::Delete => Key::Delete,
            _ => Key::Other,
        },
        WKey::Character(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Char(c),
                _ => Key::Other,
            }
        }
        _ => Key::Other,
    };

    match state {
        ElementState::Pressed => Event::KeyPressed { key },
        ElementState::Released => Event::KeyReleased { key },
    }
}

// ---------------------------------------------------------------------------
// Mouse
// ---------------------------------------------------------------------------

pub(crate) fn translate_mouse_button(state: ElementState, button: WButton) -> Event {
    let button = match button {
        WButton::Left => MouseButton::Left,
        WButton::Right => MouseButton::Right,
        WButton::Middle => MouseButton::Middle,
        WButton::Back => MouseButton::Back,
        WButton::Forward => MouseButton::Forward,
        WButton::Other(n) => MouseButton::Other(n),
    };

    match state {
        ElementState::Pressed => Event::MouseButtonPressed { button },
        ElementState::Released => Event::MouseButtonReleased { button },
    }
}

pub(crate) fn translate_wheel(delta: MouseScrollDelta) -> Option<Event> {
    let delta = match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
    };
    if delta == 0.0 {
        return None;
    }
    Some(Event::MouseWheelScrolled { delta })
}
