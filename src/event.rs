use std::ops::Sub;

/// Cursor position in window pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    S,
    Up,
    Down,
    Left,
    Right,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Input collected between two frames, in arrival order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    MouseDown(MouseButton),
    MouseUp(MouseButton),
    CursorMoved(Position),
}

#[cfg(feature = "gui")]
pub use translate::InputTranslator;

#[cfg(feature = "gui")]
mod translate {
    use winit::event::{ElementState, KeyboardInput, VirtualKeyCode, WindowEvent};

    use super::{InputEvent, Key, MouseButton, Position};

    /// Turns winit window events into [`InputEvent`]s.
    ///
    /// OS key auto-repeat is dropped: a key produces one `KeyDown` until it
    /// is released.
    #[derive(Debug, Default)]
    pub struct InputTranslator {
        held: Vec<Key>,
    }

    impl InputTranslator {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
            match event {
                WindowEvent::CloseRequested => Some(InputEvent::Quit),
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state,
                            virtual_keycode: Some(code),
                            ..
                        },
                    ..
                } => self.key(map_key(*code)?, *state == ElementState::Pressed),
                WindowEvent::MouseInput { state, button, .. } => {
                    let button = map_button(*button)?;
                    Some(match state {
                        ElementState::Pressed => InputEvent::MouseDown(button),
                        ElementState::Released => InputEvent::MouseUp(button),
                    })
                }
                WindowEvent::CursorMoved { position, .. } => Some(InputEvent::CursorMoved(
                    Position::new(position.x as i32, position.y as i32),
                )),
                _ => None,
            }
        }

        pub(super) fn key(&mut self, key: Key, pressed: bool) -> Option<InputEvent> {
            let was_held = self.held.contains(&key);
            if pressed {
                if was_held {
                    return None;
                }
                self.held.push(key);
                Some(InputEvent::KeyDown(key))
            } else {
                self.held.retain(|k| *k != key);
                Some(InputEvent::KeyUp(key))
            }
        }
    }

    const fn map_key(code: VirtualKeyCode) -> Option<Key> {
        match code {
            VirtualKeyCode::S => Some(Key::S),
            VirtualKeyCode::Up => Some(Key::Up),
            VirtualKeyCode::Down => Some(Key::Down),
            VirtualKeyCode::Left => Some(Key::Left),
            VirtualKeyCode::Right => Some(Key::Right),
            _ => None,
        }
    }

    const fn map_button(button: winit::event::MouseButton) -> Option<MouseButton> {
        match button {
            winit::event::MouseButton::Left => Some(MouseButton::Left),
            winit::event::MouseButton::Middle => Some(MouseButton::Middle),
            winit::event::MouseButton::Right => Some(MouseButton::Right),
            winit::event::MouseButton::Other(_) => None,
        }
    }
}
