//! Key and mouse state fed from window events.

use std::collections::HashSet;

use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, MouseButton, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

/// Everything the game loop needs to know about the user's input devices.
///
/// Keys are tracked by physical key code so the layout does not change the
/// controls. `previously_pressed` is the key set at the last
/// [`end_tick`](Self::end_tick), which lets callers detect key-down edges.
#[derive(Debug, Default, Clone)]
pub struct InputState {
    pressed: HashSet<KeyCode>,
    previously_pressed: HashSet<KeyCode>,
    mouse_buttons: HashSet<MouseButton>,
    pub cursor: PhysicalPosition<f64>,
    pub cursor_in_window: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the event changed the input state.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(code) => {
                    self.set_key(code, event.state == ElementState::Pressed);
                    true
                }
                PhysicalKey::Unidentified(_) => false,
            },
            WindowEvent::MouseInput { state, button, .. } => {
                self.set_mouse_button(*button, *state == ElementState::Pressed);
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = *position;
                true
            }
            WindowEvent::CursorEntered { .. } => {
                self.cursor_in_window = true;
                true
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor_in_window = false;
                true
            }
            _ => false,
        }
    }

    pub fn set_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.pressed.insert(key);
        } else {
            self.pressed.remove(&key);
        }
    }

    pub fn set_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            self.mouse_buttons.insert(button);
        } else {
            self.mouse_buttons.remove(&button);
        }
    }

    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Pressed now but not at the end of the previous tick.
    pub fn just_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key) && !self.previously_pressed.contains(&key)
    }

    pub fn is_mouse_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons.contains(&button)
    }

    pub fn end_tick(&mut self) {
        self.previously_pressed.clone_from(&self.pressed);
    }
}
