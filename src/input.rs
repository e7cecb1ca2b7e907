use glam::Vec2;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::{Key, NamedKey};

/// Window input reduced to what the demos react to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DemoInput {
    /// Left button pressed at `position` pixels on a `canvas_size` canvas.
    Press { position: Vec2, canvas_size: Vec2 },
    SpeedUp,
    SpeedDown,
    Stop,
}

#[derive(Debug, Default)]
pub struct InputState {
    pub cursor: Vec2,
}

impl InputState {
    pub fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor = Vec2::new(x as f32, y as f32);
    }

    pub fn handle_mouse_button(
        &self,
        button: MouseButton,
        state: ElementState,
        canvas_size: Vec2,
    ) -> Option<DemoInput> {
        match (button, state) {
            (MouseButton::Left, ElementState::Pressed) => Some(DemoInput::Press {
                position: self.cursor,
                canvas_size,
            }),
            _ => None,
        }
    }

    pub fn handle_key(&self, key: &Key, state: ElementState) -> Option<DemoInput> {
        if state != ElementState::Pressed {
            return None;
        }
        match key {
            Key::Named(NamedKey::ArrowUp) => Some(DemoInput::SpeedUp),
            Key::Named(NamedKey::ArrowDown) => Some(DemoInput::SpeedDown),
            Key::Named(NamedKey::Escape) => Some(DemoInput::Stop),
            Key::Character(c) => match c.as_str() {
                "+" | "=" => Some(DemoInput::SpeedUp),
                "-" => Some(DemoInput::SpeedDown),
                _ => None,
            },
            _ => None,
        }
    }
}
