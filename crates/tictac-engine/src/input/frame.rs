use crate::coords::Vec2;

use super::types::{InputEvent, MouseButton, MouseButtonState, PointerButtonEvent};

/// Input events received since the last frame, in arrival order.
#[derive(Debug, Default)]
pub struct InputFrame {
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    /// Window-space positions of every `button` press this frame, in order.
    pub fn presses(&self, button: MouseButton) -> impl Iterator<Item = Vec2> + '_ {
        self.events.iter().filter_map(move |ev| match ev {
            InputEvent::PointerButton(PointerButtonEvent {
                button: b,
                state: MouseButtonState::Pressed,
                x,
                y,
            }) if *b == button => Some(Vec2::new(*x, *y)),
            _ => None,
        })
    }
}
