use super::frame::InputFrame;
use super::types::{InputEvent, PointerButtonEvent, PointerMoveEvent};

/// Pointer tracking the runtime needs to attach a position to button events.
#[derive(Debug, Default)]
pub(crate) struct InputState {
    /// Pointer position in logical pixels, `None` outside the window.
    pub(crate) pointer_pos: Option<(f32, f32)>,
}

impl InputState {
    /// Updates the tracked pointer and queues `ev` on `frame`.
    pub(crate) fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::PointerMoved(PointerMoveEvent { x, y })
            | InputEvent::PointerButton(PointerButtonEvent { x, y, .. }) => {
                self.pointer_pos = Some((*x, *y));
            }
            InputEvent::PointerLeft => self.pointer_pos = None,
        }

        frame.push_event(ev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{MouseButton, MouseButtonState};

    fn button(state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent { button: MouseButton::Left, state, x, y })
    }

    #[test]
    fn every_event_is_queued_in_order() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, button(MouseButtonState::Pressed, 10.0, 20.0));
        st.apply_event(&mut fr, button(MouseButtonState::Released, 11.0, 21.0));
        assert_eq!(fr.events.len(), 2);
        assert_eq!(fr.presses(MouseButton::Left).count(), 1);
        assert_eq!(st.pointer_pos, Some((11.0, 21.0)));
    }

    #[test]
    fn pointer_left_forgets_position() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, InputEvent::PointerMoved(PointerMoveEvent { x: 3.0, y: 4.0 }));
        assert_eq!(st.pointer_pos, Some((3.0, 4.0)));
        st.apply_event(&mut fr, InputEvent::PointerLeft);
        assert_eq!(st.pointer_pos, None);
    }
}
