use macroquad::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Confirm,
    Cancel,
    Backspace,
    CharacterTyped(char),
    WindowResized(u32, u32),
    QuitRequested,
}

const KEY_EVENTS: [(KeyCode, InputEvent); 8] = [
    (KeyCode::Up, InputEvent::ArrowUp),
    (KeyCode::Down, InputEvent::ArrowDown),
    (KeyCode::Left, InputEvent::ArrowLeft),
    (KeyCode::Right, InputEvent::ArrowRight),
    (KeyCode::Enter, InputEvent::Confirm),
    (KeyCode::KpEnter, InputEvent::Confirm),
    (KeyCode::Escape, InputEvent::Cancel),
    (KeyCode::Backspace, InputEvent::Backspace),
];

/// Turns macroquad's per-frame input state into an ordered event queue.
pub struct InputSource {
    last_size: (u32, u32),
}

impl InputSource {
    pub fn new(viewport: (u32, u32)) -> Self {
        Self { last_size: viewport }
    }

    pub fn poll(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if is_quit_requested() {
            events.push(InputEvent::QuitRequested);
        }

        let size = (screen_width() as u32, screen_height() as u32);
        if size != self.last_size {
            self.last_size = size;
            events.push(InputEvent::WindowResized(size.0, size.1));
        }

        // Typed characters first so that a name is complete before Enter commits it.
        while let Some(ch) = get_char_pressed() {
            if ch.is_alphabetic() {
                events.push(InputEvent::CharacterTyped(ch));
            }
        }

        for (key, event) in KEY_EVENTS {
            if is_key_pressed(key) {
                events.push(event);
            }
        }

        events
    }
}
