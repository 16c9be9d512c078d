//! Keystroke assembly for physical "keyboard wedge" scanners.
//!
//! Wedge scanners type a code as rapid keypresses and finish with Enter.
//! `KeyBuffer` collects the characters and emits the buffered string as one
//! candidate when Enter arrives. It does no validation of its own; emitted
//! candidates go through the engine like any decoder output.

/// One key event from the wedge stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
}

#[derive(Debug, Default)]
pub struct KeyBuffer {
    buffer: String,
}

impl KeyBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key event. Enter with a non-empty (after trim) buffer
    /// yields the candidate and resets the buffer; Enter on an empty or
    /// whitespace-only buffer yields nothing.
    pub fn press(&mut self, key: Key) -> Option<String> {
        match key {
            Key::Char(c) => {
                self.buffer.push(c);
                None
            }
            Key::Enter => {
                let candidate = self.buffer.trim().to_string();
                self.buffer.clear();
                if candidate.is_empty() {
                    None
                } else {
                    Some(candidate)
                }
            }
        }
    }

    /// Drop any partially typed input, e.g. when the scan surface regains
    /// focus and stale keystrokes must not leak into the next candidate.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
