//! Keyboard mapping for the jump action
//!
//! Several physical keys drive one logical action; it reads as pressed while
//! any of them is held.

/// Physical keys bound to jump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKey {
    ArrowUp,
    Space,
}

impl JumpKey {
    /// Map a `KeyboardEvent.code` value
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" => Some(JumpKey::ArrowUp),
            "Space" => Some(JumpKey::Space),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JumpInput {
    arrow_up: bool,
    space: bool,
}

impl JumpInput {
    pub fn set(&mut self, key: JumpKey, down: bool) {
        match key {
            JumpKey::ArrowUp => self.arrow_up = down,
            JumpKey::Space => self.space = down,
        }
    }

    /// Apply a key event; returns false for keys not bound to jump
    pub fn key_event(&mut self, code: &str, down: bool) -> bool {
        match JumpKey::from_code(code) {
            Some(key) => {
                self.set(key, down);
                true
            }
            None => false,
        }
    }

    pub fn pressed(&self) -> bool {
        self.arrow_up || self.space
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_key_holds_jump() {
        let mut input = JumpInput::default();
        assert!(!input.pressed());

        assert!(input.key_event("Space", true));
        assert!(input.key_event("ArrowUp", true));
        input.key_event("Space", false);
        assert!(input.pressed());
        input.key_event("ArrowUp", false);
        assert!(!input.pressed());
    }

    #[test]
    fn test_unbound_key() {
        let mut input = JumpInput::default();
        assert!(!input.key_event("KeyA", true));
        assert!(!input.pressed());
    }
}
