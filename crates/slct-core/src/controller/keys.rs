//! Keys the select widget reacts to.

/// Keyboard keys relevant to the state machine, decoded from
/// `KeyboardEvent.key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    Tab,
    /// Anything else (printable characters, modifiers, ...)
    Other,
}

impl Key {
    /// Decode a `KeyboardEvent.key` value. Accepts the legacy IE/Edge names too.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "Enter" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Key;

    #[test]
    fn test_from_name() {
        assert_eq!(Key::from_name("ArrowDown"), Key::ArrowDown);
        assert_eq!(Key::from_name("Down"), Key::ArrowDown);
        assert_eq!(Key::from_name("Esc"), Key::Escape);
        assert_eq!(Key::from_name("Tab"), Key::Tab);
        assert_eq!(Key::from_name("a"), Key::Other);
        assert_eq!(Key::from_name("Shift"), Key::Other);
    }
}
