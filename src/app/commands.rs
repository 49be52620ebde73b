//! Keyboard commands

use winit::keyboard::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a fresh round, whatever the current state
    Reset,
    Quit,
}

pub fn map_key(key_code: KeyCode) -> Option<Command> {
    match key_code {
        KeyCode::KeyR => Some(Command::Reset),
        KeyCode::KeyQ => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_keys() {
        assert_eq!(map_key(KeyCode::KeyR), Some(Command::Reset));
        assert_eq!(map_key(KeyCode::KeyQ), Some(Command::Quit));
    }

    #[test]
    fn test_unbound_keys() {
        for key in [KeyCode::Escape, KeyCode::Space, KeyCode::KeyW, KeyCode::ArrowLeft] {
            assert_eq!(map_key(key), None);
        }
    }
}
