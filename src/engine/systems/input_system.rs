use winit::event::KeyEvent;
use winit::keyboard::{ KeyCode, PhysicalKey };

pub const QUIT_KEY: KeyCode = KeyCode::KeyQ;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
}

/// Map a physical key to an action. Auto-repeat events never act; press and
/// release both count.
pub fn key_action(key: PhysicalKey, repeat: bool) -> InputAction {
    if repeat {
        return InputAction::None;
    }
    match key {
        PhysicalKey::Code(QUIT_KEY) => InputAction::Quit,
        _ => InputAction::None,
    }
}

pub fn receive_key_event(event: &KeyEvent) -> InputAction {
    let action = key_action(event.physical_key, event.repeat);
    if action != InputAction::None {
        log::debug!("[INPUT] {:?} -> {:?}", event.physical_key, action);
    }
    action
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn q_quits() {
        assert_eq!(key_action(PhysicalKey::Code(KeyCode::KeyQ), false), InputAction::Quit);
    }

    #[test]
    fn repeats_are_ignored() {
        assert_eq!(key_action(PhysicalKey::Code(KeyCode::KeyQ), true), InputAction::None);
    }

    #[test]
    fn other_keys_do_nothing() {
        assert_eq!(key_action(PhysicalKey::Code(KeyCode::Escape), false), InputAction::None);
        assert_eq!(key_action(PhysicalKey::Code(KeyCode::KeyW), false), InputAction::None);
    }
}
