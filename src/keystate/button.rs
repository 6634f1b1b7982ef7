use super::KeyState;
use super::Keyish;
use super::Shared;
use crate::keycode::{KeyCode, Mods};

#[derive(Debug, PartialEq, Eq)]
pub struct Unpressed;
#[derive(Debug, PartialEq, Eq)]
pub struct Pressed {
    code: KeyCode,
    /// Modifiers this press registered itself, and so has to release
    mods: Mods,
}

impl KeyState<Unpressed> {
    fn press(&self, code: KeyCode) -> KeyState<Pressed> {
        KeyState {
            state: Pressed {
                code,
                mods: Mods::empty(),
            },
            shared: self.shared,
        }
    }
}

impl KeyState<Pressed> {
    fn release(&self) -> KeyState<Unpressed> {
        KeyState {
            state: Unpressed,
            shared: self.shared,
        }
    }
}

/// A physical key, remembering what it resolved to when it went down
#[derive(Debug, PartialEq, Eq)]
pub enum ButtonState {
    Unpressed(KeyState<Unpressed>),
    Pressed(KeyState<Pressed>),
}

impl Keyish for ButtonState {
    fn is_finished(&self) -> bool {
        matches!(self, ButtonState::Unpressed(_))
    }
}

impl ButtonState {
    pub fn new() -> Self {
        Self::Unpressed(KeyState {
            state: Unpressed,
            shared: Shared,
        })
    }

    /// Presses the key as `code`; returns `false` if it was already down.
    pub fn press(&mut self, code: KeyCode) -> bool {
        match &self {
            Self::Unpressed(state) => {
                *self = Self::Pressed(state.press(code));
                true
            }
            Self::Pressed(_) => false,
        }
    }

    /// Records the modifiers the press added on top of those already held.
    pub fn set_mods(&mut self, mods: Mods) {
        if let Self::Pressed(state) = self {
            state.state.mods = mods;
        }
    }

    /// Releases the key, giving back the code it was pressed as and the
    /// modifiers it registered.
    pub fn release(&mut self) -> Option<(KeyCode, Mods)> {
        match &self {
            Self::Pressed(state) => {
                let released = (state.state.code, state.state.mods);
                *self = Self::Unpressed(state.release());
                Some(released)
            }
            Self::Unpressed(_) => None,
        }
    }

    pub fn get_code(&self) -> Option<KeyCode> {
        match self {
            ButtonState::Unpressed(_) => None,
            ButtonState::Pressed(KeyState { state, .. }) => Some(state.code),
        }
    }
}

impl Default for ButtonState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::keycode::Keyboard;

    #[test]
    fn release_unpressed() {
        let mut state = ButtonState::new();
        assert_eq!(state.get_code(), None);
        assert!(state.is_finished());
        assert_eq!(state.release(), None);
        assert!(state.is_finished());
    }

    #[test]
    fn press_latches_code() {
        let mut state = ButtonState::new();
        let a = KeyCode::Kb(Keyboard::A);

        assert!(state.press(a));
        assert_eq!(state.get_code(), Some(a));
        assert!(!state.is_finished());

        // A second press while held changes nothing
        assert!(!state.press(KeyCode::Kb(Keyboard::B)));
        assert_eq!(state.get_code(), Some(a));

        assert_eq!(state.release(), Some((a, Mods::empty())));
        assert_eq!(state.get_code(), None);
        assert!(state.is_finished());
    }

    #[test]
    fn registered_mods_come_back_on_release() {
        let mut state = ButtonState::new();
        let rabk = KeyCode::shifted(Keyboard::NonUSBackslash);

        // Not pressed: nothing to remember
        state.set_mods(Mods::LEFT_SHIFT);
        assert!(state.is_finished());

        state.press(rabk);
        state.set_mods(Mods::LEFT_SHIFT);
        assert_eq!(state.release(), Some((rabk, Mods::LEFT_SHIFT)));

        // The next press starts clean
        state.press(rabk);
        assert_eq!(state.release(), Some((rabk, Mods::empty())));
    }
}
