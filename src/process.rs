//! Keymap-specific key handling, run before the default handling of every key

use crate::config::VERSION;
use crate::host::Host;
use crate::keycode::{CustomKey, KeyCode, Keyboard, Mods};

/// State the handler keeps between key events
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UserState {
    /// Whether the last shift transition seen was a press
    pub shift_pressed: bool,
}

const SHRUG: &str = "¯\\_(ツ)_/¯";

/// Handles one key transition. Returns whether the default handling for
/// `code` should still run, which it always should: this only adds output.
pub fn process_record_user<H: Host>(
    state: &mut UserState,
    code: KeyCode,
    pressed: bool,
    host: &mut H,
) -> bool {
    if code.is_shift() {
        state.shift_pressed = pressed;
    }

    // Custom keys do nothing on release
    if !pressed {
        return true;
    }

    if let KeyCode::Ck(custom) = code {
        log::debug!("custom key {:?}, shift {}", custom, state.shift_pressed);
        custom_key(custom, state.shift_pressed, host);
    }
    true
}

fn custom_key<H: Host>(custom: CustomKey, shifted: bool, host: &mut H) {
    match custom {
        CustomKey::Arrow => {
            host.tap_code(Keyboard::ForwardSlash); // -
            host.tap_code16(Mods::LEFT_SHIFT, Keyboard::NonUSBackslash); // >
        }

        CustomKey::Shrug => host.send_unicode_string(SHRUG),

        CustomKey::Quote if !shifted => {
            host.register_code(Keyboard::LeftShift);
            host.tap_code(Keyboard::Keyboard2); // "
            host.unregister_code(Keyboard::LeftShift);
        }
        CustomKey::Quote => {
            host.unregister_code(Keyboard::LeftShift);
            host.tap_code(Keyboard::Minus); // '
            host.register_code(Keyboard::LeftShift);
        }

        CustomKey::Question if !shifted => {
            host.register_code(Keyboard::LeftShift);
            host.tap_code(Keyboard::Minus); // ?
            host.unregister_code(Keyboard::LeftShift);
        }
        // Shift stays down, turning ¡ into ¿
        CustomKey::Question => host.tap_code(Keyboard::Equal),

        CustomKey::Exclaim if !shifted => {
            host.register_code(Keyboard::LeftShift);
            host.tap_code(Keyboard::Keyboard1); // !
            host.unregister_code(Keyboard::LeftShift);
        }
        CustomKey::Exclaim => {
            host.unregister_code(Keyboard::LeftShift);
            host.tap_code(Keyboard::Equal); // ¡
            host.register_code(Keyboard::LeftShift);
        }

        CustomKey::Version => host.send_string(VERSION),
    }
}
