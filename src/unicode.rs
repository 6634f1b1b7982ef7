//! Typing arbitrary code points through the host OS's Unicode input method

use crate::config::SELECTED_UNICODE_MODES;
use crate::host::Host;
use crate::keycode::{Keyboard, Mods};

/// How the computer on the other end expects Unicode to be entered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnicodeMode {
    /// Unicode Hex Input: hold Option while typing the hex
    MacOs,
    /// IBus: Ctrl+Shift+U, hex, Space
    Linux,
    /// Alt + Keypad+ (needs `EnableHexNumpad`), hex on the keypad
    Windows,
    /// WinCompose: RAlt, U, hex, Enter
    WinCompose,
    /// `C-x 8 RET`, hex, RET
    Emacs,
}

impl UnicodeMode {
    fn position(self) -> Option<usize> {
        SELECTED_UNICODE_MODES.iter().position(|mode| *mode == self)
    }

    /// The next selected mode, wrapping around
    pub fn next(self) -> Self {
        let len = SELECTED_UNICODE_MODES.len();
        match self.position() {
            Some(i) => SELECTED_UNICODE_MODES[(i + 1) % len],
            None => SELECTED_UNICODE_MODES[0],
        }
    }

    /// The previous selected mode, wrapping around
    pub fn previous(self) -> Self {
        let len = SELECTED_UNICODE_MODES.len();
        match self.position() {
            Some(i) => SELECTED_UNICODE_MODES[(i + len - 1) % len],
            None => SELECTED_UNICODE_MODES[0],
        }
    }
}

const REPLACEMENT_CHARACTER: u32 = 0xFFFD;

fn input_start<H: Host>(host: &mut H, mode: UnicodeMode) {
    match mode {
        UnicodeMode::MacOs => host.register_code(Keyboard::LeftAlt),
        UnicodeMode::Linux => {
            host.tap_code16(Mods::LEFT_CTRL | Mods::LEFT_SHIFT, Keyboard::U)
        }
        UnicodeMode::Windows => {
            host.register_code(Keyboard::LeftAlt);
            host.tap_code(Keyboard::KeypadAdd);
        }
        UnicodeMode::WinCompose => {
            host.tap_code(Keyboard::RightAlt);
            host.tap_code(Keyboard::U);
        }
        UnicodeMode::Emacs => {
            host.tap_code16(Mods::LEFT_CTRL, Keyboard::X);
            host.tap_code(Keyboard::Keyboard8);
            host.tap_code(Keyboard::ReturnEnter);
        }
    }
}

fn input_finish<H: Host>(host: &mut H, mode: UnicodeMode) {
    match mode {
        UnicodeMode::MacOs | UnicodeMode::Windows => host.unregister_code(Keyboard::LeftAlt),
        UnicodeMode::Linux => host.tap_code(Keyboard::Space),
        UnicodeMode::WinCompose | UnicodeMode::Emacs => host.tap_code(Keyboard::ReturnEnter),
    }
}

const HEX_KEYS: [Keyboard; 16] = [
    Keyboard::Keyboard0,
    Keyboard::Keyboard1,
    Keyboard::Keyboard2,
    Keyboard::Keyboard3,
    Keyboard::Keyboard4,
    Keyboard::Keyboard5,
    Keyboard::Keyboard6,
    Keyboard::Keyboard7,
    Keyboard::Keyboard8,
    Keyboard::Keyboard9,
    Keyboard::A,
    Keyboard::B,
    Keyboard::C,
    Keyboard::D,
    Keyboard::E,
    Keyboard::F,
];

const KEYPAD_DIGITS: [Keyboard; 10] = [
    Keyboard::Keypad0,
    Keyboard::Keypad1,
    Keyboard::Keypad2,
    Keyboard::Keypad3,
    Keyboard::Keypad4,
    Keyboard::Keypad5,
    Keyboard::Keypad6,
    Keyboard::Keypad7,
    Keyboard::Keypad8,
    Keyboard::Keypad9,
];

fn hex_digit_key(mode: UnicodeMode, digit: u32) -> Keyboard {
    let digit = (digit & 0xF) as usize;
    if mode == UnicodeMode::Windows && digit < 10 {
        KEYPAD_DIGITS[digit]
    } else {
        HEX_KEYS[digit]
    }
}

/// Types `value` in hex, dropping leading zeros but never typing fewer than
/// four digits.
fn register_hex32<H: Host>(host: &mut H, mode: UnicodeMode, value: u32) {
    let mut leading = true;
    for i in (0..8).rev() {
        let digit = (value >> (i * 4)) & 0xF;
        if i <= 3 {
            leading = false;
        }
        if leading && digit == 0 {
            continue;
        }
        leading = false;
        host.tap_code(hex_digit_key(mode, digit));
    }
}

/// Types one code point, with whatever modifiers are held released for the
/// duration.
pub fn register_unicode<H: Host>(host: &mut H, code_point: u32) {
    let mode = host.unicode_mode();
    let code_point = if code_point > 0x10FFFF || (code_point > 0xFFFF && mode == UnicodeMode::Windows)
    {
        log::warn!("cannot type U+{:X} in {:?} mode", code_point, mode);
        REPLACEMENT_CHARACTER
    } else {
        code_point
    };

    let saved = host.mods();
    host.unregister_mods(saved);
    input_start(host, mode);
    if code_point > 0xFFFF && mode == UnicodeMode::MacOs {
        let offset = code_point - 0x10000;
        register_hex32(host, mode, 0xD800 + (offset >> 10));
        register_hex32(host, mode, 0xDC00 + (offset & 0x3FF));
    } else {
        register_hex32(host, mode, code_point);
    }
    input_finish(host, mode);
    host.register_mods(saved);
}

pub fn send_unicode_string<H: Host>(host: &mut H, text: &str) {
    for ch in text.chars() {
        register_unicode(host, ch as u32);
    }
}

/// Moves to the next (or previous) selected input mode.
pub fn cycle_unicode_mode<H: Host>(host: &mut H, backwards: bool) -> UnicodeMode {
    let current = host.unicode_mode();
    let mode = if backwards {
        current.previous()
    } else {
        current.next()
    };
    log::info!("unicode input mode: {:?}", mode);
    host.set_unicode_mode(mode);
    mode
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::testing::{taps, RecordingHost};
    use std::vec::Vec;

    fn host_in(mode: UnicodeMode) -> RecordingHost {
        let mut host = RecordingHost::default();
        host.unicode_mode = mode;
        host
    }

    #[test]
    fn linux_pound() {
        let mut host = host_in(UnicodeMode::Linux);
        register_unicode(&mut host, 0xA3);
        assert_eq!(
            taps(&host.reports),
            [
                (Mods::LEFT_CTRL | Mods::LEFT_SHIFT, Keyboard::U),
                (Mods::empty(), Keyboard::Keyboard0),
                (Mods::empty(), Keyboard::Keyboard0),
                (Mods::empty(), Keyboard::A),
                (Mods::empty(), Keyboard::Keyboard3),
                (Mods::empty(), Keyboard::Space),
            ]
        );
        assert!(host.held.is_empty());
    }

    #[test]
    fn mac_holds_option() {
        let mut host = host_in(UnicodeMode::MacOs);
        register_unicode(&mut host, 0x30C4);
        assert_eq!(
            taps(&host.reports),
            [
                (Mods::LEFT_ALT, Keyboard::Keyboard3),
                (Mods::LEFT_ALT, Keyboard::Keyboard0),
                (Mods::LEFT_ALT, Keyboard::C),
                (Mods::LEFT_ALT, Keyboard::Keyboard4),
            ]
        );
        assert!(host.held.is_empty());
    }

    #[test]
    fn mac_surrogate_pair() {
        let mut host = host_in(UnicodeMode::MacOs);
        // U+1F937 -> D83E DD37
        register_unicode(&mut host, 0x1F937);
        let keys: Vec<_> = taps(&host.reports).into_iter().map(|(_, k)| k).collect();
        assert_eq!(
            keys,
            [
                Keyboard::D,
                Keyboard::Keyboard8,
                Keyboard::Keyboard3,
                Keyboard::E,
                Keyboard::D,
                Keyboard::D,
                Keyboard::Keyboard3,
                Keyboard::Keyboard7,
            ]
        );
    }

    #[test]
    fn long_code_points_keep_all_digits() {
        let mut host = host_in(UnicodeMode::Linux);
        register_unicode(&mut host, 0x1F937);
        let keys: Vec<_> = taps(&host.reports).into_iter().map(|(_, k)| k).collect();
        assert_eq!(
            keys,
            [
                Keyboard::U,
                Keyboard::Keyboard1,
                Keyboard::F,
                Keyboard::Keyboard9,
                Keyboard::Keyboard3,
                Keyboard::Keyboard7,
                Keyboard::Space,
            ]
        );
    }

    #[test]
    fn windows_uses_keypad_digits() {
        let mut host = host_in(UnicodeMode::Windows);
        register_unicode(&mut host, 0xB0);
        assert_eq!(
            taps(&host.reports),
            [
                (Mods::LEFT_ALT, Keyboard::KeypadAdd),
                (Mods::LEFT_ALT, Keyboard::Keypad0),
                (Mods::LEFT_ALT, Keyboard::Keypad0),
                (Mods::LEFT_ALT, Keyboard::B),
                (Mods::LEFT_ALT, Keyboard::Keypad0),
            ]
        );
    }

    #[test]
    fn windows_replaces_astral_code_points() {
        let mut host = host_in(UnicodeMode::Windows);
        register_unicode(&mut host, 0x1F937);
        let keys: Vec<_> = taps(&host.reports).into_iter().map(|(_, k)| k).collect();
        assert_eq!(
            keys,
            [
                Keyboard::KeypadAdd,
                Keyboard::F,
                Keyboard::F,
                Keyboard::F,
                Keyboard::D,
            ]
        );
    }

    #[test]
    fn wincompose_sequence() {
        let mut host = host_in(UnicodeMode::WinCompose);
        register_unicode(&mut host, 0xAF);
        let keys: Vec<_> = taps(&host.reports).into_iter().map(|(_, k)| k).collect();
        assert_eq!(
            keys,
            // RAlt is a modifier, so it only shows up in the held set
            [
                Keyboard::U,
                Keyboard::Keyboard0,
                Keyboard::Keyboard0,
                Keyboard::A,
                Keyboard::F,
                Keyboard::ReturnEnter,
            ]
        );
    }

    #[test]
    fn held_shift_is_lifted_and_restored() {
        let mut host = host_in(UnicodeMode::Linux);
        host.register_code(Keyboard::RightShift);
        register_unicode(&mut host, 0x5F);
        let taps = taps(&host.reports);
        // Only the Ctrl+Shift+U chord carries a shift
        assert_eq!(taps[0], (Mods::LEFT_CTRL | Mods::LEFT_SHIFT, Keyboard::U));
        assert!(taps[1..].iter().all(|(mods, _)| mods.is_empty()));
        assert_eq!(host.held, [Keyboard::RightShift]);
    }

    #[test]
    fn cycling_wraps_both_ways() {
        let mut host = host_in(SELECTED_UNICODE_MODES[0]);
        let last = SELECTED_UNICODE_MODES[SELECTED_UNICODE_MODES.len() - 1];
        assert_eq!(cycle_unicode_mode(&mut host, true), last);
        assert_eq!(host.unicode_mode, last);
        assert_eq!(
            cycle_unicode_mode(&mut host, false),
            SELECTED_UNICODE_MODES[0]
        );
        assert_eq!(
            cycle_unicode_mode(&mut host, false),
            SELECTED_UNICODE_MODES[1]
        );
    }
}
