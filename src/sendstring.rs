//! Types ASCII strings on a host set to the Spanish (ISO) layout
//!
//! The table holds one `u16` per ASCII character: the low byte is the HID key,
//! the upper bits say which modifiers it needs.

use crate::host::Host;
use crate::keycode::{Keyboard, Mods};

/// Needs shift.
const SHIFT: u16 = 0x100;

/// Needs AltGr.
const ALTGR: u16 = 0x200;

/// A character we can't type.
const NONE: u16 = 0xffff;

/// Unmodified keypress.
const fn n(key: Keyboard) -> u16 {
    key as u16
}

/// Shifted keypress.
const fn s(key: Keyboard) -> u16 {
    SHIFT | (key as u16)
}

/// AltGr keypress.
const fn a(key: Keyboard) -> u16 {
    ALTGR | (key as u16)
}

static KEY_TABLE: [u16; 128] = [
    NONE, // 0x00 NUL
    NONE, // 0x01 control
    NONE, // 0x02 control
    NONE, // 0x03 control
    NONE, // 0x04 control
    NONE, // 0x05 control
    NONE, // 0x06 control
    NONE, // 0x07 control
    n(Keyboard::DeleteBackspace), // 0x08 Backspace
    n(Keyboard::Tab), // 0x09 Horizontal tab
    n(Keyboard::ReturnEnter), // 0x0A Line feed
    NONE, // 0x0B control
    NONE, // 0x0C control
    NONE, // 0x0D control
    NONE, // 0x0E control
    NONE, // 0x0F control
    NONE, // 0x10 control
    NONE, // 0x11 control
    NONE, // 0x12 control
    NONE, // 0x13 control
    NONE, // 0x14 control
    NONE, // 0x15 control
    NONE, // 0x16 control
    NONE, // 0x17 control
    NONE, // 0x18 control
    NONE, // 0x19 control
    NONE, // 0x1A control
    n(Keyboard::Escape), // 0x1B Escape
    NONE, // 0x1C control
    NONE, // 0x1D control
    NONE, // 0x1E control
    NONE, // 0x1F control
    n(Keyboard::Space), // 0x20 space
    s(Keyboard::Keyboard1), // 0x21 !
    s(Keyboard::Keyboard2), // 0x22 "
    a(Keyboard::Keyboard3), // 0x23 #
    s(Keyboard::Keyboard4), // 0x24 $
    s(Keyboard::Keyboard5), // 0x25 %
    s(Keyboard::Keyboard6), // 0x26 &
    n(Keyboard::Minus), // 0x27 '
    s(Keyboard::Keyboard8), // 0x28 (
    s(Keyboard::Keyboard9), // 0x29 )
    s(Keyboard::RightBrace), // 0x2A *
    n(Keyboard::RightBrace), // 0x2B +
    n(Keyboard::Comma), // 0x2C ,
    n(Keyboard::ForwardSlash), // 0x2D -
    n(Keyboard::Dot), // 0x2E .
    s(Keyboard::Keyboard7), // 0x2F /
    n(Keyboard::Keyboard0), // 0x30 0
    n(Keyboard::Keyboard1), // 0x31 1
    n(Keyboard::Keyboard2), // 0x32 2
    n(Keyboard::Keyboard3), // 0x33 3
    n(Keyboard::Keyboard4), // 0x34 4
    n(Keyboard::Keyboard5), // 0x35 5
    n(Keyboard::Keyboard6), // 0x36 6
    n(Keyboard::Keyboard7), // 0x37 7
    n(Keyboard::Keyboard8), // 0x38 8
    n(Keyboard::Keyboard9), // 0x39 9
    s(Keyboard::Dot), // 0x3A :
    s(Keyboard::Comma), // 0x3B ;
    n(Keyboard::NonUSBackslash), // 0x3C <
    s(Keyboard::Keyboard0), // 0x3D =
    s(Keyboard::NonUSBackslash), // 0x3E >
    s(Keyboard::Minus), // 0x3F ?
    a(Keyboard::Keyboard2), // 0x40 @
    s(Keyboard::A), // 0x41 A
    s(Keyboard::B), // 0x42 B
    s(Keyboard::C), // 0x43 C
    s(Keyboard::D), // 0x44 D
    s(Keyboard::E), // 0x45 E
    s(Keyboard::F), // 0x46 F
    s(Keyboard::G), // 0x47 G
    s(Keyboard::H), // 0x48 H
    s(Keyboard::I), // 0x49 I
    s(Keyboard::J), // 0x4A J
    s(Keyboard::K), // 0x4B K
    s(Keyboard::L), // 0x4C L
    s(Keyboard::M), // 0x4D M
    s(Keyboard::N), // 0x4E N
    s(Keyboard::O), // 0x4F O
    s(Keyboard::P), // 0x50 P
    s(Keyboard::Q), // 0x51 Q
    s(Keyboard::R), // 0x52 R
    s(Keyboard::S), // 0x53 S
    s(Keyboard::T), // 0x54 T
    s(Keyboard::U), // 0x55 U
    s(Keyboard::V), // 0x56 V
    s(Keyboard::W), // 0x57 W
    s(Keyboard::X), // 0x58 X
    s(Keyboard::Y), // 0x59 Y
    s(Keyboard::Z), // 0x5A Z
    a(Keyboard::LeftBrace), // 0x5B [
    a(Keyboard::Grave), // 0x5C \
    a(Keyboard::RightBrace), // 0x5D ]
    s(Keyboard::LeftBrace), // 0x5E ^, dead key
    s(Keyboard::ForwardSlash), // 0x5F _
    n(Keyboard::LeftBrace), // 0x60 `, dead key
    n(Keyboard::A), // 0x61 a
    n(Keyboard::B), // 0x62 b
    n(Keyboard::C), // 0x63 c
    n(Keyboard::D), // 0x64 d
    n(Keyboard::E), // 0x65 e
    n(Keyboard::F), // 0x66 f
    n(Keyboard::G), // 0x67 g
    n(Keyboard::H), // 0x68 h
    n(Keyboard::I), // 0x69 i
    n(Keyboard::J), // 0x6A j
    n(Keyboard::K), // 0x6B k
    n(Keyboard::L), // 0x6C l
    n(Keyboard::M), // 0x6D m
    n(Keyboard::N), // 0x6E n
    n(Keyboard::O), // 0x6F o
    n(Keyboard::P), // 0x70 p
    n(Keyboard::Q), // 0x71 q
    n(Keyboard::R), // 0x72 r
    n(Keyboard::S), // 0x73 s
    n(Keyboard::T), // 0x74 t
    n(Keyboard::U), // 0x75 u
    n(Keyboard::V), // 0x76 v
    n(Keyboard::W), // 0x77 w
    n(Keyboard::X), // 0x78 x
    n(Keyboard::Y), // 0x79 y
    n(Keyboard::Z), // 0x7A z
    a(Keyboard::Apostrophe), // 0x7B {
    a(Keyboard::Keyboard1), // 0x7C |
    a(Keyboard::NonUSHash), // 0x7D }
    a(Keyboard::Keyboard4), // 0x7E ~
    n(Keyboard::DeleteForward), // 0x7F Delete
];

/// How to type `ch`, if it can be typed at all
pub fn keycode_for(ch: char) -> Option<(Mods, Keyboard)> {
    let code = *KEY_TABLE.get(ch as usize)?;
    if code == NONE {
        return None;
    }
    let mut mods = Mods::empty();
    if code & SHIFT != 0 {
        mods |= Mods::LEFT_SHIFT;
    }
    if code & ALTGR != 0 {
        mods |= Mods::ALTGR;
    }
    Some((mods, Keyboard::from((code & 0xff) as u8)))
}

/// Taps the key for `ch` with its modifiers wrapped around it.
///
/// Returns `false` if the character isn't on the table.
pub fn send_char<H: Host>(host: &mut H, ch: char) -> bool {
    match keycode_for(ch) {
        Some((mods, key)) => {
            host.register_mods(mods);
            host.tap_code(key);
            host.unregister_mods(mods);
            true
        }
        None => false,
    }
}

pub fn send_string<H: Host>(host: &mut H, text: &str) {
    for ch in text.chars() {
        if !send_char(host, ch) {
            log::debug!("send_string: skipping {:?}", ch);
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::testing::{taps, RecordingHost};

    #[test]
    fn letters_and_digits() {
        assert_eq!(keycode_for('a'), Some((Mods::empty(), Keyboard::A)));
        assert_eq!(keycode_for('Z'), Some((Mods::LEFT_SHIFT, Keyboard::Z)));
        assert_eq!(keycode_for('0'), Some((Mods::empty(), Keyboard::Keyboard0)));
    }

    #[test]
    fn spanish_symbols() {
        assert_eq!(keycode_for('-'), Some((Mods::empty(), Keyboard::ForwardSlash)));
        assert_eq!(keycode_for('/'), Some((Mods::LEFT_SHIFT, Keyboard::Keyboard7)));
        assert_eq!(keycode_for(':'), Some((Mods::LEFT_SHIFT, Keyboard::Dot)));
        assert_eq!(keycode_for('@'), Some((Mods::ALTGR, Keyboard::Keyboard2)));
        assert_eq!(keycode_for('>'), Some((Mods::LEFT_SHIFT, Keyboard::NonUSBackslash)));
        assert_eq!(keycode_for('\''), Some((Mods::empty(), Keyboard::Minus)));
    }

    #[test]
    fn untypeable() {
        assert_eq!(keycode_for('\0'), None);
        assert_eq!(keycode_for('ñ'), None);
        assert_eq!(keycode_for('ツ'), None);
    }

    #[test]
    fn send_string_wraps_modifiers() {
        let mut host = RecordingHost::default();
        host.send_string("a/@ñ");
        assert_eq!(
            taps(&host.reports),
            [
                (Mods::empty(), Keyboard::A),
                (Mods::LEFT_SHIFT, Keyboard::Keyboard7),
                (Mods::ALTGR, Keyboard::Keyboard2),
            ]
        );
        assert!(host.held.is_empty());
    }
}
