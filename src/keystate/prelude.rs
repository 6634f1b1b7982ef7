//! For ease and shorthand
//!
//! `KC_*` are positional HID keys, `ES_*` name them by what the Spanish layout
//! types, `CK_*` are the custom keys and `KU_*` type a fixed code point.
#![allow(non_upper_case_globals)]

use super::super::keycode::{
    consumer, Consumer, CustomKey, KeyCode, Keyboard, Mods, BRIGHTNESS_DECREMENT,
    BRIGHTNESS_INCREMENT,
};
use crate::layout::KeymapLayer;
use paste::paste;

pub use super::super::keycode::KeyCode::*;

/// Falls through to the layer below
pub const _______: KeyCode = Trns;
/// Does nothing
pub const XXXXXXX: KeyCode = KeyCode::NO;
pub const KC_NO: KeyCode = KeyCode::NO;

macro_rules! letters {
    ($($l:ident)*) => {
        paste! {
            $(
                pub const [<KC_ $l>]: KeyCode = Kb(Keyboard::$l);
                pub const [<ES_ $l>]: KeyCode = Kb(Keyboard::$l);
            )*
        }
    };
}

macro_rules! digits {
    ($($n:literal)*) => {
        paste! {
            $(
                pub const [<KC_ $n>]: KeyCode = Kb(Keyboard::[<Keyboard $n>]);
                pub const [<ES_ $n>]: KeyCode = Kb(Keyboard::[<Keyboard $n>]);
            )*
        }
    };
}

macro_rules! function_keys {
    ($($n:literal)*) => {
        paste! {
            $( pub const [<KC_F $n>]: KeyCode = Kb(Keyboard::[<F $n>]); )*
        }
    };
}

letters!(A B C D E F G H I J K L M N O P Q R S T U V W X Y Z);
digits!(0 1 2 3 4 5 6 7 8 9);
function_keys!(1 2 3 4 5 6 7 8 9 10 11 12);

pub const KC_ESC: KeyCode = Kb(Keyboard::Escape);
pub const KC_TAB: KeyCode = Kb(Keyboard::Tab);
pub const KC_SPC: KeyCode = Kb(Keyboard::Space);
pub const KC_BSPC: KeyCode = Kb(Keyboard::DeleteBackspace);
pub const KC_DELT: KeyCode = Kb(Keyboard::DeleteForward);
pub const KC_ENT: KeyCode = Kb(Keyboard::ReturnEnter);
pub const KC_INS: KeyCode = Kb(Keyboard::Insert);
pub const KC_PSCR: KeyCode = Kb(Keyboard::PrintScreen);

pub const KC_LEFT: KeyCode = Kb(Keyboard::LeftArrow);
pub const KC_RGHT: KeyCode = Kb(Keyboard::RightArrow);
pub const KC_UP: KeyCode = Kb(Keyboard::UpArrow);
pub const KC_DOWN: KeyCode = Kb(Keyboard::DownArrow);
pub const KC_PGUP: KeyCode = Kb(Keyboard::PageUp);
pub const KC_PGDN: KeyCode = Kb(Keyboard::PageDown);
pub const KC_HOME: KeyCode = Kb(Keyboard::Home);
pub const KC_END: KeyCode = Kb(Keyboard::End);

pub const KC_LSFT: KeyCode = Kb(Keyboard::LeftShift);
pub const KC_LCTL: KeyCode = Kb(Keyboard::LeftControl);
pub const KC_LALT: KeyCode = Kb(Keyboard::LeftAlt);
pub const KC_LGUI: KeyCode = Kb(Keyboard::LeftGUI);
pub const KC_RSFT: KeyCode = Kb(Keyboard::RightShift);
pub const KC_ALGR: KeyCode = Kb(Keyboard::RightAlt);
pub const KC_MEH: KeyCode = Md(Mods::MEH, Keyboard::NoEventIndicated);
pub const KC_HYPR: KeyCode = Md(Mods::HYPER, Keyboard::NoEventIndicated);

// US-positional symbols that land on the same character in Spanish
pub const KC_PERC: KeyCode = KeyCode::shifted(Keyboard::Keyboard5);
pub const KC_DLR: KeyCode = KeyCode::shifted(Keyboard::Keyboard4);

pub const KC_MPRV: KeyCode = Media(consumer(Consumer::ScanPreviousTrack));
pub const KC_MNXT: KeyCode = Media(consumer(Consumer::ScanNextTrack));
pub const KC_MPLY: KeyCode = Media(consumer(Consumer::PlayPause));
pub const KC_VOLU: KeyCode = Media(consumer(Consumer::VolumeIncrement));
pub const KC_VOLD: KeyCode = Media(consumer(Consumer::VolumeDecrement));
pub const KC_MUTE: KeyCode = Media(consumer(Consumer::Mute));
pub const KC_BRIU: KeyCode = Media(BRIGHTNESS_INCREMENT);
pub const KC_BRID: KeyCode = Media(BRIGHTNESS_DECREMENT);

// Spanish (ISO) layout, by HID position
pub const ES_MORD: KeyCode = Kb(Keyboard::Grave); // º
pub const ES_QUOT: KeyCode = Kb(Keyboard::Minus); // '
pub const ES_IEXL: KeyCode = Kb(Keyboard::Equal); // ¡
pub const ES_GRV: KeyCode = Kb(Keyboard::LeftBrace); // ` (dead)
pub const ES_PLUS: KeyCode = Kb(Keyboard::RightBrace); // +
pub const ES_NTIL: KeyCode = Kb(Keyboard::Semicolon); // ñ
pub const ES_ACUT: KeyCode = Kb(Keyboard::Apostrophe); // ´ (dead)
pub const ES_CCED: KeyCode = Kb(Keyboard::NonUSHash); // ç
pub const ES_LABK: KeyCode = Kb(Keyboard::NonUSBackslash); // <
pub const ES_COMM: KeyCode = Kb(Keyboard::Comma); // ,
pub const ES_DOT: KeyCode = Kb(Keyboard::Dot); // .
pub const ES_MINS: KeyCode = Kb(Keyboard::ForwardSlash); // -

// Shifted
pub const ES_EXLM: KeyCode = KeyCode::shifted(Keyboard::Keyboard1); // !
pub const ES_DQUO: KeyCode = KeyCode::shifted(Keyboard::Keyboard2); // "
pub const ES_AMPR: KeyCode = KeyCode::shifted(Keyboard::Keyboard6); // &
pub const ES_SLSH: KeyCode = KeyCode::shifted(Keyboard::Keyboard7); // /
pub const ES_LPRN: KeyCode = KeyCode::shifted(Keyboard::Keyboard8); // (
pub const ES_RPRN: KeyCode = KeyCode::shifted(Keyboard::Keyboard9); // )
pub const ES_EQL: KeyCode = KeyCode::shifted(Keyboard::Keyboard0); // =
pub const ES_QUES: KeyCode = KeyCode::shifted(Keyboard::Minus); // ?
pub const ES_IQUE: KeyCode = KeyCode::shifted(Keyboard::Equal); // ¿
pub const ES_CIRC: KeyCode = KeyCode::shifted(Keyboard::LeftBrace); // ^ (dead)
pub const ES_ASTR: KeyCode = KeyCode::shifted(Keyboard::RightBrace); // *
pub const ES_RABK: KeyCode = KeyCode::shifted(Keyboard::NonUSBackslash); // >
pub const ES_UNDS: KeyCode = KeyCode::shifted(Keyboard::ForwardSlash); // _

// AltGr
pub const ES_BSLS: KeyCode = KeyCode::altgr(Keyboard::Grave); // \
pub const ES_PIPE: KeyCode = KeyCode::altgr(Keyboard::Keyboard1); // |
pub const ES_AT: KeyCode = KeyCode::altgr(Keyboard::Keyboard2); // @
pub const ES_HASH: KeyCode = KeyCode::altgr(Keyboard::Keyboard3); // #
pub const ES_TILD: KeyCode = KeyCode::altgr(Keyboard::Keyboard4); // ~
pub const ES_NOT: KeyCode = KeyCode::altgr(Keyboard::Keyboard6); // ¬
pub const ES_EURO: KeyCode = KeyCode::altgr(Keyboard::E); // €
pub const ES_LBRC: KeyCode = KeyCode::altgr(Keyboard::LeftBrace); // [
pub const ES_RBRC: KeyCode = KeyCode::altgr(Keyboard::RightBrace); // ]
pub const ES_LCBR: KeyCode = KeyCode::altgr(Keyboard::Apostrophe); // {
pub const ES_RCBR: KeyCode = KeyCode::altgr(Keyboard::NonUSHash); // }

pub const KU_POUND: KeyCode = Uc(0xA3); // £
pub const KU_DEGRE: KeyCode = Uc(0xB0); // °

pub const CK_ARROW: KeyCode = Ck(CustomKey::Arrow);
pub const CK_SHRUG: KeyCode = Ck(CustomKey::Shrug);
pub const CK_QUOT: KeyCode = Ck(CustomKey::Quote);
pub const CK_QUES: KeyCode = Ck(CustomKey::Question);
pub const CK_EXLM: KeyCode = Ck(CustomKey::Exclaim);
pub const CK_VRSN: KeyCode = Ck(CustomKey::Version);

pub const UC_MOD: KeyCode = UcMod;

pub const MO_NAVIG: KeyCode = La(KeymapLayer::Navigation as u8);
pub const MO_SYMBL: KeyCode = La(KeymapLayer::Symbol as u8);
