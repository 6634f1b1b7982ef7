//! The Moonlander and what each of its keys does

use crate::keycode::KeyCode;
use crate::keystate::prelude::*;
use crate::keystate::Keymap;

/// Matrix rows, both halves
pub const ROWS: usize = 12;
pub const COLS: usize = 7;
pub const SIZE: usize = ROWS * COLS;
pub const LAYERS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum KeymapLayer {
    Base = 0,
    Navigation,
    Symbol,
}

/// Lays out the 72 keys in the order they're seen on the board, left half
/// then right half on each row, ending with the thumb clusters. The red
/// thumb keys come last on the bottom row of each half.
#[rustfmt::skip]
#[macro_export]
macro_rules! layout_moonlander {
    (
        $k00:expr, $k01:expr, $k02:expr, $k03:expr, $k04:expr, $k05:expr, $k06:expr,   $k60:expr, $k61:expr, $k62:expr, $k63:expr, $k64:expr, $k65:expr, $k66:expr,
        $k10:expr, $k11:expr, $k12:expr, $k13:expr, $k14:expr, $k15:expr, $k16:expr,   $k70:expr, $k71:expr, $k72:expr, $k73:expr, $k74:expr, $k75:expr, $k76:expr,
        $k20:expr, $k21:expr, $k22:expr, $k23:expr, $k24:expr, $k25:expr, $k26:expr,   $k80:expr, $k81:expr, $k82:expr, $k83:expr, $k84:expr, $k85:expr, $k86:expr,
        $k30:expr, $k31:expr, $k32:expr, $k33:expr, $k34:expr, $k35:expr,                          $k91:expr, $k92:expr, $k93:expr, $k94:expr, $k95:expr, $k96:expr,
        $k40:expr, $k41:expr, $k42:expr, $k43:expr, $k44:expr,            $k53:expr,   $kb3:expr,             $ka2:expr, $ka3:expr, $ka4:expr, $ka5:expr, $ka6:expr,
                                                    $k50:expr, $k51:expr, $k52:expr,   $kb4:expr, $kb5:expr, $kb6:expr $(,)?
    ) => {{
        const __: $crate::keycode::KeyCode = $crate::keycode::KeyCode::NO;
        [
            $k00, $k01, $k02, $k03, $k04, $k05, $k06,
            $k10, $k11, $k12, $k13, $k14, $k15, $k16,
            $k20, $k21, $k22, $k23, $k24, $k25, $k26,
            $k30, $k31, $k32, $k33, $k34, $k35, __,
            $k40, $k41, $k42, $k43, $k44, __,   __,
            $k50, $k51, $k52, $k53, __,   __,   __,

            $k60, $k61, $k62, $k63, $k64, $k65, $k66,
            $k70, $k71, $k72, $k73, $k74, $k75, $k76,
            $k80, $k81, $k82, $k83, $k84, $k85, $k86,
            __,   $k91, $k92, $k93, $k94, $k95, $k96,
            __,   __,   $ka2, $ka3, $ka4, $ka5, $ka6,
            __,   __,   __,   $kb3, $kb4, $kb5, $kb6,
        ]
    }};
}

// For alignment with `vi]:EasyAlign <C-r>4<CR>*,
#[rustfmt::skip]
pub const KEYMAP: [[KeyCode; SIZE]; LAYERS] = [
    // Base
    layout_moonlander!(
        KC_ESC,   ES_1,     ES_2,     ES_3,     ES_4,     ES_5,     KC_NO,        KC_INS,   ES_6,     ES_7,     ES_8,     ES_9,     ES_0,     CK_QUOT,
        KC_TAB,   ES_Q,     ES_W,     ES_E,     ES_R,     ES_T,     MO_SYMBL,     MO_SYMBL, ES_Y,     ES_U,     ES_I,     ES_O,     ES_P,     CK_QUES,
        _______,  ES_A,     ES_S,     ES_D,     ES_F,     ES_G,     MO_NAVIG,     MO_NAVIG, ES_H,     ES_J,     ES_K,     ES_L,     ES_NTIL,  ES_ACUT,
        KC_LSFT,  ES_Z,     ES_X,     ES_C,     ES_V,     ES_B,                             ES_N,     ES_M,     ES_COMM,  ES_DOT,   CK_EXLM,  KC_RSFT,
        KC_LCTL,  KC_LGUI,  KC_LALT,  KC_LEFT,  KC_RGHT,            MO_NAVIG,     MO_NAVIG,           KC_UP,    KC_DOWN,  KC_ALGR,  KC_MEH,   KC_HYPR,
                                                KC_SPC,   KC_BSPC,  MO_SYMBL,     MO_SYMBL, KC_DELT,  KC_ENT,
    ),
    // Navigation
    layout_moonlander!(
        _______,  KC_F1,    KC_F2,    KC_F3,    KC_F4,    KC_F5,    _______,      CK_VRSN,  KC_F6,    KC_F7,    KC_F8,    KC_F9,    KC_F10,   KC_F11,
        _______,  _______,  _______,  _______,  _______,  _______,  _______,      _______,  _______,  KC_BRID,  KC_BRIU,  _______,  KC_PSCR,  KC_F12,
        _______,  _______,  _______,  _______,  _______,  _______,  _______,      _______,  _______,  KC_MPRV,  KC_MNXT,  KC_MPLY,  _______,  _______,
        _______,  _______,  _______,  _______,  _______,  _______,                          _______,  KC_VOLD,  KC_VOLU,  KC_MUTE,  _______,  _______,
        _______,  _______,  _______,  KC_PGUP,  KC_PGDN,            _______,      _______,            KC_HOME,  KC_END,   _______,  _______,  _______,
                                                _______,  _______,  _______,      _______,  _______,  UC_MOD,
    ),
    // Symbol
    layout_moonlander!(
        _______,  _______,  _______,  _______,  _______,  _______,  _______,      CK_SHRUG, ES_MORD,  ES_NOT,   _______,  KU_DEGRE, _______,  _______,
        _______,  _______,  CK_ARROW, ES_LABK,  ES_RABK,  ES_HASH,  _______,      _______,  ES_CIRC,  ES_EQL,   ES_AMPR,  ES_PIPE,  ES_TILD,  _______,
        _______,  ES_SLSH,  ES_BSLS,  ES_LPRN,  ES_RPRN,  ES_UNDS,  _______,      _______,  KC_PERC,  ES_PLUS,  ES_MINS,  ES_ASTR,  ES_SLSH,  _______,
        _______,  ES_LBRC,  ES_RBRC,  ES_LCBR,  ES_RCBR,  ES_AT,                            ES_CCED,  KC_DLR,   ES_EURO,  KU_POUND, _______,  _______,
        _______,  _______,  _______,  _______,  _______,            _______,      _______,            _______,  _______,  _______,  _______,  _______,
                                                _______,  _______,  _______,      _______,  _______,  _______,
    ),
];

/// The keymap, ready to be fed matrix scans
pub fn keymap() -> Keymap<SIZE, LAYERS> {
    Keymap::new(KEYMAP)
}

/// Matrix position of `row`, `col`
pub const fn index(row: usize, col: usize) -> usize {
    row * COLS + col
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    const BASE: usize = KeymapLayer::Base as usize;
    const NAVIGATION: usize = KeymapLayer::Navigation as usize;
    const SYMBOL: usize = KeymapLayer::Symbol as usize;

    #[test]
    fn corners() {
        assert_eq!(KEYMAP[BASE][index(0, 0)], KC_ESC);
        assert_eq!(KEYMAP[BASE][index(6, 6)], CK_QUOT);
        assert_eq!(KEYMAP[BASE][index(9, 6)], KC_RSFT);
        assert_eq!(KEYMAP[BASE][index(10, 6)], KC_HYPR);
    }

    #[test]
    fn thumb_clusters() {
        assert_eq!(KEYMAP[BASE][index(5, 0)], KC_SPC);
        assert_eq!(KEYMAP[BASE][index(5, 1)], KC_BSPC);
        assert_eq!(KEYMAP[BASE][index(5, 2)], MO_SYMBL);
        // Red thumb keys
        assert_eq!(KEYMAP[BASE][index(5, 3)], MO_NAVIG);
        assert_eq!(KEYMAP[BASE][index(11, 3)], MO_NAVIG);
        assert_eq!(KEYMAP[BASE][index(11, 4)], MO_SYMBL);
        assert_eq!(KEYMAP[BASE][index(11, 6)], KC_ENT);
        assert_eq!(KEYMAP[NAVIGATION][index(11, 6)], UC_MOD);
    }

    #[test]
    fn unused_cells_do_nothing() {
        for layer in KEYMAP {
            for cell in [
                index(3, 6),
                index(4, 5),
                index(4, 6),
                index(5, 4),
                index(5, 6),
                index(9, 0),
                index(10, 1),
                index(11, 2),
            ] {
                assert_eq!(layer[cell], KeyCode::NO);
            }
        }
    }

    #[test]
    fn layers_are_in_index_order() {
        assert_eq!(KEYMAP[NAVIGATION][index(6, 0)], CK_VRSN);
        assert_eq!(KEYMAP[SYMBOL][index(6, 0)], CK_SHRUG);
        assert_eq!(KEYMAP[SYMBOL][index(1, 2)], CK_ARROW);
        assert_eq!(MO_NAVIG, KeyCode::La(NAVIGATION as u8));
        assert_eq!(MO_SYMBL, KeyCode::La(SYMBOL as u8));
    }

    #[test]
    fn upper_layers_keep_modifiers_reachable() {
        for layer in [NAVIGATION, SYMBOL] {
            assert_eq!(KEYMAP[layer][index(3, 0)], _______);
            assert_eq!(KEYMAP[layer][index(9, 6)], _______);
        }
    }
}
