//! Logical key codes produced by the layout table

use bitflags::bitflags;

pub use usbd_human_interface_device::page::{Consumer, Keyboard};

/// Index into the layer table
pub type Layer = u8;

/// Raw usage ID on the HID consumer page. Not every usage this keymap sends
/// has a [`Consumer`] variant (display brightness doesn't).
pub type ConsumerUsage = u16;

/// The usage ID of a named consumer usage
pub const fn consumer(usage: Consumer) -> ConsumerUsage {
    usage as u16
}

pub const BRIGHTNESS_INCREMENT: ConsumerUsage = 0x006F;
pub const BRIGHTNESS_DECREMENT: ConsumerUsage = 0x0070;

bitflags! {
    /// Modifier set, laid out like the HID boot-report modifier byte.
    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
    pub struct Mods: u8 {
        const LEFT_CTRL = 0b0000_0001;
        const LEFT_SHIFT = 0b0000_0010;
        const LEFT_ALT = 0b0000_0100;
        const LEFT_GUI = 0b0000_1000;
        const RIGHT_CTRL = 0b0001_0000;
        const RIGHT_SHIFT = 0b0010_0000;
        const RIGHT_ALT = 0b0100_0000;
        const RIGHT_GUI = 0b1000_0000;
    }
}

const MODIFIER_KEYS: [(Mods, Keyboard); 8] = [
    (Mods::LEFT_CTRL, Keyboard::LeftControl),
    (Mods::LEFT_SHIFT, Keyboard::LeftShift),
    (Mods::LEFT_ALT, Keyboard::LeftAlt),
    (Mods::LEFT_GUI, Keyboard::LeftGUI),
    (Mods::RIGHT_CTRL, Keyboard::RightControl),
    (Mods::RIGHT_SHIFT, Keyboard::RightShift),
    (Mods::RIGHT_ALT, Keyboard::RightAlt),
    (Mods::RIGHT_GUI, Keyboard::RightGUI),
];

impl Mods {
    /// Either shift
    pub const SHIFT: Mods = Mods::LEFT_SHIFT.union(Mods::RIGHT_SHIFT);
    /// AltGr on ISO layouts
    pub const ALTGR: Mods = Mods::RIGHT_ALT;
    /// Ctrl + Shift + Alt
    pub const MEH: Mods = Mods::LEFT_CTRL
        .union(Mods::LEFT_SHIFT)
        .union(Mods::LEFT_ALT);
    /// Ctrl + Shift + Alt + GUI
    pub const HYPER: Mods = Mods::MEH.union(Mods::LEFT_GUI);

    /// The modifier bit for a key, empty for anything that isn't a modifier.
    pub fn from_key(key: Keyboard) -> Mods {
        MODIFIER_KEYS
            .iter()
            .find(|(_, k)| *k == key)
            .map_or(Mods::empty(), |(m, _)| *m)
    }

    /// The modifier keys in this set, in report-byte order
    pub fn keys(self) -> impl Iterator<Item = Keyboard> {
        MODIFIER_KEYS
            .into_iter()
            .filter(move |(m, _)| self.contains(*m))
            .map(|(_, k)| k)
    }
}

/// Keys with bespoke behaviour in [`crate::process`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomKey {
    /// `->`
    Arrow,
    /// `¯\_(ツ)_/¯`
    Shrug,
    /// `"`, `'` when shifted
    Quote,
    /// `?`, `¿` when shifted
    Question,
    /// `!`, `¡` when shifted
    Exclaim,
    /// Types the keyboard, keymap and build date
    Version,
}

/// What a key position does on one layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// A plain HID key
    Kb(Keyboard),
    /// A HID key sent with modifiers held (may be a bare modifier chord)
    Md(Mods, Keyboard),
    /// Momentary layer while held
    La(Layer),
    /// Falls through to the next active layer below
    Trns,
    /// Types a Unicode code point on press
    Uc(u32),
    /// A consumer-page usage (media, brightness)
    Media(ConsumerUsage),
    /// Steps through the selected Unicode input modes
    UcMod,
    Ck(CustomKey),
}

impl KeyCode {
    /// Does nothing, and blocks layers below
    pub const NO: KeyCode = KeyCode::Kb(Keyboard::NoEventIndicated);

    /// A key with shift held
    pub const fn shifted(key: Keyboard) -> KeyCode {
        KeyCode::Md(Mods::LEFT_SHIFT, key)
    }

    /// A key with AltGr held
    pub const fn altgr(key: Keyboard) -> KeyCode {
        KeyCode::Md(Mods::ALTGR, key)
    }

    pub fn is_shift(&self) -> bool {
        matches!(
            self,
            KeyCode::Kb(Keyboard::LeftShift) | KeyCode::Kb(Keyboard::RightShift)
        )
    }
}

impl Default for KeyCode {
    fn default() -> Self {
        Self::NO
    }
}
