//! The primitives a keymap can ask of the firmware it runs in

use crate::keycode::{ConsumerUsage, Keyboard, Mods};
use crate::unicode::UnicodeMode;

/// Something that turns key registrations into what the computer sees.
///
/// Only the first group of methods has to be implemented; taps, chords and
/// strings are built from them.
pub trait Host {
    /// Adds a key to the keys held down
    fn register_code(&mut self, key: Keyboard);
    /// Removes a key from the keys held down, however it got there
    fn unregister_code(&mut self, key: Keyboard);
    fn register_consumer(&mut self, usage: ConsumerUsage);
    fn unregister_consumer(&mut self, usage: ConsumerUsage);
    /// Modifiers currently held down
    fn mods(&self) -> Mods;
    fn unicode_mode(&self) -> UnicodeMode;
    fn set_unicode_mode(&mut self, mode: UnicodeMode);

    fn register_mods(&mut self, mods: Mods) {
        for key in mods.keys() {
            self.register_code(key);
        }
    }

    fn unregister_mods(&mut self, mods: Mods) {
        for key in mods.keys() {
            self.unregister_code(key);
        }
    }

    /// Press and release
    fn tap_code(&mut self, key: Keyboard) {
        self.register_code(key);
        self.unregister_code(key);
    }

    /// Press and release with modifiers around it
    fn tap_code16(&mut self, mods: Mods, key: Keyboard) {
        self.register_mods(mods);
        self.tap_code(key);
        self.unregister_mods(mods);
    }

    /// Types ASCII text on the Spanish layout
    fn send_string(&mut self, text: &str)
    where
        Self: Sized,
    {
        crate::sendstring::send_string(self, text)
    }

    /// Types arbitrary text through the current Unicode input mode
    fn send_unicode_string(&mut self, text: &str)
    where
        Self: Sized,
    {
        crate::unicode::send_unicode_string(self, text)
    }
}
