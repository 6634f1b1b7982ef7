//! Spanish layout for the ZSA Moonlander, with a few keys that type what a
//! Spanish keyboard can't reach in one press.
//!
//! [`layout::keymap`] gives a [`keystate::Keymap`] to feed matrix scans to.
//! Everything it types goes through a [`host::Host`]; [`report::Reporter`]
//! is one that turns it into HID reports.
#![no_std]

pub mod config;
pub mod host;
pub mod keycode;
pub mod keystate;
pub mod layout;
pub mod process;
pub mod report;
pub mod sendstring;
pub mod unicode;

#[cfg(test)]
mod testing;

pub use host::Host;
pub use keycode::{CustomKey, KeyCode, Mods};
pub use keystate::Keymap;
pub use report::{Report, Reporter};
pub use unicode::UnicodeMode;
