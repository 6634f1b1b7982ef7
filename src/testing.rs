//! Host stand-in for unit tests

extern crate std;

use std::vec::Vec;

use crate::config::DEFAULT_UNICODE_MODE;
use crate::host::Host;
use crate::keycode::{ConsumerUsage, Keyboard, Mods};
use crate::unicode::UnicodeMode;

/// Remembers every keyboard report it would have sent
#[derive(Debug)]
pub struct RecordingHost {
    pub held: Vec<Keyboard>,
    pub reports: Vec<Vec<Keyboard>>,
    pub consumer: Vec<Option<ConsumerUsage>>,
    pub unicode_mode: UnicodeMode,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self {
            held: Vec::new(),
            reports: Vec::new(),
            consumer: Vec::new(),
            unicode_mode: DEFAULT_UNICODE_MODE,
        }
    }
}

impl Host for RecordingHost {
    fn register_code(&mut self, key: Keyboard) {
        if key == Keyboard::NoEventIndicated {
            return;
        }
        if !self.held.contains(&key) {
            self.held.push(key);
        }
        self.reports.push(self.held.clone());
    }

    fn unregister_code(&mut self, key: Keyboard) {
        if key == Keyboard::NoEventIndicated {
            return;
        }
        self.held.retain(|k| *k != key);
        self.reports.push(self.held.clone());
    }

    fn register_consumer(&mut self, usage: ConsumerUsage) {
        self.consumer.push(Some(usage));
    }

    fn unregister_consumer(&mut self, _usage: ConsumerUsage) {
        self.consumer.push(None);
    }

    fn mods(&self) -> Mods {
        self.held
            .iter()
            .fold(Mods::empty(), |mods, key| mods | Mods::from_key(*key))
    }

    fn unicode_mode(&self) -> UnicodeMode {
        self.unicode_mode
    }

    fn set_unicode_mode(&mut self, mode: UnicodeMode) {
        self.unicode_mode = mode;
    }
}

/// Non-modifier keys as they go down, with the modifiers held at that moment
pub fn taps(reports: &[Vec<Keyboard>]) -> Vec<(Mods, Keyboard)> {
    let mut out = Vec::new();
    let mut previous: &[Keyboard] = &[];
    for report in reports {
        let mods = report
            .iter()
            .fold(Mods::empty(), |mods, key| mods | Mods::from_key(*key));
        for key in report {
            if Mods::from_key(*key).is_empty() && !previous.contains(key) {
                out.push((mods, *key));
            }
        }
        previous = report;
    }
    out
}
