//! Turns key registrations into a queue of HID reports

use heapless::{Deque, Vec};

use crate::config::DEFAULT_UNICODE_MODE;
use crate::host::Host;
use crate::keycode::{ConsumerUsage, Keyboard, Mods};
use crate::unicode::UnicodeMode;

/// One report for the USB side to send, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report<const ROLLOVER: usize> {
    /// Every key held down, modifiers included
    Keyboard(Vec<Keyboard, ROLLOVER>),
    /// The active consumer usage, `None` once released
    Consumer(Option<ConsumerUsage>),
}

#[derive(Debug, Default)]
pub struct ReportFlags {
    /// A key was dropped because too many were held
    pub rollover: bool,
    /// A report was dropped because the queue was full
    pub overflow: bool,
}

pub struct Reporter<const ROLLOVER: usize, const QUEUE: usize> {
    held: Vec<Keyboard, ROLLOVER>,
    consumer: Option<ConsumerUsage>,
    reports: Deque<Report<ROLLOVER>, QUEUE>,
    unicode_mode: UnicodeMode,
    pub flags: ReportFlags,
}

impl<const ROLLOVER: usize, const QUEUE: usize> Reporter<ROLLOVER, QUEUE> {
    pub fn new() -> Self {
        Reporter {
            held: Vec::new(),
            consumer: None,
            reports: Deque::new(),
            unicode_mode: DEFAULT_UNICODE_MODE,
            flags: Default::default(),
        }
    }

    /// Keys currently held down
    pub fn held(&self) -> &[Keyboard] {
        &self.held
    }

    pub fn pop_report(&mut self) -> Option<Report<ROLLOVER>> {
        self.reports.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    fn queue(&mut self, report: Report<ROLLOVER>) {
        if self.reports.push_back(report).is_err() {
            if !self.flags.overflow {
                log::warn!("report queue full, dropping reports");
            }
            self.flags.overflow = true;
        }
    }

    fn queue_keys(&mut self) {
        let keys = self.held.clone();
        self.queue(Report::Keyboard(keys));
    }
}

impl<const ROLLOVER: usize, const QUEUE: usize> Default for Reporter<ROLLOVER, QUEUE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const ROLLOVER: usize, const QUEUE: usize> Host for Reporter<ROLLOVER, QUEUE> {
    fn register_code(&mut self, key: Keyboard) {
        if key == Keyboard::NoEventIndicated {
            return;
        }
        if !self.held.contains(&key) && self.held.push(key).is_err() {
            log::warn!("rollover: dropping {:?}", key);
            self.flags.rollover = true;
        }
        self.queue_keys();
    }

    fn unregister_code(&mut self, key: Keyboard) {
        if key == Keyboard::NoEventIndicated {
            return;
        }
        self.held.retain(|k| *k != key);
        self.queue_keys();
    }

    fn register_consumer(&mut self, usage: ConsumerUsage) {
        self.consumer = Some(usage);
        self.queue(Report::Consumer(self.consumer));
    }

    fn unregister_consumer(&mut self, usage: ConsumerUsage) {
        if self.consumer == Some(usage) {
            self.consumer = None;
            self.queue(Report::Consumer(None));
        }
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
