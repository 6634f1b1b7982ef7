//! Build-time settings for this keymap

use crate::unicode::UnicodeMode;

/// `<keyboard>/<keymap>@<build date>`, as typed by the version key.
///
/// The build date is `YYYY-MM-DD-HH:MM:SS` in UTC rather than local time, so
/// that a build pinned with `SOURCE_DATE_EPOCH` types the same string
/// wherever it's built.
pub const VERSION: &str = concat!(
    env!("KEYMAP_KEYBOARD"),
    "/",
    env!("KEYMAP_NAME"),
    "@",
    env!("KEYMAP_BUILD_DATE")
);

/// Modes the Unicode mode key steps through, in order
pub const SELECTED_UNICODE_MODES: [UnicodeMode; 3] = [
    UnicodeMode::Linux,
    UnicodeMode::MacOs,
    UnicodeMode::WinCompose,
];

pub const DEFAULT_UNICODE_MODE: UnicodeMode = SELECTED_UNICODE_MODES[0];

/// Keys that can be held at once, modifiers included
pub const ROLLOVER: usize = 24;

/// Reports buffered between two USB polls; the shrug needs about 150.
pub const REPORT_QUEUE: usize = 1024;
