//! Hardware configuration types
//!
//! These types configure the keypad scan timing and the LCD controller
//! mode. Pin assignments are fixed by the board and are not configurable.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default keypad debounce interval in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u32 = 40;

/// Keypad scan configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeypadConfig {
    /// Busy-wait between the column edge and the row sample
    pub debounce_ms: u32,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// Number of display lines the controller drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DisplayLines {
    /// Single line
    One,
    /// Two lines (40 characters each)
    #[default]
    Two,
}

/// Character font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Font {
    /// 5x8 dots
    #[default]
    Dots5x8,
    /// 5x10 dots (single-line mode only)
    Dots5x10,
}

/// How a visible cursor is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CursorStyle {
    /// Underline only
    Underline,
    /// Blinking block only
    #[default]
    Blink,
    /// Underline and blinking block
    UnderlineBlink,
}

impl CursorStyle {
    /// Whether the underline cursor is on
    pub fn underline(self) -> bool {
        matches!(self, CursorStyle::Underline | CursorStyle::UnderlineBlink)
    }

    /// Whether the blinking block is on
    pub fn blink(self) -> bool {
        matches!(self, CursorStyle::Blink | CursorStyle::UnderlineBlink)
    }
}

/// Character LCD configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LcdConfig {
    /// Line mode sent with function set
    pub lines: DisplayLines,
    /// Font sent with function set
    pub font: Font,
    /// Cursor style used by `cursor_show` and at initialization
    pub cursor: CursorStyle,
}
