//! Keypad traits and key codes

/// Number of keys on the 4x4 matrix
pub const KEY_COUNT: u8 = 16;

/// Keys per matrix row
pub const KEYS_PER_ROW: u8 = 4;

/// A keypad key code
///
/// `0` means "no key"; `1..=16` walk the 4x4 grid in row-major order
/// (row 0 holds keys 1-4, row 1 keys 5-8, and so on).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyCode(u8);

impl KeyCode {
    /// The "no key" code
    pub const NONE: KeyCode = KeyCode(0);

    /// Create a key code from a raw value
    ///
    /// Returns `None` for values above 16.
    pub const fn new(raw: u8) -> Option<Self> {
        if raw <= KEY_COUNT {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Key code for a matrix position
    ///
    /// Returns `None` if `row` or `column` is outside `0..4`.
    pub const fn from_position(row: u8, column: u8) -> Option<Self> {
        if row < KEYS_PER_ROW && column < KEYS_PER_ROW {
            Some(Self(row * KEYS_PER_ROW + column + 1))
        } else {
            None
        }
    }

    /// Raw key code value (0-16)
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is the "no key" code
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Matrix row of the key (0-3), or `None` for "no key"
    pub const fn row(self) -> Option<u8> {
        if self.0 == 0 {
            None
        } else {
            Some((self.0 - 1) / KEYS_PER_ROW)
        }
    }

    /// Matrix column of the key (0-3), or `None` for "no key"
    pub const fn column(self) -> Option<u8> {
        if self.0 == 0 {
            None
        } else {
            Some((self.0 - 1) % KEYS_PER_ROW)
        }
    }
}

impl From<KeyCode> for i32 {
    fn from(key: KeyCode) -> Self {
        key.0 as i32
    }
}

impl From<KeyCode> for u8 {
    fn from(key: KeyCode) -> Self {
        key.0
    }
}

/// Source of key presses
///
/// Implemented by the keypad reader handle; the calculator consumes it.
pub trait KeySource {
    /// Last key pressed, or [`KeyCode::NONE`] (non-blocking)
    fn get(&self) -> KeyCode;

    /// Block until a new key is pressed and return it
    fn get_wait(&mut self) -> KeyCode;
}
