//! Last-key slot shared between interrupt and foreground

use keycalc_core::traits::KeyCode;
use portable_atomic::{AtomicU8, Ordering};

/// Holds the most recent key code; later scans overwrite earlier ones
pub struct KeySlot {
    raw: AtomicU8,
}

impl Default for KeySlot {
    fn default() -> Self {
        Self::new()
    }
}

impl KeySlot {
    /// Create an empty slot (usable in a `static`)
    pub const fn new() -> Self {
        Self {
            raw: AtomicU8::new(0),
        }
    }

    /// Current key code
    pub fn load(&self) -> KeyCode {
        KeyCode::new(self.raw.load(Ordering::Acquire)).unwrap_or(KeyCode::NONE)
    }

    /// Overwrite the slot
    pub fn store(&self, key: KeyCode) {
        self.raw.store(key.value(), Ordering::Release);
    }

    /// Reset to "no key"
    pub fn clear(&self) {
        self.store(KeyCode::NONE);
    }
}
