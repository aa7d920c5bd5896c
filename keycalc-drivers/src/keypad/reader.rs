//! Foreground keypad access

use keycalc_core::traits::keypad::KEY_COUNT;
use keycalc_core::traits::{KeyCode, KeySource};

use super::layout::{CharLut, DEFAULT_CHAR_LUT};
use super::slot::KeySlot;

/// Reader handle for the keys published by a [`KeypadScanner`]
///
/// Never touches the hardware. Keys arrive through the shared slot, so the
/// keypad only produces anything once the scanner has been initialized.
///
/// [`KeypadScanner`]: super::KeypadScanner
pub struct Keypad<'a> {
    slot: &'a KeySlot,
    lut: &'a CharLut,
}

impl<'a> Keypad<'a> {
    /// Create a reader using the default key legend
    pub fn new(slot: &'a KeySlot) -> Self {
        Self::with_char_lut(slot, &DEFAULT_CHAR_LUT)
    }

    /// Create a reader using a custom key legend
    pub fn with_char_lut(slot: &'a KeySlot, lut: &'a CharLut) -> Self {
        Self { slot, lut }
    }

    /// Forget the last key
    pub fn clear(&self) {
        self.slot.clear();
    }

    /// Last key pressed, or [`KeyCode::NONE`]
    pub fn get(&self) -> KeyCode {
        self.slot.load()
    }

    /// Block until a key is pressed after this call
    pub fn wait(&self) {
        self.wait_with(core::hint::spin_loop);
    }

    /// Like [`Keypad::wait`], running `idle` between polls
    pub fn wait_with<F: FnMut()>(&self, mut idle: F) {
        self.clear();
        while self.get().is_none() {
            idle();
        }
    }

    /// Block for a key and return it
    pub fn get_wait(&self) -> KeyCode {
        self.wait();
        self.get()
    }

    /// Legend of the last key pressed, `'\0'` if none
    pub fn get_char(&self) -> char {
        self.lut[self.get().value() as usize]
    }

    /// Block for a key and return its legend
    pub fn get_char_wait(&self) -> char {
        self.lut[self.get_wait().value() as usize]
    }

    /// Legend for a raw key number
    ///
    /// Anything outside `1..=16` maps to `'\0'`.
    pub fn to_char(&self, key: i32) -> char {
        if (1..=KEY_COUNT as i32).contains(&key) {
            self.lut[key as usize]
        } else {
            '\0'
        }
    }

    /// Replace the key legend for all later lookups
    pub fn set_char_lut(&mut self, lut: &'a CharLut) {
        self.lut = lut;
    }

    /// Key legend in use
    pub fn char_lut(&self) -> &'a CharLut {
        self.lut
    }
}

impl KeySource for Keypad<'_> {
    fn get(&self) -> KeyCode {
        Keypad::get(self)
    }

    fn get_wait(&mut self) -> KeyCode {
        Keypad::get_wait(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypad::{KeypadScanner, ScanOutcome};
    use crate::testing::{FakeDelay, FakeRegisters};
    use keycalc_core::config::KeypadConfig;
    use proptest::prelude::*;

    static HEX_LUT: CharLut = [
        '\0', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f',
    ];

    #[test]
    fn test_get_is_non_blocking() {
        let slot = KeySlot::new();
        let keypad = Keypad::new(&slot);
        assert!(keypad.get().is_none());
        assert_eq!(keypad.get_char(), '\0');

        slot.store(KeyCode::new(6).unwrap());
        assert_eq!(keypad.get().value(), 6);
        assert_eq!(keypad.get_char(), '5');

        keypad.clear();
        assert!(keypad.get().is_none());
    }

    #[test]
    fn test_to_char_range() {
        let slot = KeySlot::new();
        let keypad = Keypad::new(&slot);
        assert_eq!(keypad.to_char(1), '1');
        assert_eq!(keypad.to_char(16), 'D');
        assert_eq!(keypad.to_char(0), '\0');
        assert_eq!(keypad.to_char(17), '\0');
        assert_eq!(keypad.to_char(-1), '\0');
        assert_eq!(keypad.to_char(i32::MIN), '\0');
    }

    #[test]
    fn test_set_char_lut() {
        let slot = KeySlot::new();
        let mut keypad = Keypad::new(&slot);
        keypad.set_char_lut(&HEX_LUT);

        assert_eq!(keypad.to_char(16), 'f');
        slot.store(KeyCode::new(11).unwrap());
        assert_eq!(keypad.get_char(), 'a');
        assert!(core::ptr::eq(keypad.char_lut(), &HEX_LUT));
    }

    #[test]
    fn test_wait_discards_stale_key() {
        let slot = KeySlot::new();
        let keypad = Keypad::new(&slot);
        slot.store(KeyCode::new(1).unwrap());

        let mut polls = 0;
        keypad.wait_with(|| {
            polls += 1;
            if polls == 3 {
                slot.store(KeyCode::new(9).unwrap());
            }
        });

        assert_eq!(polls, 3);
        assert_eq!(keypad.get().value(), 9);
    }

    /// Store `raw` from another thread once the reader has cleared the slot
    fn press_after_clear<'s>(
        scope: &'s std::thread::Scope<'s, '_>,
        slot: &'s KeySlot,
        raw: u8,
    ) {
        scope.spawn(move || {
            while !slot.load().is_none() {
                std::thread::yield_now();
            }
            std::thread::sleep(std::time::Duration::from_millis(5));
            slot.store(KeyCode::new(raw).unwrap());
        });
    }

    #[test]
    fn test_get_wait_blocks_for_fresh_key() {
        let slot = KeySlot::new();
        let keypad = Keypad::new(&slot);
        slot.store(KeyCode::new(3).unwrap());

        let key = std::thread::scope(|scope| {
            press_after_clear(scope, &slot, 10);
            keypad.get_wait()
        });

        assert_eq!(key.value(), 10);
        assert_eq!(keypad.get(), key);
    }

    #[test]
    fn test_get_char_wait_uses_installed_table() {
        let slot = KeySlot::new();
        let mut keypad = Keypad::new(&slot);
        keypad.set_char_lut(&HEX_LUT);
        slot.store(KeyCode::new(1).unwrap());

        let c = std::thread::scope(|scope| {
            press_after_clear(scope, &slot, 16);
            keypad.get_char_wait()
        });

        assert_eq!(c, 'f');
        assert_eq!(keypad.get().value(), 16);
    }

    #[test]
    fn test_wait_then_get_char_default_table() {
        let slot = KeySlot::new();
        let keypad = Keypad::new(&slot);
        slot.store(KeyCode::new(2).unwrap());

        std::thread::scope(|scope| {
            press_after_clear(scope, &slot, 16);
            keypad.wait();
        });

        assert_eq!(keypad.get_char(), 'D');
    }

    #[test]
    fn test_wait_for_simulated_interrupt() {
        let slot = KeySlot::new();
        let mut regs = FakeRegisters::new();
        regs.set_idr(0x0F | (1 << 5));
        let mut scanner =
            KeypadScanner::new(&mut regs, FakeDelay::new(), &slot, KeypadConfig::default());

        let keypad = Keypad::new(&slot);
        let mut outcome = None;
        keypad.wait_with(|| outcome = Some(scanner.column2()));

        assert_eq!(outcome, Some(ScanOutcome::Key(KeyCode::new(7).unwrap())));
        assert_eq!(keypad.get_char(), '6');
    }

    #[test]
    fn test_key_source_impl() {
        fn last<K: KeySource>(keys: &K) -> KeyCode {
            keys.get()
        }

        let slot = KeySlot::new();
        slot.store(KeyCode::new(16).unwrap());
        assert_eq!(last(&Keypad::new(&slot)).value(), 16);
    }

    proptest! {
        #[test]
        fn prop_to_char_matches_table(key in any::<i32>()) {
            let slot = KeySlot::new();
            let keypad = Keypad::new(&slot);
            let c = keypad.to_char(key);
            if (1..=16).contains(&key) {
                prop_assert_eq!(c, DEFAULT_CHAR_LUT[key as usize]);
                prop_assert_ne!(c, '\0');
            } else {
                prop_assert_eq!(c, '\0');
            }
        }
    }
}
