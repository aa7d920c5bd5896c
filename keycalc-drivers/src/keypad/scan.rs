//! Interrupt-side keypad scanning

use embedded_hal::delay::DelayNs;
use keycalc_core::config::KeypadConfig;
use keycalc_core::traits::KeyCode;
use keycalc_hal::regs::{RCC_AHB1ENR_GPIOCEN, RCC_APB2ENR_SYSCFGEN};
use keycalc_hal::{Register, RegisterBank};

use super::layout::decode_row;
use super::slot::KeySlot;
use super::{
    COLUMNS, COLUMN_EXTICR1, COLUMN_IRQS, COLUMN_LINES, KEYPAD_FIELDS, KEYPAD_PINS,
    KEYPAD_PULL_DOWN, MODER_IDLE, MODER_SCAN, ROW_SHIFT,
};

/// Result of handling one column edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanOutcome {
    /// A single row answered; the key was stored in the slot
    Key(KeyCode),
    /// No row or several rows answered; the slot was left alone
    NoKey { sample: u8 },
    /// Column index outside the keypad; nothing was touched
    InvalidColumn,
}

/// Owns the keypad port and turns column edges into key codes
///
/// Meant to run in interrupt context, one call per EXTI0-EXTI3 edge. All
/// column interrupts are masked for the whole scan so scans never overlap.
pub struct KeypadScanner<'a, R, D> {
    regs: R,
    delay: D,
    slot: &'a KeySlot,
    config: KeypadConfig,
}

impl<'a, R: RegisterBank, D: DelayNs> KeypadScanner<'a, R, D> {
    /// Create a scanner without touching the hardware
    pub fn new(regs: R, delay: D, slot: &'a KeySlot, config: KeypadConfig) -> Self {
        Self {
            regs,
            delay,
            slot,
            config,
        }
    }

    /// Slot this scanner publishes keys to
    pub fn slot(&self) -> &'a KeySlot {
        self.slot
    }

    /// Direct access to the register bank
    pub fn registers_mut(&mut self) -> &mut R {
        &mut self.regs
    }

    /// Give back the register bank and delay
    pub fn release(self) -> (R, D) {
        (self.regs, self.delay)
    }

    /// Configure the port, route the column interrupts and clear the slot
    pub fn initialize(&mut self) {
        self.regs
            .set_bits(Register::RccAhb1Enr, RCC_AHB1ENR_GPIOCEN);

        // Drive every line high; only the outputs actually drive
        self.regs.set_bits(Register::GpiocOdr, KEYPAD_PINS);
        self.regs.modify(Register::GpiocPupdr, |v| {
            (v & !KEYPAD_FIELDS) | KEYPAD_PULL_DOWN
        });
        self.regs
            .modify(Register::GpiocModer, |v| (v & !KEYPAD_FIELDS) | MODER_IDLE);

        self.regs
            .set_bits(Register::RccApb2Enr, RCC_APB2ENR_SYSCFGEN);
        self.regs.set_bits(Register::SyscfgExticr1, COLUMN_EXTICR1);

        self.regs.set_bits(Register::ExtiImr, COLUMN_LINES);
        self.regs.set_bits(Register::ExtiRtsr, COLUMN_LINES);
        self.regs.write(Register::NvicIser0, COLUMN_IRQS);

        self.slot.clear();
    }

    /// Disable the column interrupts
    pub fn shutdown(&mut self) {
        self.regs.clear_bits(Register::ExtiImr, COLUMN_LINES);
        self.regs.write(Register::NvicIcer0, COLUMN_IRQS);
    }

    /// Scan after a rising edge on `column`
    pub fn on_column_edge(&mut self, column: u8) -> ScanOutcome {
        if column >= COLUMNS {
            return ScanOutcome::InvalidColumn;
        }

        self.regs.clear_bits(Register::ExtiImr, COLUMN_LINES);
        self.regs
            .modify(Register::GpiocModer, |v| (v & !KEYPAD_FIELDS) | MODER_SCAN);

        self.delay.delay_ms(self.config.debounce_ms);

        let sample = ((self.regs.read(Register::GpiocIdr) >> ROW_SHIFT) & 0x0F) as u8;
        let key = decode_row(sample).and_then(|row| KeyCode::from_position(row, column));
        let outcome = match key {
            Some(key) => {
                self.slot.store(key);
                ScanOutcome::Key(key)
            }
            None => ScanOutcome::NoKey { sample },
        };

        self.regs
            .modify(Register::GpiocModer, |v| (v & !KEYPAD_FIELDS) | MODER_IDLE);
        self.regs.write(Register::ExtiPr, 1 << column);
        self.regs.set_bits(Register::ExtiImr, COLUMN_LINES);

        outcome
    }

    /// EXTI0 handler body
    pub fn column0(&mut self) -> ScanOutcome {
        self.on_column_edge(0)
    }

    /// EXTI1 handler body
    pub fn column1(&mut self) -> ScanOutcome {
        self.on_column_edge(1)
    }

    /// EXTI2 handler body
    pub fn column2(&mut self) -> ScanOutcome {
        self.on_column_edge(2)
    }

    /// EXTI3 handler body
    pub fn column3(&mut self) -> ScanOutcome {
        self.on_column_edge(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeDelay, FakeRegisters};
    use proptest::prelude::*;

    type TestScanner<'a> = KeypadScanner<'a, &'a mut FakeRegisters, FakeDelay>;

    fn scanner<'a>(regs: &'a mut FakeRegisters, slot: &'a KeySlot) -> TestScanner<'a> {
        KeypadScanner::new(regs, FakeDelay::new(), slot, KeypadConfig::default())
    }

    /// IDR value with `row` high and the driven columns reading back high
    fn row_high(row: u8) -> u32 {
        0x0F | (1 << (ROW_SHIFT + row))
    }

    #[test]
    fn test_initialize_configures_port() {
        let slot = KeySlot::new();
        slot.store(KeyCode::new(5).unwrap());

        let mut regs = FakeRegisters::new();
        regs.preset(Register::GpiocModer, 0x0015_FFFF);
        regs.preset(Register::GpiocPupdr, 0x0001_5555);
        scanner(&mut regs, &slot).initialize();

        assert_eq!(regs.get(Register::RccAhb1Enr), 1 << 2);
        assert_eq!(regs.get(Register::RccApb2Enr), 1 << 14);
        assert_eq!(regs.get(Register::GpiocOdr), 0xFF);
        assert_eq!(regs.get(Register::GpiocPupdr), 0x0001_AAAA);
        assert_eq!(regs.get(Register::GpiocModer), 0x0015_5500);
        assert_eq!(regs.get(Register::SyscfgExticr1), 0x2222);
        assert_eq!(regs.get(Register::ExtiImr), 0x0F);
        assert_eq!(regs.get(Register::ExtiRtsr), 0x0F);
        assert_eq!(regs.writes_to(Register::NvicIser0), vec![0b1111 << 6]);
        assert!(slot.load().is_none());
    }

    #[test]
    fn test_scan_stores_key() {
        let slot = KeySlot::new();
        let mut regs = FakeRegisters::new();
        let mut scanner = scanner(&mut regs, &slot);
        scanner.initialize();
        scanner.registers_mut().set_idr(row_high(2));
        scanner.registers_mut().clear_log();
        assert!(core::ptr::eq(scanner.slot(), &slot));

        let outcome = scanner.on_column_edge(1);
        let (_, delay) = scanner.release();

        let key = KeyCode::new(2 * 4 + 1 + 1).unwrap();
        assert_eq!(outcome, ScanOutcome::Key(key));
        assert_eq!(slot.load(), key);
        assert_eq!(delay.calls_ns, vec![40_000_000]);
    }

    #[test]
    fn test_scan_register_sequence() {
        let slot = KeySlot::new();
        let mut regs = FakeRegisters::new();
        regs.preset(Register::GpiocModer, 0x0015_0000);
        let mut scanner = scanner(&mut regs, &slot);
        scanner.initialize();
        scanner.registers_mut().set_idr(row_high(0));
        scanner.registers_mut().clear_log();
        scanner.column3();
        drop(scanner);

        assert_eq!(
            regs.write_sequence(),
            vec![
                Register::ExtiImr,
                Register::GpiocModer,
                Register::ExtiPr,
                Register::ExtiImr,
            ]
        );
        assert_eq!(regs.writes_to(Register::ExtiImr), vec![0x00, 0x0F]);
        assert_eq!(
            regs.writes_to(Register::GpiocModer),
            vec![0x0015_0055, 0x0015_5500]
        );
        // Only this column's pending bit is cleared
        assert_eq!(regs.writes_to(Register::ExtiPr), vec![1 << 3]);
        assert_eq!(slot.load().value(), 4);
    }

    #[test]
    fn test_ambiguous_scan_keeps_previous_key() {
        let slot = KeySlot::new();
        let mut regs = FakeRegisters::new();
        let mut scanner = scanner(&mut regs, &slot);
        scanner.initialize();

        scanner.registers_mut().set_idr(row_high(3));
        scanner.column0();
        assert_eq!(slot.load().value(), 13);

        scanner.registers_mut().set_idr(0x0F | (0b0101 << 4));
        assert_eq!(scanner.column2(), ScanOutcome::NoKey { sample: 0b0101 });
        assert_eq!(slot.load().value(), 13);

        scanner.registers_mut().set_idr(0x0F);
        assert_eq!(scanner.column1(), ScanOutcome::NoKey { sample: 0 });
        assert_eq!(slot.load().value(), 13);

        // Interrupts are re-armed even when nothing was found
        assert_eq!(scanner.registers_mut().get(Register::ExtiImr), 0x0F);
    }

    #[test]
    fn test_invalid_column_is_ignored() {
        let slot = KeySlot::new();
        let mut regs = FakeRegisters::new();
        let mut scanner = scanner(&mut regs, &slot);
        scanner.registers_mut().set_idr(row_high(1));

        assert_eq!(scanner.on_column_edge(4), ScanOutcome::InvalidColumn);
        assert_eq!(scanner.on_column_edge(255), ScanOutcome::InvalidColumn);
        let (_, delay) = scanner.release();

        assert!(regs.writes.is_empty());
        assert!(delay.calls_ns.is_empty());
        assert!(slot.load().is_none());
    }

    #[test]
    fn test_debounce_from_config() {
        let slot = KeySlot::new();
        let mut regs = FakeRegisters::new();
        regs.set_idr(row_high(0));
        let config = KeypadConfig { debounce_ms: 5 };
        let mut scanner = KeypadScanner::new(&mut regs, FakeDelay::new(), &slot, config);
        scanner.column0();
        let (_, delay) = scanner.release();
        assert_eq!(delay.total_us(), 5_000);
    }

    #[test]
    fn test_shutdown_masks_interrupts() {
        let slot = KeySlot::new();
        let mut regs = FakeRegisters::new();
        let mut scanner = scanner(&mut regs, &slot);
        scanner.initialize();
        scanner.shutdown();
        drop(scanner);

        assert_eq!(regs.get(Register::ExtiImr), 0);
        assert_eq!(regs.writes_to(Register::NvicIcer0), vec![0b1111 << 6]);
    }

    proptest! {
        #[test]
        fn prop_key_from_row_and_column(row in 0u8..4, column in 0u8..4) {
            let slot = KeySlot::new();
            let mut regs = FakeRegisters::new();
            regs.set_idr(row_high(row));
            let outcome = scanner(&mut regs, &slot).on_column_edge(column);

            let expected = row * 4 + column + 1;
            prop_assert_eq!(outcome, ScanOutcome::Key(KeyCode::new(expected).unwrap()));
            prop_assert_eq!(slot.load().value(), expected);
        }
    }
}
