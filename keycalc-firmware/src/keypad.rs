//! Keypad interrupt glue
//!
//! The scanner lives behind a critical-section mutex and is only touched
//! from the EXTI0-EXTI3 handlers once started. The key slot is a plain
//! static shared with the foreground.

use core::cell::RefCell;

use critical_section::Mutex;
use defmt::*;
use embassy_stm32::interrupt;
use keycalc_core::config::KeypadConfig;
use keycalc_drivers::keypad::{KeySlot, KeypadScanner, ScanOutcome};
use keycalc_hal_stm32f4::{CycleDelay, Mmio};

use crate::board;

/// Last key resolved by a scan
pub static KEY_SLOT: KeySlot = KeySlot::new();

type Scanner = KeypadScanner<'static, Mmio, CycleDelay>;

static SCANNER: Mutex<RefCell<Option<Scanner>>> = Mutex::new(RefCell::new(None));

/// Install the scanner and arm the column interrupts
///
/// Must run after the LCD has been initialized: both share GPIOC_MODER and
/// only the LCD init touches it from the foreground.
pub fn start(config: KeypadConfig) {
    // SAFETY: the scanner only read-modify-writes GPIOC MODER (pins 0-7)
    // and the EXTI registers after this point; nothing else touches those
    let regs = unsafe { Mmio::new() };
    let delay = CycleDelay::new(board::CORE_CLOCK_HZ);
    let scanner = KeypadScanner::new(regs, delay, &KEY_SLOT, config);

    critical_section::with(|cs| {
        SCANNER.borrow_ref_mut(cs).insert(scanner).initialize();
    });
}

fn scan(column: u8) {
    // The debounce wait runs inside the critical section, so every interrupt,
    // including the embassy time driver's, is held off for the whole scan
    let outcome = critical_section::with(|cs| {
        SCANNER
            .borrow_ref_mut(cs)
            .as_mut()
            .map(|scanner| scanner.on_column_edge(column))
    });

    match outcome {
        Some(ScanOutcome::Key(key)) => debug!("Column {}: key {}", column, key),
        Some(ScanOutcome::NoKey { sample }) => {
            trace!("Column {}: rejected row sample {=u8:b}", column, sample)
        }
        Some(ScanOutcome::InvalidColumn) => {}
        None => warn!("Column {} edge before keypad start", column),
    }
}

#[interrupt]
fn EXTI0() {
    scan(0);
}

#[interrupt]
fn EXTI1() {
    scan(1);
}

#[interrupt]
fn EXTI2() {
    scan(2);
}

#[interrupt]
fn EXTI3() {
    scan(3);
}
