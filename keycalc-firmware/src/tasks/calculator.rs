//! Calculator loop
//!
//! Blocks on the keypad, feeds each key to the calculator and logs what
//! happened.

use defmt::*;
use embassy_time::Delay;
use keycalc_core::calculator::{Calculator, Outcome};
use keycalc_drivers::keypad::Keypad;
use keycalc_drivers::lcd::Lcd;
use keycalc_hal_stm32f4::Mmio;

use crate::board;

/// Run the calculator forever
pub fn calculator_loop(mut lcd: Lcd<Mmio, Delay>, keypad: Keypad<'static>) -> ! {
    info!("Calculator task started");

    let mut calculator = Calculator::new(board::CALCULATOR);
    let mut delay = Delay;

    loop {
        let key = keypad.get_wait();
        debug!("Key {} ({})", key, keypad.to_char(key.into()));

        match calculator.handle_key(key, &mut lcd, &mut delay) {
            Ok(Outcome::Result { value, error: None }) => info!("Result: {}", value),
            Ok(Outcome::Result {
                value,
                error: Some(e),
            }) => warn!("Result forced to {}: {}", value, e),
            Ok(Outcome::Cleared) => info!("Cleared"),
            Ok(Outcome::Ignored) => trace!("Key {} ignored", key),
            Ok(outcome) => trace!("{}", outcome),
            Err(e) => warn!("Display error: {}", e),
        }
    }
}
