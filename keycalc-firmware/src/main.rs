//! Keycalc - Keypad Calculator Firmware
//!
//! Four-function calculator for STM32F446 boards with a 4x4 matrix keypad
//! on GPIOC and an HD44780 character LCD on GPIOA/GPIOC.
//!
//! Keys are resolved in the EXTI0-EXTI3 handlers and published through a
//! shared slot; the main task blocks on that slot and drives the LCD.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use keycalc_drivers::keypad::Keypad;
use keycalc_drivers::lcd::Lcd;
use keycalc_hal_stm32f4::Mmio;

mod board;
mod keypad;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Keycalc firmware starting...");

    // Default config: HSI at 16 MHz, time driver on a general purpose timer
    let _p = embassy_stm32::init(Default::default());
    info!("Peripherals initialized");

    // SAFETY: after init the LCD only writes GPIOA_ODR and GPIOC_ODR pins
    // 8-10, which the keypad scanner never touches
    let mut lcd = Lcd::new(unsafe { Mmio::new() }, Delay, board::LCD);
    lcd.initialize();
    info!("LCD initialized: {}", lcd.config());

    keypad::start(board::KEYPAD);
    info!("Keypad armed");

    tasks::calculator_loop(lcd, Keypad::new(&keypad::KEY_SLOT));
}
