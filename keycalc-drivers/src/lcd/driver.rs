//! HD44780 driver over the register bank

use core::fmt::{self, Write};

use embedded_hal::delay::DelayNs;
use heapless::Vec;
use keycalc_core::config::{DisplayLines, Font, LcdConfig};
use keycalc_core::traits::display::{MAX_LENGTH, ROW_COUNT, ROW_LENGTH};
use keycalc_core::traits::{CharDisplay, DisplayError};
use keycalc_hal::regs::{RCC_AHB1ENR_GPIOAEN, RCC_AHB1ENR_GPIOCEN};
use keycalc_hal::{Register, RegisterBank};

use super::instruction::{Instruction, SHORT_SETTLE_US};
use super::{CONTROL_MODER, DATABUS_MASK, DATABUS_MAX, DATABUS_MODER, DATABUS_SHIFT, E, RS, RW};

/// Character LCD on the board's parallel bus
///
/// Nothing is checked before [`Lcd::initialize`] has run; commands sent to
/// an unconfigured port are lost.
pub struct Lcd<R, D> {
    regs: R,
    delay: D,
    config: LcdConfig,
}

impl<R: RegisterBank, D: DelayNs> Lcd<R, D> {
    /// Create a driver without touching the hardware
    pub fn new(regs: R, delay: D, config: LcdConfig) -> Self {
        Self {
            regs,
            delay,
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &LcdConfig {
        &self.config
    }

    /// Give back the register bank and delay
    pub fn release(self) -> (R, D) {
        (self.regs, self.delay)
    }

    /// Configure the port pins and run the controller init sequence
    ///
    /// Safe to call again; the sequence is simply re-sent.
    pub fn initialize(&mut self) {
        self.regs
            .set_bits(Register::RccAhb1Enr, RCC_AHB1ENR_GPIOAEN | RCC_AHB1ENR_GPIOCEN);
        self.regs.set_bits(Register::GpioaModer, DATABUS_MODER);
        self.regs.set_bits(Register::GpiocModer, CONTROL_MODER);

        // Function set is sent twice so the bus width is latched from any state
        let function_set = self.function_set();
        self.send(function_set);
        self.send(function_set);
        self.send(self.display_control(true));
        self.send(Instruction::Clear);
        self.send(Instruction::EntryMode {
            increment: true,
            shift: false,
        });
    }

    /// Send one instruction and wait for it to settle
    pub fn send(&mut self, instruction: Instruction) {
        if self.latch(false, instruction.encode() as u32) {
            self.delay.delay_us(instruction.settle_us());
        }
    }

    /// Write one character at the cursor
    ///
    /// Characters outside the 8-bit bus range are dropped.
    pub fn write_char(&mut self, c: char) {
        if self.latch(true, c as u32) {
            self.delay.delay_us(SHORT_SETTLE_US);
        }
    }

    fn function_set(&self) -> Instruction {
        Instruction::FunctionSet {
            eight_bit: true,
            two_lines: self.config.lines == DisplayLines::Two,
            large_font: self.config.font == Font::Dots5x10,
        }
    }

    fn display_control(&self, cursor_visible: bool) -> Instruction {
        let style = self.config.cursor;
        Instruction::DisplayControl {
            display: true,
            cursor: cursor_visible && style.underline(),
            blink: cursor_visible && style.blink(),
        }
    }

    /// Put `value` on the bus and pulse E
    ///
    /// Returns `false` without touching the bus if `value` is wider than
    /// eight bits.
    fn latch(&mut self, data: bool, value: u32) -> bool {
        if value > DATABUS_MAX {
            return false;
        }

        if data {
            self.regs.set_bits(Register::GpiocOdr, E | RS);
            self.regs.clear_bits(Register::GpiocOdr, RW);
        } else {
            self.regs.set_bits(Register::GpiocOdr, E);
            self.regs.clear_bits(Register::GpiocOdr, RS | RW);
        }

        self.regs.clear_bits(Register::GpioaOdr, DATABUS_MASK);
        self.regs
            .set_bits(Register::GpioaOdr, value << DATABUS_SHIFT);

        self.regs.clear_bits(Register::GpiocOdr, E);
        true
    }
}

impl<R: RegisterBank, D: DelayNs> CharDisplay for Lcd<R, D> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.send(Instruction::Clear);
        Ok(())
    }

    fn cursor_home(&mut self) -> Result<(), DisplayError> {
        self.send(Instruction::ReturnHome);
        Ok(())
    }

    fn cursor_set(&mut self, x: u8, y: u8) -> Result<(), DisplayError> {
        if x >= ROW_LENGTH || y >= ROW_COUNT {
            return Err(DisplayError::OutOfBounds);
        }

        self.send(Instruction::ReturnHome);
        let shifts = y as u16 * ROW_LENGTH as u16 + x as u16;
        for _ in 0..shifts {
            self.send(Instruction::CURSOR_RIGHT);
        }
        Ok(())
    }

    fn cursor_show(&mut self) -> Result<(), DisplayError> {
        self.send(self.display_control(true));
        Ok(())
    }

    fn cursor_hide(&mut self) -> Result<(), DisplayError> {
        self.send(self.display_control(false));
        Ok(())
    }

    fn print(&mut self, args: fmt::Arguments<'_>) -> Result<(), DisplayError> {
        let mut cells = Cells::default();
        cells.write_fmt(args).map_err(|_| DisplayError::TooLong)?;

        for &c in cells.0.iter() {
            self.write_char(c);
        }
        Ok(())
    }
}

/// Formatted text, one entry per display cell
#[derive(Default)]
struct Cells(Vec<char, MAX_LENGTH>);

impl Write for Cells {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            self.0.push(c).map_err(|_| fmt::Error)?;
        }
        Ok(())
    }
}
