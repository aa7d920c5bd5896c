//! HD44780 instruction encoding
//!
//! Instruction byte layouts (RS = 0):
//!
//! ```text
//! Clear display          0 0 0 0 0 0 0 1
//! Return home            0 0 0 0 0 0 1 -
//! Entry mode set         0 0 0 0 0 1 I/D S
//! Display on/off         0 0 0 0 1 D C B
//! Cursor/display shift   0 0 0 1 S/C R/L - -
//! Function set           0 0 1 DL N F - -
//! Set CGRAM address      0 1 A A A A A A
//! Set DDRAM address      1 A A A A A A A
//! ```

/// Instruction group bits
pub mod cmd {
    pub const CLEAR_DISPLAY: u8 = 0x01;
    pub const RETURN_HOME: u8 = 0x02;
    pub const ENTRY_MODE_SET: u8 = 0x04;
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const CURSOR_SHIFT: u8 = 0x10;
    pub const FUNCTION_SET: u8 = 0x20;
    pub const SET_CGRAM_ADDR: u8 = 0x40;
    pub const SET_DDRAM_ADDR: u8 = 0x80;

    // Entry mode flags
    pub const ENTRY_INCREMENT: u8 = 0x02;
    pub const ENTRY_SHIFT: u8 = 0x01;

    // Display control flags
    pub const DISPLAY_ON: u8 = 0x04;
    pub const CURSOR_ON: u8 = 0x02;
    pub const BLINK_ON: u8 = 0x01;

    // Shift flags
    pub const SHIFT_DISPLAY: u8 = 0x08;
    pub const SHIFT_RIGHT: u8 = 0x04;

    // Function set flags
    pub const EIGHT_BIT: u8 = 0x10;
    pub const TWO_LINES: u8 = 0x08;
    pub const FONT_5X10: u8 = 0x04;
}

/// Settle time for most instructions and data writes (µs)
pub const SHORT_SETTLE_US: u32 = 37;

/// Settle time for clear display and return home (µs)
pub const LONG_SETTLE_US: u32 = 1520;

/// An HD44780 instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Instruction {
    /// Clear DDRAM and return the cursor home
    Clear,
    /// Return the cursor home and undo any display shift
    ReturnHome,
    /// Cursor direction and display shift applied after each data write
    EntryMode { increment: bool, shift: bool },
    /// Display, cursor and blink visibility
    DisplayControl {
        display: bool,
        cursor: bool,
        blink: bool,
    },
    /// Move the cursor (or shift the display) one position
    Shift { display: bool, right: bool },
    /// Bus width, line count and font
    FunctionSet {
        eight_bit: bool,
        two_lines: bool,
        large_font: bool,
    },
    /// Set the character generator RAM address (6 bits)
    SetCgramAddress(u8),
    /// Set the display data RAM address (7 bits)
    SetDdramAddress(u8),
}

const fn flag(set: bool, bit: u8) -> u8 {
    if set {
        bit
    } else {
        0
    }
}

impl Instruction {
    /// Move the cursor one position to the right
    pub const CURSOR_RIGHT: Instruction = Instruction::Shift {
        display: false,
        right: true,
    };

    /// Encode into the byte placed on the data bus
    pub const fn encode(self) -> u8 {
        match self {
            Instruction::Clear => cmd::CLEAR_DISPLAY,
            Instruction::ReturnHome => cmd::RETURN_HOME,
            Instruction::EntryMode { increment, shift } => {
                cmd::ENTRY_MODE_SET
                    | flag(increment, cmd::ENTRY_INCREMENT)
                    | flag(shift, cmd::ENTRY_SHIFT)
            }
            Instruction::DisplayControl {
                display,
                cursor,
                blink,
            } => {
                cmd::DISPLAY_CONTROL
                    | flag(display, cmd::DISPLAY_ON)
                    | flag(cursor, cmd::CURSOR_ON)
                    | flag(blink, cmd::BLINK_ON)
            }
            Instruction::Shift { display, right } => {
                cmd::CURSOR_SHIFT
                    | flag(display, cmd::SHIFT_DISPLAY)
                    | flag(right, cmd::SHIFT_RIGHT)
            }
            Instruction::FunctionSet {
                eight_bit,
                two_lines,
                large_font,
            } => {
                cmd::FUNCTION_SET
                    | flag(eight_bit, cmd::EIGHT_BIT)
                    | flag(two_lines, cmd::TWO_LINES)
                    | flag(large_font, cmd::FONT_5X10)
            }
            Instruction::SetCgramAddress(addr) => cmd::SET_CGRAM_ADDR | (addr & 0x3F),
            Instruction::SetDdramAddress(addr) => cmd::SET_DDRAM_ADDR | (addr & 0x7F),
        }
    }

    /// Time the controller needs before it accepts the next transfer (µs)
    pub const fn settle_us(self) -> u32 {
        match self {
            Instruction::Clear | Instruction::ReturnHome => LONG_SETTLE_US,
            _ => SHORT_SETTLE_US,
        }
    }
}
