//! Character display trait
//!
//! A two-line character display addressed as `(column, row)`. The LCD
//! driver implements this; the calculator only ever talks to the trait.

use core::fmt;

/// Characters per display row
pub const ROW_LENGTH: u8 = 40;

/// Number of display rows
pub const ROW_COUNT: u8 = 2;

/// Total character capacity of the display
pub const MAX_LENGTH: usize = ROW_LENGTH as usize * ROW_COUNT as usize;

/// Errors that can occur when driving the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Formatted text does not fit the display buffer
    TooLong,
    /// Cursor position outside the display
    OutOfBounds,
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::TooLong => write!(f, "text exceeds {} characters", MAX_LENGTH),
            DisplayError::OutOfBounds => write!(f, "cursor position outside display"),
        }
    }
}

/// Trait for character display output
///
/// All operations block until the display has accepted the data.
pub trait CharDisplay {
    /// Clear the display and return the cursor home
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Return the cursor to `(0, 0)` without clearing
    fn cursor_home(&mut self) -> Result<(), DisplayError>;

    /// Move the cursor to an absolute position
    ///
    /// - `x`: Column (0-39)
    /// - `y`: Row (0-1)
    fn cursor_set(&mut self, x: u8, y: u8) -> Result<(), DisplayError>;

    /// Make the cursor visible
    fn cursor_show(&mut self) -> Result<(), DisplayError>;

    /// Hide the cursor
    fn cursor_hide(&mut self) -> Result<(), DisplayError>;

    /// Print formatted text at the cursor
    ///
    /// Text longer than [`MAX_LENGTH`] is rejected as a whole.
    fn print(&mut self, args: fmt::Arguments<'_>) -> Result<(), DisplayError>;

    /// Print a single character at the cursor
    fn print_char(&mut self, c: char) -> Result<(), DisplayError> {
        self.print(format_args!("{}", c))
    }
}
