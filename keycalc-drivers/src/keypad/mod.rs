//! 4x4 matrix keypad
//!
//! Wiring on GPIOC:
//! - PC0-PC3: columns, EXTI0-EXTI3 on rising edge
//! - PC4-PC7: rows
//!
//! While idle the rows are driven high and the columns are pulled down, so
//! a key press raises its column line and fires that column's interrupt.
//! The interrupt side then swaps the port direction, waits out the bounce
//! and reads which row is high. The foreground only ever sees the resulting
//! key code through a [`KeySlot`].
//!
//! ```text
//!   interrupt side                      foreground
//!   ┌────────────────┐   KeySlot   ┌─────────────┐
//!   │ KeypadScanner  │ ──────────▶ │   Keypad    │ ──▶ KeySource
//!   └────────────────┘             └─────────────┘
//!          ▲
//!          │ ColumnEdge (EdgeQueue, host simulation)
//! ```

mod edge;
mod layout;
mod reader;
mod scan;
mod slot;

pub use edge::{ColumnEdge, EdgeQueue};
pub use layout::{decode_row, CharLut, DEFAULT_CHAR_LUT, ROW_LUT};
pub use reader::Keypad;
pub use scan::{KeypadScanner, ScanOutcome};
pub use slot::KeySlot;

use keycalc_hal::exti::{self, Port};
use keycalc_hal::gpio::{field_mask, mode_value, pin_mask, pull_value};
use keycalc_hal::{PinMode, Pull};

/// Number of column lines (and EXTI lines)
pub const COLUMNS: u8 = 4;

/// Number of row lines
pub const ROWS: u8 = 4;

/// First row pin on GPIOC
pub const ROW_SHIFT: u8 = 4;

/// GPIOC_ODR bits for every keypad line
pub const KEYPAD_PINS: u32 = pin_mask(0, COLUMNS + ROWS);

/// GPIOC_PUPDR/MODER fields for every keypad line
pub const KEYPAD_FIELDS: u32 = field_mask(0, COLUMNS + ROWS);

/// GPIOC_PUPDR value pulling every keypad line down
pub const KEYPAD_PULL_DOWN: u32 = pull_value(0, COLUMNS + ROWS, Pull::Down);

/// GPIOC_MODER value while idle: rows driven, columns sensing
pub const MODER_IDLE: u32 = mode_value(ROW_SHIFT, ROWS, PinMode::Output);

/// GPIOC_MODER value while scanning: columns driven, rows sensing
pub const MODER_SCAN: u32 = mode_value(0, COLUMNS, PinMode::Output);

/// EXTI lines used by the columns
pub const COLUMN_LINES: u32 = exti::line_mask(0, COLUMNS);

/// SYSCFG_EXTICR1 value routing the column lines to port C
pub const COLUMN_EXTICR1: u32 = exti::exticr1_value(COLUMNS, Port::C);

/// NVIC_ISER0/ICER0 value for the EXTI0-EXTI3 vectors
pub const COLUMN_IRQS: u32 = exti::nvic_mask(COLUMNS);
