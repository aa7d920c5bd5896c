//! External interrupt routing
//!
//! EXTI line `n` can be driven by pin `n` of any GPIO port; SYSCFG_EXTICRx
//! selects the port with a four-bit field per line.

/// GPIO port selector for SYSCFG_EXTICRx
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Port {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    H = 7,
}

/// Lines routed through SYSCFG_EXTICR1
pub const EXTICR1_LINES: u8 = 4;

/// Bitmask for EXTI lines `first..first + count` (IMR/RTSR/PR layout)
pub const fn line_mask(first: u8, count: u8) -> u32 {
    let mut mask = 0u32;
    let mut line = first;
    while line < first + count && line < 32 {
        mask |= 1 << line;
        line += 1;
    }
    mask
}

/// EXTICR1 value routing the first `count` lines to `port`
pub const fn exticr1_value(count: u8, port: Port) -> u32 {
    let mut value = 0u32;
    let mut line = 0;
    while line < count && line < EXTICR1_LINES {
        value |= (port as u32) << (line * 4);
        line += 1;
    }
    value
}

/// NVIC position of the EXTI0 interrupt on STM32F4
pub const EXTI0_IRQ: u8 = 6;

/// NVIC ISER0/ICER0 mask for the dedicated EXTI0..EXTI(count-1) vectors
///
/// Only EXTI0-EXTI4 have dedicated, consecutive vectors.
pub const fn nvic_mask(count: u8) -> u32 {
    let count = if count > 5 { 5 } else { count };
    line_mask(0, count) << EXTI0_IRQ
}
