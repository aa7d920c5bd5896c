//! Cycle-counting busy-wait delay

use embedded_hal::delay::DelayNs;

use crate::HSI_HZ;

/// Busy-wait delay derived from the core clock
///
/// Never returns early. It may overshoot slightly when interrupted.
#[derive(Debug, Clone, Copy)]
pub struct CycleDelay {
    core_hz: u32,
}

impl Default for CycleDelay {
    fn default() -> Self {
        Self::new(HSI_HZ)
    }
}

impl CycleDelay {
    /// Create a delay for a core running at `core_hz`
    pub const fn new(core_hz: u32) -> Self {
        Self { core_hz }
    }

    /// Core clock this delay was calibrated for
    pub const fn core_hz(&self) -> u32 {
        self.core_hz
    }

    /// Cycles needed for `ns` nanoseconds, rounded up
    pub const fn cycles_for_ns(&self, ns: u32) -> u32 {
        let cycles = (ns as u64 * self.core_hz as u64).div_ceil(1_000_000_000);
        if cycles > u32::MAX as u64 {
            u32::MAX
        } else {
            cycles as u32
        }
    }
}

impl DelayNs for CycleDelay {
    fn delay_ns(&mut self, ns: u32) {
        cortex_m::asm::delay(self.cycles_for_ns(ns));
    }
}
