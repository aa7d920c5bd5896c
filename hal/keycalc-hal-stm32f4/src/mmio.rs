//! Volatile register access

use keycalc_hal::{Register, RegisterBank};

/// Register bank backed by the memory-mapped peripherals
///
/// Zero-sized; every instance aliases the same hardware. Each driver
/// should own one instance and touch only the bits it is responsible for.
#[derive(Debug)]
pub struct Mmio {
    _private: (),
}

impl Mmio {
    /// Create a handle to the peripheral registers
    ///
    /// # Safety
    ///
    /// The caller must make sure that concurrent users of the returned bank
    /// (for example a driver in the foreground and another in an interrupt
    /// handler) never read-modify-write the same bits at the same time.
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl RegisterBank for Mmio {
    fn read(&self, reg: Register) -> u32 {
        // SAFETY: catalog addresses are valid, aligned STM32F4 registers
        unsafe { core::ptr::read_volatile(reg.address() as *const u32) }
    }

    fn write(&mut self, reg: Register, value: u32) {
        // SAFETY: catalog addresses are valid, aligned STM32F4 registers
        unsafe { core::ptr::write_volatile(reg.address() as *mut u32, value) }
    }
}
