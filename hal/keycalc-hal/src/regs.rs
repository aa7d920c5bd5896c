//! Register catalog and access trait
//!
//! The board wiring is fixed, so the set of registers the drivers touch is
//! fixed too. Each one is named by a [`Register`] variant; the numeric
//! address only matters to the MMIO implementation.

/// RCC peripheral base address
pub const RCC_BASE: u32 = 0x4002_3800;
/// GPIOA peripheral base address
pub const GPIOA_BASE: u32 = 0x4002_0000;
/// GPIOC peripheral base address
pub const GPIOC_BASE: u32 = 0x4002_0800;
/// SYSCFG peripheral base address
pub const SYSCFG_BASE: u32 = 0x4001_3800;
/// EXTI peripheral base address
pub const EXTI_BASE: u32 = 0x4001_3C00;
/// NVIC register block base address
pub const NVIC_BASE: u32 = 0xE000_E100;

/// RCC_AHB1ENR: GPIOA clock enable
pub const RCC_AHB1ENR_GPIOAEN: u32 = 1 << 0;
/// RCC_AHB1ENR: GPIOC clock enable
pub const RCC_AHB1ENR_GPIOCEN: u32 = 1 << 2;
/// RCC_APB2ENR: SYSCFG clock enable
pub const RCC_APB2ENR_SYSCFGEN: u32 = 1 << 14;

/// Hardware registers used by the keypad and LCD drivers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// AHB1 peripheral clock enable (GPIO ports)
    RccAhb1Enr = 0,
    /// APB2 peripheral clock enable (SYSCFG)
    RccApb2Enr = 1,
    /// GPIOA mode register (LCD data bus)
    GpioaModer = 2,
    /// GPIOA output data register (LCD data bus)
    GpioaOdr = 3,
    /// GPIOC mode register (keypad port, LCD control lines)
    GpiocModer = 4,
    /// GPIOC pull-up/pull-down register
    GpiocPupdr = 5,
    /// GPIOC input data register
    GpiocIdr = 6,
    /// GPIOC output data register
    GpiocOdr = 7,
    /// SYSCFG external interrupt configuration register 1 (EXTI0-3)
    SyscfgExticr1 = 8,
    /// EXTI interrupt mask register
    ExtiImr = 9,
    /// EXTI rising trigger selection register
    ExtiRtsr = 10,
    /// EXTI pending register (write 1 to clear)
    ExtiPr = 11,
    /// NVIC interrupt set-enable register 0
    NvicIser0 = 12,
    /// NVIC interrupt clear-enable register 0
    NvicIcer0 = 13,
}

impl Register {
    /// Number of catalogued registers
    pub const COUNT: usize = 14;

    /// Every catalogued register, in index order
    pub const ALL: [Register; Self::COUNT] = [
        Register::RccAhb1Enr,
        Register::RccApb2Enr,
        Register::GpioaModer,
        Register::GpioaOdr,
        Register::GpiocModer,
        Register::GpiocPupdr,
        Register::GpiocIdr,
        Register::GpiocOdr,
        Register::SyscfgExticr1,
        Register::ExtiImr,
        Register::ExtiRtsr,
        Register::ExtiPr,
        Register::NvicIser0,
        Register::NvicIcer0,
    ];

    /// Absolute bus address of the register
    pub const fn address(self) -> u32 {
        match self {
            Register::RccAhb1Enr => RCC_BASE + 0x30,
            Register::RccApb2Enr => RCC_BASE + 0x44,
            Register::GpioaModer => GPIOA_BASE,
            Register::GpioaOdr => GPIOA_BASE + 0x14,
            Register::GpiocModer => GPIOC_BASE,
            Register::GpiocPupdr => GPIOC_BASE + 0x0C,
            Register::GpiocIdr => GPIOC_BASE + 0x10,
            Register::GpiocOdr => GPIOC_BASE + 0x14,
            Register::SyscfgExticr1 => SYSCFG_BASE + 0x08,
            Register::ExtiImr => EXTI_BASE,
            Register::ExtiRtsr => EXTI_BASE + 0x08,
            Register::ExtiPr => EXTI_BASE + 0x14,
            Register::NvicIser0 => NVIC_BASE,
            Register::NvicIcer0 => NVIC_BASE + 0x80,
        }
    }

    /// Dense index of the register (0..COUNT), for table-backed banks
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Read/modify/write access to the register catalog
///
/// Implementations decide what a read or write means: volatile MMIO on the
/// chip, or plain memory in a test fake. Every write is assumed to take
/// effect before the next access returns.
pub trait RegisterBank {
    /// Read the current value of a register
    fn read(&self, reg: Register) -> u32;

    /// Write a full value to a register
    fn write(&mut self, reg: Register, value: u32);

    /// Read, transform and write back a register
    fn modify<F>(&mut self, reg: Register, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        let value = self.read(reg);
        self.write(reg, f(value));
    }

    /// Set the bits in `mask`, leaving the others untouched
    fn set_bits(&mut self, reg: Register, mask: u32) {
        self.modify(reg, |v| v | mask);
    }

    /// Clear the bits in `mask`, leaving the others untouched
    fn clear_bits(&mut self, reg: Register, mask: u32) {
        self.modify(reg, |v| v & !mask);
    }
}

impl<T: RegisterBank + ?Sized> RegisterBank for &mut T {
    fn read(&self, reg: Register) -> u32 {
        (**self).read(reg)
    }

    fn write(&mut self, reg: Register, value: u32) {
        (**self).write(reg, value);
    }
}
