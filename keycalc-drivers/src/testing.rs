//! Host-side fakes for driver tests

use embedded_hal::delay::DelayNs;
use keycalc_hal::{Register, RegisterBank};

/// LCD enable line on GPIOC_ODR
const E: u32 = 1 << 10;
/// LCD register select line on GPIOC_ODR
const RS: u32 = 1 << 8;

/// Byte latched by the LCD on a falling edge of E
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latched {
    Instruction(u8),
    Data(u8),
}

/// Register bank backed by a plain table
///
/// Records every write in order, and decodes LCD bus transfers by watching
/// GPIOC_ODR for E going low. IDR reads return whatever the test placed
/// there with [`FakeRegisters::set_idr`].
pub struct FakeRegisters {
    values: [u32; Register::COUNT],
    pub writes: Vec<(Register, u32)>,
    pub latched: Vec<Latched>,
}

impl FakeRegisters {
    pub fn new() -> Self {
        Self {
            values: [0; Register::COUNT],
            writes: Vec::new(),
            latched: Vec::new(),
        }
    }

    pub fn get(&self, reg: Register) -> u32 {
        self.values[reg.index()]
    }

    /// Preload a register without recording a write
    pub fn preset(&mut self, reg: Register, value: u32) {
        self.values[reg.index()] = value;
    }

    pub fn set_idr(&mut self, value: u32) {
        self.preset(Register::GpiocIdr, value);
    }

    /// Registers written, in order, skipping repeats of the same register
    pub fn write_sequence(&self) -> Vec<Register> {
        let mut seq: Vec<Register> = Vec::new();
        for (reg, _) in &self.writes {
            if seq.last() != Some(reg) {
                seq.push(*reg);
            }
        }
        seq
    }

    pub fn writes_to(&self, reg: Register) -> Vec<u32> {
        self.writes
            .iter()
            .filter(|(r, _)| *r == reg)
            .map(|(_, v)| *v)
            .collect()
    }

    pub fn clear_log(&mut self) {
        self.writes.clear();
        self.latched.clear();
    }
}

impl RegisterBank for FakeRegisters {
    fn read(&self, reg: Register) -> u32 {
        self.values[reg.index()]
    }

    fn write(&mut self, reg: Register, value: u32) {
        let previous = self.values[reg.index()];
        self.values[reg.index()] = value;
        self.writes.push((reg, value));

        if reg == Register::GpiocOdr && previous & E != 0 && value & E == 0 {
            let byte = ((self.values[Register::GpioaOdr.index()] >> 4) & 0xFF) as u8;
            self.latched.push(if value & RS != 0 {
                Latched::Data(byte)
            } else {
                Latched::Instruction(byte)
            });
        }
    }
}

/// Delay that records each request instead of waiting
#[derive(Default)]
pub struct FakeDelay {
    pub calls_ns: Vec<u32>,
}

impl FakeDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_us(&self) -> u64 {
        self.calls_ns.iter().map(|&ns| ns as u64).sum::<u64>() / 1_000
    }

    pub fn calls_us(&self) -> Vec<u32> {
        self.calls_ns.iter().map(|ns| ns / 1_000).collect()
    }
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls_ns.push(ns);
    }
}
