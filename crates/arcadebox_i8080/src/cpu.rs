mod alu;
mod exec;
mod helpers;

use std::fmt;

use crate::registers::{Flags, Registers};

/// Bus interface for an Intel 8080-compatible CPU core.
///
/// The CPU uses this trait to access memory and IO ports without knowing
/// anything about the concrete machine. The Space Invaders board implements
/// it in `machine`; tests plug in a flat RAM bus.
pub trait Bus8080 {
    fn mem_read(&mut self, addr: u16) -> u8;
    fn mem_write(&mut self, addr: u16, value: u8);

    fn io_read(&mut self, port: u8) -> u8;
    fn io_write(&mut self, port: u8, value: u8);
}

/// An opcode the core does not execute was fetched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnimplementedOpcode {
    pub opcode: u8,
    /// Address the opcode was fetched from.
    pub addr: u16,
}

impl fmt::Display for UnimplementedOpcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unimplemented 8080 opcode 0x{:02X} at 0x{:04X}",
            self.opcode, self.addr
        )
    }
}

impl std::error::Error for UnimplementedOpcode {}

/// Intel 8080 CPU core.
///
/// `step` executes exactly one instruction: opcode fetch, operand bytes,
/// side effects, flag updates and the program counter advance all happen
/// before it returns. Register state is public so that debuggers and tests
/// can set up and inspect the machine directly.
#[derive(Clone, Debug, Default)]
pub struct Cpu8080 {
    pub regs: Registers,
    pub flags: Flags,
    pub interrupts_enabled: bool,
    /// Set by HLT; cleared when an interrupt is accepted.
    pub halted: bool,
    faults: Vec<UnimplementedOpcode>,
}

impl Cpu8080 {
    /// Create a new CPU instance in reset state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all registers to their power-on values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Execute a single instruction and return the number of cycles consumed.
    ///
    /// A halted CPU does not fetch; it idles for 4 cycles per call until an
    /// interrupt wakes it up.
    pub fn step<B: Bus8080>(&mut self, bus: &mut B) -> u32 {
        if self.halted {
            return 4;
        }

        let opcode = self.fetch8(bus);

        // MOV r1,r2 (40-7F, excluding HLT 76) is decoded from its bit
        // pattern rather than dispatched opcode by opcode.
        if opcode & 0xC0 == 0x40 && opcode != 0x76 {
            return self.exec_mov(bus, opcode);
        }

        self.exec_opcode(bus, opcode)
    }

    /// Execute `count` instructions and return the total cycles consumed.
    pub fn run<B: Bus8080>(&mut self, bus: &mut B, count: usize) -> u64 {
        (0..count).map(|_| u64::from(self.step(bus))).sum()
    }

    /// Handle a maskable interrupt.
    ///
    /// Behaves like `RST vector`: with interrupts enabled, the current PC is
    /// pushed, PC jumps to `8 * vector` and the interrupt latch is cleared.
    /// With interrupts disabled nothing changes. Returns whether the
    /// interrupt was taken.
    pub fn interrupt<B: Bus8080>(&mut self, bus: &mut B, vector: u8) -> bool {
        if !self.interrupts_enabled {
            return false;
        }
        self.interrupts_enabled = false;
        self.halted = false;

        let addr = (u16::from(vector) & 0x07) << 3;
        log::debug!(
            "8080 interrupt: RST {} from pc=0x{:04X} sp=0x{:04X}",
            vector & 0x07,
            self.regs.pc,
            self.regs.sp
        );
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = addr;
        true
    }

    /// Drain every unimplemented-opcode fault recorded since the last call,
    /// oldest first.
    pub fn take_faults(&mut self) -> Vec<UnimplementedOpcode> {
        std::mem::take(&mut self.faults)
    }

    fn unimplemented(&mut self, opcode: u8) -> u32 {
        // PC already moved past the opcode, which is the one-byte advance we
        // want; the real instruction length is unknown.
        let fault = UnimplementedOpcode {
            opcode,
            addr: self.regs.pc.wrapping_sub(1),
        };
        log::error!(
            "{fault} (SP=0x{sp:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
            sp = self.regs.sp,
            bc = self.regs.bc(),
            de = self.regs.de(),
            hl = self.regs.hl(),
        );
        self.faults.push(fault);
        4
    }
}

#[cfg(test)]
mod tests;
