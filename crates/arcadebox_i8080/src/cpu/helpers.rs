use super::{Bus8080, Cpu8080};

impl Cpu8080 {
    /// Helper to read an 8-bit register or M by index.
    ///
    /// The encoding matches the 8080 opcode tables:
    /// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=M (memory at HL), 7=A.
    #[inline]
    pub(super) fn read_reg8<B: Bus8080>(&mut self, bus: &mut B, index: u8) -> u8 {
        match index & 0x07 {
            0 => self.regs.b,
            1 => self.regs.c,
            2 => self.regs.d,
            3 => self.regs.e,
            4 => self.regs.h,
            5 => self.regs.l,
            6 => bus.mem_read(self.regs.hl()),
            _ => self.regs.a,
        }
    }

    /// Helper to write an 8-bit register or M by index.
    ///
    /// The encoding matches `read_reg8`.
    #[inline]
    pub(super) fn write_reg8<B: Bus8080>(&mut self, bus: &mut B, index: u8, value: u8) {
        match index & 0x07 {
            0 => self.regs.b = value,
            1 => self.regs.c = value,
            2 => self.regs.d = value,
            3 => self.regs.e = value,
            4 => self.regs.h = value,
            5 => self.regs.l = value,
            6 => bus.mem_write(self.regs.hl(), value),
            _ => self.regs.a = value,
        }
    }

    /// Register pair selected by bits 4–5 of an opcode: BC, DE, HL, SP.
    #[inline]
    pub(super) fn read_rp(&self, rp: u8) -> u16 {
        match rp & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            _ => self.regs.sp,
        }
    }

    #[inline]
    pub(super) fn write_rp(&mut self, rp: u8, value: u16) {
        match rp & 0x03 {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.set_hl(value),
            _ => self.regs.sp = value,
        }
    }

    #[inline]
    pub(super) fn fetch8<B: Bus8080>(&mut self, bus: &mut B) -> u8 {
        let value = bus.mem_read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    #[inline]
    pub(super) fn fetch16<B: Bus8080>(&mut self, bus: &mut B) -> u16 {
        let lo = self.fetch8(bus) as u16;
        let hi = self.fetch8(bus) as u16;
        (hi << 8) | lo
    }

    #[inline]
    pub(super) fn read16<B: Bus8080>(&mut self, bus: &mut B, addr: u16) -> u16 {
        let lo = bus.mem_read(addr) as u16;
        let hi = bus.mem_read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    #[inline]
    pub(super) fn write16<B: Bus8080>(&mut self, bus: &mut B, addr: u16, value: u16) {
        bus.mem_write(addr, value as u8);
        bus.mem_write(addr.wrapping_add(1), (value >> 8) as u8);
    }

    /// Stack grows downward: SP drops by two, then memory[SP] = low and
    /// memory[SP+1] = high.
    #[inline]
    pub(super) fn push_u16<B: Bus8080>(&mut self, bus: &mut B, value: u16) {
        self.regs.sp = self.regs.sp.wrapping_sub(2);
        self.write16(bus, self.regs.sp, value);
    }

    #[inline]
    pub(super) fn pop_u16<B: Bus8080>(&mut self, bus: &mut B) -> u16 {
        let value = self.read16(bus, self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(2);
        value
    }

    /// Condition selected by bits 3–5 of a conditional jump/call/return.
    #[inline]
    pub(super) fn condition(&self, cc: u8) -> bool {
        match cc & 0x07 {
            0 => !self.flags.z,  // NZ
            1 => self.flags.z,   // Z
            2 => !self.flags.cy, // NC
            3 => self.flags.cy,  // C
            4 => !self.flags.p,  // PO
            5 => self.flags.p,   // PE
            6 => !self.flags.s,  // P
            _ => self.flags.s,   // M
        }
    }
}
