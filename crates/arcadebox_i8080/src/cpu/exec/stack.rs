use crate::cpu::{Bus8080, Cpu8080};
use crate::registers::Flags;

impl Cpu8080 {
    pub(super) fn exec_push<B: Bus8080>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC5 | 0xD5 | 0xE5 | 0xF5));

        let value = match (opcode >> 4) & 0x03 {
            3 => u16::from_be_bytes([self.regs.a, self.flags.to_u8()]),
            rp => self.read_rp(rp),
        };
        self.push_u16(bus, value);
        11
    }

    pub(super) fn exec_pop<B: Bus8080>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC1 | 0xD1 | 0xE1 | 0xF1));

        let value = self.pop_u16(bus);
        match (opcode >> 4) & 0x03 {
            3 => {
                let [a, psw] = value.to_be_bytes();
                self.regs.a = a;
                self.flags = Flags::from_u8(psw);
            }
            rp => self.write_rp(rp, value),
        }
        10
    }

    /// Exchange HL with the word on top of the stack. SP is unchanged.
    pub(super) fn exec_xthl<B: Bus8080>(&mut self, bus: &mut B) -> u32 {
        let sp = self.regs.sp;
        let top = self.read16(bus, sp);
        let hl = self.regs.hl();
        self.write16(bus, sp, hl);
        self.regs.set_hl(top);
        18
    }

    pub(super) fn exec_sphl(&mut self) -> u32 {
        self.regs.sp = self.regs.hl();
        5
    }
}
