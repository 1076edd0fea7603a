use crate::cpu::{Bus8080, Cpu8080};

impl Cpu8080 {
    /// MOV r1,r2 for opcodes 0x40–0x7F except HLT.
    ///
    /// Destination is bits 3–5, source bits 0–2, both in `read_reg8` order.
    pub(in crate::cpu) fn exec_mov<B: Bus8080>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(opcode & 0xC0 == 0x40 && opcode != 0x76);

        let dst_index = (opcode >> 3) & 0x07;
        let src_index = opcode & 0x07;

        let value = self.read_reg8(bus, src_index);
        self.write_reg8(bus, dst_index, value);

        if dst_index == 6 || src_index == 6 {
            7
        } else {
            5
        }
    }

    pub(super) fn exec_mvi<B: Bus8080>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let index = (opcode >> 3) & 0x07;
        let value = self.fetch8(bus);
        self.write_reg8(bus, index, value);
        if index == 6 {
            10
        } else {
            7
        }
    }

    pub(super) fn exec_lxi<B: Bus8080>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let value = self.fetch16(bus);
        self.write_rp(opcode >> 4, value);
        10
    }

    pub(super) fn exec_stax<B: Bus8080>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x02 | 0x12));
        let addr = self.read_rp(opcode >> 4);
        bus.mem_write(addr, self.regs.a);
        7
    }

    pub(super) fn exec_ldax<B: Bus8080>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x0A | 0x1A));
        let addr = self.read_rp(opcode >> 4);
        self.regs.a = bus.mem_read(addr);
        7
    }

    pub(super) fn exec_sta<B: Bus8080>(&mut self, bus: &mut B) -> u32 {
        let addr = self.fetch16(bus);
        bus.mem_write(addr, self.regs.a);
        13
    }

    pub(super) fn exec_lda<B: Bus8080>(&mut self, bus: &mut B) -> u32 {
        let addr = self.fetch16(bus);
        self.regs.a = bus.mem_read(addr);
        13
    }

    /// Store L at addr and H at addr+1.
    pub(super) fn exec_shld<B: Bus8080>(&mut self, bus: &mut B) -> u32 {
        let addr = self.fetch16(bus);
        let hl = self.regs.hl();
        self.write16(bus, addr, hl);
        16
    }

    pub(super) fn exec_lhld<B: Bus8080>(&mut self, bus: &mut B) -> u32 {
        let addr = self.fetch16(bus);
        let value = self.read16(bus, addr);
        self.regs.set_hl(value);
        16
    }

    pub(super) fn exec_xchg(&mut self) -> u32 {
        std::mem::swap(&mut self.regs.d, &mut self.regs.h);
        std::mem::swap(&mut self.regs.e, &mut self.regs.l);
        4
    }
}
