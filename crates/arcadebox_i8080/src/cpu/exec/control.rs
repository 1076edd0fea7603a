use crate::cpu::{Bus8080, Cpu8080};

impl Cpu8080 {
    pub(super) fn exec_jmp<B: Bus8080>(&mut self, bus: &mut B) -> u32 {
        let addr = self.fetch16(bus);
        self.regs.pc = addr;
        10
    }

    /// The address operand is always consumed, so a jump that is not taken
    /// still advances PC by three.
    pub(super) fn exec_jmp_cc<B: Bus8080>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let addr = self.fetch16(bus);
        if self.condition(opcode >> 3) {
            self.regs.pc = addr;
        }
        10
    }

    pub(super) fn exec_pchl(&mut self) -> u32 {
        self.regs.pc = self.regs.hl();
        5
    }

    pub(super) fn exec_call<B: Bus8080>(&mut self, bus: &mut B) -> u32 {
        let addr = self.fetch16(bus);
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = addr;
        17
    }

    pub(super) fn exec_call_cc<B: Bus8080>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let addr = self.fetch16(bus);
        if self.condition(opcode >> 3) {
            let ret = self.regs.pc;
            self.push_u16(bus, ret);
            self.regs.pc = addr;
            17
        } else {
            11
        }
    }

    pub(super) fn exec_ret<B: Bus8080>(&mut self, bus: &mut B) -> u32 {
        self.regs.pc = self.pop_u16(bus);
        10
    }

    pub(super) fn exec_ret_cc<B: Bus8080>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        if self.condition(opcode >> 3) {
            self.regs.pc = self.pop_u16(bus);
            11
        } else {
            5
        }
    }

    /// RST n: call to `8 * n`. PC already points past the one-byte opcode,
    /// which is the return address.
    pub(super) fn exec_rst<B: Bus8080>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF
        ));

        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = (opcode & 0x38) as u16;
        11
    }
}
