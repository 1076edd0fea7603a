use crate::cpu::{Bus8080, Cpu8080};

impl Cpu8080 {
    pub(super) fn exec_inr<B: Bus8080>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let index = (opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, index);
        let result = self.alu_inr(value);
        self.write_reg8(bus, index, result);
        if index == 6 {
            10
        } else {
            5
        }
    }

    pub(super) fn exec_dcr<B: Bus8080>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        let index = (opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, index);
        let result = self.alu_dcr(value);
        self.write_reg8(bus, index, result);
        if index == 6 {
            10
        } else {
            5
        }
    }

    /// 16-bit increments wrap and leave every flag alone.
    pub(super) fn exec_inx(&mut self, opcode: u8) -> u32 {
        let rp = opcode >> 4;
        let value = self.read_rp(rp).wrapping_add(1);
        self.write_rp(rp, value);
        5
    }

    pub(super) fn exec_dcx(&mut self, opcode: u8) -> u32 {
        let rp = opcode >> 4;
        let value = self.read_rp(rp).wrapping_sub(1);
        self.write_rp(rp, value);
        5
    }
}
