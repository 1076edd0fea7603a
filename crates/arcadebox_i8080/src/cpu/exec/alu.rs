use crate::cpu::{Bus8080, Cpu8080};

impl Cpu8080 {
    pub(super) fn exec_alu_reg_group<B: Bus8080>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!((0x80..=0xBF).contains(&opcode));

        let src_index = opcode & 0x07;
        let value = self.read_reg8(bus, src_index);
        self.alu_op((opcode >> 3) & 0x07, value);

        if src_index == 6 {
            7
        } else {
            4
        }
    }

    pub(super) fn exec_alu_imm<B: Bus8080>(&mut self, bus: &mut B, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE
        ));

        let imm = self.fetch8(bus);
        self.alu_op((opcode >> 3) & 0x07, imm);
        7
    }

    pub(super) fn exec_dad(&mut self, opcode: u8) -> u32 {
        let value = self.read_rp(opcode >> 4);
        self.alu_dad(value);
        10
    }

    pub(super) fn exec_rotate(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));
        self.rotate_a(opcode >> 3);
        4
    }

    pub(super) fn exec_daa(&mut self) -> u32 {
        self.alu_daa();
        4
    }

    pub(super) fn exec_cma(&mut self) -> u32 {
        self.regs.a = !self.regs.a;
        4
    }

    pub(super) fn exec_stc(&mut self) -> u32 {
        self.flags.cy = true;
        4
    }

    pub(super) fn exec_cmc(&mut self) -> u32 {
        self.flags.cy = !self.flags.cy;
        4
    }
}
