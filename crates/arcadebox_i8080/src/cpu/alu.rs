use super::Cpu8080;

impl Cpu8080 {
    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true).
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let carry = u8::from(use_carry && self.flags.cy);
        let a = self.regs.a;
        let res = a.wrapping_add(value).wrapping_add(carry);
        self.flags.ac = (a & 0x0f) + (value & 0x0f) + carry > 0x0f;
        self.flags.cy = (a as u16) + (value as u16) + (carry as u16) > 0xff;
        self.flags.set_szp(res);
        self.regs.a = res;
    }

    /// Core 8-bit SUB/SBB operation on A.
    ///
    /// `use_carry` selects between SUB (false) and SBB (true). CY and AC
    /// report a borrow out of bit 7 and bit 3 respectively.
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        self.regs.a = self.subtract(value, use_carry);
    }

    /// Compare A with `value`, setting flags as if `A - value` was performed.
    /// A itself is not modified.
    pub(super) fn alu_cmp(&mut self, value: u8) {
        self.subtract(value, false);
    }

    fn subtract(&mut self, value: u8, use_carry: bool) -> u8 {
        let carry = u8::from(use_carry && self.flags.cy);
        let a = self.regs.a;
        let res = a.wrapping_sub(value).wrapping_sub(carry);
        self.flags.ac = (a & 0x0f) < (value & 0x0f) + carry;
        self.flags.cy = (a as u16) < (value as u16) + (carry as u16);
        self.flags.set_szp(res);
        res
    }

    /// AND always sets AC, a quirk of the 8080 that firmware may observe.
    pub(super) fn alu_and(&mut self, value: u8) {
        let res = self.regs.a & value;
        self.flags.cy = false;
        self.flags.ac = true;
        self.flags.set_szp(res);
        self.regs.a = res;
    }

    pub(super) fn alu_xor(&mut self, value: u8) {
        let res = self.regs.a ^ value;
        self.flags.cy = false;
        self.flags.ac = false;
        self.flags.set_szp(res);
        self.regs.a = res;
    }

    pub(super) fn alu_or(&mut self, value: u8) {
        let res = self.regs.a | value;
        self.flags.cy = false;
        self.flags.ac = false;
        self.flags.set_szp(res);
        self.regs.a = res;
    }

    /// Apply ALU operation `op` (bits 3–5 of 80-BF / C6-FE opcodes) to A.
    pub(super) fn alu_op(&mut self, op: u8, value: u8) {
        match op & 0x07 {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            _ => self.alu_cmp(value),
        }
    }

    pub(super) fn alu_inr(&mut self, value: u8) -> u8 {
        let r = value.wrapping_add(1);
        self.flags.ac = (value & 0x0f) == 0x0f;
        // Carry flag is not affected by INR.
        self.flags.set_szp(r);
        r
    }

    pub(super) fn alu_dcr(&mut self, value: u8) -> u8 {
        let r = value.wrapping_sub(1);
        self.flags.ac = (r & 0x0f) != 0x0f;
        // Carry flag is not affected by DCR.
        self.flags.set_szp(r);
        r
    }

    /// HL += value. Only CY is affected.
    pub(super) fn alu_dad(&mut self, value: u16) {
        let (res, carry) = self.regs.hl().overflowing_add(value);
        self.flags.cy = carry;
        self.regs.set_hl(res);
    }

    /// Decimal adjust accumulator after a BCD addition.
    ///
    /// The low nibble gets +6 when it is above 9 or AC is set. The high
    /// nibble gets +0x60 when it is above 9, CY is set, or the low nibble
    /// correction will carry into a high nibble of 9. CY is only ever set
    /// here, never cleared.
    pub(super) fn alu_daa(&mut self) {
        let mut adjust: u8 = 0;
        let mut carry = self.flags.cy;
        let low = self.regs.a & 0x0f;
        let high = self.regs.a >> 4;

        if low > 9 || self.flags.ac {
            adjust |= 0x06;
        }
        if high > 9 || self.flags.cy || (high >= 9 && low > 9) {
            adjust |= 0x60;
            carry = true;
        }

        self.alu_add(adjust, false);
        self.flags.cy = carry;
    }

    pub(super) fn rotate_a(&mut self, kind: u8) {
        let a = self.regs.a;
        match kind & 0x03 {
            // RLC
            0 => {
                self.regs.a = a.rotate_left(1);
                self.flags.cy = (a & 0x80) != 0;
            }
            // RRC
            1 => {
                self.regs.a = a.rotate_right(1);
                self.flags.cy = (a & 0x01) != 0;
            }
            // RAL
            2 => {
                self.regs.a = (a << 1) | u8::from(self.flags.cy);
                self.flags.cy = (a & 0x80) != 0;
            }
            // RAR
            _ => {
                self.regs.a = (a >> 1) | if self.flags.cy { 0x80 } else { 0 };
                self.flags.cy = (a & 0x01) != 0;
            }
        }
    }
}
