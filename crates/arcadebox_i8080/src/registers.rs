/// Programmer-visible registers of the Intel 8080.
///
/// `A` is the accumulator. `B`/`C`, `D`/`E` and `H`/`L` pair up into the
/// 16-bit register pairs used by LXI, DAD, INX/DCX, PUSH/POP and the memory
/// addressing forms, with the first register of each pair as the high byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }
}

/// Condition flags of the 8080.
///
/// They are kept unpacked and only turned into the processor status word
/// when `PUSH PSW` / `POP PSW` move them through the stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    pub z: bool,  // zero
    pub s: bool,  // sign
    pub p: bool,  // parity
    pub cy: bool, // carry
    pub ac: bool, // auxiliary carry
}

impl Flags {
    const SIGN: u8 = 0x80;
    const ZERO: u8 = 0x40;
    const AUX_CARRY: u8 = 0x10;
    const PARITY: u8 = 0x04;
    const ALWAYS_ONE: u8 = 0x02;
    const CARRY: u8 = 0x01;

    /// Pack into the status byte layout `S Z 0 AC 0 P 1 CY`.
    pub fn to_u8(self) -> u8 {
        let mut f = Self::ALWAYS_ONE;
        if self.s {
            f |= Self::SIGN;
        }
        if self.z {
            f |= Self::ZERO;
        }
        if self.ac {
            f |= Self::AUX_CARRY;
        }
        if self.p {
            f |= Self::PARITY;
        }
        if self.cy {
            f |= Self::CARRY;
        }
        f
    }

    /// Unpack a status byte. Bits 1, 3 and 5 carry no state and are dropped.
    pub fn from_u8(v: u8) -> Self {
        Self {
            s: (v & Self::SIGN) != 0,
            z: (v & Self::ZERO) != 0,
            ac: (v & Self::AUX_CARRY) != 0,
            p: (v & Self::PARITY) != 0,
            cy: (v & Self::CARRY) != 0,
        }
    }

    /// Update Z, S and P from an 8-bit result.
    #[inline]
    pub fn set_szp(&mut self, value: u8) {
        self.z = value == 0;
        self.s = (value & 0x80) != 0;
        self.p = value.count_ones() % 2 == 0;
    }
}
