use crate::cpu::{Bus8080, Cpu8080};

impl Cpu8080 {
    pub(super) fn exec_in<B: Bus8080>(&mut self, bus: &mut B) -> u32 {
        let port = self.fetch8(bus);
        self.regs.a = bus.io_read(port);
        10
    }

    pub(super) fn exec_out<B: Bus8080>(&mut self, bus: &mut B) -> u32 {
        let port = self.fetch8(bus);
        bus.io_write(port, self.regs.a);
        10
    }

    pub(super) fn exec_ei(&mut self) -> u32 {
        self.interrupts_enabled = true;
        4
    }

    pub(super) fn exec_di(&mut self) -> u32 {
        self.interrupts_enabled = false;
        4
    }

    /// HLT stops fetching until the next accepted interrupt.
    pub(super) fn exec_hlt(&mut self) -> u32 {
        log::trace!("8080 halted at 0x{:04X}", self.regs.pc.wrapping_sub(1));
        self.halted = true;
        7
    }
}
