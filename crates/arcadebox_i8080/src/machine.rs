use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use typed_builder::TypedBuilder;

use crate::cpu::{Bus8080, Cpu8080, UnimplementedOpcode};
use crate::disasm;
use crate::io::{DipConfig, Input, IoBoard, IoLatches};
use crate::loader::{self, RomSegment};
use crate::memory::AddressSpace;
use crate::registers::{Flags, Registers};

/// 8080 clock and frame timing for Space Invaders.
pub const CPU_CLOCK_HZ: u32 = 2_000_000;
pub const FRAME_RATE_HZ: u32 = 60;
pub const CYCLES_PER_FRAME: u32 = CPU_CLOCK_HZ / FRAME_RATE_HZ;

/// Interrupt raised when the beam reaches the middle of the screen.
pub const MID_FRAME_VECTOR: u8 = 1;
/// Interrupt raised at vertical blank.
pub const END_FRAME_VECTOR: u8 = 2;

/// Board configuration: DIP switches and frame timing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TypedBuilder)]
pub struct MachineConfig {
    #[builder(default)]
    pub dip: DipConfig,
    #[builder(default = CPU_CLOCK_HZ)]
    pub cpu_clock_hz: u32,
    #[builder(default = FRAME_RATE_HZ)]
    pub frame_rate_hz: u32,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl MachineConfig {
    pub fn cycles_per_frame(&self) -> u32 {
        self.cpu_clock_hz / self.frame_rate_hz.max(1)
    }
}

/// Copy of the processor and IO latch state at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CpuState {
    pub regs: Registers,
    pub flags: Flags,
    pub interrupts_enabled: bool,
    pub halted: bool,
    pub io: IoLatches,
}

impl fmt::Display for CpuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |set: bool, c: char| if set { c } else { '.' };
        write!(
            f,
            "PC: {:04X}  SP: {:04X}  A: {:02X}  BC: {:04X}  DE: {:04X}  HL: {:04X}  Flags: {}{}{}{}{}{}",
            self.regs.pc,
            self.regs.sp,
            self.regs.a,
            self.regs.bc(),
            self.regs.de(),
            self.regs.hl(),
            flag(self.flags.z, 'Z'),
            flag(self.flags.s, 'S'),
            flag(self.flags.p, 'P'),
            flag(self.flags.cy, 'C'),
            flag(self.flags.ac, 'A'),
            if self.interrupts_enabled { " EI" } else { "" },
        )?;
        if self.halted {
            write!(f, " HALT")?;
        }
        Ok(())
    }
}

/// Memory and IO as seen from the CPU pins.
struct BoardBus {
    memory: AddressSpace,
    io: IoBoard,
}

impl Bus8080 for BoardBus {
    fn mem_read(&mut self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    fn mem_write(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    fn io_read(&mut self, port: u8) -> u8 {
        self.io.read_port(port)
    }

    fn io_write(&mut self, port: u8, value: u8) {
        self.io.write_port(port, value);
    }
}

/// The Space Invaders board: 8080 core, address space and IO.
///
/// The machine keeps the installed firmware so that `reset` can restore a
/// clean power-on state.
pub struct Machine {
    cpu: Cpu8080,
    bus: BoardBus,
    config: MachineConfig,
    firmware: Vec<RomSegment>,
    frames: u64,
    total_cycles: u64,
    instructions: u64,
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

impl Machine {
    /// Construct a new machine instance in a powered-up but reset state.
    pub fn new() -> Self {
        Self::with_config(MachineConfig::default())
    }

    pub fn with_config(config: MachineConfig) -> Self {
        Self::from_parts(config, AddressSpace::new())
    }

    /// Build a machine around an existing address space, e.g. one with
    /// diagnostics already set up or a test program already in place.
    pub fn from_parts(config: MachineConfig, memory: AddressSpace) -> Self {
        Self {
            cpu: Cpu8080::new(),
            bus: BoardBus {
                memory,
                io: IoBoard::new(config.dip),
            },
            config,
            firmware: Vec::new(),
            frames: 0,
            total_cycles: 0,
            instructions: 0,
        }
    }

    /// Load the four-chip ROM set from `dir`.
    ///
    /// Nothing is written unless every chip was read and fits its slot.
    pub fn load_rom_set(&mut self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();
        let segments = loader::read_rom_set(dir)
            .with_context(|| format!("failed to load ROM set from {}", dir.display()))?;
        self.install(segments)?;
        log::info!("loaded Space Invaders ROM set from {}", dir.display());
        Ok(())
    }

    /// Load a combined firmware image at 0x0000.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        self.install(vec![RomSegment {
            name: "rom".to_string(),
            offset: 0x0000,
            data: rom.to_vec(),
        }])?;
        log::info!("loaded {}-byte ROM image", rom.len());
        Ok(())
    }

    /// Replace the installed firmware. The old image is wiped first so that
    /// a shorter image leaves no stale bytes behind.
    fn install(&mut self, segments: Vec<RomSegment>) -> Result<()> {
        if let Err(err) = loader::check_segments(&segments) {
            log::warn!("rejected firmware: {err:#}");
            return Err(err);
        }
        self.bus.memory.clear_rom();
        loader::install_segments(&mut self.bus.memory, &segments)?;
        self.firmware = segments;
        // Execution starts at 0x0000 on Space Invaders.
        self.cpu.regs.pc = 0x0000;
        Ok(())
    }

    /// Reset CPU, memory and IO, then reinstall the firmware.
    pub fn reset(&mut self) -> Result<()> {
        self.cpu.reset();
        self.bus.memory.clear();
        self.bus.io = IoBoard::new(self.config.dip);
        loader::install_segments(&mut self.bus.memory, &self.firmware)
            .context("failed to reinstall firmware on reset")?;
        self.frames = 0;
        self.total_cycles = 0;
        self.instructions = 0;
        log::info!("machine reset");
        Ok(())
    }

    /// Execute one instruction and return its cycle count.
    pub fn step(&mut self) -> u32 {
        if log::log_enabled!(log::Level::Trace) {
            let (line, _) = self.disassemble_at(self.cpu.regs.pc);
            log::trace!("{line}");
        }
        let cycles = self.cpu.step(&mut self.bus);
        self.total_cycles += u64::from(cycles);
        self.instructions += 1;
        cycles
    }

    /// Execute `count` instructions and return the cycles consumed.
    pub fn execute(&mut self, count: usize) -> u64 {
        (0..count).map(|_| u64::from(self.step())).sum()
    }

    /// Execute instructions until at least `budget` cycles have elapsed.
    ///
    /// The last instruction may overshoot the budget; the actual number of
    /// cycles is returned.
    pub fn run_cycles(&mut self, budget: u64) -> u64 {
        let mut cycles = 0u64;
        while cycles < budget {
            cycles += u64::from(self.step());
        }
        cycles
    }

    /// Step the machine for one video frame worth of time.
    ///
    /// Half a frame of cycles, the mid-screen interrupt (RST 1), the second
    /// half, then the vertical blank interrupt (RST 2).
    pub fn step_frame(&mut self) -> u64 {
        let frame = u64::from(self.config.cycles_per_frame());
        let half_frame = frame / 2;

        let mut cycles = self.run_cycles(half_frame);
        self.interrupt_mid_frame();

        cycles += self.run_cycles(frame.saturating_sub(cycles));
        self.interrupt_end_frame();

        self.frames += 1;
        cycles
    }

    /// Deliver `RST vector` if the CPU has interrupts enabled.
    pub fn request_interrupt(&mut self, vector: u8) -> bool {
        self.cpu.interrupt(&mut self.bus, vector)
    }

    pub fn interrupt_mid_frame(&mut self) -> bool {
        self.request_interrupt(MID_FRAME_VECTOR)
    }

    pub fn interrupt_end_frame(&mut self) -> bool {
        self.request_interrupt(END_FRAME_VECTOR)
    }

    pub fn cpu_state(&self) -> CpuState {
        CpuState {
            regs: self.cpu.regs,
            flags: self.cpu.flags,
            interrupts_enabled: self.cpu.interrupts_enabled,
            halted: self.cpu.halted,
            io: self.bus.io.latches(),
        }
    }

    /// Drain the unimplemented-opcode faults recorded since the last call.
    pub fn take_faults(&mut self) -> Vec<UnimplementedOpcode> {
        self.cpu.take_faults()
    }

    /// The raw video RAM window: 0x1c00 bytes starting at 0x2400, one bit per
    /// pixel in hardware order.
    pub fn video_ram(&self) -> &[u8] {
        self.bus.memory.video_ram()
    }

    pub fn video_ram_copy(&self) -> Vec<u8> {
        self.bus.memory.video_ram_copy()
    }

    pub fn set_input(&mut self, input: Input, pressed: bool) {
        self.bus.io.set_input(input, pressed);
    }

    /// Current values of the sound output ports (OUT 3 and OUT 5).
    pub fn outputs(&self) -> (u8, u8) {
        self.bus.io.outputs()
    }

    pub fn io(&self) -> &IoBoard {
        &self.bus.io
    }

    pub fn memory(&self) -> &AddressSpace {
        &self.bus.memory
    }

    pub fn memory_mut(&mut self) -> &mut AddressSpace {
        &mut self.bus.memory
    }

    pub fn disassemble_at(&self, pc: u16) -> (String, usize) {
        disasm::disassemble(self.bus.memory.as_slice(), pc)
    }

    /// Frames completed by `step_frame` since the last reset.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    /// Calls to `step` since the last reset. Idle steps of a halted CPU
    /// count too.
    pub fn instructions(&self) -> u64 {
        self.instructions
    }
}
