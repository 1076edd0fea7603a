use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use arcadebox_i8080::memory::{AddressSpace, ROM_END};
use arcadebox_i8080::{disasm, loader, Machine, MachineConfig, UnimplementedOpcode};
use typed_builder::TypedBuilder;

/// Where the firmware comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RomSource {
    /// Directory holding `invaders.h`, `invaders.g`, `invaders.f`, `invaders.e`.
    Dir(PathBuf),
    /// A single combined image loaded at 0x0000.
    Image(PathBuf),
}

#[derive(Clone, Debug, TypedBuilder)]
pub struct RunConfig {
    pub rom: RomSource,
    #[builder(default = 60)]
    pub frames: u64,
    #[builder(default)]
    pub machine: MachineConfig,
    /// Write the video RAM window to this file after the last frame.
    #[builder(default)]
    pub dump_vram: Option<PathBuf>,
    /// Pace frames to the configured frame rate instead of running flat out.
    #[builder(default = false)]
    pub realtime: bool,
}

/// Summary of a headless run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    pub frames: u64,
    pub cycles: u64,
    pub faults: Vec<UnimplementedOpcode>,
    /// Number of lit pixels in the video window after the last frame.
    pub lit_pixels: u32,
}

/// Build a machine and install firmware from `rom`.
pub fn load_machine(rom: &RomSource, config: MachineConfig) -> Result<Machine> {
    let mut machine = Machine::with_config(config);
    match rom {
        RomSource::Dir(dir) => machine.load_rom_set(dir)?,
        RomSource::Image(path) => {
            let data = fs::read(path)
                .with_context(|| format!("failed to read ROM image {}", path.display()))?;
            machine
                .load_rom(&data)
                .with_context(|| format!("failed to load ROM image {}", path.display()))?;
        }
    }
    Ok(machine)
}

/// Run the machine for a number of frames without any presentation layer.
pub fn run(config: RunConfig) -> Result<RunReport> {
    let mut machine = load_machine(&config.rom, config.machine)?;
    let frame_time =
        Duration::from_secs_f64(1.0 / f64::from(config.machine.frame_rate_hz.max(1)));

    let mut report = RunReport::default();
    for _ in 0..config.frames {
        let started = Instant::now();
        report.cycles += machine.step_frame();
        report.frames += 1;

        report.faults.extend(machine.take_faults());

        if config.realtime {
            if let Some(rest) = frame_time.checked_sub(started.elapsed()) {
                std::thread::sleep(rest);
            }
        }
    }

    report.lit_pixels = machine.video_ram().iter().map(|b| b.count_ones()).sum();
    log::info!(
        "ran {} frames ({} cycles, {} faults, {} lit pixels)",
        report.frames,
        report.cycles,
        report.faults.len(),
        report.lit_pixels
    );

    if let Some(path) = &config.dump_vram {
        fs::write(path, machine.video_ram())
            .with_context(|| format!("failed to write VRAM dump to {}", path.display()))?;
        log::info!("wrote VRAM dump to {}", path.display());
    }

    Ok(report)
}

const DEBUGGER_USAGE: &str = "(Enter, <count>, f, d <start> <end>, w <addr>, q)";

/// Interactive single-step debugger.
///
/// Before each prompt the CPU state and the next instruction are printed.
/// Commands, one per line:
///
/// - empty line: execute one instruction
/// - a number `n`: execute `n` instructions
/// - `f`: run one full frame
/// - `d <start> <end>`: hex dump memory, addresses in hex
/// - `w <addr>`: watch an address (hex); hits are printed as they happen
/// - `q`: quit
///
/// Returns the number of instructions executed.
pub fn step_debugger(
    machine: &mut Machine,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<u64> {
    let started_at = machine.instructions();
    let mut lines = input.lines();

    loop {
        let state = machine.cpu_state();
        let (next, _) = machine.disassemble_at(state.regs.pc);
        writeln!(output, "{state}")?;
        writeln!(output, "  {next}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let mut words = line.split_whitespace();

        match (words.next(), words.next(), words.next()) {
            (Some("q"), None, None) => break,
            (None, _, _) => {
                machine.step();
            }
            (Some("f"), None, None) => {
                machine.step_frame();
            }
            (Some("d"), Some(start), Some(end)) => match (parse_addr(start), parse_addr(end)) {
                (Some(start), Some(end)) => {
                    write!(output, "{}", machine.memory().dump_region(start, end))?;
                }
                _ => writeln!(output, "bad address range '{start} {end}'")?,
            },
            (Some("w"), Some(addr), None) => match parse_addr(addr) {
                Some(addr) => machine.memory_mut().diagnostics_mut().add_watchpoint(addr),
                None => writeln!(output, "bad address '{addr}'")?,
            },
            (Some(n), None, None) => match n.parse::<usize>() {
                Ok(count) => {
                    machine.execute(count);
                }
                Err(_) => writeln!(output, "unknown command '{n}' {DEBUGGER_USAGE}")?,
            },
            _ => writeln!(output, "unknown command '{}' {DEBUGGER_USAGE}", line.trim())?,
        }

        for hit in machine.memory_mut().diagnostics_mut().take_watch_hits() {
            writeln!(
                output,
                "watch: {:?} 0x{:04X} = 0x{:02X}",
                hit.kind, hit.addr, hit.value
            )?;
        }
        for fault in machine.take_faults() {
            writeln!(output, "fault: {fault}")?;
        }
    }

    Ok(machine.instructions() - started_at)
}

fn parse_addr(text: &str) -> Option<u16> {
    let digits = text.trim_start_matches("0x").trim_start_matches("0X");
    u16::from_str_radix(digits, 16).ok()
}

/// Disassemble the firmware region of `rom`.
pub fn disassemble_rom(rom: &RomSource) -> Result<Vec<String>> {
    let image = match rom {
        RomSource::Dir(dir) => {
            let mut memory = AddressSpace::new();
            loader::load_rom_set(&mut memory, dir)?;
            memory.as_slice()[..ROM_END].to_vec()
        }
        RomSource::Image(path) => fs::read(path)
            .with_context(|| format!("failed to read ROM image {}", path.display()))?,
    };
    Ok(disasm::disassemble_all(&image))
}
