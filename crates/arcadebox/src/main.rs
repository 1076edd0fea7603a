use std::io;
use std::path::PathBuf;

use anyhow::Result;
use arcadebox::{RomSource, RunConfig};
use arcadebox_i8080::{DipConfig, MachineConfig};
use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "arcadebox")]
#[command(about = "Headless Intel 8080 Space Invaders board emulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct RomArgs {
    /// Directory containing invaders.h, invaders.g, invaders.f and invaders.e
    #[arg(long)]
    rom_dir: Option<PathBuf>,

    /// Single combined ROM image loaded at 0x0000
    #[arg(long)]
    rom: Option<PathBuf>,
}

impl RomArgs {
    fn source(&self) -> RomSource {
        match (&self.rom_dir, &self.rom) {
            (Some(dir), _) => RomSource::Dir(dir.clone()),
            (None, Some(image)) => RomSource::Image(image.clone()),
            // clap enforces exactly one of the two.
            (None, None) => RomSource::Dir(PathBuf::from("rom")),
        }
    }
}

#[derive(Args, Debug)]
struct MachineArgs {
    /// Ships per credit (3 to 6)
    #[arg(long, default_value_t = 3)]
    ships: u8,

    /// Hide the coin info line in attract mode
    #[arg(long, action = ArgAction::SetTrue)]
    hide_coin_info: bool,
}

impl MachineArgs {
    fn config(&self) -> MachineConfig {
        MachineConfig::builder()
            .dip(
                DipConfig::builder()
                    .ships_per_credit(self.ships)
                    .show_coin_info(!self.hide_coin_info)
                    .build(),
            )
            .build()
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a number of frames and report what happened
    Run {
        #[command(flatten)]
        rom: RomArgs,

        #[command(flatten)]
        machine: MachineArgs,

        /// Number of frames to run
        #[arg(long, default_value_t = 60)]
        frames: u64,

        /// Write the 0x1c00-byte video RAM window to this file afterwards
        #[arg(long)]
        dump_vram: Option<PathBuf>,

        /// Pace frames at 60 Hz instead of running flat out
        #[arg(long, action = ArgAction::SetTrue)]
        realtime: bool,
    },
    /// Single-step debugger: Enter steps, <count> steps that many, f runs a frame, d <start> <end> dumps, w <addr> watches, q quits
    Step {
        #[command(flatten)]
        rom: RomArgs,

        #[command(flatten)]
        machine: MachineArgs,
    },
    /// Disassemble the ROM
    Disasm {
        #[command(flatten)]
        rom: RomArgs,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run {
            rom,
            machine,
            frames,
            dump_vram,
            realtime,
        } => {
            let config = RunConfig::builder()
                .rom(rom.source())
                .frames(frames)
                .machine(machine.config())
                .dump_vram(dump_vram)
                .realtime(realtime)
                .build();
            let report = arcadebox::run(config)?;
            println!(
                "frames: {}  cycles: {}  lit pixels: {}",
                report.frames, report.cycles, report.lit_pixels
            );
            for fault in &report.faults {
                println!("fault: {fault}");
            }
        }
        Command::Step { rom, machine } => {
            let mut machine = arcadebox::load_machine(&rom.source(), machine.config())?;
            log::info!("ROM loaded, starting debugger");
            let stdin = io::stdin();
            let executed = arcadebox::step_debugger(&mut machine, stdin.lock(), io::stdout())?;
            println!("executed {executed} instructions");
        }
        Command::Disasm { rom } => {
            for line in arcadebox::disassemble_rom(&rom.source())? {
                println!("{line}");
            }
        }
    }

    Ok(())
}
