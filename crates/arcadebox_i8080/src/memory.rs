mod diagnostics;

use anyhow::{bail, Result};

pub use diagnostics::{AccessCount, AccessKind, Diagnostics, MemoryChange, WatchHit};

/// Total addressable memory size (64 KiB).
pub const MEMORY_SIZE: usize = 0x10000;

/// End (exclusive) of the write-protected firmware region starting at 0x0000.
pub const ROM_END: usize = 0x2000;
/// Start of the working RAM used by the game firmware.
pub const RAM_START: usize = 0x2000;
/// Start of video RAM.
///
/// The original hardware maps the frame buffer at 0x2400–0x3fff.
pub const VRAM_START: usize = 0x2400;
/// Size of video RAM in bytes (0x1c00 = 7168 bytes = 224x256 bits).
pub const VRAM_SIZE: usize = 0x1c00;
/// Start of the general read/write area above video RAM.
pub const HIGH_RAM_START: usize = VRAM_START + VRAM_SIZE;

/// Fixed regions of the board's address map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    /// `[0x0000, 0x2000)`: firmware, read-only at run time.
    Rom,
    /// `[0x2000, 0x2400)`: working storage.
    WorkRam,
    /// `[0x2400, 0x4000)`: frame buffer.
    VideoRam,
    /// `[0x4000, 0x10000)`: general storage and stack.
    HighRam,
}

impl Region {
    pub fn of(addr: u16) -> Self {
        match addr as usize {
            a if a < ROM_END => Region::Rom,
            a if a < VRAM_START => Region::WorkRam,
            a if a < HIGH_RAM_START => Region::VideoRam,
            _ => Region::HighRam,
        }
    }

    pub fn is_writable(self) -> bool {
        self != Region::Rom
    }
}

/// The 64 KiB address space seen by the CPU.
///
/// Ordinary writes into the firmware region are dropped, exactly like a
/// write to a ROM chip on the real bus. Firmware is installed through the
/// separate `write_rom` / `load_rom` path, which only accepts ROM addresses.
pub struct AddressSpace {
    bytes: Box<[u8]>,
    diagnostics: Diagnostics,
}

impl Default for AddressSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressSpace {
    pub fn new() -> Self {
        Self {
            bytes: vec![0u8; MEMORY_SIZE].into_boxed_slice(),
            diagnostics: Diagnostics::default(),
        }
    }

    /// Read a byte as the CPU does. Feeds access counters and watchpoints
    /// when those are enabled.
    #[inline]
    pub fn read(&mut self, addr: u16) -> u8 {
        let value = self.bytes[addr as usize];
        self.diagnostics.on_access(AccessKind::Read, addr, value);
        value
    }

    /// Read a byte without touching any instrumentation.
    #[inline]
    pub fn peek(&self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    /// Write a byte as the CPU does. Writes into ROM are ignored, but still
    /// reach the access counters and watchpoints.
    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.diagnostics.on_access(AccessKind::Write, addr, value);
        if !Region::of(addr).is_writable() {
            log::trace!("ignored write to ROM at 0x{addr:04X} (value 0x{value:02X})");
            return;
        }
        self.bytes[addr as usize] = value;
    }

    /// Privileged write used to install firmware.
    ///
    /// Bypasses ROM protection but refuses any address outside ROM.
    pub fn write_rom(&mut self, addr: u16, value: u8) -> Result<()> {
        if (addr as usize) >= ROM_END {
            bail!("firmware write outside ROM at 0x{addr:04X}");
        }
        self.bytes[addr as usize] = value;
        Ok(())
    }

    /// Install a firmware image at `offset`.
    ///
    /// The whole range is validated before any byte is written, so a
    /// rejected image leaves memory untouched.
    pub fn load_rom(&mut self, offset: u16, image: &[u8]) -> Result<()> {
        let start = offset as usize;
        let end = start + image.len();
        if end > MEMORY_SIZE {
            bail!(
                "image of {} bytes at 0x{start:04X} exceeds the 64 KiB address space",
                image.len()
            );
        }
        if end > ROM_END {
            bail!(
                "image of {} bytes at 0x{start:04X} extends past the ROM region (ends at 0x{end:04X})",
                image.len()
            );
        }
        for (addr, &byte) in (start..end).zip(image) {
            self.write_rom(addr as u16, byte)?;
        }
        Ok(())
    }

    /// Zero the firmware region through the privileged path.
    pub fn clear_rom(&mut self) {
        self.bytes[..ROM_END].fill(0);
    }

    /// Zero the whole address space, firmware included.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Borrow the video window for zero-copy rendering.
    ///
    /// The layout matches the original hardware: 0x1c00 bytes starting at
    /// 0x2400, 8 pixels per byte.
    pub fn video_ram(&self) -> &[u8] {
        &self.bytes[VRAM_START..HIGH_RAM_START]
    }

    /// Owned copy of the video window.
    pub fn video_ram_copy(&self) -> Vec<u8> {
        self.video_ram().to_vec()
    }

    /// The full 64 KiB image.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    /// Remember the current memory contents for a later `diff_against_snapshot`.
    pub fn snapshot(&mut self) {
        self.diagnostics.store_snapshot(&self.bytes);
        log::debug!("memory snapshot taken");
    }

    /// Every byte that changed since the last `snapshot`.
    ///
    /// Without a snapshot the result is empty.
    pub fn diff_against_snapshot(&self) -> Vec<MemoryChange> {
        self.diagnostics.diff(&self.bytes)
    }

    /// Hex dump of `[start, end]`, sixteen bytes per row.
    pub fn dump_region(&self, start: u16, end: u16) -> String {
        if start > end {
            return String::new();
        }
        (start as usize..=end as usize)
            .step_by(16)
            .map(|row_start| {
                let row = &self.bytes[row_start..=(row_start + 15).min(end as usize)];
                let bytes: String = row.iter().map(|byte| format!(" {byte:02X}")).collect();
                format!("0x{row_start:04X}:{bytes}\n")
            })
            .collect()
    }
}
