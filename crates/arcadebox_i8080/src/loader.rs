use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::memory::{AddressSpace, ROM_END};

/// Size of one firmware chip.
pub const SEGMENT_SIZE: usize = 0x0800;

/// The four 2 KiB chips of the Space Invaders set and where they are mapped.
pub const ROM_SEGMENTS: [(&str, u16); 4] = [
    ("invaders.h", 0x0000),
    ("invaders.g", 0x0800),
    ("invaders.f", 0x1000),
    ("invaders.e", 0x1800),
];

/// A firmware chip read from disk, ready to install.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RomSegment {
    pub name: String,
    pub offset: u16,
    pub data: Vec<u8>,
}

impl RomSegment {
    /// Additive checksum over the chip contents, handy to tell ROM dumps apart.
    pub fn checksum(&self) -> u32 {
        self.data.iter().map(|&b| u32::from(b)).sum()
    }
}

/// Read the four chips of the ROM set from `dir`.
///
/// Every file is read and validated before returning. A missing file, or one
/// larger than its 2 KiB slot, fails the whole set.
pub fn read_rom_set(dir: impl AsRef<Path>) -> Result<Vec<RomSegment>> {
    let dir = dir.as_ref();
    let mut segments = Vec::with_capacity(ROM_SEGMENTS.len());

    for (name, offset) in ROM_SEGMENTS {
        let path: PathBuf = dir.join(name);
        let data = fs::read(&path)
            .with_context(|| format!("failed to read ROM segment {}", path.display()))?;

        if data.len() > SEGMENT_SIZE {
            bail!(
                "ROM segment {} is {} bytes, larger than its {SEGMENT_SIZE}-byte slot at 0x{offset:04X}",
                path.display(),
                data.len()
            );
        }
        if data.len() < SEGMENT_SIZE {
            log::warn!(
                "ROM segment {} is only {} bytes, the rest of its slot stays zero",
                path.display(),
                data.len()
            );
        }

        segments.push(RomSegment {
            name: name.to_string(),
            offset,
            data,
        });
    }

    Ok(segments)
}

/// Install already-read segments into ROM.
///
/// All ranges are checked first; memory is only touched once every segment
/// is known to fit.
pub fn install_segments(memory: &mut AddressSpace, segments: &[RomSegment]) -> Result<()> {
    check_segments(segments)?;

    for seg in segments {
        memory
            .load_rom(seg.offset, &seg.data)
            .with_context(|| format!("failed to install ROM segment {}", seg.name))?;
        log::debug!(
            "installed {} at 0x{:04X} ({} bytes, checksum 0x{:X})",
            seg.name,
            seg.offset,
            seg.data.len(),
            seg.checksum()
        );
    }

    Ok(())
}

/// Check that every segment fits in ROM without writing anything.
pub fn check_segments(segments: &[RomSegment]) -> Result<()> {
    for seg in segments {
        let end = seg.offset as usize + seg.data.len();
        if end > ROM_END {
            bail!(
                "ROM segment {} ({} bytes at 0x{:04X}) does not fit in ROM",
                seg.name,
                seg.data.len(),
                seg.offset
            );
        }
    }
    Ok(())
}

/// Load the full Space Invaders ROM set from `dir` into `memory`.
///
/// Either all four chips are installed or, on error, memory is left as it
/// was.
pub fn load_rom_set(memory: &mut AddressSpace, dir: impl AsRef<Path>) -> Result<Vec<RomSegment>> {
    let segments = read_rom_set(dir)?;
    install_segments(memory, &segments)?;
    Ok(segments)
}
