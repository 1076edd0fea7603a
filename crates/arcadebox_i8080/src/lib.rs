pub mod cpu;
pub mod disasm;
pub mod io;
pub mod loader;
pub mod machine;
pub mod memory;
pub mod registers;

pub use cpu::{Bus8080, Cpu8080, UnimplementedOpcode};
pub use io::{DipConfig, Input};
pub use machine::{CpuState, Machine, MachineConfig};
pub use memory::AddressSpace;
