//! 8080 disassembler used by the step debugger and trace logging.

const REG: [&str; 8] = ["B", "C", "D", "E", "H", "L", "M", "A"];
const RP: [&str; 4] = ["B", "D", "H", "SP"];
const RP_PSW: [&str; 4] = ["B", "D", "H", "PSW"];
const CC: [&str; 8] = ["NZ", "Z", "NC", "C", "PO", "PE", "P", "M"];
const ALU: [&str; 8] = ["ADD", "ADC", "SUB", "SBB", "ANA", "XRA", "ORA", "CMP"];
const ALU_IMM: [&str; 8] = ["ADI", "ACI", "SUI", "SBI", "ANI", "XRI", "ORI", "CPI"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Operand {
    None,
    Byte,
    Word,
}

impl Operand {
    fn len(self) -> usize {
        match self {
            Operand::None => 1,
            Operand::Byte => 2,
            Operand::Word => 3,
        }
    }
}

/// Mnemonic text (up to the operand) and operand kind for an opcode, or
/// `None` for the undocumented codes.
fn decode(opcode: u8) -> Option<(String, Operand)> {
    let dst = ((opcode >> 3) & 0x07) as usize;
    let src = (opcode & 0x07) as usize;
    let rp = ((opcode >> 4) & 0x03) as usize;

    let decoded = match opcode {
        0x00 => ("NOP".to_string(), Operand::None),
        0x76 => ("HLT".to_string(), Operand::None),
        0x40..=0x7F => (format!("MOV {},{}", REG[dst], REG[src]), Operand::None),
        0x80..=0xBF => (format!("{} {}", ALU[dst], REG[src]), Operand::None),

        0x01 | 0x11 | 0x21 | 0x31 => (format!("LXI {},", RP[rp]), Operand::Word),
        0x02 | 0x12 => (format!("STAX {}", RP[rp]), Operand::None),
        0x0A | 0x1A => (format!("LDAX {}", RP[rp]), Operand::None),
        0x03 | 0x13 | 0x23 | 0x33 => (format!("INX {}", RP[rp]), Operand::None),
        0x0B | 0x1B | 0x2B | 0x3B => (format!("DCX {}", RP[rp]), Operand::None),
        0x09 | 0x19 | 0x29 | 0x39 => (format!("DAD {}", RP[rp]), Operand::None),
        0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => {
            (format!("INR {}", REG[dst]), Operand::None)
        }
        0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => {
            (format!("DCR {}", REG[dst]), Operand::None)
        }
        0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => {
            (format!("MVI {},", REG[dst]), Operand::Byte)
        }

        0x07 => ("RLC".to_string(), Operand::None),
        0x0F => ("RRC".to_string(), Operand::None),
        0x17 => ("RAL".to_string(), Operand::None),
        0x1F => ("RAR".to_string(), Operand::None),
        0x22 => ("SHLD ".to_string(), Operand::Word),
        0x2A => ("LHLD ".to_string(), Operand::Word),
        0x32 => ("STA ".to_string(), Operand::Word),
        0x3A => ("LDA ".to_string(), Operand::Word),
        0x27 => ("DAA".to_string(), Operand::None),
        0x2F => ("CMA".to_string(), Operand::None),
        0x37 => ("STC".to_string(), Operand::None),
        0x3F => ("CMC".to_string(), Operand::None),

        0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => {
            (format!("{} ", ALU_IMM[dst]), Operand::Byte)
        }
        0xC2 | 0xCA | 0xD2 | 0xDA | 0xE2 | 0xEA | 0xF2 | 0xFA => {
            (format!("J{} ", CC[dst]), Operand::Word)
        }
        0xC4 | 0xCC | 0xD4 | 0xDC | 0xE4 | 0xEC | 0xF4 | 0xFC => {
            (format!("C{} ", CC[dst]), Operand::Word)
        }
        0xC0 | 0xC8 | 0xD0 | 0xD8 | 0xE0 | 0xE8 | 0xF0 | 0xF8 => {
            (format!("R{}", CC[dst]), Operand::None)
        }
        0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => {
            (format!("RST {dst}"), Operand::None)
        }
        0xC5 | 0xD5 | 0xE5 | 0xF5 => (format!("PUSH {}", RP_PSW[rp]), Operand::None),
        0xC1 | 0xD1 | 0xE1 | 0xF1 => (format!("POP {}", RP_PSW[rp]), Operand::None),

        0xC3 => ("JMP ".to_string(), Operand::Word),
        0xCD => ("CALL ".to_string(), Operand::Word),
        0xC9 => ("RET".to_string(), Operand::None),
        0xDB => ("IN ".to_string(), Operand::Byte),
        0xD3 => ("OUT ".to_string(), Operand::Byte),
        0xE3 => ("XTHL".to_string(), Operand::None),
        0xE9 => ("PCHL".to_string(), Operand::None),
        0xEB => ("XCHG".to_string(), Operand::None),
        0xF9 => ("SPHL".to_string(), Operand::None),
        0xF3 => ("DI".to_string(), Operand::None),
        0xFB => ("EI".to_string(), Operand::None),

        _ => return None,
    };
    Some(decoded)
}

/// Length in bytes of the instruction starting with `opcode`.
///
/// Undocumented opcodes count as one byte, matching how the CPU steps over
/// them.
pub fn instruction_len(opcode: u8) -> usize {
    decode(opcode).map_or(1, |(_, operand)| operand.len())
}

/// Disassemble the instruction at `pc` within `bytes`.
///
/// Returns the formatted line, e.g. `0x1000: MOV A,B` or `0x1002: JMP 0x18D4`,
/// and the instruction length. Undocumented opcodes and instructions whose
/// operands run past the end of `bytes` are rendered as `DB 0xNN` with a
/// length of 1. A `pc` outside `bytes` yields an empty line and length 0.
pub fn disassemble(bytes: &[u8], pc: u16) -> (String, usize) {
    let at = pc as usize;
    let Some(&opcode) = bytes.get(at) else {
        return (String::new(), 0);
    };

    let raw = || (format!("0x{pc:04X}: DB 0x{opcode:02X}"), 1);

    let Some((text, operand)) = decode(opcode) else {
        return raw();
    };

    match operand {
        Operand::None => (format!("0x{pc:04X}: {text}"), 1),
        Operand::Byte => match bytes.get(at + 1) {
            Some(&imm) => (format!("0x{pc:04X}: {text}0x{imm:02X}"), 2),
            None => raw(),
        },
        Operand::Word => match (bytes.get(at + 1), bytes.get(at + 2)) {
            (Some(&lo), Some(&hi)) => {
                let word = u16::from_le_bytes([lo, hi]);
                (format!("0x{pc:04X}: {text}0x{word:04X}"), 3)
            }
            _ => raw(),
        },
    }
}

/// Disassemble a whole image starting at offset 0, one line per instruction.
pub fn disassemble_all(bytes: &[u8]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pc = 0usize;
    while pc < bytes.len() && pc <= u16::MAX as usize {
        let (line, len) = disassemble(bytes, pc as u16);
        if len == 0 {
            break;
        }
        lines.push(line);
        pc += len;
    }
    lines
}
