use super::{Bus8080, Cpu8080, UnimplementedOpcode};
use std::fs;
use std::path::PathBuf;

/// Flat 64 KiB RAM bus with a one-entry IO log.
struct TestBus {
    mem: Vec<u8>,
    io_in: u8,
    last_out: Option<(u8, u8)>,
    finished: bool,
}

impl TestBus {
    fn new() -> Self {
        Self {
            mem: vec![0; 0x10000],
            io_in: 0,
            last_out: None,
            finished: false,
        }
    }

    fn with_program(origin: u16, program: &[u8]) -> Self {
        let mut bus = Self::new();
        let start = origin as usize;
        bus.mem[start..start + program.len()].copy_from_slice(program);
        bus
    }

    fn load_com(&mut self, name: &str) {
        // CP/M .COM programs start at 0x0100. Support both workspace-root and
        // crate-relative working directories.
        let candidates = [
            PathBuf::from("assets/roms/8080_tests").join(name),
            PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("../../assets/roms/8080_tests")
                .join(name),
        ];
        let data = candidates
            .iter()
            .find_map(|path| fs::read(path).ok())
            .unwrap_or_else(|| panic!("{name} not found. Tried: {candidates:?}"));

        let start = 0x0100usize;
        assert!(start + data.len() <= self.mem.len());
        self.mem[start..start + data.len()].copy_from_slice(&data);

        // "OUT 0,A" at 0x0000 marks the end of the test.
        self.mem[0x0000] = 0xD3;
        self.mem[0x0001] = 0x00;

        // "OUT 1,A" then "RET" at 0x0005 stands in for the BDOS print call.
        self.mem[0x0005] = 0xD3;
        self.mem[0x0006] = 0x01;
        self.mem[0x0007] = 0xC9;
    }
}

impl Bus8080 for TestBus {
    fn mem_read(&mut self, addr: u16) -> u8 {
        self.mem[addr as usize]
    }

    fn mem_write(&mut self, addr: u16, value: u8) {
        self.mem[addr as usize] = value;
    }

    fn io_read(&mut self, _port: u8) -> u8 {
        self.io_in
    }

    fn io_write(&mut self, port: u8, value: u8) {
        if port == 0 {
            self.finished = true;
        }
        self.last_out = Some((port, value));
    }
}

fn cpu_at(pc: u16, sp: u16) -> Cpu8080 {
    let mut cpu = Cpu8080::new();
    cpu.regs.pc = pc;
    cpu.regs.sp = sp;
    cpu
}

#[test]
fn add_immediate_wraps_to_zero_with_carry() {
    // MVI A,FF ; ADI 01
    let mut bus = TestBus::with_program(0, &[0x3E, 0xFF, 0xC6, 0x01]);
    let mut cpu = cpu_at(0, 0x2400);

    assert_eq!(cpu.step(&mut bus), 7);
    assert_eq!(cpu.step(&mut bus), 7);

    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.flags.z);
    assert!(cpu.flags.cy);
    assert!(cpu.flags.ac);
    assert!(cpu.flags.p);
    assert!(!cpu.flags.s);
    assert_eq!(cpu.regs.pc, 4);
}

#[test]
fn and_immediate_sets_aux_carry() {
    // MVI A,F0 ; STC ; ANI 0F
    let mut bus = TestBus::with_program(0, &[0x3E, 0xF0, 0x37, 0xE6, 0x0F]);
    let mut cpu = cpu_at(0, 0x2400);
    cpu.run(&mut bus, 3);

    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.flags.z);
    assert!(cpu.flags.ac);
    assert!(!cpu.flags.cy);
}

#[test]
fn or_and_xor_clear_carry_and_aux_carry() {
    // MVI A,0F ; STC ; ORI 30 ; STC ; XRI 3F
    let mut bus = TestBus::with_program(0, &[0x3E, 0x0F, 0x37, 0xF6, 0x30, 0x37, 0xEE, 0x3F]);
    let mut cpu = cpu_at(0, 0x2400);

    cpu.run(&mut bus, 3);
    assert_eq!(cpu.regs.a, 0x3F);
    assert!(!cpu.flags.cy);
    assert!(!cpu.flags.ac);

    cpu.run(&mut bus, 2);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.flags.z);
    assert!(!cpu.flags.cy);
}

#[test]
fn daa_uses_aux_carry_for_low_nibble() {
    // DAA with A=09 and AC set.
    let mut bus = TestBus::with_program(0, &[0x27]);
    let mut cpu = cpu_at(0, 0x2400);
    cpu.regs.a = 0x09;
    cpu.flags.ac = true;

    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.a, 0x0F);
    assert!(!cpu.flags.cy);
}

#[test]
fn daa_after_bcd_addition() {
    // MVI A,38 ; ADI 45 ; DAA  -> 38 + 45 = 83 in BCD
    let mut bus = TestBus::with_program(0, &[0x3E, 0x38, 0xC6, 0x45, 0x27]);
    let mut cpu = cpu_at(0, 0x2400);
    cpu.run(&mut bus, 3);
    assert_eq!(cpu.regs.a, 0x83);
    assert!(!cpu.flags.cy);

    // MVI A,99 ; ADI 01 ; DAA  -> 99 + 1 = 100, carry out
    let mut bus = TestBus::with_program(0, &[0x3E, 0x99, 0xC6, 0x01, 0x27]);
    let mut cpu = cpu_at(0, 0x2400);
    cpu.run(&mut bus, 3);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.flags.cy);
    assert!(cpu.flags.z);
}

#[test]
fn subtract_and_compare_report_borrow() {
    // MVI A,10 ; SUI 20 ; CPI F0
    let mut bus = TestBus::with_program(0, &[0x3E, 0x10, 0xD6, 0x20, 0xFE, 0xF0]);
    let mut cpu = cpu_at(0, 0x2400);

    cpu.run(&mut bus, 2);
    assert_eq!(cpu.regs.a, 0xF0);
    assert!(cpu.flags.cy);
    assert!(cpu.flags.s);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0xF0, "CPI must not modify A");
    assert!(cpu.flags.z);
    assert!(!cpu.flags.cy);
}

#[test]
fn sbb_includes_incoming_borrow() {
    // MVI A,05 ; STC ; SBI 02
    let mut bus = TestBus::with_program(0, &[0x3E, 0x05, 0x37, 0xDE, 0x02]);
    let mut cpu = cpu_at(0, 0x2400);
    cpu.run(&mut bus, 3);
    assert_eq!(cpu.regs.a, 0x02);
    assert!(!cpu.flags.cy);
}

#[test]
fn inr_and_dcr_preserve_carry() {
    // STC ; MVI B,FF ; INR B ; DCR B
    let mut bus = TestBus::with_program(0, &[0x37, 0x06, 0xFF, 0x04, 0x05]);
    let mut cpu = cpu_at(0, 0x2400);

    cpu.run(&mut bus, 3);
    assert_eq!(cpu.regs.b, 0x00);
    assert!(cpu.flags.z);
    assert!(cpu.flags.ac);
    assert!(cpu.flags.cy);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.b, 0xFF);
    assert!(!cpu.flags.ac);
    assert!(cpu.flags.s);
    assert!(cpu.flags.cy);
}

#[test]
fn inr_m_and_mvi_m_go_through_memory() {
    // LXI H,3000 ; MVI M,41 ; INR M ; MOV A,M
    let mut bus = TestBus::with_program(0, &[0x21, 0x00, 0x30, 0x36, 0x41, 0x34, 0x7E]);
    let mut cpu = cpu_at(0, 0x2400);

    assert_eq!(cpu.step(&mut bus), 10);
    assert_eq!(cpu.step(&mut bus), 10);
    assert_eq!(cpu.step(&mut bus), 10);
    assert_eq!(cpu.step(&mut bus), 7);
    assert_eq!(bus.mem[0x3000], 0x42);
    assert_eq!(cpu.regs.a, 0x42);
}

#[test]
fn mov_decodes_every_register_pair() {
    let mut cpu = Cpu8080::new();
    let mut bus = TestBus::new();
    cpu.regs.set_hl(0x3000);
    bus.mem[0x3000] = 0x77;

    for dst in 0..8u8 {
        for src in 0..8u8 {
            if dst == 6 && src == 6 {
                continue;
            }
            let opcode = 0x40 | (dst << 3) | src;
            // Keep H and L pointing at 0x3000 so M stays stable.
            cpu.regs.b = 0x10;
            cpu.regs.c = 0x11;
            cpu.regs.d = 0x12;
            cpu.regs.e = 0x13;
            cpu.regs.set_hl(0x3000);
            cpu.regs.a = 0x17;
            bus.mem[0x3000] = 0x77;

            let expected = cpu.read_reg8(&mut bus, src);
            bus.mem[0x0000] = opcode;
            cpu.regs.pc = 0;
            let cycles = cpu.step(&mut bus);

            if dst == 6 {
                assert_eq!(bus.mem[0x3000], expected, "opcode 0x{opcode:02X}");
            } else {
                assert_eq!(cpu.read_reg8(&mut bus, dst), expected, "opcode 0x{opcode:02X}");
            }
            let expected_cycles = if dst == 6 || src == 6 { 7 } else { 5 };
            assert_eq!(cycles, expected_cycles, "opcode 0x{opcode:02X}");
            assert_eq!(cpu.regs.pc, 1);
        }
    }
}

#[test]
fn sixteen_bit_loads_and_stores() {
    // LXI H,1234 ; SHLD 3000 ; LXI H,0 ; LHLD 3000 ; LXI B,3002 ; MVI A,5A ;
    // STAX B ; LDA 3002
    let program = [
        0x21, 0x34, 0x12, 0x22, 0x00, 0x30, 0x21, 0x00, 0x00, 0x2A, 0x00, 0x30, 0x01, 0x02, 0x30,
        0x3E, 0x5A, 0x02, 0x3A, 0x02, 0x30,
    ];
    let mut bus = TestBus::with_program(0, &program);
    let mut cpu = cpu_at(0, 0x2400);

    cpu.run(&mut bus, 2);
    assert_eq!(bus.mem[0x3000], 0x34);
    assert_eq!(bus.mem[0x3001], 0x12);

    cpu.run(&mut bus, 2);
    assert_eq!(cpu.regs.hl(), 0x1234);

    cpu.run(&mut bus, 4);
    assert_eq!(bus.mem[0x3002], 0x5A);
    assert_eq!(cpu.regs.a, 0x5A);
    assert_eq!(cpu.regs.pc, program.len() as u16);
}

#[test]
fn inx_dcx_wrap_without_touching_flags() {
    // INX B ; DCX D
    let mut bus = TestBus::with_program(0, &[0x03, 0x1B]);
    let mut cpu = cpu_at(0, 0x2400);
    cpu.regs.set_bc(0xFFFF);
    cpu.regs.set_de(0x0000);
    let flags = cpu.flags;

    cpu.run(&mut bus, 2);
    assert_eq!(cpu.regs.bc(), 0x0000);
    assert_eq!(cpu.regs.de(), 0xFFFF);
    assert_eq!(cpu.flags, flags);
}

#[test]
fn dad_sets_only_carry() {
    // DAD H twice from 0x8000: first overflows.
    let mut bus = TestBus::with_program(0, &[0x29, 0x29]);
    let mut cpu = cpu_at(0, 0x2400);
    cpu.regs.set_hl(0x8000);
    cpu.flags.z = true;

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.hl(), 0x0000);
    assert!(cpu.flags.cy);
    assert!(cpu.flags.z);

    cpu.step(&mut bus);
    assert!(!cpu.flags.cy);
}

#[test]
fn rotates_move_bits_through_carry() {
    // RLC ; RRC ; RAL ; RAR
    let mut bus = TestBus::with_program(0, &[0x07, 0x0F, 0x17, 0x1F]);
    let mut cpu = cpu_at(0, 0x2400);
    cpu.regs.a = 0x81;

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x03);
    assert!(cpu.flags.cy);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x81);
    assert!(cpu.flags.cy);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x03);
    assert!(cpu.flags.cy);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x81);
    assert!(cpu.flags.cy);
}

#[test]
fn push_pop_round_trips_and_stack_layout() {
    // LXI B,BEEF ; PUSH B ; POP D
    let mut bus = TestBus::with_program(0, &[0x01, 0xEF, 0xBE, 0xC5, 0xD1]);
    let mut cpu = cpu_at(0, 0x2400);

    cpu.run(&mut bus, 2);
    assert_eq!(cpu.regs.sp, 0x23FE);
    assert_eq!(bus.mem[0x23FE], 0xEF);
    assert_eq!(bus.mem[0x23FF], 0xBE);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.de(), 0xBEEF);
    assert_eq!(cpu.regs.sp, 0x2400);
}

#[test]
fn push_psw_packs_status_byte() {
    // PUSH PSW ; POP B ; PUSH B ; POP PSW
    let mut bus = TestBus::with_program(0, &[0xF5, 0xC1, 0xC5, 0xF1]);
    let mut cpu = cpu_at(0, 0x2400);
    cpu.regs.a = 0x42;
    cpu.flags.s = true;
    cpu.flags.cy = true;

    cpu.run(&mut bus, 2);
    assert_eq!(cpu.regs.b, 0x42);
    assert_eq!(cpu.regs.c, 0x83);

    // Round trip back through the stack with a fresh state.
    cpu.regs.a = 0;
    cpu.flags = Default::default();
    cpu.run(&mut bus, 2);
    assert_eq!(cpu.regs.a, 0x42);
    assert!(cpu.flags.s);
    assert!(cpu.flags.cy);
    assert!(!cpu.flags.z);
}

#[test]
fn call_and_ret_restore_pc_and_sp() {
    // 0000: CALL 0010 ; 0003: NOP
    // 0010: RET
    let mut bus = TestBus::with_program(0, &[0xCD, 0x10, 0x00, 0x00]);
    bus.mem[0x0010] = 0xC9;
    let mut cpu = cpu_at(0, 0x2400);

    assert_eq!(cpu.step(&mut bus), 17);
    assert_eq!(cpu.regs.pc, 0x0010);
    assert_eq!(cpu.regs.sp, 0x23FE);
    assert_eq!(bus.mem[0x23FE], 0x03);
    assert_eq!(bus.mem[0x23FF], 0x00);

    assert_eq!(cpu.step(&mut bus), 10);
    assert_eq!(cpu.regs.pc, 0x0003);
    assert_eq!(cpu.regs.sp, 0x2400);
}

#[test]
fn conditional_branches_consume_operands_either_way() {
    // JZ 1000 (not taken) ; CNZ 2000 (taken)
    let mut bus = TestBus::with_program(0, &[0xCA, 0x00, 0x10, 0xC4, 0x00, 0x20]);
    let mut cpu = cpu_at(0, 0x2400);
    cpu.flags.z = false;

    assert_eq!(cpu.step(&mut bus), 10);
    assert_eq!(cpu.regs.pc, 0x0003);

    assert_eq!(cpu.step(&mut bus), 17);
    assert_eq!(cpu.regs.pc, 0x2000);
    assert_eq!(cpu.regs.sp, 0x23FE);

    // CZ at 2000, not taken.
    bus.mem[0x2000] = 0xCC;
    assert_eq!(cpu.step(&mut bus), 11);
    assert_eq!(cpu.regs.pc, 0x2003);
    assert_eq!(cpu.regs.sp, 0x23FE);

    // RZ not taken, RNZ taken.
    bus.mem[0x2003] = 0xC8;
    bus.mem[0x2004] = 0xC0;
    assert_eq!(cpu.step(&mut bus), 5);
    assert_eq!(cpu.regs.pc, 0x2004);
    assert_eq!(cpu.step(&mut bus), 11);
    assert_eq!(cpu.regs.pc, 0x0006);
    assert_eq!(cpu.regs.sp, 0x2400);
}

#[test]
fn parity_and_sign_conditions() {
    let mut cpu = Cpu8080::new();
    cpu.flags.p = true;
    cpu.flags.s = false;
    assert!(cpu.condition(5)); // PE
    assert!(!cpu.condition(4)); // PO
    assert!(cpu.condition(6)); // P
    assert!(!cpu.condition(7)); // M
}

#[test]
fn rst_pushes_address_after_opcode() {
    let mut bus = TestBus::with_program(0, &[0xEF]); // RST 5
    let mut cpu = cpu_at(0, 0x2400);

    assert_eq!(cpu.step(&mut bus), 11);
    assert_eq!(cpu.regs.pc, 0x0028);
    assert_eq!(cpu.regs.sp, 0x23FE);
    assert_eq!(bus.mem[0x23FE], 0x01);
    assert_eq!(bus.mem[0x23FF], 0x00);
}

#[test]
fn exchange_instructions() {
    // XCHG ; XTHL ; SPHL ; PCHL
    let mut bus = TestBus::with_program(0, &[0xEB, 0xE3, 0xF9, 0xE9]);
    let mut cpu = cpu_at(0, 0x2400);
    cpu.regs.set_de(0x1111);
    cpu.regs.set_hl(0x2222);
    bus.mem[0x2400] = 0x33;
    bus.mem[0x2401] = 0x33;

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.de(), 0x2222);
    assert_eq!(cpu.regs.hl(), 0x1111);

    assert_eq!(cpu.step(&mut bus), 18);
    assert_eq!(cpu.regs.hl(), 0x3333);
    assert_eq!(bus.mem[0x2400], 0x11);
    assert_eq!(bus.mem[0x2401], 0x11);
    assert_eq!(cpu.regs.sp, 0x2400);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.sp, 0x3333);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x3333);
}

#[test]
fn complement_and_carry_control() {
    // CMA ; STC ; CMC
    let mut bus = TestBus::with_program(0, &[0x2F, 0x37, 0x3F]);
    let mut cpu = cpu_at(0, 0x2400);
    cpu.regs.a = 0x5A;

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0xA5);
    cpu.step(&mut bus);
    assert!(cpu.flags.cy);
    cpu.step(&mut bus);
    assert!(!cpu.flags.cy);
}

#[test]
fn in_and_out_route_through_bus() {
    // IN 01 ; OUT 03
    let mut bus = TestBus::with_program(0, &[0xDB, 0x01, 0xD3, 0x03]);
    bus.io_in = 0x5C;
    let mut cpu = cpu_at(0, 0x2400);

    assert_eq!(cpu.step(&mut bus), 10);
    assert_eq!(cpu.regs.a, 0x5C);
    assert_eq!(cpu.step(&mut bus), 10);
    assert_eq!(bus.last_out, Some((0x03, 0x5C)));
}

#[test]
fn interrupt_requires_enable_latch() {
    let mut bus = TestBus::with_program(0x1000, &[0xFB]); // EI
    let mut cpu = cpu_at(0x1000, 0x2400);

    let before = cpu.clone();
    assert!(!cpu.interrupt(&mut bus, 1));
    assert!(!cpu.interrupt(&mut bus, 2));
    assert_eq!(cpu.regs, before.regs);
    assert_eq!(bus.mem[0x23FE], 0);

    cpu.step(&mut bus);
    assert!(cpu.interrupts_enabled);
    assert!(cpu.interrupt(&mut bus, 2));
    assert_eq!(cpu.regs.pc, 0x0010);
    assert_eq!(cpu.regs.sp, 0x23FE);
    assert_eq!(bus.mem[0x23FE], 0x01);
    assert_eq!(bus.mem[0x23FF], 0x10);
    assert!(!cpu.interrupts_enabled);

    // Latch is now clear, so a second request is ignored.
    assert!(!cpu.interrupt(&mut bus, 1));
    assert_eq!(cpu.regs.pc, 0x0010);
}

#[test]
fn hlt_idles_until_interrupt() {
    // EI ; HLT ; NOP
    let mut bus = TestBus::with_program(0, &[0xFB, 0x76, 0x00]);
    let mut cpu = cpu_at(0, 0x2400);

    cpu.step(&mut bus);
    assert_eq!(cpu.step(&mut bus), 7);
    assert!(cpu.halted);
    assert_eq!(cpu.regs.pc, 2);

    for _ in 0..10 {
        assert_eq!(cpu.step(&mut bus), 4);
        assert_eq!(cpu.regs.pc, 2);
    }

    assert!(cpu.interrupt(&mut bus, 1));
    assert!(!cpu.halted);
    assert_eq!(cpu.regs.pc, 0x0008);
    assert_eq!(bus.mem[0x23FE], 0x02);
}

#[test]
fn undocumented_opcodes_fault_and_advance_one_byte() {
    for (i, &opcode) in [0x08u8, 0x10, 0x18, 0x20, 0x28, 0x30, 0x38, 0xCB, 0xD9, 0xDD, 0xED, 0xFD]
        .iter()
        .enumerate()
    {
        let origin = 0x0100 + i as u16 * 4;
        let mut bus = TestBus::with_program(origin, &[opcode, 0x00]);
        let mut cpu = cpu_at(origin, 0x2400);

        assert_eq!(cpu.step(&mut bus), 4);
        assert_eq!(cpu.regs.pc, origin + 1);
        assert_eq!(
            cpu.take_faults(),
            vec![UnimplementedOpcode {
                opcode,
                addr: origin
            }]
        );
        assert!(cpu.take_faults().is_empty());

        // Execution continues with the following byte.
        assert_eq!(cpu.step(&mut bus), 4);
        assert_eq!(cpu.regs.pc, origin + 2);
    }
}

#[test]
fn faults_queue_until_drained() {
    // DD ; ED ; NOP
    let mut bus = TestBus::with_program(0x0100, &[0xDD, 0xED, 0x00]);
    let mut cpu = cpu_at(0x0100, 0x2400);
    cpu.run(&mut bus, 3);

    assert_eq!(
        cpu.take_faults(),
        vec![
            UnimplementedOpcode {
                opcode: 0xDD,
                addr: 0x0100
            },
            UnimplementedOpcode {
                opcode: 0xED,
                addr: 0x0101
            },
        ]
    );
    assert!(cpu.take_faults().is_empty());
}

#[test]
fn fault_message_names_opcode_and_address() {
    let fault = UnimplementedOpcode {
        opcode: 0xCB,
        addr: 0x1A2B,
    };
    assert_eq!(
        fault.to_string(),
        "unimplemented 8080 opcode 0xCB at 0x1A2B"
    );
}

#[test]
fn reset_returns_to_power_on_state() {
    let mut cpu = cpu_at(0x1234, 0x2400);
    cpu.regs.a = 0x55;
    cpu.interrupts_enabled = true;
    cpu.halted = true;
    cpu.reset();

    assert_eq!(cpu.regs.pc, 0);
    assert_eq!(cpu.regs.a, 0);
    assert!(!cpu.interrupts_enabled);
    assert!(!cpu.halted);
}

fn run_test(name: &str, expected_cycles: Option<u64>) {
    let mut bus = TestBus::new();
    bus.load_com(name);

    let mut cpu = Cpu8080::new();
    cpu.regs.pc = 0x0100;

    let mut cycles: u64 = 0;
    while !bus.finished {
        let c = cpu.step(&mut bus) as u64;
        cycles = cycles.saturating_add(c);
        if let Some(fault) = cpu.take_faults().first() {
            panic!("{name}: {fault}");
        }
    }

    if let Some(expected) = expected_cycles {
        assert!(
            cycles >= expected.saturating_sub(100) && cycles <= expected.saturating_add(100),
            "cycles out of expected range for {}: got {}, expected {}",
            name,
            cycles,
            expected
        );
    }
}

// The CP/M exercisers need the ROMs under assets/roms/8080_tests and take a
// while to run. Run them explicitly, e.g.:
// `cargo test -p arcadebox_i8080 -- --ignored run_tst8080`.

#[test]
#[ignore]
fn run_tst8080() {
    run_test("TST8080.COM", Some(4_924));
}

#[test]
#[ignore]
fn run_cputest() {
    run_test("CPUTEST.COM", Some(255_653_383));
}

#[test]
#[ignore]
fn run_8080pre() {
    run_test("8080PRE.COM", Some(7_817));
}

#[test]
#[ignore]
fn run_8080exm() {
    run_test("8080EXM.COM", None);
}
