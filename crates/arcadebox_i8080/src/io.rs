use bitflags::bitflags;
use typed_builder::TypedBuilder;

bitflags! {
    /// Input port 1 (`IN 1`).
    ///
    /// These bits follow the commonly documented Space Invaders layout.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Port1: u8 {
        const COIN = 1 << 0;
        const P2_START = 1 << 1;
        const P1_START = 1 << 2;
        /// Wired high on the board.
        const ALWAYS_ONE = 1 << 3;
        const P1_SHOOT = 1 << 4;
        const P1_LEFT = 1 << 5;
        const P1_RIGHT = 1 << 6;
    }
}

bitflags! {
    /// Input port 2 (`IN 2`): player 2 controls, tilt and DIP switches.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Port2: u8 {
        /// Bits 0–1: number of ships per credit, encoded as `ships - 3`.
        const SHIPS = 0x03;
        const TILT = 1 << 2;
        const P2_SHOOT = 1 << 4;
        const P2_LEFT = 1 << 5;
        const P2_RIGHT = 1 << 6;
        /// The original ROM treats bit 7 = 1 as "hide coin info".
        const HIDE_COIN_INFO = 1 << 7;
    }
}

/// Logical cabinet inputs, independent of any keyboard mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Input {
    Coin,
    P1Start,
    P2Start,
    P1Shoot,
    P1Left,
    P1Right,
    P2Shoot,
    P2Left,
    P2Right,
    Tilt,
}

/// The Space Invaders DIP switches that we model.
///
/// - `ships_per_credit`: number of ships per game (3–6).
/// - `show_coin_info`: whether to show the coin/credit line in attract mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TypedBuilder)]
pub struct DipConfig {
    #[builder(default = 3)]
    pub ships_per_credit: u8,
    #[builder(default = true)]
    pub show_coin_info: bool,
}

impl Default for DipConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl DipConfig {
    fn apply_to_port2(&self, port2: &mut Port2) {
        port2.remove(Port2::SHIPS | Port2::HIDE_COIN_INFO);

        let ships = self.ships_per_credit.clamp(3, 6);
        *port2 |= Port2::from_bits_truncate(ships - 3) & Port2::SHIPS;

        if !self.show_coin_info {
            port2.insert(Port2::HIDE_COIN_INFO);
        }
    }
}

/// Value copy of every I/O latch on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IoLatches {
    pub in_port1: u8,
    pub in_port2: u8,
    pub shift_register: u16,
    pub shift_offset: u8,
    pub out_port3: u8,
    pub out_port5: u8,
}

/// Devices hanging off the 8080 I/O bus on the Space Invaders board.
///
/// Port map:
///
/// | port | IN                    | OUT                     |
/// |------|-----------------------|-------------------------|
/// | 1    | input port 1          |                         |
/// | 2    | input port 2          | shift amount (3 bits)   |
/// | 3    | shifted result        | sound latch 1           |
/// | 4    |                       | shift data              |
/// | 5    |                       | sound latch 2           |
/// | 6    |                       | watchdog                |
#[derive(Clone, Debug)]
pub struct IoBoard {
    port1: Port1,
    port2: Port2,
    out_port3: u8,
    out_port5: u8,
    shift_register: u16,
    shift_offset: u8,
    watchdog_writes: u64,
}

impl Default for IoBoard {
    fn default() -> Self {
        Self::new(DipConfig::default())
    }
}

impl IoBoard {
    pub fn new(dip: DipConfig) -> Self {
        let mut board = Self {
            port1: Port1::ALWAYS_ONE,
            port2: Port2::empty(),
            out_port3: 0,
            out_port5: 0,
            shift_register: 0,
            shift_offset: 0,
            watchdog_writes: 0,
        };
        board.apply_dip_config(dip);
        board
    }

    pub fn apply_dip_config(&mut self, dip: DipConfig) {
        dip.apply_to_port2(&mut self.port2);
    }

    pub fn read_port(&self, port: u8) -> u8 {
        match port {
            1 => self.port1.bits(),
            2 => self.port2.bits(),
            3 => {
                let shift = 8 - (self.shift_offset & 0x7);
                (self.shift_register >> shift) as u8
            }
            _ => 0,
        }
    }

    pub fn write_port(&mut self, port: u8, value: u8) {
        match port {
            2 => {
                self.shift_offset = value & 0x7;
            }
            3 => {
                self.out_port3 = value;
            }
            4 => {
                self.shift_register = (self.shift_register >> 8) | ((value as u16) << 8);
            }
            5 => {
                self.out_port5 = value;
            }
            6 => {
                self.watchdog_writes = self.watchdog_writes.wrapping_add(1);
            }
            _ => {
                log::trace!("write to unmapped port {port}: 0x{value:02X}");
            }
        }
    }

    pub fn set_input(&mut self, input: Input, pressed: bool) {
        match input {
            Input::Coin => self.port1.set(Port1::COIN, pressed),
            Input::P1Start => self.port1.set(Port1::P1_START, pressed),
            Input::P2Start => self.port1.set(Port1::P2_START, pressed),
            Input::P1Shoot => self.port1.set(Port1::P1_SHOOT, pressed),
            Input::P1Left => self.port1.set(Port1::P1_LEFT, pressed),
            Input::P1Right => self.port1.set(Port1::P1_RIGHT, pressed),
            Input::P2Shoot => self.port2.set(Port2::P2_SHOOT, pressed),
            Input::P2Left => self.port2.set(Port2::P2_LEFT, pressed),
            Input::P2Right => self.port2.set(Port2::P2_RIGHT, pressed),
            // Latched until reset; releasing the key does not clear it.
            Input::Tilt => {
                if pressed {
                    self.port2.insert(Port2::TILT);
                }
            }
        }
    }

    /// Current values of the sound output ports (OUT 3 and OUT 5).
    pub fn outputs(&self) -> (u8, u8) {
        (self.out_port3, self.out_port5)
    }

    pub fn watchdog_writes(&self) -> u64 {
        self.watchdog_writes
    }

    pub fn latches(&self) -> IoLatches {
        IoLatches {
            in_port1: self.port1.bits(),
            in_port2: self.port2.bits(),
            shift_register: self.shift_register,
            shift_offset: self.shift_offset,
            out_port3: self.out_port3,
            out_port5: self.out_port5,
        }
    }
}
