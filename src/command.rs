//! LCD1602 instruction set, and the options of each instruction

use crate::utils::BitOps;

/// Every instruction this driver could send to LCD1602
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandSet {
    /// Clear DDRAM and return cursor to address 0x00
    ClearDisplay,
    /// Return cursor to address 0x00 without touching DDRAM
    ReturnHome,
    /// Cursor move direction and display shift after each write
    EntryModeSet(MoveDirection, ShiftType),
    /// Display, cursor and cursor blink
    DisplayOnOff {
        /// Entire display
        display: State,
        /// Underline cursor
        cursor: State,
        /// Blinking block cursor
        cursor_blink: State,
    },
    /// Move cursor or shift display once, without touching DDRAM
    CursorOrDisplayShift(ShiftType, MoveDirection),
    /// Data width, line count and font
    FunctionSet(DataWidth, LineMode, Font),
    // this is not a command from datasheet,
    // it's the raw "8 bit" byte send three times in wake-up process
    // we name it, to make things tidy
    #[doc(hidden)]
    WakeUp,
    /// Set CGRAM address, only lower 6 bits are used
    SetCGRAM(u8),
    /// Set DDRAM address, only lower 7 bits are used
    SetDDRAM(u8),
    /// Any instruction byte, send as is
    Raw(u8),
    /// Write a byte to DDRAM or CGRAM at current address
    WriteDataToRAM(u8),
}

/// Base opcode of each instruction
pub mod mask {
    /// Clear display
    pub const CLEAR_DISPLAY: u8 = 0x01;
    /// Return home
    pub const RETURN_HOME: u8 = 0x02;
    /// Entry mode set
    pub const ENTRY_MODE_SET: u8 = 0x04;
    /// Display on/off control
    pub const DISPLAY_SET: u8 = 0x08;
    /// Cursor or display shift
    pub const CURSOR_DISPLAY_SHIFT: u8 = 0x10;
    /// Function set, the 8 bit flag is already part of it
    pub const FUNCTION_SET: u8 = 0x30;
    /// Set CGRAM address
    pub const CGRAM_ADDR_SET: u8 = 0x40;
    /// Set DDRAM address
    pub const DDRAM_ADDR_SET: u8 = 0x80;
}

/// Cursor move direction
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MoveDirection {
    /// Address decrease
    RightToLeft,
    /// Address increase
    #[default]
    LeftToRight,
}

/// Whether display follows the cursor
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShiftType {
    /// Only cursor moves
    #[default]
    CursorOnly,
    /// Cursor and display window both move
    CursorAndDisplay,
}

/// On or Off
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    #[allow(missing_docs)]
    Off,
    #[allow(missing_docs)]
    #[default]
    On,
}

/// Data bus width
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataWidth {
    #[allow(missing_docs)]
    Bit4,
    #[allow(missing_docs)]
    #[default]
    Bit8,
}

/// Display line count
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineMode {
    #[allow(missing_docs)]
    OneLine,
    #[allow(missing_docs)]
    #[default]
    TwoLine,
}

/// Character font
///
/// [`Font::Small`] (5x8 dots) sets bit 2 of the function set byte
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    #[allow(missing_docs)]
    #[default]
    Small,
    #[allow(missing_docs)]
    Large,
}

/// Which register of LCD1602 a byte goes to
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterSelection {
    /// Instruction register, RS low
    Command,
    /// Data register, RS high
    Data,
}

/// A byte ready to be put on the data bus
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Command {
    rs: RegisterSelection,
    data: u8,
}

impl Command {
    pub(crate) fn new(rs: RegisterSelection, data: u8) -> Self {
        Self { rs, data }
    }

    /// Target register
    pub fn get_register_selection(&self) -> RegisterSelection {
        self.rs
    }

    /// Raw byte on DB0~DB7
    pub fn get_data(&self) -> u8 {
        self.data
    }
}

impl From<CommandSet> for Command {
    fn from(command: CommandSet) -> Self {
        match command {
            CommandSet::ClearDisplay => Self::new(RegisterSelection::Command, mask::CLEAR_DISPLAY),

            CommandSet::ReturnHome => Self::new(RegisterSelection::Command, mask::RETURN_HOME),

            CommandSet::EntryModeSet(dir, st) => {
                let mut raw_bits = mask::ENTRY_MODE_SET;

                if dir == MoveDirection::LeftToRight {
                    raw_bits.set_bit(1);
                }

                if st == ShiftType::CursorAndDisplay {
                    raw_bits.set_bit(0);
                }

                Self::new(RegisterSelection::Command, raw_bits)
            }

            CommandSet::DisplayOnOff {
                display,
                cursor,
                cursor_blink,
            } => {
                let mut raw_bits = mask::DISPLAY_SET;

                if display == State::On {
                    raw_bits.set_bit(2);
                }
                if cursor == State::On {
                    raw_bits.set_bit(1);
                }
                if cursor_blink == State::On {
                    raw_bits.set_bit(0);
                }

                Self::new(RegisterSelection::Command, raw_bits)
            }

            CommandSet::CursorOrDisplayShift(st, dir) => {
                let mut raw_bits = mask::CURSOR_DISPLAY_SHIFT;

                if st == ShiftType::CursorAndDisplay {
                    raw_bits.set_bit(3);
                }

                if dir == MoveDirection::LeftToRight {
                    raw_bits.set_bit(2);
                }

                Self::new(RegisterSelection::Command, raw_bits)
            }

            CommandSet::FunctionSet(width, line, font) => {
                // flags only OR into the base, the base already has bit 4 set
                let mut raw_bits = mask::FUNCTION_SET;

                if width == DataWidth::Bit8 {
                    raw_bits.set_bit(4);
                }

                if line == LineMode::TwoLine {
                    raw_bits.set_bit(3);
                }

                if font == Font::Small {
                    raw_bits.set_bit(2);
                }

                Self::new(RegisterSelection::Command, raw_bits)
            }

            CommandSet::WakeUp => Self::new(RegisterSelection::Command, mask::FUNCTION_SET),

            CommandSet::SetCGRAM(addr) => Self::new(
                RegisterSelection::Command,
                mask::CGRAM_ADDR_SET | (addr & 0b0011_1111),
            ),

            CommandSet::SetDDRAM(addr) => Self::new(
                RegisterSelection::Command,
                mask::DDRAM_ADDR_SET | (addr & 0b0111_1111),
            ),

            CommandSet::Raw(byte) => Self::new(RegisterSelection::Command, byte),

            CommandSet::WriteDataToRAM(data) => Self::new(RegisterSelection::Data, data),
        }
    }
}
