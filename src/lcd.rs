//! The LCD1602 driver

use embedded_hal::delay::DelayNs;

use crate::{
    command::{CommandSet, DataWidth, Font, LineMode, MoveDirection, ShiftType, State},
    message::Message,
    sender::SendCommand,
};

mod init;

pub use init::Config;

/// Wait after the 1st and 2nd wake up command, in microseconds
pub const WAKE_UP_LONG_US: u32 = 10_000;
/// Wait after the 3rd wake up command, in microseconds
pub const WAKE_UP_SHORT_US: u32 = 250;
/// Clear display and return home take about 1.52 ms, wait a little longer
pub const CLEAR_SETTLE_US: u32 = 1_700;
/// Wait after DDRAM or CGRAM address set, in microseconds
pub const ADDRESS_SETTLE_US: u32 = 100;
/// Wait after each data write, in microseconds
pub const WRITE_SETTLE_US: u32 = 50;

/// DDRAM address of the first character of the second line
const SECOND_LINE_ADDR: u8 = 0x40;

/// Visible line of LCD1602
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// DDRAM 0x00~0x0F
    #[default]
    First,
    /// DDRAM 0x40~0x4F
    Second,
}

/// LCD1602 driver
///
/// It keeps no copy of LCD1602 state,
/// every method is a fixed pin sequence followed by a fixed wait
pub struct Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    sender: &'a mut Sender,
    delayer: &'b mut Delayer,
}

impl<'a, 'b, Sender, Delayer> Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    fn send(&mut self, command: CommandSet) {
        #[cfg(feature = "defmt")]
        defmt::trace!("lcd1602 send {}", command);

        self.sender.send(command.into(), self.delayer);
    }

    fn send_and_settle(&mut self, command: CommandSet, settle_us: u32) {
        #[cfg(feature = "defmt")]
        defmt::trace!("lcd1602 send {}, settle {=u32} us", command, settle_us);

        self.sender.send_and_settle(command.into(), self.delayer, settle_us);
    }

    /// Send a raw instruction byte
    ///
    /// Note:
    /// No wait after it, caller should wait as long as the instruction needs
    pub fn command(&mut self, byte: u8) {
        self.send(CommandSet::Raw(byte));
    }

    /// Data width, line count and font
    pub fn function_set(&mut self, width: DataWidth, line: LineMode, font: Font) {
        self.send(CommandSet::FunctionSet(width, line, font));
    }

    /// Display, cursor and cursor blink
    pub fn display_set(&mut self, display: State, cursor: State, cursor_blink: State) {
        self.send(CommandSet::DisplayOnOff {
            display,
            cursor,
            cursor_blink,
        });
    }

    /// Address move direction, and whether display follows after each write
    pub fn entry_mode_set(&mut self, dir: MoveDirection, shift: ShiftType) {
        self.send(CommandSet::EntryModeSet(dir, shift));
    }

    /// Move cursor, or cursor and display, one step without writing
    pub fn shift_cursor_or_display(&mut self, shift: ShiftType, dir: MoveDirection) {
        self.send(CommandSet::CursorOrDisplayShift(shift, dir));
    }

    /// Clear DDRAM, cursor goes to 0x00
    pub fn clear(&mut self) {
        self.send_and_settle(CommandSet::ClearDisplay, CLEAR_SETTLE_US);
    }

    /// Cursor goes to 0x00, display window moves back
    pub fn cursor_home(&mut self) {
        self.send_and_settle(CommandSet::ReturnHome, CLEAR_SETTLE_US);
    }

    /// Set DDRAM address, only lower 7 bits are used
    pub fn set_ddram_addr(&mut self, addr: u8) {
        self.send_and_settle(CommandSet::SetDDRAM(addr), ADDRESS_SETTLE_US);
    }

    /// Set CGRAM address, only lower 6 bits are used
    pub fn set_cgram_addr(&mut self, addr: u8) {
        self.send_and_settle(CommandSet::SetCGRAM(addr), ADDRESS_SETTLE_US);
    }

    /// Move cursor to `index` of `line`
    ///
    /// `index` is masked to 0x0~0xF, so it always lands in the visible window
    pub fn set_cursor_pos(&mut self, line: Line, index: u8) {
        let mut addr = index & 0x0F;

        if line == Line::Second {
            addr |= SECOND_LINE_ADDR;
        }

        self.set_ddram_addr(addr);
    }

    /// Write one byte to current address
    ///
    /// The byte is passed as is, what it looks like depends on CGROM of LCD1602
    pub fn write_byte(&mut self, byte: u8) {
        self.send_and_settle(CommandSet::WriteDataToRAM(byte), WRITE_SETTLE_US);
    }

    /// Write bytes of `text` one by one, starting at current address
    ///
    /// No line wrap, and no length check
    pub fn write_text(&mut self, text: impl AsRef<[u8]>) {
        text.as_ref().iter().for_each(|&byte| self.write_byte(byte));
    }

    /// Write first line at current address, then second line from 0x40
    ///
    /// Caller should set cursor before, usually [`Lcd::cursor_home()`] or [`Lcd::clear()`]
    pub fn write_message(&mut self, message: &Message) {
        self.write_text(message.get_line1());
        self.set_ddram_addr(SECOND_LINE_ADDR);
        self.write_text(message.get_line2());
    }

    /// Draw a 5x8 graph into one of the 8 CGRAM slots
    ///
    /// Only lower 5 bits of each row are used.
    /// Cursor is left in CGRAM, use [`Lcd::set_cursor_pos()`] to get back to DDRAM
    pub fn write_graph_to_cgram(&mut self, index: u8, graph_data: &[u8; 8]) {
        self.set_cgram_addr((index & 0b111) << 3);

        graph_data
            .iter()
            .for_each(|&row| self.write_byte(row & 0b1_1111));
    }

    /// Write custom graph `index` (0~7) at current DDRAM address
    pub fn write_graph_to_cur(&mut self, index: u8) {
        self.write_byte(index & 0b111);
    }

    #[allow(missing_docs)]
    pub fn delay_ms(&mut self, ms: u32) {
        self.delayer.delay_ms(ms);
    }

    #[allow(missing_docs)]
    pub fn delay_us(&mut self, us: u32) {
        self.delayer.delay_us(us);
    }
}

impl<'a, 'b, Sender, Delayer> core::fmt::Write for Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.write_text(s);
        Ok(())
    }
}
