use embedded_hal::delay::DelayNs;

use crate::{
    command::{CommandSet, DataWidth, Font, LineMode, MoveDirection, ShiftType, State},
    lcd::{Lcd, WAKE_UP_LONG_US, WAKE_UP_SHORT_US},
    sender::SendCommand,
};

/// [`Config`] is the setup options of a [`Lcd`]
///
/// [`Config::default()`] is 8 bit bus, 2 lines, small font,
/// display, cursor and blink on, left to right, cursor only
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    data_width: DataWidth,
    line: LineMode,
    font: Font,
    display_on: State,
    cursor_on: State,
    cursor_blink: State,
    direction: MoveDirection,
    shift_type: ShiftType,
}

#[allow(missing_docs)]
impl Config {
    pub fn get_data_width(&self) -> DataWidth {
        self.data_width
    }

    pub fn set_data_width(mut self, data_width: DataWidth) -> Self {
        self.data_width = data_width;
        self
    }

    pub fn get_line_mode(&self) -> LineMode {
        self.line
    }

    pub fn set_line_mode(mut self, line: LineMode) -> Self {
        self.line = line;
        self
    }

    pub fn get_font(&self) -> Font {
        self.font
    }

    pub fn set_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn get_display_state(&self) -> State {
        self.display_on
    }

    pub fn set_display_state(mut self, display: State) -> Self {
        self.display_on = display;
        self
    }

    pub fn get_cursor_state(&self) -> State {
        self.cursor_on
    }

    pub fn set_cursor_state(mut self, cursor: State) -> Self {
        self.cursor_on = cursor;
        self
    }

    pub fn get_cursor_blink(&self) -> State {
        self.cursor_blink
    }

    pub fn set_cursor_blink(mut self, blink: State) -> Self {
        self.cursor_blink = blink;
        self
    }

    pub fn get_direction(&self) -> MoveDirection {
        self.direction
    }

    pub fn set_direction(mut self, dir: MoveDirection) -> Self {
        self.direction = dir;
        self
    }

    pub fn get_shift_type(&self) -> ShiftType {
        self.shift_type
    }

    pub fn set_shift_type(mut self, shift: ShiftType) -> Self {
        self.shift_type = shift;
        self
    }
}

impl<'a, 'b, Sender, Delayer> Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    /// Create a [`Lcd`] driver, and wake LCD1602 up
    ///
    /// Pins should already be pulled low by the sender.
    /// LCD1602 keeps its power on defaults (8 bit, 1 line) until
    /// [`Lcd::default_setup()`] or [`Lcd::setup()`] is called.
    pub fn new(sender: &'a mut Sender, delayer: &'b mut Delayer) -> Self {
        let mut lcd = Lcd { sender, delayer };
        lcd.wake_up();
        lcd
    }

    // busy flag is not available, and power on reset may not be trusted,
    // so we use "initializing by instruction" from datasheet
    fn wake_up(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::debug!("lcd1602 wake up");

        self.send_and_settle(CommandSet::WakeUp, WAKE_UP_LONG_US);
        self.send_and_settle(CommandSet::WakeUp, WAKE_UP_LONG_US);
        self.send_and_settle(CommandSet::WakeUp, WAKE_UP_SHORT_US);
    }

    /// 8 bit bus, 2 lines, small font, display/cursor/blink on, left to right without shift
    pub fn default_setup(&mut self) {
        self.setup(&Config::default());
    }

    /// Send function set, display set and entry mode set from `config`, in that order
    pub fn setup(&mut self, config: &Config) {
        self.function_set(
            config.get_data_width(),
            config.get_line_mode(),
            config.get_font(),
        );
        self.display_set(
            config.get_display_state(),
            config.get_cursor_state(),
            config.get_cursor_blink(),
        );
        self.entry_mode_set(config.get_direction(), config.get_shift_type());
    }
}
