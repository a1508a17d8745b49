use core::convert::Infallible;

use embedded_hal::{
    delay::DelayNs,
    digital::{OutputPin, PinState},
};

use crate::{
    command::{Command, RegisterSelection},
    shift_register::ShiftRegister,
    utils::drive,
};

use super::SendCommand;

/// Hold time of EN high, and of EN low after it, in microseconds
pub const ENABLE_PULSE_US: u32 = 5;

// 74HC595 to LCD1602:
// Q7 -> Q0
// DB7/DB6/DB5/DB4/DB3/DB2/DB1/DB0

/// Send 8 bit commands through a 74HC595 on DB0~DB7,
/// with EN, RW and RS wired directly to the MCU
pub struct ShiftRegisterSender<'a, ControlPin, ShiftPin>
where
    ControlPin: OutputPin<Error = Infallible>,
    ShiftPin: OutputPin<Error = Infallible>,
{
    shift_register: &'a mut ShiftRegister<ShiftPin>,
    en_pin: ControlPin,
    rw_pin: ControlPin,
    rs_pin: ControlPin,
}

impl<'a, ControlPin, ShiftPin> ShiftRegisterSender<'a, ControlPin, ShiftPin>
where
    ControlPin: OutputPin<Error = Infallible>,
    ShiftPin: OutputPin<Error = Infallible>,
{
    /// Borrow the shift register, take EN, RW and RS pins, and pull them all low
    pub fn new(
        shift_register: &'a mut ShiftRegister<ShiftPin>,
        en: ControlPin,
        rw: ControlPin,
        rs: ControlPin,
    ) -> Self {
        let mut sender = Self {
            shift_register,
            en_pin: en,
            rw_pin: rw,
            rs_pin: rs,
        };

        drive(&mut sender.en_pin, PinState::Low);
        drive(&mut sender.rw_pin, PinState::Low);
        drive(&mut sender.rs_pin, PinState::Low);

        sender
    }

    /// Release the control pins, shift register will be available again
    pub fn free(self) -> (ControlPin, ControlPin, ControlPin) {
        (self.en_pin, self.rw_pin, self.rs_pin)
    }

    fn pulse_enable(&mut self, delayer: &mut impl DelayNs) {
        drive(&mut self.en_pin, PinState::High);
        delayer.delay_us(ENABLE_PULSE_US);
        drive(&mut self.en_pin, PinState::Low);
        delayer.delay_us(ENABLE_PULSE_US);
    }
}

impl<'a, ControlPin, ShiftPin, Delayer> SendCommand<Delayer>
    for ShiftRegisterSender<'a, ControlPin, ShiftPin>
where
    ControlPin: OutputPin<Error = Infallible>,
    ShiftPin: OutputPin<Error = Infallible>,
    Delayer: DelayNs,
{
    fn send(&mut self, command: Command, delayer: &mut Delayer) {
        self.shift_register.put_byte(command.get_data(), delayer);

        match command.get_register_selection() {
            RegisterSelection::Command => drive(&mut self.rs_pin, PinState::Low),
            RegisterSelection::Data => drive(&mut self.rs_pin, PinState::High),
        }

        // always write, busy flag and RAM are never read back
        drive(&mut self.rw_pin, PinState::Low);

        self.pulse_enable(delayer);
    }

    fn release_bus(&mut self, _delayer: &mut Delayer) {
        drive(&mut self.rs_pin, PinState::Low);
    }
}
