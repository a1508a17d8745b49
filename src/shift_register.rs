//! 74HC595 serial-in/parallel-out shift register
//!
//! Three lines control the chip:
//!
//! * SER: serial data input
//! * SRCLK: shift clock, SER is sampled on its rising edge
//! * RCLK: storage (latch) clock, on its rising edge the shift stage is copied to Q0~Q7
//!
//! Bits are shifted in MSB first, so after 8 clocks bit 7 sits on Q7 and bit 0 on Q0.

use core::convert::Infallible;

use embedded_hal::{
    delay::DelayNs,
    digital::{OutputPin, PinState},
};

use crate::utils::{drive, BitOps};

/// Settle time after each edge on SER, SRCLK and RCLK, in microseconds
///
/// 74HC595 is far faster than this, the value only needs to be "long enough"
pub const SHIFT_DELAY_US: u32 = 1;

/// A 74HC595 driven by three push-pull pins
pub struct ShiftRegister<Pin>
where
    Pin: OutputPin<Error = Infallible>,
{
    ser_pin: Pin,
    rclk_pin: Pin,
    srclk_pin: Pin,
}

impl<Pin> ShiftRegister<Pin>
where
    Pin: OutputPin<Error = Infallible>,
{
    /// Take the SER, RCLK and SRCLK pins, and pull them all low
    pub fn new(ser: Pin, rclk: Pin, srclk: Pin) -> Self {
        let mut shift_register = Self {
            ser_pin: ser,
            rclk_pin: rclk,
            srclk_pin: srclk,
        };

        drive(&mut shift_register.ser_pin, PinState::Low);
        drive(&mut shift_register.rclk_pin, PinState::Low);
        drive(&mut shift_register.srclk_pin, PinState::Low);

        shift_register
    }

    /// Release the pins
    pub fn free(self) -> (Pin, Pin, Pin) {
        (self.ser_pin, self.rclk_pin, self.srclk_pin)
    }

    /// One full pulse on SRCLK
    pub fn pulse_clock(&mut self, delayer: &mut impl DelayNs) {
        drive(&mut self.srclk_pin, PinState::High);
        delayer.delay_us(SHIFT_DELAY_US);
        drive(&mut self.srclk_pin, PinState::Low);
        delayer.delay_us(SHIFT_DELAY_US);
    }

    /// Copy the shift stage to the outputs
    pub fn latch(&mut self, delayer: &mut impl DelayNs) {
        drive(&mut self.rclk_pin, PinState::High);
        delayer.delay_us(SHIFT_DELAY_US);
        drive(&mut self.rclk_pin, PinState::Low);
        delayer.delay_us(SHIFT_DELAY_US);
    }

    /// Shift one bit in, without latching
    pub fn shift_bit(&mut self, bit: bool, delayer: &mut impl DelayNs) {
        drive(&mut self.ser_pin, PinState::from(bit));
        self.pulse_clock(delayer);
    }

    /// Shift a whole byte in, MSB first, without latching
    pub fn shift_byte(&mut self, byte: u8, delayer: &mut impl DelayNs) {
        for pos in (0..8u8).rev() {
            drive(&mut self.ser_pin, byte.check_bit(pos).into());
            delayer.delay_us(SHIFT_DELAY_US);
            self.pulse_clock(delayer);
            delayer.delay_us(SHIFT_DELAY_US);
        }
    }

    /// Shift one bit in, then latch
    pub fn put_bit(&mut self, bit: bool, delayer: &mut impl DelayNs) {
        self.shift_bit(bit, delayer);
        self.latch(delayer);
    }

    /// Shift a whole byte in, then latch
    pub fn put_byte(&mut self, byte: u8, delayer: &mut impl DelayNs) {
        self.shift_byte(byte, delayer);
        self.latch(delayer);
    }
}
