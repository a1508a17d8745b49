/*!
# LCD 1602 over 74HC595

Drive an LCD1602 in 8-bit mode, with its data bus fed by a 74HC595 shift register,
so only 6 GPIO pins are needed (3 for the shift register, 3 for RS/RW/EN).

Basic Usage:

1. Create a [`shift_register::ShiftRegister`] from the SER, RCLK and SRCLK pins
<br/>
<br/>
2. Wrap it in a [`sender::ShiftRegisterSender`] together with the EN, RW and RS pins.
    Any type implemented [`sender::SendCommand`] can be used instead.
<br/>
<br/>
3. Use [`lcd::Lcd::new()`] to create a [`lcd::Lcd`], which also wakes the LCD1602 up
<br/>
<br/>
4. Call [`lcd::Lcd::default_setup()`] (or [`lcd::Lcd::setup()`]),
    then use any methods provide by [`lcd::Lcd`] to control LCD1602

LCD1602 busy flag is not readable in this wiring,
so every command is followed by a fixed delay instead of polling.
*/

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod command;
pub mod lcd;
pub mod message;
pub mod sender;
pub mod shift_register;
pub mod utils;

#[cfg(test)]
mod mock;
