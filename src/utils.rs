//! Common tools

use core::convert::Infallible;

use embedded_hal::digital::{OutputPin, PinState};

/// The state of a bit,
/// It's either [`BitState::Clear`] to represent a 0
/// or [`BitState::Set`] to represent a 1
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitState {
    /// Bit is 0
    Clear,
    /// Bit is 1
    Set,
}

impl From<BitState> for PinState {
    fn from(state: BitState) -> Self {
        match state {
            BitState::Clear => PinState::Low,
            BitState::Set => PinState::High,
        }
    }
}

impl From<bool> for BitState {
    fn from(value: bool) -> Self {
        match value {
            true => BitState::Set,
            false => BitState::Clear,
        }
    }
}

/// Simple bit ops
pub trait BitOps {
    /// Set bit at `pos` to 1, bits out of range are ignored
    fn set_bit(&mut self, pos: u8);
    /// Set bit at `pos` to 0, bits out of range are ignored
    fn clear_bit(&mut self, pos: u8);
    /// Read bit at `pos`, bits out of range read as [`BitState::Clear`]
    fn check_bit(&self, pos: u8) -> BitState;
}

impl BitOps for u8 {
    fn set_bit(&mut self, pos: u8) {
        *self |= 1u8.checked_shl(pos as u32).unwrap_or(0);
    }

    fn clear_bit(&mut self, pos: u8) {
        *self &= !1u8.checked_shl(pos as u32).unwrap_or(0);
    }

    fn check_bit(&self, pos: u8) -> BitState {
        match self.checked_shr(pos as u32) {
            Some(shifted) => BitState::from(shifted & 1 == 1),
            None => BitState::Clear,
        }
    }
}

/// Drive an infallible output pin to `level`
pub(crate) fn drive<Pin>(pin: &mut Pin, level: PinState)
where
    Pin: OutputPin<Error = Infallible>,
{
    match pin.set_state(level) {
        Ok(()) => (),
        Err(never) => match never {},
    }
}
