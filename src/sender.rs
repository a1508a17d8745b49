//! Built-in sender
//! If you want to create a new sender, you will need to implement [`SendCommand`] trait

use embedded_hal::delay::DelayNs;

use crate::command::Command;

mod shift_register_sender;

pub use shift_register_sender::{ShiftRegisterSender, ENABLE_PULSE_US};

/// [`SendCommand`] is the trait a sender should implement to communicate with the hardware
///
/// LCD1602 busy flag is never read back, so there is no read operation here,
/// every [`Command`] is a write.
pub trait SendCommand<Delayer: DelayNs> {
    /// Put a [`Command`] on the data bus, and let LCD1602 sample it
    fn send(&mut self, command: Command, delayer: &mut Delayer);

    /// Called after a command settled, before anything else is send
    ///
    /// Note:
    /// If a driver doesn't need to idle the bus, just silently bypass it
    #[allow(unused_variables)]
    fn release_bus(&mut self, delayer: &mut Delayer) {}

    /// Send command, then wait specific duration for LCD1602 to finish it
    fn send_and_settle(&mut self, command: Command, delayer: &mut Delayer, settle_us: u32) {
        self.send(command, delayer);
        delayer.delay_us(settle_us);
        self.release_bus(delayer);
    }
}
