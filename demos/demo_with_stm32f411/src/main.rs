//! Drive LCD1602 in 8 bit mode through a 74HC595, with a STM32F411RET6
//!
//! Wiring diagram
//!
//! 74HC595 <-> STM32F411RET6
//!     SER <-> PA0
//!    RCLK <-> PA1
//!   SRCLK <-> PA2
//!     ~OE <-> GND
//!  ~SRCLR <-> 3.3V
//!
//! LCD1602 <-> 74HC595 / STM32F411RET6
//!     Vss <-> GND
//!     Vdd <-> 5V
//!      V0 <-> potentiometer <-> 5V (to adjust the display contrast)
//!      RS <-> PA5
//!      RW <-> PA4
//!      EN <-> PA3 (and optionally connect to a 4.7 kOhm Pulldown resistor, to stable voltage level when STM32 reset)
//!  D0~D7  <-> Q0~Q7
//!       A <-> 5V
//!       K <-> GND

#![no_std]
#![no_main]

use core::fmt::Write;

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f4xx_hal::{pac, prelude::*};

use lcd1602_hc595::{
    lcd::{Lcd, Line},
    message::Message,
    sender::ShiftRegisterSender,
    shift_register::ShiftRegister,
};

// a heart shape
const HEART: [u8; 8] = [
    0b00000, 0b00000, 0b01010, 0b11111, 0b01110, 0b00100, 0b00000, 0b00000,
];

#[cortex_m_rt::entry]
fn main() -> ! {
    rtt_init_print!();

    let dp = pac::Peripherals::take().expect("Cannot take device peripherals");
    let cp = pac::CorePeripherals::take().expect("Cannot take core peripherals");

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.use_hse(8.MHz()).freeze();

    let mut delayer = cp.SYST.delay(&clocks);

    let gpioa = dp.GPIOA.split();

    // Push-pull mode for a fast interaction
    let ser_pin = gpioa.pa0.into_push_pull_output().erase();
    let rclk_pin = gpioa.pa1.into_push_pull_output().erase();
    let srclk_pin = gpioa.pa2.into_push_pull_output().erase();

    let en_pin = gpioa.pa3.into_push_pull_output().erase();
    let rw_pin = gpioa.pa4.into_push_pull_output().erase();
    let rs_pin = gpioa.pa5.into_push_pull_output().erase();

    let mut shift_register = ShiftRegister::new(ser_pin, rclk_pin, srclk_pin);
    let mut sender = ShiftRegisterSender::new(&mut shift_register, en_pin, rw_pin, rs_pin);

    rprintln!("wake up LCD1602");
    let mut lcd = Lcd::new(&mut sender, &mut delayer);
    lcd.default_setup();
    lcd.clear();

    // draw a little heart in CGRAM, then go back to DDRAM
    lcd.write_graph_to_cgram(1, &HEART);
    lcd.set_cursor_pos(Line::First, 0);

    lcd.write_message(&Message::new("hello, 74HC595", "LCD1602 8 bit"));

    // mark the end of second line with the heart
    lcd.set_cursor_pos(Line::Second, 15);
    lcd.write_graph_to_cur(1);

    rprintln!("message written");

    let mut seconds: u32 = 0;

    loop {
        lcd.delay_ms(1_000);
        seconds = seconds.wrapping_add(1);

        lcd.set_cursor_pos(Line::First, 14);
        // only 2 digits fit before the line ends
        write!(lcd, "{:02}", seconds % 100).ok();
    }
}
