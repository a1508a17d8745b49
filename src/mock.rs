//! Recording pins and delay for host tests
//!
//! Every pin edge and every requested delay goes into one ordered log.
//! The log can be replayed through a software 74HC595 and LCD1602 bus model.

use std::{
    cell::{Cell, RefCell},
    convert::Infallible,
    rc::Rc,
};

use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType, OutputPin, PinState},
};

use crate::command::RegisterSelection;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum PinId {
    Ser,
    Rclk,
    Srclk,
    En,
    Rw,
    Rs,
}

impl PinId {
    const COUNT: usize = 6;

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Event {
    Pin(PinId, PinState),
    DelayNs(u64),
}

/// One byte LCD1602 sampled on a falling edge of EN
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) struct Transfer {
    pub(crate) rs: RegisterSelection,
    pub(crate) rw: PinState,
    pub(crate) byte: u8,
    /// Delay requested after EN falls, before any other pin moves
    pub(crate) settle_ns: u64,
}

impl Transfer {
    pub(crate) fn command(&self) -> Option<u8> {
        (self.rs == RegisterSelection::Command).then_some(self.byte)
    }

    pub(crate) fn data(&self) -> Option<u8> {
        (self.rs == RegisterSelection::Data).then_some(self.byte)
    }
}

type Levels = [PinState; PinId::COUNT];

#[derive(Clone)]
pub(crate) struct Recorder {
    log: Rc<RefCell<Vec<Event>>>,
    // pin levels at the start of the log
    start: Rc<Cell<Levels>>,
}

impl Default for Recorder {
    fn default() -> Self {
        Self {
            log: Rc::default(),
            start: Rc::new(Cell::new([PinState::Low; PinId::COUNT])),
        }
    }
}

impl Recorder {
    pub(crate) fn pin(&self, id: PinId) -> MockPin {
        MockPin {
            id,
            log: self.log.clone(),
        }
    }

    pub(crate) fn delay(&self) -> MockDelay {
        MockDelay {
            log: self.log.clone(),
        }
    }

    pub(crate) fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    /// Drop recorded events, pin levels carry over
    pub(crate) fn clear(&self) {
        let mut levels = self.start.get();
        let mut log = self.log.borrow_mut();
        log.iter().for_each(|event| {
            if let Event::Pin(id, level) = event {
                levels[id.index()] = *level;
            }
        });
        self.start.set(levels);
        log.clear();
    }

    pub(crate) fn total_delay_ns(&self) -> u64 {
        self.log
            .borrow()
            .iter()
            .map(|event| match event {
                Event::DelayNs(ns) => *ns,
                Event::Pin(..) => 0,
            })
            .sum()
    }

    pub(crate) fn rising_edges(&self, id: PinId) -> usize {
        let mut count = 0;
        self.replay(|event, before| {
            if let Event::Pin(pin, PinState::High) = event {
                if pin == id && before[id.index()] == PinState::Low {
                    count += 1;
                }
            }
        });
        count
    }

    /// SER level seen at each rising edge of SRCLK
    pub(crate) fn sampled_on_clock(&self) -> Vec<bool> {
        let mut sampled = Vec::new();
        self.replay(|event, before| {
            if Self::is_rising(event, before, PinId::Srclk) {
                sampled.push(before[PinId::Ser.index()] == PinState::High);
            }
        });
        sampled
    }

    /// 74HC595 output value after each rising edge of RCLK
    pub(crate) fn outputs(&self) -> Vec<u8> {
        let mut shift_stage = 0u8;
        let mut outputs = Vec::new();
        self.replay(|event, before| {
            if Self::is_rising(event, before, PinId::Srclk) {
                let bit = u8::from(before[PinId::Ser.index()] == PinState::High);
                shift_stage = (shift_stage << 1) | bit;
            }
            if Self::is_rising(event, before, PinId::Rclk) {
                outputs.push(shift_stage);
            }
        });
        outputs
    }

    /// Every byte LCD1602 would have sampled
    pub(crate) fn transfers(&self) -> Vec<Transfer> {
        let mut shift_stage = 0u8;
        let mut storage = 0u8;
        let mut transfers: Vec<Transfer> = Vec::new();
        let mut settling = false;

        self.replay(|event, before| match event {
            Event::DelayNs(ns) => {
                if settling {
                    if let Some(last) = transfers.last_mut() {
                        last.settle_ns += ns;
                    }
                }
            }
            Event::Pin(id, level) => {
                settling = false;

                if Self::is_rising(event, before, PinId::Srclk) {
                    let bit = u8::from(before[PinId::Ser.index()] == PinState::High);
                    shift_stage = (shift_stage << 1) | bit;
                }
                if Self::is_rising(event, before, PinId::Rclk) {
                    storage = shift_stage;
                }
                if id == PinId::En && level == PinState::Low && before[id.index()] == PinState::High
                {
                    let rs = match before[PinId::Rs.index()] {
                        PinState::High => RegisterSelection::Data,
                        PinState::Low => RegisterSelection::Command,
                    };
                    transfers.push(Transfer {
                        rs,
                        rw: before[PinId::Rw.index()],
                        byte: storage,
                        settle_ns: 0,
                    });
                    settling = true;
                }
            }
        });

        transfers
    }

    fn is_rising(event: Event, before: &Levels, id: PinId) -> bool {
        event == Event::Pin(id, PinState::High) && before[id.index()] == PinState::Low
    }

    /// Walk the log, handing each event together with the pin levels before it
    fn replay(&self, mut visit: impl FnMut(Event, &Levels)) {
        let mut levels = self.start.get();

        self.log.borrow().iter().for_each(|event| {
            visit(*event, &levels);
            if let Event::Pin(id, level) = event {
                levels[id.index()] = *level;
            }
        });
    }
}

pub(crate) struct MockPin {
    id: PinId,
    log: Rc<RefCell<Vec<Event>>>,
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Pin(self.id, PinState::Low));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Pin(self.id, PinState::High));
        Ok(())
    }
}

pub(crate) struct MockDelay {
    log: Rc<RefCell<Vec<Event>>>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::DelayNs(ns as u64));
    }

    fn delay_us(&mut self, us: u32) {
        self.log.borrow_mut().push(Event::DelayNs(us as u64 * 1_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::DelayNs(ms as u64 * 1_000_000));
    }
}
