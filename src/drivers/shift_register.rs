//! Bit-banged driver for cascaded 74HC595 shift registers

use embedded_hal::digital::v2::OutputPin;

/// Order in which the bits of each byte go out on the data line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitOrder {
    MsbFirst,
    LsbFirst,
}

impl BitOrder {
    #[inline]
    fn bit(self, byte: u8, index: u8) -> bool {
        match self {
            BitOrder::MsbFirst => byte & (0x80 >> index) != 0,
            BitOrder::LsbFirst => byte & (1 << index) != 0,
        }
    }
}

/// Anything that can push a byte string out to a chain of shift registers
/// and latch it.
pub trait ShiftOut {
    type Error;

    fn shift_out(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// Three output lines wired to SER, SRCLK and RCLK.
///
/// Only takes pins that already are outputs, so it cannot be used before the
/// port is configured. Not reentrant: call it from the main loop only.
pub struct ShiftRegister<DATA, CLOCK, LATCH> {
    data: DATA,
    clock: CLOCK,
    latch: LATCH,
    order: BitOrder,
}

impl<DATA, CLOCK, LATCH, E> ShiftRegister<DATA, CLOCK, LATCH>
where
    DATA: OutputPin<Error = E>,
    CLOCK: OutputPin<Error = E>,
    LATCH: OutputPin<Error = E>,
{
    /// Take the pins and drive all of them low.
    pub fn new(data: DATA, clock: CLOCK, latch: LATCH, order: BitOrder) -> Result<Self, E> {
        let mut sr = Self {
            data,
            clock,
            latch,
            order,
        };
        sr.data.set_low()?;
        sr.latch.set_low()?;
        sr.clock.set_low()?;
        Ok(sr)
    }

    /// Give the pins back.
    pub fn release(self) -> (DATA, CLOCK, LATCH) {
        (self.data, self.clock, self.latch)
    }

    fn write_bit(&mut self, high: bool) -> Result<(), E> {
        if high {
            self.data.set_high()?;
        } else {
            self.data.set_low()?;
        }
        // one rising edge per bit
        self.clock.set_high()?;
        self.clock.set_low()
    }
}

impl<DATA, CLOCK, LATCH, E> ShiftOut for ShiftRegister<DATA, CLOCK, LATCH>
where
    DATA: OutputPin<Error = E>,
    CLOCK: OutputPin<Error = E>,
    LATCH: OutputPin<Error = E>,
{
    type Error = E;

    fn shift_out(&mut self, bytes: &[u8]) -> Result<(), E> {
        // latch stays low while the bits travel
        self.latch.set_low()?;
        self.clock.set_low()?;

        for &byte in bytes {
            for index in 0..8 {
                let high = self.order.bit(byte, index);
                self.write_bit(high)?;
            }
        }

        // parallel load
        self.latch.set_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::pin::{Mock as PinMock, State, Transaction as PinTransaction};
    use embedded_hal_mock::MockError;
    use std::io::ErrorKind;
    use std::vec::Vec;

    fn levels(bits: &[u8]) -> Vec<PinTransaction> {
        bits.iter()
            .map(|&b| PinTransaction::set(if b == 1 { State::High } else { State::Low }))
            .collect()
    }

    fn clock_pulses(count: usize) -> Vec<PinTransaction> {
        let mut transactions = Vec::new();
        for _ in 0..count {
            transactions.push(PinTransaction::set(State::High));
            transactions.push(PinTransaction::set(State::Low));
        }
        transactions
    }

    fn init() -> Vec<PinTransaction> {
        std::vec![PinTransaction::set(State::Low)]
    }

    #[test]
    fn single_byte_msb_first() {
        let data = PinMock::new(&[init(), levels(&[1, 0, 1, 0, 0, 1, 0, 1])].concat());
        let clock = PinMock::new(
            &[init(), std::vec![PinTransaction::set(State::Low)], clock_pulses(8)].concat(),
        );
        let latch = PinMock::new(&[
            PinTransaction::set(State::Low),
            PinTransaction::set(State::Low),
            PinTransaction::set(State::High),
        ]);

        let mut sr = ShiftRegister::new(data, clock, latch, BitOrder::MsbFirst).unwrap();
        sr.shift_out(&[0xA5]).unwrap();

        let (mut data, mut clock, mut latch) = sr.release();
        data.done();
        clock.done();
        latch.done();
    }

    #[test]
    fn lsb_first_reverses_each_byte() {
        let data = PinMock::new(
            &[init(), levels(&[1, 0, 0, 0, 0, 0, 0, 0]), levels(&[0, 0, 0, 0, 1, 1, 1, 1])]
                .concat(),
        );
        let clock = PinMock::new(
            &[init(), std::vec![PinTransaction::set(State::Low)], clock_pulses(16)].concat(),
        );
        let latch = PinMock::new(&[
            PinTransaction::set(State::Low),
            PinTransaction::set(State::Low),
            PinTransaction::set(State::High),
        ]);

        let mut sr = ShiftRegister::new(data, clock, latch, BitOrder::LsbFirst).unwrap();
        sr.shift_out(&[0x01, 0xF0]).unwrap();

        let (mut data, mut clock, mut latch) = sr.release();
        data.done();
        clock.done();
        latch.done();
    }

    #[test]
    fn empty_buffer_only_latches() {
        let data = PinMock::new(&init());
        let clock = PinMock::new(&[init(), init()].concat());
        let latch = PinMock::new(&[
            PinTransaction::set(State::Low),
            PinTransaction::set(State::Low),
            PinTransaction::set(State::High),
        ]);

        let mut sr = ShiftRegister::new(data, clock, latch, BitOrder::MsbFirst).unwrap();
        sr.shift_out(&[]).unwrap();

        let (mut data, mut clock, mut latch) = sr.release();
        data.done();
        clock.done();
        latch.done();
    }

    #[test]
    fn pin_error_is_propagated() {
        let err = MockError::Io(ErrorKind::NotConnected);
        let data = PinMock::new(&[
            PinTransaction::set(State::Low),
            PinTransaction::set(State::High).with_error(err.clone()),
        ]);
        let clock = PinMock::new(&[init(), init()].concat());
        let latch = PinMock::new(&[
            PinTransaction::set(State::Low),
            PinTransaction::set(State::Low),
        ]);

        let mut sr = ShiftRegister::new(data, clock, latch, BitOrder::MsbFirst).unwrap();
        assert_eq!(sr.shift_out(&[0x80]), Err(err));

        let (mut data, mut clock, mut latch) = sr.release();
        data.done();
        clock.done();
        latch.done();
    }

    #[test]
    fn bit_order_helper() {
        assert!(BitOrder::MsbFirst.bit(0x80, 0));
        assert!(!BitOrder::MsbFirst.bit(0x80, 7));
        assert!(BitOrder::LsbFirst.bit(0x80, 7));
        assert!(!BitOrder::LsbFirst.bit(0x80, 0));
    }
}
