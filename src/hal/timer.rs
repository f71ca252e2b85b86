use avr_device::atmega328p::{TC0, TC1};
use embedded_hal::blocking::delay::DelayMs;

const WGM12: u8 = 3;
const OCIE1A: u8 = 1;

#[derive(Clone, Copy)]
pub enum Prescaler {
    Stop = 0,
    Direct = 1,
    Div8 = 2,
    Div64 = 3,
    Div256 = 4,
    Div1024 = 5,
}

/// Timer1 in CTC mode, firing TIMER1_COMPA once per period.
pub struct TickTimer {
    tc1: TC1,
}

impl TickTimer {
    pub fn new(tc1: TC1, prescaler: Prescaler, compare: u16) -> Self {
        unsafe {
            tc1.tccr1a.write(|w| w.bits(0));
            tc1.tccr1b.write(|w| w.bits((1 << WGM12) | prescaler as u8));
            tc1.tcnt1.write(|w| w.bits(0));
            tc1.ocr1a.write(|w| w.bits(compare));
            tc1.timsk1.modify(|r, w| w.bits(r.bits() | (1 << OCIE1A)));
        }
        Self { tc1 }
    }

    /// Restart the current period from zero.
    pub fn reset_counter(&mut self) {
        unsafe {
            self.tc1.tcnt1.write(|w| w.bits(0));
        }
    }
}

/// Millisecond busy-wait on Timer0
pub struct Delay {
    tc0: TC0,
}

impl Delay {
    pub fn new(tc0: TC0) -> Self {
        unsafe {
            // normal mode
            tc0.tccr0a.write(|w| w.bits(0));
            tc0.tccr0b.write(|w| w.bits(Prescaler::Stop as u8));
        }
        Self { tc0 }
    }
}

impl DelayMs<u16> for Delay {
    fn delay_ms(&mut self, ms: u16) {
        // 16MHz/64 = 250kHz, 250 ticks = 1ms
        unsafe {
            self.tc0.tcnt0.write(|w| w.bits(0));
            self.tc0.tccr0b.write(|w| w.bits(Prescaler::Div64 as u8));
        }

        for _ in 0..ms {
            while self.tc0.tcnt0.read().bits() < 250 {}
            unsafe {
                self.tc0.tcnt0.write(|w| w.bits(0));
            }
        }

        unsafe {
            self.tc0.tccr0b.write(|w| w.bits(Prescaler::Stop as u8));
        }
    }
}
