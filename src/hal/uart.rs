use avr_device::atmega328p::USART0;
use core::convert::Infallible;
use embedded_hal::serial::Write;

use crate::config::CPU_FREQ_HZ;

const TXEN0: u8 = 3;
const UDRE0: u8 = 5;
// 8 data bits, no parity, 1 stop bit
const UCSZ_8N1: u8 = 0x06;

/// Polled transmitter on USART0.
pub struct Usart0 {
    usart: USART0,
}

impl Usart0 {
    pub fn new(usart: USART0, baud: u32) -> Self {
        // 103 for 9600 at 16MHz
        let ubrr = (CPU_FREQ_HZ / (16 * baud) - 1) as u16;
        unsafe {
            usart.ubrr0.write(|w| w.bits(ubrr));
            usart.ucsr0c.write(|w| w.bits(UCSZ_8N1));
            usart.ucsr0b.write(|w| w.bits(1 << TXEN0));
        }
        Self { usart }
    }

    fn data_register_empty(&self) -> bool {
        self.usart.ucsr0a.read().bits() & (1 << UDRE0) != 0
    }
}

impl Write<u8> for Usart0 {
    type Error = Infallible;

    fn write(&mut self, byte: u8) -> nb::Result<(), Infallible> {
        if !self.data_register_empty() {
            return Err(nb::Error::WouldBlock);
        }
        unsafe {
            self.usart.udr0.write(|w| w.bits(byte));
        }
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Infallible> {
        if self.data_register_empty() {
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }
}
