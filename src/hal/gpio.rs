use avr_device::atmega328p::{PORTB, PORTC};
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::{InputPin, OutputPin};

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

/// Pin `PIN` of `PORT`, direction tracked in the type.
#[derive(Debug)]
pub struct Pin<PORT, const PIN: u8, MODE> {
    _port: PhantomData<PORT>,
    _mode: PhantomData<MODE>,
}

impl<PORT, const P: u8, MODE> Pin<PORT, P, MODE> {
    const fn new() -> Self {
        Pin {
            _port: PhantomData,
            _mode: PhantomData,
        }
    }
}

macro_rules! impl_port {
    ($PORT:ident, $ddr:ident, $port:ident, $pin:ident) => {
        impl<const P: u8, MODE: PinMode> Pin<$PORT, P, MODE> {
            pub fn into_output(self) -> Pin<$PORT, P, Output> {
                // Set DDRx bit
                unsafe {
                    (*$PORT::ptr()).$ddr.modify(|r, w| w.bits(r.bits() | (1 << P)));
                }
                Pin::new()
            }

            pub fn into_input(self) -> Pin<$PORT, P, Input> {
                // Clear DDRx bit and disable pull-up
                unsafe {
                    (*$PORT::ptr()).$ddr.modify(|r, w| w.bits(r.bits() & !(1 << P)));
                    (*$PORT::ptr()).$port.modify(|r, w| w.bits(r.bits() & !(1 << P)));
                }
                Pin::new()
            }
        }

        impl<const P: u8> OutputPin for Pin<$PORT, P, Output> {
            type Error = Infallible;

            #[inline]
            fn set_high(&mut self) -> Result<(), Infallible> {
                unsafe {
                    (*$PORT::ptr()).$port.modify(|r, w| w.bits(r.bits() | (1 << P)));
                }
                Ok(())
            }

            #[inline]
            fn set_low(&mut self) -> Result<(), Infallible> {
                unsafe {
                    (*$PORT::ptr()).$port.modify(|r, w| w.bits(r.bits() & !(1 << P)));
                }
                Ok(())
            }
        }

        impl<const P: u8> InputPin for Pin<$PORT, P, Input> {
            type Error = Infallible;

            #[inline]
            fn is_high(&self) -> Result<bool, Infallible> {
                let bits = unsafe { (*$PORT::ptr()).$pin.read().bits() };
                Ok(bits & (1 << P) != 0)
            }

            #[inline]
            fn is_low(&self) -> Result<bool, Infallible> {
                self.is_high().map(|high| !high)
            }
        }
    };
}

impl_port!(PORTB, ddrb, portb, pinb);
impl_port!(PORTC, ddrc, portc, pinc);

// Countdown board pin definitions
pub mod board {
    use super::*;

    // Start/stop button, PCINT7
    pub type Button = Pin<PORTB, 7, Input>;
    pub type StatusLed = Pin<PORTB, 5, Output>;

    // 74HC595 chain (PORTC)
    pub type ShiftClock = Pin<PORTC, 0, Output>;
    pub type ShiftLatch = Pin<PORTC, 1, Output>;
    pub type ShiftData = Pin<PORTC, 2, Output>;

    /// Pin-change mask bit of the button in PCMSK0
    pub const BUTTON_PCINT: u8 = 7;

    /// Every pin the firmware uses, all still inputs as after reset.
    pub struct Pins {
        pub button: Pin<PORTB, 7, Input>,
        pub status_led: Pin<PORTB, 5, Input>,
        pub shift_clock: Pin<PORTC, 0, Input>,
        pub shift_latch: Pin<PORTC, 1, Input>,
        pub shift_data: Pin<PORTC, 2, Input>,
    }

    impl Pins {
        /// Claim the ports; owning them is what makes the pins unique.
        pub fn new(_portb: PORTB, _portc: PORTC) -> Self {
            Self {
                button: Pin::new(),
                status_led: Pin::new(),
                shift_clock: Pin::new(),
                shift_latch: Pin::new(),
                shift_data: Pin::new(),
            }
        }
    }
}
