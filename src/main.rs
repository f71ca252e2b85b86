#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

#[cfg(target_arch = "avr")]
mod firmware {
    use avr_device::atmega328p::Peripherals;
    use avr_device::interrupt::{self, Mutex};
    use core::cell::RefCell;
    use embedded_hal::digital::v2::OutputPin;
    use panic_halt as _;

    use led_countdown_firmware::config::{SHIFT_BIT_ORDER, TICK_COMPARE, UART_BAUD};
    use led_countdown_firmware::drivers::{
        ButtonEvent, ButtonHandler, LedMatrix, SerialConsole, ShiftRegister,
    };
    use led_countdown_firmware::hal::board::{self, Pins, BUTTON_PCINT};
    use led_countdown_firmware::hal::{Delay, PinChange, Prescaler, TickTimer, Usart0};
    use led_countdown_firmware::{Application, ButtonAction, Error, SharedCountdown};

    // Shared between the interrupt handlers and the display loop
    static COUNTDOWN: SharedCountdown = SharedCountdown::new();
    static BUTTON: Mutex<RefCell<Option<ButtonHandler<board::Button>>>> =
        Mutex::new(RefCell::new(None));
    static TICK_TIMER: Mutex<RefCell<Option<TickTimer>>> = Mutex::new(RefCell::new(None));

    #[avr_device::entry]
    fn main() -> ! {
        let dp = Peripherals::take().unwrap();
        let pins = Pins::new(dp.PORTB, dp.PORTC);

        // Shift port first: the driver only accepts configured outputs
        let shift_register = match ShiftRegister::new(
            pins.shift_data.into_output(),
            pins.shift_clock.into_output(),
            pins.shift_latch.into_output(),
            SHIFT_BIT_ORDER,
        ) {
            Ok(sr) => sr,
            Err(e) => match e {},
        };
        let mut status_led = pins.status_led.into_output();

        let button = ButtonHandler::new(pins.button.into_input());
        interrupt::free(|cs| {
            BUTTON.borrow(cs).replace(Some(button));
        });
        let mut pin_change = PinChange::new(dp.EXINT);
        pin_change.enable(BUTTON_PCINT);

        let mut console = SerialConsole::new(Usart0::new(dp.USART0, UART_BAUD));

        let timer = TickTimer::new(dp.TC1, Prescaler::Div1024, TICK_COMPARE);
        interrupt::free(|cs| {
            TICK_TIMER.borrow(cs).replace(Some(timer));
        });

        // Dark matrix until the loop draws the first frame
        let mut matrix = LedMatrix::new(shift_register);
        if let Err(e) = matrix.clear() {
            match e {}
        }
        let mut app = Application::new(matrix, Delay::new(dp.TC0));

        // Enable interrupts globally
        unsafe { avr_device::interrupt::enable() };

        console.info("Countdown display v0.1.0").ok();
        console.flush().ok();

        loop {
            let countdown = COUNTDOWN.snapshot();

            let led = if countdown.enabled() {
                status_led.set_high()
            } else {
                status_led.set_low()
            };
            if let Err(e) = led {
                match e {}
            }

            match app.update(countdown, &mut console) {
                Ok(_) => {}
                Err(Error::Pin(e)) => match e {},
                Err(Error::Serial(e)) => match e {},
            }
        }
    }

    #[avr_device::interrupt(atmega328p)]
    fn PCINT0() {
        interrupt::free(|cs| {
            let mut button = BUTTON.borrow(cs).borrow_mut();
            let Some(button) = button.as_mut() else {
                return;
            };

            // Fires on both edges, only the press counts
            let pressed = matches!(button.poll(), Ok(Some(ButtonEvent::Pressed)));
            if COUNTDOWN.button_edge(pressed) == Some(ButtonAction::Started) {
                if let Some(timer) = TICK_TIMER.borrow(cs).borrow_mut().as_mut() {
                    timer.reset_counter();
                }
            }
        });
    }

    #[avr_device::interrupt(atmega328p)]
    fn TIMER1_COMPA() {
        COUNTDOWN.tick();
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {}
