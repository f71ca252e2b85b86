use embedded_hal::digital::v2::InputPin;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ButtonEvent {
    Pressed,
    Released,
}

/// Start/stop button, reads high while pressed.
///
/// The pin-change interrupt fires on both edges; `poll` tells them apart by
/// comparing against the level seen last time.
pub struct ButtonHandler<P> {
    pin: P,
    pressed: bool,
}

impl<P: InputPin> ButtonHandler<P> {
    pub fn new(pin: P) -> Self {
        Self { pin, pressed: false }
    }

    pub fn is_pressed(&self) -> Result<bool, P::Error> {
        self.pin.is_high()
    }

    pub fn poll(&mut self) -> Result<Option<ButtonEvent>, P::Error> {
        let level = self.is_pressed()?;
        if level == self.pressed {
            return Ok(None);
        }
        self.pressed = level;
        Ok(Some(if level {
            ButtonEvent::Pressed
        } else {
            ButtonEvent::Released
        }))
    }

    pub fn release(self) -> P {
        self.pin
    }
}
