use crate::config::FRAME_LEN;
use crate::drivers::ShiftOut;
use crate::render::{Frame, OVERTIME_OFF};

/// GTM2088RGB 8x8 common-cathode matrix behind four 74HC595s.
pub struct LedMatrix<S> {
    output: S,
}

impl<S: ShiftOut> LedMatrix<S> {
    pub fn new(output: S) -> Self {
        LedMatrix { output }
    }

    /// Push one layer to the matrix.
    ///
    /// The color bytes are inverted in place (a lit LED needs a low line),
    /// so `frame` holds the wire bytes afterwards, not the caller's pattern.
    pub fn display(&mut self, frame: &mut [u8; FRAME_LEN]) -> Result<(), S::Error> {
        for color in &mut frame[1..] {
            *color = !*color;
        }
        self.output.shift_out(frame)
    }

    /// Same as [`display`](Self::display) without touching the caller's frame.
    pub fn show(&mut self, frame: Frame) -> Result<(), S::Error> {
        let mut bytes = frame.to_bytes();
        self.display(&mut bytes)
    }

    pub fn clear(&mut self) -> Result<(), S::Error> {
        self.show(OVERTIME_OFF)
    }

    pub fn release(self) -> S {
        self.output
    }
}
