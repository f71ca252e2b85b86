//! Display loop of the countdown firmware
//! One call to `update` is one pass of the main loop.

use embedded_hal::blocking::delay::DelayMs;
use embedded_hal::serial::Write;

use crate::config::OVERTIME_FLASH_MS;
use crate::countdown::{Countdown, Phase};
use crate::drivers::{LedMatrix, SerialConsole, ShiftOut};
use crate::error::Error;
use crate::render::{running_layers, IDLE_FRAME, OVERTIME_OFF, OVERTIME_ON};

/// Main application state and logic
pub struct Application<S, D> {
    matrix: LedMatrix<S>,
    delay: D,
    last_phase: Option<Phase>,
}

impl<S: ShiftOut, D: DelayMs<u16>> Application<S, D> {
    pub fn new(matrix: LedMatrix<S>, delay: D) -> Self {
        Self {
            matrix,
            delay,
            last_phase: None,
        }
    }

    /// Draw whatever `countdown` asks for, then report phase changes.
    ///
    /// The frame goes out before the log line, so a slow or broken UART
    /// never holds back the scan. A failed report is retried next pass.
    pub fn update<W: Write<u8>>(
        &mut self,
        countdown: Countdown,
        console: &mut SerialConsole<W>,
    ) -> Result<Phase, Error<S::Error, W::Error>> {
        let phase = countdown.phase();
        self.render(phase).map_err(Error::Pin)?;
        self.report(phase, console).map_err(Error::Serial)?;
        Ok(phase)
    }

    /// Render one pass for `phase`.
    ///
    /// Overtime blocks for a full blink period; a button press during it
    /// only shows up on the next pass.
    pub fn render(&mut self, phase: Phase) -> Result<(), S::Error> {
        match phase {
            Phase::Idle => self.matrix.show(IDLE_FRAME),
            Phase::Overtime => {
                self.matrix.show(OVERTIME_ON)?;
                self.delay.delay_ms(OVERTIME_FLASH_MS);
                self.matrix.show(OVERTIME_OFF)?;
                self.delay.delay_ms(OVERTIME_FLASH_MS);
                Ok(())
            }
            Phase::Running(state) => {
                for layer in running_layers(state) {
                    self.matrix.show(layer)?;
                }
                Ok(())
            }
        }
    }

    fn report<W: Write<u8>>(
        &mut self,
        phase: Phase,
        console: &mut SerialConsole<W>,
    ) -> Result<(), W::Error> {
        if self.last_phase == Some(phase) {
            return Ok(());
        }
        let previous = self.last_phase;

        match phase {
            Phase::Idle if previous.is_none() => console.info("Idle")?,
            Phase::Idle => console.info("Countdown reset")?,
            Phase::Running(state) => {
                if !matches!(previous, Some(Phase::Running(_))) {
                    console.info("Countdown started")?;
                }
                console.debug("State", state)?;
            }
            Phase::Overtime => console.info("Overtime")?,
        }

        self.last_phase = Some(phase);
        Ok(())
    }

    pub fn release(self) -> (LedMatrix<S>, D) {
        (self.matrix, self.delay)
    }
}
