//! Countdown counter shared between the interrupt handlers and the main loop

use core::cell::Cell;

use critical_section::Mutex;

use crate::config::{IDLE_STATE, LAST_RUNNING_STATE};

/// What the display loop has to draw for a given counter value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the button, all blue
    Idle,
    /// Counting, carries the counter value (0..=63)
    Running(u8),
    /// Countdown expired, blinking red
    Overtime,
}

impl Phase {
    pub fn from_state(state: u8) -> Self {
        match state {
            IDLE_STATE => Phase::Idle,
            s if s > LAST_RUNNING_STATE => Phase::Overtime,
            s => Phase::Running(s),
        }
    }
}

/// Result of a button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Countdown started from idle, the hardware tick counter must be zeroed
    Started,
    /// Running or overtime countdown was cancelled back to idle
    Stopped,
}

/// Counter value plus the gate that lets the timer advance it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    state: u8,
    enabled: bool,
}

impl Countdown {
    pub const fn new() -> Self {
        Self {
            state: IDLE_STATE,
            enabled: false,
        }
    }

    #[inline]
    pub fn state(&self) -> u8 {
        self.state
    }

    #[inline]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        Phase::from_state(self.state)
    }

    /// Toggle between idle and running on a press edge.
    pub fn press_button(&mut self) -> ButtonAction {
        if self.state == IDLE_STATE {
            self.enabled = true;
            self.state = 0;
            ButtonAction::Started
        } else {
            self.enabled = false;
            self.state = IDLE_STATE;
            ButtonAction::Stopped
        }
    }

    /// Pin-change handler body. The interrupt fires on both edges, only the
    /// press (pin high) does anything.
    pub fn on_button_edge(&mut self, pressed: bool) -> Option<ButtonAction> {
        if pressed {
            Some(self.press_button())
        } else {
            None
        }
    }

    /// Timer compare-match handler body.
    pub fn tick(&mut self) {
        if !self.enabled {
            return;
        }
        self.state = self.state.wrapping_add(1);
        if self.state > LAST_RUNNING_STATE {
            self.enabled = false;
        }
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Interrupt-safe home for the one [`Countdown`] of the firmware.
///
/// Every access runs inside a critical section, so the main loop never
/// observes a half-updated `(state, enabled)` pair.
pub struct SharedCountdown {
    inner: Mutex<Cell<Countdown>>,
}

impl SharedCountdown {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(Countdown::new())),
        }
    }

    pub fn button_edge(&self, pressed: bool) -> Option<ButtonAction> {
        self.update(|countdown| countdown.on_button_edge(pressed))
    }

    pub fn tick(&self) {
        self.update(Countdown::tick)
    }

    pub fn snapshot(&self) -> Countdown {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }

    fn update<R>(&self, f: impl FnOnce(&mut Countdown) -> R) -> R {
        critical_section::with(|cs| {
            let cell = self.inner.borrow(cs);
            let mut countdown = cell.get();
            let result = f(&mut countdown);
            cell.set(countdown);
            result
        })
    }
}

impl Default for SharedCountdown {
    fn default() -> Self {
        Self::new()
    }
}
