use avr_device::atmega328p::EXINT;

const PCIE0: u8 = 0;

/// Pin-change interrupts of group 0 (PCINT0..7, port B).
pub struct PinChange {
    exint: EXINT,
}

impl PinChange {
    pub fn new(exint: EXINT) -> Self {
        Self { exint }
    }

    /// Unmask `pcint` and enable the group interrupt.
    pub fn enable(&mut self, pcint: u8) {
        unsafe {
            self.exint.pcmsk0.modify(|r, w| w.bits(r.bits() | (1 << pcint)));
            self.exint.pcicr.modify(|r, w| w.bits(r.bits() | (1 << PCIE0)));
        }
    }
}
