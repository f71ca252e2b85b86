//! Error types shared by the drivers

/// Failure of a peripheral the display loop talks to.
///
/// On the AVR HAL both inner types are `Infallible`, so this never exists at
/// runtime there; the mock HAL used by the tests can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<P, S = P> {
    /// GPIO write to the shift-register lines failed
    Pin(P),
    /// UART write from the console failed
    Serial(S),
}

