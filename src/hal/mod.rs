pub mod exint;
pub mod gpio;
pub mod timer;
pub mod uart;

// Re-export commonly used types
pub use exint::PinChange;
pub use gpio::board;
pub use gpio::{Input, Output, Pin};
pub use timer::{Delay, Prescaler, TickTimer};
pub use uart::Usart0;
