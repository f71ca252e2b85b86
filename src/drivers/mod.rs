pub mod button_handler;
pub mod led_matrix;
pub mod serial_console;
pub mod shift_register;

pub use button_handler::{ButtonEvent, ButtonHandler};
pub use led_matrix::LedMatrix;
pub use serial_console::SerialConsole;
pub use shift_register::{BitOrder, ShiftOut, ShiftRegister};
