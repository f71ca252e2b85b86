//! Configuration constants for the countdown display firmware

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// UART baud rate
pub const UART_BAUD: u32 = 9600;

/// Timer1 prescaler for the countdown tick
pub const TICK_PRESCALER: u32 = 1024;

/// Timer1 compare value, 3.75 s per tick at 16 MHz / 1024
pub const TICK_COMPARE: u16 = 58_593;

/// Counter value while nothing is running
pub const IDLE_STATE: u8 = 255;

/// Last counter value that still belongs to the countdown
pub const LAST_RUNNING_STATE: u8 = 63;

/// First counter value rendered with the mirrored (right side) tables
pub const MIRROR_STATE: u8 = 32;

/// Rows of the LED matrix, one shift-out per row per frame
pub const MATRIX_ROWS: u8 = 8;

/// Bytes per matrix layer: row select, red, green, blue
pub const FRAME_LEN: usize = 4;

/// Half period of the overtime blink in milliseconds
pub const OVERTIME_FLASH_MS: u16 = 500;

/// Bit order used when clocking bytes into the shift registers
pub const SHIFT_BIT_ORDER: crate::drivers::BitOrder = crate::drivers::BitOrder::MsbFirst;
