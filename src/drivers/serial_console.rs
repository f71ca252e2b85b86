use embedded_hal::serial::Write;

/// Line-oriented status output over the UART.
pub struct SerialConsole<W> {
    uart: W,
}

impl<W: Write<u8>> SerialConsole<W> {
    pub fn new(uart: W) -> Self {
        Self { uart }
    }

    pub fn write_byte(&mut self, byte: u8) -> Result<(), W::Error> {
        nb::block!(self.uart.write(byte))
    }

    pub fn write_str(&mut self, s: &str) -> Result<(), W::Error> {
        for byte in s.bytes() {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    pub fn write_line(&mut self, s: &str) -> Result<(), W::Error> {
        self.write_str(s)?;
        self.write_str("\r\n")
    }

    // Debug helper - print hex value
    pub fn write_hex(&mut self, val: u8) -> Result<(), W::Error> {
        const HEX_CHARS: [u8; 16] = *b"0123456789ABCDEF";
        self.write_byte(HEX_CHARS[(val >> 4) as usize])?;
        self.write_byte(HEX_CHARS[(val & 0xF) as usize])
    }

    pub fn info(&mut self, msg: &str) -> Result<(), W::Error> {
        self.write_str("[INF] ")?;
        self.write_line(msg)
    }

    // Print formatted debug info
    pub fn debug(&mut self, msg: &str, val: u8) -> Result<(), W::Error> {
        self.write_str("[DBG] ")?;
        self.write_str(msg)?;
        self.write_str(": 0x")?;
        self.write_hex(val)?;
        self.write_str("\r\n")
    }

    pub fn flush(&mut self) -> Result<(), W::Error> {
        nb::block!(self.uart.flush())
    }

    pub fn release(self) -> W {
        self.uart
    }
}

impl<W: Write<u8>> ufmt::uWrite for SerialConsole<W> {
    type Error = W::Error;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        SerialConsole::write_str(self, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::serial::{Mock as SerialMock, Transaction};

    #[test]
    fn debug_line_format() {
        let uart = SerialMock::new(&[Transaction::write_many(b"[DBG] State: 0x3F\r\n")]);
        let mut console = SerialConsole::new(uart);
        console.debug("State", 0x3f).unwrap();
        console.release().done();
    }

    #[test]
    fn info_line_format() {
        let uart = SerialMock::new(&[
            Transaction::write_many(b"[INF] Ready\r\n"),
            Transaction::flush(),
        ]);
        let mut console = SerialConsole::new(uart);
        console.info("Ready").unwrap();
        console.flush().unwrap();
        console.release().done();
    }

    #[test]
    fn ufmt_goes_through_the_uart() {
        let uart = SerialMock::new(&[Transaction::write_many(b"tick 42\n")]);
        let mut console = SerialConsole::new(uart);
        ufmt::uwriteln!(&mut console, "tick {}", 42u8).unwrap();
        console.release().done();
    }
}
