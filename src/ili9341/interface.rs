//! Display interface using SPI
//!
//! The ILI9341 samples the D/C line once per transfer, so D/C is always
//! driven before any byte is clocked out. CS is driven by hand so that a
//! command and its parameters can share one CS frame.
use display_interface::DisplayError;
use embedded_hal::{digital::OutputPin, spi::SpiBus};

/// Command/data transport to the controller.
///
/// Transfers are blocking: a call returns once the bytes are on the wire.
pub trait Transport {
    /// Send one command byte with D/C low.
    ///
    /// With `hold_select` the chip select stays asserted so that the next
    /// [`Transport::send_data`] belongs to the same transaction.
    fn send_command(&mut self, opcode: u8, hold_select: bool) -> Result<(), DisplayError>;

    /// Send bytes with D/C high and release chip select. Empty `data` is a no-op.
    fn send_data(&mut self, data: &[u8]) -> Result<(), DisplayError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send_command(&mut self, opcode: u8, hold_select: bool) -> Result<(), DisplayError> {
        (**self).send_command(opcode, hold_select)
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        (**self).send_data(data)
    }
}

/// SPI bus plus D/C and CS lines
pub struct DisplayInterface<SPI, DC, CS> {
    /// SPI bus, CS is not managed by it
    spi: SPI,
    /// Data/Command Control Pin (High for data, Low for command)
    dc: DC,
    /// Chip select, active low
    cs: CS,
}

impl<SPI, DC, CS> DisplayInterface<SPI, DC, CS> {
    /// Wrap an SPI bus and its control lines
    pub fn new(spi: SPI, dc: DC, cs: CS) -> Self {
        DisplayInterface { spi, dc, cs }
    }

    /// Give back the bus and pins
    pub fn release(self) -> (SPI, DC, CS) {
        (self.spi, self.dc, self.cs)
    }
}

impl<SPI, DC, CS> DisplayInterface<SPI, DC, CS>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
{
    fn select(&mut self) -> Result<(), DisplayError> {
        self.cs.set_low().map_err(|_| DisplayError::CSError)
    }

    fn deselect(&mut self) -> Result<(), DisplayError> {
        self.cs.set_high().map_err(|_| DisplayError::CSError)
    }

    /// Clock out `bytes` and wait until the bus is idle
    fn transfer(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        match self.spi.write(bytes).and_then(|_| self.spi.flush()) {
            Ok(_) => Ok(()),
            Err(e) => {
                log::error!("SPI write error ({} bytes): {:?}", bytes.len(), e);
                Err(DisplayError::BusWriteError)
            }
        }
    }
}

impl<SPI, DC, CS> Transport for DisplayInterface<SPI, DC, CS>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
{
    fn send_command(&mut self, opcode: u8, hold_select: bool) -> Result<(), DisplayError> {
        self.select()?;
        // low for commands
        if self.dc.set_low().is_err() {
            self.deselect()?;
            return Err(DisplayError::DCError);
        }
        let sent = self.transfer(&[opcode]);
        if sent.is_err() || !hold_select {
            self.deselect()?;
        }
        sent
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        if data.is_empty() {
            return Ok(());
        }
        self.select()?;
        // high for data
        if self.dc.set_high().is_err() {
            self.deselect()?;
            return Err(DisplayError::DCError);
        }
        let sent = self.transfer(data);
        self.deselect()?;
        sent
    }
}
