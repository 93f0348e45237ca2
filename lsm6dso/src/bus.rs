use core::cell::{RefCell, RefMut};

use embedded_hal::i2c::I2c;

/// Exclusive access to the shared bus for one device address.
///
/// Acquired through [`Bus::acquire`] and released when dropped, so every
/// early return of an operation gives the bus back.
pub(crate) struct Bus<'a, I2C> {
    i2c: RefMut<'a, I2C>,
    address: u8,
}

impl<'a, I2C: I2c<Error = E>, E> Bus<'a, I2C> {
    /// Panics if the bus is already held, which can only happen when an
    /// operation is re-entered from within another one.
    pub(crate) fn acquire(bus: &'a RefCell<I2C>, address: u8) -> Self {
        Bus {
            i2c: bus.borrow_mut(),
            address,
        }
    }

    pub(crate) fn read_u8(&mut self, register: u8) -> Result<u8, E> {
        let mut data: [u8; 1] = [0; 1];
        self.i2c.write_read(self.address, &[register], &mut data)?;
        Ok(data[0])
    }

    pub(crate) fn write_u8(&mut self, register: u8, value: u8) -> Result<(), E> {
        self.i2c.write(self.address, &[register, value])
    }

    /// Read a low/high register pair as two single-register reads.
    pub(crate) fn read_pair(&mut self, (low, high): (u8, u8)) -> Result<(u8, u8), E> {
        let low = self.read_u8(low)?;
        let high = self.read_u8(high)?;
        Ok((low, high))
    }
}
