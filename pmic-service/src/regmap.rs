//! Register map contract and an I2C-backed implementation
use core::future::Future;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::Mutex;
use embedded_hal_async::i2c::I2c;

use crate::trace;

/// Default I2C address of AXP PMICs
pub const AXP20X_I2C_ADDRESS: u8 = 0x34;

/// Byte-wide register access to the PMIC
///
/// Implementations are shared between all sub-functions of one PMIC and must serialise
/// accesses internally. `update_bits` must be atomic with respect to other users of the map.
pub trait RegisterTransport {
    /// Bus error type
    type BusError;

    /// Read one register
    fn read(&self, reg: u8) -> impl Future<Output = Result<u8, Self::BusError>>;
    /// Write one register
    fn write(&self, reg: u8, value: u8) -> impl Future<Output = Result<(), Self::BusError>>;
    /// Replace the bits selected by `mask` with the matching bits of `value`
    fn update_bits(&self, reg: u8, mask: u8, value: u8) -> impl Future<Output = Result<(), Self::BusError>>;
}

/// Merge `value` into `current` at `mask`
pub const fn merge_bits(current: u8, mask: u8, value: u8) -> u8 {
    (current & !mask) | (value & mask)
}

/// Register map over an I2C bus
pub struct I2cRegmap<M: RawMutex, B: I2c> {
    address: u8,
    bus: Mutex<M, B>,
}

impl<M: RawMutex, B: I2c> I2cRegmap<M, B> {
    /// Create a register map for the device at `address`
    pub fn new(bus: B, address: u8) -> Self {
        Self {
            address,
            bus: Mutex::new(bus),
        }
    }

    /// Release the bus
    pub fn into_inner(self) -> B {
        self.bus.into_inner()
    }
}

impl<M: RawMutex, B: I2c> RegisterTransport for I2cRegmap<M, B> {
    type BusError = B::Error;

    async fn read(&self, reg: u8) -> Result<u8, Self::BusError> {
        let mut bus = self.bus.lock().await;
        let mut value = [0u8];
        bus.write_read(self.address, &[reg], &mut value).await?;
        trace!("Read {:#x}: {:#x}", reg, value[0]);
        Ok(value[0])
    }

    async fn write(&self, reg: u8, value: u8) -> Result<(), Self::BusError> {
        let mut bus = self.bus.lock().await;
        trace!("Write {:#x}: {:#x}", reg, value);
        bus.write(self.address, &[reg, value]).await
    }

    async fn update_bits(&self, reg: u8, mask: u8, value: u8) -> Result<(), Self::BusError> {
        // Hold the bus across the read and the write
        let mut bus = self.bus.lock().await;
        let mut current = [0u8];
        bus.write_read(self.address, &[reg], &mut current).await?;

        let updated = merge_bits(current[0], mask, value);
        if updated == current[0] {
            return Ok(());
        }

        trace!("Update {:#x}: {:#x} -> {:#x}", reg, current[0], updated);
        bus.write(self.address, &[reg, updated]).await
    }
}
