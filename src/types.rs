/// Which member of the SGP4x family is on the bus.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SensorVariant {
    /// SGP40: VOC only.
    Sgp40,
    /// SGP41: VOC and NOx.
    #[default]
    Sgp41,
}

/// Default I2C address of every SGP4x part.
pub const DEFAULT_ADDRESS: u8 = 0x59;

/// Default (fast mode) bus clock in Hz.
pub const DEFAULT_CLOCK_HZ: u32 = 400_000;

/// Bus parameters handed to [`Sgp4x::begin`](crate::Sgp4x::begin).
///
/// The clock is applied by the HAL when the I2C peripheral is created; the
/// driver only records it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BusConfig {
    /// 7-bit I2C address.
    pub address: u8,
    /// Bus clock [Hz]
    pub clock_hz: u32,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            clock_hz: DEFAULT_CLOCK_HZ,
        }
    }
}

impl BusConfig {
    pub fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    pub fn with_clock_hz(mut self, clock_hz: u32) -> Self {
        self.clock_hz = clock_hz;
        self
    }
}

/// SGP41 raw signals.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RawSignals {
    /// Raw VOC signal [ticks]
    pub voc: u16,
    /// Raw NOx signal [ticks]
    pub nox: u16,
}
