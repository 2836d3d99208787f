//! embedded-hal driver for the Sensirion SGP40 (VOC) and SGP41 (VOC + NOx) gas sensors.
//!
//! The driver speaks the SGP4x command protocol: 16-bit opcodes, optional
//! humidity/temperature compensation words and CRC-8 protected responses.
//! It does not run the gas index algorithm and does not schedule the SGP41
//! conditioning phase; [`Sgp4x::voc_index`] and [`Sgp4x::nox_index`] are
//! linear placeholders only.
//!
//! ## Usage
//!
//! ```ignore
//! use sgp4x_rs::{BusConfig, SensorVariant, Sgp4x};
//!
//! let mut sgp = Sgp4x::new(SensorVariant::Sgp41);
//! sgp.begin(i2c, delay, BusConfig::default());
//!
//! // Conditioning: ten cycles, one per second, driven by the caller.
//! for _ in 0..10 {
//!     sgp.conditioning(50.0, 25.0)?;
//!     sleep_one_second();
//! }
//!
//! let signals = sgp.read_raw_signals_compensated(45.0, 22.5)?;
//! ```
#![cfg_attr(not(test), no_std)]

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::{debug, warn};

pub mod codec;
pub mod commands;
pub mod conversion;
mod crc;
mod error;
mod types;

pub use crc::crc;
pub use error::{Error, ErrorCode};
pub use types::{BusConfig, RawSignals, SensorVariant, DEFAULT_ADDRESS, DEFAULT_CLOCK_HZ};

use codec::Frame;
use commands::{Command, GENERAL_CALL_ADDR, GENERAL_CALL_RESET, SETTLE_TIME_MS};
use conversion::{
    humidity_to_ticks, temperature_to_ticks, DEFAULT_HUMIDITY_TICKS, DEFAULT_TEMPERATURE_TICKS,
};

/// Longest response read by the driver (serial number).
const MAX_RX_WORDS: usize = 3;

/// The bus and delay owned by an initialized driver.
#[derive(Debug)]
struct Bus<I2C, D> {
    i2c: I2C,
    delay: D,
    config: BusConfig,
}

impl<I2C: I2c, D: DelayNs> Bus<I2C, D> {
    fn send_command(&mut self, command: Command) -> Result<(), Error<I2C::Error>> {
        debug!("sgp4x: send {:?}", command);
        let address = self.config.address;
        sensirion_i2c::i2c::write_command_u16(&mut self.i2c, address, command.opcode())
            .map_err(Error::I2cWrite)
    }

    fn send_frame(&mut self, command: Command, frame: &Frame) -> Result<(), Error<I2C::Error>> {
        debug!("sgp4x: send {:?} {:02x?}", command, frame.as_bytes());
        self.i2c
            .write(self.config.address, frame.as_bytes())
            .map_err(Error::I2cWrite)
    }

    /// Waits out the command's execution time, then reads `N` words.
    fn receive<const N: usize>(
        &mut self,
        command: Command,
    ) -> Result<[u16; N], Error<I2C::Error>> {
        const { assert!(N <= MAX_RX_WORDS) };
        debug_assert_eq!(N, command.response_words());
        self.delay.delay_ms(command.execution_time_ms());
        if N == 0 {
            return Ok([0; N]);
        }

        let mut buf = [0u8; 3 * MAX_RX_WORDS];
        let buf = &mut buf[..3 * N];
        self.i2c
            .read(self.config.address, buf)
            .map_err(Error::I2cRead)?;
        debug!("sgp4x: recv {:?} {:02x?}", command, buf);
        Ok(codec::decode_words(buf)?)
    }
}

/// SGP40 / SGP41 driver.
///
/// The sensor variant is fixed at construction. The bus is handed over by
/// [`begin`](Self::begin); until then every bus operation fails with
/// [`Error::NotInitialized`].
#[derive(Debug)]
pub struct Sgp4x<I2C, D> {
    variant: SensorVariant,
    bus: Option<Bus<I2C, D>>,
    voc_raw: u16,
    nox_raw: u16,
    last_error: ErrorCode,
}

impl<I2C, D> Default for Sgp4x<I2C, D> {
    fn default() -> Self {
        Self::new(SensorVariant::default())
    }
}

impl<I2C, D> Sgp4x<I2C, D> {
    /// Creates an uninitialized driver for the given variant.
    pub const fn new(variant: SensorVariant) -> Self {
        Self {
            variant,
            bus: None,
            voc_raw: 0,
            nox_raw: 0,
            last_error: ErrorCode::None,
        }
    }

    /// The configured sensor variant. No bus access.
    pub fn sensor_type(&self) -> SensorVariant {
        self.variant
    }

    pub fn is_initialized(&self) -> bool {
        self.bus.is_some()
    }

    /// Bus parameters given to [`begin`](Self::begin), if initialized.
    pub fn bus_config(&self) -> Option<BusConfig> {
        self.bus.as_ref().map(|bus| bus.config)
    }

    /// Last raw VOC value, 0 until the first successful read.
    pub fn voc(&self) -> u16 {
        self.voc_raw
    }

    /// Last raw NOx value, 0 until the first successful read.
    pub fn nox(&self) -> u16 {
        self.nox_raw
    }

    /// Placeholder VOC index of the last raw VOC value.
    pub fn voc_index(&self) -> f32 {
        conversion::voc_index(self.voc_raw)
    }

    /// Placeholder NOx index of the last raw NOx value.
    pub fn nox_index(&self) -> f32 {
        conversion::nox_index(self.nox_raw)
    }

    /// Status of the most recent bus operation.
    pub fn last_error(&self) -> ErrorCode {
        self.last_error
    }

    /// Gives back the bus and delay, leaving the driver uninitialized.
    /// Cached readings are kept.
    pub fn release(&mut self) -> Option<(I2C, D)> {
        self.bus.take().map(|bus| (bus.i2c, bus.delay))
    }
}

impl<I2C, D> Sgp4x<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Takes ownership of the bus and delay and waits for the sensor to settle.
    ///
    /// The bus clock in `config` must already be applied to `i2c` by the HAL.
    /// Calling `begin` again replaces the previous bus.
    pub fn begin(&mut self, i2c: I2C, mut delay: D, config: BusConfig) {
        debug!(
            "sgp4x: {:?} at {:#04x}, {} Hz",
            self.variant, config.address, config.clock_hz
        );
        delay.delay_ms(SETTLE_TIME_MS);
        self.bus = Some(Bus { i2c, delay, config });
        self.last_error = ErrorCode::None;
    }

    /// SGP40 raw VOC measurement with the default 50 %RH / 25 °C compensation.
    pub fn read_raw_sgp40(&mut self) -> Result<u16, Error<I2C::Error>> {
        let result = self.command_with_args(
            Some(SensorVariant::Sgp40),
            Command::Sgp40MeasureRaw,
            [DEFAULT_HUMIDITY_TICKS, DEFAULT_TEMPERATURE_TICKS],
        );
        let [voc] = self.track(result)?;
        self.voc_raw = voc;
        Ok(voc)
    }

    /// SGP41 raw VOC and NOx measurement with the default 50 %RH / 25 °C compensation.
    pub fn read_raw_signals(&mut self) -> Result<RawSignals, Error<I2C::Error>> {
        self.measure_sgp41([DEFAULT_HUMIDITY_TICKS, DEFAULT_TEMPERATURE_TICKS])
    }

    /// SGP41 raw VOC and NOx measurement compensated for the given ambient conditions.
    pub fn read_raw_signals_compensated(
        &mut self,
        humidity_percent: f32,
        temperature_c: f32,
    ) -> Result<RawSignals, Error<I2C::Error>> {
        self.measure_sgp41([
            humidity_to_ticks(humidity_percent),
            temperature_to_ticks(temperature_c),
        ])
    }

    /// Runs one SGP41 conditioning cycle and returns its raw VOC value.
    ///
    /// The value is not cached; [`voc`](Self::voc) keeps the last measurement.
    /// After power-up or heater-off the SGP41 needs ten cycles, one per
    /// second, before NOx readings are valid. The caller drives that cadence.
    pub fn conditioning(
        &mut self,
        humidity_percent: f32,
        temperature_c: f32,
    ) -> Result<u16, Error<I2C::Error>> {
        let result = self.command_with_args(
            Some(SensorVariant::Sgp41),
            Command::Sgp41Conditioning,
            [
                humidity_to_ticks(humidity_percent),
                temperature_to_ticks(temperature_c),
            ],
        );
        let [voc] = self.track(result)?;
        Ok(voc)
    }

    /// Raw VOC value from whichever variant is configured.
    ///
    /// On the SGP41 the NOx value is measured and cached as well.
    pub fn read_voc(&mut self) -> Result<u16, Error<I2C::Error>> {
        match self.variant {
            SensorVariant::Sgp40 => self.read_raw_sgp40(),
            SensorVariant::Sgp41 => self.read_raw_signals().map(|signals| signals.voc),
        }
    }

    /// Compensated raw VOC value from whichever variant is configured.
    ///
    /// The SGP40 path ignores the compensation inputs and uses the defaults.
    pub fn read_voc_compensated(
        &mut self,
        humidity_percent: f32,
        temperature_c: f32,
    ) -> Result<u16, Error<I2C::Error>> {
        match self.variant {
            SensorVariant::Sgp40 => self.read_raw_sgp40(),
            SensorVariant::Sgp41 => self
                .read_raw_signals_compensated(humidity_percent, temperature_c)
                .map(|signals| signals.voc),
        }
    }

    /// Reads the 48-bit serial number. The upper 16 bits are zero.
    pub fn serial_number(&mut self) -> Result<u64, Error<I2C::Error>> {
        let result = self.command::<3>(Command::GetSerialNumber);
        let words = self.track(result)?;
        Ok(words
            .iter()
            .fold(0u64, |serial, word| serial << 16 | u64::from(*word)))
    }

    /// Switches the hotplate off. The SGP41 has to be conditioned again afterwards.
    pub fn turn_heater_off(&mut self) -> Result<(), Error<I2C::Error>> {
        let result = self.command::<0>(Command::TurnHeaterOff);
        self.track(result).map(|_| ())
    }

    /// Sends the I2C general call reset.
    ///
    /// Every device on the bus that supports general call resets, not only
    /// this sensor.
    pub fn soft_reset(&mut self) -> Result<(), Error<I2C::Error>> {
        let result = self.checked_bus(None).and_then(|bus| {
            debug!("sgp4x: general call reset");
            bus.i2c
                .write(GENERAL_CALL_ADDR, &[GENERAL_CALL_RESET])
                .map_err(Error::I2cWrite)?;
            bus.delay.delay_ms(SETTLE_TIME_MS);
            Ok(())
        });
        self.track(result)
    }

    fn measure_sgp41(&mut self, args: [u16; 2]) -> Result<RawSignals, Error<I2C::Error>> {
        let result =
            self.command_with_args(Some(SensorVariant::Sgp41), Command::Sgp41MeasureRaw, args);
        let [voc, nox] = self.track(result)?;
        self.voc_raw = voc;
        self.nox_raw = nox;
        Ok(RawSignals { voc, nox })
    }

    /// Opcode-only request followed by an `N`-word response.
    fn command<const N: usize>(
        &mut self,
        command: Command,
    ) -> Result<[u16; N], Error<I2C::Error>> {
        let bus = self.checked_bus(None)?;
        bus.send_command(command)?;
        bus.receive(command)
    }

    /// Request with compensation words followed by an `N`-word response.
    fn command_with_args<const N: usize>(
        &mut self,
        variant: Option<SensorVariant>,
        command: Command,
        args: [u16; 2],
    ) -> Result<[u16; N], Error<I2C::Error>> {
        let bus = self.checked_bus(variant)?;
        bus.send_frame(command, &Frame::with_words(command.opcode(), args))?;
        bus.receive(command)
    }

    /// The bus, if initialized and the configured variant matches `required`.
    fn checked_bus(
        &mut self,
        required: Option<SensorVariant>,
    ) -> Result<&mut Bus<I2C, D>, Error<I2C::Error>> {
        let variant = self.variant;
        let bus = self.bus.as_mut().ok_or(Error::NotInitialized)?;
        if required.is_some_and(|required| required != variant) {
            return Err(Error::WrongVariant);
        }
        Ok(bus)
    }

    /// Records the outcome of an operation in `last_error`.
    fn track<T>(&mut self, result: Result<T, Error<I2C::Error>>) -> Result<T, Error<I2C::Error>> {
        match &result {
            Ok(_) => self.last_error = ErrorCode::None,
            Err(err) => {
                warn!("sgp4x: {:?}", err.code());
                self.last_error = err.code();
            }
        }
        result
    }
}
