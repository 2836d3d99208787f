/// Commands understood by the SGP4x family.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// SGP40: measure raw VOC signal. Takes humidity and temperature words.
    Sgp40MeasureRaw,
    /// SGP41: measure raw VOC and NOx signals. Takes humidity and temperature words.
    Sgp41MeasureRaw,
    /// SGP41: one conditioning cycle. Takes humidity and temperature words.
    Sgp41Conditioning,
    /// Read the 48-bit serial number.
    GetSerialNumber,
    /// Switch the hotplate off and put the sensor into idle mode.
    TurnHeaterOff,
}

impl Command {
    /// The 16-bit opcode sent big-endian at the head of every request frame.
    pub const fn opcode(self) -> u16 {
        match self {
            Command::Sgp40MeasureRaw => 0x260F,
            Command::Sgp41MeasureRaw => 0x2619,
            Command::Sgp41Conditioning => 0x2612,
            Command::GetSerialNumber => 0x3682,
            Command::TurnHeaterOff => 0x3615,
        }
    }

    /// Time the device needs before the response can be read, in ms.
    pub const fn execution_time_ms(self) -> u32 {
        match self {
            Command::Sgp40MeasureRaw => 30,
            Command::Sgp41MeasureRaw | Command::Sgp41Conditioning => 50,
            Command::GetSerialNumber => 2,
            Command::TurnHeaterOff => 1,
        }
    }

    /// Number of checksummed words in the response.
    pub const fn response_words(self) -> usize {
        match self {
            Command::Sgp40MeasureRaw | Command::Sgp41Conditioning => 1,
            Command::Sgp41MeasureRaw => 2,
            Command::GetSerialNumber => 3,
            Command::TurnHeaterOff => 0,
        }
    }
}

/// I2C general call address, used for the bus-wide soft reset.
pub const GENERAL_CALL_ADDR: u8 = 0x00;

/// Second byte of the general call reset sequence.
pub const GENERAL_CALL_RESET: u8 = 0x06;

/// Settling time after setup and after a soft reset, in ms.
pub const SETTLE_TIME_MS: u32 = 2;

#[cfg(test)]
mod tests {
    use super::Command;

    #[test]
    fn measurement_timing() {
        assert_eq!(Command::Sgp40MeasureRaw.execution_time_ms(), 30);
        assert_eq!(Command::Sgp41MeasureRaw.execution_time_ms(), 50);
        assert_eq!(Command::Sgp41Conditioning.execution_time_ms(), 50);
    }

    #[test]
    fn opcode_bytes() {
        assert_eq!(Command::Sgp41MeasureRaw.opcode().to_be_bytes(), [0x26, 0x19]);
        assert_eq!(Command::GetSerialNumber.opcode().to_be_bytes(), [0x36, 0x82]);
    }
}
