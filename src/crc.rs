use sensirion_i2c::crc8;

/// CRC-8 over `data`: polynomial 0x31, init 0xFF, MSB first, no final XOR.
pub fn crc(data: &[u8]) -> u8 {
    crc8::calculate(data)
}

/// Checks a run of received `[msb, lsb, crc]` triplets.
pub(crate) fn check(triplets: &[u8]) -> bool {
    triplets.len() % 3 == 0 && crc8::validate(triplets).is_ok()
}

#[cfg(test)]
mod tests {
    use super::{check, crc};

    #[test]
    fn example() {
        assert_eq!(crc(&[0xbe, 0xef]), 0x92);
    }

    #[test]
    fn default_compensation_words() {
        assert_eq!(crc(&[0x80, 0x00]), 0xa2);
        assert_eq!(crc(&[0x66, 0x66]), 0x93);
    }

    #[test]
    fn edge_words() {
        assert_eq!(crc(&[0x00, 0x00]), 0x81);
        assert_eq!(crc(&[0xff, 0xff]), 0xac);
        assert_eq!(crc(&[0x12, 0x34]), 0x37);
    }

    #[test]
    fn same_input_same_output() {
        assert_eq!(crc(&[0x12, 0x34]), crc(&[0x12, 0x34]));
    }

    #[test]
    fn triplet_check() {
        assert!(check(&[0xbe, 0xef, 0x92]));
        assert!(check(&[0xbe, 0xef, 0x92, 0x12, 0x34, 0x37]));
        assert!(!check(&[0xbe, 0xee, 0x92]));
        assert!(!check(&[0xbe, 0xef, 0x92, 0x12, 0x35, 0x37]));
        assert!(!check(&[0xbe, 0xef]));
    }
}
