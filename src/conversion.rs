//! Fixed-point compensation ticks and the linear index approximations.

/// 50 %RH encoded as humidity ticks.
pub const DEFAULT_HUMIDITY_TICKS: u16 = 0x8000;

/// 25 °C encoded as temperature ticks.
pub const DEFAULT_TEMPERATURE_TICKS: u16 = 0x6666;

const HUMIDITY_MIN: f32 = 0.0;
const HUMIDITY_MAX: f32 = 100.0;
const TEMPERATURE_MIN: f32 = -45.0;
const TEMPERATURE_MAX: f32 = 130.0;

/// Relative humidity in %RH to sensor ticks. Input is clamped to 0..=100.
pub fn humidity_to_ticks(rh_percent: f32) -> u16 {
    let rh = clamp(rh_percent, HUMIDITY_MIN, HUMIDITY_MAX);
    (rh * 65535.0 / 100.0 + 0.5) as u16
}

/// Temperature in °C to sensor ticks. Input is clamped to -45..=130.
pub fn temperature_to_ticks(temperature_c: f32) -> u16 {
    let t = clamp(temperature_c, TEMPERATURE_MIN, TEMPERATURE_MAX);
    ((t + 45.0) * 65535.0 / 175.0 + 0.5) as u16
}

// NaN falls through to the lower bound.
fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value > max {
        max
    } else if value >= min {
        value
    } else {
        min
    }
}

/// Simplified VOC index from a raw VOC tick count.
///
/// This is a linear placeholder, not Sensirion's gas index algorithm.
pub fn voc_index(raw: u16) -> f32 {
    if raw > 20000 {
        f32::from(raw - 20000) / 100.0
    } else {
        0.0
    }
}

/// Simplified NOx index from a raw NOx tick count.
///
/// This is a linear placeholder, not Sensirion's gas index algorithm.
pub fn nox_index(raw: u16) -> f32 {
    if raw > 10000 {
        f32::from(raw - 10000) / 200.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_formulas() {
        assert_eq!(humidity_to_ticks(50.0), DEFAULT_HUMIDITY_TICKS);
        assert_eq!(temperature_to_ticks(25.0), DEFAULT_TEMPERATURE_TICKS);
    }

    #[test]
    fn humidity_range() {
        assert_eq!(humidity_to_ticks(0.0), 0);
        assert_eq!(humidity_to_ticks(20.0), 0x3333);
        assert_eq!(humidity_to_ticks(100.0), 0xffff);
    }

    #[test]
    fn humidity_is_clamped() {
        assert_eq!(humidity_to_ticks(-10.0), humidity_to_ticks(0.0));
        assert_eq!(humidity_to_ticks(150.0), humidity_to_ticks(100.0));
    }

    #[test]
    fn temperature_range() {
        assert_eq!(temperature_to_ticks(-45.0), 0);
        assert_eq!(temperature_to_ticks(40.0), 0x7c57);
        assert_eq!(temperature_to_ticks(130.0), 0xffff);
    }

    #[test]
    fn temperature_is_clamped() {
        assert_eq!(temperature_to_ticks(-50.0), temperature_to_ticks(-45.0));
        assert_eq!(temperature_to_ticks(200.0), temperature_to_ticks(130.0));
    }

    #[test]
    fn nan_maps_to_lower_bound() {
        assert_eq!(humidity_to_ticks(f32::NAN), 0);
        assert_eq!(temperature_to_ticks(f32::NAN), 0);
    }

    #[test]
    fn voc_index_placeholder() {
        assert_eq!(voc_index(0), 0.0);
        assert_eq!(voc_index(20000), 0.0);
        assert_eq!(voc_index(21000), 10.0);
    }

    #[test]
    fn nox_index_placeholder() {
        assert_eq!(nox_index(0), 0.0);
        assert_eq!(nox_index(10000), 0.0);
        assert_eq!(nox_index(11000), 5.0);
    }
}
