use core::{fmt::Display, marker::PhantomData};

use super::{error::check_positive, PhysicalError};

/// Offset between the Celsius and kelvin scales.
pub const CELSIUS_OFFSET: f64 = 273.15;

/// Store a quantity expressed in kelvin. Used both for absolute temperatures
/// and for the thermistor B constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kelvin {
    value: f64,
    _private: PhantomData<()>,
}

impl Kelvin {
    /// Construct a Kelvin value. Must be finite and above absolute zero.
    pub fn new(value: f64) -> Result<Self, PhysicalError> {
        Ok(Self {
            value: check_positive(value)?,
            _private: PhantomData,
        })
    }

    /// Convert a whole Celsius temperature into kelvin.
    /// Fails for temperatures at or below absolute zero.
    pub fn from_celsius(celsius: i32) -> Result<Self, PhysicalError> {
        Self::new(celsius as f64 + CELSIUS_OFFSET)
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Display for Kelvin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "<Kelvin: {} K>", self.value)
    }
}

impl From<Kelvin> for f64 {
    fn from(value: Kelvin) -> Self {
        value.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_celsius() {
        let k = Kelvin::from_celsius(25).expect("Failed to convert 25 degC.");
        assert_eq!(k.value(), 298.15f64);

        let k = Kelvin::from_celsius(-273).expect("Failed to convert -273 degC.");
        assert!(k.value() > 0f64);

        assert!(Kelvin::from_celsius(-274).is_err());
    }

    #[test]
    fn test_new() {
        assert!(Kelvin::new(0f64).is_err());
        assert!(Kelvin::new(f64::NAN).is_err());
        assert_eq!(
            Kelvin::new(3435f64).expect("Failed to create B constant.").value(),
            3435f64
        );
    }
}
