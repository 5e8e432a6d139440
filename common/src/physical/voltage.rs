use core::{fmt::Display, marker::PhantomData};

use super::{error::check_positive, PhysicalError};

/// Store physical unit value of Voltage, in volt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Voltage {
    volts: f64,
    _private: PhantomData<()>,
}

impl Voltage {
    /// Construct a Voltage. Supply and reference voltages are always above
    /// zero, so zero and negative values are rejected.
    pub fn new(volts: f64) -> Result<Self, PhysicalError> {
        Ok(Self {
            volts: check_positive(volts)?,
            _private: PhantomData,
        })
    }

    /// Get a copy of the voltage this instance does represent.
    pub fn value(&self) -> f64 {
        self.volts
    }
}

impl Display for Voltage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "<Voltage: {} V>", self.volts)
    }
}

impl From<Voltage> for f64 {
    fn from(value: Voltage) -> Self {
        value.volts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let voltage: Result<Voltage, PhysicalError> = Voltage::new(-1f64);
        assert!(voltage.is_err());

        let voltage: Result<Voltage, PhysicalError> = Voltage::new(0f64);
        assert!(voltage.is_err());

        let voltage: Voltage = Voltage::new(3.3f64).expect("Failed to create valid voltage.");
        assert_eq!(voltage.value(), 3.3f64);

        let voltage: Voltage = Voltage::new(2.47f64).expect("Failed to create valid voltage.");
        assert_eq!(voltage.value(), 2.47f64);
    }
}
