use core::{fmt::Display, marker::PhantomData};

use super::{error::check_positive, PhysicalError};

/// Store physical unit value of Resistance, in ohm.
///
/// ```
/// use common::physical::Resistance;
/// let r = Resistance::new(10_000f64).expect("Failed to get Resistance representation.");
/// assert_eq!(r.value(), 10_000f64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resistance {
    ohms: f64,

    /// Make sure this can't be constructed with struct literals.
    _private: PhantomData<()>,
}

impl Resistance {
    /// Construct a Resistance. Will return an error if the value is not
    /// finite or not strictly positive.
    pub fn new(ohms: f64) -> Result<Self, PhysicalError> {
        Ok(Self {
            ohms: check_positive(ohms)?,
            _private: PhantomData,
        })
    }

    /// Get a copy of the resistance in ohm.
    pub fn value(&self) -> f64 {
        self.ohms
    }
}

impl Display for Resistance {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "<Resistance: {} Ohm>", self.ohms)
    }
}

impl From<Resistance> for f64 {
    fn from(value: Resistance) -> Self {
        value.ohms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        assert_eq!(Resistance::new(0f64), Err(PhysicalError::NotPositive(0f64)));
        assert_eq!(
            Resistance::new(-10f64),
            Err(PhysicalError::NotPositive(-10f64))
        );
        assert_eq!(Resistance::new(f64::NAN), Err(PhysicalError::NotFinite));
        assert_eq!(Resistance::new(f64::INFINITY), Err(PhysicalError::NotFinite));

        let r = Resistance::new(4_700f64).expect("Failed to create valid resistance.");
        let raw: f64 = r.into();
        assert_eq!(raw, 4_700f64);
    }
}
