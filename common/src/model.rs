//! Conversion from a whole Celsius temperature to the accumulated ADC reading
//! the firmware is expected to see at that temperature.
//!
//! The thermistor sits on the bottom leg of a divider:
//!
//! ```text
//! V_top -- R_top --+-- NTC -- GND
//!                  |
//!                 ADC
//! ```
//!
//! Its resistance follows the B parameter equation
//! `R(T) = R_inf * exp(B / T)` with `R_inf = R_nominal * exp(-B / T_nominal)`.
//!
//! The model is only defined for temperatures above absolute zero. Close to
//! it `exp(B / T)` overflows; that case is reported as
//! [`ModelError::NonFinite`] instead of being rounded into a table entry.

use thiserror_no_std::Error;

use crate::{
    constants::{ConstantsError, HardwareConstants},
    physical::{Kelvin, PhysicalError},
};

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ModelError {
    /// The requested temperature is at or below absolute zero.
    #[error("Temperature {celsius} degC is outside the model domain: {reason}")]
    OutOfDomain { celsius: i32, reason: PhysicalError },

    /// An intermediate value overflowed or became NaN.
    #[error("Model produced a non-finite value at {celsius} degC!")]
    NonFinite { celsius: i32 },
}

/// Pure, stateless conversion model. Holds the validated constants and the
/// cached `R_inf` coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionModel {
    constants: HardwareConstants,
    r_infinity: f64,
}

impl ConversionModel {
    pub fn new(constants: HardwareConstants) -> Result<Self, ConstantsError> {
        constants.validate()?;
        let r_infinity = constants.nominal_resistance.value()
            * libm::exp(-constants.b_constant.value() / constants.nominal_temperature.value());
        Ok(Self {
            constants,
            r_infinity,
        })
    }

    pub fn constants(&self) -> &HardwareConstants {
        &self.constants
    }

    /// Thermistor resistance at infinite temperature, in ohm.
    pub fn r_infinity(&self) -> f64 {
        self.r_infinity
    }

    /// Thermistor resistance at `celsius`, in ohm.
    pub fn resistance_at(&self, celsius: i32) -> Result<f64, ModelError> {
        let kelvin = Kelvin::from_celsius(celsius)
            .map_err(|reason| ModelError::OutOfDomain { celsius, reason })?;
        Ok(self.r_infinity * libm::exp(self.constants.b_constant.value() / kelvin.value()))
    }

    /// Voltage at the divider midpoint for a bottom leg resistance, in volt.
    pub fn divider_voltage(&self, resistance: f64) -> f64 {
        self.constants.top_voltage.value() * resistance
            / (resistance + self.constants.top_resistance.value())
    }

    /// Single ADC sample for a voltage, before clamping.
    pub fn raw_sample(&self, voltage: f64) -> f64 {
        (voltage / self.constants.adc_reference_voltage.value()) * self.constants.adc_max() as f64
    }

    /// Single ADC sample clamped to `[0, adc_max]`.
    pub fn clamped_sample(&self, voltage: f64) -> f64 {
        let sample = self.raw_sample(voltage);
        let adc_max = self.constants.adc_max() as f64;
        if sample < 0f64 {
            0f64
        } else if sample > adc_max {
            adc_max
        } else {
            sample
        }
    }

    /// Whether the single sample at `celsius` would exceed the ADC range
    /// before clamping.
    pub fn saturates_at(&self, celsius: i32) -> Result<bool, ModelError> {
        let voltage = self.divider_voltage(self.resistance_at(celsius)?);
        Ok(self.raw_sample(voltage) > self.constants.adc_max() as f64)
    }

    /// Expected accumulated reading at `celsius`, rounded half to even.
    pub fn expected_reading(&self, celsius: i32) -> Result<u16, ModelError> {
        let resistance = self.resistance_at(celsius)?;
        let voltage = self.divider_voltage(resistance);
        // NaN would slip through both clamp comparisons.
        if !voltage.is_finite() {
            return Err(ModelError::NonFinite { celsius });
        }

        let accumulated =
            self.clamped_sample(voltage) * self.constants.adc_accumulate() as f64;
        let rounded = libm::rint(accumulated);
        if !rounded.is_finite() {
            return Err(ModelError::NonFinite { celsius });
        }

        // Clamping bounds the reading by accumulated_max, which validate()
        // keeps within u16.
        Ok(rounded as u16)
    }
}

impl Default for ConversionModel {
    fn default() -> Self {
        Self::new(HardwareConstants::default()).expect("Default hardware constants should be valid.")
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::constants::{RawConstants, DEFAULT_RAW_CONSTANTS};

    #[test]
    fn test_r_infinity_gives_nominal_resistance() {
        let model = ConversionModel::default();
        let expected_r_infinity = 10_000f64 * (-3435f64 / 298.15f64).exp();
        assert!((model.r_infinity() - expected_r_infinity).abs() < 1e-12);

        let r = model.resistance_at(25).expect("25 degC is in domain.");
        assert!((r - 10_000f64).abs() < 1e-6);
    }

    #[test]
    fn test_known_values() {
        let model = ConversionModel::default();
        assert_eq!(model.expected_reading(0), Ok(16218));
        assert_eq!(model.expected_reading(1), Ok(16024));
        assert_eq!(model.expected_reading(25), Ok(10934));
        assert_eq!(model.expected_reading(100), Ok(1965));
        assert_eq!(model.expected_reading(149), Ok(717));
    }

    #[test]
    fn test_clamps_to_adc_max() {
        let model = ConversionModel::default();
        assert_eq!(model.saturates_at(0), Ok(false));
        assert_eq!(model.saturates_at(-1), Ok(true));
        assert_eq!(model.expected_reading(-1), Ok(16368));
        assert_eq!(model.expected_reading(-40), Ok(16368));
    }

    #[test]
    fn test_clamps_with_low_reference_voltage() {
        // Reference below the divider output at every temperature.
        let raw = RawConstants {
            adc_reference_voltage: 1.0,
            ..DEFAULT_RAW_CONSTANTS
        };
        let model = ConversionModel::new(
            HardwareConstants::new(raw).expect("Constants should be valid."),
        )
        .expect("Model should build.");
        assert_eq!(model.saturates_at(0), Ok(true));
        assert_eq!(model.expected_reading(0), Ok(16368));
        assert_eq!(model.expected_reading(20), Ok(16368));
    }

    #[test]
    fn test_absolute_zero_is_out_of_domain() {
        let model = ConversionModel::default();
        assert!(matches!(
            model.expected_reading(-274),
            Err(ModelError::OutOfDomain { celsius: -274, .. })
        ));
        assert!(model.resistance_at(-300).is_err());
    }

    #[test]
    fn test_overflow_is_reported_not_rounded() {
        // exp(3435 / 0.15) overflows to infinity, inf / inf is NaN.
        let model = ConversionModel::default();
        assert_eq!(
            model.expected_reading(-273),
            Err(ModelError::NonFinite { celsius: -273 })
        );
    }

    #[test]
    fn test_rounds_half_to_even() {
        assert_eq!(libm::rint(2.5f64), 2f64);
        assert_eq!(libm::rint(3.5f64), 4f64);
        assert_eq!(libm::rint(1508.4961966123149f64), 1508f64);
    }

    prop_compose! {
        fn valid_raw_constants()(
            nominal_resistance in 1_000f64..100_000f64,
            b_constant in 3_000f64..4_500f64,
            top_resistance in 1_000f64..100_000f64,
            top_voltage in 1.8f64..5.0f64,
            adc_reference_voltage in 1.0f64..5.0f64,
            adc_max in prop::sample::select(vec![255u16, 1023, 4095]),
            adc_accumulate in 1u16..=16,
        ) -> RawConstants {
            RawConstants {
                nominal_resistance,
                nominal_temperature: 298.15,
                b_constant,
                top_resistance,
                top_voltage,
                adc_reference_voltage,
                adc_max,
                adc_accumulate,
            }
        }
    }

    proptest! {
        #[test]
        fn prop_reading_within_accumulated_range(raw in valid_raw_constants(), celsius in 0i32..300) {
            let constants = HardwareConstants::new(raw).expect("Generated constants should be valid.");
            let model = ConversionModel::new(constants).expect("Model should build.");
            let reading = model.expected_reading(celsius).expect("Temperature is in domain.");
            prop_assert!(reading as u32 <= constants.accumulated_max());
        }

        #[test]
        fn prop_reading_non_increasing(raw in valid_raw_constants(), celsius in 0i32..300) {
            let model = ConversionModel::new(
                HardwareConstants::new(raw).expect("Generated constants should be valid."),
            )
            .expect("Model should build.");
            let here = model.expected_reading(celsius).expect("Temperature is in domain.");
            let next = model.expected_reading(celsius + 1).expect("Temperature is in domain.");
            prop_assert!(here >= next);
        }

        #[test]
        fn prop_deterministic(celsius in -50i32..300) {
            let model = ConversionModel::default();
            prop_assert_eq!(model.expected_reading(celsius), model.expected_reading(celsius));
        }
    }
}
