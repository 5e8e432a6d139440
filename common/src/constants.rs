//! Electrical and physical description of the thermistor front end.
//!
//! Every value here comes from the schematic. If the thermistor, the divider
//! resistor or the ADC reference change, the table has to be regenerated.

use core::fmt::Display;

use thiserror_no_std::Error;

use crate::physical::{Kelvin, PhysicalError, Resistance, Voltage};

/// Unvalidated constants, as they would be typed in from a datasheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawConstants {
    /// Thermistor nominal resistance, in ohm.
    pub nominal_resistance: f64,
    /// Thermistor nominal temperature, in kelvin.
    pub nominal_temperature: f64,
    /// "B" constant of the NTC thermistor at nominal temperature, in kelvin.
    pub b_constant: f64,
    /// Resistor on top of the voltage divider (R1 on the schematic), in ohm.
    pub top_resistance: f64,
    /// Voltage on top of the voltage divider, in volt.
    pub top_voltage: f64,
    /// Reference voltage of the ADC, in volt.
    pub adc_reference_voltage: f64,
    /// Maximum value of a single ADC sample.
    pub adc_max: u16,
    /// Number of samples the ADC sums into one reading.
    pub adc_accumulate: u16,
}

/// Validated constants. The only way to get one is through
/// [`HardwareConstants::new`] or [`Default`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HardwareConstants {
    pub nominal_resistance: Resistance,
    pub nominal_temperature: Kelvin,
    pub b_constant: Kelvin,
    pub top_resistance: Resistance,
    pub top_voltage: Voltage,
    pub adc_reference_voltage: Voltage,
    adc_max: u16,
    adc_accumulate: u16,
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConstantsError {
    /// A floating point constant failed its unit check.
    #[error("Invalid constant `{name}`: {reason}")]
    InvalidConstant {
        name: &'static str,
        reason: PhysicalError,
    },

    /// An integer ADC constant was zero.
    #[error("ADC constant `{0}` must be at least 1!")]
    ZeroAdcConstant(&'static str),

    /// The accumulated reading does not fit into the emitted `uint16_t`.
    #[error("Accumulated ADC range {adc_max} x {adc_accumulate} does not fit in 16 bits!")]
    AccumulatedRangeTooWide { adc_max: u16, adc_accumulate: u16 },
}

/// Defaults match the NTCG163JH103 thermistor behind a 10k divider fed from
/// 3.3 V, read by a 10 bit ADC with a 2.47 V reference summing 16 samples.
pub const DEFAULT_RAW_CONSTANTS: RawConstants = RawConstants {
    nominal_resistance: 10_000.0,
    nominal_temperature: 298.15,
    b_constant: 3435.0,
    top_resistance: 10_000.0,
    top_voltage: 3.3,
    adc_reference_voltage: 2.47,
    adc_max: 1023,
    adc_accumulate: 16,
};

fn named<T>(name: &'static str, result: Result<T, PhysicalError>) -> Result<T, ConstantsError> {
    result.map_err(|reason| ConstantsError::InvalidConstant { name, reason })
}

impl HardwareConstants {
    /// Check every raw constant and build the validated set.
    pub fn new(raw: RawConstants) -> Result<Self, ConstantsError> {
        let constants = Self {
            nominal_resistance: named("nominal_resistance", Resistance::new(raw.nominal_resistance))?,
            nominal_temperature: named("nominal_temperature", Kelvin::new(raw.nominal_temperature))?,
            b_constant: named("b_constant", Kelvin::new(raw.b_constant))?,
            top_resistance: named("top_resistance", Resistance::new(raw.top_resistance))?,
            top_voltage: named("top_voltage", Voltage::new(raw.top_voltage))?,
            adc_reference_voltage: named(
                "adc_reference_voltage",
                Voltage::new(raw.adc_reference_voltage),
            )?,
            adc_max: raw.adc_max,
            adc_accumulate: raw.adc_accumulate,
        };
        constants.validate()?;
        Ok(constants)
    }

    /// Checks that only involve the integer ADC constants.
    pub fn validate(&self) -> Result<(), ConstantsError> {
        if self.adc_max == 0 {
            return Err(ConstantsError::ZeroAdcConstant("adc_max"));
        }
        if self.adc_accumulate == 0 {
            return Err(ConstantsError::ZeroAdcConstant("adc_accumulate"));
        }
        if self.accumulated_max() > u16::MAX as u32 {
            return Err(ConstantsError::AccumulatedRangeTooWide {
                adc_max: self.adc_max,
                adc_accumulate: self.adc_accumulate,
            });
        }
        Ok(())
    }

    pub fn adc_max(&self) -> u16 {
        self.adc_max
    }

    pub fn adc_accumulate(&self) -> u16 {
        self.adc_accumulate
    }

    /// Largest reading the firmware can ever accumulate.
    pub fn accumulated_max(&self) -> u32 {
        self.adc_max as u32 * self.adc_accumulate as u32
    }
}

impl Default for HardwareConstants {
    fn default() -> Self {
        Self::new(DEFAULT_RAW_CONSTANTS).expect("Default hardware constants should be valid.")
    }
}

impl Display for HardwareConstants {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "<HardwareConstants | r_nominal:{}, t_nominal:{}, b:{}, r_top:{}, v_top:{}, v_ref:{}, adc_max:{}, accumulate:{}>",
            self.nominal_resistance,
            self.nominal_temperature,
            self.b_constant,
            self.top_resistance,
            self.top_voltage,
            self.adc_reference_voltage,
            self.adc_max,
            self.adc_accumulate
        )
    }
}
