use std::path::PathBuf;

use common::constants::HardwareConstants;
use thiserror::Error;

/// Default artifact name, written to the working directory.
pub const DEFAULT_OUTPUT: &str = "temperature_table.h";

/// Number of entries: the table covers 0..149 degC.
pub const DEFAULT_TABLE_LENGTH: usize = 150;

/// Everything one generator run needs. Fixed at build time apart from the
/// output path.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub constants: HardwareConstants,
    pub table_length: usize,
    pub output_path: PathBuf,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Table length must be at least 1.")]
    EmptyTable,

    #[error("Invalid hardware constants.")]
    Constants(#[from] common::constants::ConstantsError),

    #[error("Expected at most one argument (output path), got {0}.")]
    TooManyArguments(usize),
}

impl GeneratorConfig {
    /// Default configuration, optionally writing somewhere else.
    pub fn from_args(args: impl Iterator<Item = String>) -> Result<Self, ConfigError> {
        let args: Vec<String> = args.collect();
        if args.len() > 1 {
            return Err(ConfigError::TooManyArguments(args.len()));
        }

        let mut config = Self::default();
        if let Some(path) = args.into_iter().next() {
            config.output_path = PathBuf::from(path);
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table_length == 0 {
            return Err(ConfigError::EmptyTable);
        }
        self.constants.validate()?;
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            constants: HardwareConstants::default(),
            table_length: DEFAULT_TABLE_LENGTH,
            output_path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}
