use common::{constants::ConstantsError, model::ConversionModel};
use thiserror::Error;
use tracing::info;

use crate::config::{ConfigError, GeneratorConfig};

use super::{
    builder::{build_table, TableError},
    ports::{ArtifactError, ArtifactPort},
};

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Invalid configuration.")]
    Config(#[from] ConfigError),

    #[error("Invalid hardware constants.")]
    Constants(#[from] ConstantsError),

    #[error("Failed to build lookup table.")]
    Table(#[from] TableError),

    #[error("Failed to publish lookup table.")]
    Artifact(#[from] ArtifactError),
}

/// One-shot pipeline: validate, build, then hand the table to the artifact
/// port. Nothing is published unless every entry was computed.
pub struct TableGenerator<P: ArtifactPort> {
    pub artifact_port: P,
}

impl<P: ArtifactPort> TableGenerator<P> {
    pub fn new(artifact_port: P) -> Self {
        Self { artifact_port }
    }

    #[tracing::instrument(skip_all)]
    pub fn run(&self, config: &GeneratorConfig) -> Result<(), GeneratorError> {
        config.validate()?;
        info!("Using {}.", config.constants);

        let model = ConversionModel::new(config.constants)?;
        let table = build_table(&model, config.table_length)?;
        self.artifact_port.publish(&table)?;
        Ok(())
    }
}
