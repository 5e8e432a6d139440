use thiserror::Error;

use crate::models::lookup_table::LookupTable;

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Failed to write artifact {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Destination of the generated table. Lets the pipeline run without
/// touching the filesystem in tests.
pub trait ArtifactPort {
    /// Render and store `table`. Must either store the complete artifact or
    /// leave the previous one in place.
    fn publish(&self, table: &LookupTable) -> Result<(), ArtifactError>;
}
