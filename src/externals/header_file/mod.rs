use std::path::PathBuf;

use self::adapters::WriteHeaderFileAdapter;

pub mod adapters;
pub mod emitter;

pub struct HeaderFileModule {
    pub artifact_adapter: WriteHeaderFileAdapter,
}

impl HeaderFileModule {
    pub fn initialize(path: impl Into<PathBuf>) -> Self {
        Self {
            artifact_adapter: WriteHeaderFileAdapter::new(path),
        }
    }
}
