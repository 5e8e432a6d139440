use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::{Builder, NamedTempFile};
use tracing::info;

use crate::{
    internals::table::ports::{ArtifactError, ArtifactPort},
    models::lookup_table::LookupTable,
};

use super::emitter::emit;

/// Writes the header next to its destination and renames it into place, so
/// a failed run never leaves a truncated header behind.
pub struct WriteHeaderFileAdapter {
    path: PathBuf,
}

impl WriteHeaderFileAdapter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: std::io::Error) -> ArtifactError {
        ArtifactError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }

    /// Temp file created like a plain `File::create` would be: mode 0666
    /// filtered by the process umask, not tempfile's private 0600.
    fn create_temp(directory: &Path) -> std::io::Result<NamedTempFile> {
        let mut builder = Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
        builder.tempfile_in(directory)
    }

    fn write_atomically(&self, contents: &str) -> Result<(), ArtifactError> {
        let directory = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        // Dropping the temp file on any early return deletes it.
        let mut file = Self::create_temp(directory).map_err(|e| self.io_error(e))?;
        // An overwritten header keeps its permissions.
        if let Ok(existing) = fs::metadata(&self.path) {
            file.as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| self.io_error(e))?;
        }
        file.write_all(contents.as_bytes())
            .map_err(|e| self.io_error(e))?;
        file.as_file().sync_all().map_err(|e| self.io_error(e))?;
        file.persist(&self.path)
            .map_err(|e| self.io_error(e.error))?;
        Ok(())
    }
}

impl ArtifactPort for WriteHeaderFileAdapter {
    #[tracing::instrument(skip_all)]
    fn publish(&self, table: &LookupTable) -> Result<(), ArtifactError> {
        let contents = emit(table);
        self.write_atomically(&contents)?;
        info!("Wrote {} bytes to {}.", contents.len(), self.path.display());
        Ok(())
    }
}
