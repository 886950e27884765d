use crate::core::Storage;
use crate::utils::error::{Result, SchemaError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Schema fragments in one directory on the local file system.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
    atomic_writes: bool,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            atomic_writes: false,
        }
    }

    /// Write through a temporary sibling file renamed over the target.
    pub fn with_atomic_writes(mut self, atomic_writes: bool) -> Self {
        self.atomic_writes = atomic_writes;
        self
    }

    fn write_atomic(&self, target: &Path, data: &[u8]) -> std::io::Result<()> {
        let mut temp = tempfile::NamedTempFile::new_in(&self.base_path)?;
        temp.write_all(data)?;
        temp.as_file().sync_all()?;
        temp.persist(target).map_err(|e| e.error)?;
        Ok(())
    }
}

impl Storage for LocalStorage {
    fn list_files(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(&self.base_path)? {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => tracing::warn!("Skipping non UTF-8 file name: {:?}", raw),
            }
        }

        Ok(names)
    }

    fn read_file(&self, name: &str) -> Result<Vec<u8>> {
        let data = fs::read(self.base_path.join(name))?;
        Ok(data)
    }

    fn write_file(&self, name: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(name);

        let written = if self.atomic_writes {
            self.write_atomic(&full_path, data)
        } else {
            fs::write(&full_path, data)
        };

        written.map_err(|source| SchemaError::WriteFailure {
            path: full_path,
            source,
        })
    }

    fn location(&self, name: &str) -> String {
        self.base_path.join(name).display().to_string()
    }
}
