//! Named text resources
//!
//! Engines address bundled text assets by a name relative to a resources
//! folder and without extension. [`DirectoryResources`] mirrors that lookup on
//! a plain directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::csv_reader::CsvError;

/// Extensions tried, in order, after the bare resource name
static TEXT_EXTENSIONS: [&str; 2] = ["csv", "txt"];

/// Source of named text assets
pub trait ResourceLoader {
    /// Full text of the resource `name`.
    ///
    /// # Errors
    /// [`CsvError::ResourceNotFound`] if no such resource exists, or
    /// [`CsvError::Io`] if it cannot be read.
    fn load_text(&self, name: &str) -> Result<String, CsvError>;
}

/// Resources stored as files under a root directory
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    root: PathBuf,
}

impl DirectoryResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Candidate paths for `name`: as given, then with each text extension.
    fn candidates(&self, name: &str) -> impl Iterator<Item = PathBuf> + '_ {
        let base = self.root.join(name);
        std::iter::once(base.clone()).chain(
            TEXT_EXTENSIONS
                .iter()
                .map(move |ext| base.with_extension(ext)),
        )
    }
}

impl ResourceLoader for DirectoryResources {
    fn load_text(&self, name: &str) -> Result<String, CsvError> {
        for path in self.candidates(name) {
            if !path.is_file() {
                continue;
            }
            match fs::read_to_string(&path) {
                Ok(text) => {
                    debug!(path = %path.display(), "Loaded resource");
                    return Ok(text);
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(CsvError::Io(e)),
            }
        }

        Err(CsvError::ResourceNotFound {
            name: name.to_string(),
        })
    }
}
