//! Signature manifests.
//!
//! A manifest is what a C++ front end hands over: for each source file, the
//! function signatures it found, with byte offsets and the resolved
//! exception-specification kind.
//!
//! ```json
//! {
//!   "files": [{
//!     "path": "src/widget.cpp",
//!     "language": "c++",
//!     "signatures": [{
//!       "name": "Widget::size",
//!       "span": { "start": 10, "end": 34 },
//!       "params_end": 28,
//!       "exception_spec": "none"
//!     }]
//!   }]
//! }
//! ```

use std::path::{Path, PathBuf};

use nothrow_ir::{ExceptionSpecKind, Signature, Span};
use serde::Deserialize;

use crate::error::DriverError;

#[derive(Clone, Debug, Deserialize)]
pub struct Manifest {
    pub files: Vec<FileEntry>,
    /// Directory relative file paths resolve against.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

/// Source language of a file. Only C++ files are checked.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum Language {
    #[serde(rename = "c")]
    C,
    #[default]
    #[serde(rename = "c++", alias = "cpp", alias = "cxx")]
    Cxx,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FileEntry {
    pub path: PathBuf,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub signatures: Vec<SignatureEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SignatureEntry {
    /// Qualified name, for messages only.
    #[serde(default)]
    pub name: String,
    pub span: Span,
    pub params_end: u32,
    #[serde(default)]
    pub exception_spec: ExceptionSpecKind,
    /// Declared in a system or library header the user cannot edit.
    #[serde(default)]
    pub system_header: bool,
    /// Compiler-generated (implicit special members, lambda call operators);
    /// there is no source text to edit.
    #[serde(default)]
    pub implicit: bool,
}

impl SignatureEntry {
    pub fn to_signature(&self) -> Signature {
        Signature::new(self.span, self.params_end, self.exception_spec)
    }
}

impl Manifest {
    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Manifest, DriverError> {
        let text = std::fs::read_to_string(path).map_err(|source| DriverError::ReadManifest {
            path: path.to_path_buf(),
            source,
        })?;
        let mut manifest = Manifest::parse(&text).map_err(|source| DriverError::ParseManifest {
            path: path.to_path_buf(),
            source,
        })?;
        manifest.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        tracing::debug!(
            path = %path.display(),
            files = manifest.files.len(),
            "loaded manifest"
        );
        Ok(manifest)
    }

    /// Parse manifest JSON. Relative paths stay relative to the current
    /// directory.
    pub fn parse(text: &str) -> Result<Manifest, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Where `entry`'s file lives on disk.
    pub fn resolve(&self, entry: &FileEntry) -> PathBuf {
        if entry.path.is_absolute() {
            entry.path.clone()
        } else {
            self.base_dir.join(&entry.path)
        }
    }
}

#[cfg(test)]
mod tests;
