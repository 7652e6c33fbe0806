//! Fatal driver errors.
//!
//! Problems with individual signatures or source files are diagnostics, not
//! errors; these are the failures that stop a command.

use std::path::PathBuf;

use nothrow_diagnostic::fixes::EditError;
use nothrow_diagnostic::UnknownCode;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("cannot read manifest `{}`: {source}", path.display())]
    ReadManifest {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed manifest `{}`: {source}", path.display())]
    ParseManifest {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("cannot read `{}`: {source}", path.display())]
    ReadSource {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("`{}` is larger than 4 GiB", path.display())]
    FileTooLarge { path: PathBuf },
    #[error("cannot apply fixes to `{}`: {source}", path.display())]
    Edit { path: PathBuf, source: EditError },
    #[error("cannot write `{}`: {source}", path.display())]
    WriteSource {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("offset {offset} is past the end of `{}` ({len} bytes)", path.display())]
    OffsetOutOfRange { path: PathBuf, offset: u32, len: u32 },
    #[error("offset {offset} is inside a character in `{}`", path.display())]
    NotCharBoundary { path: PathBuf, offset: u32 },
    #[error("`{}` is not valid UTF-8", path.display())]
    NotUtf8 { path: PathBuf },
    #[error(transparent)]
    UnknownCode(#[from] UnknownCode),
    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),
}
