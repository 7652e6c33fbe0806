//! Diagnostic codes.
//!
//! Format: `N####`. Codes are stable; new findings get new numbers.

use std::fmt;
use std::str::FromStr;

/// Codes for every diagnostic nothrow can report.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Function signature has no exception specification
    N0001,
    /// Signature offsets fall outside the source file
    N0002,
    /// Encoding problem in a source file
    N0003,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[ErrorCode::N0001, ErrorCode::N0002, ErrorCode::N0003];

    /// The code as written in output (`"N0001"`).
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::N0001 => "N0001",
            ErrorCode::N0002 => "N0002",
            ErrorCode::N0003 => "N0003",
        }
    }

    /// One-line summary.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::N0001 => "function is missing an exception specification",
            ErrorCode::N0002 => "signature offsets fall outside the source file",
            ErrorCode::N0003 => "source file has an encoding problem",
        }
    }

    /// Longer text for `nothrow explain`.
    pub fn explanation(self) -> &'static str {
        match self {
            ErrorCode::N0001 => {
                "A function declaration has no `noexcept`, `throw()` or other exception \
                 specification.\nThe fix inserts ` noexcept` after the parameter list and \
                 any trailing qualifiers:\n\n    int &get() &;        becomes  int &get() & noexcept;\n    \
                 void put(int) const; becomes  void put(int) const noexcept;"
            }
            ErrorCode::N0002 => {
                "A manifest entry gives a signature span or parameter list end that does \
                 not fit the\nsource file: past its end, inverted, or inside a multi-byte \
                 character. The entry is\nskipped. Regenerate the manifest from the current \
                 sources."
            }
            ErrorCode::N0003 => {
                "A source file starts with a byte order mark, contains null bytes, or is \
                 not UTF-8 at all.\nThe first two are warnings and the file is still \
                 checked; a file that is not UTF-8\nis skipped."
            }
        }
    }
}

impl FromStr for ErrorCode {
    type Err = UnknownCode;

    /// Accepts the written form, ignoring case (`N0001`, `n0001`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCode(s.to_owned()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown diagnostic code `{0}`; codes look like N0001")]
pub struct UnknownCode(pub String);

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
