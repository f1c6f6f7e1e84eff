use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt::Display;

/// Numeric result code returned by the verification service.
///
/// `TransportFailure` is synthetic: the server never sends it, it marks
/// a network failure that happened before a server response was
/// obtained.
#[derive(Clone, Copy, Debug, Deserialize_repr, Eq, PartialEq, Serialize_repr)]
#[repr(u8)]
pub enum VerifyErrorCode {
    Verified = 0,
    NoSourceFile = 1,
    InitCodeNotFound = 2,
    CompilerVersionFormat = 3,
    BytecodeMismatch = 4,
    UnsupportedLanguage = 5,
    AlreadyVerified = 6,
    CompilationError = 7,
    TransportFailure = 8,
    #[serde(other)]
    Unknown,
}

impl VerifyErrorCode {
    /// Code 6 counts as success: the contract was verified earlier and
    /// resubmission is idempotent.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Verified | Self::AlreadyVerified)
    }
}

impl Display for VerifyErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Verified => write!(f, "Verified"),
            Self::NoSourceFile => write!(f, "NoSourceFile"),
            Self::InitCodeNotFound => write!(f, "InitCodeNotFound"),
            Self::CompilerVersionFormat => write!(f, "CompilerVersionFormat"),
            Self::BytecodeMismatch => write!(f, "BytecodeMismatch"),
            Self::UnsupportedLanguage => write!(f, "UnsupportedLanguage"),
            Self::AlreadyVerified => write!(f, "AlreadyVerified"),
            Self::CompilationError => write!(f, "CompilationError"),
            Self::TransportFailure => write!(f, "TransportFailure"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
