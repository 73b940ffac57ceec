use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for generation (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Broad category of a generation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required input missing or unusable; nothing was generated.
    Configuration,
    /// Reading or writing the output failed.
    Io,
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("{field} is not set")]
    #[diagnostic(
        code(pathconst::missing_field),
        help("pass it on the command line or set it in pathconst.toml")
    )]
    MissingField { field: &'static str },

    #[error("invalid type name '{name}': {reason}")]
    #[diagnostic(
        code(pathconst::invalid_type_name),
        help("use 'Namespace.Type' or a bare 'Type'")
    )]
    InvalidTypeName { name: String, reason: String },

    #[error("'{first}' and '{second}' both map to member '{member}'")]
    #[diagnostic(
        code(pathconst::member_collision),
        help("rename one of the files so their names differ in letters or digits")
    )]
    MemberCollision {
        member: String,
        first: String,
        second: String,
    },

    #[error("'{path}' maps to member '{member}', which is the name of the enclosing type")]
    #[diagnostic(
        code(pathconst::member_named_like_type),
        help("choose a type name that doesn't match any source file name")
    )]
    MemberNamedLikeType {
        member: String,
        path: String,
        type_name: String,
    },

    #[error("failed to update '{path}'")]
    #[diagnostic(code(pathconst::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingField { .. }
            | Self::InvalidTypeName { .. }
            | Self::MemberCollision { .. }
            | Self::MemberNamedLikeType { .. } => ErrorKind::Configuration,
            Self::Io { .. } => ErrorKind::Io,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Self::Io {
            path: path.into(),
            source,
        })
    }
}
