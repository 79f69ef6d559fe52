use std::{fmt, io, path::PathBuf};

use thiserror::Error;

pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

// basic error type enum to pattern match on
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaffoldErrType {
    PrototypeMissing,
    ProjectDir,
    ProjectName,
    IoError,
    ConfigError,
}

impl fmt::Display for ScaffoldErrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ScaffoldErrType::PrototypeMissing => "PrototypeMissing",
            ScaffoldErrType::ProjectDir => "ProjectDir",
            ScaffoldErrType::ProjectName => "ProjectName",
            ScaffoldErrType::IoError => "IoError",
            ScaffoldErrType::ConfigError => "ConfigError",
        };

        write!(f, "{}", message)
    }
}

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("prototype directory does not exist -- {}", .0.display())]
    PrototypeMissing(PathBuf),

    #[error("cant make project directory -- {}: {source}", .path.display())]
    ProjectDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("project name can not be empty")]
    EmptyProjectName,

    #[error("io error -- {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("bad config -- {0}")]
    Config(String),

    #[error("bad config toml -- {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl ScaffoldError {
    pub fn io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        ScaffoldError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ScaffoldErrType {
        match self {
            ScaffoldError::PrototypeMissing(_) => {
                ScaffoldErrType::PrototypeMissing
            }
            ScaffoldError::ProjectDir { .. } => ScaffoldErrType::ProjectDir,
            ScaffoldError::EmptyProjectName => ScaffoldErrType::ProjectName,
            ScaffoldError::Io { .. } => ScaffoldErrType::IoError,
            ScaffoldError::Config(_) | ScaffoldError::ConfigParse(_) => {
                ScaffoldErrType::ConfigError
            }
        }
    }
}
