use mira_lib::SyntaxError;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum MiraError {
    Io(io::Error),
    Syntax(SyntaxError),
    NoSourceFiles(String),
    Json(serde_json::Error),
}

impl fmt::Display for MiraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MiraError::Io(err) => write!(f, "IO error: {err}"),
            MiraError::Syntax(err) => write!(f, "{err}"),
            MiraError::NoSourceFiles(path) => write!(
                f,
                "No .mira files found in {}",
                crate::core::paths::clean_path_str(path)
            ),
            MiraError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl std::error::Error for MiraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MiraError::Io(err) => Some(err),
            MiraError::Syntax(err) => Some(err),
            MiraError::Json(err) => Some(err),
            MiraError::NoSourceFiles(_) => None,
        }
    }
}

impl From<io::Error> for MiraError {
    fn from(err: io::Error) -> Self {
        MiraError::Io(err)
    }
}

impl From<SyntaxError> for MiraError {
    fn from(err: SyntaxError) -> Self {
        MiraError::Syntax(err)
    }
}

impl From<serde_json::Error> for MiraError {
    fn from(err: serde_json::Error) -> Self {
        MiraError::Json(err)
    }
}
