use crate::core::error::MiraError;

/// Exit codes for the mira CLI
/// Following standard Unix/POSIX conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Any other failure, such as output that cannot be rendered
    GeneralError = 1,
    /// Lexical or parse error in a mira source
    SyntaxError = 2,
    /// File not found, unreadable, or no sources to read
    FileError = 3,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<&MiraError> for ExitCode {
    fn from(error: &MiraError) -> Self {
        match error {
            MiraError::Io(_) => ExitCode::FileError,
            MiraError::Syntax(_) => ExitCode::SyntaxError,
            MiraError::NoSourceFiles(_) => ExitCode::FileError,
            MiraError::Json(_) => ExitCode::GeneralError,
        }
    }
}

impl From<&Box<dyn std::error::Error>> for ExitCode {
    fn from(error: &Box<dyn std::error::Error>) -> Self {
        match error.downcast_ref::<MiraError>() {
            Some(mira_error) => ExitCode::from(mira_error),
            None if error.is::<mira_lib::SyntaxError>() => ExitCode::SyntaxError,
            None if error.is::<std::io::Error>() => ExitCode::FileError,
            None => ExitCode::GeneralError,
        }
    }
}
