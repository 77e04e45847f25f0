//! CLI exit codes.
//!
//! Exit codes:
//! - 0: Success (JSON on stdout)
//! - 1: Failure (configuration, serialization, I/O)
//! - 2: Invalid input (bad date, out-of-range argument)

use std::process::ExitCode;

use horoscope_core::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum CliExitCode {
    Success = 0,
    Failure = 1,
    InvalidInput = 2,
}

impl From<CliExitCode> for ExitCode {
    fn from(code: CliExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

impl From<&EngineError> for CliExitCode {
    fn from(err: &EngineError) -> Self {
        match err {
            EngineError::ValidationError { .. }
            | EngineError::InvalidDate { .. }
            | EngineError::DateOutOfRange { .. }
            | EngineError::InvalidRangeLength(_) => CliExitCode::InvalidInput,
            EngineError::ConfigError(_) | EngineError::SerializationError(_) => {
                CliExitCode::Failure
            }
        }
    }
}

/// Exit code for an error returned by a command handler.
///
/// Engine errors anywhere in the chain are classified by variant; anything
/// else is a plain failure.
pub fn exit_code_for_error(err: &anyhow::Error) -> CliExitCode {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<EngineError>())
        .map(CliExitCode::from)
        .unwrap_or(CliExitCode::Failure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_errors_map_to_codes() {
        let invalid = anyhow::Error::new(EngineError::InvalidDate {
            input: "nope".into(),
        });
        assert_eq!(exit_code_for_error(&invalid), CliExitCode::InvalidInput);

        let config = anyhow::Error::new(EngineError::ConfigError("bad".into()));
        assert_eq!(exit_code_for_error(&config), CliExitCode::Failure);
    }

    #[test]
    fn test_context_keeps_classification() {
        let err = anyhow::Error::new(EngineError::InvalidRangeLength(14)).context("period command");
        assert_eq!(exit_code_for_error(&err), CliExitCode::InvalidInput);
    }

    #[test]
    fn test_foreign_errors_fail() {
        let err = anyhow::anyhow!("disk on fire");
        assert_eq!(exit_code_for_error(&err), CliExitCode::Failure);
    }
}
