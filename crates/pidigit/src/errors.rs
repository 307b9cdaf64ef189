//! Error handling and exit codes.

use pidigit_core::calculator::PiError;
use pidigit_core::constants::exit_codes;

/// Map a calculation error to the process exit code.
#[must_use]
pub fn handle_error(err: &PiError) -> i32 {
    match err {
        PiError::InvalidRange { .. } | PiError::ParallelExecution(_) | PiError::Calculation(_) => {
            exit_codes::ERROR_GENERIC
        }
        PiError::Config(_) | PiError::InvalidInput(_) => exit_codes::ERROR_CONFIG,
        PiError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}

/// Exit code for an application error; errors that are not a `PiError`
/// are generic failures.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let code = err
        .downcast_ref::<PiError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error);
    u8::try_from(code).unwrap_or(1)
}
