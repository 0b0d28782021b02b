// src/exit.rs
//! Standardized process exit codes for `codecity`.
//!
//! Scripts that drive the analyzer only need 0 vs non-0, but the specific
//! codes tell a bad project path apart from a failed write.

use std::process::Termination;

use crate::error::CityError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CityExit {
    /// Report produced and written.
    Success = 0,
    /// Generic failure (walk error, serialization).
    Error = 1,
    /// Project path missing or not a directory, or a malformed `codecity.toml`.
    InvalidInput = 2,
    /// Output destination could not be written.
    WriteFailure = 3,
}

impl CityExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for CityExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<&CityError> for CityExit {
    fn from(err: &CityError) -> Self {
        match err {
            CityError::Output { .. } => Self::WriteFailure,
            e if e.is_invalid_input() => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}
