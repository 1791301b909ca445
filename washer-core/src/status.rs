//! Wash attempt outcome
//!
//! [`LaundryStatus`] is the only value the controller returns. Its fields
//! are private so that SUCCESS, NO_ERROR and a present program always go
//! together.

use crate::laundry::Program;

/// Outcome classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorCode {
    NoError,
    /// Batch exceeds the ceiling for its material
    TooHeavy,
    /// Drive unit failed during run or spin
    EngineFailure,
    /// Fluid system failed during pour or release
    WaterPumpFailure,
    /// Program could not be resolved
    UnknownError,
}

/// Overall result of a wash attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WashResult {
    Success,
    Failure,
}

/// Outcome of one wash attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LaundryStatus {
    result: WashResult,
    error_code: ErrorCode,
    ran_program: Option<Program>,
}

impl LaundryStatus {
    /// Program ran end-to-end
    pub const fn success(program: Program) -> Self {
        Self {
            result: WashResult::Success,
            error_code: ErrorCode::NoError,
            ran_program: Some(program),
        }
    }

    /// Attempt failed
    ///
    /// `ran_program` is the program that had started when the fault
    /// happened, or `None` if no actuator was touched. Passing
    /// [`ErrorCode::NoError`] is treated as [`ErrorCode::UnknownError`].
    pub const fn failure(error_code: ErrorCode, ran_program: Option<Program>) -> Self {
        let error_code = match error_code {
            ErrorCode::NoError => ErrorCode::UnknownError,
            code => code,
        };
        Self {
            result: WashResult::Failure,
            error_code,
            ran_program,
        }
    }

    /// Get the overall result
    pub const fn result(&self) -> WashResult {
        self.result
    }

    /// Get the outcome classifier
    pub const fn error_code(&self) -> ErrorCode {
        self.error_code
    }

    /// Get the program that ran, if any
    pub const fn ran_program(&self) -> Option<Program> {
        self.ran_program
    }

    /// Check if the wash succeeded
    pub const fn is_success(&self) -> bool {
        matches!(self.result, WashResult::Success)
    }
}
