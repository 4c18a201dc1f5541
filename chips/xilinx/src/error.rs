// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Errors reported by the watchdog driver.

use kernel::ErrorCode;

/// Failure of a watchdog operation.
///
/// Every error is detected before the first register write of the failing
/// operation, so the hardware and the timeout configuration are left as
/// they were.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WdtError {
    /// Requested timeout or pretimeout is outside the legal range, or the
    /// pretimeout is not shorter than the timeout.
    Configuration,
    /// Stop or reconfiguration requested while the window watchdog is in
    /// its open window.
    WindowViolation,
    /// The clock could not be enabled, or its rate is unknown.
    Clock(ErrorCode),
    /// The timebase counter did not advance during the self-test.
    SelfTest,
    /// The pretimeout interrupt line could not be claimed.
    InterruptSetup(ErrorCode),
    /// The variant does not implement the operation.
    NotSupported,
}

impl From<WdtError> for ErrorCode {
    fn from(err: WdtError) -> ErrorCode {
        match err {
            WdtError::Configuration | WdtError::WindowViolation => ErrorCode::INVAL,
            WdtError::Clock(code) | WdtError::InterruptSetup(code) => code,
            WdtError::SelfTest => ErrorCode::NODEVICE,
            WdtError::NotSupported => ErrorCode::NOSUPPORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_violation_reports_invalid_argument() {
        assert_eq!(ErrorCode::from(WdtError::WindowViolation), ErrorCode::INVAL);
        assert_eq!(ErrorCode::from(WdtError::Configuration), ErrorCode::INVAL);
    }

    #[test]
    fn collaborator_codes_pass_through() {
        assert_eq!(
            ErrorCode::from(WdtError::Clock(ErrorCode::BUSY)),
            ErrorCode::BUSY
        );
        assert_eq!(
            ErrorCode::from(WdtError::InterruptSetup(ErrorCode::NODEVICE)),
            ErrorCode::NODEVICE
        );
        assert_eq!(ErrorCode::from(WdtError::SelfTest), ErrorCode::NODEVICE);
    }
}
