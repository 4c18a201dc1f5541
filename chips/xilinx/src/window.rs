// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Window phase of the window watchdog.

use crate::registers::{EnableStatus, ESR};

/// Phase the window watchdog is in, as read from the Enable and Status
/// register.
///
/// While the watchdog is enabled and in its first window the hardware
/// treats any refresh or reconfiguration as a violation, so the driver
/// refuses those operations until the second window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowState {
    /// Disabled, or enabled and in the second window.
    Closed,
    /// Enabled and in the first window.
    Open,
}

impl WindowState {
    pub fn from_status(status: EnableStatus) -> WindowState {
        if status.is_set(ESR::WEN) && status.is_set(ESR::WSW) {
            WindowState::Open
        } else {
            WindowState::Closed
        }
    }

    pub fn is_closed(self) -> bool {
        self == WindowState::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_table() {
        let cases = [
            (0x0000_0000, WindowState::Closed),
            (0x0000_0001, WindowState::Closed),
            (0x0000_0100, WindowState::Closed),
            (0x0000_0101, WindowState::Open),
            (0x0001_0101, WindowState::Open),
            (0x0001_0001, WindowState::Closed),
            (0xFFFF_FFFE, WindowState::Closed),
            (0xFFFF_FFFF, WindowState::Open),
        ];
        for (raw, expected) in cases {
            assert_eq!(
                WindowState::from_status(EnableStatus::new(raw)),
                expected,
                "ESR {:#010x}",
                raw
            );
        }
    }

    #[test]
    fn only_closed_allows_changes() {
        assert!(WindowState::Closed.is_closed());
        assert!(!WindowState::Open.is_closed());
    }
}
