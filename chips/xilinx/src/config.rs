// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Per-device configuration handed to the driver at attach time.
//!
//! The values come from the persisted device description, which the
//! platform parses. Nothing here is process-wide: two devices can be
//! attached with different defaults.

/// Timeout used by the window watchdog when nothing else is requested.
pub const DEFAULT_TIMEOUT: u32 = 10;

/// Shortest timeout accepted by the window watchdog.
pub const MIN_TIMEOUT: u32 = 1;

/// Upper bound on timebase reads during the self-test.
pub const SELFTEST_LOOP_COUNT: u32 = 0x0001_0000;

/// Configuration inputs of one watchdog instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WdtConfig {
    /// `xlnx,wdt-interval`: the timebase watchdog expires after
    /// `2^interval` clock cycles.
    pub interval: Option<u32>,
    /// `xlnx,wdt-enable-once`: once started, the timebase watchdog cannot
    /// be stopped.
    pub enable_once: Option<bool>,
    /// `pretimeout-sec`: window watchdog pretimeout, 0 disables it.
    pub pretimeout: u32,
    /// `clock-frequency`: rate used when no clock is wired to the device.
    pub clock_frequency: Option<u32>,
    /// Requested timeout in seconds, 0 keeps the driver default.
    pub timeout: u32,
    /// Timebase reads before the self-test gives up.
    pub selftest_loops: u32,
}

impl Default for WdtConfig {
    fn default() -> WdtConfig {
        WdtConfig {
            interval: None,
            enable_once: None,
            pretimeout: 0,
            clock_frequency: None,
            timeout: 0,
            selftest_loops: SELFTEST_LOOP_COUNT,
        }
    }
}
