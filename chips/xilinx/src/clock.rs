// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Clock feeding a watchdog instance.

use kernel::hil::clock::ClockInterface;

use crate::error::WdtError;

/// The watchdog's clock source, if the platform wired one, and the rate the
/// driver computes timeouts with.
///
/// The rate is latched at attach time. Without a clock source it is the
/// configured fallback frequency, and enable/disable do nothing.
#[derive(Clone, Copy)]
pub struct WdtClock<'a> {
    source: Option<&'a dyn ClockInterface>,
    rate: u32,
}

impl<'a> WdtClock<'a> {
    pub fn new(source: Option<&'a dyn ClockInterface>, fallback_rate: Option<u32>) -> WdtClock<'a> {
        let rate = match source {
            Some(clock) => clock.rate(),
            None => fallback_rate.unwrap_or(0),
        };
        WdtClock { source, rate }
    }

    /// Rate in Hz, 0 when unknown.
    pub fn rate(&self) -> u32 {
        self.rate
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    pub fn enable(&self) -> Result<(), WdtError> {
        match self.source {
            Some(clock) => clock.enable().map_err(WdtError::Clock),
            None => Ok(()),
        }
    }

    pub fn disable(&self) {
        if let Some(clock) = self.source {
            clock.disable();
        }
    }
}
