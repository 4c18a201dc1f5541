// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Conversion of timeouts in seconds to watchdog cycle counts.
//!
//! The window watchdog splits its period into a first (open) window, in
//! which refreshes are not accepted, followed by a second (closed) window
//! that ends in the reset. With a pretimeout `P` and a timeout `T` at clock
//! rate `f`:
//!
//! ```text
//!  0                  f*(T-P)                 f*T
//!  |---- first window ----|--- second window ---|
//!        open, no ping          closed, ping
//! ```
//!
//! Without a pretimeout the whole period is a second window.

use kernel::utilities::registers::FieldValue;
use kernel::ErrorCode;

use crate::error::WdtError;
use crate::registers::FCR;

/// Register values for the two window lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowCounts {
    pub first_window: u32,
    pub second_window: u32,
}

/// Largest timeout whose cycle count fits the 32-bit window registers.
pub fn max_timeout(rate: u32) -> Result<u32, WdtError> {
    u32::MAX
        .checked_div(rate)
        .ok_or(WdtError::Clock(ErrorCode::INVAL))
}

/// Window lengths for `timeout` and `pretimeout` seconds at `rate` Hz.
///
/// Counts are truncated to the 32-bit window registers; callers keep
/// `timeout` within [`max_timeout`].
#[allow(clippy::cast_possible_truncation)]
pub fn window_counts(rate: u32, timeout: u32, pretimeout: u32) -> WindowCounts {
    let total = u64::from(rate) * u64::from(timeout);
    let pre = u64::from(rate) * u64::from(pretimeout);

    if pretimeout == 0 {
        WindowCounts {
            first_window: 0,
            second_window: total as u32,
        }
    } else {
        WindowCounts {
            first_window: total.saturating_sub(pre) as u32,
            second_window: pre as u32,
        }
    }
}

/// Function Control value for a programmed second window.
///
/// The hardware scales the second window by its top byte, so `second_window`
/// must be the value read back from SWR after it was written.
pub fn function_control(second_window: u32) -> FieldValue<u32, FCR::Register> {
    FCR::SBC.val(second_window >> 24) + FCR::BSS::Byte3
}

/// Timeout of the timebase watchdog for an `interval` exponent.
///
/// The first overflow after `2^interval` cycles only raises an interrupt,
/// the reset comes with the second one. `None` when either input is zero
/// or the result does not fit.
pub fn interval_timeout(interval: u32, rate: u32) -> Option<u32> {
    if interval == 0 || rate == 0 {
        return None;
    }
    let cycles = 1u64.checked_shl(interval)?;
    u32::try_from(2 * (cycles / u64::from(rate))).ok()
}

/// Timeout configuration of one device.
///
/// Invariants: `min_timeout <= timeout <= max_timeout` and, when
/// `pretimeout != 0`, `pretimeout < timeout`. Only the `check_*` methods
/// decide whether a new value may be committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeoutConfig {
    pub timeout: u32,
    pub pretimeout: u32,
    pub min_timeout: u32,
    /// `None` while the clock rate is unknown.
    pub max_timeout: Option<u32>,
}

impl TimeoutConfig {
    /// Configuration of a window watchdog clocked at `rate` Hz.
    ///
    /// The default timeout is clamped to the maximum when the clock is so
    /// fast that the default does not fit.
    pub fn for_rate(rate: u32, default_timeout: u32, min_timeout: u32) -> TimeoutConfig {
        let max_timeout = max_timeout(rate).ok();
        let timeout = match max_timeout {
            Some(max) if default_timeout > max => max,
            _ => default_timeout,
        };
        TimeoutConfig {
            timeout,
            pretimeout: 0,
            min_timeout,
            max_timeout,
        }
    }

    pub fn check_timeout(&self, timeout: u32) -> Result<(), WdtError> {
        let max = self.max_timeout.ok_or(WdtError::Clock(ErrorCode::INVAL))?;
        if timeout < self.min_timeout || timeout > max {
            return Err(WdtError::Configuration);
        }
        Ok(())
    }

    pub fn check_pretimeout(&self, pretimeout: u32) -> Result<(), WdtError> {
        if pretimeout != 0 && pretimeout >= self.timeout {
            return Err(WdtError::Configuration);
        }
        Ok(())
    }

    /// Applies the timeout requested at attach time, 0 keeping the default.
    pub fn init_timeout(&mut self, requested: u32) -> Result<(), WdtError> {
        if requested == 0 {
            return Ok(());
        }
        self.check_timeout(requested)?;
        self.timeout = requested;
        Ok(())
    }

    pub fn window_counts(&self, rate: u32) -> WindowCounts {
        window_counts(rate, self.timeout, self.pretimeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::utilities::registers::LocalRegisterCopy;

    const MHZ_100: u32 = 100_000_000;

    #[test]
    fn no_pretimeout_makes_whole_period_closed() {
        let counts = window_counts(MHZ_100, 10, 0);
        assert_eq!(counts.first_window, 0);
        assert_eq!(counts.second_window, 1_000_000_000);
    }

    #[test]
    fn pretimeout_splits_period() {
        let counts = window_counts(MHZ_100, 10, 2);
        assert_eq!(counts.first_window, 800_000_000);
        assert_eq!(counts.second_window, 200_000_000);
    }

    #[test]
    fn windows_add_up_to_total_cycles() {
        for &rate in &[1u32, 32_768, 1_000_000, 33_333_333, MHZ_100, u32::MAX] {
            let max = max_timeout(rate).unwrap();
            for &timeout in &[1u32, 2, 7, max / 2, max] {
                if timeout == 0 {
                    continue;
                }
                for pretimeout in [0, 1, timeout / 2, timeout - 1] {
                    let counts = window_counts(rate, timeout, pretimeout);
                    let total = u64::from(rate) * u64::from(timeout);
                    assert_eq!(
                        counts.first_window.wrapping_add(counts.second_window),
                        total as u32,
                        "rate {} timeout {} pretimeout {}",
                        rate,
                        timeout,
                        pretimeout
                    );
                }
            }
        }
    }

    #[test]
    fn max_timeout_divides_register_width() {
        assert_eq!(max_timeout(MHZ_100), Ok(42));
        assert_eq!(max_timeout(1), Ok(u32::MAX));
        assert_eq!(max_timeout(u32::MAX), Ok(1));
        assert_eq!(max_timeout(0), Err(WdtError::Clock(ErrorCode::INVAL)));
    }

    #[test]
    fn function_control_uses_top_byte_of_second_window() {
        // 200_000_000 == 0x0BEB_C200
        let mut fcr = LocalRegisterCopy::<u32, FCR::Register>::new(0);
        fcr.write(function_control(200_000_000));
        assert_eq!(fcr.get(), 0x0BC0);
        assert_eq!(fcr.read(FCR::SBC), 0x0B);

        fcr.write(function_control(0x00FF_FFFF));
        assert_eq!(fcr.get(), 0x00C0);
    }

    #[test]
    fn interval_timeout_counts_two_overflows() {
        // 2^30 cycles at 100 MHz is 10.7 s, truncated to 10 s per overflow.
        assert_eq!(interval_timeout(30, MHZ_100), Some(20));
        assert_eq!(interval_timeout(0, MHZ_100), None);
        assert_eq!(interval_timeout(30, 0), None);
        assert_eq!(interval_timeout(64, 1), None);
        assert_eq!(interval_timeout(40, 1), None);
    }

    #[test]
    fn timeout_range_is_enforced() {
        let config = TimeoutConfig::for_rate(MHZ_100, 10, 1);
        assert_eq!(config.max_timeout, Some(42));
        assert_eq!(config.check_timeout(1), Ok(()));
        assert_eq!(config.check_timeout(42), Ok(()));
        assert_eq!(config.check_timeout(0), Err(WdtError::Configuration));
        assert_eq!(config.check_timeout(43), Err(WdtError::Configuration));
    }

    #[test]
    fn unknown_rate_rejects_any_timeout() {
        let config = TimeoutConfig::for_rate(0, 10, 1);
        assert_eq!(config.max_timeout, None);
        assert_eq!(config.timeout, 10);
        assert_eq!(
            config.check_timeout(5),
            Err(WdtError::Clock(ErrorCode::INVAL))
        );
    }

    #[test]
    fn pretimeout_must_stay_below_timeout() {
        let config = TimeoutConfig::for_rate(MHZ_100, 10, 1);
        assert_eq!(config.check_pretimeout(0), Ok(()));
        assert_eq!(config.check_pretimeout(9), Ok(()));
        assert_eq!(config.check_pretimeout(10), Err(WdtError::Configuration));
        assert_eq!(config.check_pretimeout(11), Err(WdtError::Configuration));
    }

    #[test]
    fn default_timeout_is_clamped_for_fast_clocks() {
        // 1 GHz leaves room for 4 s only.
        let config = TimeoutConfig::for_rate(1_000_000_000, 10, 1);
        assert_eq!(config.max_timeout, Some(4));
        assert_eq!(config.timeout, 4);
    }

    #[test]
    fn init_timeout_keeps_default_unless_valid() {
        let mut config = TimeoutConfig::for_rate(MHZ_100, 10, 1);
        assert_eq!(config.init_timeout(0), Ok(()));
        assert_eq!(config.timeout, 10);

        assert_eq!(config.init_timeout(100), Err(WdtError::Configuration));
        assert_eq!(config.timeout, 10);

        assert_eq!(config.init_timeout(30), Ok(()));
        assert_eq!(config.timeout, 30);
    }
}
