// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Interface for watchdog timers.
//!
//! A watchdog driver implements [`Watchdog`], the operation set the
//! framework invokes. Deciding *when* to ping is left to the framework and
//! its users. Drivers able to raise an early warning before the timeout
//! expires report it through a [`PretimeoutClient`].
//!
//! All times are in whole seconds.

use bitflags::bitflags;

use crate::ErrorCode;

bitflags! {
    /// Capabilities a watchdog advertises to the framework.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Options: u32 {
        /// The timeout can be changed while the device is attached.
        const SETTIMEOUT = 0x0080;
        /// Closing the device only stops the timer after the magic character.
        const MAGICCLOSE = 0x0100;
        /// A pretimeout can be set and is reported to the client.
        const PRETIMEOUT = 0x0200;
        /// Pings restart the countdown.
        const KEEPALIVEPING = 0x8000;
    }
}

/// Identity record reported to the framework.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WatchdogInfo {
    pub options: Options,
    pub firmware_version: u32,
    pub identity: &'static str,
}

/// Receiver for pretimeout notifications.
///
/// Called from the driver's interrupt handler, possibly while an operation
/// on the same driver holds its register lock. Implementations must not call
/// back into the driver at all: neither the operation set nor the getters
/// (`timeout`, `pretimeout`, `min_timeout`, `max_timeout`, `info`). Defer
/// any such work out of interrupt context.
pub trait PretimeoutClient {
    fn pretimeout(&self);
}

/// Operation set a watchdog driver offers to the framework.
pub trait Watchdog<'a> {
    /// Starts the timer with the current timeout configuration.
    fn start(&self) -> Result<(), ErrorCode>;

    /// Stops the timer.
    fn stop(&self) -> Result<(), ErrorCode>;

    /// Refreshes the timer so it does not expire.
    fn ping(&self) -> Result<(), ErrorCode>;

    /// Changes the timeout. Drivers that cannot do so keep the default.
    fn set_timeout(&self, _timeout: u32) -> Result<(), ErrorCode> {
        Err(ErrorCode::NOSUPPORT)
    }

    /// Changes the pretimeout, 0 disables it.
    fn set_pretimeout(&self, _pretimeout: u32) -> Result<(), ErrorCode> {
        Err(ErrorCode::NOSUPPORT)
    }

    fn timeout(&self) -> u32;

    fn pretimeout(&self) -> u32 {
        0
    }

    fn min_timeout(&self) -> u32;

    /// Largest accepted timeout, `None` when it cannot be determined.
    fn max_timeout(&self) -> Option<u32>;

    fn info(&self) -> WatchdogInfo;

    /// Whether the timer is currently running.
    fn is_active(&self) -> bool;

    fn set_pretimeout_client(&self, _client: &'a dyn PretimeoutClient) {}
}
