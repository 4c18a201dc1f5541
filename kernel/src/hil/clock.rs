// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Interface for the clock feeding a peripheral.

use crate::ErrorCode;

/// Generic operations that clock-like things are expected to support.
///
/// Enable and disable are reference counted by the implementor: every
/// successful `enable` must be balanced by exactly one `disable`.
pub trait ClockInterface {
    /// Returns the clock rate in Hz, or 0 if it is not known.
    fn rate(&self) -> u32;

    fn is_enabled(&self) -> bool;

    /// Ungates the clock.
    fn enable(&self) -> Result<(), ErrorCode>;

    fn disable(&self);
}
