// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Interface for interrupt lines handed to a driver at attach time.

use crate::ErrorCode;

/// Outcome reported by an interrupt handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IrqReturn {
    /// The interrupt was not raised by this device.
    None,
    /// The interrupt was serviced.
    Handled,
}

/// A platform interrupt line a driver may claim.
///
/// Once `request` succeeds, the platform routes the line to the owning
/// driver's `handle_interrupt`.
pub trait InterruptLine {
    /// The platform interrupt number.
    fn number(&self) -> u32;

    /// Claims the line on behalf of `owner`.
    fn request(&self, owner: &'static str) -> Result<(), ErrorCode>;
}
