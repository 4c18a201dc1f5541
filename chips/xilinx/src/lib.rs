// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Driver for the Xilinx AXI/XPS timebase watchdog and the Versal window
//! watchdog.
//!
//! [`XilinxWdt::attach`] brings up an instance of either variant from its
//! platform [`Resources`] and [`WdtConfig`], after which the framework
//! drives it through [`kernel::hil::watchdog::Watchdog`].

#![no_std]

pub mod clock;
pub mod config;
pub mod device;
pub mod error;
pub mod registers;
pub mod selftest;
pub mod timeout;
pub mod wdt;
pub mod window;
pub mod wwdt;

#[cfg(test)]
mod testing;

pub use crate::config::WdtConfig;
pub use crate::device::{Resources, Variant, XilinxWdt};
pub use crate::error::WdtError;

// Used to run the tests on a host.
#[cfg(test)]
extern crate std;
