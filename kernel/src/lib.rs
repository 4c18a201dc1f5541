// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Watchdog framework interfaces.
//!
//! The kernel crate holds the contract between watchdog drivers and the
//! framework that drives them: the Hardware Interface Layer (HIL) traits a
//! driver implements (`hil::watchdog`) or consumes (`hil::clock`,
//! `hil::interrupt`), the shared [`ErrorCode`], and re-exports of the
//! register and cell crates that chip crates build on.

#![no_std]

pub mod hil;
pub mod utilities;

mod errorcode;

pub use crate::errorcode::ErrorCode;
