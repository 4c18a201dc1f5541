// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Public traits for interfaces between watchdog drivers and the framework.

pub mod clock;
pub mod interrupt;
pub mod watchdog;
