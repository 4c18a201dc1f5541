// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! AXI/XPS timebase watchdog.
//!
//! The timer overflows every `2^interval` clock cycles. The first overflow
//! sets the timer state bit (WDS) and raises an interrupt, the second one
//! resets the system unless software cleared WDS in between. Both enable
//! bits (EWDT1 in TWCSR0 and EWDT2 in TWCSR1) must be set for the timer to
//! run.

use core::cell::Cell;

use kernel::hil::watchdog::{Options, Watchdog, WatchdogInfo};
use kernel::ErrorCode;
use log::{debug, error};
use spin::Mutex;

use crate::clock::WdtClock;
use crate::error::WdtError;
use crate::registers::{RegisterAccess, WdtRegisters, TWCSR0, TWCSR1};
use crate::selftest;

pub const WDT_IDENTITY: &str = "Xilinx Watchdog";

pub struct Wdt<'a, R: RegisterAccess> {
    registers: Mutex<WdtRegisters<R>>,
    clock: WdtClock<'a>,
    active: Cell<bool>,
    timeout: u32,
    nowayout: bool,
}

impl<'a, R: RegisterAccess> Wdt<'a, R> {
    /// `timeout` is informational only: the hardware period is fixed by
    /// the interval the core was synthesized with.
    pub fn new(registers: R, clock: WdtClock<'a>, timeout: u32, nowayout: bool) -> Wdt<'a, R> {
        Wdt {
            registers: Mutex::new(WdtRegisters::new(registers)),
            clock,
            active: Cell::new(false),
            timeout,
            nowayout,
        }
    }

    pub fn start(&self) -> Result<(), WdtError> {
        if !self.active.get() {
            self.clock.enable().inspect_err(|_| error!("failed to enable clock"))?;
        }

        {
            let registers = self.registers.lock();
            // Clear the previous reset and timer state, then enable.
            registers.modify_control_status0(
                TWCSR0::WRS::SET + TWCSR0::WDS::SET + TWCSR0::EWDT1::SET,
            );
            registers.write_control_status1(TWCSR1::EWDT2::SET);
        }

        self.active.set(true);
        debug!("watchdog started");
        Ok(())
    }

    /// Stops the timer. Whether `nowayout` forbids this is for the caller
    /// to decide.
    pub fn stop(&self) -> Result<(), WdtError> {
        self.force_stop();
        debug!("watchdog stopped");
        Ok(())
    }

    pub fn force_stop(&self) {
        {
            let registers = self.registers.lock();
            registers.modify_control_status0(TWCSR0::EWDT1::CLEAR);
            registers.write_control_status1(TWCSR1::EWDT2::CLEAR);
        }

        if self.active.replace(false) {
            self.clock.disable();
        }
    }

    pub fn keepalive(&self) -> Result<(), WdtError> {
        let registers = self.registers.lock();
        registers.modify_control_status0(TWCSR0::WRS::SET + TWCSR0::WDS::SET);
        Ok(())
    }

    /// Checks that the timebase counter is running. The clock must be
    /// enabled.
    pub fn selftest(&self, bound: u32) -> Result<(), WdtError> {
        let registers = self.registers.lock();
        selftest::selftest(&registers, bound)
    }

    /// The period is fixed by the synthesized interval.
    #[allow(clippy::unused_self)]
    pub fn set_timeout(&self, _timeout: u32) -> Result<(), WdtError> {
        Err(WdtError::NotSupported)
    }

    /// The timebase watchdog has no pretimeout.
    #[allow(clippy::unused_self)]
    pub fn set_pretimeout(&self, _pretimeout: u32) -> Result<(), WdtError> {
        Err(WdtError::NotSupported)
    }

    pub fn timeout(&self) -> u32 {
        self.timeout
    }

    /// Once started, the timer must not be stopped by the framework.
    pub fn nowayout(&self) -> bool {
        self.nowayout
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn info(&self) -> WatchdogInfo {
        WatchdogInfo {
            options: Options::MAGICCLOSE | Options::KEEPALIVEPING,
            firmware_version: 1,
            identity: WDT_IDENTITY,
        }
    }
}

impl<'a, R: RegisterAccess> Watchdog<'a> for Wdt<'a, R> {
    fn start(&self) -> Result<(), ErrorCode> {
        Wdt::start(self).map_err(ErrorCode::from)
    }

    fn stop(&self) -> Result<(), ErrorCode> {
        Wdt::stop(self).map_err(ErrorCode::from)
    }

    fn ping(&self) -> Result<(), ErrorCode> {
        self.keepalive().map_err(ErrorCode::from)
    }

    fn set_timeout(&self, timeout: u32) -> Result<(), ErrorCode> {
        Wdt::set_timeout(self, timeout).map_err(ErrorCode::from)
    }

    fn set_pretimeout(&self, pretimeout: u32) -> Result<(), ErrorCode> {
        Wdt::set_pretimeout(self, pretimeout).map_err(ErrorCode::from)
    }

    fn timeout(&self) -> u32 {
        self.timeout
    }

    fn min_timeout(&self) -> u32 {
        0
    }

    fn max_timeout(&self) -> Option<u32> {
        None
    }

    fn info(&self) -> WatchdogInfo {
        Wdt::info(self)
    }

    fn is_active(&self) -> bool {
        self.active.get()
    }
}
