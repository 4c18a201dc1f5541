// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Versal window watchdog.
//!
//! The period is split into a first window, in which refreshes are
//! ignored, and a second window in which they are accepted. Once the second
//! window runs out the device resets the system. If a pretimeout is set,
//! the second window is the pretimeout and its start raises an interrupt.
//!
//! Register writes other than to MWR only take effect after MWR.AEN was
//! set, so every transaction starts by unlocking.

use core::cell::Cell;

use kernel::hil::interrupt::IrqReturn;
use kernel::hil::watchdog::{Options, PretimeoutClient, Watchdog, WatchdogInfo};
use kernel::utilities::cells::OptionalCell;
use kernel::ErrorCode;
use log::{debug, error, warn};
use spin::Mutex;

use crate::clock::WdtClock;
use crate::error::WdtError;
use crate::registers::{RegisterAccess, WwdtRegisters, ESR, FCR};
use crate::timeout::{self, TimeoutConfig};
use crate::window::WindowState;

pub const WWDT_IDENTITY: &str = "xlnx_wwdt watchdog";

/// State guarded by the device lock.
struct Locked<R> {
    registers: WwdtRegisters<R>,
    timeouts: TimeoutConfig,
}

impl<R: RegisterAccess> Locked<R> {
    fn window_state(&self) -> WindowState {
        WindowState::from_status(self.registers.enable_status())
    }

    fn check_closed(&self) -> Result<(), WdtError> {
        if self.window_state().is_closed() {
            Ok(())
        } else {
            warn!("timer in open window");
            Err(WdtError::WindowViolation)
        }
    }

    /// Disables the timer, programs both windows and enables it again.
    fn arm(&self, rate: u32) {
        let counts = self.timeouts.window_counts(rate);
        let registers = &self.registers;

        registers.unlock_writes();
        registers.disable();
        registers.set_first_window(counts.first_window);
        registers.set_second_window(counts.second_window);
        if self.timeouts.pretimeout != 0 {
            let second_window = registers.second_window();
            registers.write_function_control(timeout::function_control(second_window));
        } else {
            registers.write_function_control(FCR::SBC::CLEAR + FCR::BSS::CLEAR);
        }
        registers.modify_enable_status(ESR::WEN::SET);
    }

    fn disarm(&self) {
        self.registers.unlock_writes();
        self.registers.disable();
    }
}

pub struct Wwdt<'a, R: RegisterAccess> {
    locked: Mutex<Locked<R>>,
    clock: WdtClock<'a>,
    active: Cell<bool>,
    irq: Option<u32>,
    client: OptionalCell<&'a dyn PretimeoutClient>,
}

impl<'a, R: RegisterAccess> Wwdt<'a, R> {
    /// `irq` is the interrupt line routed to [`Wwdt::handle_interrupt`],
    /// if one was obtained. It enables pretimeout reporting.
    pub fn new(
        registers: R,
        clock: WdtClock<'a>,
        timeouts: TimeoutConfig,
        irq: Option<u32>,
    ) -> Wwdt<'a, R> {
        Wwdt {
            locked: Mutex::new(Locked {
                registers: WwdtRegisters::new(registers),
                timeouts,
            }),
            clock,
            active: Cell::new(false),
            irq,
            client: OptionalCell::empty(),
        }
    }

    pub fn irq(&self) -> Option<u32> {
        self.irq
    }

    pub fn start(&self) -> Result<(), WdtError> {
        let rate = self.clock.rate();
        if rate == 0 {
            return Err(WdtError::Clock(ErrorCode::INVAL));
        }

        if !self.active.get() {
            self.clock
                .enable()
                .inspect_err(|_| error!("failed to enable clock"))?;
        }

        self.locked.lock().arm(rate);

        self.active.set(true);
        debug!("watchdog started");
        Ok(())
    }

    /// Stops the timer. Refused in the first window, where disabling would
    /// be treated by the hardware as a violation.
    pub fn stop(&self) -> Result<(), WdtError> {
        {
            let locked = self.locked.lock();
            locked.check_closed()?;
            locked.disarm();
        }

        self.release_clock();
        debug!("watchdog stopped");
        Ok(())
    }

    /// Stops the timer whatever window it is in.
    pub fn force_stop(&self) {
        self.locked.lock().disarm();
        self.release_clock();
    }

    fn release_clock(&self) {
        if self.active.replace(false) {
            self.clock.disable();
        }
    }

    /// Refreshes the timer. A refresh in the first window is ignored.
    pub fn keepalive(&self) -> Result<(), WdtError> {
        let locked = self.locked.lock();
        if !locked.window_state().is_closed() {
            return Ok(());
        }

        let registers = &locked.registers;
        registers.unlock_writes();
        registers.modify_enable_status(ESR::WINT::SET + ESR::WSW::CLEAR);
        registers.modify_enable_status(ESR::WSW::SET);
        Ok(())
    }

    /// Changes the timeout and clears the pretimeout. A running timer is
    /// re-armed with the new values.
    pub fn set_timeout(&self, timeout: u32) -> Result<(), WdtError> {
        let mut locked = self.locked.lock();
        locked.check_closed()?;
        locked.timeouts.check_timeout(timeout).inspect_err(|_| {
            warn!(
                "timeout value must be {}<=x<={:?}, got {}",
                locked.timeouts.min_timeout, locked.timeouts.max_timeout, timeout
            );
        })?;

        locked.timeouts.timeout = timeout;
        locked.timeouts.pretimeout = 0;

        if self.active.get() {
            locked.arm(self.clock.rate());
        }
        Ok(())
    }

    /// Changes the pretimeout, 0 disabling it. A running timer is re-armed
    /// with the new values.
    pub fn set_pretimeout(&self, pretimeout: u32) -> Result<(), WdtError> {
        let mut locked = self.locked.lock();
        locked.check_closed()?;
        locked.timeouts.check_pretimeout(pretimeout)?;

        locked.timeouts.pretimeout = pretimeout;

        if self.active.get() {
            locked.arm(self.clock.rate());
        }
        Ok(())
    }

    pub fn window_state(&self) -> WindowState {
        self.locked.lock().window_state()
    }

    pub fn timeouts(&self) -> TimeoutConfig {
        self.locked.lock().timeouts
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn set_client(&self, client: &'a dyn PretimeoutClient) {
        self.client.set(client);
    }

    /// Pretimeout interrupt. Notifies the client without touching the
    /// registers or the lock; the next start or refresh re-arms.
    pub fn handle_interrupt(&self) -> IrqReturn {
        self.client.map(|client| client.pretimeout());
        IrqReturn::Handled
    }

    pub fn info(&self) -> WatchdogInfo {
        let mut options = Options::MAGICCLOSE | Options::KEEPALIVEPING | Options::SETTIMEOUT;
        if self.irq.is_some() {
            options |= Options::PRETIMEOUT;
        }
        WatchdogInfo {
            options,
            firmware_version: 1,
            identity: WWDT_IDENTITY,
        }
    }
}

impl<'a, R: RegisterAccess> Watchdog<'a> for Wwdt<'a, R> {
    fn start(&self) -> Result<(), ErrorCode> {
        Wwdt::start(self).map_err(ErrorCode::from)
    }

    fn stop(&self) -> Result<(), ErrorCode> {
        Wwdt::stop(self).map_err(ErrorCode::from)
    }

    fn ping(&self) -> Result<(), ErrorCode> {
        self.keepalive().map_err(ErrorCode::from)
    }

    fn set_timeout(&self, timeout: u32) -> Result<(), ErrorCode> {
        Wwdt::set_timeout(self, timeout).map_err(ErrorCode::from)
    }

    fn set_pretimeout(&self, pretimeout: u32) -> Result<(), ErrorCode> {
        Wwdt::set_pretimeout(self, pretimeout).map_err(ErrorCode::from)
    }

    fn timeout(&self) -> u32 {
        self.timeouts().timeout
    }

    fn pretimeout(&self) -> u32 {
        self.timeouts().pretimeout
    }

    fn min_timeout(&self) -> u32 {
        self.timeouts().min_timeout
    }

    fn max_timeout(&self) -> Option<u32> {
        self.timeouts().max_timeout
    }

    fn info(&self) -> WatchdogInfo {
        Wwdt::info(self)
    }

    fn is_active(&self) -> bool {
        self.active.get()
    }

    fn set_pretimeout_client(&self, client: &'a dyn PretimeoutClient) {
        self.set_client(client);
    }
}
