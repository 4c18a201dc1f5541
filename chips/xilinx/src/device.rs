// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Attaching a watchdog instance and dispatching to its variant.
//!
//! Usage
//! -----
//!
//! ```rust,ignore
//! let variant = Variant::from_compatible("xlnx,versal-wwdt-1.0").ok_or(ErrorCode::NODEVICE)?;
//! let resources = Resources {
//!     // SAFETY: the block is mapped for the lifetime of the kernel.
//!     registers: unsafe { MmioRegion::new(WWDT_BASE, WWDT_REGISTER_COUNT) },
//!     clock: Some(&peripherals.lpd_clock),
//!     irq: Some(&peripherals.wwdt_irq),
//! };
//! let watchdog = static_init!(
//!     XilinxWdt<'static, MmioRegion>,
//!     XilinxWdt::attach(variant, resources, &WdtConfig::default())?
//! );
//! ```

use core::cell::Cell;

use kernel::hil::clock::ClockInterface;
use kernel::hil::interrupt::{InterruptLine, IrqReturn};
use kernel::hil::watchdog::{PretimeoutClient, Watchdog, WatchdogInfo};
use kernel::ErrorCode;
use log::{error, info, warn};

use crate::clock::WdtClock;
use crate::config::{WdtConfig, DEFAULT_TIMEOUT, MIN_TIMEOUT};
use crate::error::WdtError;
use crate::registers::RegisterAccess;
use crate::timeout::{interval_timeout, TimeoutConfig};
use crate::wdt::Wdt;
use crate::wwdt::{Wwdt, WWDT_IDENTITY};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// AXI/XPS timebase watchdog.
    Plain,
    /// Versal window watchdog.
    Window,
}

/// Device description compatible strings and the variant each one selects.
pub const COMPATIBLE: [(&str, Variant); 3] = [
    ("xlnx,xps-timebase-wdt-1.00.a", Variant::Plain),
    ("xlnx,xps-timebase-wdt-1.01.a", Variant::Plain),
    ("xlnx,versal-wwdt-1.0", Variant::Window),
];

impl Variant {
    pub fn from_compatible(compatible: &str) -> Option<Variant> {
        COMPATIBLE
            .iter()
            .find(|(name, _)| *name == compatible)
            .map(|&(_, variant)| variant)
    }
}

/// Platform resources of one watchdog instance.
pub struct Resources<'a, R> {
    pub registers: R,
    pub clock: Option<&'a dyn ClockInterface>,
    /// The line named "wdt". Only used by the window variant.
    pub irq: Option<&'a dyn InterruptLine>,
}

enum Device<'a, R: RegisterAccess> {
    Plain(Wdt<'a, R>),
    Window(Wwdt<'a, R>),
}

/// An attached Xilinx watchdog of either variant.
pub struct XilinxWdt<'a, R: RegisterAccess> {
    device: Device<'a, R>,
    /// Running when the system was suspended.
    suspended: Cell<bool>,
}

impl<'a, R: RegisterAccess> XilinxWdt<'a, R> {
    /// Brings up a watchdog instance.
    ///
    /// The clock is enabled for the duration of the checks and disabled
    /// again before returning; `start` enables it for good. The timer
    /// itself is left stopped.
    pub fn attach(
        variant: Variant,
        resources: Resources<'a, R>,
        config: &WdtConfig,
    ) -> Result<XilinxWdt<'a, R>, WdtError> {
        let clock = WdtClock::new(resources.clock, config.clock_frequency);
        if clock.has_source() {
            clock
                .enable()
                .inspect_err(|_| error!("unable to enable clock"))?;
        } else if config.clock_frequency.is_none() {
            warn!("the watchdog clock frequency cannot be obtained");
        }

        let device = match variant {
            Variant::Plain => Device::Plain(attach_plain(resources.registers, clock, config)?),
            Variant::Window => {
                Device::Window(attach_window(resources.registers, resources.irq, clock, config))
            }
        };

        clock.disable();

        let watchdog = XilinxWdt {
            device,
            suspended: Cell::new(false),
        };
        info!(
            "Xilinx Watchdog Timer with timeout {}s",
            Watchdog::timeout(&watchdog)
        );
        Ok(watchdog)
    }

    pub fn variant(&self) -> Variant {
        match self.device {
            Device::Plain(_) => Variant::Plain,
            Device::Window(_) => Variant::Window,
        }
    }

    pub fn plain(&self) -> Option<&Wdt<'a, R>> {
        match &self.device {
            Device::Plain(wdt) => Some(wdt),
            Device::Window(_) => None,
        }
    }

    pub fn window(&self) -> Option<&Wwdt<'a, R>> {
        match &self.device {
            Device::Plain(_) => None,
            Device::Window(wwdt) => Some(wwdt),
        }
    }

    /// Whether a started timer must never be stopped through [`Watchdog`].
    pub fn nowayout(&self) -> bool {
        match &self.device {
            Device::Plain(wdt) => wdt.nowayout(),
            Device::Window(_) => false,
        }
    }

    fn start_device(&self) -> Result<(), WdtError> {
        match &self.device {
            Device::Plain(wdt) => wdt.start(),
            Device::Window(wwdt) => wwdt.start(),
        }
    }

    /// Stops a running timer before the system sleeps. The window is not
    /// checked: the system must be able to suspend.
    pub fn suspend(&self) {
        if !Watchdog::is_active(self) {
            return;
        }
        match &self.device {
            Device::Plain(wdt) => wdt.force_stop(),
            Device::Window(wwdt) => wwdt.force_stop(),
        }
        self.suspended.set(true);
    }

    /// Restarts the timer if it was running at suspend.
    pub fn resume(&self) -> Result<(), WdtError> {
        if self.suspended.replace(false) {
            self.start_device()
        } else {
            Ok(())
        }
    }

    /// Entry point for the "wdt" interrupt line.
    pub fn handle_interrupt(&self) -> IrqReturn {
        match &self.device {
            Device::Plain(_) => IrqReturn::None,
            Device::Window(wwdt) => wwdt.handle_interrupt(),
        }
    }
}

fn attach_plain<'a, R: RegisterAccess>(
    registers: R,
    clock: WdtClock<'a>,
    config: &WdtConfig,
) -> Result<Wdt<'a, R>, WdtError> {
    if config.interval.is_none() {
        warn!("parameter \"xlnx,wdt-interval\" not found");
    }
    if config.enable_once.is_none() {
        warn!("parameter \"xlnx,wdt-enable-once\" not found");
    }

    // 0 when the period cannot be computed.
    let timeout = interval_timeout(config.interval.unwrap_or(0), clock.rate()).unwrap_or(0);
    let wdt = Wdt::new(registers, clock, timeout, config.enable_once.unwrap_or(false));

    if let Err(err) = wdt.selftest(config.selftest_loops) {
        error!("self-test routine error");
        clock.disable();
        return Err(err);
    }
    Ok(wdt)
}

fn attach_window<'a, R: RegisterAccess>(
    registers: R,
    irq: Option<&'a dyn InterruptLine>,
    clock: WdtClock<'a>,
    config: &WdtConfig,
) -> Wwdt<'a, R> {
    let mut timeouts = TimeoutConfig::for_rate(clock.rate(), DEFAULT_TIMEOUT, MIN_TIMEOUT);
    if timeouts.max_timeout.is_none() {
        warn!("clock rate unknown, the timeout cannot be changed");
    }

    let irq = irq.and_then(|line| match line.request(WWDT_IDENTITY) {
        Ok(()) => Some(line.number()),
        Err(code) => {
            warn!(
                "pretimeout reporting unavailable: {:?}",
                WdtError::InterruptSetup(code)
            );
            None
        }
    });

    if timeouts.init_timeout(config.timeout).is_err() {
        warn!("unable to set timeout value");
    }

    match timeouts.check_pretimeout(config.pretimeout) {
        Ok(()) => timeouts.pretimeout = config.pretimeout,
        Err(_) => warn!(
            "pretimeout {}s not below timeout {}s, disabled",
            config.pretimeout, timeouts.timeout
        ),
    }

    Wwdt::new(registers, clock, timeouts, irq)
}

impl<'a, R: RegisterAccess> Watchdog<'a> for XilinxWdt<'a, R> {
    fn start(&self) -> Result<(), ErrorCode> {
        self.start_device().map_err(ErrorCode::from)
    }

    fn stop(&self) -> Result<(), ErrorCode> {
        match &self.device {
            Device::Plain(wdt) => {
                if wdt.nowayout() && wdt.is_active() {
                    warn!("nowayout prevents watchdog being stopped");
                    return Err(ErrorCode::BUSY);
                }
                Watchdog::stop(wdt)
            }
            Device::Window(wwdt) => Watchdog::stop(wwdt),
        }
    }

    fn ping(&self) -> Result<(), ErrorCode> {
        match &self.device {
            Device::Plain(wdt) => Watchdog::ping(wdt),
            Device::Window(wwdt) => Watchdog::ping(wwdt),
        }
    }

    fn set_timeout(&self, timeout: u32) -> Result<(), ErrorCode> {
        match &self.device {
            Device::Plain(wdt) => Watchdog::set_timeout(wdt, timeout),
            Device::Window(wwdt) => Watchdog::set_timeout(wwdt, timeout),
        }
    }

    fn set_pretimeout(&self, pretimeout: u32) -> Result<(), ErrorCode> {
        match &self.device {
            Device::Plain(wdt) => Watchdog::set_pretimeout(wdt, pretimeout),
            Device::Window(wwdt) => Watchdog::set_pretimeout(wwdt, pretimeout),
        }
    }

    fn timeout(&self) -> u32 {
        match &self.device {
            Device::Plain(wdt) => Watchdog::timeout(wdt),
            Device::Window(wwdt) => Watchdog::timeout(wwdt),
        }
    }

    fn pretimeout(&self) -> u32 {
        match &self.device {
            Device::Plain(wdt) => Watchdog::pretimeout(wdt),
            Device::Window(wwdt) => Watchdog::pretimeout(wwdt),
        }
    }

    fn min_timeout(&self) -> u32 {
        match &self.device {
            Device::Plain(wdt) => Watchdog::min_timeout(wdt),
            Device::Window(wwdt) => Watchdog::min_timeout(wwdt),
        }
    }

    fn max_timeout(&self) -> Option<u32> {
        match &self.device {
            Device::Plain(wdt) => Watchdog::max_timeout(wdt),
            Device::Window(wwdt) => Watchdog::max_timeout(wwdt),
        }
    }

    fn info(&self) -> WatchdogInfo {
        match &self.device {
            Device::Plain(wdt) => wdt.info(),
            Device::Window(wwdt) => wwdt.info(),
        }
    }

    fn is_active(&self) -> bool {
        match &self.device {
            Device::Plain(wdt) => wdt.is_active(),
            Device::Window(wwdt) => wwdt.is_active(),
        }
    }

    fn set_pretimeout_client(&self, client: &'a dyn PretimeoutClient) {
        if let Device::Window(wwdt) = &self.device {
            wwdt.set_client(client);
        }
    }
}
