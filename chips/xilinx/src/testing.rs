// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Host-side stand-ins for the register block, clock, interrupt line and
//! pretimeout client.

use core::cell::{Cell, RefCell};
use std::vec::Vec;

use kernel::hil::clock::ClockInterface;
use kernel::hil::interrupt::InterruptLine;
use kernel::hil::watchdog::PretimeoutClient;
use kernel::ErrorCode;

use crate::registers::{RegisterAccess, TBR_OFFSET, WWDT_REGISTER_COUNT};

/// Plain memory behaving like a register block.
///
/// Reads return the last value written. The timebase register can be
/// scripted to start counting after a number of reads.
pub struct FakeRegisters {
    words: Cell<[u32; WWDT_REGISTER_COUNT]>,
    reads: Cell<usize>,
    log: RefCell<Vec<(usize, u32)>>,
    timebase_advance_after: Cell<Option<usize>>,
    timebase_reads: Cell<usize>,
}

impl FakeRegisters {
    pub fn new() -> FakeRegisters {
        FakeRegisters {
            words: Cell::new([0; WWDT_REGISTER_COUNT]),
            reads: Cell::new(0),
            log: RefCell::new(Vec::new()),
            timebase_advance_after: Cell::new(None),
            timebase_reads: Cell::new(0),
        }
    }

    /// Sets a register the way the hardware would, without counting it as
    /// a driver write.
    pub fn poke(&self, offset: usize, value: u32) {
        let mut words = self.words.get();
        words[offset / 4] = value;
        self.words.set(words);
    }

    pub fn peek(&self, offset: usize) -> u32 {
        self.words.get()[offset / 4]
    }

    /// Number of driver writes since creation or the last `clear_log`.
    pub fn writes(&self) -> usize {
        self.log.borrow().len()
    }

    /// Driver writes in order, as `(offset, value)`.
    pub fn write_log(&self) -> Vec<(usize, u32)> {
        self.log.borrow().clone()
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn clear_log(&self) {
        self.log.borrow_mut().clear();
        self.reads.set(0);
    }

    /// Makes the timebase register read one higher per read once `reads`
    /// reads of it have been made.
    pub fn advance_timebase_after(&self, reads: usize) {
        self.timebase_advance_after.set(Some(reads));
        self.timebase_reads.set(0);
    }
}

impl RegisterAccess for FakeRegisters {
    fn read32(&self, offset: usize) -> u32 {
        self.reads.set(self.reads.get() + 1);
        let value = self.peek(offset);
        if offset != TBR_OFFSET {
            return value;
        }
        let count = self.timebase_reads.get();
        self.timebase_reads.set(count + 1);
        match self.timebase_advance_after.get() {
            Some(after) if count >= after => value.wrapping_add((count - after) as u32 + 1),
            _ => value,
        }
    }

    fn write32(&self, offset: usize, value: u32) {
        self.log.borrow_mut().push((offset, value));
        self.poke(offset, value);
    }
}

/// Clock with a fixed rate that counts enables and disables.
pub struct FakeClock {
    rate: u32,
    fail_enable: Cell<Option<ErrorCode>>,
    enabled: Cell<bool>,
    enables: Cell<usize>,
    disables: Cell<usize>,
}

impl FakeClock {
    pub fn new(rate: u32) -> FakeClock {
        FakeClock {
            rate,
            fail_enable: Cell::new(None),
            enabled: Cell::new(false),
            enables: Cell::new(0),
            disables: Cell::new(0),
        }
    }

    /// A clock whose `enable` always fails with `code`.
    pub fn failing(rate: u32, code: ErrorCode) -> FakeClock {
        let clock = FakeClock::new(rate);
        clock.fail_enable.set(Some(code));
        clock
    }

    /// Makes later `enable` calls fail with `code`, or succeed for `None`.
    pub fn set_failure(&self, code: Option<ErrorCode>) {
        self.fail_enable.set(code);
    }

    pub fn enables(&self) -> usize {
        self.enables.get()
    }

    pub fn disables(&self) -> usize {
        self.disables.get()
    }
}

impl ClockInterface for FakeClock {
    fn rate(&self) -> u32 {
        self.rate
    }

    fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    fn enable(&self) -> Result<(), ErrorCode> {
        if let Some(code) = self.fail_enable.get() {
            return Err(code);
        }
        self.enables.set(self.enables.get() + 1);
        self.enabled.set(true);
        Ok(())
    }

    fn disable(&self) {
        self.disables.set(self.disables.get() + 1);
        self.enabled.set(false);
    }
}

/// Interrupt line that either accepts or refuses a handler.
pub struct FakeIrq {
    number: u32,
    fail: Option<ErrorCode>,
    owner: Cell<Option<&'static str>>,
}

impl FakeIrq {
    pub fn new(number: u32) -> FakeIrq {
        FakeIrq {
            number,
            fail: None,
            owner: Cell::new(None),
        }
    }

    pub fn failing(number: u32, code: ErrorCode) -> FakeIrq {
        FakeIrq {
            fail: Some(code),
            ..FakeIrq::new(number)
        }
    }

    pub fn owner(&self) -> Option<&'static str> {
        self.owner.get()
    }
}

impl InterruptLine for FakeIrq {
    fn number(&self) -> u32 {
        self.number
    }

    fn request(&self, owner: &'static str) -> Result<(), ErrorCode> {
        if let Some(code) = self.fail {
            return Err(code);
        }
        self.owner.set(Some(owner));
        Ok(())
    }
}

/// Counts pretimeout notifications.
#[derive(Default)]
pub struct CountingClient {
    calls: Cell<usize>,
}

impl CountingClient {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl PretimeoutClient for CountingClient {
    fn pretimeout(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}
