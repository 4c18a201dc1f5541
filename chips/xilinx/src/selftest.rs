// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Liveness check of the timebase counter.

use crate::error::WdtError;
use crate::registers::{RegisterAccess, WdtRegisters};

/// Checks that the timebase counter moves within `bound` reads.
///
/// The first read is the reference, so a stuck counter fails after exactly
/// `bound` reads (one read when `bound` is 0). A stuck counter means the
/// watchdog is not clocked and could never fire.
pub fn selftest<R: RegisterAccess>(registers: &WdtRegisters<R>, bound: u32) -> Result<(), WdtError> {
    let reference = registers.timebase();

    for _ in 1..bound {
        if registers.timebase() != reference {
            return Ok(());
        }
    }

    Err(WdtError::SelfTest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::TBR_OFFSET;
    use crate::testing::FakeRegisters;

    #[test]
    fn stuck_counter_fails_after_bound_reads() {
        let fake = FakeRegisters::new();
        fake.poke(TBR_OFFSET, 0x1234);
        let regs = WdtRegisters::new(&fake);

        assert_eq!(selftest(&regs, 16), Err(WdtError::SelfTest));
        assert_eq!(fake.reads(), 16);
    }

    #[test]
    fn moving_counter_passes_early() {
        let fake = FakeRegisters::new();
        fake.advance_timebase_after(3);
        let regs = WdtRegisters::new(&fake);

        assert_eq!(selftest(&regs, 16), Ok(()));
        assert_eq!(fake.reads(), 4);
    }

    #[test]
    fn counter_moving_on_last_read_still_passes() {
        let fake = FakeRegisters::new();
        fake.advance_timebase_after(15);
        let regs = WdtRegisters::new(&fake);

        assert_eq!(selftest(&regs, 16), Ok(()));
        assert_eq!(fake.reads(), 16);
    }

    #[test]
    fn counter_moving_after_bound_is_too_late() {
        let fake = FakeRegisters::new();
        fake.advance_timebase_after(16);
        let regs = WdtRegisters::new(&fake);

        assert_eq!(selftest(&regs, 16), Err(WdtError::SelfTest));
        assert_eq!(fake.reads(), 16);
    }

    #[test]
    fn default_bound_limits_reads() {
        let fake = FakeRegisters::new();
        let regs = WdtRegisters::new(&fake);

        assert_eq!(
            selftest(&regs, crate::config::SELFTEST_LOOP_COUNT),
            Err(WdtError::SelfTest)
        );
        assert_eq!(fake.reads(), 0x0001_0000);
    }

    #[test]
    fn zero_bound_never_passes() {
        let fake = FakeRegisters::new();
        fake.advance_timebase_after(0);
        let regs = WdtRegisters::new(&fake);

        assert_eq!(selftest(&regs, 0), Err(WdtError::SelfTest));
        assert_eq!(fake.reads(), 1);
    }
}
