// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2026.

//! Register map of the AXI timebase watchdog and the Versal window watchdog.
//!
//! Operation code never touches raw register words. It goes through the
//! typed views [`WdtRegisters`] and [`WwdtRegisters`], which hand out
//! `LocalRegisterCopy` values and accept field values built from the
//! bitfields declared here.

use kernel::utilities::cells::VolatileCell;
use kernel::utilities::registers::{register_bitfields, FieldValue, LocalRegisterCopy};

/// Control/Status Register 0 (timebase watchdog).
pub const TWCSR0_OFFSET: usize = 0x0;
/// Control/Status Register 1 (timebase watchdog).
pub const TWCSR1_OFFSET: usize = 0x4;
/// Free-running timebase register (timebase watchdog).
pub const TBR_OFFSET: usize = 0x8;

/// Master Write Control register (window watchdog).
pub const MWR_OFFSET: usize = 0x00;
/// Enable and Status register (window watchdog).
pub const ESR_OFFSET: usize = 0x04;
/// Function Control register (window watchdog).
pub const FCR_OFFSET: usize = 0x08;
/// First Window register (window watchdog).
pub const FWR_OFFSET: usize = 0x0c;
/// Second Window register (window watchdog).
pub const SWR_OFFSET: usize = 0x10;

/// Number of 32-bit registers in the timebase watchdog block.
pub const WDT_REGISTER_COUNT: usize = 3;
/// Number of 32-bit registers in the window watchdog block.
pub const WWDT_REGISTER_COUNT: usize = 5;

register_bitfields![u32,
    pub TWCSR0 [
        /// Reset status, write 1 to clear
        WRS OFFSET(3) NUMBITS(1) [],
        /// Timer state, write 1 to clear
        WDS OFFSET(2) NUMBITS(1) [],
        /// Enable bit 1
        EWDT1 OFFSET(1) NUMBITS(1) []
    ],
    pub TWCSR1 [
        /// Enable bit 2
        EWDT2 OFFSET(0) NUMBITS(1) []
    ],
    pub MWR [
        /// Must be set before writing ESR, FCR, FWR or SWR
        AEN OFFSET(0) NUMBITS(1) []
    ],
    pub ESR [
        /// Pretimeout interrupt pending
        WINT OFFSET(16) NUMBITS(1) [],
        /// Window phase switch
        WSW OFFSET(8) NUMBITS(1) [],
        /// Window watchdog enable
        WEN OFFSET(0) NUMBITS(1) []
    ],
    pub FCR [
        /// Second window byte count of the selected byte
        SBC OFFSET(8) NUMBITS(8) [],
        /// Byte segment selection
        BSS OFFSET(6) NUMBITS(2) [
            Byte0 = 0,
            Byte1 = 1,
            Byte2 = 2,
            Byte3 = 3
        ]
    ]
];

pub type ControlStatus0 = LocalRegisterCopy<u32, TWCSR0::Register>;
pub type ControlStatus1 = LocalRegisterCopy<u32, TWCSR1::Register>;
pub type EnableStatus = LocalRegisterCopy<u32, ESR::Register>;
pub type FunctionControl = LocalRegisterCopy<u32, FCR::Register>;

/// Raw 32-bit access to a watchdog register block.
///
/// `offset` is a byte offset from the start of the block. Implementations
/// never fail: the block is assumed mapped for as long as the value lives.
pub trait RegisterAccess {
    fn read32(&self, offset: usize) -> u32;
    fn write32(&self, offset: usize, value: u32);

    /// Number of 32-bit registers backing the block, if bounded.
    fn register_count(&self) -> Option<usize> {
        None
    }
}

impl<T: RegisterAccess + ?Sized> RegisterAccess for &T {
    fn read32(&self, offset: usize) -> u32 {
        (**self).read32(offset)
    }

    fn write32(&self, offset: usize, value: u32) {
        (**self).write32(offset, value);
    }

    fn register_count(&self) -> Option<usize> {
        (**self).register_count()
    }
}

/// Whether `bus` is large enough for a view of `count` registers.
fn covers<R: RegisterAccess>(bus: &R, count: usize) -> bool {
    !matches!(bus.register_count(), Some(len) if len < count)
}

/// A memory-mapped register block.
pub struct MmioRegion {
    registers: &'static [VolatileCell<u32>],
}

impl MmioRegion {
    /// Wraps `count` consecutive 32-bit registers starting at `base`.
    ///
    /// # Safety
    ///
    /// `base` must point to a mapped, 4-byte aligned register block of at
    /// least `count` registers that stays mapped for the rest of the
    /// program, and no other `MmioRegion` may cover it. `count` must be at
    /// least [`WDT_REGISTER_COUNT`] or [`WWDT_REGISTER_COUNT`] for the view
    /// the region is handed to; the views check this in debug builds.
    pub unsafe fn new(base: *const u32, count: usize) -> MmioRegion {
        MmioRegion {
            // SAFETY: `VolatileCell<u32>` is `repr(transparent)` over `u32`
            // and the caller guarantees the block is mapped.
            registers: unsafe {
                core::slice::from_raw_parts(base.cast::<VolatileCell<u32>>(), count)
            },
        }
    }
}

impl RegisterAccess for MmioRegion {
    fn read32(&self, offset: usize) -> u32 {
        self.registers[offset / 4].get()
    }

    fn write32(&self, offset: usize, value: u32) {
        self.registers[offset / 4].set(value);
    }

    fn register_count(&self) -> Option<usize> {
        Some(self.registers.len())
    }
}

/// Typed view over the timebase watchdog registers.
pub struct WdtRegisters<R> {
    bus: R,
}

impl<R: RegisterAccess> WdtRegisters<R> {
    pub fn new(bus: R) -> WdtRegisters<R> {
        debug_assert!(covers(&bus, WDT_REGISTER_COUNT));
        WdtRegisters { bus }
    }

    pub fn control_status0(&self) -> ControlStatus0 {
        LocalRegisterCopy::new(self.bus.read32(TWCSR0_OFFSET))
    }

    pub fn set_control_status0(&self, value: ControlStatus0) {
        self.bus.write32(TWCSR0_OFFSET, value.get());
    }

    /// Read-modify-write of Control/Status Register 0.
    pub fn modify_control_status0(&self, field: FieldValue<u32, TWCSR0::Register>) {
        let mut value = self.control_status0();
        value.modify(field);
        self.set_control_status0(value);
    }

    /// Writes Control/Status Register 1 with only `field` set.
    pub fn write_control_status1(&self, field: FieldValue<u32, TWCSR1::Register>) {
        let mut value = ControlStatus1::new(0);
        value.write(field);
        self.bus.write32(TWCSR1_OFFSET, value.get());
    }

    /// Current value of the free-running timebase counter.
    pub fn timebase(&self) -> u32 {
        self.bus.read32(TBR_OFFSET)
    }
}

/// Typed view over the window watchdog registers.
pub struct WwdtRegisters<R> {
    bus: R,
}

impl<R: RegisterAccess> WwdtRegisters<R> {
    pub fn new(bus: R) -> WwdtRegisters<R> {
        debug_assert!(covers(&bus, WWDT_REGISTER_COUNT));
        WwdtRegisters { bus }
    }

    /// Opens the write gate for ESR, FCR, FWR and SWR.
    pub fn unlock_writes(&self) {
        let mut value = LocalRegisterCopy::<u32, MWR::Register>::new(0);
        value.write(MWR::AEN::SET);
        self.bus.write32(MWR_OFFSET, value.get());
    }

    pub fn enable_status(&self) -> EnableStatus {
        LocalRegisterCopy::new(self.bus.read32(ESR_OFFSET))
    }

    pub fn set_enable_status(&self, value: EnableStatus) {
        self.bus.write32(ESR_OFFSET, value.get());
    }

    /// Read-modify-write of the Enable and Status register.
    pub fn modify_enable_status(&self, field: FieldValue<u32, ESR::Register>) {
        let mut value = self.enable_status();
        value.modify(field);
        self.set_enable_status(value);
    }

    /// Clears WEN by writing ones to every other bit, which also
    /// acknowledges the write-one-to-clear status bits.
    pub fn disable(&self) {
        let mut value = EnableStatus::new(u32::MAX);
        value.modify(ESR::WEN::CLEAR);
        self.set_enable_status(value);
    }

    /// Writes the Function Control register with only `field` set.
    pub fn write_function_control(&self, field: FieldValue<u32, FCR::Register>) {
        let mut value = FunctionControl::new(0);
        value.write(field);
        self.bus.write32(FCR_OFFSET, value.get());
    }

    pub fn function_control(&self) -> FunctionControl {
        LocalRegisterCopy::new(self.bus.read32(FCR_OFFSET))
    }

    pub fn first_window(&self) -> u32 {
        self.bus.read32(FWR_OFFSET)
    }

    pub fn set_first_window(&self, cycles: u32) {
        self.bus.write32(FWR_OFFSET, cycles);
    }

    pub fn second_window(&self) -> u32 {
        self.bus.read32(SWR_OFFSET)
    }

    pub fn set_second_window(&self, cycles: u32) {
        self.bus.write32(SWR_OFFSET, cycles);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeRegisters;

    #[test]
    fn disable_clears_only_the_enable_bit() {
        let fake = FakeRegisters::new();
        fake.poke(ESR_OFFSET, 0x0000_0001);
        let regs = WwdtRegisters::new(&fake);

        regs.disable();

        assert_eq!(fake.peek(ESR_OFFSET), 0xFFFF_FFFE);
        assert!(!regs.enable_status().is_set(ESR::WEN));
    }

    #[test]
    fn function_control_fields_pack_into_low_half() {
        let fake = FakeRegisters::new();
        let regs = WwdtRegisters::new(&fake);

        regs.write_function_control(FCR::SBC.val(0x0B) + FCR::BSS::Byte3);

        assert_eq!(fake.peek(FCR_OFFSET), 0x0BC0);
        assert_eq!(regs.function_control().read(FCR::SBC), 0x0B);
    }

    #[test]
    fn control_status_writes_touch_expected_offsets() {
        let fake = FakeRegisters::new();
        let regs = WdtRegisters::new(&fake);

        regs.modify_control_status0(TWCSR0::WRS::SET + TWCSR0::EWDT1::SET);
        regs.write_control_status1(TWCSR1::EWDT2::SET);

        assert_eq!(fake.peek(TWCSR0_OFFSET), 0b1010);
        assert_eq!(fake.peek(TWCSR1_OFFSET), 0b1);
        assert_eq!(fake.writes(), 2);
    }

    #[test]
    fn mmio_region_reads_back_what_was_written() {
        let block: [VolatileCell<u32>; WWDT_REGISTER_COUNT] = [
            VolatileCell::new(0),
            VolatileCell::new(0),
            VolatileCell::new(0),
            VolatileCell::new(0),
            VolatileCell::new(0),
        ];
        // SAFETY: `block` outlives `region`, which is dropped at the end of
        // this test, and nothing else aliases it.
        let region = unsafe { MmioRegion::new(block.as_ptr().cast::<u32>(), block.len()) };
        let regs = WwdtRegisters::new(region);

        regs.set_second_window(1_000_000_000);
        regs.unlock_writes();

        assert_eq!(regs.second_window(), 1_000_000_000);
        assert_eq!(block[0].get(), 1);
    }

    #[test]
    fn timebase_block_fits_plain_view_only() {
        let block: [VolatileCell<u32>; WDT_REGISTER_COUNT] =
            [VolatileCell::new(0), VolatileCell::new(0), VolatileCell::new(0)];
        // SAFETY: `block` outlives `region` and nothing else aliases it.
        let region = unsafe { MmioRegion::new(block.as_ptr().cast::<u32>(), block.len()) };

        assert_eq!(region.register_count(), Some(WDT_REGISTER_COUNT));
        assert!(covers(&region, WDT_REGISTER_COUNT));
        assert!(!covers(&region, WWDT_REGISTER_COUNT));
        assert!(covers(&FakeRegisters::new(), WWDT_REGISTER_COUNT));
    }

    #[test]
    #[should_panic]
    fn window_view_rejects_short_block() {
        let block: [VolatileCell<u32>; WDT_REGISTER_COUNT] =
            [VolatileCell::new(0), VolatileCell::new(0), VolatileCell::new(0)];
        // SAFETY: `block` outlives `region` and nothing else aliases it.
        let region = unsafe { MmioRegion::new(block.as_ptr().cast::<u32>(), block.len()) };

        let _regs = WwdtRegisters::new(region);
    }
}
