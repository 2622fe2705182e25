//! Memory Subsystem Unit Tests.
//!
//! Verifies the segmented region table:
//!   1. Round-trip — write32 then read32 returns the value, everywhere in
//!      a mapped region
//!   2. Containment — unmapped reads return 0, unmapped writes are dropped
//!   3. Byte order — words are stored little-endian
//!   4. Region-end behavior — bytes past a region's end read as zero and
//!      drop on write
//!   5. Reset — every buffer is zeroed
//!   6. Validation — overlapping and empty regions are rejected

use pipesim_core::common::SimError;
use pipesim_core::config::RegionConfig;
use pipesim_core::soc::Memory;
use proptest::prelude::*;

const BASE: u32 = 0x0040_0000;
const SIZE: u32 = 0x1000;

/// A single small region for focused tests.
fn memory() -> Memory {
    Memory::new(&[RegionConfig::new("text", BASE, SIZE)]).unwrap()
}

// ══════════════════════════════════════════════════════════
// 1. Round-trip
// ══════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn write_then_read_round_trips(offset in 0u32..(SIZE - 4), value: u32) {
        let mut mem = memory();
        mem.write32(BASE + offset, value);
        prop_assert_eq!(mem.read32(BASE + offset), value);
    }

    #[test]
    fn unmapped_reads_return_zero(addr in 0u32..BASE, value: u32) {
        let mut mem = memory();
        mem.write32(addr, value);
        prop_assert_eq!(mem.read32(addr), 0);
    }
}

#[test]
fn unmapped_write_has_no_observable_effect() {
    let mut mem = memory();
    mem.write32(BASE, 0x1234_5678);
    mem.write32(BASE + SIZE, 0xFFFF_FFFF);

    assert_eq!(mem.read32(BASE), 0x1234_5678, "mapped data untouched");
    assert_eq!(mem.read32(BASE + SIZE), 0, "unmapped stays unmapped");
}

// ══════════════════════════════════════════════════════════
// 2. Byte order
// ══════════════════════════════════════════════════════════

#[test]
fn words_are_stored_little_endian() {
    let mut mem = memory();
    mem.write32(BASE, 0xAABB_CCDD);

    // Reading one byte higher shifts the low byte out and pulls in the
    // next (zero) byte at the top.
    assert_eq!(mem.read32(BASE + 1), 0x00AA_BBCC);
    assert_eq!(mem.read32(BASE + 2), 0x0000_AABB);
    assert_eq!(mem.read32(BASE + 3), 0x0000_00AA);
}

#[test]
fn adjacent_words_do_not_alias() {
    let mut mem = memory();
    mem.write32(BASE, 0x1111_1111);
    mem.write32(BASE + 4, 0x2222_2222);

    assert_eq!(mem.read32(BASE), 0x1111_1111);
    assert_eq!(mem.read32(BASE + 4), 0x2222_2222);
}

// ══════════════════════════════════════════════════════════
// 3. Region-end behavior
// ══════════════════════════════════════════════════════════

#[test]
fn word_at_region_end_truncates_per_byte() {
    let mut mem = memory();
    let last = BASE + SIZE - 1;

    // Only the first byte of the word lies inside the region.
    mem.write32(last, 0xDDCC_BBAA);
    assert_eq!(mem.read32(last), 0x0000_00AA);
}

#[test]
fn word_two_bytes_before_region_end() {
    let mut mem = memory();
    let addr = BASE + SIZE - 2;

    mem.write32(addr, 0xDDCC_BBAA);
    assert_eq!(mem.read32(addr), 0x0000_BBAA);
}

// ══════════════════════════════════════════════════════════
// 4. Reset
// ══════════════════════════════════════════════════════════

#[test]
fn reset_zeroes_every_region() {
    let mut mem = Memory::new(&[
        RegionConfig::new("text", BASE, SIZE),
        RegionConfig::new("data", 0x1001_0000, SIZE),
    ])
    .unwrap();

    mem.write32(BASE + 8, 0xDEAD_BEEF);
    mem.write32(0x1001_0010, 0xCAFE_F00D);
    mem.reset();

    assert_eq!(mem.read32(BASE + 8), 0);
    assert_eq!(mem.read32(0x1001_0010), 0);
}

// ══════════════════════════════════════════════════════════
// 5. Validation
// ══════════════════════════════════════════════════════════

#[test]
fn overlapping_regions_are_rejected() {
    let result = Memory::new(&[
        RegionConfig::new("text", BASE, SIZE),
        RegionConfig::new("data", BASE + SIZE - 1, SIZE),
    ]);
    assert!(matches!(result, Err(SimError::OverlappingRegions(_, _))));
}

#[test]
fn empty_region_is_rejected() {
    let result = Memory::new(&[RegionConfig::new("text", BASE, 0)]);
    assert!(matches!(result, Err(SimError::EmptyRegion(_))));
}

#[test]
fn region_past_address_space_is_rejected() {
    let result = Memory::new(&[RegionConfig::new("high", 0xFFFF_FFF0, 0x100)]);
    assert!(matches!(result, Err(SimError::RegionOutOfRange(_))));
}

#[test]
fn disjoint_regions_are_accepted() {
    let mem = Memory::new(&[
        RegionConfig::new("text", BASE, SIZE),
        RegionConfig::new("data", BASE + SIZE, SIZE),
    ])
    .unwrap();
    assert_eq!(mem.regions().len(), 2);
    assert_eq!(mem.regions()[0].name(), "text");
}
