//! Fetch Stage Unit Tests.
//!
//! Verifies that `fetch_stage`:
//!   1. Captures the instruction word at the committed PC
//!   2. Captures PC + 4 as the carried PC
//!   3. Fetches zero from unmapped addresses without faulting

use pipesim_core::core::pipeline::stages::fetch_stage;

use crate::common::builder::instruction::InstructionBuilder;
use crate::common::harness::{TEXT_BASE, TestContext};

#[test]
fn captures_word_at_pc() {
    let add = InstructionBuilder::new().add(1, 2, 3).build();
    let mut tc = TestContext::with_program(&[add]);

    fetch_stage(tc.cpu_mut());
    assert_eq!(tc.cpu().latch_shadow.if_id.ir, add);
}

#[test]
fn captures_pc_plus_four_as_carried_pc() {
    let mut tc = TestContext::with_program(&[0x13]);

    fetch_stage(tc.cpu_mut());
    assert_eq!(tc.cpu().latch_shadow.if_id.pc, TEXT_BASE + 4);
}

#[test]
fn fetches_from_wherever_the_pc_points() {
    let xor = InstructionBuilder::new().xor(4, 5, 6).build();
    let mut tc = TestContext::new();
    tc.sim.write_memory(TEXT_BASE + 0x100, xor);
    tc.cpu_mut().state.pc = TEXT_BASE + 0x100;

    fetch_stage(tc.cpu_mut());
    assert_eq!(tc.cpu().latch_shadow.if_id.ir, xor);
    assert_eq!(tc.cpu().latch_shadow.if_id.pc, TEXT_BASE + 0x104);
}

#[test]
fn unmapped_pc_fetches_zero() {
    let mut tc = TestContext::new();
    tc.cpu_mut().state.pc = 0;

    fetch_stage(tc.cpu_mut());
    assert_eq!(tc.cpu().latch_shadow.if_id.ir, 0, "unmapped fetch is zero");
    assert_eq!(tc.cpu().latch_shadow.if_id.pc, 4, "carried PC still advances");
}

#[test]
fn does_not_touch_the_committed_latch() {
    let mut tc = TestContext::with_program(&[0x13]);
    fetch_stage(tc.cpu_mut());
    assert_eq!(tc.cpu().latch.if_id.ir, 0, "committed latch unchanged until commit");
}
