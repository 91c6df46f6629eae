//! Time axis laws: coherence, delta bounds, advance arithmetic.

use crate::time::{Advance, TimeAxis, DELTA_LIMIT};

#[test]
fn same_time_requests_become_delta_iterations() {
    let mut time = TimeAxis::new();
    assert_eq!(time.advance(0), Advance::Delta);
    assert_eq!(time.delta(), 1);
    assert_eq!(time.advance(0), Advance::Delta);
    assert_eq!(time.delta(), 2);
    assert_eq!(time.pli_time(), 0);
}

#[test]
fn advances_are_compensated_for_consumed_deltas() {
    let mut time = TimeAxis::new();
    time.advance(0);
    // One delta consumed one kernel unit; the 5000-unit jump shrinks by it.
    assert_eq!(time.advance(5), Advance::Delay(4999));
    assert_eq!(time.pli_time(), 5);
    assert_eq!(time.delta(), 0);
    assert_eq!(time.kernel_time(), 5000);
}

#[test]
fn successive_advances_accumulate() {
    let mut time = TimeAxis::new();
    assert_eq!(time.advance(7), Advance::Delay(7000));
    assert_eq!(time.advance(7), Advance::Delta);
    assert_eq!(time.advance(7), Advance::Delta);
    assert_eq!(time.advance(12), Advance::Delay(4998));
    assert_eq!(time.kernel_time(), 12000);
}

#[test]
fn coherence_holds_through_a_32_bit_kernel_rollover() {
    let mut time = TimeAxis::new();
    // Walk past 2^32 kernel units: 4294968 peer units = 4294968000 kernel
    // units, reached in two jumps to keep each delay within 32 bits.
    time.advance(4_000_000);
    time.advance(4_294_968);
    assert!(time.kernel_time() > u64::from(u32::MAX));
    let wrapped = time.kernel_time() & 0xFFFF_FFFF;
    time.check_coherence(wrapped);
}

#[test]
#[should_panic(expected = "out of sync")]
fn coherence_mismatch_asserts() {
    let mut time = TimeAxis::new();
    time.advance(3);
    time.check_coherence(2999);
}

#[test]
#[should_panic(expected = "behind current time")]
fn backwards_requests_assert() {
    let mut time = TimeAxis::new();
    time.advance(10);
    time.advance(9);
}

#[test]
#[should_panic(expected = "fails to advance")]
fn delta_overflow_asserts() {
    let mut time = TimeAxis::new();
    for _ in 0..DELTA_LIMIT {
        time.advance(0);
    }
}
