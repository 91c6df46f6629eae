//! The bridge's two-level notion of simulation time.
//!
//! The peer counts time in its own units; the kernel counts in units one
//! thousand times finer, and the sub-unit range is spent on zero-delay
//! "delta" iterations. On entry to every read-only phase the kernel clock
//! must equal `pli_time * 1000 + delta`, modulo 2^32 to tolerate kernels
//! whose time word is 32 bits wide.

use log::error;

/// Kernel units per peer unit.
pub const TIME_RATIO: u64 = 1000;

/// Exclusive upper bound on the delta counter. A peer that schedules this
/// many zero-delay iterations without advancing time has violated the
/// protocol.
pub const DELTA_LIMIT: u32 = 1000;

/// How the kernel should be advanced after a drive frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Re-enter after this many kernel units.
    Delay(u32),
    /// Iterate once more at the current time.
    Delta,
}

/// The (`pli_time`, `delta`) pair.
///
/// `pli_time` is monotonic non-decreasing and moves only on a peer-requested
/// time advance; `delta` counts zero-delay iterations at the current
/// `pli_time` and resets on every advance.
#[derive(Debug, Default)]
pub struct TimeAxis {
    pli_time: u64,
    delta: u32,
}

impl TimeAxis {
    pub fn new() -> TimeAxis {
        TimeAxis { pli_time: 0, delta: 0 }
    }

    pub fn pli_time(&self) -> u64 {
        self.pli_time
    }

    pub fn delta(&self) -> u32 {
        self.delta
    }

    /// The kernel time this axis expects, `pli_time * 1000 + delta`.
    pub fn kernel_time(&self) -> u64 {
        self.pli_time * TIME_RATIO + u64::from(self.delta)
    }

    /// Asserts that the observed kernel clock agrees with this axis.
    ///
    /// Comparison is modulo 2^32: some kernels report a wrapped 32-bit time
    /// word long after the expected time has outgrown it.
    pub fn check_coherence(&self, verilog_time: u64) {
        let expected = self.kernel_time();
        if verilog_time != expected {
            error!(
                "kernel time {} != {} (pli_time {}, delta {})",
                verilog_time, expected, self.pli_time, self.delta
            );
        }
        assert_eq!(
            verilog_time & 0xFFFF_FFFF,
            expected & 0xFFFF_FFFF,
            "kernel time out of sync with the peer clock"
        );
    }

    /// Decides between a delayed re-entry and a delta iteration for a peer
    /// request of absolute time `peer_time`.
    ///
    /// A request in the past, a delay wider than 32 bits and a delta counter
    /// hitting [`DELTA_LIMIT`] are all protocol violations and assert.
    pub fn advance(&mut self, peer_time: u64) -> Advance {
        assert!(
            peer_time >= self.pli_time,
            "peer requested time {} behind current time {}",
            peer_time,
            self.pli_time
        );
        let delay = (peer_time - self.pli_time) * TIME_RATIO;
        assert!(delay <= 0xFFFF_FFFF, "peer requested a delay wider than 32 bits");
        if delay > 0 {
            // The pre-scheduled delta callback for the current tick still
            // fires; it sees delta == 0 and backs off.
            assert!(delay > u64::from(self.delta));
            let delay = delay - u64::from(self.delta);
            self.delta = 0;
            self.pli_time = peer_time;
            Advance::Delay(delay as u32)
        } else {
            self.delta += 1;
            assert!(self.delta < DELTA_LIMIT, "peer fails to advance time");
            Advance::Delta
        }
    }
}
