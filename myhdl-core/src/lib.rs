//! Simulator-agnostic core of the MyHDL cosimulation bridge.
//!
//! The bridge couples an event-driven HDL kernel to an external MyHDL
//! simulation over a pair of unidirectional byte pipes, in lockstep: at the
//! end of each kernel tick the changed outputs are pushed, the peer answers
//! with the next time to run to and the values to drive, and the bridge
//! arranges the kernel callbacks that make it so. This crate holds
//! everything about that exchange which does not touch a concrete
//! simulator API:
//!
//! * the pipe [`transport`] and its fixed-size framing,
//! * the [`time`] axis relating peer time, delta cycles and kernel time,
//! * the signal [`registry`] with its change flags,
//! * the wire-protocol [`frame`] reader/writers,
//! * the [`sync`] state machine, written against the [`SimKernel`] trait.
//!
//! The `myhdl-cosim` crate layers the interpreted-VPI and compiled-model
//! bindings on top; the [`vpi-sys`] crate below holds the raw FFI.
//!
//! [`vpi-sys`]: https://github.com/myhdl/myhdl-cosim/tree/master/vpi-sys

#[cfg(test)]
mod tests;

pub mod error;
pub mod frame;
pub mod registry;
pub mod sync;
pub mod time;
pub mod transport;
pub mod util;

pub use crate::error::{Error, Result};
pub use crate::frame::{DriveFrame, Line, SampleFrame};
pub use crate::registry::{InputSignal, OutputSignal, Registry, MAX_ARGS};
pub use crate::sync::{abort, Bridge, Phase, SimKernel};
pub use crate::time::{Advance, TimeAxis, DELTA_LIMIT, TIME_RATIO};
pub use crate::transport::{PipeLink, FROM_PIPE_ENV, MAX_LINE, TO_PIPE_ENV};
