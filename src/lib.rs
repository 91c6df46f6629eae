//! The MyHDL cosimulation bridge.
//!
//! Loaded into an event-driven Verilog simulator, the bridge samples HDL
//! signals into a MyHDL process and drives HDL registers from it, in
//! lockstep with the kernel's event queue, over a pair of unidirectional
//! byte pipes named by the `MYHDL_TO_PIPE` / `MYHDL_FROM_PIPE` environment
//! variables.
//!
//! Two bindings share the [`core`] state machine:
//!
//! * [`vpi`] (feature `vpi`, default) — the interpreted-simulator path.
//!   The simulator loads the `cdylib` and runs `vlog_startup_routines`,
//!   registering `$to_myhdl(...)` and `$from_myhdl(...)`; each must be
//!   called exactly once at time 0.
//! * [`model`] (feature `model`) — the compiled-model path. The generated
//!   model's `main` links the `staticlib`, provides the signal descriptor
//!   tables and calls `myhdl_init` / `myhdl_push_outputs` /
//!   `myhdl_pull_inputs` around its `eval` loop.
//!
//! Diagnostics go through the [`log`] facade; the bridge installs a logger
//! that prints through `vpi_printf`, so messages land in the simulator
//! transcript. Setting `MYHDL_TRAFFIC_DEBUG` in the environment raises the
//! level to `trace`, which logs every frame on the pipes.

pub extern crate myhdl_core as core;
pub extern crate vpi_sys as ffi;

#[cfg(any(feature = "vpi", feature = "model"))]
mod functions;
#[cfg(any(feature = "vpi", feature = "model"))]
mod logger;

#[cfg(feature = "model")]
pub mod model;
#[cfg(feature = "vpi")]
pub mod vpi;

pub use crate::core::{Bridge, Error, Phase, Result, SimKernel};
