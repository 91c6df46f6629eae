//! The interpreted-VPI binding.
//!
//! Loading the shared object runs `vlog_startup_routines`, which registers
//! the `$to_myhdl` and `$from_myhdl` system tasks. Each task runs once, at
//! time 0: `$from_myhdl` announces the driven registers to the peer,
//! `$to_myhdl` announces the monitored signals, installs a value-change
//! callback per signal and arms the first read-only callback together with
//! the pre-scheduled delta callback. From there the kernel re-enters the
//! bridge through the callbacks and the sync machine in
//! [`myhdl_core::sync`](crate::core::sync) takes over.

mod kernel;
mod tasks;

pub use self::kernel::VpiKernel;
pub use self::tasks::{myhdl_register, vpi_compat_bootstrap};
