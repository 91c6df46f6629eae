//! The time-synchronization state machine.
//!
//! The kernel re-enters the bridge through three callback kinds: the
//! read-only sample phase at the end of a tick, a delayed re-entry used to
//! advance time, and a one-kernel-unit "delta" re-entry used to apply
//! driven inputs and iterate zero-delay sub-cycles. All three collapse into
//! [`Bridge::dispatch`] on a [`Phase`] tag; state that must survive between
//! callbacks (notably the saved drive frame) lives as fields of the bridge
//! rather than in per-callback heap payloads.
//!
//! A cycle looks like:
//!
//! 1. read-only: push changed outputs at `pli_time`, read the drive frame,
//!    decide delay vs delta;
//! 2. delta (pre-scheduled one kernel unit later): apply the saved drive
//!    values, re-arm read-only and the next delta;
//! 3. on a time advance, a delayed callback lands exactly on the requested
//!    kernel time and re-arms the pair; the stale pre-scheduled delta sees
//!    a zero delta counter and backs off.

use log::info;

use crate::error::{Error, Result};
use crate::frame::{DriveFrame, SampleFrame};
use crate::registry::Registry;
use crate::time::{Advance, TimeAxis};
use crate::transport::PipeLink;

/// The callback kind being dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Read-only sample phase; no writes allowed this tick.
    ReadOnly,
    /// Re-entry after a requested number of kernel units.
    Delay,
    /// Re-entry one kernel unit later, for input application.
    Delta,
}

/// The kernel services the state machine needs.
///
/// The interpreted-VPI binding implements this over `vpi_*` calls; the
/// compiled-model binding implements it over the linked signal descriptor
/// arrays, with a no-op scheduler (there the host main loop re-enters the
/// bridge directly). Tests drive the machine with a scripted mock.
pub trait SimKernel {
    /// Current kernel time.
    fn kernel_time(&mut self) -> u64;

    /// Samples output `index`, returning its lowercase hex value.
    ///
    /// Returns the value when `force` is set, or when the kernel's own
    /// change detection reports a change since the last push. Kernels whose
    /// changes are reported through [`Bridge::mark_changed`] return `None`
    /// for an unforced sample.
    fn sample(&mut self, index: usize, force: bool) -> Option<String>;

    /// Drives input `index` with a hex value, no-delay semantics.
    fn drive(&mut self, index: usize, hexval: &str);

    /// Requests a callback: `Phase::ReadOnly` at the current time,
    /// `Phase::Delta` after `delay` (always 1) kernel units, `Phase::Delay`
    /// after `delay` kernel units.
    fn schedule(&mut self, phase: Phase, delay: u32);

    /// Terminates the simulation.
    fn finish(&mut self);
}

/// The cosimulation bridge: transport, time axis, signal tables and the
/// sync state machine, as one kernel-owned object.
#[derive(Debug)]
pub struct Bridge {
    link: PipeLink,
    time: TimeAxis,
    registry: Registry,
    started: bool,
    drive: Option<DriveFrame>,
}

impl Bridge {
    /// Opens the pipe link from the environment.
    pub fn from_env() -> Result<Bridge> {
        Ok(Bridge::over(PipeLink::from_env()?))
    }

    /// Builds a bridge over an explicit link.
    pub fn over(link: PipeLink) -> Bridge {
        Bridge {
            link,
            time: TimeAxis::new(),
            registry: Registry::new(),
            started: false,
            drive: None,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Registers a monitored output, returning its change-callback index.
    pub fn add_output(&mut self, name: &str, width: u32) -> Result<usize> {
        self.registry.add_output(name, width)
    }

    /// Registers a driven input.
    pub fn add_input(&mut self, name: &str, width: u32) {
        self.registry.add_input(name, width)
    }

    /// Flags output `index` as changed; called from the kernel's
    /// value-change callback.
    pub fn mark_changed(&mut self, index: usize) {
        self.registry.mark_changed(index)
    }

    /// Sends the `FROM` header and reads the acknowledgement.
    pub fn announce_inputs(&mut self) -> Result<()> {
        let header = self.registry.from_header()?;
        self.link.send(&header)?;
        self.link.recv()?;
        Ok(())
    }

    /// Sends the `TO` header, reads the acknowledgement, and arms the first
    /// read-only callback plus the pre-scheduled delta callback.
    pub fn announce_outputs<K: SimKernel>(&mut self, kernel: &mut K) -> Result<()> {
        let header = self.registry.to_header()?;
        self.link.send(&header)?;
        self.link.recv()?;
        kernel.schedule(Phase::ReadOnly, 0);
        kernel.schedule(Phase::Delta, 1);
        Ok(())
    }

    /// Runs the callback for `phase`, mapping any failure to the protocol's
    /// terminal behavior: an informational line and a clean finish for a
    /// closed pipe, an error diagnostic and finish for everything else.
    pub fn dispatch<K: SimKernel>(&mut self, phase: Phase, kernel: &mut K) {
        let outcome = match phase {
            Phase::ReadOnly => self.read_only(kernel),
            Phase::Delay => {
                self.delay(kernel);
                Ok(())
            }
            Phase::Delta => self.delta(kernel),
        };
        if let Err(err) = outcome {
            abort(kernel, &err);
        }
    }

    /// The read-only sample phase.
    fn read_only<K: SimKernel>(&mut self, kernel: &mut K) -> Result<()> {
        let first = !self.started;
        if first {
            self.link.send("START")?;
            self.link.recv()?;
            self.started = true;
        }

        self.time.check_coherence(kernel.kernel_time());

        let mut frame = SampleFrame::new(self.time.pli_time())?;
        for index in 0..self.registry.outputs().len() {
            // The flag is consumed even on the forced first push, so a
            // change that fired during initialization is not re-sent.
            let flagged = self.registry.take_changed(index);
            let force = first || flagged;
            if let Some(hexval) = kernel.sample(index, force) {
                let name = self.registry.outputs()[index].name().to_owned();
                frame.push(&name, &hexval)?;
            }
        }
        self.link.send(frame.as_str())?;

        let reply = self.link.recv()?;
        let drive = DriveFrame::parse(&reply)?;
        if let Advance::Delay(delay) = self.time.advance(drive.time()) {
            kernel.schedule(Phase::Delay, delay);
        }
        self.drive = Some(drive);
        Ok(())
    }

    /// The delayed re-entry: the kernel has advanced to the requested time.
    fn delay<K: SimKernel>(&mut self, kernel: &mut K) {
        kernel.schedule(Phase::ReadOnly, 0);
        kernel.schedule(Phase::Delta, 1);
    }

    /// The delta re-entry: apply the saved drive frame and iterate.
    fn delta<K: SimKernel>(&mut self, kernel: &mut K) -> Result<()> {
        if self.time.delta() == 0 {
            // A stale pre-scheduled delta after a time jump.
            return Ok(());
        }
        if let Some(drive) = &self.drive {
            let count = self.registry.inputs().len();
            // Tokens are positional; extra ones are a peer quirk and are
            // ignored.
            for (index, hexval) in drive.values().iter().take(count).enumerate() {
                kernel.drive(index, hexval);
            }
        }
        kernel.schedule(Phase::ReadOnly, 0);
        kernel.schedule(Phase::Delta, 1);
        Ok(())
    }
}

/// Reports a fatal error and asks the kernel to end the simulation.
///
/// The binding layers use this for registration-time failures as well, so
/// every fatal path produces the same transcript lines.
pub fn abort<K: SimKernel>(kernel: &mut K, err: &Error) {
    match err {
        Error::TransportClosed => info!("{}", err),
        _ => log::error!("{}", err),
    }
    kernel.finish();
}
