//! The compiled-model binding.
//!
//! Here the HDL kernel's scheduler is absent: the generated model's `main`
//! is the scheduler, and the bridge's read-only and delta branches become
//! plain entry points wrapped around the model's `eval`:
//!
//! ```c
//! myhdl_init(); myhdl_push_outputs();
//! while (!finished) {
//!     myhdl_pull_inputs();
//!     main_time = /* pli_time * 1000 + delta, read back via vpi_get_time */;
//!     model.eval();
//!     myhdl_push_outputs();
//! }
//! ```
//!
//! The host links the `myhdl_inputs[]` / `myhdl_outputs[]` descriptor
//! tables; change detection compares each output against its shadow word
//! instead of relying on kernel callbacks.

mod signal;

pub use self::signal::MyhdlSignal;

use crate::core::{abort, Bridge, Error, Phase, Result, SimKernel};
use crate::functions;
use crate::logger;

use std::ffi::CStr;

extern "C" {
    /// First entry of the null-name-terminated driven-input table.
    static myhdl_inputs: MyhdlSignal;
    /// First entry of the null-name-terminated monitored-output table.
    static myhdl_outputs: MyhdlSignal;
}

/// The kernel seen from inside a compiled model.
#[derive(Debug, Default)]
struct ModelKernel {
    outputs: Vec<*const MyhdlSignal>,
    inputs: Vec<*const MyhdlSignal>,
}

impl SimKernel for ModelKernel {
    fn kernel_time(&mut self) -> u64 {
        functions::sim_time()
    }

    fn sample(&mut self, index: usize, force: bool) -> Option<String> {
        unsafe {
            let sig = &*self.outputs[index];
            if force || signal::changed(sig) {
                signal::store_prev(sig);
                Some(signal::read_hex(sig))
            } else {
                None
            }
        }
    }

    fn drive(&mut self, index: usize, hexval: &str) {
        unsafe { signal::write_hex(&*self.inputs[index], hexval) };
    }

    fn schedule(&mut self, _phase: Phase, _delay: u32) {
        // The host loop re-enters the bridge; there is nothing to arm.
    }

    fn finish(&mut self) {
        functions::finish();
    }
}

struct Cosim {
    bridge: Bridge,
    kernel: ModelKernel,
}

static mut COSIM: Option<Cosim> = None;
static mut INIT_CALLED: bool = false;

unsafe fn signal_table(first: *const MyhdlSignal) -> Vec<*const MyhdlSignal> {
    let mut table = Vec::new();
    let mut sig = first;
    while !(*sig).name.is_null() {
        table.push(sig);
        sig = sig.offset(1);
    }
    table
}

unsafe fn signal_name(sig: *const MyhdlSignal) -> String {
    CStr::from_ptr((*sig).name).to_string_lossy().into_owned()
}

fn fail(err: &Error) {
    abort(&mut ModelKernel::default(), err);
}

fn dispatch(phase: Phase) {
    unsafe {
        if let Some(cosim) = COSIM.as_mut() {
            cosim.bridge.dispatch(phase, &mut cosim.kernel);
        }
    }
}

/// Opens the pipes and runs the handshake. Called once by the model at
/// start.
#[no_mangle]
pub extern "C" fn myhdl_init() {
    if let Err(err) = unsafe { init() } {
        fail(&err);
    }
}

unsafe fn init() -> Result<()> {
    if INIT_CALLED {
        return Err(Error::DuplicateTaskCall("myhdl_init()"));
    }
    INIT_CALLED = true;
    logger::init();

    let mut bridge = Bridge::from_env()?;
    let now = functions::sim_time();
    if now != 0 {
        return Err(Error::NonZeroStart {
            task: "myhdl_init()",
            time: now,
        });
    }

    let mut kernel = ModelKernel::default();
    for sig in signal_table(&myhdl_inputs) {
        bridge.add_input(&signal_name(sig), (*sig).bits as u32);
        kernel.inputs.push(sig);
    }
    for sig in signal_table(&myhdl_outputs) {
        bridge.add_output(&signal_name(sig), (*sig).bits as u32)?;
        kernel.outputs.push(sig);
    }

    bridge.announce_inputs()?;
    bridge.announce_outputs(&mut kernel)?;
    COSIM = Some(Cosim { bridge, kernel });
    Ok(())
}

/// The read-only branch: pushes changed outputs and reads the next drive
/// frame. Called by the model after every `eval`.
#[no_mangle]
pub extern "C" fn myhdl_push_outputs() {
    dispatch(Phase::ReadOnly);
}

/// The delta branch: applies the saved drive values to the input storage.
/// Called by the model before every `eval`.
#[no_mangle]
pub extern "C" fn myhdl_pull_inputs() {
    dispatch(Phase::Delta);
}
