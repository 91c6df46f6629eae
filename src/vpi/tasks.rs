//! System task registration and the kernel callback surface.
//!
//! All bridge state lives in one process-wide instance behind the statics
//! below. The kernel delivers every calltf and callback on its single
//! evaluation thread, and nothing else ever touches the statics, so the
//! accesses are plain `static mut` reads and writes.

use std::ptr;

use crate::core::{abort, Bridge, Error, Phase, Result};
use crate::ffi;
use crate::functions;
use crate::logger;

use super::kernel::VpiKernel;

struct Cosim {
    bridge: Bridge,
    kernel: VpiKernel,
}

static mut COSIM: Option<Cosim> = None;
static mut TO_CALLED: bool = false;
static mut FROM_CALLED: bool = false;

/// The bridge instance, opening the pipes on first use. Both tasks funnel
/// through here, so whichever runs first pays for the setup.
unsafe fn instance() -> Result<&'static mut Cosim> {
    if COSIM.is_none() {
        COSIM = Some(Cosim {
            bridge: Bridge::from_env()?,
            kernel: VpiKernel::new(),
        });
    }
    match COSIM.as_mut() {
        Some(cosim) => Ok(cosim),
        None => unreachable!(),
    }
}

/// Reports a fatal registration or protocol error and stops the kernel.
fn fail(err: &Error) {
    abort(&mut VpiKernel::new(), err);
}

//========================== SYSTEM TASK CALLTFS ==========================

pub(crate) extern "C" fn to_myhdl_calltf(_user_data: *mut ffi::PLI_BYTE8) -> ffi::PLI_INT32 {
    if let Err(err) = unsafe { to_myhdl() } {
        fail(&err);
    }
    0
}

unsafe fn to_myhdl() -> Result<()> {
    if TO_CALLED {
        return Err(Error::DuplicateTaskCall("$to_myhdl"));
    }
    TO_CALLED = true;

    let cosim = instance()?;
    let now = functions::sim_time();
    if now != 0 {
        return Err(Error::NonZeroStart {
            task: "$to_myhdl",
            time: now,
        });
    }

    let systf = ffi::vpi_handle(ffi::vpiSysTfCall, ptr::null_mut());
    let arg_iter = ffi::vpi_iterate(ffi::vpiArgument, systf);
    if !arg_iter.is_null() {
        loop {
            let arg = ffi::vpi_scan(arg_iter);
            if arg.is_null() {
                break;
            }
            let name = functions::get_str(ffi::vpiName, arg);
            let width = functions::get(ffi::vpiSize, arg) as u32;
            let index = cosim.bridge.add_output(&name, width)?;
            register_change_callback(arg, index);
            cosim.kernel.push_output(arg);
        }
    }

    cosim.bridge.announce_outputs(&mut cosim.kernel)
}

pub(crate) extern "C" fn from_myhdl_calltf(_user_data: *mut ffi::PLI_BYTE8) -> ffi::PLI_INT32 {
    if let Err(err) = unsafe { from_myhdl() } {
        fail(&err);
    }
    0
}

unsafe fn from_myhdl() -> Result<()> {
    if FROM_CALLED {
        return Err(Error::DuplicateTaskCall("$from_myhdl"));
    }
    FROM_CALLED = true;

    let cosim = instance()?;
    let now = functions::sim_time();
    if now != 0 {
        return Err(Error::NonZeroStart {
            task: "$from_myhdl",
            time: now,
        });
    }

    let systf = ffi::vpi_handle(ffi::vpiSysTfCall, ptr::null_mut());
    let arg_iter = ffi::vpi_iterate(ffi::vpiArgument, systf);
    if !arg_iter.is_null() {
        loop {
            let arg = ffi::vpi_scan(arg_iter);
            if arg.is_null() {
                break;
            }
            let name = functions::get_str(ffi::vpiName, arg);
            if functions::get(ffi::vpiType, arg) != ffi::vpiReg {
                return Err(Error::BadFromArgument(name));
            }
            let width = functions::get(ffi::vpiSize, arg) as u32;
            cosim.bridge.add_input(&name, width);
            cosim.kernel.push_input(arg);
        }
    }

    cosim.bridge.announce_inputs()
}

//============================== CALLBACKS ================================

/// Installs a value-change callback for one monitored signal. The signal's
/// registry index rides in the user-data pointer itself, so no per-callback
/// payload is allocated.
unsafe fn register_change_callback(signal: ffi::vpiHandle, index: usize) {
    let mut time_s = ffi::s_vpi_time {
        type_: ffi::vpiSuppressTime,
        high: 0,
        low: 0,
        real: 0.0,
    };
    let mut value_s = ffi::s_vpi_value {
        format: ffi::vpiSuppressVal,
        value: ffi::t_vpi_value_union {
            str: ptr::null_mut(),
        },
    };
    let mut cb_data_s = ffi::s_cb_data {
        reason: ffi::cbValueChange,
        cb_rtn: Some(change_callback),
        obj: signal,
        time: &mut time_s,
        value: &mut value_s,
        index: 0,
        user_data: index as *mut ffi::PLI_BYTE8,
    };
    let cb_h = ffi::vpi_register_cb(&mut cb_data_s);
    ffi::vpi_free_object(cb_h);
}

pub(crate) extern "C" fn change_callback(cb_data: ffi::p_cb_data) -> ffi::PLI_INT32 {
    unsafe {
        let index = (*cb_data).user_data as usize;
        if let Some(cosim) = COSIM.as_mut() {
            cosim.bridge.mark_changed(index);
        }
    }
    0
}

fn dispatch(phase: Phase) -> ffi::PLI_INT32 {
    unsafe {
        if let Some(cosim) = COSIM.as_mut() {
            cosim.bridge.dispatch(phase, &mut cosim.kernel);
        }
    }
    0
}

pub(crate) extern "C" fn readonly_callback(_cb_data: ffi::p_cb_data) -> ffi::PLI_INT32 {
    dispatch(Phase::ReadOnly)
}

pub(crate) extern "C" fn delay_callback(_cb_data: ffi::p_cb_data) -> ffi::PLI_INT32 {
    dispatch(Phase::Delay)
}

pub(crate) extern "C" fn delta_callback(_cb_data: ffi::p_cb_data) -> ffi::PLI_INT32 {
    dispatch(Phase::Delta)
}

//============================ REGISTRATION ===============================

/// Registers `$to_myhdl` and `$from_myhdl` with the kernel. Run from
/// `vlog_startup_routines` at load time.
#[no_mangle]
pub extern "C" fn myhdl_register() {
    logger::init();

    let mut tf_data = ffi::s_vpi_systf_data {
        type_: ffi::vpiSysTask,
        sysfunctype: 0,
        tfname: b"$to_myhdl\0".as_ptr() as *const ffi::PLI_BYTE8,
        calltf: Some(to_myhdl_calltf),
        compiletf: None,
        sizetf: None,
        user_data: ptr::null_mut(),
    };
    unsafe { ffi::vpi_register_systf(&mut tf_data) };

    tf_data.tfname = b"$from_myhdl\0".as_ptr() as *const ffi::PLI_BYTE8;
    tf_data.calltf = Some(from_myhdl_calltf);
    unsafe { ffi::vpi_register_systf(&mut tf_data) };
}

#[no_mangle]
#[allow(non_upper_case_globals)]
pub static vlog_startup_routines: [Option<extern "C" fn()>; 2] = [Some(myhdl_register), None];

/// Bootstrap for loaders that exec a single routine instead of walking the
/// standard `vlog_startup_routines` table.
#[no_mangle]
pub extern "C" fn vpi_compat_bootstrap() {
    for routine in vlog_startup_routines.iter() {
        match routine {
            Some(routine) => routine(),
            None => break,
        }
    }
}
