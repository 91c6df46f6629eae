//! `SimKernel` over the VPI ABI.

use std::ffi::CString;
use std::ptr;

use crate::core::{Phase, SimKernel};
use crate::ffi;
use crate::functions;

use super::tasks;

/// The kernel seen through VPI.
///
/// Argument handles are collected once at registration and indexed by the
/// registry's signal positions afterwards; the kernel owns them for the
/// life of the simulation so there is nothing to re-iterate or free in the
/// callbacks.
#[derive(Debug, Default)]
pub struct VpiKernel {
    outputs: Vec<ffi::vpiHandle>,
    inputs: Vec<ffi::vpiHandle>,
}

impl VpiKernel {
    pub fn new() -> VpiKernel {
        VpiKernel::default()
    }

    pub(crate) fn push_output(&mut self, handle: ffi::vpiHandle) {
        self.outputs.push(handle);
    }

    pub(crate) fn push_input(&mut self, handle: ffi::vpiHandle) {
        self.inputs.push(handle);
    }
}

impl SimKernel for VpiKernel {
    fn kernel_time(&mut self) -> u64 {
        functions::sim_time()
    }

    fn sample(&mut self, index: usize, force: bool) -> Option<String> {
        if !force {
            // Changes are tracked through the value-change callbacks; an
            // unforced sample means the signal did not move.
            return None;
        }
        let mut value_s = ffi::s_vpi_value {
            format: ffi::vpiHexStrVal,
            value: ffi::t_vpi_value_union { str: ptr::null_mut() },
        };
        unsafe { ffi::vpi_get_value(self.outputs[index], &mut value_s) };
        let raw = unsafe { value_s.value.str };
        if raw.is_null() {
            return None;
        }
        let mut hexval = unsafe { std::ffi::CStr::from_ptr(raw) }
            .to_string_lossy()
            .into_owned();
        hexval.make_ascii_lowercase();
        Some(hexval)
    }

    fn drive(&mut self, index: usize, hexval: &str) {
        let hexval = match CString::new(hexval) {
            Ok(c) => c,
            Err(_) => return,
        };
        let mut value_s = ffi::s_vpi_value {
            format: ffi::vpiHexStrVal,
            value: ffi::t_vpi_value_union {
                str: hexval.as_ptr() as *mut ffi::PLI_BYTE8,
            },
        };
        unsafe {
            ffi::vpi_put_value(
                self.inputs[index],
                &mut value_s,
                ptr::null_mut(),
                ffi::vpiNoDelay,
            );
        }
    }

    fn schedule(&mut self, phase: Phase, delay: u32) {
        type CbRtn = extern "C" fn(ffi::p_cb_data) -> ffi::PLI_INT32;
        let (reason, cb_rtn, low): (ffi::PLI_INT32, CbRtn, u32) = match phase {
            Phase::ReadOnly => (ffi::cbReadOnlySynch, tasks::readonly_callback, 0),
            Phase::Delay => (ffi::cbAfterDelay, tasks::delay_callback, delay),
            Phase::Delta => (ffi::cbAfterDelay, tasks::delta_callback, delay),
        };
        let mut time_s = ffi::s_vpi_time {
            type_: ffi::vpiSimTime,
            high: 0,
            low,
            real: 0.0,
        };
        let mut cb_data_s = ffi::s_cb_data {
            reason,
            cb_rtn: Some(cb_rtn),
            obj: ptr::null_mut(),
            time: &mut time_s,
            value: ptr::null_mut(),
            index: 0,
            user_data: ptr::null_mut(),
        };
        unsafe {
            let cb_h = ffi::vpi_register_cb(&mut cb_data_s);
            ffi::vpi_free_object(cb_h);
        }
    }

    fn finish(&mut self) {
        functions::finish();
    }
}
