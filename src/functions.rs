//! Thin and safe wrappers for the handful of VPI calls both bindings use.

use std::ffi::CStr;
use std::ptr;

use libc::c_int;

use crate::ffi;

/// Current kernel time as a single 64-bit count of kernel units.
pub fn sim_time() -> u64 {
    let mut time_s = ffi::s_vpi_time {
        type_: ffi::vpiSimTime,
        high: 0,
        low: 0,
        real: 0.0,
    };
    unsafe { ffi::vpi_get_time(ptr::null_mut(), &mut time_s) };
    (u64::from(time_s.high) << 32) | u64::from(time_s.low)
}

/// Integer property of an object.
pub fn get(property: ffi::PLI_INT32, object: ffi::vpiHandle) -> ffi::PLI_INT32 {
    unsafe { ffi::vpi_get(property, object) }
}

/// String property of an object, copied out of the kernel's transient
/// buffer.
pub fn get_str(property: ffi::PLI_INT32, object: ffi::vpiHandle) -> String {
    let raw = unsafe { ffi::vpi_get_str(property, object) };
    if raw.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(raw) }.to_string_lossy().into_owned()
}

/// Asks the kernel to end the simulation.
pub fn finish() {
    unsafe { ffi::vpi_control(ffi::vpiFinish, 1 as c_int) };
}
