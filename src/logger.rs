//! A `log` backend that prints through `vpi_printf`.
//!
//! Routing diagnostics through the kernel keeps them in the simulator
//! transcript, interleaved correctly with the kernel's own output. Levels
//! map onto the transcript's conventional prefixes, so
//! `info!("MyHDL simulator down")` prints as `Info: MyHDL simulator down`.

use std::env;
use std::ffi::CString;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::ffi;

/// Environment variable that raises logging to `trace`, echoing every
/// frame exchanged with the peer.
pub const TRAFFIC_DEBUG_ENV: &str = "MYHDL_TRAFFIC_DEBUG";

struct VpiLogger;

static VPI_LOGGER: VpiLogger = VpiLogger;

impl Log for VpiLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let prefix = match record.level() {
            Level::Error => "ERROR: ",
            Level::Warn => "WARNING: ",
            Level::Info => "Info: ",
            Level::Debug | Level::Trace => "",
        };
        let line = format!("{}{}\n", prefix, record.args());
        if let Ok(line) = CString::new(line) {
            unsafe {
                ffi::vpi_printf(b"%s\0".as_ptr() as *const ffi::PLI_BYTE8, line.as_ptr());
            }
        }
    }

    fn flush(&self) {}
}

/// Installs the logger; idempotent across the two registration tasks.
pub fn init() {
    if log::set_logger(&VPI_LOGGER).is_ok() {
        let level = if env::var_os(TRAFFIC_DEBUG_ENV).is_some() {
            LevelFilter::Trace
        } else {
            LevelFilter::Info
        };
        log::set_max_level(level);
    }
}
