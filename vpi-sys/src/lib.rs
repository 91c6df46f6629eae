//! Raw FFI bindings for the Verilog Procedural Interface.
//!
//! The symbols declared here are provided by the hosting simulator when the
//! bridge library is loaded (or, for compiled models, by the model's VPI
//! compatibility shim). Nothing is linked at build time.

mod vpi_user_h;

pub use crate::vpi_user_h::*;
