//! The linked signal descriptor and its width-bucketed accessors.
//!
//! The generated model exports two descriptor arrays; each entry points at
//! the model's storage for one signal plus a shadow word used for change
//! detection. Storage is bucketed the way compiled models lay signals out:
//! one unsigned scalar of 8, 16, 32 or 64 bits, or a little-endian array of
//! 32-bit words beyond that.

use std::slice;

use libc::{c_char, c_int, c_void};

use crate::core::util::{hex_to_words, mask_width, word_count, words_to_hex};

/// One linked signal descriptor (`myhdl_signal` on the C side). The arrays
/// are terminated by an entry with a null `name`.
#[repr(C)]
#[derive(Debug)]
pub struct MyhdlSignal {
    pub name: *const c_char,
    pub bits: c_int,
    pub datap: *mut c_void,
    pub prevp: *mut c_void,
}

/// True when the model value differs from the shadow copy.
pub(crate) unsafe fn changed(sig: &MyhdlSignal) -> bool {
    let bits = sig.bits as u32;
    if bits <= 8 {
        *(sig.datap as *const u8) != *(sig.prevp as *const u8)
    } else if bits <= 16 {
        *(sig.datap as *const u16) != *(sig.prevp as *const u16)
    } else if bits <= 32 {
        *(sig.datap as *const u32) != *(sig.prevp as *const u32)
    } else if bits <= 64 {
        *(sig.datap as *const u64) != *(sig.prevp as *const u64)
    } else {
        let words = word_count(bits);
        slice::from_raw_parts(sig.datap as *const u32, words)
            != slice::from_raw_parts(sig.prevp as *const u32, words)
    }
}

/// Copies the model value into the shadow.
pub(crate) unsafe fn store_prev(sig: &MyhdlSignal) {
    let bits = sig.bits as u32;
    if bits <= 8 {
        *(sig.prevp as *mut u8) = *(sig.datap as *const u8);
    } else if bits <= 16 {
        *(sig.prevp as *mut u16) = *(sig.datap as *const u16);
    } else if bits <= 32 {
        *(sig.prevp as *mut u32) = *(sig.datap as *const u32);
    } else if bits <= 64 {
        *(sig.prevp as *mut u64) = *(sig.datap as *const u64);
    } else {
        let words = word_count(bits);
        slice::from_raw_parts_mut(sig.prevp as *mut u32, words)
            .copy_from_slice(slice::from_raw_parts(sig.datap as *const u32, words));
    }
}

/// Renders the model value as lowercase hex.
pub(crate) unsafe fn read_hex(sig: &MyhdlSignal) -> String {
    let bits = sig.bits as u32;
    if bits <= 8 {
        format!("{:x}", *(sig.datap as *const u8))
    } else if bits <= 16 {
        format!("{:x}", *(sig.datap as *const u16))
    } else if bits <= 32 {
        format!("{:x}", *(sig.datap as *const u32))
    } else if bits <= 64 {
        format!("{:x}", *(sig.datap as *const u64))
    } else {
        words_to_hex(slice::from_raw_parts(sig.datap as *const u32, word_count(bits)))
    }
}

/// Parses a hex value into the model storage, masked to the declared
/// width.
pub(crate) unsafe fn write_hex(sig: &MyhdlSignal, hexval: &str) {
    let bits = sig.bits as u32;
    if bits <= 64 {
        let value = u64::from_str_radix(hexval, 16).unwrap_or(0);
        let value = mask_width(value, bits);
        if bits <= 8 {
            *(sig.datap as *mut u8) = value as u8;
        } else if bits <= 16 {
            *(sig.datap as *mut u16) = value as u16;
        } else if bits <= 32 {
            *(sig.datap as *mut u32) = value as u32;
        } else {
            *(sig.datap as *mut u64) = value;
        }
    } else {
        let words = slice::from_raw_parts_mut(sig.datap as *mut u32, word_count(bits));
        hex_to_words(hexval, words);
        let top_bits = bits % 32;
        if top_bits != 0 {
            let last = words.len() - 1;
            words[last] &= (1u32 << top_bits) - 1;
        }
    }
}
