//! The pipe pair shared with the peer simulator.
//!
//! The peer hands the bridge two already-open file descriptors through the
//! environment: `MYHDL_TO_PIPE` is written by the bridge, `MYHDL_FROM_PIPE`
//! is read by it. Traffic is ASCII, one frame per pipe operation, strictly
//! alternating write/read. The descriptors are inherited from the parent
//! process and stay open for the life of the simulation, so they are used
//! raw rather than wrapped in an owning `File`.

use std::env;
use std::io;

use libc::c_int;
use log::trace;

use crate::error::{Error, Result};

/// Fixed transport buffer length in bytes.
///
/// A frame, including its terminating NUL on the C side of the protocol,
/// must fit this buffer. Frames that would not are rejected with
/// [`Error::TransportOverflow`] rather than truncated.
pub const MAX_LINE: usize = 4096;

/// Environment variable naming the bridge-to-peer descriptor.
pub const TO_PIPE_ENV: &str = "MYHDL_TO_PIPE";
/// Environment variable naming the peer-to-bridge descriptor.
pub const FROM_PIPE_ENV: &str = "MYHDL_FROM_PIPE";

/// The unidirectional pipe pair connecting the bridge to the peer.
#[derive(Debug)]
pub struct PipeLink {
    rpipe: c_int,
    wpipe: c_int,
}

impl PipeLink {
    /// Opens the link from the `MYHDL_TO_PIPE` / `MYHDL_FROM_PIPE`
    /// environment variables.
    pub fn from_env() -> Result<PipeLink> {
        let wpipe = fd_from_env(TO_PIPE_ENV)?;
        let rpipe = fd_from_env(FROM_PIPE_ENV)?;
        Ok(PipeLink { rpipe, wpipe })
    }

    /// Wraps a raw descriptor pair directly.
    ///
    /// The caller keeps ownership of the descriptors; the link never closes
    /// them.
    pub fn from_raw_fds(rpipe: c_int, wpipe: c_int) -> PipeLink {
        PipeLink { rpipe, wpipe }
    }

    /// Writes one frame to the peer.
    pub fn send(&mut self, frame: &str) -> Result<()> {
        if frame.len() >= MAX_LINE {
            return Err(Error::TransportOverflow(frame.len()));
        }
        trace!("-> {}", frame);
        let bytes = frame.as_bytes();
        let mut written = 0;
        while written < bytes.len() {
            let n = unsafe {
                libc::write(
                    self.wpipe,
                    bytes[written..].as_ptr() as *const libc::c_void,
                    bytes.len() - written,
                )
            };
            if n < 0 {
                return Err(io::Error::last_os_error().into());
            }
            written += n as usize;
        }
        Ok(())
    }

    /// Reads one frame from the peer.
    ///
    /// An empty read means the peer closed its write end and maps to
    /// [`Error::TransportClosed`]; a read that fills the entire buffer
    /// cannot be proven complete and maps to [`Error::TransportOverflow`].
    pub fn recv(&mut self) -> Result<String> {
        let mut buf = [0u8; MAX_LINE];
        let n = unsafe { libc::read(self.rpipe, buf.as_mut_ptr() as *mut libc::c_void, MAX_LINE) };
        if n < 0 {
            return Err(io::Error::last_os_error().into());
        }
        let n = n as usize;
        if n == 0 {
            return Err(Error::TransportClosed);
        }
        if n == MAX_LINE {
            return Err(Error::TransportOverflow(n));
        }
        let frame = String::from_utf8(buf[..n].to_vec())
            .map_err(|e| Error::MalformedFrame(String::from_utf8_lossy(e.as_bytes()).into_owned()))?;
        trace!("<- {}", frame);
        Ok(frame)
    }
}

fn fd_from_env(var: &'static str) -> Result<c_int> {
    env::var(var)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .ok_or(Error::MissingPipeEnv(var))
}
