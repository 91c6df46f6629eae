//! Standard error type for the cosimulation bridge.
//!

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

/// A fatal bridge error.
///
/// Every variant ends the simulation: the peer is the authority on
/// simulation progression and nothing here is locally recoverable. The
/// binding layer translates `TransportClosed` into an informational
/// "simulator down" message and everything else into an `ERROR` diagnostic,
/// then asks the kernel to finish.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Required pipe environment variable absent or non-numeric.
    #[error("no pipe to the MyHDL simulator ({0} not set to a file descriptor)")]
    MissingPipeEnv(&'static str),
    /// A registration task was invoked a second time.
    #[error("{0} called more than once")]
    DuplicateTaskCall(&'static str),
    /// A registration task was invoked after time 0.
    #[error("{task} should be called at time 0 (called at {time})")]
    NonZeroStart { task: &'static str, time: u64 },
    /// A `$from_myhdl` argument that is not a writable register.
    #[error("$from_myhdl argument {0} should be a reg")]
    BadFromArgument(String),
    /// Too many monitored outputs.
    #[error("$to_myhdl max #args ({0}) exceeded")]
    TooManyArguments(usize),
    /// EOF on the peer pipe: the peer closed its write end.
    #[error("MyHDL simulator down")]
    TransportClosed,
    /// A frame would not fit the fixed transport buffer.
    #[error("frame of {0} bytes exceeds the transport buffer")]
    TransportOverflow(usize),
    /// A peer frame that does not parse as `<time> [<value>]...`.
    #[error("malformed frame from peer: {0:?}")]
    MalformedFrame(String),
    /// An OS-level pipe failure.
    #[error("{0}")]
    Io(#[from] io::Error),
}
