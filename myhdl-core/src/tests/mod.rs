//! Bridge tests.
//!
//! The sync machine is exercised against a scripted mock kernel and a real
//! pipe pair, with the peer side running on a helper thread that strictly
//! alternates read and write the way the real peer does.

pub mod frames;
pub mod time;
pub mod transport;
pub mod values;

use std::thread;

use libc::c_int;

use crate::sync::{Phase, SimKernel};
use crate::transport::{PipeLink, MAX_LINE};
use crate::Bridge;

/// A scripted kernel: samples come from a table, drives and schedules are
/// recorded.
#[derive(Debug, Default)]
pub struct MockKernel {
    pub now: u64,
    pub outputs: Vec<String>,
    pub driven: Vec<(usize, String)>,
    pub scheduled: Vec<(Phase, u32)>,
    pub finished: bool,
}

impl MockKernel {
    pub fn with_outputs(values: &[&str]) -> MockKernel {
        MockKernel {
            outputs: values.iter().map(|v| v.to_string()).collect(),
            ..MockKernel::default()
        }
    }

    /// Drains the recorded schedule requests.
    pub fn take_scheduled(&mut self) -> Vec<(Phase, u32)> {
        std::mem::take(&mut self.scheduled)
    }
}

impl SimKernel for MockKernel {
    fn kernel_time(&mut self) -> u64 {
        self.now
    }

    fn sample(&mut self, index: usize, force: bool) -> Option<String> {
        if force {
            Some(self.outputs[index].clone())
        } else {
            None
        }
    }

    fn drive(&mut self, index: usize, hexval: &str) {
        self.driven.push((index, hexval.to_owned()));
    }

    fn schedule(&mut self, phase: Phase, delay: u32) {
        self.scheduled.push((phase, delay));
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}

/// The peer's ends of the two pipes.
#[derive(Debug)]
pub struct PeerEnd {
    rd: c_int,
    wr: c_int,
    hung_up: bool,
}

// The descriptors are plain ints; the peer end moves onto its thread.
unsafe impl Send for PeerEnd {}

impl PeerEnd {
    /// Reads one frame written by the bridge; `None` on EOF.
    pub fn hear(&mut self) -> Option<String> {
        let mut buf = [0u8; MAX_LINE];
        let n = unsafe { libc::read(self.rd, buf.as_mut_ptr() as *mut libc::c_void, MAX_LINE) };
        assert!(n >= 0);
        if n == 0 {
            return None;
        }
        Some(String::from_utf8(buf[..n as usize].to_vec()).unwrap())
    }

    /// Writes one frame toward the bridge.
    pub fn say(&mut self, frame: &str) {
        let n = unsafe {
            libc::write(
                self.wr,
                frame.as_ptr() as *const libc::c_void,
                frame.len(),
            )
        };
        assert_eq!(n as usize, frame.len());
    }

    /// Closes the peer's write end, simulating peer shutdown.
    pub fn hang_up(&mut self) {
        if !self.hung_up {
            unsafe { libc::close(self.wr) };
            self.hung_up = true;
        }
    }
}

impl Drop for PeerEnd {
    fn drop(&mut self) {
        self.hang_up();
        unsafe { libc::close(self.rd) };
    }
}

/// A pipe link wired to an in-process peer end.
pub fn link_pair() -> (PipeLink, PeerEnd) {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut to_peer = [0 as c_int; 2];
    let mut from_peer = [0 as c_int; 2];
    unsafe {
        assert_eq!(libc::pipe(to_peer.as_mut_ptr()), 0);
        assert_eq!(libc::pipe(from_peer.as_mut_ptr()), 0);
    }
    let link = PipeLink::from_raw_fds(from_peer[0], to_peer[1]);
    let peer = PeerEnd {
        rd: to_peer[0],
        wr: from_peer[1],
        hung_up: false,
    };
    (link, peer)
}

/// A bridge wired to an in-process peer over real pipes.
pub fn bridge_pair() -> (Bridge, PeerEnd) {
    let (link, peer) = link_pair();
    (Bridge::over(link), peer)
}

/// Runs the peer side on a thread: for each entry, read one bridge frame
/// and answer it (`None` hangs up instead of answering). Returns everything
/// the bridge wrote.
pub fn run_peer(
    mut peer: PeerEnd,
    replies: Vec<Option<String>>,
) -> thread::JoinHandle<Vec<String>> {
    thread::spawn(move || {
        let mut heard = Vec::new();
        for reply in replies {
            match peer.hear() {
                Some(frame) => heard.push(frame),
                None => break,
            }
            match reply {
                Some(r) => peer.say(&r),
                None => {
                    peer.hang_up();
                    break;
                }
            }
        }
        heard
    })
}

/// Convenience wrapper building the reply script.
pub fn replies(items: &[&str]) -> Vec<Option<String>> {
    items.iter().map(|r| Some(r.to_string())).collect()
}
