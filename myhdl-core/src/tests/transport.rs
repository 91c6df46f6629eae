//! Transport framing and environment wiring.

use std::env;

use libc::c_int;

use crate::error::Error;
use crate::tests::link_pair;
use crate::transport::{PipeLink, FROM_PIPE_ENV, MAX_LINE, TO_PIPE_ENV};

#[test]
fn frames_round_trip() {
    let (mut link, mut peer) = link_pair();
    link.send("START").unwrap();
    assert_eq!(peer.hear().unwrap(), "START");
    peer.say("OK");
    assert_eq!(link.recv().unwrap(), "OK");
}

#[test]
fn oversized_sends_are_rejected() {
    let (mut link, _peer) = link_pair();
    let frame = "x".repeat(MAX_LINE);
    match link.send(&frame) {
        Err(Error::TransportOverflow(len)) => assert_eq!(len, MAX_LINE),
        other => panic!("expected overflow, got {:?}", other),
    }
}

#[test]
fn peer_eof_is_transport_closed() {
    let (mut link, mut peer) = link_pair();
    peer.hang_up();
    match link.recv() {
        Err(Error::TransportClosed) => {}
        other => panic!("expected closed transport, got {:?}", other),
    }
}

#[test]
fn pipe_env_is_parsed_or_fatal() {
    // One test on purpose: the environment is process-wide.
    env::remove_var(TO_PIPE_ENV);
    env::remove_var(FROM_PIPE_ENV);
    match PipeLink::from_env() {
        Err(Error::MissingPipeEnv(var)) => assert_eq!(var, TO_PIPE_ENV),
        other => panic!("expected missing env, got {:?}", other),
    }

    env::set_var(TO_PIPE_ENV, "4");
    env::set_var(FROM_PIPE_ENV, "banana");
    match PipeLink::from_env() {
        Err(Error::MissingPipeEnv(var)) => assert_eq!(var, FROM_PIPE_ENV),
        other => panic!("expected missing env, got {:?}", other),
    }

    let mut fds = [0 as c_int; 2];
    unsafe { assert_eq!(libc::pipe(fds.as_mut_ptr()), 0) };
    env::set_var(TO_PIPE_ENV, fds[1].to_string());
    env::set_var(FROM_PIPE_ENV, fds[0].to_string());
    PipeLink::from_env().unwrap();
    env::remove_var(TO_PIPE_ENV);
    env::remove_var(FROM_PIPE_ENV);
}
