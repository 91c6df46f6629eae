//! Frame construction, parsing and diagnostic text.

use crate::error::Error;
use crate::frame::{DriveFrame, Line, SampleFrame};
use crate::registry::Registry;
use crate::transport::MAX_LINE;

#[test]
fn headers_render_like_the_wire_protocol() {
    let mut registry = Registry::new();
    registry.add_input("d", 4);
    registry.add_input("rst", 1);
    registry.add_output("clk", 1).unwrap();
    registry.add_output("q", 4).unwrap();

    assert_eq!(registry.from_header().unwrap(), "FROM 0 d 4 rst 1 ");
    assert_eq!(registry.to_header().unwrap(), "TO 0 clk 1 q 4 ");
}

#[test]
fn empty_headers_still_carry_the_tag() {
    let registry = Registry::new();
    assert_eq!(registry.from_header().unwrap(), "FROM 0 ");
    assert_eq!(registry.to_header().unwrap(), "TO 0 ");
}

#[test]
fn sample_frames_lead_with_the_peer_time() {
    let mut frame = SampleFrame::new(42).unwrap();
    frame.push("q", "1f").unwrap();
    assert_eq!(frame.as_str(), "42 q 1f ");
}

#[test]
fn lines_refuse_to_outgrow_the_buffer() {
    let mut line = Line::new();
    let token = "t".repeat(1000);
    for _ in 0..4 {
        line.push(&token).unwrap();
    }
    let err = line.push(&token).unwrap_err();
    assert!(matches!(err, Error::TransportOverflow(_)));
    assert!(line.as_str().len() < MAX_LINE);
}

#[test]
fn drive_frames_parse_time_and_positional_values() {
    let frame = DriveFrame::parse("5 a 1f 0").unwrap();
    assert_eq!(frame.time(), 5);
    assert_eq!(frame.values(), &["a", "1f", "0"]);

    let bare = DriveFrame::parse("17 ").unwrap();
    assert_eq!(bare.time(), 17);
    assert!(bare.values().is_empty());
}

#[test]
fn garbage_drive_frames_are_malformed() {
    assert!(matches!(DriveFrame::parse(""), Err(Error::MalformedFrame(_))));
    assert!(matches!(
        DriveFrame::parse("soon 1"),
        Err(Error::MalformedFrame(_))
    ));
}

#[test]
fn diagnostics_match_the_simulator_transcript() {
    assert_eq!(
        Error::DuplicateTaskCall("$to_myhdl").to_string(),
        "$to_myhdl called more than once"
    );
    assert_eq!(
        Error::NonZeroStart { task: "$from_myhdl", time: 20 }.to_string(),
        "$from_myhdl should be called at time 0 (called at 20)"
    );
    assert_eq!(
        Error::BadFromArgument("d".to_owned()).to_string(),
        "$from_myhdl argument d should be a reg"
    );
    assert_eq!(Error::TransportClosed.to_string(), "MyHDL simulator down");
}
