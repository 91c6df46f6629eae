//! Wire-protocol framing.
//!
//! Frames are ASCII, whitespace-separated, one per pipe operation. Outbound
//! frames are assembled through [`Line`], a bounded writer that refuses to
//! outgrow the transport buffer instead of truncating.

use crate::error::{Error, Result};
use crate::transport::MAX_LINE;

/// A bounded outbound frame under construction.
///
/// Tokens are appended with a trailing separator each, matching the frame
/// layout the peer expects (`FROM 0 d 4 rst 1 `).
#[derive(Debug)]
pub struct Line {
    buf: String,
}

impl Line {
    pub fn new() -> Line {
        Line { buf: String::new() }
    }

    /// Appends `token` and a separating space.
    pub fn push(&mut self, token: &str) -> Result<()> {
        // One spare byte: the C side of the protocol NUL-terminates in the
        // same fixed buffer.
        if self.buf.len() + token.len() + 1 >= MAX_LINE {
            return Err(Error::TransportOverflow(self.buf.len() + token.len() + 1));
        }
        self.buf.push_str(token);
        self.buf.push(' ');
        Ok(())
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

impl Default for Line {
    fn default() -> Line {
        Line::new()
    }
}

/// The sample frame pushed to the peer on each read-only entry:
/// `<pli_time> [<name> <hexval>]...`.
#[derive(Debug)]
pub struct SampleFrame {
    line: Line,
}

impl SampleFrame {
    pub fn new(pli_time: u64) -> Result<SampleFrame> {
        let mut line = Line::new();
        line.push(&pli_time.to_string())?;
        Ok(SampleFrame { line })
    }

    /// Appends one changed output.
    pub fn push(&mut self, name: &str, hexval: &str) -> Result<()> {
        self.line.push(name)?;
        self.line.push(hexval)
    }

    pub fn as_str(&self) -> &str {
        self.line.as_str()
    }
}

/// A parsed drive frame from the peer: `<myhdl_time> [<hexval>]...`.
///
/// The values are positional against the ordered input registry; the frame
/// is saved across the read-only phase and applied in the following delta
/// phase.
#[derive(Debug)]
pub struct DriveFrame {
    time: u64,
    values: Vec<String>,
}

impl DriveFrame {
    pub fn parse(frame: &str) -> Result<DriveFrame> {
        let mut tokens = frame.split_whitespace();
        let time = tokens
            .next()
            .and_then(|t| t.parse().ok())
            .ok_or_else(|| Error::MalformedFrame(frame.to_owned()))?;
        Ok(DriveFrame {
            time,
            values: tokens.map(|t| t.to_owned()).collect(),
        })
    }

    /// The absolute peer time requested by this frame.
    pub fn time(&self) -> u64 {
        self.time
    }

    /// The positional drive values.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}
