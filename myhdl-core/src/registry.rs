//! Tables of monitored outputs and driven inputs.
//!
//! Outputs are the HDL signals sampled into the peer (`$to_myhdl`
//! arguments), inputs the registers driven from it (`$from_myhdl`
//! arguments). Entries are appended once, at registration time, and live
//! until simulation exit; their position is the identity used both by the
//! value-change callbacks and by the positional drive protocol.

use crate::error::{Error, Result};
use crate::frame::Line;

/// Upper bound on the number of monitored outputs.
pub const MAX_ARGS: usize = 1024;

/// A monitored output signal.
#[derive(Debug)]
pub struct OutputSignal {
    name: String,
    width: u32,
    changed: bool,
}

impl OutputSignal {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }
}

/// A driven input register.
#[derive(Debug)]
pub struct InputSignal {
    name: String,
    width: u32,
}

impl InputSignal {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }
}

/// The bridge's signal tables.
#[derive(Debug, Default)]
pub struct Registry {
    outputs: Vec<OutputSignal>,
    inputs: Vec<InputSignal>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Appends a monitored output and returns its index, the payload later
    /// handed to the value-change callback.
    pub fn add_output(&mut self, name: &str, width: u32) -> Result<usize> {
        if self.outputs.len() == MAX_ARGS {
            return Err(Error::TooManyArguments(MAX_ARGS));
        }
        self.outputs.push(OutputSignal {
            name: name.to_owned(),
            width,
            changed: false,
        });
        Ok(self.outputs.len() - 1)
    }

    /// Appends a driven input.
    pub fn add_input(&mut self, name: &str, width: u32) {
        self.inputs.push(InputSignal {
            name: name.to_owned(),
            width,
        });
    }

    pub fn outputs(&self) -> &[OutputSignal] {
        &self.outputs
    }

    pub fn inputs(&self) -> &[InputSignal] {
        &self.inputs
    }

    /// Flags output `index` as changed since the last push.
    ///
    /// Idempotent within a kernel event; out-of-range indices are ignored
    /// (a late callback from a signal the table never held).
    pub fn mark_changed(&mut self, index: usize) {
        if let Some(out) = self.outputs.get_mut(index) {
            out.changed = true;
        }
    }

    /// Reads and clears the change flag of output `index`.
    pub fn take_changed(&mut self, index: usize) -> bool {
        let out = &mut self.outputs[index];
        std::mem::replace(&mut out.changed, false)
    }

    /// Renders the `FROM 0 <name> <width> ...` handshake header.
    pub fn from_header(&self) -> Result<String> {
        Self::header("FROM", self.inputs.iter().map(|s| (s.name.as_str(), s.width)))
    }

    /// Renders the `TO 0 <name> <width> ...` handshake header.
    pub fn to_header(&self) -> Result<String> {
        Self::header("TO", self.outputs.iter().map(|s| (s.name.as_str(), s.width)))
    }

    fn header<'a, I>(tag: &str, signals: I) -> Result<String>
    where
        I: Iterator<Item = (&'a str, u32)>,
    {
        let mut line = Line::new();
        line.push(tag)?;
        line.push("0")?;
        for (name, width) in signals {
            line.push(name)?;
            line.push(&width.to_string())?;
        }
        Ok(line.into_string())
    }
}
