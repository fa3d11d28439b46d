use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Console collaborators the wizard depends on: one operation to read a
/// line of user input and one to write a line of output, nothing else.
pub trait Console {
    /// Reads one line of input, without the trailing newline.
    ///
    /// Returns `Ok(None)` when the input stream is closed.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Writes one line of output followed by a newline.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Console over process stdin/stdout.
pub struct StdioConsole;

impl Console for StdioConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buffer = String::new();
        let read = io::stdin().lock().read_line(&mut buffer)?;
        if read == 0 {
            return Ok(None);
        }
        while buffer.ends_with('\n') || buffer.ends_with('\r') {
            buffer.pop();
        }
        Ok(Some(buffer))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{line}")?;
        stdout.flush()
    }
}

/// Console that serves queued input lines and records every output line,
/// so complete sessions can run in tests without a terminal.
///
/// An exhausted input queue reads as a closed stream.
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    outputs: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I>(inputs: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            outputs: Vec::new(),
        }
    }

    /// Output lines recorded so far, in emission order.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// The recorded output joined into one newline-separated transcript.
    pub fn transcript(&self) -> String {
        self.outputs.join("\n")
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.inputs.pop_front())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.outputs.push(line.to_string());
        Ok(())
    }
}
