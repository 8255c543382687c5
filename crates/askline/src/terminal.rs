//! Terminal access: where lines come from and where prompts go.
//!
//! [`TerminalIO`] abstracts over the console so the prompt loop can be
//! driven by a scripted [`MockTerminal`] in tests. [`LineSource`] sits on
//! top and turns raw reads into trimmed lines.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::InputError;

/// Abstraction over terminal I/O for testability.
pub trait TerminalIO: Send + Sync {
    /// Write a prompt to stdout without a trailing newline.
    fn write_prompt(&self, prompt: &str) -> io::Result<()>;

    /// Write an error notice line to stderr.
    fn write_notice(&self, notice: &str) -> io::Result<()>;

    /// Write a re-prompt cue to stderr without a trailing newline.
    fn write_cue(&self, cue: &str) -> io::Result<()>;

    /// Read one raw line, including its terminator.
    ///
    /// Returns `None` at end of input.
    fn read_line(&self) -> io::Result<Option<String>>;
}

/// Real terminal I/O.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealTerminal;

impl TerminalIO for RealTerminal {
    fn write_prompt(&self, prompt: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(prompt.as_bytes())?;
        out.flush()
    }

    fn write_notice(&self, notice: &str) -> io::Result<()> {
        writeln!(io::stderr().lock(), "{}", notice)
    }

    fn write_cue(&self, cue: &str) -> io::Result<()> {
        let mut err = io::stderr().lock();
        err.write_all(cue.as_bytes())?;
        err.flush()
    }

    fn read_line(&self) -> io::Result<Option<String>> {
        read_lossy_line(&mut io::stdin().lock())
    }
}

/// Read one line, replacing bytes that are not UTF-8 with U+FFFD.
///
/// A garbled line then fails conversion and is re-prompted, rather than
/// failing the read.
fn read_lossy_line(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    let read = reader.read_until(b'\n', &mut buf)?;
    Ok((read > 0).then(|| String::from_utf8_lossy(&buf).into_owned()))
}

/// Supplies one trimmed line per call.
#[derive(Debug)]
pub struct LineSource<T: TerminalIO = RealTerminal> {
    terminal: Arc<T>,
}

impl LineSource<RealTerminal> {
    /// Read from the process's stdin.
    pub fn stdin() -> Self {
        Self::new(RealTerminal)
    }
}

impl<T: TerminalIO> LineSource<T> {
    pub fn new(terminal: T) -> Self {
        Self {
            terminal: Arc::new(terminal),
        }
    }

    /// The underlying terminal.
    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    /// Block until a line is available and return it trimmed.
    ///
    /// The result may be empty; callers decide what emptiness means.
    /// End of input is [`InputError::Closed`].
    pub fn next_line(&self) -> Result<String, InputError> {
        match self.terminal.read_line()? {
            Some(line) => Ok(line.trim().to_string()),
            None => Err(InputError::Closed),
        }
    }
}

impl<T: TerminalIO> Clone for LineSource<T> {
    fn clone(&self) -> Self {
        Self {
            terminal: Arc::clone(&self.terminal),
        }
    }
}

/// Something written to a [`MockTerminal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Prompt(String),
    Notice(String),
    Cue(String),
}

/// Mock terminal for testing prompts.
///
/// Replays scripted responses in order and records everything written.
/// Once the script runs out, reads report end of input.
#[derive(Debug, Default)]
pub struct MockTerminal {
    responses: Vec<String>,
    /// Index of the next response to return.
    response_index: AtomicUsize,
    output: Mutex<Vec<Output>>,
}

impl MockTerminal {
    /// Create a mock terminal that returns the given responses in sequence.
    pub fn with_responses(responses: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            responses: responses.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Create a mock terminal that returns a single response.
    pub fn with_response(response: impl Into<String>) -> Self {
        Self::with_responses([response.into()])
    }

    /// Create a mock that is already at end of input.
    pub fn eof() -> Self {
        Self::default()
    }

    /// Everything written so far, in order.
    pub fn output(&self) -> Vec<Output> {
        self.lock_output().clone()
    }

    /// Prompts written so far.
    pub fn prompts(&self) -> Vec<String> {
        self.filter_output(|o| match o {
            Output::Prompt(s) => Some(s),
            _ => None,
        })
    }

    /// Error notices written so far.
    pub fn notices(&self) -> Vec<String> {
        self.filter_output(|o| match o {
            Output::Notice(s) => Some(s),
            _ => None,
        })
    }

    /// Number of scripted responses not yet read.
    pub fn remaining(&self) -> usize {
        self.responses
            .len()
            .saturating_sub(self.response_index.load(Ordering::SeqCst))
    }

    fn filter_output(&self, f: impl Fn(&Output) -> Option<&String>) -> Vec<String> {
        self.lock_output().iter().filter_map(f).cloned().collect()
    }

    fn lock_output(&self) -> std::sync::MutexGuard<'_, Vec<Output>> {
        self.output.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, output: Output) -> io::Result<()> {
        self.lock_output().push(output);
        Ok(())
    }
}

impl TerminalIO for MockTerminal {
    fn write_prompt(&self, prompt: &str) -> io::Result<()> {
        self.record(Output::Prompt(prompt.to_string()))
    }

    fn write_notice(&self, notice: &str) -> io::Result<()> {
        self.record(Output::Notice(notice.to_string()))
    }

    fn write_cue(&self, cue: &str) -> io::Result<()> {
        self.record(Output::Cue(cue.to_string()))
    }

    fn read_line(&self) -> io::Result<Option<String>> {
        let idx = self.response_index.fetch_add(1, Ordering::SeqCst);
        // Add newline like real read_line does
        Ok(self.responses.get(idx).map(|r| format!("{}\n", r)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_source_trims() {
        let source = LineSource::new(MockTerminal::with_response("  42 \t"));
        assert_eq!(source.next_line().unwrap(), "42");
    }

    #[test]
    fn line_source_keeps_empty_lines() {
        let source = LineSource::new(MockTerminal::with_responses(["", "   "]));
        assert_eq!(source.next_line().unwrap(), "");
        assert_eq!(source.next_line().unwrap(), "");
    }

    #[test]
    fn line_source_eof_is_closed() {
        let source = LineSource::new(MockTerminal::eof());
        assert!(matches!(source.next_line(), Err(InputError::Closed)));
    }

    #[test]
    fn line_source_strips_crlf() {
        let source = LineSource::new(MockTerminal::with_response("yes\r"));
        assert_eq!(source.next_line().unwrap(), "yes");
    }

    #[test]
    fn invalid_utf8_line_is_read_lossily() {
        let mut input: &[u8] = b"\xff\xfe\n42\n";
        let garbled = read_lossy_line(&mut input).unwrap().unwrap();
        assert_eq!(garbled, "\u{FFFD}\u{FFFD}\n");
        assert_eq!(read_lossy_line(&mut input).unwrap().as_deref(), Some("42\n"));
        assert_eq!(read_lossy_line(&mut input).unwrap(), None);
    }

    #[test]
    fn last_line_without_terminator_is_returned() {
        let mut input: &[u8] = b"7";
        assert_eq!(read_lossy_line(&mut input).unwrap().as_deref(), Some("7"));
    }

    #[test]
    fn mock_records_output_in_order() {
        let terminal = MockTerminal::eof();
        terminal.write_prompt("Tell me any number: ").unwrap();
        terminal.write_notice("ERROR: nope").unwrap();
        terminal.write_cue("Try again: ").unwrap();

        assert_eq!(
            terminal.output(),
            vec![
                Output::Prompt("Tell me any number: ".into()),
                Output::Notice("ERROR: nope".into()),
                Output::Cue("Try again: ".into()),
            ]
        );
        assert_eq!(terminal.prompts(), vec!["Tell me any number: "]);
        assert_eq!(terminal.notices(), vec!["ERROR: nope"]);
    }

    #[test]
    fn mock_tracks_remaining_responses() {
        let terminal = MockTerminal::with_responses(["a", "b"]);
        assert_eq!(terminal.remaining(), 2);
        terminal.read_line().unwrap();
        assert_eq!(terminal.remaining(), 1);
        terminal.read_line().unwrap();
        terminal.read_line().unwrap();
        assert_eq!(terminal.remaining(), 0);
    }
}
