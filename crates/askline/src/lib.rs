//! Typed, re-prompting console input.
//!
//! `askline` reads lines from a terminal, rejects empty answers, converts
//! the text to the requested type and keeps asking until the conversion
//! succeeds.
//!
//! # Quick Start
//!
//! ```no_run
//! use askline::{Prompter, NUMBER, WHOLE_NUMBER};
//!
//! let prompter = Prompter::new();
//! let age = prompter.ask(&WHOLE_NUMBER, "How old are you")?;     // "How old are you: "
//! let price = prompter.number(None)?;                             // "Tell me any number: "
//! let scores = prompter.ask_array(&WHOLE_NUMBER)?;
//! # Ok::<(), askline::InputError>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! Prompter::ask(descriptor, prompt)
//! ├── LineSource        → one trimmed line per read (TerminalIO underneath)
//! ├── ConverterRegistry → descriptor key → conversion function
//! └── Messages          → prompt, notice and cue texts
//! ```
//!
//! Conversion is dispatched through a [`ConverterRegistry`] keyed by
//! [`TypeDescriptor`]. The built-in descriptors ([`WHOLE_NUMBER`],
//! [`NUMBER`], [`DECIMAL`], [`TEXT`], [`CHARACTER`], ...) are always
//! registered; host programs add their own with
//! [`ConverterRegistry::register`] and [`registry::install`] before the
//! first prompt.
//!
//! # Testing
//!
//! [`MockTerminal`] replays scripted answers and records what was written:
//!
//! ```
//! use askline::{MockTerminal, Prompter};
//!
//! let prompter = Prompter::with_terminal(MockTerminal::with_responses(["", "abc", "42"]));
//! assert_eq!(prompter.whole_number(None).unwrap(), 42);
//! assert_eq!(prompter.terminal().notices().len(), 2);
//! ```

mod array;
pub mod convert;
mod descriptor;
mod error;
mod messages;
mod prompt;
mod prompter;
pub mod registry;
pub mod terminal;

pub use descriptor::{
    TypeDescriptor, CHARACTER, DECIMAL, LONG_WHOLE_NUMBER, NUMBER, TEXT, WHOLE_NUMBER,
};
pub use error::{ConversionError, ConversionResult, InputError};
pub use messages::Messages;
pub use prompt::PromptSpec;
pub use prompter::Prompter;
pub use registry::{Converter, ConverterRegistry};
pub use terminal::{LineSource, MockTerminal, Output, RealTerminal, TerminalIO};

pub use bigdecimal::BigDecimal;
