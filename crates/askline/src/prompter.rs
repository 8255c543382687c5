//! The prompt loop.
//!
//! A [`Prompter`] asks for one value at a time and keeps asking until the
//! answer converts. Per request it moves through these states:
//!
//! ```text
//! AwaitingLine ── empty line ─────────────► AwaitingLine   (notice + cue)
//! AwaitingLine ── converts ───────────────► Done           (value returned)
//! AwaitingLine ── recoverable failure ────► AwaitingLine   (notice + cue)
//! AwaitingLine ── unsupported type ───────► Aborted        (error returned)
//! ```
//!
//! End of input also ends the request, with [`InputError::Closed`].

use std::sync::Arc;

use bigdecimal::BigDecimal;

use crate::descriptor::{
    TypeDescriptor, CHARACTER, DECIMAL, LONG_WHOLE_NUMBER, NUMBER, TEXT, WHOLE_NUMBER,
};
use crate::error::{ConversionError, InputError};
use crate::messages::Messages;
use crate::prompt::PromptSpec;
use crate::registry::{self, ConverterRegistry};
use crate::terminal::{LineSource, RealTerminal, TerminalIO};

/// Asks for typed values on a terminal.
///
/// # Example
///
/// ```no_run
/// use askline::{Prompter, WHOLE_NUMBER};
///
/// let prompter = Prompter::new();
/// let age = prompter.ask(&WHOLE_NUMBER, "How old are you")?;
/// let guess = prompter.whole_number(None)?;
/// # Ok::<(), askline::InputError>(())
/// ```
///
/// # Testing
///
/// ```
/// use askline::{Prompter, MockTerminal, WHOLE_NUMBER, PromptSpec};
///
/// let prompter = Prompter::with_terminal(MockTerminal::with_responses(["abc", "42"]));
/// assert_eq!(prompter.ask(&WHOLE_NUMBER, PromptSpec::Default).unwrap(), 42);
/// assert_eq!(prompter.terminal().notices().len(), 1);
/// ```
#[derive(Debug)]
pub struct Prompter<T: TerminalIO = RealTerminal> {
    source: LineSource<T>,
    messages: Messages,
    registry: Option<Arc<ConverterRegistry>>,
}

impl Prompter<RealTerminal> {
    /// Create a prompter on the process's terminal.
    pub fn new() -> Self {
        Self::with_terminal(RealTerminal)
    }
}

impl Default for Prompter<RealTerminal> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TerminalIO> Prompter<T> {
    /// Create a prompter with a custom terminal for testing.
    pub fn with_terminal(terminal: T) -> Self {
        Self {
            source: LineSource::new(terminal),
            messages: Messages::default(),
            registry: None,
        }
    }

    /// Replace the prompt and notice texts.
    pub fn messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Convert through this registry instead of the process-wide one.
    ///
    /// Takes the registry by value or as a shared `Arc`.
    pub fn registry(mut self, registry: impl Into<Arc<ConverterRegistry>>) -> Self {
        self.registry = Some(registry.into());
        self
    }

    /// The underlying terminal.
    pub fn terminal(&self) -> &T {
        self.source.terminal()
    }

    pub(crate) fn texts(&self) -> &Messages {
        &self.messages
    }

    // Resolved per request so a prompter built before `registry::install`
    // still sees the installed registry.
    fn converters(&self) -> &ConverterRegistry {
        match &self.registry {
            Some(converters) => converters,
            None => registry::global(),
        }
    }

    /// Ask until the answer converts to the descriptor's type.
    pub fn ask<V: 'static>(
        &self,
        descriptor: &TypeDescriptor<V>,
        prompt: impl Into<PromptSpec>,
    ) -> Result<V, InputError> {
        self.ask_with(descriptor, prompt, |_| Ok(()))
    }

    /// Like [`ask`](Self::ask), with prompts supplied as a list.
    ///
    /// More than one prompt is [`InputError::InvalidPromptArity`], raised
    /// before anything is written or read.
    pub fn ask_with_prompts<V: 'static>(
        &self,
        descriptor: &TypeDescriptor<V>,
        prompts: &[&str],
    ) -> Result<V, InputError> {
        let prompt = PromptSpec::from_prompts(prompts)?;
        self.ask(descriptor, prompt)
    }

    /// Ask until the answer converts and satisfies `constraint`.
    ///
    /// A refusal message is shown as the invalid-value notice, so
    /// `Err("positive number")` prints `That's not a positive number!`.
    pub fn ask_with<V, F>(
        &self,
        descriptor: &TypeDescriptor<V>,
        prompt: impl Into<PromptSpec>,
        constraint: F,
    ) -> Result<V, InputError>
    where
        V: 'static,
        F: Fn(&V) -> Result<(), String>,
    {
        let rendered = prompt.into().render(&self.messages, descriptor.name());
        self.ask_rendered(descriptor, &rendered, constraint)
    }

    pub(crate) fn ask_rendered<V, F>(
        &self,
        descriptor: &TypeDescriptor<V>,
        prompt: &str,
        constraint: F,
    ) -> Result<V, InputError>
    where
        V: 'static,
        F: Fn(&V) -> Result<(), String>,
    {
        self.terminal().write_prompt(prompt)?;
        let converters = self.converters();

        loop {
            let line = self.read_non_empty()?;
            let attempt = converters.convert(descriptor, &line).and_then(|value| {
                constraint(&value)
                    .map(|()| value)
                    .map_err(|message| ConversionError::Rejected { message })
            });

            match attempt {
                Ok(value) => {
                    tracing::debug!(key = descriptor.key(), "input accepted");
                    return Ok(value);
                }
                Err(ConversionError::UnsupportedType { key }) => {
                    tracing::warn!(%key, "no converter registered, aborting input request");
                    return Err(InputError::unsupported(key));
                }
                Err(reason) => {
                    tracing::debug!(key = descriptor.key(), %reason, "input rejected");
                    let what = match &reason {
                        ConversionError::Rejected { message } => message.as_str(),
                        _ => descriptor.name(),
                    };
                    self.notify(&self.messages.invalid_notice(what))?;
                }
            }
        }
    }

    fn read_non_empty(&self) -> Result<String, InputError> {
        loop {
            let line = self.source.next_line()?;
            if !line.is_empty() {
                return Ok(line);
            }
            self.notify(&self.messages.empty_notice())?;
        }
    }

    fn notify(&self, notice: &str) -> Result<(), InputError> {
        let terminal = self.terminal();
        terminal.write_notice(notice)?;
        terminal.write_cue(self.messages.retry_cue())?;
        Ok(())
    }

    /// Ask for a 32-bit whole number.
    pub fn whole_number(&self, prompt: Option<&str>) -> Result<i32, InputError> {
        self.ask(&WHOLE_NUMBER, prompt)
    }

    /// Ask for a 64-bit whole number.
    pub fn long_whole_number(&self, prompt: Option<&str>) -> Result<i64, InputError> {
        self.ask(&LONG_WHOLE_NUMBER, prompt)
    }

    pub fn number(&self, prompt: Option<&str>) -> Result<f64, InputError> {
        self.ask(&NUMBER, prompt)
    }

    /// Ask for an arbitrary-precision decimal.
    pub fn decimal(&self, prompt: Option<&str>) -> Result<BigDecimal, InputError> {
        self.ask(&DECIMAL, prompt)
    }

    pub fn text(&self, prompt: Option<&str>) -> Result<String, InputError> {
        self.ask(&TEXT, prompt)
    }

    pub fn character(&self, prompt: Option<&str>) -> Result<char, InputError> {
        self.ask(&CHARACTER, prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::{MockTerminal, Output};

    fn prompter(responses: &[&str]) -> Prompter<MockTerminal> {
        Prompter::with_terminal(MockTerminal::with_responses(responses.iter().copied()))
    }

    #[test]
    fn returns_first_valid_value() {
        let p = prompter(&["42"]);
        assert_eq!(p.ask(&WHOLE_NUMBER, PromptSpec::Default).unwrap(), 42);
        assert!(p.terminal().notices().is_empty());
    }

    #[test]
    fn default_prompt_names_type() {
        let p = prompter(&["x"]);
        p.character(None).unwrap();
        assert_eq!(p.terminal().prompts(), vec!["Tell me any character: "]);
    }

    #[test]
    fn custom_prompt_gets_separator() {
        let p = prompter(&["Ada"]);
        assert_eq!(p.text(Some("Your name")).unwrap(), "Ada");
        assert_eq!(p.terminal().prompts(), vec!["Your name: "]);
    }

    #[test]
    fn empty_then_invalid_then_valid() {
        let p = prompter(&["", "abc", "42"]);
        assert_eq!(p.whole_number(None).unwrap(), 42);
        assert_eq!(
            p.terminal().output(),
            vec![
                Output::Prompt("Tell me any whole number: ".into()),
                Output::Notice("ERROR: You didn't enter anything!".into()),
                Output::Cue("Try again: ".into()),
                Output::Notice("ERROR: That's not a whole number!".into()),
                Output::Cue("Try again: ".into()),
            ]
        );
    }

    #[test]
    fn prompt_is_not_repeated_on_retry() {
        let p = prompter(&["  ", "1.5.", "nope", "2.5"]);
        assert_eq!(p.number(None).unwrap(), 2.5);
        assert_eq!(p.terminal().prompts().len(), 1);
        assert_eq!(p.terminal().notices().len(), 3);
    }

    #[test]
    fn character_rejects_long_input() {
        let p = prompter(&["ab", "c"]);
        assert_eq!(p.character(None).unwrap(), 'c');
        assert_eq!(
            p.terminal().notices(),
            vec!["ERROR: That's not a character!"]
        );
    }

    #[test]
    fn overflow_is_retried() {
        let p = prompter(&["99999999999", "-5"]);
        assert_eq!(p.whole_number(None).unwrap(), -5);
        assert_eq!(p.terminal().notices().len(), 1);
    }

    #[test]
    fn long_whole_number_accepts_wide_values() {
        let p = prompter(&["9223372036854775807"]);
        assert_eq!(p.long_whole_number(None).unwrap(), i64::MAX);
    }

    #[test]
    fn text_keeps_inner_whitespace() {
        let p = prompter(&["  hello   world  "]);
        assert_eq!(p.text(None).unwrap(), "hello   world");
    }

    #[test]
    fn decimal_input() {
        let p = prompter(&["one", "12.500"]);
        let value = p.decimal(None).unwrap();
        assert_eq!(value, "12.5".parse::<BigDecimal>().unwrap());
        assert_eq!(p.terminal().prompts(), vec!["Tell me any number: "]);
    }

    #[test]
    fn constraint_refusal_is_retried() {
        let p = prompter(&["-3", "7"]);
        let value = p
            .ask_with(&WHOLE_NUMBER, PromptSpec::Default, |n| {
                if *n > 0 {
                    Ok(())
                } else {
                    Err("positive whole number".to_string())
                }
            })
            .unwrap();
        assert_eq!(value, 7);
        assert_eq!(
            p.terminal().notices(),
            vec!["ERROR: That's not a positive whole number!"]
        );
    }

    #[test]
    fn unsupported_type_aborts_without_reading_more() {
        const UNKNOWN: TypeDescriptor<u8> = TypeDescriptor::new("unknown", "thing", "things");

        let p = prompter(&["1", "2", "3"]);
        let result = p.ask(&UNKNOWN, PromptSpec::Default);
        assert!(matches!(
            result,
            Err(InputError::UnsupportedType { ref key }) if key == "unknown"
        ));
        assert_eq!(p.terminal().remaining(), 2);
        assert!(p.terminal().notices().is_empty());
    }

    #[test]
    fn too_many_prompts_fails_before_output() {
        let p = prompter(&["1"]);
        let result = p.ask_with_prompts(&WHOLE_NUMBER, &["first", "second"]);
        assert!(matches!(
            result,
            Err(InputError::InvalidPromptArity { count: 2 })
        ));
        assert!(p.terminal().output().is_empty());
        assert_eq!(p.terminal().remaining(), 1);
    }

    #[test]
    fn single_prompt_in_list_is_used() {
        let p = prompter(&["3"]);
        assert_eq!(p.ask_with_prompts(&WHOLE_NUMBER, &["Pick"]).unwrap(), 3);
        assert_eq!(p.terminal().prompts(), vec!["Pick: "]);
    }

    #[test]
    fn end_of_input_is_closed() {
        let p = prompter(&["", "x"]);
        assert!(matches!(p.whole_number(None), Err(InputError::Closed)));
    }

    #[test]
    fn custom_registry_is_used() {
        const YES_NO: TypeDescriptor<bool> = TypeDescriptor::new("yes-no", "yes or no", "answers");

        let mut converters = ConverterRegistry::new();
        converters
            .register(YES_NO, |raw| match raw.to_lowercase().as_str() {
                "y" | "yes" => Ok(true),
                "n" | "no" => Ok(false),
                _ => Err(ConversionError::malformed("yes or no")),
            })
            .unwrap();
        let converters = Arc::new(converters);

        let p = prompter(&["maybe", "Yes"]).registry(Arc::clone(&converters));
        assert!(p.ask(&YES_NO, "Continue").unwrap());
        assert_eq!(p.terminal().notices(), vec!["ERROR: That's not a yes or no!"]);

        // builtins are not in this registry
        let p = prompter(&["1"]).registry(converters);
        assert!(matches!(
            p.whole_number(None),
            Err(InputError::UnsupportedType { .. })
        ));
    }

    #[test]
    fn custom_messages() {
        let messages = Messages::new()
            .with_default_prompt("{type}? ")
            .with_error_prefix("")
            .with_retry_cue("> ");
        let p = prompter(&["", "ok"]).messages(messages);
        assert_eq!(p.text(None).unwrap(), "ok");
        assert_eq!(
            p.terminal().output(),
            vec![
                Output::Prompt("string? ".into()),
                Output::Notice("You didn't enter anything!".into()),
                Output::Cue("> ".into()),
            ]
        );
    }
}
