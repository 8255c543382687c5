//! Prompt selection.

use crate::error::InputError;
use crate::messages::Messages;

/// Which prompt to show before reading a value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PromptSpec {
    /// Derived from the type's display name ("Tell me any number: ").
    #[default]
    Default,
    /// Caller-supplied text, shown followed by the separator.
    Custom(String),
}

impl PromptSpec {
    pub fn custom(text: impl Into<String>) -> Self {
        Self::Custom(text.into())
    }

    /// Build a prompt spec from a list of optional prompts.
    ///
    /// Zero or one prompt is accepted; more is
    /// [`InputError::InvalidPromptArity`].
    pub fn from_prompts(prompts: &[&str]) -> Result<Self, InputError> {
        match prompts {
            [] => Ok(Self::Default),
            [text] => Ok(Self::custom(*text)),
            _ => Err(InputError::InvalidPromptArity {
                count: prompts.len(),
            }),
        }
    }

    pub(crate) fn render(&self, messages: &Messages, type_name: &str) -> String {
        match self {
            Self::Default => messages.default_prompt(type_name),
            Self::Custom(text) => messages.custom_prompt(text),
        }
    }
}

impl From<Option<&str>> for PromptSpec {
    fn from(prompt: Option<&str>) -> Self {
        prompt.map_or(Self::Default, |text| Self::Custom(text.to_string()))
    }
}

impl From<&str> for PromptSpec {
    fn from(prompt: &str) -> Self {
        Self::custom(prompt)
    }
}

impl From<String> for PromptSpec {
    fn from(prompt: String) -> Self {
        Self::Custom(prompt)
    }
}
