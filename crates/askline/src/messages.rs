//! User-visible phrases.
//!
//! Every string the prompt loop prints comes from [`Messages`]. Templates
//! may use `{type}`, `{plural}` and `{index}` placeholders. Each template
//! fills only its own placeholder, once; anything else is printed as is.

/// Prompt and notice texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    default_prompt: String,
    separator: String,
    error_prefix: String,
    empty_notice: String,
    invalid_notice: String,
    retry_cue: String,
    array_amount_prompt: String,
    array_element_prompt: String,
    positive_amount: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            default_prompt: "Tell me any {type}: ".to_string(),
            separator: ": ".to_string(),
            error_prefix: "ERROR: ".to_string(),
            empty_notice: "You didn't enter anything!".to_string(),
            invalid_notice: "That's not a {type}!".to_string(),
            retry_cue: "Try again: ".to_string(),
            array_amount_prompt:
                "Tell me the amount of elements you want in your array of {plural}: ".to_string(),
            array_element_prompt: "Tell me the value you want at element {index}".to_string(),
            positive_amount: "positive amount of elements".to_string(),
        }
    }
}

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prompt shown when no custom prompt is given.
    ///
    /// Default is `"Tell me any {type}: "`.
    pub fn with_default_prompt(mut self, template: impl Into<String>) -> Self {
        self.default_prompt = template.into();
        self
    }

    /// Text appended to custom prompts. Default is `": "`.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Prefix for every error notice. Default is `"ERROR: "`.
    pub fn with_error_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.error_prefix = prefix.into();
        self
    }

    pub fn with_empty_notice(mut self, notice: impl Into<String>) -> Self {
        self.empty_notice = notice.into();
        self
    }

    /// Notice for a value that failed conversion or a constraint.
    ///
    /// Default is `"That's not a {type}!"`.
    pub fn with_invalid_notice(mut self, template: impl Into<String>) -> Self {
        self.invalid_notice = template.into();
        self
    }

    pub fn with_retry_cue(mut self, cue: impl Into<String>) -> Self {
        self.retry_cue = cue.into();
        self
    }

    pub fn with_array_amount_prompt(mut self, template: impl Into<String>) -> Self {
        self.array_amount_prompt = template.into();
        self
    }

    pub fn with_array_element_prompt(mut self, template: impl Into<String>) -> Self {
        self.array_element_prompt = template.into();
        self
    }

    /// What a non-positive element count is "not". Default is
    /// `"positive amount of elements"`.
    pub fn with_positive_amount(mut self, phrase: impl Into<String>) -> Self {
        self.positive_amount = phrase.into();
        self
    }

    pub(crate) fn default_prompt(&self, type_name: &str) -> String {
        self.default_prompt.replace("{type}", type_name)
    }

    pub(crate) fn custom_prompt(&self, custom: &str) -> String {
        format!("{}{}", custom, self.separator)
    }

    pub(crate) fn empty_notice(&self) -> String {
        format!("{}{}", self.error_prefix, self.empty_notice)
    }

    pub(crate) fn invalid_notice(&self, what: &str) -> String {
        format!(
            "{}{}",
            self.error_prefix,
            self.invalid_notice.replace("{type}", what)
        )
    }

    pub(crate) fn retry_cue(&self) -> &str {
        &self.retry_cue
    }

    pub(crate) fn array_amount_prompt(&self, plural: &str) -> String {
        self.array_amount_prompt.replace("{plural}", plural)
    }

    pub(crate) fn array_element_prompt(&self, index: usize) -> String {
        self.array_element_prompt.replace("{index}", &index.to_string())
    }

    pub(crate) fn positive_amount(&self) -> &str {
        &self.positive_amount
    }
}
