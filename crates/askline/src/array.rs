//! Array input: ask for a count, then for each element.

use bigdecimal::BigDecimal;

use crate::descriptor::{TypeDescriptor, CHARACTER, DECIMAL, NUMBER, TEXT, WHOLE_NUMBER};
use crate::error::InputError;
use crate::prompt::PromptSpec;
use crate::terminal::TerminalIO;
use crate::Prompter;

impl<T: TerminalIO> Prompter<T> {
    /// Ask how many elements to collect, then ask for each one.
    ///
    /// The count must be a positive whole number. Elements are prompted
    /// as "Tell me the value you want at element {i}", counting from 1.
    pub fn ask_array<V: 'static>(
        &self,
        descriptor: &TypeDescriptor<V>,
    ) -> Result<Vec<V>, InputError> {
        let amount = self.ask_amount(descriptor.plural())?;
        tracing::debug!(key = descriptor.key(), amount, "collecting array");

        (1..=amount)
            .map(|index| {
                let prompt = PromptSpec::Custom(self.texts().array_element_prompt(index));
                self.ask(descriptor, prompt)
            })
            .collect()
    }

    /// Ask for a positive element count.
    pub fn ask_amount(&self, plural: &str) -> Result<usize, InputError> {
        let texts = self.texts();
        let prompt = texts.array_amount_prompt(plural);
        let amount = self.ask_rendered(&WHOLE_NUMBER, &prompt, |n| {
            if *n >= 1 {
                Ok(())
            } else {
                Err(texts.positive_amount().to_string())
            }
        })?;
        // positive by the constraint above
        Ok(amount as usize)
    }

    pub fn whole_number_array(&self) -> Result<Vec<i32>, InputError> {
        self.ask_array(&WHOLE_NUMBER)
    }

    pub fn number_array(&self) -> Result<Vec<f64>, InputError> {
        self.ask_array(&NUMBER)
    }

    pub fn decimal_array(&self) -> Result<Vec<BigDecimal>, InputError> {
        self.ask_array(&DECIMAL)
    }

    pub fn text_array(&self) -> Result<Vec<String>, InputError> {
        self.ask_array(&TEXT)
    }

    pub fn character_array(&self) -> Result<Vec<char>, InputError> {
        self.ask_array(&CHARACTER)
    }
}
