//! Type descriptors: the tokens that select a converter.
//!
//! A [`TypeDescriptor<T>`] names a registry key and the words used to talk
//! about the type in prompts. The phantom `T` ties the key to the Rust type
//! the converter produces, so a request for `WHOLE_NUMBER` can only ever
//! yield an `i32`.
//!
//! Host programs declare their own descriptors as constants and register a
//! converter for them before the first prompt:
//!
//! ```
//! use askline::TypeDescriptor;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Colour { Red, Green }
//!
//! const COLOUR: TypeDescriptor<Colour> = TypeDescriptor::new("colour", "colour", "colours");
//! assert_eq!(COLOUR.name(), "colour");
//! ```

use std::fmt;
use std::marker::PhantomData;

use bigdecimal::BigDecimal;

/// Identifies the target type of a conversion or prompt request.
pub struct TypeDescriptor<T> {
    key: &'static str,
    name: &'static str,
    plural: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> TypeDescriptor<T> {
    /// Create a descriptor.
    ///
    /// `name` is the singular phrase used in prompts and notices
    /// ("whole number"); `plural` is used by array prompts ("whole numbers").
    pub const fn new(key: &'static str, name: &'static str, plural: &'static str) -> Self {
        Self {
            key,
            name,
            plural,
            _marker: PhantomData,
        }
    }

    /// The registry key.
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Singular display name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Plural display name.
    pub const fn plural(&self) -> &'static str {
        self.plural
    }
}

impl<T> Clone for TypeDescriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypeDescriptor<T> {}

impl<T> fmt::Debug for TypeDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("key", &self.key)
            .field("name", &self.name)
            .field("value_type", &std::any::type_name::<T>())
            .finish()
    }
}

/// 32-bit signed whole number.
pub const WHOLE_NUMBER: TypeDescriptor<i32> =
    TypeDescriptor::new("whole-number", "whole number", "whole numbers");

/// 64-bit signed whole number.
pub const LONG_WHOLE_NUMBER: TypeDescriptor<i64> =
    TypeDescriptor::new("long-whole-number", "whole number", "whole numbers");

/// Double-precision floating point number.
pub const NUMBER: TypeDescriptor<f64> = TypeDescriptor::new("number", "number", "numbers");

/// Arbitrary-precision decimal.
pub const DECIMAL: TypeDescriptor<BigDecimal> =
    TypeDescriptor::new("decimal", "number", "numbers");

/// Free text, returned as typed.
pub const TEXT: TypeDescriptor<String> = TypeDescriptor::new("text", "string", "text strings");

/// Exactly one character.
pub const CHARACTER: TypeDescriptor<char> =
    TypeDescriptor::new("character", "character", "characters");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_keys_are_distinct() {
        let keys = [
            WHOLE_NUMBER.key(),
            LONG_WHOLE_NUMBER.key(),
            NUMBER.key(),
            DECIMAL.key(),
            TEXT.key(),
            CHARACTER.key(),
        ];
        let mut sorted = keys.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), keys.len());
    }

    #[test]
    fn debug_names_value_type() {
        let debug = format!("{:?}", WHOLE_NUMBER);
        assert!(debug.contains("whole-number"));
        assert!(debug.contains("i32"));
    }
}
