//! The converter registry.
//!
//! A [`ConverterRegistry`] maps descriptor keys to conversion functions.
//! Converters are stored type-erased and recovered by downcasting to the
//! descriptor's value type, so dispatch is a plain map lookup with no
//! per-type branching in the prompt loop.
//!
//! One registry is shared process-wide. It is built once, optionally
//! extended by the host program, and then never changes:
//!
//! ```
//! use askline::{registry, ConverterRegistry, ConversionError, TypeDescriptor};
//!
//! const PERCENT: TypeDescriptor<u8> = TypeDescriptor::new("percent", "percentage", "percentages");
//!
//! let mut converters = ConverterRegistry::with_builtins();
//! converters
//!     .register(PERCENT, |raw| match raw.trim_end_matches('%').parse::<u8>() {
//!         Ok(n) if n <= 100 => Ok(n),
//!         Ok(_) => Err(ConversionError::out_of_range("percentage")),
//!         Err(_) => Err(ConversionError::malformed("percentage")),
//!     })
//!     .unwrap();
//!
//! assert_eq!(converters.convert(&PERCENT, "42%"), Ok(42));
//! ```

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use once_cell::sync::OnceCell;

use crate::convert;
use crate::descriptor::{
    TypeDescriptor, CHARACTER, DECIMAL, LONG_WHOLE_NUMBER, NUMBER, TEXT, WHOLE_NUMBER,
};
use crate::error::{ConversionError, ConversionResult, InputError};

/// A conversion function for values of type `T`.
pub type Converter<T> = Box<dyn Fn(&str) -> ConversionResult<T> + Send + Sync>;

struct Entry {
    value_type: &'static str,
    converter: Box<dyn Any + Send + Sync>,
}

/// Maps type descriptors to conversion functions.
#[derive(Default)]
pub struct ConverterRegistry {
    entries: HashMap<&'static str, Entry>,
}

impl ConverterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in converter.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.insert(WHOLE_NUMBER, |raw| {
            convert::parse_whole::<i32>(raw, WHOLE_NUMBER.name())
        });
        registry.insert(LONG_WHOLE_NUMBER, |raw| {
            convert::parse_whole::<i64>(raw, LONG_WHOLE_NUMBER.name())
        });
        registry.insert(NUMBER, |raw| convert::parse_number(raw, NUMBER.name()));
        registry.insert(DECIMAL, |raw| convert::parse_decimal(raw, DECIMAL.name()));
        registry.insert(TEXT, |raw| convert::parse_text(raw, TEXT.name()));
        registry.insert(CHARACTER, |raw| {
            convert::parse_character(raw, CHARACTER.name())
        });
        registry
    }

    /// Register a converter for a new type.
    ///
    /// Existing entries are never replaced; registering a key twice is an
    /// error.
    pub fn register<T, F>(&mut self, descriptor: TypeDescriptor<T>, f: F) -> Result<(), InputError>
    where
        T: 'static,
        F: Fn(&str) -> ConversionResult<T> + Send + Sync + 'static,
    {
        if self.insert(descriptor, f) {
            Ok(())
        } else {
            Err(InputError::DuplicateConverter {
                key: descriptor.key().to_string(),
            })
        }
    }

    fn insert<T, F>(&mut self, descriptor: TypeDescriptor<T>, f: F) -> bool
    where
        T: 'static,
        F: Fn(&str) -> ConversionResult<T> + Send + Sync + 'static,
    {
        if self.entries.contains_key(descriptor.key()) {
            return false;
        }
        let converter: Converter<T> = Box::new(f);
        self.entries.insert(
            descriptor.key(),
            Entry {
                value_type: std::any::type_name::<T>(),
                converter: Box::new(converter),
            },
        );
        true
    }

    /// Convert `raw` to the descriptor's type.
    ///
    /// A missing key, or a key registered for a different value type, is
    /// [`ConversionError::UnsupportedType`].
    pub fn convert<T: 'static>(
        &self,
        descriptor: &TypeDescriptor<T>,
        raw: &str,
    ) -> ConversionResult<T> {
        let converter = self
            .lookup(descriptor)
            .ok_or_else(|| ConversionError::UnsupportedType {
                key: descriptor.key().to_string(),
            })?;
        converter(raw)
    }

    /// Whether a converter producing `T` is registered for the descriptor.
    pub fn supports<T: 'static>(&self, descriptor: &TypeDescriptor<T>) -> bool {
        self.lookup(descriptor).is_some()
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    fn lookup<T: 'static>(&self, descriptor: &TypeDescriptor<T>) -> Option<&Converter<T>> {
        let entry = self.entries.get(descriptor.key())?;
        let converter = entry.converter.downcast_ref::<Converter<T>>();
        if converter.is_none() {
            tracing::debug!(
                key = descriptor.key(),
                registered = entry.value_type,
                requested = std::any::type_name::<T>(),
                "converter registered for a different value type"
            );
        }
        converter
    }
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.keys()
                    .into_iter()
                    .map(|key| (key, self.entries[key].value_type)),
            )
            .finish()
    }
}

static GLOBAL: OnceCell<ConverterRegistry> = OnceCell::new();

/// Install the process-wide registry.
///
/// Must happen before the first prompt. Fails with
/// [`InputError::RegistryFrozen`] once a registry was installed or
/// [`global`] has been read.
pub fn install(registry: ConverterRegistry) -> Result<(), InputError> {
    let keys = registry.keys();
    GLOBAL
        .set(registry)
        .map_err(|_| InputError::RegistryFrozen)?;
    tracing::debug!(?keys, "installed converter registry");
    Ok(())
}

/// The process-wide registry, built from the built-ins on first use
/// unless [`install`] ran earlier.
pub fn global() -> &'static ConverterRegistry {
    GLOBAL.get_or_init(ConverterRegistry::with_builtins)
}
