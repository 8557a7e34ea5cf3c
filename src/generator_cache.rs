use dashmap::DashMap;
use proptest::strategy::{SBoxedStrategy, Strategy};

use crate::phonenumberstrategies::errors::InvalidArgument;

/// Compiled `proptest` regex generators keyed by the prepared pattern.
///
/// Building a generator parses the pattern into a regex HIR, which is the
/// expensive part of constructing a strategy; regions sharing the same
/// pattern (NANPA, for instance) reuse a single generator.
#[derive(Debug, Default)]
pub struct GeneratorCache {
    cache: DashMap<String, SBoxedStrategy<String>>,
}

impl GeneratorCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_generator(&self, pattern: &str) -> Result<SBoxedStrategy<String>, InvalidArgument> {
        if let Some(generator) = self.cache.get(pattern) {
            Ok(generator.value().clone())
        } else {
            let entry = self.cache.entry(pattern.to_string()).or_try_insert_with(|| {
                proptest::string::string_regex(pattern)
                    .map(Strategy::sboxed)
                    .map_err(|err| InvalidArgument::InvalidPattern {
                        pattern: pattern.to_string(),
                        reason: err.to_string(),
                    })
            })?;
            Ok(entry.value().clone())
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }
}
