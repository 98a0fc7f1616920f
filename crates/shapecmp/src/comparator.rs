//! Equality predicates bound to a loaded configuration.

use std::path::Path;

use shapecmp_compare::{
    all_equals, all_equals_same_index, not_all_equals, not_all_equals_same_index, SkipPredicate,
};
use shapecmp_config::{CompareConfig, ConfigError};
use shapecmp_core::{Argument, Result};
use tracing::debug;

/// Runs the equality predicates with the value mode and skip policy of a
/// [`CompareConfig`].
///
/// # Examples
///
/// ```
/// use shapecmp::{Argument, Comparator, CompareConfig, SkipPolicy};
///
/// let comparator = Comparator::new(CompareConfig::new().with_skip(SkipPolicy::SizeIsEmpty));
/// let mut args = [Argument::sequence(["a"]), Argument::Null, Argument::sequence(["a"])];
/// assert!(comparator.all_equals(Some(&mut args)).unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Comparator {
    config: CompareConfig,
}

impl Comparator {
    pub fn new(config: CompareConfig) -> Self {
        Self { config }
    }

    /// Builds a comparator from a TOML or YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist or cannot be parsed.
    pub fn from_file(path: impl AsRef<Path>) -> std::result::Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = CompareConfig::load(path)?;
        debug!(path = %path.display(), ?config, "loaded comparator config");
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// See [`all_equals`](shapecmp_compare::all_equals).
    pub fn all_equals(&self, objects: Option<&mut [Argument]>) -> Result<bool> {
        self.run(|by_value, skip| all_equals(by_value, skip, objects))
    }

    /// See [`not_all_equals`](shapecmp_compare::not_all_equals).
    pub fn not_all_equals(&self, objects: Option<&mut [Argument]>) -> Result<bool> {
        self.run(|by_value, skip| not_all_equals(by_value, skip, objects))
    }

    /// See [`all_equals_same_index`](shapecmp_compare::all_equals_same_index).
    pub fn all_equals_same_index(&self, objects: Option<&mut [Argument]>) -> Result<bool> {
        self.run(|by_value, skip| all_equals_same_index(by_value, skip, objects))
    }

    /// See [`not_all_equals_same_index`](shapecmp_compare::not_all_equals_same_index).
    pub fn not_all_equals_same_index(&self, objects: Option<&mut [Argument]>) -> Result<bool> {
        self.run(|by_value, skip| not_all_equals_same_index(by_value, skip, objects))
    }

    fn run<R>(&self, predicate: impl FnOnce(bool, Option<SkipPredicate<'_>>) -> R) -> R {
        let mut policy = self.config.skip.predicate();
        let skip = policy
            .as_mut()
            .map(|f| f as &mut dyn FnMut(&mut Argument) -> bool);
        predicate(self.config.by_value, skip)
    }
}

impl From<CompareConfig> for Comparator {
    fn from(config: CompareConfig) -> Self {
        Self::new(config)
    }
}
