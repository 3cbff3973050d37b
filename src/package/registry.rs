//! Dependency declarations and their reverse index.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Registry of declared package dependencies.
///
/// Holds, for every declared package, its direct dependencies in declaration
/// order, and a reverse index from a dependency name to the packages that
/// declared it:
///
/// ```text
/// declare("foo", ["bar", "baz"])
///   dependencies = { foo: [bar, baz] }
///   dependents   = { bar: [foo], baz: [foo] }
/// ```
///
/// The reverse index is append-only. Redeclaring a package replaces its
/// dependency list but leaves the old reverse entries in place.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DependencyRegistry {
    #[serde(default)]
    dependencies: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    dependents: BTreeMap<String, Vec<String>>,
}

impl DependencyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare (or redeclare) the direct dependencies of `name`.
    pub fn declare<I, S>(&mut self, name: &str, dependencies: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let dependencies: Vec<String> = dependencies.into_iter().map(Into::into).collect();

        for dependency in &dependencies {
            self.dependents
                .entry(dependency.clone())
                .or_default()
                .push(name.to_string());
        }

        if let Some(previous) = self.dependencies.insert(name.to_string(), dependencies) {
            log::debug!("Replaced dependencies of {}: {:?}", name, previous);
        }
    }

    /// Declared dependencies of `name`, empty if never declared.
    pub fn dependencies_of(&self, name: &str) -> &[String] {
        self.dependencies.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Packages that declared `name` as a dependency, stale entries included.
    pub fn dependents_of(&self, name: &str) -> &[String] {
        self.dependents.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}
