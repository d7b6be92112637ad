use std::sync::LazyLock;

use indexmap::IndexMap;
use thiserror::Error;
use veneer_variants::{Descriptor, Overrides, Selections, ValidationError};

use crate::{ModuleOptions, theme};

/// An error constructing or querying a [`Registry`].
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("descriptor `{component}` failed validation: {source}")]
    Invalid {
        component: String,
        #[source]
        source: ValidationError,
    },

    #[error("unknown component `{component}`")]
    UnknownComponent { component: String },
}

/// Every built-in component descriptor, expanded from one set of
/// [`ModuleOptions`] and validated once at construction.
#[derive(Debug, Clone)]
pub struct Registry {
    components: IndexMap<String, Descriptor>,
}

static DEFAULT_REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    Registry::new(&ModuleOptions::default()).expect("built-in descriptors validate")
});

/// The registry built from [`ModuleOptions::default`].
pub fn default_registry() -> &'static Registry {
    &DEFAULT_REGISTRY
}

impl Registry {
    /// Builds and validates all built-in descriptors against the
    /// given options.
    pub fn new(options: &ModuleOptions) -> Result<Self, RegistryError> {
        let mut registry = Self {
            components: IndexMap::new(),
        };

        registry.insert("separator", theme::separator(options))?;
        registry.insert("alert", theme::alert(options))?;
        registry.insert("badge", theme::badge(options))?;
        registry.insert("toast", theme::toast(options))?;

        Ok(registry)
    }

    /// Registers a descriptor under `name`, validating it first.
    /// Replaces any previous descriptor with the same name.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        descriptor: Descriptor,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        descriptor
            .validate()
            .map_err(|source| RegistryError::Invalid {
                component: name.clone(),
                source,
            })?;
        self.components.insert(name, descriptor);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Descriptor> {
        self.components.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    /// Resolves a component's selections to per-slot class strings.
    pub fn resolve(
        &self,
        name: &str,
        selections: &Selections,
        overrides: Option<&Overrides>,
    ) -> Result<IndexMap<String, String>, RegistryError> {
        let descriptor = self
            .get(name)
            .ok_or_else(|| RegistryError::UnknownComponent {
                component: name.to_owned(),
            })?;

        Ok(descriptor.resolve(selections, overrides))
    }
}
