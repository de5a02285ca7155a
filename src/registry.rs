use alloc::{
    collections::BTreeMap,
    string::{String, ToString as _},
    vec::Vec,
};
use tracing::debug;

use crate::{definition::BeanDefinition, naming, scan::TypeHandle, scope::BeanScope};

/// Name-keyed map of every bean definition discovered at startup.
/// Populated once, read-only afterwards.
#[derive(Default)]
pub(crate) struct Registry {
    definitions: BTreeMap<String, BeanDefinition>,
}

impl Registry {
    #[inline]
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self {
            definitions: BTreeMap::new(),
        }
    }

    /// Builds the registry from scanned handles, skipping handles without a
    /// component marker. A duplicate bean name replaces the prior entry,
    /// last discovered wins.
    #[must_use]
    pub(crate) fn from_handles(handles: Vec<TypeHandle>) -> Self {
        let mut registry = Self::new();
        for handle in handles {
            let Some(meta) = handle.component else {
                debug!(type_name = handle.type_info.name, "Not a component, skipped");
                continue;
            };

            let name = match meta.name {
                Some(explicit) if !explicit.is_empty() => explicit.to_string(),
                _ => naming::default_bean_name(&handle.type_info),
            };
            let definition = BeanDefinition {
                name: name.clone(),
                type_info: handle.type_info,
                scope: BeanScope::from_marker(meta.scope),
                constructor: meta.constructor,
                injectors: meta.injectors,
            };

            debug!(bean = %name, scope = %definition.scope, "Registered");
            if registry.definitions.insert(name, definition).is_some() {
                debug!("Duplicate bean name, previous definition replaced");
            }
        }

        registry
    }

    #[inline]
    #[must_use]
    pub(crate) fn get(&self, name: &str) -> Option<&BeanDefinition> {
        self.definitions.get(name)
    }

    #[inline]
    #[must_use]
    pub(crate) fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    pub(crate) fn singleton_names(&self) -> impl Iterator<Item = &str> {
        self.definitions
            .values()
            .filter(|definition| definition.is_singleton())
            .map(|definition| definition.name.as_str())
    }
}
