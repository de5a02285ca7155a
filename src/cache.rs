use alloc::{collections::BTreeMap, string::String};

use crate::utils::thread_safety::RcAnyThreadSafety;

/// Name-keyed store of constructed singleton instances, populated lazily on
/// first request.
pub(crate) struct Cache {
    map: BTreeMap<String, RcAnyThreadSafety>,
}

impl Cache {
    #[inline]
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self { map: BTreeMap::new() }
    }

    #[must_use]
    pub(crate) fn get(&self, name: &str) -> Option<RcAnyThreadSafety> {
        self.map.get(name).cloned()
    }

    #[inline]
    pub(crate) fn insert(&mut self, name: String, dependency: RcAnyThreadSafety) -> Option<RcAnyThreadSafety> {
        self.map.insert(name, dependency)
    }
}
