use alloc::vec::Vec;
use tracing::{debug, error};

use crate::{
    any::TypeInfo,
    definition::ConstructorFn,
    errors::{LoadErrorKind, ScanErrorKind},
    injector::Injector,
};

pub use linkme::{self, distributed_slice};

/// Link-time table of every scannable type, keyed by its declaring package
/// path. Populated by [`component!`](crate::component) and
/// [`scanned_type!`](crate::scanned_type).
#[distributed_slice]
pub static TYPE_ENTRIES: [TypeEntry];

/// One registered type artifact.
pub struct TypeEntry {
    /// Dotted path of the package the type is declared under.
    pub package: &'static str,
    /// Simple type name, identifies the artifact when loading fails.
    pub type_name: &'static str,
    /// Resolves the entry to a usable type handle.
    pub load: fn() -> Result<TypeHandle, LoadErrorKind>,
}

/// A loadable type found under a scan root.
///
/// Carries component metadata only for types marked as components; the
/// scanner returns every handle at the location and leaves the filtering to
/// registry population.
#[derive(Debug)]
pub struct TypeHandle {
    pub(crate) type_info: TypeInfo,
    pub(crate) component: Option<ComponentMeta>,
}

impl TypeHandle {
    /// Handle of a type without a component marker.
    #[must_use]
    pub fn plain(type_info: TypeInfo) -> Self {
        Self {
            type_info,
            component: None,
        }
    }

    /// Handle of a type carrying a component marker.
    #[must_use]
    pub fn component(type_info: TypeInfo, meta: ComponentMeta) -> Self {
        Self {
            type_info,
            component: Some(meta),
        }
    }

    #[inline]
    #[must_use]
    pub fn type_info(&self) -> TypeInfo {
        self.type_info
    }

    #[inline]
    #[must_use]
    pub fn is_component(&self) -> bool {
        self.component.is_some()
    }
}

/// Component marker payload.
#[derive(Debug)]
pub struct ComponentMeta {
    /// Explicit bean name; empty or missing falls back to the default
    /// naming rule.
    pub name: Option<&'static str>,
    /// Raw scope payload, normalized at definition time.
    pub scope: Option<&'static str>,
    pub constructor: ConstructorFn,
    pub injectors: &'static [Injector],
}

/// Resolves a dotted scan root to the type handles declared directly under
/// it.
///
/// A root nothing was declared under yields an empty set, not an error.
/// Subpackages are not traversed: an entry under `a.b.c` is not found when
/// scanning `a.b`.
///
/// # Errors
/// Returns [`ScanErrorKind::Load`] and aborts the whole scan if any matching
/// entry fails to load.
pub(crate) fn scan(root: &str) -> Result<Vec<TypeHandle>, ScanErrorKind> {
    let mut handles = Vec::new();
    for entry in TYPE_ENTRIES.iter() {
        if entry.package != root {
            continue;
        }

        match (entry.load)() {
            Ok(handle) => {
                debug!(
                    type_name = handle.type_info.name,
                    component = handle.is_component(),
                    "Loaded"
                );
                handles.push(handle);
            }
            Err(err) => {
                let err = ScanErrorKind::Load {
                    type_name: entry.type_name,
                    source: err,
                };
                error!("{}", err);
                return Err(err);
            }
        }
    }

    Ok(handles)
}
