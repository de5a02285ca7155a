use alloc::string::String;
use core::any::Any;

use crate::{any::TypeInfo, errors::InjectErrorKind, naming, utils::thread_safety::RcAnyThreadSafety};

/// Stores an already-resolved dependency into one field of a freshly
/// constructed bean.
pub type AssignFn = fn(&mut dyn Any, RcAnyThreadSafety) -> Result<(), InjectErrorKind>;

/// One field marked for injection: the declared dependency type and the
/// setter that assigns the resolved instance into the field.
///
/// Usually produced by [`component!`](crate::component); the parts are public
/// so hand-rolled [`TypeEntry`](crate::TypeEntry) values can build their own.
#[derive(Clone, Copy, Debug)]
pub struct Injector {
    dependency: fn() -> TypeInfo,
    assign: AssignFn,
}

impl Injector {
    #[inline]
    #[must_use]
    pub const fn from_parts(dependency: fn() -> TypeInfo, assign: AssignFn) -> Self {
        Self { dependency, assign }
    }

    /// Type info of the declared dependency.
    #[inline]
    #[must_use]
    pub fn dependency(&self) -> TypeInfo {
        (self.dependency)()
    }

    /// Bean name the dependency resolves under, derived from its declared
    /// type with the default naming rule. The marker itself carries no name
    /// payload.
    #[must_use]
    pub fn bean_name(&self) -> String {
        naming::default_bean_name(&self.dependency())
    }

    #[inline]
    pub(crate) fn assign(&self, target: &mut dyn Any, dependency: RcAnyThreadSafety) -> Result<(), InjectErrorKind> {
        (self.assign)(target, dependency)
    }
}
