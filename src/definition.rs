use alloc::string::String;

use crate::{
    any::TypeInfo, errors::InstantiateErrorKind, injector::Injector, scope::BeanScope,
    utils::thread_safety::BoxedAnyThreadSafety,
};

/// Zero-argument construction step of a bean.
pub type ConstructorFn = fn() -> Result<BoxedAnyThreadSafety, InstantiateErrorKind>;

/// Construction metadata of one discovered component: the name the bean is
/// requested under, its backing type, its scope, and how to build and wire an
/// instance. Immutable once the registry is populated.
pub struct BeanDefinition {
    pub(crate) name: String,
    pub(crate) type_info: TypeInfo,
    pub(crate) scope: BeanScope,
    pub(crate) constructor: ConstructorFn,
    pub(crate) injectors: &'static [Injector],
}

impl BeanDefinition {
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn type_info(&self) -> TypeInfo {
        self.type_info
    }

    #[inline]
    #[must_use]
    pub fn scope(&self) -> BeanScope {
        self.scope
    }

    #[inline]
    #[must_use]
    pub fn is_singleton(&self) -> bool {
        self.scope.is_singleton()
    }

    #[inline]
    #[must_use]
    pub fn is_prototype(&self) -> bool {
        self.scope.is_prototype()
    }
}
