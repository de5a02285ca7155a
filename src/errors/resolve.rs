use alloc::{boxed::Box, string::String, vec::Vec};

use super::{inject::InjectErrorKind, instantiate::InstantiateErrorKind};
use crate::any::TypeInfo;

#[derive(thiserror::Error, Debug)]
pub enum ResolveErrorKind {
    #[error("No bean named `{name}` is registered")]
    NotFound { name: String },
    #[error("Cyclic dependency detected: {}", .chain.join(" -> "))]
    CyclicDependency { chain: Vec<String> },
    #[error("Construction of bean `{name}` failed")]
    Construction {
        name: String,
        #[source]
        source: InstantiateErrorKind,
    },
    #[error("Injection of dependency `{dependency}` into bean `{name}` failed")]
    Injection {
        name: String,
        dependency: String,
        #[source]
        source: Box<ResolveErrorKind>,
    },
    #[error("Assignment of dependency `{dependency}` into bean `{name}` failed")]
    Assignment {
        name: String,
        dependency: String,
        #[source]
        source: InjectErrorKind,
    },
    #[error("Incorrect bean type. Actual: {actual:?}, expected: {expected:?}")]
    IncorrectType { expected: TypeInfo, actual: TypeInfo },
}
