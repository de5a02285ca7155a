#![no_std]

extern crate alloc;

pub(crate) mod any;
pub(crate) mod cache;
pub(crate) mod config;
pub(crate) mod container;
pub(crate) mod definition;
pub(crate) mod errors;
pub(crate) mod injector;
pub(crate) mod macros;
pub(crate) mod naming;
pub(crate) mod registry;
pub(crate) mod scope;

pub mod macros_utils;
pub mod scan;
pub mod utils;

pub use any::TypeInfo;
pub use config::Config;
pub use container::Container;
pub use definition::{BeanDefinition, ConstructorFn};
pub use errors::{InjectErrorKind, InstantiateErrorKind, LoadErrorKind, ResolveErrorKind, ScanErrorKind};
pub use injector::{AssignFn, Injector};
pub use scan::{ComponentMeta, TypeEntry, TypeHandle, TYPE_ENTRIES};
pub use scope::BeanScope;
