mod inject;
mod instantiate;
mod resolve;
mod scan;

pub use inject::InjectErrorKind;
pub use instantiate::InstantiateErrorKind;
pub use resolve::ResolveErrorKind;
pub use scan::{LoadErrorKind, ScanErrorKind};
