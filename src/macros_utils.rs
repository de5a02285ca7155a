//! Support items referenced by the expansion of the registration macros.

use alloc::boxed::Box;

use crate::utils::thread_safety::{BoxedAnyThreadSafety, SendSafety, SyncSafety};

/// Boxes a freshly constructed component for the container.
#[inline]
#[must_use]
pub fn boxed_bean<T: SendSafety + SyncSafety + 'static>(bean: T) -> BoxedAnyThreadSafety {
    Box::new(bean)
}
