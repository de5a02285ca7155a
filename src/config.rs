/// Startup configuration of a [`Container`](crate::Container).
///
/// Carries the scan-root marker value: the dotted package path component
/// discovery starts from. Without it no scanning occurs and the registry
/// stays empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    scan_root: Option<&'static str>,
}

impl Config {
    /// Configuration without a scan root.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { scan_root: None }
    }

    #[inline]
    #[must_use]
    pub const fn with_scan_root(root: &'static str) -> Self {
        Self { scan_root: Some(root) }
    }

    #[inline]
    #[must_use]
    pub const fn scan_root(&self) -> Option<&'static str> {
        self.scan_root
    }
}
