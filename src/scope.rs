use core::fmt::{self, Display, Formatter};

/// Lifetime policy of a bean: one shared instance for the container's
/// lifetime, or a fresh instance per request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BeanScope {
    Singleton,
    Prototype,
}

impl BeanScope {
    /// Normalizes a raw scope marker payload.
    ///
    /// The payload is trimmed first. A missing or blank payload yields
    /// [`BeanScope::Singleton`]; exactly `"prototype"` yields
    /// [`BeanScope::Prototype`]; any other value falls back to
    /// [`BeanScope::Singleton`].
    #[must_use]
    pub fn from_marker(raw: Option<&str>) -> Self {
        match raw {
            Some(raw) if raw.trim() == "prototype" => Self::Prototype,
            _ => Self::Singleton,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Singleton)
    }

    #[inline]
    #[must_use]
    pub const fn is_prototype(self) -> bool {
        matches!(self, Self::Prototype)
    }

    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Singleton => "singleton",
            Self::Prototype => "prototype",
        }
    }
}

impl Display for BeanScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
